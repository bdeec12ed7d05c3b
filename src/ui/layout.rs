// Main dashboard layout
// Handles the header, sidebar, page area and the pre-session screens

use crate::listing::CreateAgentForm;
use crate::navigation::{active_item, routes};
use crate::session::User;
use crate::ui::components::{primary_button, secondary_button};
use crate::ui::create_agent::{render_create_agent, FormAction};
use crate::ui::sidebar::render_sidebar;
use eframe::egui;

/// User intent raised by the dashboard this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Nothing to do
    None,
    /// Go to a route
    Navigate(&'static str),
    /// Submit the create-agent draft
    SubmitListing,
    /// Sign out
    Logout,
}

/// Render the signed-in dashboard
/// Includes header, sidebar and the page for `current_path`
pub fn render_dashboard(
    ctx: &egui::Context,
    user: &User,
    current_path: &str,
    create_form: Option<&mut CreateAgentForm>,
) -> DashboardAction {
    let mut action = DashboardAction::None;

    if render_header(ctx, user) {
        action = DashboardAction::Logout;
    }

    if let Some(href) = render_sidebar(ctx, current_path) {
        action = DashboardAction::Navigate(href);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        let page_action = match (current_path, create_form) {
            (routes::CREATE_AGENT, Some(form)) => match render_create_agent(ui, form) {
                FormAction::Submit => DashboardAction::SubmitListing,
                FormAction::Cancel => DashboardAction::Navigate(routes::MY_AGENTS),
                FormAction::None => DashboardAction::None,
            },
            (routes::MY_AGENTS, _) => render_my_agents(ui),
            (path, _) => render_section(ui, path),
        };
        if page_action != DashboardAction::None {
            action = page_action;
        }
    });

    action
}

/// Render the top bar with the signed-in user
/// Returns true when logout was clicked
fn render_header(ctx: &egui::Context, user: &User) -> bool {
    let mut logout = false;

    egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Agent Marketplace").strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if secondary_button(ui, "Log out").clicked() {
                    logout = true;
                }
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(format!("{} tokens", user.token_balance))
                        .monospace()
                        .weak(),
                );
                ui.add_space(12.0);
                ui.label(egui::RichText::new(&user.name).strong());
            });
        });
        ui.add_space(6.0);
    });

    logout
}

/// Render the listings overview page
fn render_my_agents(ui: &mut egui::Ui) -> DashboardAction {
    let mut action = DashboardAction::None;

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("My Agents").size(28.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if primary_button(ui, "Create Agent", true).clicked() {
                action = DashboardAction::Navigate(routes::CREATE_AGENT);
            }
        });
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(16.0);
    ui.label(egui::RichText::new("Agents you list on the marketplace appear here.").weak());

    action
}

/// Render a sidebar section page, or a not-found page for unknown routes
fn render_section(ui: &mut egui::Ui, path: &str) -> DashboardAction {
    let mut action = DashboardAction::None;

    match active_item(path) {
        Some(item) => {
            ui.heading(egui::RichText::new(item.title).size(28.0).strong());
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(16.0);
            ui.label(egui::RichText::new(section_blurb(item.href)).weak());
        }
        None => {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading(egui::RichText::new("Page not found").size(24.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(path).monospace().weak());
                ui.add_space(16.0);
                if secondary_button(ui, "Back to overview").clicked() {
                    action = DashboardAction::Navigate(routes::DASHBOARD);
                }
            });
        }
    }

    action
}

fn section_blurb(href: &str) -> &'static str {
    match href {
        routes::DASHBOARD => "A summary of your marketplace activity.",
        routes::PAYMENTS => "Payouts and charges for your account.",
        routes::ORDERS => "Orders placed for your agents.",
        routes::API_KEYS => "Keys used to call your agents programmatically.",
        routes::INTEGRATIONS => "Connect your agents to other services.",
        routes::SETTINGS => "Account and profile preferences.",
        _ => "",
    }
}

/// Render the screen shown until the session has been rehydrated
pub fn render_loading(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Loading session...").weak());
        });
    });
}
