// Create-agent page
// Binds the listing form to inputs and reports submit/cancel intents

use crate::listing::{CreateAgentForm, ListingField};
use crate::ui::components::{labeled_input, primary_button, secondary_button};
use eframe::egui;

/// User intent raised by the create-agent page this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing to do
    None,
    /// Submit the draft
    Submit,
    /// Leave without saving
    Cancel,
}

/// Render the create-agent page
pub fn render_create_agent(ui: &mut egui::Ui, form: &mut CreateAgentForm) -> FormAction {
    let mut action = FormAction::None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_max_width(640.0);
            ui.add_space(16.0);
            ui.heading(egui::RichText::new("Create New Agent").size(28.0).strong());
            ui.add_space(24.0);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Agent Details").size(18.0).strong());
                    ui.label(
                        egui::RichText::new("Fill in the details below to create a new AI agent.")
                            .weak(),
                    );
                    ui.add_space(16.0);

                    for field in ListingField::ALL {
                        let response = labeled_input(
                            ui,
                            field.label(),
                            field.placeholder(),
                            form.field_mut(field),
                            field.is_multiline(),
                        );
                        // Enter in a single-line input submits, like a native form
                        if !field.is_multiline()
                            && response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            action = FormAction::Submit;
                        }
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let loading = form.is_loading();
                        let label = if loading { "Creating..." } else { "Create Agent" };
                        if primary_button(ui, label, !loading).clicked() {
                            action = FormAction::Submit;
                        }
                        ui.add_space(12.0);
                        if secondary_button(ui, "Cancel").clicked() {
                            action = FormAction::Cancel;
                        }
                    });
                    ui.add_space(8.0);
                });
            });
        });

    action
}
