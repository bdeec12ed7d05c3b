// Dashboard sidebar
// Renders the navigation model and reports which entry was clicked

use crate::navigation::{sidebar_items, NavigationItem};
use eframe::egui;

/// Render the left sidebar
/// Returns the route of the clicked entry, if any
pub fn render_sidebar(ctx: &egui::Context, current_path: &str) -> Option<&'static str> {
    let mut clicked = None;

    egui::SidePanel::left("dashboard_sidebar")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(24.0);
            for item in sidebar_items() {
                if render_nav_row(ui, item, item.is_active(current_path)) {
                    clicked = Some(item.href);
                }
                ui.add_space(4.0);
            }
        });

    clicked
}

/// Render one navigation row; returns true when clicked
fn render_nav_row(ui: &mut egui::Ui, item: &NavigationItem, is_active: bool) -> bool {
    let accent = ui.visuals().selection.stroke.color;
    let text_color = if is_active {
        accent
    } else {
        ui.visuals().weak_text_color()
    };

    // Frame draws the background behind the content
    let mut frame = egui::Frame::none();
    frame.rounding = egui::Rounding::same(8.0);
    frame.inner_margin = egui::Margin::symmetric(12.0, 8.0);
    if is_active {
        frame.fill = ui.visuals().selection.bg_fill.linear_multiply(0.25);
    }

    let row = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(item.icon.glyph()).color(text_color));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(item.title).size(14.0).color(text_color));
        });
    });

    let row_rect = row.response.rect;
    let interact = ui.interact(
        row_rect,
        ui.id().with(("nav_row", item.href)),
        egui::Sense::click(),
    );

    // Hover outline only; active rows already carry a fill
    if interact.hovered() && !is_active {
        let hover = ui.visuals().widgets.hovered.bg_fill;
        ui.painter().rect_stroke(
            row_rect,
            egui::Rounding::same(8.0),
            egui::Stroke::new(1.0, hover),
        );
    }

    interact.clicked()
}
