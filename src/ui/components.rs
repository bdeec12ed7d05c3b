// Reusable UI components
// Buttons, labeled inputs and the notice overlay

use crate::notice::{NoticeQueue, NoticeVariant};
use eframe::egui;
use std::time::Instant;

/// Render a primary action button, disabled while `enabled` is false
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(enabled, egui::Button::new(egui::RichText::new(text).strong()))
}

/// Render a secondary (outline) button
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Button::new(text).fill(egui::Color32::TRANSPARENT))
}

/// Render a label above a text input bound to `value`
pub fn labeled_input(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    multiline: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong().size(13.0));
    ui.add_space(4.0);
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(value)
    };
    let response = ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));
    ui.add_space(12.0);
    response
}

/// Render live notices in the bottom-right corner
/// Expired notices are pruned first; a repaint is scheduled for the next expiry
pub fn render_notices(ctx: &egui::Context, notices: &mut NoticeQueue) {
    let now = Instant::now();
    notices.prune(now);
    if notices.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("notice_overlay"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for notice in notices.active() {
                let accent = match notice.variant {
                    NoticeVariant::Default => ui.visuals().strong_text_color(),
                    NoticeVariant::Destructive => ui.visuals().error_fg_color,
                };

                let mut frame = egui::Frame::popup(ui.style());
                if notice.variant == NoticeVariant::Destructive {
                    frame.stroke = egui::Stroke::new(1.0, accent);
                }

                frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&notice.title).strong().color(accent));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(notice.id);
                            }
                        });
                    });
                    if !notice.description.is_empty() {
                        ui.label(egui::RichText::new(&notice.description).size(13.0));
                    }
                });
                ui.add_space(8.0);
            }
        });

    if let Some(id) = dismissed {
        notices.dismiss(id);
    }

    if let Some(wait) = notices.next_expiry(now) {
        ctx.request_repaint_after(wait);
    }
}
