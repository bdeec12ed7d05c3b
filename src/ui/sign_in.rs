// Sign-in page

use crate::session::SignInForm;
use crate::ui::components::{labeled_input, primary_button};
use eframe::egui;

/// Render the sign-in page
/// Returns true when the user asked to sign in
pub fn render_sign_in(ui: &mut egui::Ui, form: &mut SignInForm, loading: bool) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading(egui::RichText::new("Agent Marketplace").size(28.0).strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Sign in to manage your agents").weak());
        ui.add_space(24.0);

        ui.group(|ui| {
            ui.set_max_width(360.0);
            ui.vertical(|ui| {
                labeled_input(ui, "Email", "you@example.com", &mut form.email, false);

                ui.label(egui::RichText::new("Password").strong().size(13.0));
                ui.add_space(4.0);
                let password = ui.add(
                    egui::TextEdit::singleline(&mut form.password)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.add_space(16.0);

                let label = if loading { "Signing in..." } else { "Sign In" };
                if primary_button(ui, label, !loading).clicked() {
                    submit = true;
                }
            });
        });
    });

    submit && !loading
}
