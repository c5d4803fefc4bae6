use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(360.0);
            ui.heading(egui::RichText::new("Register").color(colors::TEXT_LIGHT));
            ui.add_space(12.0);

            let form = &mut state.registration;

            if let Some(error) = form.error() {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(8.0);
            }

            let mut submit = false;

            egui::Grid::new("register_form")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Username:");
                    ui.add(egui::TextEdit::singleline(&mut form.username).hint_text("required"));
                    ui.end_row();

                    ui.colored_label(colors::TEXT_SECONDARY, "Password:");
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("required"),
                    );
                    submit |= password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.end_row();
                });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let button = egui::Button::new(egui::RichText::new("Register").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(120.0, 32.0));
                submit |= ui.add_enabled(form.can_submit(), button).clicked();

                if form.is_in_flight() {
                    ui.spinner();
                }
            });

            if submit {
                form.submit();
            }
        });
    });
}
