use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(420.0);
            ui.heading(egui::RichText::new("City Actions").color(colors::TEXT_LIGHT));
            ui.add_space(8.0);

            if state.auth.is_authenticated() {
                ui.colored_label(colors::SUCCESS, "Session active");
            } else {
                ui.colored_label(colors::WARNING, "No active session, requests will be rejected");
            }
            ui.add_space(16.0);

            let mut open = false;
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "City id:");
                let input = ui.add(
                    egui::TextEdit::singleline(&mut state.city_id_input)
                        .hint_text("12 or /cities/12")
                        .desired_width(120.0),
                );
                open |= input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                open |= ui.button("Open").clicked();
            });
            if open {
                state.open_city_from_input();
            }

            ui.add_space(16.0);
            if ui.button("Log out").clicked() {
                state.logout();
            }
        });
    });
}
