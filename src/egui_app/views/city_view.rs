use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::CityViewState;
use crate::shared::City;

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_TEXT: &str = "City not found.";

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("← Back").clicked() {
        state.router.back();
        return;
    }
    ui.add_space(12.0);

    match state.city_detail.state() {
        CityViewState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(colors::TEXT_LIGHT, LOADING_TEXT);
            });
        }
        CityViewState::Loaded(city) => {
            theme::card_frame().show(ui, |ui| {
                ui.heading(egui::RichText::new("City Details").color(colors::TEXT_LIGHT));
                ui.separator();
                render_city(ui, city);
            });
        }
        CityViewState::NotFound => {
            theme::card_frame().show(ui, |ui| {
                ui.heading(egui::RichText::new("City Details").color(colors::TEXT_LIGHT));
                ui.separator();
                ui.colored_label(colors::TEXT_SECONDARY, NOT_FOUND_TEXT);
            });
        }
    }
}

fn render_city(ui: &mut egui::Ui, city: &City) {
    ui.label(egui::RichText::new("City Information").strong().color(colors::ACCENT));
    ui.add_space(8.0);

    egui::Grid::new("city_fields")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for (label, value) in city.display_rows() {
                ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(format!("{}:", label)).strong());
                ui.colored_label(colors::TEXT_LIGHT, value);
                ui.end_row();
            }
        });
}
