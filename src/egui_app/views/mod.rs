use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::Route;

pub mod register_view;
pub mod city_actions_view;
pub mod city_view;
pub mod debug_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(theme::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Citydesk").size(18.0).strong());
                ui.add_space(12.0);
                ui.colored_label(colors::TEXT_SECONDARY, state.router.current().path());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if state.auth.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::SUCCESS, "● Signed in");
                    } else {
                        ui.colored_label(colors::TEXT_SECONDARY, "○ No session");
                    }

                    if ui.button("Debug").clicked() {
                        state.debug_view_expanded = !state.debug_view_expanded;
                    }
                });
            });
        });
}

pub fn render_debug_panel(ctx: &egui::Context, state: &mut AppState) {
    if !state.debug_view_expanded {
        return;
    }

    egui::TopBottomPanel::bottom("debug_panel")
        .frame(theme::debug_panel_frame())
        .resizable(true)
        .show(ctx, |ui| debug_view::render_debug_panel(ui, state));
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(24));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.router.current() {
            Route::Register => register_view::render(ui, state),
            Route::CityActions => city_actions_view::render(ui, state),
            Route::City(_) => city_view::render(ui, state),
        });
}
