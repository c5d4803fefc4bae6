use eframe::egui;

use crate::egui_app::debug::{DebugCategory, DebugLevel};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render_debug_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.strong("Diagnostics");
            ui.label(format!("Entries: {}", state.debug_logger.count()));

            if ui.button("Clear Logs").clicked() {
                state.debug_logger.clear();
            }

            ui.separator();
            ui.label("Filter:");
            ui.selectable_value(&mut state.debug_filter_category, None, "All");
            for category in DebugCategory::ALL {
                ui.selectable_value(&mut state.debug_filter_category, Some(category), category.label());
            }
        });

        ui.separator();

        let entries = match state.debug_filter_category {
            Some(category) => state.debug_logger.get_entries_by_category(category),
            None => state.debug_logger.get_entries(),
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(220.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in entries.iter().rev().take(500).rev() {
                    ui.colored_label(level_color(entry.level), entry.to_string());
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            let errors = state.debug_logger.get_entries_by_level(DebugLevel::Error).len();
            let warns = state.debug_logger.get_entries_by_level(DebugLevel::Warn).len();
            ui.colored_label(colors::ERROR, format!("Errors: {}", errors));
            ui.colored_label(colors::WARNING, format!("Warnings: {}", warns));
        });
    });
}

fn level_color(level: DebugLevel) -> egui::Color32 {
    match level {
        DebugLevel::Error => colors::ERROR,
        DebugLevel::Warn => colors::WARNING,
        DebugLevel::Info => colors::SUCCESS,
        DebugLevel::Debug => colors::TEXT_SECONDARY,
        DebugLevel::Trace => colors::MUTED,
    }
}
