/**
 * Citydesk - Main Entry Point
 *
 * Sets up logging and the tokio runtime, then hands control to eframe.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use citydesk::egui_app::{theme, views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,citydesk=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Network tasks run here; the UI thread only polls their results.
    let runtime = tokio::runtime::Runtime::new()?;
    let state = AppState::new(Config::load(), runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Citydesk",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CitydeskApp { state, _runtime: runtime }))
        }),
    )?;

    Ok(())
}

struct CitydeskApp {
    state: AppState,
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for CitydeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_debug_panel(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
