mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::ChartPaneApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chart Pane – CSV Visualizer",
        options,
        Box::new(move |_cc| Ok(Box::new(ChartPaneApp::new(&config)))),
    )
}
