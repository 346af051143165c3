mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Result;
use app::RadarMapApp;
use config::{LoaderConfig, PlotStyle};
use eframe::egui;
use state::ViewState;

fn main() -> Result<()> {
    env_logger::init();

    // Load before opening a window so a missing file never shows an empty chart.
    let report = data::loader::load_samples(&LoaderConfig::default())?;

    let style = PlotStyle::default();
    let title = style.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(style.window_size)
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    let state = ViewState::new(report, style);

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(RadarMapApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer window: {e}"))
}
