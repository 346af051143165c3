use eframe::egui;

use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RadarMapApp {
    pub state: ViewState,
}

impl RadarMapApp {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }
}

impl eframe::App for RadarMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: sample counts ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: polar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::radar_plot(ui, &self.state);
        });
    }
}
