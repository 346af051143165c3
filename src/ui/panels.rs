use eframe::egui::{Color32, RichText, Ui};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

/// Sample counts; hovering lists the malformed lines that were skipped.
pub fn status_bar(ui: &mut Ui, state: &ViewState) {
    ui.horizontal(|ui: &mut Ui| {
        let summary = state.summary();

        if state.report.malformed.is_empty() {
            ui.label(summary);
            return;
        }

        let details = state
            .report
            .malformed
            .iter()
            .map(|skipped| skipped.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        ui.label(RichText::new(summary).color(Color32::YELLOW))
            .on_hover_text(details);
    });
}
