use crate::config::PlotStyle;
use crate::data::model::LoadReport;
use crate::data::polar::{self, PolarGrid};

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Everything the chart needs, computed once from the loaded samples.
pub struct ViewState {
    /// Loaded samples and the lines that were dropped.
    pub report: LoadReport,

    /// Samples projected onto the plot plane, file order.
    pub points: Vec<[f64; 2]>,

    /// Rings and spokes sized to the samples.
    pub grid: PolarGrid,

    pub style: PlotStyle,
}

impl ViewState {
    pub fn new(report: LoadReport, style: PlotStyle) -> Self {
        let points = polar::project(&report.samples);
        let grid = PolarGrid::for_samples(&report.samples, style.spoke_step_degrees);
        Self {
            report,
            points,
            grid,
            style,
        }
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        let mut text = format!("{} samples plotted", self.points.len());
        if self.report.lines_without_separator > 0 {
            text.push_str(&format!(
                ", {} lines without separator",
                self.report.lines_without_separator
            ));
        }
        if !self.report.malformed.is_empty() {
            text.push_str(&format!(
                ", {} malformed lines skipped",
                self.report.malformed.len()
            ));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MalformedLinePolicy;
    use crate::data::loader::load_reader;

    #[test]
    fn one_point_per_valid_line() {
        let report = load_reader(
            "0,10\n# header\n90,oops\n180,30\n".as_bytes(),
            MalformedLinePolicy::Skip,
        )
        .unwrap();
        let state = ViewState::new(report, PlotStyle::default());

        assert_eq!(state.points.len(), 2);
        assert!(state.grid.outer_radius() >= 30.0);
        assert_eq!(
            state.summary(),
            "2 samples plotted, 1 lines without separator, 1 malformed lines skipped"
        );
    }
}
