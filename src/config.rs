use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color;

/// Input file, resolved against the process working directory.
pub const DEFAULT_INPUT_PATH: &str = "veriler.txt";

pub const CHART_TITLE: &str = "Robot Radar Map";

// ---------------------------------------------------------------------------
// Loader configuration
// ---------------------------------------------------------------------------

/// What to do with a line that has a separator but does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Log a warning, drop the line and keep loading.
    #[default]
    Skip,
    /// Stop loading and fail the whole run; nothing is plotted.
    Abort,
}

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub input_path: PathBuf,
    pub malformed_lines: MalformedLinePolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            malformed_lines: MalformedLinePolicy::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart style
// ---------------------------------------------------------------------------

/// Fixed presentation of the polar scatter chart.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Square window, logical pixels (8 x 8 units at 100 px each).
    pub window_size: [f32; 2],
    pub title: String,
    pub title_size: f32,
    pub marker_color: Color32,
    /// Marker radius in logical pixels.
    pub marker_radius: f32,
    pub grid_color: Color32,
    pub label_color: Color32,
    /// Angle between labelled spokes, degrees.
    pub spoke_step_degrees: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            window_size: [800.0, 800.0],
            title: CHART_TITLE.to_string(),
            title_size: 16.0,
            marker_color: color::marker_color(),
            marker_radius: 1.8,
            grid_color: color::grid_color(),
            label_color: color::label_color(),
            spoke_step_degrees: 45.0,
        }
    }
}
