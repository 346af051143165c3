use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, PlotUi, Points, Text};

use crate::data::polar::circle;
use crate::state::ViewState;

const RING_SEGMENTS: usize = 128;

/// Direction along which ring radii are labelled, degrees.
const RING_LABEL_DEGREES: f64 = 22.5;

// ---------------------------------------------------------------------------
// Polar scatter chart (central panel)
// ---------------------------------------------------------------------------

/// Render the title and the polar scatter chart.
pub fn radar_plot(ui: &mut Ui, state: &ViewState) {
    let style = &state.style;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(&style.title)
                .size(style.title_size)
                .strong(),
        );
    });

    // Leave room outside the outer ring for the spoke labels.
    let extent = state.grid.outer_radius() * 1.15;

    Plot::new("radar_plot")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-extent)
        .include_x(extent)
        .include_y(-extent)
        .include_y(extent)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            draw_grid(plot_ui, state);

            let points: PlotPoints = state.points.clone().into();
            plot_ui.points(
                Points::new(points)
                    .name("samples")
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .color(style.marker_color)
                    .radius(style.marker_radius),
            );
        });
}

fn draw_grid(plot_ui: &mut PlotUi, state: &ViewState) {
    let style = &state.style;
    let outer = state.grid.outer_radius();

    let (label_sin, label_cos) = RING_LABEL_DEGREES.to_radians().sin_cos();
    for &r in &state.grid.rings {
        let ring: PlotPoints = circle(r, RING_SEGMENTS).into();
        plot_ui.line(Line::new(ring).color(style.grid_color).width(1.0));

        plot_ui.text(
            Text::new(
                PlotPoint::new(r * label_cos, r * label_sin),
                RichText::new(format_radius(r)).size(11.0).color(style.label_color),
            )
            .anchor(Align2::LEFT_BOTTOM),
        );
    }

    for &deg in &state.grid.spokes_degrees {
        let (sin, cos) = deg.to_radians().sin_cos();
        let spoke: PlotPoints = vec![[0.0, 0.0], [outer * cos, outer * sin]].into();
        plot_ui.line(Line::new(spoke).color(style.grid_color).width(1.0));

        let label_r = outer * 1.07;
        plot_ui.text(
            Text::new(
                PlotPoint::new(label_r * cos, label_r * sin),
                RichText::new(format!("{deg}°")).size(12.0).color(style.label_color),
            )
            .anchor(Align2::CENTER_CENTER),
        );
    }
}

/// Ring label without a trailing `.0` for whole numbers.
fn format_radius(r: f64) -> String {
    if r.fract() == 0.0 {
        format!("{r:.0}")
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_labels() {
        assert_eq!(format_radius(200.0), "200");
        assert_eq!(format_radius(2.5), "2.5");
    }
}
