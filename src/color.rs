use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees, saturation and lightness in 0..=1)
/// to an opaque `Color32`.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        to_channel(rgb.red),
        to_channel(rgb.green),
        to_channel(rgb.blue),
    )
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Bright lime used for the scatter markers.
pub fn marker_color() -> Color32 {
    hsl_color(120.0, 1.0, 0.5)
}

/// Muted grey-blue for the polar grid (rings and spokes).
pub fn grid_color() -> Color32 {
    let base = hsl_color(210.0, 0.12, 0.55);
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), 140)
}

/// Colour for ring and spoke labels.
pub fn label_color() -> Color32 {
    hsl_color(210.0, 0.10, 0.70)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_pure_lime() {
        assert_eq!(marker_color(), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn grid_is_translucent() {
        assert_eq!(grid_color().a(), 140);
    }
}
