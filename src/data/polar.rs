use std::f64::consts::TAU;

use super::model::{Sample, SampleSet};

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project a polar sample onto the plot plane: 0 rad points along +x and
/// angles grow counter-clockwise.
pub fn to_cartesian(sample: Sample) -> [f64; 2] {
    let (sin, cos) = sample.angle_radians.sin_cos();
    [sample.distance * cos, sample.distance * sin]
}

/// Project every sample, keeping file order.
pub fn project(samples: &SampleSet) -> Vec<[f64; 2]> {
    samples.iter().map(to_cartesian).collect()
}

// ---------------------------------------------------------------------------
// Grid geometry
// ---------------------------------------------------------------------------

/// Rings, spokes and outer radius of the polar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarGrid {
    /// Radii of the concentric rings, ascending; the last one is the outer edge.
    pub rings: Vec<f64>,
    /// Spoke angles in degrees, starting at 0.
    pub spokes_degrees: Vec<f64>,
}

impl PolarGrid {
    /// Build a grid whose outer ring covers the largest finite distance.
    pub fn for_samples(samples: &SampleSet, spoke_step_degrees: f64) -> Self {
        let max = samples
            .distances()
            .iter()
            .filter(|d| d.is_finite())
            .fold(0.0_f64, |acc, d| acc.max(d.abs()));

        let step = ring_step(max);
        let count = ((max / step).ceil() as usize).max(1);
        let rings = (1..=count).map(|i| i as f64 * step).collect();

        log::debug!("Polar grid: max distance {max}, ring step {step}, {count} rings");

        Self {
            rings,
            spokes_degrees: spokes(spoke_step_degrees),
        }
    }

    pub fn outer_radius(&self) -> f64 {
        self.rings.last().copied().unwrap_or(1.0)
    }
}

fn spokes(step_degrees: f64) -> Vec<f64> {
    if !(step_degrees > 0.0) {
        return vec![0.0];
    }
    let count = (360.0 / step_degrees).round().max(1.0) as usize;
    (0..count).map(|i| i as f64 * step_degrees).collect()
}

/// Pick a "nice" ring spacing (1, 2, 2.5 or 5 times a power of ten) giving
/// roughly five rings up to `max`.
pub fn ring_step(max: f64) -> f64 {
    if !(max > 0.0) || !max.is_finite() {
        return 1.0;
    }
    let raw = max / 5.0;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Points along a circle of radius `r`, closed (first point repeated).
pub fn circle(r: f64, segments: usize) -> Vec<[f64; 2]> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            [r * theta.cos(), r * theta.sin()]
        })
        .collect()
}
