use std::fmt;

use super::loader::SampleError;

// ---------------------------------------------------------------------------
// Sample – one rangefinder reading
// ---------------------------------------------------------------------------

/// A single reading: beam angle (already in radians) and measured distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub angle_radians: f64,
    /// Distance as reported by the sensor, unit implied by the data source.
    pub distance: f64,
}

impl Sample {
    /// Build a sample from an angle in degrees.
    pub fn from_degrees(angle_degrees: f64, distance: f64) -> Self {
        Self {
            angle_radians: angle_degrees.to_radians(),
            distance,
        }
    }
}

// ---------------------------------------------------------------------------
// SampleSet – the two parallel sequences handed to the chart
// ---------------------------------------------------------------------------

/// Angles and distances in file order. Both vectors always have the same
/// length; they are only ever extended together through [`SampleSet::push`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    angles: Vec<f64>,
    distances: Vec<f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.angles.push(sample.angle_radians);
        self.distances.push(sample.distance);
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Iterate the samples in file order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.angles
            .iter()
            .zip(self.distances.iter())
            .map(|(&angle_radians, &distance)| Sample {
                angle_radians,
                distance,
            })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether no sample was accepted.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut set = SampleSet::new();
        for sample in iter {
            set.push(sample);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// LoadReport – what a load produced and what it dropped
// ---------------------------------------------------------------------------

/// A malformed line that was skipped during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input file.
    pub line: u64,
    pub error: SampleError,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Result of loading one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub samples: SampleSet,
    /// Lines without a separator (blank lines, headers, comments).
    pub lines_without_separator: usize,
    /// Lines that had a separator but could not be parsed.
    pub malformed: Vec<SkippedLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut set = SampleSet::new();
        set.push(Sample::from_degrees(0.0, 10.0));
        set.push(Sample::from_degrees(180.0, 30.0));

        assert_eq!(set.len(), 2);
        assert_eq!(set.angles.len(), set.distances.len());
        assert_eq!(set.distances(), &[10.0, 30.0]);
        assert!((set.angles[1] - PI).abs() < 1e-12);
    }

    #[test]
    fn iter_yields_file_order() {
        let set: SampleSet = [(0.0, 1.0), (90.0, 2.0)]
            .into_iter()
            .map(|(a, d)| Sample::from_degrees(a, d))
            .collect();

        let distances: Vec<f64> = set.iter().map(|s| s.distance).collect();
        assert_eq!(distances, vec![1.0, 2.0]);
        assert!(SampleSet::new().is_empty());
    }
}
