/// Data layer: sample types, loading, and polar geometry.
///
/// Architecture:
/// ```text
///   veriler.txt  (angle_degrees,distance per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  classify + parse lines → LoadReport
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ SampleSet │  angles (rad) ∥ distances, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  polar    │  project to plot plane, build ring/spoke grid
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod polar;
