/// Data layer: sample accumulation, CSV discovery and loading.
///
/// Architecture:
/// ```text
///  <directory>/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  glob → read column of every record
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet  │  Vec<f64>, mean
///   └───────────┘
///        │
///        ▼
///   DirectoryReport  printed by the binary
/// ```

pub mod error;
pub mod loader;
pub mod model;
