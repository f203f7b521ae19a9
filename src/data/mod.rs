/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///     .csv text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines/cells, coerce → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  header fields + Vec<Record>
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
