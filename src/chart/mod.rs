/// Chart layer: display options, chart-type gating and series preparation.
///
/// ```text
///   Dataset.fields ──► validate ──► permitted chart types
///   Dataset.records ─► series   ──► bars / line / slices / points
/// ```

pub mod options;
pub mod series;
pub mod validate;
