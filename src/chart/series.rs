use std::f64::consts::TAU;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Categorical series (bar / line)
// ---------------------------------------------------------------------------

/// One record placed on a categorical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPoint {
    /// Row index, used as the x position.
    pub index: usize,
    pub label: String,
    /// `None` when `value` is missing or not numeric.
    pub value: Option<f64>,
}

pub fn category_series(dataset: &Dataset) -> Vec<CategoryPoint> {
    dataset
        .records
        .iter()
        .enumerate()
        .map(|(index, rec)| CategoryPoint {
            index,
            label: rec.text("name"),
            value: rec.number("value"),
        })
        .collect()
}

/// Tick label for an x grid mark: the category at that row, if the mark
/// falls on an integer row index.
pub fn category_label(points: &[CategoryPoint], mark: f64) -> Option<&str> {
    let rounded = mark.round();
    if (mark - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    points.get(rounded as usize).map(|p| p.label.as_str())
}

// ---------------------------------------------------------------------------
// Scatter series
// ---------------------------------------------------------------------------

/// `[x, y]` pairs of records where both are numeric.
pub fn xy_series(dataset: &Dataset) -> Vec<[f64; 2]> {
    dataset
        .records
        .iter()
        .filter_map(|rec| Some([rec.number("x")?, rec.number("y")?]))
        .collect()
}

/// Partition points so group `k` holds every point whose index is `k mod n`,
/// i.e. the points drawn with palette entry `k`.
pub fn palette_groups(points: &[[f64; 2]], n: usize) -> Vec<Vec<[f64; 2]>> {
    let n = n.max(1);
    let mut groups = vec![Vec::new(); n.min(points.len())];
    for (i, p) in points.iter().enumerate() {
        groups[i % n].push(*p);
    }
    groups
}

// ---------------------------------------------------------------------------
// Pie slices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total, in `(0, 1]`.
    pub fraction: f64,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub sweep: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.start_angle + self.sweep
    }
}

/// One slice per record with a positive numeric `value`.
pub fn pie_slices(dataset: &Dataset) -> Vec<PieSlice> {
    let entries: Vec<(String, f64)> = dataset
        .records
        .iter()
        .filter_map(|rec| {
            let v = rec.number("value")?;
            (v > 0.0).then(|| (rec.text("name"), v))
        })
        .collect();

    let total: f64 = entries.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    entries
        .into_iter()
        .map(|(label, value)| {
            let fraction = value / total;
            let slice = PieSlice {
                label,
                value,
                fraction,
                start_angle: start,
                sweep: fraction * TAU,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// `"name: 37%"`
pub fn slice_label(name: &str, fraction: f64) -> String {
    format!("{name}: {:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    #[test]
    fn category_series_keeps_row_positions() {
        let ds = parse_csv("name,value\nA,1\nB,oops\nC,3").unwrap();
        let pts = category_series(&ds);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1].label, "B");
        assert_eq!(pts[1].value, None);
        assert_eq!(pts[2].index, 2);
        assert_eq!(pts[2].value, Some(3.0));
    }

    #[test]
    fn tick_labels_only_on_integer_marks() {
        let ds = parse_csv("name,value\nA,1\nB,2").unwrap();
        let pts = category_series(&ds);
        assert_eq!(category_label(&pts, 1.0), Some("B"));
        assert_eq!(category_label(&pts, 0.5), None);
        assert_eq!(category_label(&pts, -1.0), None);
        assert_eq!(category_label(&pts, 7.0), None);
    }

    #[test]
    fn xy_series_skips_non_numeric_rows() {
        let ds = parse_csv("x,y\n1,2\nfoo,3\n4,5\n6").unwrap();
        assert_eq!(xy_series(&ds), vec![[1.0, 2.0], [4.0, 5.0]]);
    }

    #[test]
    fn palette_groups_cycle() {
        let pts: Vec<[f64; 2]> = (0..7).map(|i| [i as f64, 0.0]).collect();
        let groups = palette_groups(&pts, 5);
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0], vec![[0.0, 0.0], [5.0, 0.0]]);
        assert_eq!(groups[1], vec![[1.0, 0.0], [6.0, 0.0]]);
        assert_eq!(groups[4], vec![[4.0, 0.0]]);

        assert_eq!(palette_groups(&pts[..2], 5).len(), 2);
    }

    #[test]
    fn pie_fractions_cover_the_circle() {
        let ds = parse_csv("name,value\nA,1\nB,3\nC,-2\nD,x").unwrap();
        let slices = pie_slices(&ds);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].fraction - 0.25).abs() < 1e-12);
        assert!((slices[1].start_angle - TAU / 4.0).abs() < 1e-12);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(slices[1].contains_angle(TAU / 2.0));
        assert!(!slices[0].contains_angle(TAU / 2.0));
    }

    #[test]
    fn pie_without_positive_values_is_empty() {
        let ds = parse_csv("name,value\nA,0\nB,-1").unwrap();
        assert!(pie_slices(&ds).is_empty());
    }

    #[test]
    fn slice_labels_round_percent() {
        assert_eq!(slice_label("Apples", 0.374), "Apples: 37%");
        assert_eq!(slice_label("Pears", 1.0), "Pears: 100%");
    }
}
