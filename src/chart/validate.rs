use super::options::ChartType;

/// Chart types the header set can drive.
///
/// * `name` + `value` → bar, line, pie
/// * `x` + `y`        → scatter
///
/// Both rules may match; the result is in [`ChartType::ALL`] order.
pub fn permitted_chart_types<S: AsRef<str>>(headers: &[S]) -> Vec<ChartType> {
    let has = |field: &str| headers.iter().any(|h| h.as_ref() == field);

    let mut permitted = Vec::new();
    if has("name") && has("value") {
        permitted.extend([ChartType::Bar, ChartType::Line, ChartType::Pie]);
    }
    if has("x") && has("y") {
        permitted.push(ChartType::Scatter);
    }
    permitted
}

/// Keep `current` if permitted, else fall back to the first permitted type.
/// `None` means no chart type fits the data.
pub fn reconcile(current: ChartType, permitted: &[ChartType]) -> Option<ChartType> {
    if permitted.contains(&current) {
        Some(current)
    } else {
        permitted.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_value_enables_categorical_charts() {
        assert_eq!(
            permitted_chart_types(&["name", "value"]),
            vec![ChartType::Bar, ChartType::Line, ChartType::Pie]
        );
    }

    #[test]
    fn x_y_enables_scatter() {
        assert_eq!(permitted_chart_types(&["y", "x"]), vec![ChartType::Scatter]);
    }

    #[test]
    fn unrelated_headers_enable_nothing() {
        assert!(permitted_chart_types(&["name", "x", "amount"]).is_empty());
        assert!(permitted_chart_types::<&str>(&[]).is_empty());
    }

    #[test]
    fn both_rules_union() {
        assert_eq!(
            permitted_chart_types(&["name", "value", "x", "y"]),
            ChartType::ALL.to_vec()
        );
    }

    #[test]
    fn header_match_is_exact() {
        assert!(permitted_chart_types(&["Name", "Value"]).is_empty());
    }

    #[test]
    fn reconcile_keeps_or_falls_back() {
        let categorical = [ChartType::Bar, ChartType::Line, ChartType::Pie];
        assert_eq!(reconcile(ChartType::Pie, &categorical), Some(ChartType::Pie));
        assert_eq!(reconcile(ChartType::Scatter, &categorical), Some(ChartType::Bar));
        assert_eq!(reconcile(ChartType::Bar, &[ChartType::Scatter]), Some(ChartType::Scatter));
        assert_eq!(reconcile(ChartType::Bar, &[]), None);
    }
}
