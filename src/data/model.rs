use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single CSV cell after coercion
// ---------------------------------------------------------------------------

/// A cell value: numeric when the text parses as a finite number, text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce a raw (already trimmed) cell.
    pub fn coerce(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Number(v),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one data row
// ---------------------------------------------------------------------------

/// One CSV row: field name → value.
/// Short rows simply lack their trailing fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub values: BTreeMap<String, Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Numeric value of `field`, `None` when missing or text.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Display text of `field`, empty when missing.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(|v| v.to_string()).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed file
// ---------------------------------------------------------------------------

/// The parsed CSV: header row plus records in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Header names in file order.
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Pair each row positionally with `fields`, coercing every cell.
    /// Cells beyond the header width are dropped.
    pub fn from_rows<I, R, S>(fields: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = rows
            .into_iter()
            .map(|row| {
                let values = fields
                    .iter()
                    .zip(row)
                    .map(|(field, cell)| (field.clone(), Value::coerce(cell.as_ref())))
                    .collect();
                Record { values }
            })
            .collect();
        Dataset { fields, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_coerced() {
        assert_eq!(Value::coerce("42"), Value::Number(42.0));
        assert_eq!(Value::coerce("-3.5"), Value::Number(-3.5));
        assert_eq!(Value::coerce("1e3"), Value::Number(1000.0));
    }

    #[test]
    fn non_numbers_stay_text() {
        assert_eq!(Value::coerce("apples"), Value::Text("apples".into()));
        assert_eq!(Value::coerce(""), Value::Text(String::new()));
        assert_eq!(Value::coerce("NaN"), Value::Text("NaN".into()));
        assert_eq!(Value::coerce("inf"), Value::Text("inf".into()));
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn short_rows_lack_trailing_fields() {
        let ds = Dataset::from_rows(
            vec!["name".into(), "value".into()],
            vec![vec!["a", "1"], vec!["b"], vec!["c", "3", "extra"]],
        );
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].number("value"), Some(1.0));
        assert!(ds.records[1].get("value").is_none());
        assert_eq!(ds.records[1].text("value"), "");
        assert_eq!(ds.records[2].values.len(), 2);
    }
}
