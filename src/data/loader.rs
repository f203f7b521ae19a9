use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Dataset;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a CSV file from disk and parse it into a [`Dataset`].
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
        path: path.to_path_buf(),
    })?;
    parse_csv(&text)
}

/// Parse CSV text.
///
/// Layout: the first non-blank line holds the header names, every later
/// non-blank line is one record. Cells are split on `,` and trimmed; quotes
/// carry no meaning. Rows are paired positionally with the header, so a
/// short row lacks its trailing fields and a long row loses its extra cells.
pub fn parse_csv(text: &str) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut fields: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        match fields {
            None => fields = Some(cells),
            Some(_) => rows.push(cells),
        }
    }

    let fields = fields.unwrap_or_default();
    let dataset = Dataset::from_rows(fields, rows);
    let short_rows = dataset
        .records
        .iter()
        .filter(|r| r.values.len() < dataset.fields.len())
        .count();
    if short_rows > 0 {
        log::debug!("{short_rows} row(s) shorter than the header");
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::Value;

    #[test]
    fn headers_are_trimmed_and_values_coerced() {
        let ds = parse_csv(" name , value \nApples, 10\nPears,n/a\n").unwrap();
        assert_eq!(ds.fields, vec!["name", "value"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].get("name"), Some(&Value::Text("Apples".into())));
        assert_eq!(ds.records[0].get("value"), Some(&Value::Number(10.0)));
        assert_eq!(ds.records[1].get("value"), Some(&Value::Text("n/a".into())));
    }

    #[test]
    fn quotes_are_plain_data() {
        let ds = parse_csv("name,value\n\"a,b\",3\n").unwrap();
        assert_eq!(ds.records[0].text("name"), "\"a");
        assert_eq!(ds.records[0].text("value"), "b\"");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let ds = parse_csv("x,y\r\n1,2\r\n\r\n3,4\r\n\r\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].number("x"), Some(3.0));
        assert_eq!(ds.records[1].number("y"), Some(4.0));
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let ds = parse_csv("").unwrap();
        assert!(ds.fields.is_empty());
        assert!(ds.is_empty());
    }

    #[test]
    fn header_only_has_fields_but_no_records() {
        let ds = parse_csv("name,value").unwrap();
        assert_eq!(ds.fields.len(), 2);
        assert!(ds.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "0.5,1.5").unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.records[0].number("x"), Some(0.5));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn binary_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotUtf8 { .. }));
    }
}
