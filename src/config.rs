use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::chart::options::ChartConfig;

/// Environment variable naming the optional JSON config file.
pub const CONFIG_ENV: &str = "CHART_PANE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Start-up settings. Every field is optional in the file.
///
/// ```json
/// {
///   "window_width": 1400,
///   "show_table": true,
///   "chart": { "chart_type": "line", "color_scheme": "cool", "title": "Sales" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub show_table: bool,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            show_table: false,
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.chart.clamp_dimensions();
        Ok(config)
    }

    /// Load from [`CONFIG_ENV`] if set; fall back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::chart::options::{ChartType, ColorScheme};

    #[test]
    fn reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "show_table": true, "chart": {{ "chart_type": "scatter", "color_scheme": "monochrome", "height": 50 }} }}"#
        )
        .unwrap();

        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert!(cfg.show_table);
        assert_eq!(cfg.window_width, 1200.0);
        assert_eq!(cfg.chart.chart_type, ChartType::Scatter);
        assert_eq!(cfg.chart.color_scheme, ColorScheme::Monochrome);
        assert_eq!(cfg.chart.height, 200.0);
        assert_eq!(cfg.chart.x_label, "X Axis");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_chart_type_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "chart": {{ "chart_type": "donut" }} }}"#).unwrap();
        assert!(AppConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
