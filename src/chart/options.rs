use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chart type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartType {
    /// Canonical order, also the default permitted set.
    pub const ALL: [ChartType; 4] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Scatter => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Color scheme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Cool,
    Warm,
    Monochrome,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Default,
        ColorScheme::Cool,
        ColorScheme::Warm,
        ColorScheme::Monochrome,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Default => "Default",
            ColorScheme::Cool => "Cool",
            ColorScheme::Warm => "Warm",
            ColorScheme::Monochrome => "Monochrome",
        }
    }

    /// The fixed five-color palette of this scheme, as hex codes.
    pub fn hex_codes(self) -> [&'static str; 5] {
        match self {
            ColorScheme::Default => ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088fe"],
            ColorScheme::Cool => ["#00C49F", "#0088FE", "#FFBB28", "#FF8042", "#a4de6c"],
            ColorScheme::Warm => ["#FF8042", "#FFBB28", "#FF0000", "#FF6B6B", "#FFA07A"],
            ColorScheme::Monochrome => ["#2E4053", "#566573", "#808B96", "#ABB2B9", "#D5D8DC"],
        }
    }
}

// ---------------------------------------------------------------------------
// Chart configuration (session UI state)
// ---------------------------------------------------------------------------

pub const MIN_HEIGHT: f32 = 200.0;
pub const MAX_HEIGHT: f32 = 1000.0;

/// User-controlled display options. Deserialisable so start-up defaults can
/// come from the config file; never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub color_scheme: ColorScheme,
    pub show_legend: bool,
    pub show_tooltip: bool,
    pub show_grid: bool,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `None` fills the available width.
    pub width: Option<f32>,
    pub height: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            color_scheme: ColorScheme::Default,
            show_legend: true,
            show_tooltip: true,
            show_grid: true,
            title: "Data Visualization".to_string(),
            x_label: "X Axis".to_string(),
            y_label: "Y Axis".to_string(),
            width: None,
            height: 500.0,
        }
    }
}

impl ChartConfig {
    /// Keep dimensions inside the ranges the controls offer.
    pub fn clamp_dimensions(&mut self) {
        self.height = self.height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        if let Some(w) = self.width {
            self.width = (w.is_finite() && w > 0.0).then_some(w);
        }
    }
}
