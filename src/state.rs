use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};

use crate::chart::options::{ChartConfig, ChartType};
use crate::chart::validate::{permitted_chart_types, reconcile};
use crate::color::Palette;
use crate::config::AppConfig;
use crate::data::loader;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Background loading
// ---------------------------------------------------------------------------

/// Result of one background file read.
pub struct LoadOutcome {
    pub path: PathBuf,
    pub result: Result<Dataset>,
}

/// Read and parse `path` on a worker thread; the receiver yields exactly one
/// [`LoadOutcome`].
pub fn spawn_load(path: PathBuf) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = loader::load_file(&path)
            .with_context(|| format!("loading {}", path.display()));
        // The UI may have started a newer load and dropped the receiver.
        let _ = tx.send(LoadOutcome { path, result });
    });
    rx
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user loads a file or after clearing).
    pub dataset: Option<Dataset>,

    /// File the dataset came from.
    pub source: Option<PathBuf>,

    /// Display options.
    pub config: ChartConfig,

    /// Chart types the current headers allow.
    pub permitted: Vec<ChartType>,

    /// Whether the data preview table is shown.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pending: Option<Receiver<LoadOutcome>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dataset: None,
            source: None,
            config: config.chart.clone(),
            permitted: ChartType::ALL.to_vec(),
            show_table: config.show_table,
            status_message: None,
            loading: false,
            pending: None,
        }
    }

    /// Replace the dataset and gate chart types on its headers.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<PathBuf>) {
        self.permitted = permitted_chart_types(dataset.fields.as_slice());
        match reconcile(self.config.chart_type, &self.permitted) {
            Some(t) if t != self.config.chart_type => {
                log::debug!("chart type {:?} not permitted, switching to {t:?}", self.config.chart_type);
                self.config.chart_type = t;
            }
            Some(_) => {}
            None => log::debug!("no chart type fits fields {:?}", dataset.fields),
        }

        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;
        self.loading = false;
    }

    /// Drop the dataset and restore the default permitted set.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.source = None;
        self.permitted = ChartType::ALL.to_vec();
        self.status_message = None;
        self.loading = false;
        self.pending = None;
    }

    /// Chart type to render, `None` when the data fits no chart type.
    pub fn active_chart_type(&self) -> Option<ChartType> {
        let t = self.config.chart_type;
        self.permitted.contains(&t).then_some(t)
    }

    /// Select a chart type; ignored unless permitted.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        if self.permitted.contains(&chart_type) {
            self.config.chart_type = chart_type;
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_scheme(self.config.color_scheme)
    }

    /// Start reading `path` in the background. Supersedes any pending load.
    pub fn begin_load(&mut self, path: PathBuf) {
        log::debug!("loading {}", path.display());
        self.loading = true;
        self.pending = Some(spawn_load(path));
    }

    /// Apply a finished background load, if any. Returns true when state changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.finish_load(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.loading = false;
                self.status_message = Some("Error: file loader stopped unexpectedly".into());
                true
            }
        }
    }

    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        match outcome.result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows from {} with fields {:?}",
                    dataset.len(),
                    outcome.path.display(),
                    dataset.fields
                );
                self.set_dataset(dataset, Some(outcome.path));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// File name of the loaded dataset, for display.
    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}
