//! Window state and the actions behind its buttons
//!
//! Everything here is plain data and synchronous methods, so the load ->
//! generate -> export flow can be exercised without a display.

use crate::config::SavePaths;
use crate::export::export_csv;
use crate::formatters::preview_status;
use crate::loader::load;
use crate::models::Collection;
use crate::report::{Report, ReportKind};
use log::{info, warn};
use std::path::{Path, PathBuf};

pub const DEFAULT_PREVIEW_ROWS: usize = 200;
pub const MIN_PREVIEW_ROWS: usize = 25;
pub const MAX_PREVIEW_ROWS: usize = 5000;
pub const PREVIEW_ROWS_STEP: usize = 25;

const SELECT_FILES_HINT: &str = "Select your JSON files, then click Load JSON.";

pub struct AppState {
    pub collection_path: String,
    pub mastery_path: String,
    pub report_kind: ReportKind,
    pub preview_rows: usize,
    pub status: String,
    pub error: Option<String>,
    collection: Option<Collection>,
    report: Option<Report>,
    /// Formatted cells of the first `preview_rows` report rows
    preview: Vec<Vec<String>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            collection_path: String::new(),
            mastery_path: String::new(),
            report_kind: ReportKind::BoostersThenMastery,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            status: SELECT_FILES_HINT.to_string(),
            error: None,
            collection: None,
            report: None,
            preview: Vec::new(),
        }
    }
}

impl AppState {
    /// Fresh state with the path fields pre-filled
    pub fn with_paths(paths: &SavePaths) -> Self {
        let mut state = Self::default();
        state.set_paths(paths);
        state
    }

    pub fn set_paths(&mut self, paths: &SavePaths) {
        self.collection_path = paths.collection.display().to_string();
        self.mastery_path = paths.mastery.display().to_string();
    }

    pub fn collection(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn preview(&self) -> &[Vec<String>] {
        &self.preview
    }

    /// Startup auto-load from the game's save folder
    pub fn autoload(&mut self) {
        self.autoload_from(SavePaths::default_states_dir());
    }

    pub fn autoload_from(&mut self, states_dir: Option<PathBuf>) {
        let Some(dir) = states_dir else {
            self.status = format!("Auto-load unavailable (no user profile folder). {SELECT_FILES_HINT}");
            return;
        };

        let paths = SavePaths::in_dir(&dir);
        if paths.exists() {
            self.set_paths(&paths);
            if !self.load_files(true) {
                self.status = format!("Default SNAP save files could not be loaded. {SELECT_FILES_HINT}");
            }
        } else {
            self.status = format!("Default SNAP save files not found. {SELECT_FILES_HINT}");
        }
    }

    /// Load both files from the path fields. Returns true on success.
    ///
    /// With `silent`, failures only go to the log. A failed load keeps
    /// whatever was loaded before.
    pub fn load_files(&mut self, silent: bool) -> bool {
        let collection_path = self.collection_path.trim();
        let mastery_path = self.mastery_path.trim();

        let missing = if collection_path.is_empty() || !Path::new(collection_path).is_file() {
            Some("Please select a valid CollectionState.json file.")
        } else if mastery_path.is_empty() || !Path::new(mastery_path).is_file() {
            Some("Please select a valid CharacterMasteryState.json file.")
        } else {
            None
        };
        if let Some(message) = missing {
            warn!("{message}");
            if !silent {
                self.error = Some(message.to_string());
            }
            return false;
        }

        let paths = SavePaths::new(collection_path, mastery_path);
        match load(&paths) {
            Ok(collection) => {
                info!("Loaded save files");
                self.collection = Some(collection);
                self.report = None;
                self.preview.clear();
                self.error = None;
                self.status =
                    "Loaded JSON files successfully. Choose a report and click Generate Preview."
                        .to_string();
                true
            }
            Err(e) => {
                warn!("Load failed: {e}");
                if !silent {
                    self.error = Some(format!("Failed to load JSON: {e}"));
                }
                false
            }
        }
    }

    /// Build the selected report from the loaded data
    pub fn generate_preview(&mut self) {
        let Some(collection) = &self.collection else {
            self.error = Some("Click Load JSON first.".to_string());
            return;
        };

        self.report = Some(collection.report(self.report_kind));
        self.error = None;
        self.refresh_preview();
    }

    /// Re-cut the preview after `preview_rows` changes
    pub fn refresh_preview(&mut self) {
        let Some(report) = &self.report else {
            return;
        };

        self.preview = report.display_rows(self.preview_rows);
        self.status = format!(
            "{} Ready to export.",
            preview_status(self.preview.len(), report.len())
        );
    }

    /// Suggested file name for the save dialog
    pub fn export_file_name(&self) -> &'static str {
        self.report
            .as_ref()
            .map(|r| r.kind)
            .unwrap_or(self.report_kind)
            .default_file_name()
    }

    /// Write the current report. Loaded data and the report are kept either way.
    pub fn export_to(&mut self, path: &Path) {
        let Some(report) = &self.report else {
            self.error = Some("Generate a preview first (this builds the report).".to_string());
            return;
        };

        match export_csv(report, path) {
            Ok(()) => {
                self.status = format!(
                    "Exported CSV: {} ({})",
                    path.display(),
                    chrono::Local::now().format("%H:%M:%S")
                );
                self.error = None;
            }
            Err(e) => {
                warn!("Export failed: {e}");
                self.error = Some(format!("Failed to export CSV: {e}"));
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
