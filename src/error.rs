use std::path::PathBuf;
use thiserror::Error;

/// Failure to read one of the two save documents
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("Save file not found: {}", path.display())]
    Missing { path: PathBuf },
    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON
    #[error("Invalid JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Valid JSON, but a required section (e.g. `ServerState`) is absent
    #[error("Unexpected save layout in {}: {source}", path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Io { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::Structure { path, .. } => path,
        }
    }
}

/// Failure to write a CSV export
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write CSV to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Top-level error for the command line and window front-ends
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
    /// Writing the preview or summary to the output stream failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not locate the SNAP save folder; pass --collection and --mastery or set SNAP_STATES_DIR")]
    MissingSaveFiles,
}

/// Result alias for front-end operations
pub type Result<T> = std::result::Result<T, Error>;
