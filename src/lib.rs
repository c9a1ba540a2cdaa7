pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod loader;
pub mod models;
pub mod report;
pub mod ui;

// Re-export commonly used items
pub use config::SavePaths;
pub use error::{Error, LoadError, WriteError};
pub use export::export_csv;
pub use formatters::format_report_table;
pub use loader::load;
pub use models::{AlbumRecord, CardRecord, Collection, MAX_MASTERY_LEVEL};
pub use report::{build_report, Report, ReportKind, ReportRows, SortKey, SortSpec};
