use crate::config::SavePaths;
use crate::error::Result;
use crate::export::export_csv;
use crate::formatters::format_report_table;
use crate::loader::load;
use crate::report::ReportKind;
use std::io::Write;
use std::path::Path;

/// Build one report without a window and either export it or print a preview
pub fn run_headless<W: Write>(
    paths: &SavePaths,
    kind: ReportKind,
    export: Option<&Path>,
    limit: usize,
    out: &mut W,
) -> Result<()> {
    log::info!("Collection: {}", paths.collection.display());
    log::info!("Mastery: {}", paths.mastery.display());

    let collection = load(paths)?;
    let report = collection.report(kind);

    match export {
        Some(path) => {
            export_csv(&report, path)?;
            writeln!(out, "Exported {} rows to {}", report.len(), path.display())?;
        }
        None => {
            write!(out, "{}", format_report_table(&report, limit))?;
        }
    }

    out.flush()?;
    Ok(())
}
