use crate::error::WriteError;
use crate::report::{Report, ReportRows};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a report to `path`, replacing any existing file
pub fn export_csv(report: &Report, path: &Path) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(report, file).map_err(|source| WriteError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Exported {} rows to {}", report.len(), path.display());
    Ok(())
}

/// Header row followed by one record per report row
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    // Written explicitly so an empty report still gets its header
    wtr.write_record(report.headers())?;

    match &report.rows {
        ReportRows::Cards(rows) => serialize_all(&mut wtr, rows)?,
        ReportRows::Variants(rows) => serialize_all(&mut wtr, rows)?,
        ReportRows::Albums(rows) => serialize_all(&mut wtr, rows)?,
    }

    wtr.flush()?;
    Ok(())
}

fn serialize_all<W: Write, T: Serialize>(
    wtr: &mut csv::Writer<W>,
    rows: &[T],
) -> Result<(), csv::Error> {
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}

/// Report as an in-memory CSV string
pub fn to_csv_string(report: &Report) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
