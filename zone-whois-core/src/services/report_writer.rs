//! Report output
//!
//! JSON is an array of row objects indented by four spaces; CSV always starts
//! with the header row, even when there are no rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CoreResult;
use crate::types::{OutputFormat, ZoneReport};

/// Write the rows as a JSON array.
pub fn write_json<W: Write>(rows: &[ZoneReport], mut writer: W) -> CoreResult<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    rows.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the rows as CSV with a header row.
pub fn write_csv<W: Write>(rows: &[ZoneReport], writer: W) -> CoreResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(ZoneReport::COLUMNS)?;
    for row in rows {
        csv_writer.write_record(row.to_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the rows in `format` to any writer.
pub fn write_to<W: Write>(rows: &[ZoneReport], format: OutputFormat, writer: W) -> CoreResult<()> {
    match format {
        OutputFormat::Json => write_json(rows, writer),
        OutputFormat::Csv => write_csv(rows, writer),
    }
}

/// Write the report to `path` (created or truncated), or to stdout when `None`.
pub fn write_report(
    rows: &[ZoneReport],
    format: OutputFormat,
    path: Option<&Path>,
) -> CoreResult<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_to(rows, format, BufWriter::new(file))?;
            log::info!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_to(rows, format, stdout.lock())?;
        }
    }
    Ok(())
}
