// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Serialize `records` as CSV into any writer, one record per row.
pub fn write_csv<T: Serialize, W: Write>(records: &[T], writer: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for item in records {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}
