// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TabularRecord, records_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF usando PdfManager e la tabella generata.
pub(crate) fn export_pdf<T: TabularRecord>(
    records: &[T],
    path: &Path,
    title: &str,
    summary: &[String],
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = T::headers();
    let data_vec = records_to_table(records);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, summary, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
