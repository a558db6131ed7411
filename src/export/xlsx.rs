// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::TabularRecord;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_ODD: u32 = 0xEAF3FB;
const BAND_EVEN: u32 = 0xFFFFFF;
const MET_FG: u32 = 0x1E7B34;
const BELOW_FG: u32 = 0xC00000;

/// Workbook with one data sheet and, when `summary` is not empty, a
/// `KPIs` sheet listing the summary lines.
pub(crate) fn export_xlsx<T: TabularRecord>(
    records: &[T],
    path: &Path,
    sheet_name: &str,
    summary: &[String],
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    write_data_sheet(workbook.add_worksheet(), records, sheet_name)?;

    if !summary.is_empty() {
        write_summary_sheet(workbook.add_worksheet(), summary)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn write_data_sheet<T: TabularRecord>(
    sheet: &mut Worksheet,
    records: &[T],
    name: &str,
) -> AppResult<()> {
    sheet.set_name(name).map_err(to_export_error)?;

    let headers = T::headers();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = Color::RGB(if i % 2 == 0 { BAND_ODD } else { BAND_EVEN });

        for (col, value) in rec.to_row().iter().enumerate() {
            write_cell(sheet, row, col as u16, value, band)?;
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(value.width());
            }
        }
    }

    if !records.is_empty() && !headers.is_empty() {
        sheet
            .autofilter(0, 0, records.len() as u32, (headers.len() - 1) as u16)
            .map_err(to_export_error)?;
    }

    for (col, w) in widths.iter().enumerate() {
        // room for the autofilter arrow
        sheet
            .set_column_width(col as u16, *w as f64 + 4.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, lines: &[String]) -> AppResult<()> {
    sheet.set_name("KPIs").map_err(to_export_error)?;
    let bold = Format::new().set_bold();

    sheet
        .write_with_format(0, 0, "Summary", &bold)
        .map_err(to_export_error)?;

    for (i, line) in lines.iter().enumerate() {
        sheet
            .write((i + 2) as u32, 0, line.as_str())
            .map_err(to_export_error)?;
    }

    let width = lines.iter().map(|l| l.width()).max().unwrap_or(10);
    sheet
        .set_column_width(0, width as f64 + 2.0)
        .map_err(to_export_error)?;
    Ok(())
}

/// Dates and times become Excel serials, numbers stay numeric,
/// compliance labels are colored, anything else is text.
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        sheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_export_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        sheet
            .write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
            .map_err(to_export_error)?;
        return Ok(());
    }

    let format = match s {
        "Met" => base.set_font_color(Color::RGB(MET_FG)).set_bold(),
        "Below Target" => base.set_font_color(Color::RGB(BELOW_FG)),
        _ => base,
    };

    sheet
        .write_with_format(row, col, s, &format)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
