// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_NUM_FORMAT, TIME_NUM_FORMAT, date_serial, time_serial};
use crate::export::notify_export_success;
use crate::ledger::schema::{CANONICAL_COLUMNS, COL_DATE, COL_TIME};
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto-width columns.
pub(crate) fn export_xlsx(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in CANONICAL_COLUMNS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = CANONICAL_COLUMNS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in rec.to_row().iter().enumerate() {
            write_cell(worksheet, row, col, value, rec, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", records.len(), path);
    Ok(())
}

/// Date and Time become real Excel values; every other column stays text
/// (numeric-looking student ids must not turn into numbers).
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    value: &str,
    rec: &AttendanceRecord,
    band: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let c = col as u16;
    match col {
        COL_DATE => {
            let fmt = base.set_num_format(DATE_NUM_FORMAT);
            worksheet
                .write_with_format(row, c, date_serial(rec.date), &fmt)
                .map_err(to_app_error)?;
        }
        COL_TIME => match time_serial(value) {
            Some(serial) => {
                let fmt = base.set_num_format(TIME_NUM_FORMAT);
                worksheet
                    .write_with_format(row, c, serial, &fmt)
                    .map_err(to_app_error)?;
            }
            None => {
                worksheet
                    .write_with_format(row, c, value, &base)
                    .map_err(to_app_error)?;
            }
        },
        _ => {
            worksheet
                .write_string_with_format(row, c, value, &base)
                .map_err(to_app_error)?;
        }
    }
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
