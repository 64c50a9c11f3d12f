//! Spreadsheet text extraction

use crate::error::ExtractError;
use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use chrono::{NaiveDateTime, Timelike};
use std::io::Cursor;
use tenderdiff_domain::DocumentFormat;
use tracing::debug;

/// Rendering used for a sheet with no cells
pub(crate) const EMPTY_SHEET: &str = "(empty sheet)";

const COLUMN_SEPARATOR: &str = "  ";

/// Render every sheet, in workbook order, as a titled text table.
pub(crate) fn extract_spreadsheet(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ExtractError::failure(DocumentFormat::Spreadsheet, e))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExtractError::failure(DocumentFormat::Spreadsheet, e))?;

        let grid: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        debug!("Sheet '{}': {} rows", name, grid.len());
        sheets.push((name, grid));
    }

    Ok(render_sheets(&sheets))
}

/// Date-formatted cells render as ISO dates instead of serial numbers.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::DateTime(value) if value.is_duration() => cell.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(render_datetime)
            .unwrap_or_else(|| cell.to_string()),
        _ => cell.to_string(),
    }
}

fn render_datetime(value: NaiveDateTime) -> String {
    if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Render named grids as `Sheet: <name>` blocks separated by a blank line.
pub(crate) fn render_sheets(sheets: &[(String, Vec<Vec<String>>)]) -> String {
    let mut out = String::new();
    for (name, grid) in sheets {
        out.push_str(&format!("Sheet: {}\n", name));
        out.push_str(&render_grid(grid));
        out.push_str("\n\n");
    }
    out
}

/// Render a cell grid as right-aligned columns, first row as the header.
pub(crate) fn render_grid(grid: &[Vec<String>]) -> String {
    let column_count = grid.iter().map(Vec::len).max().unwrap_or(0);
    if column_count == 0 {
        return EMPTY_SHEET.to_string();
    }

    let mut widths = vec![0usize; column_count];
    for row in grid {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    grid.iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(idx, width)| {
                    let cell = row.get(idx).map(String::as_str).unwrap_or("");
                    format!("{:>width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
