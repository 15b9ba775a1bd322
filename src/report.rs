//! Report writing.
//!
//! Each sheet is a header row, one row per conversation, and a trailing
//! `Total:` row whose count cell is a `=SUM(...)` formula over the column
//! above it rather than a precomputed number. The row model is separated
//! from the xlsx backend so the layout is testable without opening a
//! workbook.

use std::path::Path;

use rust_xlsxwriter::{Formula, Workbook, Worksheet};

use crate::count::ConversationRecord;
use crate::error::Result;

/// Name of the sheet listing every conversation.
pub const ALL_THREADS_SHEET: &str = "All threads";
/// Name of the sheet listing only direct messages.
pub const DMS_ONLY_SHEET: &str = "DMs Only";

/// A single cell of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A text cell.
    Text(String),
    /// A numeric cell.
    Number(usize),
    /// A formula cell, stored as its A1-notation source.
    Formula(String),
}

/// The total formula for a sheet with `data_rows` conversation rows.
///
/// The range starts at the header cell `B1`, which is text and sums as zero,
/// so the evaluated total equals the sum of the data cells. With zero data
/// rows this is `=SUM(B1:B1)`, which evaluates to 0.
pub fn total_formula(data_rows: usize) -> String {
    format!("=SUM(B1:B{})", data_rows + 1)
}

/// Renders one sheet as (column A, column B) pairs: header, one row per
/// record in sequence order, then the `Total:` formula row.
pub fn sheet_rows(records: &[ConversationRecord]) -> Vec<(Cell, Cell)> {
    let mut rows = Vec::with_capacity(records.len() + 2);
    rows.push((
        Cell::Text("Thread Name".to_string()),
        Cell::Text("Message Count".to_string()),
    ));
    for record in records {
        rows.push((Cell::Text(record.name.clone()), Cell::Number(record.count)));
    }
    rows.push((
        Cell::Text("Total:".to_string()),
        Cell::Formula(total_formula(records.len())),
    ));
    rows
}

/// Writes one rendered sheet into a worksheet.
#[allow(clippy::cast_possible_truncation)]
fn write_sheet(sheet: &mut Worksheet, records: &[ConversationRecord]) -> Result<()> {
    for (row, (name_cell, count_cell)) in sheet_rows(records).into_iter().enumerate() {
        let row = row as u32;
        match name_cell {
            Cell::Text(text) => sheet.write_string(row, 0, text)?,
            Cell::Number(n) => sheet.write_number(row, 0, n as f64)?,
            Cell::Formula(f) => sheet.write_formula(row, 0, Formula::new(f))?,
        };
        match count_cell {
            Cell::Text(text) => sheet.write_string(row, 1, text)?,
            Cell::Number(n) => sheet.write_number(row, 1, n as f64)?,
            Cell::Formula(f) => sheet.write_formula(row, 1, Formula::new(f))?,
        };
    }
    Ok(())
}

/// Writes the report workbook to `path`.
///
/// The `All threads` sheet is always present; the `DMs Only` sheet only when
/// a partitioned record set is supplied. Nothing is written to disk until
/// the whole workbook is assembled.
pub fn write_report(
    path: &Path,
    all: &[ConversationRecord],
    dms: Option<&[ConversationRecord]>,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(ALL_THREADS_SHEET)?;
    write_sheet(sheet, all)?;

    if let Some(dms) = dms {
        let sheet = workbook.add_worksheet();
        sheet.set_name(DMS_ONLY_SHEET)?;
        write_sheet(sheet, dms)?;
    }

    workbook.save(path)?;
    Ok(())
}
