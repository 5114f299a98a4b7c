//! Fresh single-sheet workbook output, via rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::{SheetKitError, SheetKitResult};

/// Write header + rows to a new single-sheet .xlsx file. Values that parse
/// as numbers are written as numbers, everything else as text; empty values
/// leave the cell absent.
pub fn write_table(
    path: &Path,
    sheet_name: &str,
    header: &[String],
    rows: &[Vec<String>],
) -> SheetKitResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| SheetKitError::Workbook(format!("failed to name worksheet: {e}")))?;

    for (col, name) in header.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name.as_str())
            .map_err(|e| SheetKitError::Workbook(format!("failed to write header: {e}")))?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col = col_idx as u16;
            match value.parse::<f64>() {
                Ok(number) => worksheet.write_number(excel_row, col, number),
                Err(_) => worksheet.write_string(excel_row, col, value.as_str()),
            }
            .map_err(|e| {
                SheetKitError::Workbook(format!("failed to write cell: {e}"))
            })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| SheetKitError::Workbook(format!("failed to save {}: {}", path.display(), e)))?;

    Ok(())
}
