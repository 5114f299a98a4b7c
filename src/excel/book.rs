//! Mutable workbook open/save helpers over umya-spreadsheet.

use std::path::Path;

use umya_spreadsheet::Spreadsheet;

use crate::error::{SheetKitError, SheetKitResult};

/// Read an .xlsx file into a mutable in-memory workbook.
pub fn open_workbook(path: &Path) -> SheetKitResult<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
        SheetKitError::Workbook(format!("failed to open {}: {}", path.display(), e))
    })
}

/// Write a workbook back to disk.
pub fn save_workbook(book: &Spreadsheet, path: &Path) -> SheetKitResult<()> {
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|e| {
        SheetKitError::Workbook(format!("failed to save {}: {}", path.display(), e))
    })
}

/// Create a workbook holding a single empty sheet named `Sheet1`.
pub fn new_workbook() -> Spreadsheet {
    umya_spreadsheet::new_file()
}

/// All sheet names in workbook order.
pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

/// Name of the first sheet in workbook order, if any.
pub fn first_sheet_name(book: &Spreadsheet) -> Option<String> {
    book.get_sheet(&0).map(|sheet| sheet.get_name().to_string())
}
