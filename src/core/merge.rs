//! Merge several workbooks into a new one.

use std::collections::HashMap;

use tracing::debug;
use umya_spreadsheet::Spreadsheet;

use crate::error::{SheetKitError, SheetKitResult};
use crate::excel::new_workbook;

/// Merge workbooks in argument order, sheets in workbook order. The first
/// use of a sheet name keeps it; later collisions become `{name}_{k}` with a
/// per-name counter starting at 1. Cell values and styles are carried over.
///
/// `books` pairs each workbook with a label (usually its file name) used in
/// error messages.
pub fn merge_workbooks(books: &[(String, Spreadsheet)]) -> SheetKitResult<Spreadsheet> {
    let mut merged = new_workbook();
    merged
        .remove_sheet_by_name("Sheet1")
        .map_err(|e| SheetKitError::Workbook(format!("failed to clear default sheet: {e}")))?;

    let mut name_counters: HashMap<String, u32> = HashMap::new();

    for (label, book) in books {
        for sheet in book.get_sheet_collection() {
            let original = sheet.get_name().to_string();
            let seen = name_counters.get(&original).copied().unwrap_or(0);
            let merged_name = if seen > 0 {
                format!("{original}_{seen}")
            } else {
                original.clone()
            };
            name_counters.insert(original, seen + 1);

            let mut copy = sheet.clone();
            copy.set_name(merged_name.as_str());
            merged.add_sheet(copy).map_err(|e| {
                SheetKitError::Workbook(format!(
                    "failed to merge sheet '{merged_name}' from {label}: {e}"
                ))
            })?;
        }
    }

    debug!(
        sources = books.len(),
        sheets = merged.get_sheet_count(),
        "workbooks merged"
    );
    Ok(merged)
}
