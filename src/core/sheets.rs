//! Sheet-level management: add, delete, rename, reorder, copy-range.

use std::collections::HashSet;

use tracing::debug;
use umya_spreadsheet::Spreadsheet;

use crate::addr::{parse_a1, parse_range, validate_sheet_name};
use crate::core::batch::write_cell_value;
use crate::error::{SheetKitError, SheetKitResult};
use crate::excel::sheet_names;

/// Where a new sheet lands in the workbook order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPosition {
    End,
    Beginning,
}

/// Add an empty sheet. The name is validated against workbook naming rules
/// before anything is mutated.
pub fn add_sheet(book: &mut Spreadsheet, name: &str, position: SheetPosition) -> SheetKitResult<()> {
    let existing = sheet_names(book);
    validate_sheet_name(name, &existing)?;

    book.new_sheet(name)
        .map_err(|e| SheetKitError::Workbook(format!("failed to add sheet '{name}': {e}")))?;

    if position == SheetPosition::Beginning {
        let sheets = book.get_sheet_collection_mut();
        if let Some(added) = sheets.pop() {
            sheets.insert(0, added);
        }
    }

    debug!(sheet = name, "sheet added");
    Ok(())
}

/// Remove a named sheet. Deleting the last remaining sheet is an error.
pub fn delete_sheet(book: &mut Spreadsheet, name: &str) -> SheetKitResult<()> {
    if book.get_sheet_count() <= 1 {
        return Err(SheetKitError::Validation(
            "cannot delete the last sheet in the workbook".to_string(),
        ));
    }
    book.remove_sheet_by_name(name)
        .map_err(|_| SheetKitError::SheetNotFound(name.to_string()))?;
    debug!(sheet = name, "sheet deleted");
    Ok(())
}

/// Rename `old_name` to `new_name`, validating the new name first.
pub fn rename_sheet(book: &mut Spreadsheet, old_name: &str, new_name: &str) -> SheetKitResult<()> {
    let existing = sheet_names(book);
    if !existing.iter().any(|n| n == old_name) {
        return Err(SheetKitError::SheetNotFound(old_name.to_string()));
    }
    validate_sheet_name(new_name, &existing)?;

    if let Some(sheet) = book.get_sheet_by_name_mut(old_name) {
        sheet.set_name(new_name);
    }
    Ok(())
}

/// Reorder sheets to match `order`, which must list every existing sheet
/// name exactly once. Nothing is mutated when the permutation is invalid.
pub fn reorder_sheets(book: &mut Spreadsheet, order: &[String]) -> SheetKitResult<()> {
    let existing = sheet_names(book);
    let requested: HashSet<&String> = order.iter().collect();

    if order.len() != existing.len()
        || requested.len() != order.len()
        || existing.iter().any(|name| !requested.contains(name))
    {
        return Err(SheetKitError::Validation(format!(
            "new order must list every sheet exactly once; workbook has {existing:?}"
        )));
    }

    let position = |name: &str| order.iter().position(|n| n == name).unwrap_or(usize::MAX);
    book.get_sheet_collection_mut()
        .sort_by_key(|sheet| position(sheet.get_name()));
    Ok(())
}

/// Copy the values of a rectangular range from one sheet onto another sheet
/// of the same workbook, anchored at `dest_start`. Values only; styles are
/// left untouched. Returns the number of cells written.
pub fn copy_range(
    book: &mut Spreadsheet,
    source_sheet: &str,
    source_range: &str,
    dest_sheet: &str,
    dest_start: &str,
) -> SheetKitResult<usize> {
    let ((start_col, start_row), (end_col, end_row)) = parse_range(source_range)?;
    let (dest_col, dest_row) = parse_a1(dest_start)?;

    let source = book
        .get_sheet_by_name(source_sheet)
        .ok_or_else(|| SheetKitError::SheetNotFound(source_sheet.to_string()))?;

    // Source values are collected before any write so the range may overlap
    // itself when source and destination sheets coincide.
    let mut values = Vec::new();
    for row in start_row..=end_row {
        for col in start_col..=end_col {
            let value = source
                .get_cell((col, row))
                .map(|cell| cell.get_value().to_string())
                .unwrap_or_default();
            values.push((col - start_col, row - start_row, value));
        }
    }

    let dest = book
        .get_sheet_by_name_mut(dest_sheet)
        .ok_or_else(|| SheetKitError::SheetNotFound(dest_sheet.to_string()))?;

    let written = values.len();
    for (col_offset, row_offset, value) in values {
        let cell = dest.get_cell_mut((dest_col + col_offset, dest_row + row_offset));
        if value.is_empty() {
            cell.set_value("");
        } else {
            write_cell_value(cell, &value);
        }
    }

    debug!(
        from = source_sheet,
        to = dest_sheet,
        cells = written,
        "range copied"
    );
    Ok(written)
}
