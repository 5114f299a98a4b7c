//! Ordered batch cell writes with per-instruction outcomes.

use tracing::debug;
use umya_spreadsheet::{Cell, Spreadsheet};

use crate::addr::parse_a1;
use crate::error::{SheetKitError, SheetKitResult};
use crate::excel::first_sheet_name;
use crate::types::{BatchInstruction, Outcome};

/// Write `value` into `cell`, as a number when it parses as one.
pub(crate) fn write_cell_value(cell: &mut Cell, value: &str) {
    match value.parse::<f64>() {
        Ok(number) => {
            cell.set_value_number(number);
        }
        Err(_) => {
            cell.set_value(value);
        }
    }
}

/// Apply every instruction strictly in input order, mutating the workbook in
/// place. One [`Outcome`] is returned per instruction, in the same order; a
/// failing instruction (missing sheet, malformed address) yields an `Error`
/// outcome and never stops the rest of the batch. There is no rollback;
/// partial application is the defined behavior.
pub fn batch_modify_cells(book: &mut Spreadsheet, instructions: &[BatchInstruction]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = instructions
        .iter()
        .map(|instruction| apply_instruction(book, instruction))
        .collect();

    debug!(
        total = outcomes.len(),
        failed = outcomes.iter().filter(|o| !o.is_success()).count(),
        "batch modification complete"
    );
    outcomes
}

fn apply_instruction(book: &mut Spreadsheet, instruction: &BatchInstruction) -> Outcome {
    // Default sheet is resolved per instruction, against the workbook's
    // current sheet order.
    let sheet_name = match &instruction.sheet_name {
        Some(name) => name.clone(),
        None => match first_sheet_name(book) {
            Some(name) => name,
            None => {
                return Outcome::error(instruction.row, "workbook has no sheets".to_string());
            }
        },
    };

    let address = match parse_a1(&instruction.cell_address) {
        Ok(_) => instruction.cell_address.trim().to_uppercase(),
        Err(_) => {
            return Outcome::error(
                instruction.row,
                format!("Invalid cell address '{}'", instruction.cell_address),
            );
        }
    };

    let sheet = match book.get_sheet_by_name_mut(&sheet_name) {
        Some(sheet) => sheet,
        None => {
            return Outcome::error(instruction.row, format!("Sheet {sheet_name} not found"));
        }
    };

    write_cell_value(sheet.get_cell_mut(address.as_str()), &instruction.new_value);
    Outcome::success(instruction.row, format!("Updated {address}"))
}

/// Write a single value to `(sheet, address)`, overwriting any existing
/// value.
pub fn set_cell(
    book: &mut Spreadsheet,
    sheet_name: &str,
    address: &str,
    value: &str,
) -> SheetKitResult<()> {
    parse_a1(address)?;
    let sheet = book
        .get_sheet_by_name_mut(sheet_name)
        .ok_or_else(|| SheetKitError::SheetNotFound(sheet_name.to_string()))?;
    write_cell_value(
        sheet.get_cell_mut(address.trim().to_uppercase().as_str()),
        value,
    );
    Ok(())
}
