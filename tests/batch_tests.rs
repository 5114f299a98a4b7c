//! Batch cell modification integration tests

use std::io::Write;

use pretty_assertions::assert_eq;
use sheetkit::core::{add_sheet, batch_modify_cells, SheetPosition};
use sheetkit::excel::{new_workbook, open_workbook, save_workbook};
use sheetkit::instructions::load_instructions;
use sheetkit::types::{BatchInstruction, OutcomeStatus};
use tempfile::TempDir;

fn instruction(row: usize, cell: &str, value: &str, sheet: Option<&str>) -> BatchInstruction {
    BatchInstruction {
        row,
        cell_address: cell.to_string(),
        new_value: value.to_string(),
        sheet_name: sheet.map(str::to_string),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ORDERING AND PARTIAL APPLICATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_success_error_success_in_order() {
    let mut book = new_workbook();
    let instructions = vec![
        instruction(1, "A1", "x", Some("Sheet1")),
        instruction(2, "B2", "y", Some("NoSuchSheet")),
        instruction(3, "C3", "z", Some("Sheet1")),
    ];

    let outcomes = batch_modify_cells(&mut book, &instructions);

    assert_eq!(outcomes.len(), 3);
    let statuses: Vec<OutcomeStatus> = outcomes.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![
            OutcomeStatus::Success,
            OutcomeStatus::Error,
            OutcomeStatus::Success
        ]
    );
    assert_eq!(outcomes[0].row, 1);
    assert_eq!(outcomes[1].row, 2);
    assert_eq!(outcomes[2].row, 3);
    assert_eq!(outcomes[1].message, "Sheet NoSuchSheet not found");

    let sheet = book.get_sheet_by_name("Sheet1").unwrap();
    assert_eq!(sheet.get_cell("A1").unwrap().get_value(), "x");
    assert!(sheet.get_cell("B2").is_none());
    assert_eq!(sheet.get_cell("C3").unwrap().get_value(), "z");
}

#[test]
fn test_later_instructions_can_overwrite_earlier_ones() {
    let mut book = new_workbook();
    let instructions = vec![
        instruction(1, "A1", "first", None),
        instruction(2, "A1", "second", None),
    ];

    let outcomes = batch_modify_cells(&mut book, &instructions);

    assert!(outcomes.iter().all(|o| o.is_success()));
    assert_eq!(
        book.get_sheet_by_name("Sheet1")
            .unwrap()
            .get_cell("A1")
            .unwrap()
            .get_value(),
        "second"
    );
}

#[test]
fn test_explicit_sheet_targeting() {
    let mut book = new_workbook();
    add_sheet(&mut book, "Ledger", SheetPosition::End).unwrap();

    let outcomes = batch_modify_cells(
        &mut book,
        &[
            instruction(1, "A1", "default", None),
            instruction(2, "A1", "named", Some("Ledger")),
        ],
    );

    assert!(outcomes.iter().all(|o| o.is_success()));
    assert_eq!(
        book.get_sheet_by_name("Sheet1")
            .unwrap()
            .get_cell("A1")
            .unwrap()
            .get_value(),
        "default"
    );
    assert_eq!(
        book.get_sheet_by_name("Ledger")
            .unwrap()
            .get_cell("A1")
            .unwrap()
            .get_value(),
        "named"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// END-TO-END: CSV INSTRUCTIONS THROUGH FILE ROUND-TRIP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_csv_instructions_applied_and_saved() {
    let dir = TempDir::new().unwrap();
    let book_path = dir.path().join("book.xlsx");
    let csv_path = dir.path().join("changes.csv");

    save_workbook(&new_workbook(), &book_path).unwrap();
    let mut csv = std::fs::File::create(&csv_path).unwrap();
    writeln!(csv, "CellAddress,NewValue,SheetName").unwrap();
    writeln!(csv, "A1,hello,Sheet1").unwrap();
    writeln!(csv, "B2,42,").unwrap();
    writeln!(csv, "zzz,oops,").unwrap();
    drop(csv);

    let instructions = load_instructions(&csv_path).unwrap();
    let mut book = open_workbook(&book_path).unwrap();
    let outcomes = batch_modify_cells(&mut book, &instructions);
    save_workbook(&book, &book_path).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_success());
    assert_eq!(outcomes[2].status, OutcomeStatus::Error);

    let reread = open_workbook(&book_path).unwrap();
    let sheet = reread.get_sheet_by_name("Sheet1").unwrap();
    assert_eq!(sheet.get_cell("A1").unwrap().get_value(), "hello");
    assert_eq!(sheet.get_cell("B2").unwrap().get_value(), "42");
}
