//! CLI command handler tests

use std::io::Write;
use std::path::PathBuf;

use sheetkit::cli::commands;
use sheetkit::excel::{new_workbook, open_workbook, save_workbook, sheet_names};
use sheetkit::SheetKitError;
use tempfile::TempDir;

fn workbook_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("book.xlsx");
    let mut book = new_workbook();
    book.get_sheet_by_name_mut("Sheet1")
        .unwrap()
        .get_cell_mut("A1")
        .set_value("draft copy");
    save_workbook(&book, &path).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// REPLACE COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_replace_writes_processed_file() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    let result = commands::replace(
        input.clone(),
        "draft".to_string(),
        "final".to_string(),
        false,
        false,
        None,
        None,
        false,
        None,
        false,
    );
    assert!(result.is_ok());

    let output = dir.path().join("processed_book.xlsx");
    assert!(output.exists());
    let book = open_workbook(&output).unwrap();
    assert_eq!(
        book.get_sheet_by_name("Sheet1")
            .unwrap()
            .get_cell("A1")
            .unwrap()
            .get_value(),
        "final copy"
    );
}

#[test]
fn test_replace_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    commands::replace(
        input,
        "draft".to_string(),
        "final".to_string(),
        false,
        false,
        None,
        None,
        true,
        None,
        false,
    )
    .unwrap();

    assert!(!dir.path().join("processed_book.xlsx").exists());
}

#[test]
fn test_replace_rejects_empty_search_text() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    let result = commands::replace(
        input,
        String::new(),
        "x".to_string(),
        false,
        false,
        None,
        None,
        false,
        None,
        false,
    );
    assert!(matches!(result, Err(SheetKitError::Validation(_))));
}

#[test]
fn test_replace_nonexistent_file_fails() {
    let result = commands::replace(
        PathBuf::from("nonexistent.xlsx"),
        "a".to_string(),
        "b".to_string(),
        false,
        false,
        None,
        None,
        false,
        None,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_replace_exports_report() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);
    let report = dir.path().join("matches.csv");

    commands::replace(
        input,
        "draft".to_string(),
        "final".to_string(),
        false,
        false,
        None,
        None,
        true,
        Some(report.clone()),
        false,
    )
    .unwrap();

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("Sheet,Cell,Old Value,New Value"));
    assert!(content.contains("draft copy"));
}

// ═══════════════════════════════════════════════════════════════════════════
// BATCH COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_batch_applies_and_reports() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);
    let csv_path = dir.path().join("changes.csv");
    let report = dir.path().join("outcomes.csv");

    let mut csv = std::fs::File::create(&csv_path).unwrap();
    writeln!(csv, "CellAddress,NewValue,SheetName").unwrap();
    writeln!(csv, "B1,updated,").unwrap();
    writeln!(csv, "C1,5,Missing").unwrap();
    drop(csv);

    commands::batch(
        input,
        csv_path,
        Some(dir.path().join("out.xlsx")),
        Some(report.clone()),
        false,
    )
    .unwrap();

    let book = open_workbook(&dir.path().join("out.xlsx")).unwrap();
    assert_eq!(
        book.get_sheet_by_name("Sheet1")
            .unwrap()
            .get_cell("B1")
            .unwrap()
            .get_value(),
        "updated"
    );

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("Row,Status,Message"));
    assert!(content.contains("Success"));
    assert!(content.contains("Error"));
}

// ═══════════════════════════════════════════════════════════════════════════
// OTHER COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_new_and_set_and_sheet_add() {
    let dir = TempDir::new().unwrap();
    let book_path = dir.path().join("fresh.xlsx");

    commands::new(book_path.to_string_lossy().to_string()).unwrap();
    assert!(book_path.exists());

    commands::set(
        book_path.clone(),
        "a1".to_string(),
        "99".to_string(),
        None,
        Some(book_path.clone()),
    )
    .unwrap();

    commands::sheet_add(
        book_path.clone(),
        "Notes".to_string(),
        false,
        Some(book_path.clone()),
    )
    .unwrap();

    let book = open_workbook(&book_path).unwrap();
    assert_eq!(
        sheet_names(&book),
        vec!["Sheet1".to_string(), "Notes".to_string()]
    );
    assert_eq!(
        book.get_sheet_by_name("Sheet1")
            .unwrap()
            .get_cell("A1")
            .unwrap()
            .get_value(),
        "99"
    );
}

#[test]
fn test_merge_requires_two_inputs() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    let result = commands::merge(vec![input], dir.path().join("merged.xlsx"), false);
    assert!(matches!(result, Err(SheetKitError::Validation(_))));
}

#[test]
fn test_drop_rows_rejects_unknown_condition() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    let result = commands::drop_rows(
        input,
        "A".to_string(),
        "sometimes".to_string(),
        None,
        None,
        None,
    );
    assert!(matches!(result, Err(SheetKitError::Validation(_))));
}

#[test]
fn test_stats_report_must_be_json() {
    let dir = TempDir::new().unwrap();
    let input = workbook_fixture(&dir);

    let result = commands::stats(
        input,
        vec![],
        None,
        Some(dir.path().join("stats.csv")),
    );
    assert!(matches!(result, Err(SheetKitError::Validation(_))));
}
