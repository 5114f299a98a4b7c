//! Split, drop-rows, and statistics tests over real files

use pretty_assertions::assert_eq;
use sheetkit::core::{column_statistics, drop_rows, split_by_column, split_file_name};
use sheetkit::excel::{new_workbook, read_table, save_workbook, write_table};
use sheetkit::types::{ColumnStats, RowCondition};
use tempfile::TempDir;

/// Sales sheet written through the mutable workbook path, read back through
/// the tabular projection.
fn sales_table(dir: &TempDir) -> sheetkit::excel::Table {
    let path = dir.path().join("sales.xlsx");

    let mut book = new_workbook();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    for (idx, header) in ["Region", "Amount"].iter().enumerate() {
        sheet
            .get_cell_mut(((idx + 1) as u32, 1u32))
            .set_value(*header);
    }
    let data = [("West", 10.0), ("East", 20.0), ("West", 30.0)];
    for (row_idx, (region, amount)) in data.iter().enumerate() {
        let row = (row_idx + 2) as u32;
        sheet.get_cell_mut((1u32, row)).set_value(*region);
        sheet.get_cell_mut((2u32, row)).set_value_number(*amount);
    }
    save_workbook(&book, &path).unwrap();

    read_table(&path, None).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// TABULAR PROJECTION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_read_table_projects_values_to_text() {
    let dir = TempDir::new().unwrap();
    let table = sales_table(&dir);

    assert_eq!(table.sheet_name, "Sheet1");
    assert_eq!(table.header, vec!["Region".to_string(), "Amount".to_string()]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["West".to_string(), "10".to_string()]);
}

// ═══════════════════════════════════════════════════════════════════════════
// SPLIT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_split_writes_one_file_per_group() {
    let dir = TempDir::new().unwrap();
    let table = sales_table(&dir);

    let groups = split_by_column(&table.header, &table.rows, "Region").unwrap();
    assert_eq!(groups.len(), 2);

    for (value, rows) in &groups {
        let out_path = dir.path().join(split_file_name("sales", value));
        write_table(&out_path, "Data", &table.header, rows).unwrap();

        let part = read_table(&out_path, None).unwrap();
        assert_eq!(part.sheet_name, "Data");
        assert_eq!(part.header, table.header);
        assert_eq!(&part.rows, rows);
    }

    assert!(dir.path().join("sales_West.xlsx").exists());
    assert!(dir.path().join("sales_East.xlsx").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// DROP ROWS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_drop_rows_writes_survivors() {
    let dir = TempDir::new().unwrap();
    let table = sales_table(&dir);

    let (kept, dropped) = drop_rows(
        &table.header,
        &table.rows,
        "Amount",
        &RowCondition::GreaterThan(15.0),
    )
    .unwrap();
    assert_eq!(dropped, 2);

    let out_path = dir.path().join("pruned.xlsx");
    write_table(&out_path, &table.sheet_name, &table.header, &kept).unwrap();

    let reread = read_table(&out_path, None).unwrap();
    assert_eq!(
        reread.rows,
        vec![vec!["West".to_string(), "10".to_string()]]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// STATISTICS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_statistics_over_file_data() {
    let dir = TempDir::new().unwrap();
    let table = sales_table(&dir);

    let reports = column_statistics(&table.header, &table.rows, &[]).unwrap();
    assert_eq!(reports.len(), 2);

    match &reports[0].stats {
        ColumnStats::Text {
            count,
            unique,
            mode,
        } => {
            assert_eq!(*count, 3);
            assert_eq!(*unique, 2);
            assert_eq!(mode.as_deref(), Some("West"));
        }
        other => panic!("expected text stats for Region, got {other:?}"),
    }

    match &reports[1].stats {
        ColumnStats::Numeric {
            sum, mean, count, ..
        } => {
            assert_eq!(*count, 3);
            assert_eq!(*sum, 60.0);
            assert_eq!(*mean, 20.0);
        }
        other => panic!("expected numeric stats for Amount, got {other:?}"),
    }
}
