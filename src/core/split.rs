//! Row grouping and filtering over a tabular sheet projection.

use std::collections::HashMap;

use crate::error::{SheetKitError, SheetKitResult};
use crate::types::RowCondition;

fn column_index(header: &[String], column: &str) -> SheetKitResult<usize> {
    header
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| {
            SheetKitError::Validation(format!(
                "column '{column}' not found in header {header:?}"
            ))
        })
}

/// Group data rows by the distinct values of one column, in first-appearance
/// order. Rows shorter than the column index group under the empty value.
pub fn split_by_column(
    header: &[String],
    rows: &[Vec<String>],
    column: &str,
) -> SheetKitResult<Vec<(String, Vec<Vec<String>>)>> {
    let col_idx = column_index(header, column)?;

    let mut groups: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = row.get(col_idx).cloned().unwrap_or_default();
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(row.clone());
    }

    Ok(groups)
}

/// Output file name for one split group: `{stem}_{value}.xlsx`, with `/` and
/// `\` replaced by `_` and the value capped at 20 characters.
pub fn split_file_name(stem: &str, value: &str) -> String {
    let safe: String = value
        .replace('/', "_")
        .replace('\\', "_")
        .chars()
        .take(20)
        .collect();
    format!("{stem}_{safe}.xlsx")
}

/// Remove data rows matched by `condition` on `column`. Returns the
/// surviving rows and how many were dropped.
pub fn drop_rows(
    header: &[String],
    rows: &[Vec<String>],
    column: &str,
    condition: &RowCondition,
) -> SheetKitResult<(Vec<Vec<String>>, usize)> {
    let col_idx = column_index(header, column)?;

    let kept: Vec<Vec<String>> = rows
        .iter()
        .filter(|row| {
            let cell = row.get(col_idx).map(String::as_str).unwrap_or("");
            !condition.matches(cell)
        })
        .cloned()
        .collect();

    let dropped = rows.len() - kept.len();
    Ok((kept, dropped))
}
