//! Per-column descriptive statistics over a tabular sheet projection.

use std::collections::HashMap;

use crate::error::{SheetKitError, SheetKitResult};
use crate::types::{ColumnReport, ColumnStats};

/// Compute statistics for the named columns (all header columns when
/// `columns` is empty). Empty cells are excluded from every measure; a
/// column is numeric when at least one non-empty cell exists and all of them
/// parse as numbers.
pub fn column_statistics(
    header: &[String],
    rows: &[Vec<String>],
    columns: &[String],
) -> SheetKitResult<Vec<ColumnReport>> {
    let selected: Vec<String> = if columns.is_empty() {
        header.to_vec()
    } else {
        columns.to_vec()
    };

    let mut reports = Vec::with_capacity(selected.len());
    for column in selected {
        let col_idx = header.iter().position(|name| *name == column).ok_or_else(|| {
            SheetKitError::Validation(format!("column '{column}' not found in header {header:?}"))
        })?;

        let values: Vec<&str> = rows
            .iter()
            .filter_map(|row| row.get(col_idx))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
            .collect();

        reports.push(ColumnReport {
            column,
            stats: stats_for(&values),
        });
    }
    Ok(reports)
}

fn stats_for(values: &[&str]) -> ColumnStats {
    let numbers: Vec<f64> = values
        .iter()
        .filter_map(|cell| cell.parse::<f64>().ok())
        .collect();

    if !values.is_empty() && numbers.len() == values.len() {
        numeric_stats(&numbers)
    } else {
        text_stats(values)
    }
}

fn numeric_stats(numbers: &[f64]) -> ColumnStats {
    let count = numbers.len();
    let sum: f64 = numbers.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    // Most frequent value; ties resolve to the smallest, which a sorted
    // run-length scan yields for free.
    let mut mode = None;
    let mut best_run = 0;
    let mut i = 0;
    while i < count {
        let mut j = i + 1;
        while j < count && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_run {
            best_run = j - i;
            mode = Some(sorted[i]);
        }
        i = j;
    }

    let std_dev = if count > 1 {
        let variance =
            numbers.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        Some(variance.sqrt())
    } else {
        None
    };

    ColumnStats::Numeric {
        mean,
        median,
        mode,
        sum,
        count,
        min,
        max,
        std_dev,
    }
}

fn text_stats(values: &[&str]) -> ColumnStats {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Ties resolve to the lexicographically smallest value.
    let mode = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, _)| value.to_string());

    ColumnStats::Text {
        count: values.len(),
        unique: counts.len(),
        mode,
    }
}
