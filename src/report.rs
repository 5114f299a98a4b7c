//! Terminal and file rendering of scan, batch, and statistics reports.

use std::fs::File;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use serde_json::json;

use crate::error::SheetKitResult;
use crate::types::{ColumnReport, ColumnStats, MatchRecord, Outcome, SearchHit};

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| format!("{:<width$}", h, width = widths[idx]))
        .collect();
    println!("   {}", header_line.join("  ").bold());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(idx, cell)| format!("{:<width$}", cell, width = widths[idx]))
            .collect();
        println!("   {}", line.join("  "));
    }
}

/// Print replacement records in visitation order.
pub fn print_match_table(records: &[MatchRecord]) {
    if records.is_empty() {
        println!("   {}", "No matches found".yellow());
        return;
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.sheet.clone(),
                r.cell.clone(),
                r.old_value.clone(),
                r.new_value.clone(),
            ]
        })
        .collect();
    print_table(&["Sheet", "Cell", "Old Value", "New Value"], &rows);
}

/// Print search hits in visitation order.
pub fn print_search_table(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("   {}", "No matches found".yellow());
        return;
    }
    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|h| vec![h.sheet.clone(), h.cell.clone(), h.value.clone()])
        .collect();
    print_table(&["Sheet", "Cell", "Value"], &rows);
}

/// Print one line per batch outcome, in input order.
pub fn print_outcome_table(outcomes: &[Outcome]) {
    for outcome in outcomes {
        let status = if outcome.is_success() {
            "Success".green()
        } else {
            "Error".red()
        };
        println!("   {:>4}  {:<7}  {}", outcome.row, status, outcome.message);
    }
}

/// Print per-column statistics.
pub fn print_stats(reports: &[ColumnReport]) {
    for report in reports {
        println!("   {}", report.column.bright_blue().bold());
        match &report.stats {
            ColumnStats::Numeric {
                mean,
                median,
                mode,
                sum,
                count,
                min,
                max,
                std_dev,
            } => {
                println!("      Count:   {count}");
                println!("      Sum:     {sum}");
                println!("      Mean:    {mean}");
                println!("      Median:  {median}");
                if let Some(mode) = mode {
                    println!("      Mode:    {mode}");
                }
                println!("      Min:     {min}");
                println!("      Max:     {max}");
                if let Some(sd) = std_dev {
                    println!("      Std Dev: {sd:.6}");
                }
            }
            ColumnStats::Text {
                count,
                unique,
                mode,
            } => {
                println!("      Count:  {count}");
                println!("      Unique: {unique}");
                if let Some(mode) = mode {
                    println!("      Mode:   {mode}");
                }
            }
        }
    }
}

/// Export records to `path`, as JSON when the extension is `.json` and CSV
/// otherwise.
pub fn export_report<T: Serialize>(path: &Path, records: &[T]) -> SheetKitResult<()> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let document = json!({
            "generated_at": chrono::Local::now().to_rfc3339(),
            "records": records,
        });
        serde_json::to_writer_pretty(File::create(path)?, &document)?;
    } else {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(())
}
