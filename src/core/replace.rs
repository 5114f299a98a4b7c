//! Find/replace scanner and read-only cell search.
//!
//! Both walk the selected sheets in workbook order and each sheet in
//! row-major order (row 1 first, columns left to right), so record lists are
//! deterministic across repeated runs on an unmodified workbook.

use regex::{NoExpand, RegexBuilder};
use tracing::debug;
use umya_spreadsheet::Spreadsheet;

use crate::addr::to_a1;
use crate::error::{SheetKitError, SheetKitResult};
use crate::types::{MatchRecord, SearchHit, SheetSelection};

fn selected_sheet_names(
    book: &Spreadsheet,
    selection: &SheetSelection,
) -> SheetKitResult<Vec<String>> {
    match selection {
        SheetSelection::All => Ok(book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name().to_string())
            .collect()),
        SheetSelection::Named(name) => {
            if book.get_sheet_by_name(name).is_none() {
                return Err(SheetKitError::ScanAbort(format!("sheet '{name}' not found")));
            }
            Ok(vec![name.clone()])
        }
    }
}

/// Replace `find_text` with `replace_text` across the selected sheets,
/// mutating the workbook in place.
///
/// Cells with an empty text projection are skipped. With
/// `match_entire_cell`, a cell is replaced wholesale when its whole text
/// equals `find_text` under the active case rule; otherwise every occurrence
/// inside the text is substituted in one pass, and the literal
/// `replace_text` is inserted at each occurrence position.
///
/// Returns one [`MatchRecord`] per replaced cell, in visitation order. A
/// selected sheet that does not exist aborts the whole scan with
/// [`SheetKitError::ScanAbort`]; callers wanting atomicity must scan a
/// throwaway load and persist only on success. An empty `find_text` matches
/// nothing.
pub fn find_and_replace(
    book: &mut Spreadsheet,
    find_text: &str,
    replace_text: &str,
    match_case: bool,
    match_entire_cell: bool,
    selection: &SheetSelection,
) -> SheetKitResult<Vec<MatchRecord>> {
    let mut records = Vec::new();
    if find_text.is_empty() {
        return Ok(records);
    }

    let needle_folded = find_text.to_lowercase();
    let substitution = if match_case || match_entire_cell {
        None
    } else {
        let pattern = RegexBuilder::new(&regex::escape(find_text))
            .case_insensitive(true)
            .build()
            .map_err(|e| SheetKitError::ScanAbort(format!("search pattern: {e}")))?;
        Some(pattern)
    };

    for sheet_name in selected_sheet_names(book, selection)? {
        let sheet = book
            .get_sheet_by_name_mut(&sheet_name)
            .ok_or_else(|| SheetKitError::ScanAbort(format!("sheet '{sheet_name}' not found")))?;

        let (max_col, max_row) = sheet.get_highest_column_and_row();
        for row in 1..=max_row {
            for col in 1..=max_col {
                let old_value = match sheet.get_cell((col, row)) {
                    Some(cell) => cell.get_value().to_string(),
                    None => continue,
                };
                if old_value.is_empty() {
                    continue;
                }

                let new_value = if match_entire_cell {
                    let hit = if match_case {
                        old_value == find_text
                    } else {
                        old_value.to_lowercase() == needle_folded
                    };
                    if !hit {
                        continue;
                    }
                    replace_text.to_string()
                } else {
                    let hit = if match_case {
                        old_value.contains(find_text)
                    } else {
                        old_value.to_lowercase().contains(&needle_folded)
                    };
                    if !hit {
                        continue;
                    }
                    match &substitution {
                        None => old_value.replace(find_text, replace_text),
                        Some(pattern) => pattern
                            .replace_all(&old_value, NoExpand(replace_text))
                            .into_owned(),
                    }
                };

                sheet.get_cell_mut((col, row)).set_value(new_value.as_str());
                records.push(MatchRecord {
                    sheet: sheet_name.clone(),
                    cell: to_a1(col, row),
                    old_value,
                    new_value,
                });
            }
        }
    }

    debug!(matches = records.len(), "find/replace scan complete");
    Ok(records)
}

/// Report every non-empty cell whose text contains `term`, across all
/// sheets. Never mutates the workbook.
pub fn search_cells(book: &Spreadsheet, term: &str, case_sensitive: bool) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    if term.is_empty() {
        return hits;
    }
    let needle = if case_sensitive {
        term.to_string()
    } else {
        term.to_lowercase()
    };

    for sheet in book.get_sheet_collection() {
        let (max_col, max_row) = sheet.get_highest_column_and_row();
        for row in 1..=max_row {
            for col in 1..=max_col {
                let value = match sheet.get_cell((col, row)) {
                    Some(cell) => cell.get_value().to_string(),
                    None => continue,
                };
                if value.is_empty() {
                    continue;
                }
                let haystack = if case_sensitive {
                    value.clone()
                } else {
                    value.to_lowercase()
                };
                if haystack.contains(&needle) {
                    hits.push(SearchHit {
                        sheet: sheet.get_name().to_string(),
                        cell: to_a1(col, row),
                        value,
                    });
                }
            }
        }
    }
    hits
}
