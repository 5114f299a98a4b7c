//! A1-style cell addressing and sheet-name validation.

use crate::error::{SheetKitError, SheetKitResult};

pub const MAX_SHEET_NAME_LENGTH: usize = 31;
pub const INVALID_SHEET_CHARS: [char; 7] = ['\\', '/', '*', '?', ':', '[', ']'];

/// Convert a 1-based column number to letters (1 → A, 26 → Z, 27 → AA).
pub fn column_number_to_name(mut column: u32) -> String {
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

/// Convert column letters to a 1-based column number (A → 1, AA → 27).
pub fn column_name_to_number(name: &str) -> SheetKitResult<u32> {
    if name.is_empty() {
        return Err(SheetKitError::Address(name.to_string()));
    }
    let mut column: u32 = 0;
    for ch in name.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(SheetKitError::Address(name.to_string()));
        }
        column = column
            .checked_mul(26)
            .and_then(|c| c.checked_add((upper as u8 - b'A' + 1) as u32))
            .ok_or_else(|| SheetKitError::Address(name.to_string()))?;
    }
    Ok(column)
}

/// Format a 1-based (column, row) pair as an A1 address.
pub fn to_a1(col: u32, row: u32) -> String {
    format!("{}{}", column_number_to_name(col), row)
}

/// Parse an A1 address into a 1-based (column, row) pair.
///
/// Absolute markers (`$A$1`) are accepted and ignored.
pub fn parse_a1(address: &str) -> SheetKitResult<(u32, u32)> {
    let trimmed = address.trim();
    let bad = || SheetKitError::Address(address.to_string());

    let rest = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let split = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(bad)?;
    let (letters, digits) = rest.split_at(split);
    let digits = digits.strip_prefix('$').unwrap_or(digits);

    if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }

    let col = column_name_to_number(letters)?;
    let row: u32 = digits.parse().map_err(|_| bad())?;
    if row == 0 {
        return Err(bad());
    }
    Ok((col, row))
}

/// Parse an `A1:C10` range into normalized 1-based corners
/// (top-left, bottom-right).
pub fn parse_range(range: &str) -> SheetKitResult<((u32, u32), (u32, u32))> {
    let (start, end) = range
        .split_once(':')
        .ok_or_else(|| SheetKitError::Address(range.to_string()))?;
    let (c1, r1) = parse_a1(start)?;
    let (c2, r2) = parse_a1(end)?;
    Ok(((c1.min(c2), r1.min(r2)), (c1.max(c2), r1.max(r2))))
}

/// Validate a proposed sheet name against workbook naming rules:
/// non-empty, unique, at most 31 characters, none of `\ / * ? : [ ]`.
pub fn validate_sheet_name(name: &str, existing: &[String]) -> SheetKitResult<()> {
    if name.trim().is_empty() {
        return Err(SheetKitError::SheetName(
            "sheet name cannot be empty".to_string(),
        ));
    }
    if existing.iter().any(|n| n == name) {
        return Err(SheetKitError::SheetName(format!(
            "sheet name '{name}' already exists"
        )));
    }
    if name.chars().count() > MAX_SHEET_NAME_LENGTH {
        return Err(SheetKitError::SheetName(format!(
            "sheet name must be {MAX_SHEET_NAME_LENGTH} characters or less"
        )));
    }
    if name.chars().any(|c| INVALID_SHEET_CHARS.contains(&c)) {
        let forbidden: String = INVALID_SHEET_CHARS
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        return Err(SheetKitError::SheetName(format!(
            "sheet name cannot contain any of: {forbidden}"
        )));
    }
    Ok(())
}
