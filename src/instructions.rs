//! Batch instruction files.
//!
//! A comma-separated file with a `CellAddress` and `NewValue` column, plus
//! an optional `SheetName` column; one instruction per data row.

use std::path::Path;

use serde::Deserialize;

use crate::error::SheetKitResult;
use crate::types::BatchInstruction;

#[derive(Debug, Deserialize)]
struct InstructionRow {
    #[serde(rename = "CellAddress")]
    cell_address: String,
    #[serde(rename = "NewValue")]
    new_value: String,
    #[serde(rename = "SheetName", default)]
    sheet_name: Option<String>,
}

/// Parse an instruction file. Row numbers are 1-based positions in the data
/// (header excluded); an empty `SheetName` value falls back to the
/// workbook's first sheet at apply time.
pub fn load_instructions(path: &Path) -> SheetKitResult<Vec<BatchInstruction>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut instructions = Vec::new();
    for (idx, row) in reader.deserialize::<InstructionRow>().enumerate() {
        let row = row?;
        let sheet_name = row
            .sheet_name
            .filter(|name| !name.trim().is_empty());
        instructions.push(BatchInstruction {
            row: idx + 1,
            cell_address: row.cell_address,
            new_value: row.new_value,
            sheet_name,
        });
    }
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("instructions.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_with_sheet_column() {
        let (_dir, path) = write_csv(
            "CellAddress,NewValue,SheetName\nA1,hello,Sheet1\nB2,42,\nC3,x,Other\n",
        );

        let instructions = load_instructions(&path).unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].row, 1);
        assert_eq!(instructions[0].cell_address, "A1");
        assert_eq!(instructions[0].sheet_name.as_deref(), Some("Sheet1"));
        assert_eq!(instructions[1].sheet_name, None);
        assert_eq!(instructions[2].row, 3);
        assert_eq!(instructions[2].sheet_name.as_deref(), Some("Other"));
    }

    #[test]
    fn test_load_without_sheet_column() {
        let (_dir, path) = write_csv("CellAddress,NewValue\nA1,1\nA2,2\n");

        let instructions = load_instructions(&path).unwrap();
        assert_eq!(instructions.len(), 2);
        assert!(instructions.iter().all(|i| i.sheet_name.is_none()));
    }

    #[test]
    fn test_missing_required_column_fails() {
        let (_dir, path) = write_csv("Address,Value\nA1,1\n");
        assert!(load_instructions(&path).is_err());
    }
}
