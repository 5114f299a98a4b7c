//! Read-only tabular projection of a worksheet, via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{SheetKitError, SheetKitResult};

/// A sheet flattened to a header row plus data rows, every value projected
/// to text. Integral floats lose their trailing `.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub sheet_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Text projection of a calamine cell.
pub fn datatype_to_string(cell: Option<&Data>) -> String {
    match cell {
        None => String::new(),
        Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(n)) => {
            if n.fract() == 0.0 {
                format!("{:.0}", n)
            } else {
                n.to_string()
            }
        }
        Some(Data::Int(n)) => n.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::Error(e)) => format!("{e:?}"),
        Some(Data::DateTime(f)) => f.to_string(),
        Some(other) => format!("{other:?}"),
    }
}

/// Load `sheet_name` (or the first sheet) as header + data rows.
pub fn read_table(path: &Path, sheet_name: Option<&str>) -> SheetKitResult<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        SheetKitError::Workbook(format!("failed to open {}: {}", path.display(), e))
    })?;

    let sheet_name = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SheetKitError::Workbook("workbook has no sheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SheetKitError::Workbook(format!("failed to read sheet {sheet_name}: {e}")))?;

    let (height, width) = range.get_size();
    if height == 0 {
        return Ok(Table {
            sheet_name,
            header: Vec::new(),
            rows: Vec::new(),
        });
    }

    let header = (0..width)
        .map(|col| datatype_to_string(range.get((0, col))))
        .collect();
    let rows = (1..height)
        .map(|row| {
            (0..width)
                .map(|col| datatype_to_string(range.get((row, col))))
                .collect()
        })
        .collect();

    Ok(Table {
        sheet_name,
        header,
        rows,
    })
}
