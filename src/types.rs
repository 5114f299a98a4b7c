use serde::{Deserialize, Serialize};

//==============================================================================
// Sheet selection
//==============================================================================

/// Which sheets a scan visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelection {
    /// Every sheet, in workbook order.
    All,
    /// A single sheet by name.
    Named(String),
}

impl SheetSelection {
    /// `None` selects all sheets, `Some(name)` a single one.
    pub fn from_option(sheet: Option<String>) -> Self {
        match sheet {
            Some(name) => SheetSelection::Named(name),
            None => SheetSelection::All,
        }
    }
}

//==============================================================================
// Find/replace and search records
//==============================================================================

/// One successful replacement, in visitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Sheet")]
    pub sheet: String,
    /// A1-style address.
    #[serde(rename = "Cell")]
    pub cell: String,
    #[serde(rename = "Old Value")]
    pub old_value: String,
    #[serde(rename = "New Value")]
    pub new_value: String,
}

/// One read-only search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Sheet")]
    pub sheet: String,
    #[serde(rename = "Cell")]
    pub cell: String,
    #[serde(rename = "Value")]
    pub value: String,
}

//==============================================================================
// Batch modification
//==============================================================================

/// One cell write, parsed from a tabular instruction file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInstruction {
    /// 1-based position in the input sequence, used for reporting only.
    pub row: usize,
    /// A1-style target address.
    pub cell_address: String,
    pub new_value: String,
    /// Target sheet; `None` falls back to the workbook's first sheet.
    pub sheet_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    Success,
    Error,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Success => write!(f, "Success"),
            OutcomeStatus::Error => write!(f, "Error"),
        }
    }
}

/// Per-instruction result of a batch run, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "Row")]
    pub row: usize,
    #[serde(rename = "Status")]
    pub status: OutcomeStatus,
    #[serde(rename = "Message")]
    pub message: String,
}

impl Outcome {
    pub fn success(row: usize, message: String) -> Self {
        Self {
            row,
            status: OutcomeStatus::Success,
            message,
        }
    }

    pub fn error(row: usize, message: String) -> Self {
        Self {
            row,
            status: OutcomeStatus::Error,
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

//==============================================================================
// Row filtering
//==============================================================================

/// Predicate deciding which data rows `drop-rows` removes.
///
/// Numeric conditions drop rows whose cell does not parse as a number, the
/// same way NaN comparisons fall out of a kept-rows mask.
#[derive(Debug, Clone, PartialEq)]
pub enum RowCondition {
    Equals(String),
    /// Case-insensitive substring.
    Contains(String),
    GreaterThan(f64),
    LessThan(f64),
    Empty,
}

impl RowCondition {
    /// Build from CLI-style `(kind, value)` strings.
    pub fn parse(kind: &str, value: &str) -> Result<Self, String> {
        match kind {
            "equals" => Ok(RowCondition::Equals(value.to_string())),
            "contains" => Ok(RowCondition::Contains(value.to_string())),
            "greater-than" => value
                .parse::<f64>()
                .map(RowCondition::GreaterThan)
                .map_err(|_| format!("'{value}' is not a number")),
            "less-than" => value
                .parse::<f64>()
                .map(RowCondition::LessThan)
                .map_err(|_| format!("'{value}' is not a number")),
            "empty" => Ok(RowCondition::Empty),
            other => Err(format!(
                "unknown condition '{other}' (expected equals, contains, greater-than, less-than, empty)"
            )),
        }
    }

    /// True when the row holding `cell` should be dropped.
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            RowCondition::Equals(value) => cell == value,
            RowCondition::Contains(value) => {
                cell.to_lowercase().contains(&value.to_lowercase())
            }
            RowCondition::GreaterThan(threshold) => cell
                .parse::<f64>()
                .map(|n| n > *threshold)
                .unwrap_or(true),
            RowCondition::LessThan(threshold) => cell
                .parse::<f64>()
                .map(|n| n < *threshold)
                .unwrap_or(true),
            RowCondition::Empty => cell.is_empty(),
        }
    }
}

//==============================================================================
// Column statistics
//==============================================================================

/// Statistics for one column; shape depends on whether every non-empty cell
/// parses as a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ColumnStats {
    Numeric {
        mean: f64,
        median: f64,
        mode: Option<f64>,
        sum: f64,
        count: usize,
        min: f64,
        max: f64,
        /// Sample standard deviation; `None` below two values.
        std_dev: Option<f64>,
    },
    Text {
        count: usize,
        unique: usize,
        mode: Option<String>,
    },
}

/// Statistics for one named column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub column: String,
    #[serde(flatten)]
    pub stats: ColumnStats,
}
