use thiserror::Error;

pub type SheetKitResult<T> = Result<T, SheetKitError>;

#[derive(Error, Debug)]
pub enum SheetKitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Scan aborted: {0}")]
    ScanAbort(String),

    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("Invalid sheet name: {0}")]
    SheetName(String),

    #[error("Invalid cell address '{0}'")]
    Address(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
