//! Sheetkit - spreadsheet manipulation toolkit
//!
//! This library provides the operations behind the `sheetkit` CLI: scripted
//! find/replace and batch cell modification over an in-memory workbook, plus
//! sheet management, workbook merging, column-based splitting, and per-column
//! statistics.
//!
//! # Design
//!
//! Workbooks are passed by explicit ownership through every operation: the
//! caller opens a file, hands `&mut` to the core, and decides where (and
//! whether) the result is written. The core performs no I/O of its own.
//!
//! # Example
//!
//! ```no_run
//! use sheetkit::core::find_and_replace;
//! use sheetkit::types::SheetSelection;
//!
//! let mut book = umya_spreadsheet::new_file();
//! book.get_sheet_by_name_mut("Sheet1")
//!     .unwrap()
//!     .get_cell_mut("A1")
//!     .set_value("draft");
//!
//! let records = find_and_replace(&mut book, "draft", "final", false, false, &SheetSelection::All)?;
//! println!("{} cell(s) replaced", records.len());
//! # Ok::<(), sheetkit::SheetKitError>(())
//! ```

pub mod addr;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod instructions;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{SheetKitError, SheetKitResult};
pub use types::{
    BatchInstruction, ColumnReport, ColumnStats, MatchRecord, Outcome, OutcomeStatus, RowCondition,
    SearchHit, SheetSelection,
};
