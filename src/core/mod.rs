//! Core workbook operations.
//!
//! Everything here takes the workbook (or a tabular projection of one) as an
//! explicit argument and performs no I/O of its own; reading and writing
//! files lives in [`crate::excel`].

pub mod batch;
pub mod merge;
pub mod replace;
pub mod sheets;
pub mod split;
pub mod stats;

pub use batch::{batch_modify_cells, set_cell};
pub use merge::merge_workbooks;
pub use replace::{find_and_replace, search_cells};
pub use sheets::{add_sheet, copy_range, delete_sheet, rename_sheet, reorder_sheets, SheetPosition};
pub use split::{drop_rows, split_by_column, split_file_name};
pub use stats::column_statistics;
