//! CLI command handlers

pub mod commands;

pub use commands::{
    batch, copy_range, drop_rows, merge, new, replace, search, set, sheet_add, sheet_delete,
    sheet_list, sheet_rename, sheet_reorder, split, stats,
};
