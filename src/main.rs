use clap::{Parser, Subcommand};
use sheetkit::cli;
use sheetkit::error::SheetKitResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetkit")]
#[command(about = "Spreadsheet manipulation toolkit for .xlsx files")]
#[command(long_about = "Sheetkit - Spreadsheet manipulation toolkit

COMMANDS:
  replace    - Find and replace text across cells
  search     - Search cells without modifying anything
  batch      - Apply a CSV of cell modifications
  set        - Write a single cell
  new        - Create an empty workbook
  sheet      - Add, delete, rename, reorder sheets; copy ranges
  merge      - Merge several workbooks into one
  split      - Split a sheet into one file per column value
  drop-rows  - Delete data rows matching a condition
  stats      - Per-column descriptive statistics

EXAMPLES:
  sheetkit replace book.xlsx --find draft --replace final
  sheetkit batch book.xlsx changes.csv --report outcome.csv
  sheetkit sheet book.xlsx rename Sheet1 Ledger
  sheetkit split sales.xlsx --column Region

Mutating commands never overwrite the input: output defaults to
processed_<name>.xlsx next to it (override with --output).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Find and replace text across the cells of a workbook.

Visits the selected sheets in workbook order and each sheet row by row,
left to right. Matching is case-insensitive unless --match-case; with
--entire-cell a cell is replaced only when its whole text equals the
search text, otherwise every occurrence inside the text is substituted.

Every replacement is reported as (sheet, cell, old value, new value).
Use --dry-run to preview the matches without writing any file, and
--report to export them as .csv or .json.

A --sheet that does not exist aborts the scan; nothing is written.")]
    /// Find and replace text across cells
    Replace {
        /// Path to .xlsx file
        file: PathBuf,

        /// Text to find
        #[arg(short, long)]
        find: String,

        /// Replacement text
        #[arg(short, long)]
        replace: String,

        /// Match case exactly
        #[arg(long)]
        match_case: bool,

        /// Replace only cells whose entire text matches
        #[arg(long)]
        entire_cell: bool,

        /// Restrict the scan to one sheet (default: all sheets)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview matches without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Export the match list (.csv or .json)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search cells without modifying anything
    Search {
        /// Path to .xlsx file
        file: PathBuf,

        /// Text to search for
        term: String,

        /// Match case exactly
        #[arg(long)]
        match_case: bool,

        /// Export the hit list (.csv or .json)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    #[command(long_about = "Apply a CSV of cell modifications, one per row.

The instruction file needs a header row with CellAddress and NewValue
columns and an optional SheetName column:

  CellAddress,NewValue,SheetName
  A1,Paid,Invoices
  B2,42,

A row with no sheet name targets the workbook's first sheet. Rows are
applied strictly in file order; a row naming a missing sheet or a
malformed address is reported as an error and the rest of the batch
continues. The per-row outcome table can be exported with --report.")]
    /// Apply a CSV of cell modifications
    Batch {
        /// Path to .xlsx file
        file: PathBuf,

        /// Path to instruction CSV
        instructions: PathBuf,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the outcome table (.csv or .json)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a single cell
    Set {
        /// Path to .xlsx file
        file: PathBuf,

        /// A1-style cell address
        address: String,

        /// Value to write (numbers are stored as numbers)
        value: String,

        /// Target sheet (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create an empty workbook with one sheet
    New {
        /// Workbook name (.xlsx appended when missing)
        name: String,
    },

    /// Manage sheets within a workbook
    Sheet {
        /// Path to .xlsx file
        file: PathBuf,

        #[command(subcommand)]
        command: SheetCommands,
    },

    #[command(long_about = "Merge several workbooks into a new one.

Files are merged in argument order, sheets in workbook order. The first
use of a sheet name keeps it; later collisions are renamed to
name_1, name_2, ... Cell values and styles are carried over.")]
    /// Merge several workbooks into one
    Merge {
        /// Input .xlsx files (at least two)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Split a sheet into one workbook per column value.

The first row is treated as the header. For each distinct value of the
chosen column, in first-appearance order, a file <stem>_<value>.xlsx is
written containing the header and the matching rows.")]
    /// Split a sheet into one file per column value
    Split {
        /// Path to .xlsx file
        file: PathBuf,

        /// Header name of the column to split by
        #[arg(short, long)]
        column: String,

        /// Source sheet (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Directory for the output files (default: next to the input)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    #[command(long_about = "Delete data rows matching a condition.

Conditions on the chosen column: equals, contains (case-insensitive),
greater-than, less-than, empty. Numeric conditions also drop rows whose
cell is not a number. The surviving rows are written to a new file.

EXAMPLES:
  sheetkit drop-rows data.xlsx --column Status --where equals --value stale
  sheetkit drop-rows data.xlsx --column Amount --where greater-than --value 100
  sheetkit drop-rows data.xlsx --column Notes --where empty")]
    /// Delete data rows matching a condition
    DropRows {
        /// Path to .xlsx file
        file: PathBuf,

        /// Header name of the column to test
        #[arg(short, long)]
        column: String,

        /// Condition: equals, contains, greater-than, less-than, empty
        #[arg(short = 'w', long = "where")]
        condition: String,

        /// Comparison value (unused for 'empty')
        #[arg(long)]
        value: Option<String>,

        /// Source sheet (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Per-column descriptive statistics.

Numeric columns report mean, median, mode, sum, count, min, max, and
sample standard deviation; other columns report count, unique values,
and mode. A column counts as numeric when every non-empty cell parses
as a number.")]
    /// Per-column descriptive statistics
    Stats {
        /// Path to .xlsx file
        file: PathBuf,

        /// Columns to analyze (default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Source sheet (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Export the statistics (.json)
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SheetCommands {
    /// List sheets in workbook order
    List,

    /// Add an empty sheet
    Add {
        /// Name for the new sheet
        name: String,

        /// Insert at the beginning instead of the end
        #[arg(long)]
        at_start: bool,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a sheet (the last sheet cannot be deleted)
    Delete {
        /// Sheet to delete
        name: String,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rename a sheet
    Rename {
        /// Current sheet name
        old_name: String,

        /// New sheet name
        new_name: String,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reorder sheets (list every sheet name exactly once)
    Reorder {
        /// Complete sheet order
        #[arg(required = true)]
        order: Vec<String>,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy a rectangular range of values onto another sheet
    CopyRange {
        /// Source sheet name
        from_sheet: String,

        /// Source range, e.g. A1:C10
        range: String,

        /// Destination sheet name
        to_sheet: String,

        /// Destination anchor cell, e.g. A1
        at: String,

        /// Output file path (default: processed_<name>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> SheetKitResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetkit=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replace {
            file,
            find,
            replace,
            match_case,
            entire_cell,
            sheet,
            output,
            dry_run,
            report,
            verbose,
        } => cli::replace(
            file, find, replace, match_case, entire_cell, sheet, output, dry_run, report, verbose,
        ),

        Commands::Search {
            file,
            term,
            match_case,
            report,
        } => cli::search(file, term, match_case, report),

        Commands::Batch {
            file,
            instructions,
            output,
            report,
            verbose,
        } => cli::batch(file, instructions, output, report, verbose),

        Commands::Set {
            file,
            address,
            value,
            sheet,
            output,
        } => cli::set(file, address, value, sheet, output),

        Commands::New { name } => cli::new(name),

        Commands::Sheet { file, command } => match command {
            SheetCommands::List => cli::sheet_list(file),
            SheetCommands::Add {
                name,
                at_start,
                output,
            } => cli::sheet_add(file, name, at_start, output),
            SheetCommands::Delete { name, output } => cli::sheet_delete(file, name, output),
            SheetCommands::Rename {
                old_name,
                new_name,
                output,
            } => cli::sheet_rename(file, old_name, new_name, output),
            SheetCommands::Reorder { order, output } => cli::sheet_reorder(file, order, output),
            SheetCommands::CopyRange {
                from_sheet,
                range,
                to_sheet,
                at,
                output,
            } => cli::copy_range(file, from_sheet, range, to_sheet, at, output),
        },

        Commands::Merge {
            inputs,
            output,
            verbose,
        } => cli::merge(inputs, output, verbose),

        Commands::Split {
            file,
            column,
            sheet,
            out_dir,
        } => cli::split(file, column, sheet, out_dir),

        Commands::DropRows {
            file,
            column,
            condition,
            value,
            sheet,
            output,
        } => cli::drop_rows(file, column, condition, value, sheet, output),

        Commands::Stats {
            file,
            columns,
            sheet,
            report,
        } => cli::stats(file, columns, sheet, report),
    }
}
