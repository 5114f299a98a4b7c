use std::path::{Path, PathBuf};

use colored::Colorize;
use umya_spreadsheet::Spreadsheet;

use crate::core;
use crate::error::{SheetKitError, SheetKitResult};
use crate::excel;
use crate::instructions::load_instructions;
use crate::report;
use crate::types::{RowCondition, SheetSelection};

/// Default output path for a mutating command: `processed_<name>` next to
/// the input file.
fn processed_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output.xlsx".to_string());
    input.with_file_name(format!("processed_{file_name}"))
}

fn resolve_output(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| processed_output_path(input))
}

/// Execute the replace command
#[allow(clippy::too_many_arguments)]
pub fn replace(
    file: PathBuf,
    find: String,
    replace_with: String,
    match_case: bool,
    entire_cell: bool,
    sheet: Option<String>,
    output: Option<PathBuf>,
    dry_run: bool,
    report_path: Option<PathBuf>,
    verbose: bool,
) -> SheetKitResult<()> {
    if find.is_empty() {
        return Err(SheetKitError::Validation(
            "search text must not be empty".to_string(),
        ));
    }

    println!("{}", "🔎 Sheetkit - Find and replace".bold().green());
    println!("   File: {}", file.display());
    if let Some(ref name) = sheet {
        println!("   Sheet: {}", name.bright_blue());
    }
    println!();

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    let mut book = excel::open_workbook(&file)?;
    let selection = SheetSelection::from_option(sheet);
    let records =
        core::find_and_replace(&mut book, &find, &replace_with, match_case, entire_cell, &selection)?;

    println!(
        "{}",
        format!("✅ {} cell(s) replaced", records.len()).bold().green()
    );
    if verbose || !records.is_empty() {
        report::print_match_table(&records);
    }
    println!();

    if let Some(path) = report_path {
        report::export_report(&path, &records)?;
        println!("   Report written to {}", path.display());
    }

    if dry_run {
        println!("{}", "📋 Dry run complete - no changes written".yellow());
    } else {
        let out = resolve_output(&file, output);
        excel::save_workbook(&book, &out)?;
        println!("   Saved to {}", out.display().to_string().bold());
    }
    Ok(())
}

/// Execute the search command
pub fn search(
    file: PathBuf,
    term: String,
    match_case: bool,
    report_path: Option<PathBuf>,
) -> SheetKitResult<()> {
    if term.is_empty() {
        return Err(SheetKitError::Validation(
            "search text must not be empty".to_string(),
        ));
    }

    println!("{}", "🔍 Sheetkit - Search".bold().green());
    println!("   File: {}\n", file.display());

    let book = excel::open_workbook(&file)?;
    let hits = core::search_cells(&book, &term, match_case);

    println!("{}", format!("✅ {} hit(s)", hits.len()).bold().green());
    report::print_search_table(&hits);

    if let Some(path) = report_path {
        report::export_report(&path, &hits)?;
        println!("\n   Report written to {}", path.display());
    }
    Ok(())
}

/// Execute the batch command
pub fn batch(
    file: PathBuf,
    instructions_file: PathBuf,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    verbose: bool,
) -> SheetKitResult<()> {
    println!("{}", "⚙️  Sheetkit - Batch cell modification".bold().green());
    println!("   File: {}", file.display());
    println!("   Instructions: {}\n", instructions_file.display());

    let instructions = load_instructions(&instructions_file)?;
    if verbose {
        println!("   Loaded {} instruction(s)", instructions.len());
    }

    let mut book = excel::open_workbook(&file)?;
    let outcomes = core::batch_modify_cells(&mut book, &instructions);

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    let applied = outcomes.len() - failed;
    if failed == 0 {
        println!(
            "{}",
            format!("✅ {applied} cell(s) updated").bold().green()
        );
    } else {
        println!(
            "{}",
            format!("⚠️  {applied} cell(s) updated, {failed} failed").yellow()
        );
    }
    report::print_outcome_table(&outcomes);
    println!();

    if let Some(path) = report_path {
        report::export_report(&path, &outcomes)?;
        println!("   Report written to {}", path.display());
    }

    let out = resolve_output(&file, output);
    excel::save_workbook(&book, &out)?;
    println!("   Saved to {}", out.display().to_string().bold());
    Ok(())
}

/// Execute the set command
pub fn set(
    file: PathBuf,
    address: String,
    value: String,
    sheet: Option<String>,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "✏️  Sheetkit - Set cell".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    let sheet_name = match sheet {
        Some(name) => name,
        None => excel::first_sheet_name(&book)
            .ok_or_else(|| SheetKitError::Workbook("workbook has no sheets".to_string()))?,
    };
    core::set_cell(&mut book, &sheet_name, &address, &value)?;

    println!(
        "✅ Value '{}' written to cell '{}' in sheet '{}'",
        value.bold(),
        address.to_uppercase().bold(),
        sheet_name.bright_blue()
    );

    let out = resolve_output(&file, output);
    excel::save_workbook(&book, &out)?;
    println!("   Saved to {}", out.display().to_string().bold());
    Ok(())
}

/// Execute the new command
pub fn new(name: String) -> SheetKitResult<()> {
    println!("{}", "🆕 Sheetkit - New workbook".bold().green());

    let file_name = if name.to_lowercase().ends_with(".xlsx") {
        name
    } else {
        format!("{name}.xlsx")
    };
    let path = PathBuf::from(&file_name);

    let book = excel::new_workbook();
    excel::save_workbook(&book, &path)?;

    println!("✅ Created {}", path.display().to_string().bold());
    Ok(())
}

/// Execute the sheet list command
pub fn sheet_list(file: PathBuf) -> SheetKitResult<()> {
    let book = excel::open_workbook(&file)?;
    for (idx, name) in excel::sheet_names(&book).iter().enumerate() {
        println!("{:>4}  {}", idx + 1, name);
    }
    Ok(())
}

fn save_sheet_change(book: &Spreadsheet, file: &Path, output: Option<PathBuf>) -> SheetKitResult<()> {
    let out = resolve_output(file, output);
    excel::save_workbook(book, &out)?;
    println!("   Saved to {}", out.display().to_string().bold());
    Ok(())
}

/// Execute the sheet add command
pub fn sheet_add(
    file: PathBuf,
    name: String,
    at_start: bool,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "📄 Sheetkit - Add sheet".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    let position = if at_start {
        core::SheetPosition::Beginning
    } else {
        core::SheetPosition::End
    };
    core::add_sheet(&mut book, &name, position)?;

    println!("✅ Added sheet '{}'", name.bright_blue());
    save_sheet_change(&book, &file, output)
}

/// Execute the sheet delete command
pub fn sheet_delete(file: PathBuf, name: String, output: Option<PathBuf>) -> SheetKitResult<()> {
    println!("{}", "🗑️  Sheetkit - Delete sheet".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    core::delete_sheet(&mut book, &name)?;

    println!("✅ Deleted sheet '{}'", name.bright_blue());
    save_sheet_change(&book, &file, output)
}

/// Execute the sheet rename command
pub fn sheet_rename(
    file: PathBuf,
    old_name: String,
    new_name: String,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "📝 Sheetkit - Rename sheet".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    core::rename_sheet(&mut book, &old_name, &new_name)?;

    println!(
        "✅ Renamed '{}' to '{}'",
        old_name.bright_blue(),
        new_name.bright_blue()
    );
    save_sheet_change(&book, &file, output)
}

/// Execute the sheet reorder command
pub fn sheet_reorder(
    file: PathBuf,
    order: Vec<String>,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "🔀 Sheetkit - Reorder sheets".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    core::reorder_sheets(&mut book, &order)?;

    println!("✅ New order: {}", order.join(", ").bright_blue());
    save_sheet_change(&book, &file, output)
}

/// Execute the copy-range command
pub fn copy_range(
    file: PathBuf,
    from_sheet: String,
    range: String,
    to_sheet: String,
    at: String,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "📋 Sheetkit - Copy range".bold().green());
    println!("   File: {}\n", file.display());

    let mut book = excel::open_workbook(&file)?;
    let written = core::copy_range(&mut book, &from_sheet, &range, &to_sheet, &at)?;

    println!(
        "✅ Copied {} cell(s) from {}!{} to {}!{}",
        written,
        from_sheet.bright_blue(),
        range.to_uppercase(),
        to_sheet.bright_blue(),
        at.to_uppercase()
    );
    save_sheet_change(&book, &file, output)
}

/// Execute the merge command
pub fn merge(inputs: Vec<PathBuf>, output: PathBuf, verbose: bool) -> SheetKitResult<()> {
    if inputs.len() < 2 {
        return Err(SheetKitError::Validation(
            "merge needs at least two input files".to_string(),
        ));
    }

    println!("{}", "🧩 Sheetkit - Merge workbooks".bold().green());
    for input in &inputs {
        println!("   File: {}", input.display());
    }
    println!();

    let mut books = Vec::with_capacity(inputs.len());
    for input in &inputs {
        if verbose {
            println!("   Reading {}...", input.display());
        }
        let label = input
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| input.display().to_string());
        books.push((label, excel::open_workbook(input)?));
    }

    let merged = core::merge_workbooks(&books)?;
    excel::save_workbook(&merged, &output)?;

    println!(
        "{}",
        format!("✅ Merged {} file(s) into {}", inputs.len(), output.display())
            .bold()
            .green()
    );
    for name in excel::sheet_names(&merged) {
        println!("   📄 {name}");
    }
    Ok(())
}

/// Execute the split command
pub fn split(
    file: PathBuf,
    column: String,
    sheet: Option<String>,
    out_dir: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "✂️  Sheetkit - Split by column".bold().green());
    println!("   File: {}", file.display());
    println!("   Column: {}\n", column.bright_blue());

    let table = excel::read_table(&file, sheet.as_deref())?;
    let groups = core::split_by_column(&table.header, &table.rows, &column)?;

    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "split".to_string());
    let out_dir = out_dir.unwrap_or_else(|| {
        file.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    for (value, rows) in &groups {
        let out_path = out_dir.join(core::split_file_name(&stem, value));
        excel::write_table(&out_path, "Data", &table.header, rows)?;
        println!(
            "   📄 {} ({} row(s))",
            out_path.display(),
            rows.len()
        );
    }

    println!(
        "{}",
        format!("✅ Wrote {} file(s)", groups.len()).bold().green()
    );
    Ok(())
}

/// Execute the drop-rows command
pub fn drop_rows(
    file: PathBuf,
    column: String,
    condition: String,
    value: Option<String>,
    sheet: Option<String>,
    output: Option<PathBuf>,
) -> SheetKitResult<()> {
    let condition = RowCondition::parse(&condition, value.as_deref().unwrap_or(""))
        .map_err(SheetKitError::Validation)?;

    println!("{}", "🧹 Sheetkit - Drop rows".bold().green());
    println!("   File: {}", file.display());
    println!("   Column: {}\n", column.bright_blue());

    let table = excel::read_table(&file, sheet.as_deref())?;
    let (kept, dropped) = core::drop_rows(&table.header, &table.rows, &column, &condition)?;

    let out = resolve_output(&file, output);
    excel::write_table(&out, &table.sheet_name, &table.header, &kept)?;

    println!(
        "{}",
        format!("✅ Dropped {dropped} row(s), kept {}", kept.len())
            .bold()
            .green()
    );
    println!("   Saved to {}", out.display().to_string().bold());
    Ok(())
}

/// Execute the stats command
pub fn stats(
    file: PathBuf,
    columns: Vec<String>,
    sheet: Option<String>,
    report_path: Option<PathBuf>,
) -> SheetKitResult<()> {
    println!("{}", "📊 Sheetkit - Column statistics".bold().green());
    println!("   File: {}\n", file.display());

    if let Some(ref path) = report_path {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(SheetKitError::Validation(
                "stats reports support only .json output".to_string(),
            ));
        }
    }

    let table = excel::read_table(&file, sheet.as_deref())?;
    let reports = core::column_statistics(&table.header, &table.rows, &columns)?;

    report::print_stats(&reports);

    if let Some(path) = report_path {
        report::export_report(&path, &reports)?;
        println!("\n   Report written to {}", path.display());
    }
    Ok(())
}
