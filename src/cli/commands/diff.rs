use colored::Colorize;

use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::diff_result::{DiffResult, Status};
use crate::core::services::diff_service::DiffService;

/// Execute the `envdiff diff` command.
///
/// Parses both files, diffs them, and displays every variable in the
/// union with a status marker and both values. With `--changed` (or
/// `show_equal = false` in config), matching variables are hidden.
pub fn execute(
    file_a: &str,
    file_b: &str,
    changed_only: bool,
    config: &AppConfig,
    quiet: bool,
) -> Result<()> {
    let env_a = super::load_env(file_a, quiet)?;
    let env_b = super::load_env(file_b, quiet)?;

    let result = DiffService::diff(&env_a, &env_b);
    let summary = result.summary();

    let shown = if changed_only || !config.display.show_equal {
        result.changes()
    } else {
        result.clone()
    };

    if !quiet {
        output::header(&format!("envdiff: {file_a} vs {file_b}"));
    }

    if result.is_identical() {
        output::success("Files are identical");
        if shown.is_empty() {
            return Ok(());
        }
    }

    print_diff_table(&shown, file_a, file_b, config.display.max_value_width);

    if !quiet {
        println!();
        output::success(&format!(
            "{} variables compared: {} equal, {} different, {} missing",
            summary.total, summary.equal, summary.different, summary.missing
        ));
    }

    Ok(())
}

/// Print the comparison as a formatted table.
fn print_diff_table(result: &DiffResult, name_a: &str, name_b: &str, max_width: usize) {
    if result.is_empty() {
        return;
    }

    let key_width = result
        .iter()
        .map(|e| e.key.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let header = format!(
        "  {:<width$}   {:<max_width$}   {}",
        "Variable",
        name_a,
        name_b,
        width = key_width
    );
    println!("{}", header.bold());
    println!("  {}", "─".repeat(header.len()));

    for entry in result.iter() {
        let value_a = truncate(&entry.value_a, max_width);
        let value_b = truncate(&entry.value_b, max_width);

        match entry.status {
            Status::Equal => {
                println!(
                    "  {:<width$}   {:<max_width$}   {}",
                    entry.key,
                    value_a.dimmed(),
                    value_b.dimmed(),
                    width = key_width
                );
            }
            Status::Different => {
                println!(
                    "  {:<width$}   {:<max_width$}   {}",
                    entry.key.yellow(),
                    value_a,
                    value_b.yellow(),
                    width = key_width
                );
            }
            Status::MissingInA => {
                println!(
                    "  {:<width$}   {:<max_width$}   {}",
                    entry.key.green(),
                    "—".dimmed(),
                    value_b.green(),
                    width = key_width
                );
            }
            Status::MissingInB => {
                println!(
                    "  {:<width$}   {:<max_width$}   {}",
                    entry.key.red(),
                    value_a.red(),
                    "—".dimmed(),
                    width = key_width
                );
            }
        }
    }
}

/// Truncate a string to `max_len` characters, appending "..." if needed.
/// Counts chars, not bytes, to avoid splitting multibyte UTF-8 sequences.
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let limit = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(limit).collect();
        format!("{truncated}...")
    }
}
