use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::diff_service::DiffService;

/// Execute the `envdiff summary` command: counts only, no table.
pub fn execute(file_a: &str, file_b: &str, quiet: bool) -> Result<()> {
    let env_a = super::load_env(file_a, quiet)?;
    let env_b = super::load_env(file_b, quiet)?;

    let result = DiffService::diff(&env_a, &env_b);
    let summary = result.summary();

    if !quiet {
        output::header(&format!("envdiff: {file_a} vs {file_b}"));
    }

    println!("  total:     {}", summary.total);
    println!("  equal:     {}", summary.equal);
    println!("  different: {}", summary.different);
    println!("  missing:   {}", summary.missing);

    if result.is_identical() {
        output::success("Files are identical");
    }

    Ok(())
}
