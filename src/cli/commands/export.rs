use crate::adapters::exporters;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::diff_service::DiffService;

/// Execute the `envdiff export` command.
///
/// Runs the same parse-and-diff pipeline as `diff`, then hands the
/// result to the chosen exporter. The serialized document goes to stdout
/// unless `--output` names a file.
pub fn execute(
    file_a: &str,
    file_b: &str,
    format: Option<&str>,
    output_path: Option<&str>,
    changed_only: bool,
    config: &AppConfig,
    quiet: bool,
) -> Result<()> {
    let env_a = super::load_env(file_a, quiet)?;
    let env_b = super::load_env(file_b, quiet)?;

    let result = DiffService::diff(&env_a, &env_b);
    let exported = if changed_only {
        result.changes()
    } else {
        result
    };

    // Format resolution: explicit flag, then the output file's extension,
    // then the configured default
    let exporter = match format {
        Some(name) => exporters::by_name(name)?,
        None => match output_path
            .and_then(|p| std::path::Path::new(p).extension())
            .and_then(|ext| ext.to_str())
            .and_then(exporters::by_extension)
        {
            Some(exporter) => exporter,
            None => exporters::by_name(&config.export.default_format)?,
        },
    };
    let document = exporter.export(&exported)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &document)?;
            if !quiet {
                output::success(&format!(
                    "Wrote {} {} entries to {path}",
                    exported.len(),
                    exporter.name()
                ));
            }
        }
        None => print!("{document}"),
    }

    Ok(())
}
