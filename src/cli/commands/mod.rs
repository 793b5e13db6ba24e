pub mod diff;
pub mod export;
pub mod summary;

use std::path::Path;

use crate::adapters::parsers::env_parser::EnvParser;
use crate::cli::output;
use crate::core::errors::{EnvdiffError, Result};
use crate::core::models::parsed_env::ParsedEnv;

/// Read and parse one side of a comparison.
///
/// Existence and readability are checked here, before the core runs —
/// the parser itself never fails. A file that doesn't look like an env
/// file gets a warning, not an error: the tolerant parser will simply
/// drop lines it can't use.
pub fn load_env(path: &str, quiet: bool) -> Result<ParsedEnv> {
    let file = Path::new(path);

    if !file.exists() {
        return Err(EnvdiffError::FileNotFound {
            path: file.to_path_buf(),
        });
    }

    if !quiet && !looks_like_env_file(file) {
        output::warning(&format!("{path} does not look like a .env file"));
    }

    let content = std::fs::read_to_string(file)?;
    Ok(EnvParser::parse(&content))
}

/// True for names like `.env`, `.env.local`, `prod.env`, `dev.env.backup`.
fn looks_like_env_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.split('.').any(|part| part == "env"))
}
