use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{EnvdiffError, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".envdiff.toml";

/// Optional user configuration read from `.envdiff.toml`.
///
/// Every field has a built-in default, so a missing file (the common
/// case) behaves exactly like an empty one.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplaySection,
    pub export: ExportSection,
}

impl AppConfig {
    /// Load configuration from `path`, or from `.envdiff.toml` when no
    /// path is given.
    ///
    /// An explicitly requested file must exist; the default file is
    /// optional. A file that exists but does not parse is an error either
    /// way — silently ignoring a broken config hides typos.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (Path::new(p).to_path_buf(), true),
            None => (Path::new(DEFAULT_CONFIG_FILE).to_path_buf(), false),
        };

        if !config_path.exists() {
            if required {
                return Err(EnvdiffError::FileNotFound { path: config_path });
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| EnvdiffError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })
    }
}

/// The `[display]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Show rows whose values match on both sides. `envdiff diff
    /// --changed` overrides this to false for one run.
    pub show_equal: bool,
    /// Truncation width for values in the rendered table. Exports are
    /// never truncated.
    pub max_value_width: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            show_equal: true,
            max_value_width: 40,
        }
    }
}

/// The `[export]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Format used when `envdiff export` is run without `--format`.
    pub default_format: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
        }
    }
}
