use crate::core::errors::{EnvdiffError, Result};
use crate::core::models::diff_result::DiffResult;
use crate::core::traits::exporter::Exporter;

use super::json::DiffDocument;

/// YAML export: same document shape as the JSON export.
#[derive(Debug)]
pub struct YamlExporter;

impl Exporter for YamlExporter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        serde_yaml::to_string(&DiffDocument::new(result)).map_err(|e| {
            EnvdiffError::ExportFailed {
                detail: e.to_string(),
            }
        })
    }
}
