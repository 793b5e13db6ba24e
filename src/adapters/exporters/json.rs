use serde::Serialize;

use crate::core::errors::{EnvdiffError, Result};
use crate::core::models::diff_result::{DiffEntry, DiffResult, DiffSummary};
use crate::core::traits::exporter::Exporter;

/// The document shape shared by the JSON and YAML exports: the full entry
/// list plus the summary counts embedded alongside it.
#[derive(Serialize)]
pub(super) struct DiffDocument<'a> {
    pub diff: &'a [DiffEntry],
    pub summary: DiffSummary,
}

impl<'a> DiffDocument<'a> {
    pub fn new(result: &'a DiffResult) -> Self {
        Self {
            diff: &result.entries,
            summary: result.summary(),
        }
    }
}

/// JSON export: `{ "diff": [...], "summary": {...} }`, pretty-printed.
#[derive(Debug)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        serde_json::to_string_pretty(&DiffDocument::new(result)).map_err(|e| {
            EnvdiffError::ExportFailed {
                detail: e.to_string(),
            }
        })
    }
}
