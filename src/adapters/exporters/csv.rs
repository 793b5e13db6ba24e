use crate::core::errors::{EnvdiffError, Result};
use crate::core::models::diff_result::DiffResult;
use crate::core::traits::exporter::Exporter;

/// CSV export: `key,status,value_a,value_b`, RFC 4180 quoting.
#[derive(Debug)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["key", "status", "value_a", "value_b"])
            .map_err(|e| EnvdiffError::ExportFailed {
                detail: e.to_string(),
            })?;

        for entry in result.iter() {
            writer
                .write_record([
                    entry.key.as_str(),
                    entry.status.as_str(),
                    entry.value_a.as_str(),
                    entry.value_b.as_str(),
                ])
                .map_err(|e| EnvdiffError::ExportFailed {
                    detail: e.to_string(),
                })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EnvdiffError::ExportFailed {
                detail: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|e| EnvdiffError::ExportFailed {
            detail: e.to_string(),
        })
    }
}
