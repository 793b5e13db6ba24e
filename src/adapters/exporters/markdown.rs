use crate::core::errors::Result;
use crate::core::models::diff_result::DiffResult;
use crate::core::traits::exporter::Exporter;

/// Markdown export: a pipe table with one row per compared key.
#[derive(Debug)]
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        let mut out = String::from("| Key | Status | Value A | Value B |\n|---|---|---|---|\n");

        for entry in result.iter() {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_cell(&entry.key),
                entry.status,
                escape_cell(&entry.value_a),
                escape_cell(&entry.value_b),
            ));
        }

        Ok(out)
    }
}

/// Pipe characters inside a cell would break the table grid.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
