use crate::core::errors::Result;
use crate::core::models::diff_result::DiffResult;
use crate::core::traits::exporter::Exporter;

/// Plain-text export: one block per key with both values spelled out.
#[derive(Debug)]
pub struct TextExporter;

impl Exporter for TextExporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        let mut out = String::new();

        for entry in result.iter() {
            out.push_str(&format!(
                "{}: [{}]\nA: {}\nB: {}\n\n",
                entry.key, entry.status, entry.value_a, entry.value_b
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::exporters::tests::sample_result;

    #[test]
    fn text_blocks_per_entry() {
        let out = TextExporter.export(&sample_result()).unwrap();

        assert!(out.starts_with("API_URL: [equal]\nA: https://x\nB: https://x\n"));
        assert!(out.contains("NEW: [missing_in_a]\nA: \nB: beta\n"));
        assert!(out.contains("NODE_ENV: [different]\nA: production\nB: development\n"));
    }

    #[test]
    fn text_empty_result_is_empty() {
        let empty = DiffResult { entries: vec![] };
        assert_eq!(TextExporter.export(&empty).unwrap(), "");
    }
}
