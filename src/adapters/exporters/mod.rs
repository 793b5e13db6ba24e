pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;
pub mod xml;
pub mod yaml;

use crate::core::errors::{EnvdiffError, Result};
use crate::core::traits::exporter::Exporter;

/// All exporters shipped with envdiff, in menu order.
pub fn all() -> Vec<Box<dyn Exporter>> {
    vec![
        Box::new(csv::CsvExporter),
        Box::new(markdown::MarkdownExporter),
        Box::new(json::JsonExporter),
        Box::new(yaml::YamlExporter),
        Box::new(xml::XmlExporter),
        Box::new(text::TextExporter),
    ]
}

/// Look up an exporter by an output file extension (e.g. `"md"`).
pub fn by_extension(ext: &str) -> Option<Box<dyn Exporter>> {
    all()
        .into_iter()
        .find(|e| e.extension() == ext || e.name() == ext)
}

/// Look up an exporter by its command-line name.
pub fn by_name(name: &str) -> Result<Box<dyn Exporter>> {
    all()
        .into_iter()
        .find(|e| e.name() == name)
        .ok_or_else(|| EnvdiffError::UnknownFormat {
            name: name.to_string(),
            available: all()
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::models::diff_result::{DiffEntry, DiffResult, Status};

    /// The concrete comparison used by all exporter tests.
    pub(crate) fn sample_result() -> DiffResult {
        DiffResult {
            entries: vec![
                DiffEntry {
                    key: "API_URL".into(),
                    status: Status::Equal,
                    value_a: "https://x".into(),
                    value_b: "https://x".into(),
                },
                DiffEntry {
                    key: "NEW".into(),
                    status: Status::MissingInA,
                    value_a: "".into(),
                    value_b: "beta".into(),
                },
                DiffEntry {
                    key: "NODE_ENV".into(),
                    status: Status::Different,
                    value_a: "production".into(),
                    value_b: "development".into(),
                },
            ],
        }
    }

    #[test]
    fn every_format_resolves_by_name() {
        for name in ["csv", "markdown", "json", "yaml", "xml", "text"] {
            assert_eq!(by_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn extension_lookup_covers_short_names() {
        assert_eq!(by_extension("md").unwrap().name(), "markdown");
        assert_eq!(by_extension("txt").unwrap().name(), "text");
        assert_eq!(by_extension("csv").unwrap().name(), "csv");
        assert!(by_extension("xlsx").is_none());
    }

    #[test]
    fn unknown_format_lists_available() {
        let err = by_name("pdf").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("pdf"));
        assert!(msg.contains("csv, markdown, json, yaml, xml, text"));
    }

    #[test]
    fn exports_are_deterministic() {
        for exporter in all() {
            let first = exporter.export(&sample_result()).unwrap();
            let second = exporter.export(&sample_result()).unwrap();
            assert_eq!(first, second, "{} export not stable", exporter.name());
        }
    }
}
