use crate::core::errors::Result;
use crate::core::models::diff_result::DiffResult;
use crate::core::traits::exporter::Exporter;

/// XML export: an `<envdiff>` document with the summary and one `<entry>`
/// element per compared key.
#[derive(Debug)]
pub struct XmlExporter;

impl Exporter for XmlExporter {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn extension(&self) -> &'static str {
        "xml"
    }

    fn export(&self, result: &DiffResult) -> Result<String> {
        let summary = result.summary();

        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<envdiff>\n");
        out.push_str(&format!(
            "  <summary total=\"{}\" equal=\"{}\" different=\"{}\" missing=\"{}\"/>\n",
            summary.total, summary.equal, summary.different, summary.missing
        ));

        for entry in result.iter() {
            out.push_str(&format!(
                "  <entry key=\"{}\" status=\"{}\">\n    <value_a>{}</value_a>\n    <value_b>{}</value_b>\n  </entry>\n",
                escape(&entry.key),
                entry.status,
                escape(&entry.value_a),
                escape(&entry.value_b),
            ));
        }

        out.push_str("</envdiff>\n");
        Ok(out)
    }
}

/// Escape the five XML entities. Sufficient for both attribute and
/// element content as produced above.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
