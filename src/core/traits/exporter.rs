use crate::core::errors::Result;
use crate::core::models::diff_result::DiffResult;

/// Port for serializing a comparison into an output format.
///
/// Every exporter works from the `DiffResult` alone (plus the summary it
/// derives from it) — no exporter re-reads files or re-runs the diff, so
/// the same result always serializes to the same bytes.
pub trait Exporter: Send + Sync + std::fmt::Debug {
    /// Format name used on the command line (e.g. `"csv"`).
    fn name(&self) -> &'static str;

    /// Suggested file extension, without the dot (e.g. `"csv"`).
    fn extension(&self) -> &'static str;

    /// Serialize the comparison to a string in this format.
    fn export(&self, result: &DiffResult) -> Result<String>;
}
