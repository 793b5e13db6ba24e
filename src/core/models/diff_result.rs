use serde::Serialize;

/// Classification of one key's comparison outcome.
///
/// Exactly one status applies to every key in the union of the two
/// compared files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Present in both files with identical values.
    Equal,
    /// Present in both files with different values.
    Different,
    /// Absent from file A, present in file B.
    MissingInA,
    /// Present in file A, absent from file B.
    MissingInB,
}

impl Status {
    /// The wire name of the status, as it appears in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Equal => "equal",
            Status::Different => "different",
            Status::MissingInA => "missing_in_a",
            Status::MissingInB => "missing_in_b",
        }
    }

}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a comparison.
///
/// `value_a` / `value_b` are empty strings — never options — when the key
/// is absent on that side. Exports and the table renderer rely on this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub key: String,
    pub status: Status,
    pub value_a: String,
    pub value_b: String,
}

/// Per-status counts over a `DiffResult`, embedded in structured exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub total: usize,
    pub equal: usize,
    pub different: usize,
    /// Keys missing on either side (both `missing_in_*` statuses).
    pub missing: usize,
}

/// Result of comparing two parsed env files.
///
/// Entries are sorted ascending by key and cover exactly the union of the
/// two input key sets — equal keys included. The result is replaced
/// wholesale on recomputation, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter()
    }

    /// The filtered view: every entry except `Equal` ones, order preserved.
    ///
    /// A pure filter over the existing result — nothing is re-parsed or
    /// re-diffed to build it.
    pub fn changes(&self) -> DiffResult {
        DiffResult {
            entries: self
                .entries
                .iter()
                .filter(|e| e.status != Status::Equal)
                .cloned()
                .collect(),
        }
    }

    /// Count entries per status in a single pass.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary {
            total: self.entries.len(),
            equal: 0,
            different: 0,
            missing: 0,
        };
        for entry in &self.entries {
            match entry.status {
                Status::Equal => summary.equal += 1,
                Status::Different => summary.different += 1,
                Status::MissingInA | Status::MissingInB => summary.missing += 1,
            }
        }
        summary
    }

    /// True iff the two compared files define the same variables with the
    /// same values. Vacuously true for an empty result (two empty files).
    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|e| e.status == Status::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, status: Status, a: &str, b: &str) -> DiffEntry {
        DiffEntry {
            key: key.to_string(),
            status,
            value_a: a.to_string(),
            value_b: b.to_string(),
        }
    }

    fn sample() -> DiffResult {
        DiffResult {
            entries: vec![
                entry("API_URL", Status::Equal, "https://x", "https://x"),
                entry("DEBUG", Status::MissingInB, "true", ""),
                entry("NEW", Status::MissingInA, "", "beta"),
                entry("NODE_ENV", Status::Different, "production", "development"),
            ],
        }
    }

    #[test]
    fn changes_drops_equal_and_keeps_order() {
        let filtered = sample().changes();
        let keys: Vec<&str> = filtered.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["DEBUG", "NEW", "NODE_ENV"]);
        assert!(filtered.iter().all(|e| e.status != Status::Equal));
    }

    #[test]
    fn summary_counts_every_status() {
        let summary = sample().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.equal, 1);
        assert_eq!(summary.different, 1);
        assert_eq!(summary.missing, 2);
        assert_eq!(
            summary.total,
            summary.equal + summary.different + summary.missing
        );
    }

    #[test]
    fn identical_requires_all_equal() {
        assert!(!sample().is_identical());

        let all_equal = DiffResult {
            entries: vec![entry("A", Status::Equal, "1", "1")],
        };
        assert!(all_equal.is_identical());
    }

    #[test]
    fn empty_result_is_vacuously_identical() {
        let empty = DiffResult { entries: vec![] };
        assert!(empty.is_identical());
        assert_eq!(empty.summary().total, 0);
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(Status::Equal.as_str(), "equal");
        assert_eq!(Status::MissingInA.as_str(), "missing_in_a");
        assert_eq!(Status::MissingInB.as_str(), "missing_in_b");
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::MissingInA).unwrap();
        assert_eq!(json, "\"missing_in_a\"");
    }
}
