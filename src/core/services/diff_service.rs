use std::collections::BTreeSet;

use crate::core::models::diff_result::{DiffEntry, DiffResult, Status};
use crate::core::models::parsed_env::ParsedEnv;

/// Compares two parsed env files and produces a structured diff.
pub struct DiffService;

impl DiffService {
    /// Compare two [`ParsedEnv`]s and classify every key in their union.
    ///
    /// - Keys only in `b` are `MissingInA` (`value_a` empty)
    /// - Keys only in `a` are `MissingInB` (`value_b` empty)
    /// - Keys in both with different values are `Different`
    /// - Keys in both with the same value are `Equal`
    ///
    /// Value comparison is exact: case-sensitive, no trimming. Results are
    /// sorted ascending by key bytes, which makes the output identical
    /// across runs and platforms for the same inputs.
    pub fn diff(a: &ParsedEnv, b: &ParsedEnv) -> DiffResult {
        // Union of keys, deduplicated and sorted via BTreeSet
        let all_keys: BTreeSet<&str> = a.keys().chain(b.keys()).collect();

        let entries = all_keys
            .into_iter()
            .map(|key| {
                let (status, value_a, value_b) = match (a.get(key), b.get(key)) {
                    (None, Some(vb)) => (Status::MissingInA, "", vb),
                    (Some(va), None) => (Status::MissingInB, va, ""),
                    (Some(va), Some(vb)) if va != vb => (Status::Different, va, vb),
                    (Some(va), Some(vb)) => (Status::Equal, va, vb),
                    // The union guarantees every key exists on at least one side
                    (None, None) => unreachable!("key absent from both inputs"),
                };
                DiffEntry {
                    key: key.to_string(),
                    status,
                    value_a: value_a.to_string(),
                    value_b: value_b.to_string(),
                }
            })
            .collect();

        DiffResult { entries }
    }
}
