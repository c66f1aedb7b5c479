use crate::domain::models::{CheckStatus, EntryReport, FileStatus, PatternOutcome};
use crate::services::manifest::CompiledEntry;
use std::path::Path;

/// Runs one manifest entry against the tree under `base`.
///
/// Missing and unreadable files are results, not errors: every expected
/// problem surfaces in the report and never aborts the batch. A missing
/// or unreadable file skips all of its patterns.
pub fn check_entry(base: &Path, entry: &CompiledEntry) -> EntryReport {
    let path = base.join(&entry.file);
    if !path.exists() {
        return EntryReport {
            file: entry.file.clone(),
            file_status: FileStatus::Missing,
            outcomes: Vec::new(),
        };
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => {
            return EntryReport {
                file: entry.file.clone(),
                file_status: FileStatus::Unreadable,
                outcomes: Vec::new(),
            }
        }
    };

    // Unanchored, case-sensitive search over the whole content.
    let outcomes = entry
        .patterns
        .iter()
        .map(|(raw, re)| PatternOutcome {
            pattern: raw.clone(),
            status: if re.is_match(&content) {
                CheckStatus::Pass
            } else {
                CheckStatus::Fail
            },
        })
        .collect();

    EntryReport {
        file: entry.file.clone(),
        file_status: FileStatus::Present,
        outcomes,
    }
}
