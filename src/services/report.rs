use crate::domain::models::{CheckStatus, EntryReport, FileStatus, VerifyReport};
use crate::services::checker::check_entry;
use crate::services::manifest::CompiledEntry;
use std::path::Path;

pub fn run_manifest(base: &Path, entries: &[CompiledEntry]) -> VerifyReport {
    let entries: Vec<EntryReport> = entries.iter().map(|e| check_entry(base, e)).collect();
    let overall = if entries.iter().all(entry_ok) {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();
    VerifyReport { overall, entries }
}

fn entry_ok(e: &EntryReport) -> bool {
    e.file_status == FileStatus::Present
        && e.outcomes.iter().all(|o| o.status == CheckStatus::Pass)
}

/// Text rendering: one `<pattern>: <glyph>` line per outcome, in manifest
/// order. A file that could not be checked contributes a single
/// `<file>: <marker>` line in place of its pattern lines.
///
/// Results stay grouped per entry, so a pattern string shared by two
/// files keeps one line per file instead of collapsing.
pub fn render_lines(report: &VerifyReport) -> Vec<String> {
    let mut lines = Vec::new();
    for e in &report.entries {
        match e.file_status.marker() {
            Some(marker) => lines.push(format!("{}: {}", e.file, marker)),
            None => {
                for o in &e.outcomes {
                    lines.push(format!("{}: {}", o.pattern, o.status.glyph()));
                }
            }
        }
    }
    lines
}
