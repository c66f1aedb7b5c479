use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ManifestEntry {
    pub file: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            CheckStatus::Pass => "✅",
            CheckStatus::Fail => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Present,
    Missing,
    Unreadable,
}

impl FileStatus {
    /// Marker printed in place of pattern lines when the file itself
    /// could not be checked.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            FileStatus::Present => None,
            FileStatus::Missing => Some("FILE MISSING"),
            FileStatus::Unreadable => Some("UNREADABLE"),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PatternOutcome {
    pub pattern: String,
    pub status: CheckStatus,
}

#[derive(Debug, Serialize, Clone)]
pub struct EntryReport {
    pub file: String,
    pub file_status: FileStatus,
    pub outcomes: Vec<PatternOutcome>,
}

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub overall: String,
    pub entries: Vec<EntryReport>,
}
