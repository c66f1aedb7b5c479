use crate::domain::models::{Manifest, ManifestEntry};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("invalid pattern `{pattern}` for {file}: {source}")]
    InvalidPattern {
        file: String,
        pattern: String,
        source: regex::Error,
    },
    #[error("duplicate manifest entry for file: {0}")]
    DuplicateFile(String),
}

/// One manifest entry with its patterns compiled, ready for checking.
pub struct CompiledEntry {
    pub file: String,
    pub patterns: Vec<(String, Regex)>,
}

/// The fixed check table for the deployment tree this tool ships with.
///
/// Entry order is the report order.
pub fn builtin() -> Manifest {
    Manifest {
        entries: vec![
            // Docker/compose/live reload wiring
            entry(
                "docker-compose.yml",
                &[
                    "volumes:.*mcp_config.db",
                    "command:.*dev",
                    "certbot/certbot",
                    "9229",
                ],
            ),
            // TLS termination and routing
            entry(
                "nginx.conf",
                &["listen 443 ssl", "certbot", "proxy_pass http://app:3000"],
            ),
            // Required environment variables documented
            entry(
                ".env.example",
                &["NODE_ENV", "PORT", "MCP_DB_PATH", "DEBUG_MODE"],
            ),
            // Persistence and session config
            entry("src/lib/mcp/config.ts", &["sqlite3", "MCP_COOKIE_KEY"]),
            // Idempotent config writes in the API route
            entry(
                "src/app/api/mcp/config/route.ts",
                &["session_id", "INSERT OR REPLACE"],
            ),
        ],
    }
}

fn entry(file: &str, patterns: &[&str]) -> ManifestEntry {
    ManifestEntry {
        file: file.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn load(path: &Path) -> anyhow::Result<Manifest> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Validates the manifest and compiles every pattern up front, so a bad
/// user-supplied manifest is rejected before any target file is read.
pub fn compile(manifest: &Manifest) -> Result<Vec<CompiledEntry>, ManifestError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for e in &manifest.entries {
        if !seen.insert(e.file.clone()) {
            return Err(ManifestError::DuplicateFile(e.file.clone()));
        }
        let mut patterns = Vec::new();
        for p in &e.patterns {
            let re = Regex::new(p).map_err(|source| ManifestError::InvalidPattern {
                file: e.file.clone(),
                pattern: p.clone(),
                source,
            })?;
            patterns.push((p.clone(), re));
        }
        out.push(CompiledEntry {
            file: e.file.clone(),
            patterns,
        });
    }
    Ok(out)
}

/// Manifest paths resolve against the directory containing the tool
/// itself, not the invocation working directory.
pub fn base_dir(override_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(d) = override_dir {
        return Ok(d.to_path_buf());
    }
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
