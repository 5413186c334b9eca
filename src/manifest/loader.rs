//! Manifest file reading with per-line recovery.

use std::fs;
use std::path::Path;

use crate::error::{KitlistError, Result};

use super::requirement::Requirement;

/// A diagnostic for one manifest line that failed to parse.
#[derive(Debug, Clone)]
pub struct LineDiagnostic {
    /// 1-based line number in the manifest file.
    pub line_no: usize,
    /// Message describing the failure, including the offending input.
    pub message: String,
}

/// The result of loading a manifest: requirements in file order plus
/// diagnostics for any lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedManifest {
    /// Successfully parsed requirements, in file order.
    pub requirements: Vec<Requirement>,
    /// One entry per malformed line, in file order.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Load a requirements manifest.
///
/// Blank lines and `#` comments are skipped. A malformed line becomes a
/// [`LineDiagnostic`] and processing continues; only a missing file is an
/// error.
pub fn load_manifest(path: &Path) -> Result<ParsedManifest> {
    if !path.exists() {
        return Err(KitlistError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!("loaded manifest {} ({} bytes)", path.display(), content.len());

    let mut parsed = ParsedManifest::default();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Requirement::parse(line) {
            Ok(req) => parsed.requirements.push(req),
            Err(e) => parsed.diagnostics.push(LineDiagnostic {
                line_no: index + 1,
                message: e.to_string(),
            }),
        }
    }
    Ok(parsed)
}
