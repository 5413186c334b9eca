//! Serializable check reports for `--json` output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::manifest::LineDiagnostic;

use super::verdict::{CheckOutcome, Verdict};

/// One requirement's result in a report.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    /// Package name as written in the manifest.
    pub package: String,
    /// The full requirement expression.
    pub requirement: String,
    /// Installed version, if any package matched the canonical key.
    pub installed: Option<String>,
    /// `compatible`, `incompatible` or `not-installed`.
    pub verdict: &'static str,
}

/// A full check run, serialized for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Path of the manifest that was checked.
    pub manifest: String,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
    /// Diagnostics for manifest lines that failed to parse.
    pub diagnostics: Vec<String>,
    /// Per-requirement results in manifest order.
    pub results: Vec<CheckRecord>,
}

impl CheckReport {
    /// Build a report from validation outcomes.
    pub fn new(manifest: &str, diagnostics: &[LineDiagnostic], outcomes: &[CheckOutcome]) -> Self {
        let results = outcomes
            .iter()
            .map(|outcome| CheckRecord {
                package: outcome.requirement.name.clone(),
                requirement: outcome.requirement.to_string(),
                installed: outcome.verdict.installed().map(ToString::to_string),
                verdict: match outcome.verdict {
                    Verdict::Compatible { .. } => "compatible",
                    Verdict::Incompatible { .. } => "incompatible",
                    Verdict::NotInstalled => "not-installed",
                },
            })
            .collect();
        CheckReport {
            manifest: manifest.to_string(),
            checked_at: Utc::now(),
            diagnostics: diagnostics.iter().map(|d| d.message.clone()).collect(),
            results,
        }
    }
}
