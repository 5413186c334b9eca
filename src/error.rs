//! Error types for kitlist operations.
//!
//! This module defines [`KitlistError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `KitlistError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `KitlistError::Other`) for unexpected errors
//! - A malformed manifest line is NOT an error at the run level: it is recovered
//!   per-line and surfaced as a diagnostic, while a missing manifest file is
//!   fatal and maps to its own exit status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kitlist operations.
#[derive(Debug, Error)]
pub enum KitlistError {
    /// Requirements manifest not found at the expected location.
    #[error("Requirements manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a single requirement expression.
    #[error("Failed to parse requirement '{input}': {message}")]
    RequirementParse { input: String, message: String },

    /// Redaction rules file not found.
    #[error("Redaction rules not found: {path}")]
    RulesNotFound { path: PathBuf },

    /// Failed to parse a redaction rules file.
    #[error("Failed to parse rules at {path}: {message}")]
    RulesParse { path: PathBuf, message: String },

    /// Failed to read an input file passed on the command line.
    #[error("Failed to read {path}: {message}")]
    InputRead { path: PathBuf, message: String },

    /// Querying the Python interpreter for site directories failed.
    #[error("Failed to query site directories from '{python}': {message}")]
    InterpreterQuery { python: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kitlist operations.
pub type Result<T> = std::result::Result<T, KitlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = KitlistError::ManifestNotFound {
            path: PathBuf::from("/tmp/requirements.txt"),
        };
        assert!(err.to_string().contains("/tmp/requirements.txt"));
    }

    #[test]
    fn requirement_parse_displays_input_and_message() {
        let err = KitlistError::RequirementParse {
            input: "zipp===".into(),
            message: "missing version".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("zipp==="));
        assert!(msg.contains("missing version"));
    }

    #[test]
    fn rules_not_found_displays_path() {
        let err = KitlistError::RulesNotFound {
            path: PathBuf::from("rules.yml"),
        };
        assert!(err.to_string().contains("rules.yml"));
    }

    #[test]
    fn rules_parse_displays_path_and_message() {
        let err = KitlistError::RulesParse {
            path: PathBuf::from("rules.yml"),
            message: "expected a sequence".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rules.yml"));
        assert!(msg.contains("expected a sequence"));
    }

    #[test]
    fn interpreter_query_displays_python_and_message() {
        let err = KitlistError::InterpreterQuery {
            python: "python3".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KitlistError = io_err.into();
        assert!(matches!(err, KitlistError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(KitlistError::RequirementParse {
                input: "x".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
