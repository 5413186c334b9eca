//! Requirements manifest loading and parsing.
//!
//! A manifest is a plain text file with one requirement expression per line.
//! Blank lines and `#` comments are skipped; a malformed line produces a
//! diagnostic and is skipped, never aborting the run. A missing manifest file
//! is the one fatal condition, surfaced as
//! [`KitlistError::ManifestNotFound`](crate::error::KitlistError::ManifestNotFound).

pub mod loader;
pub mod requirement;

pub use loader::{load_manifest, LineDiagnostic, ParsedManifest};
pub use requirement::{canonical_key, Requirement};
