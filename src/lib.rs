//! Kitlist - Audit installed Python packages against a requirements manifest.
//!
//! Kitlist bundles two small documentation-support utilities behind one CLI:
//! a requirement validator that compares a requirements manifest against the
//! packages installed in the running environment, and an example redactor
//! that rewrites captured command output for publication.
//!
//! # Modules
//!
//! - [`check`] - Verdict derivation and check reports
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Requirements manifest loading and parsing
//! - [`redact`] - Ordered-rule text redaction
//! - [`site`] - Installed-package enumeration from site directories
//! - [`ui`] - Terminal output and the test mock
//! - [`version`] - Version values and specifier matching
//!
//! # Example
//!
//! ```
//! use kitlist::manifest::Requirement;
//! use kitlist::version::Version;
//!
//! let req = Requirement::parse("zipp>=3.7,<4").unwrap();
//! assert!(req.specifiers.matches(&Version::parse("3.16.2")));
//! assert!(!req.specifiers.matches(&Version::parse("4.0")));
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod redact;
pub mod site;
pub mod ui;
pub mod version;

pub use error::{KitlistError, Result};
