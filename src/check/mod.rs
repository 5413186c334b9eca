//! Requirement validation.
//!
//! Joins the parsed manifest with the installed-package map and derives a
//! [`Verdict`] per requirement. Verdicts are reportable outcomes, never
//! errors: an absent or incompatible package still leaves the run exiting
//! zero unless strict mode is requested.

pub mod report;
pub mod validator;
pub mod verdict;

pub use report::{CheckRecord, CheckReport};
pub use validator::validate;
pub use verdict::{CheckOutcome, Verdict};
