//! Example redaction for documentation output.
//!
//! Captured command output contains real filesystem paths and environment
//! names; before it lands in an article those are rewritten to anonymized
//! stand-ins. Redaction is an ordered list of literal substring rules applied
//! sequentially — each rule operates on the output of the previous one, so a
//! later rule may target text an earlier rule produced. The rules are never
//! merged into a single pass.

pub mod demo;
pub mod rule;

pub use demo::demo_blocks;
pub use rule::{RedactRule, RuleSet};
