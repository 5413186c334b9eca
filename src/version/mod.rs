//! Version values and version-specifier matching.
//!
//! This module provides:
//! - [`Version`] - a dotted version value with suffix-aware ordering
//! - [`SpecOp`] - comparison operators accepted in requirement expressions
//! - [`Specifier`] and [`SpecifierSet`] - constraint matching against a
//!   candidate version
//!
//! Pre-release versions participate in ordering like any other version (a
//! textual segment sorts below a numeric one, so `1.0.rc1` precedes `1.0.0`)
//! and are always acceptable matches; there is no exclusion switch.

use std::cmp::Ordering;
use std::fmt;

pub mod specifier;

pub use specifier::{SpecOp, Specifier, SpecifierSet};

/// One dot-separated segment of a version string.
///
/// A segment that parses as an unsigned integer is numeric; anything else
/// (pre-release tags like `rc1`, the wildcard `*`) stays textual.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Num(u64),
    Text(String),
}

impl Segment {
    fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Text(t) if t == "*")
    }
}

/// A version value parsed from a dotted string such as `3.16.2` or `2.2.3rc2`.
///
/// Comparison is segment-wise with zero-padding of the shorter version, so
/// `2.2` equals `2.2.0`. Numeric segments order above textual ones, which
/// places pre-release suffixes below the corresponding release. The textual
/// wildcard `*` compares equal to any segment.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<Segment>,
}

impl Version {
    /// Parse a version string. Never fails: unrecognized segments are kept
    /// as text and compared lexically.
    pub fn parse(input: &str) -> Self {
        let segments = input
            .trim()
            .split('.')
            .map(|part| match part.parse::<u64>() {
                Ok(n) => Segment::Num(n),
                Err(_) => Segment::Text(part.to_string()),
            })
            .collect();
        Version { segments }
    }

    /// Whether any segment is the `*` wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Segment at `index`, zero-padded past the end.
    fn segment(&self, index: usize) -> Segment {
        self.segments.get(index).cloned().unwrap_or(Segment::Num(0))
    }

    /// This version with its final segment replaced by the wildcard.
    ///
    /// `2.2` becomes `2.*`; used to express the prefix-match half of a
    /// compatible-release (`~=`) clause.
    pub(crate) fn with_last_wildcard(&self) -> Version {
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            *last = Segment::Text("*".to_string());
        }
        Version { segments }
    }

    /// Exclusive upper bound for a caret (`^`) range: increment the leftmost
    /// non-zero numeric segment and drop everything after it. When every
    /// numeric segment is zero, the last numeric segment is incremented
    /// instead (`^0.0` bounds at `0.1`). Returns `None` for versions with no
    /// numeric segments at all.
    pub(crate) fn caret_upper_bound(&self) -> Option<Version> {
        let first_nonzero = self
            .segments
            .iter()
            .position(|s| matches!(s, Segment::Num(n) if *n != 0));
        let index = match first_nonzero {
            Some(i) => i,
            None => self
                .segments
                .iter()
                .rposition(|s| matches!(s, Segment::Num(_)))?,
        };
        Some(self.bump_at(index))
    }

    /// Exclusive upper bound for a tilde (`~`) range: increment the second
    /// numeric segment when present, otherwise the first (`~1.7.1` bounds at
    /// `1.8`, `~2` bounds at `3`). Returns `None` for versions with no
    /// numeric segments.
    pub(crate) fn tilde_upper_bound(&self) -> Option<Version> {
        let numeric: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, Segment::Num(_)))
            .map(|(i, _)| i)
            .collect();
        let index = *numeric.get(1).or_else(|| numeric.first())?;
        Some(self.bump_at(index))
    }

    fn bump_at(&self, index: usize) -> Version {
        let mut segments = self.segments[..=index].to_vec();
        if let Segment::Num(n) = &mut segments[index] {
            *n += 1;
        }
        Version { segments }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Num(n) => n.to_string(),
                Segment::Text(t) => t.clone(),
            })
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", rendered)
    }
}

// Equality is wildcard-aware and zero-padded: `2.*` equals `2.7`, and `2.2`
// equals `2.2.0`. Mixed numeric/text segments are unequal unless one side is
// the wildcard.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let (a, b) = (self.segment(i), other.segment(i));
            if a.is_wildcard() || b.is_wildcard() {
                continue;
            }
            match (a, b) {
                (Segment::Num(a), Segment::Num(b)) if a == b => {}
                (Segment::Text(a), Segment::Text(b)) if a == b => {}
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let (a, b) = (self.segment(i), other.segment(i));
            if a.is_wildcard() || b.is_wildcard() {
                continue;
            }
            let ordering = match (a, b) {
                (Segment::Num(a), Segment::Num(b)) => a.cmp(&b),
                (Segment::Text(a), Segment::Text(b)) => a.cmp(&b),
                // a release segment outranks a pre-release tag
                (Segment::Num(_), Segment::Text(_)) => Ordering::Greater,
                (Segment::Text(_), Segment::Num(_)) => Ordering::Less,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
