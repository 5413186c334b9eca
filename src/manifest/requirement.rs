//! Requirement expressions.

use std::fmt;

use regex::Regex;

use crate::error::{KitlistError, Result};
use crate::version::{Specifier, SpecifierSet, Version};

/// Canonical lookup key for a package name.
///
/// Lowercases the name and collapses every run of `-`, `_` and `.` into a
/// single `-`, so `Zope.Interface`, `zope_interface` and `zope-interface`
/// all key identically whichever source they came from.
pub fn canonical_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut in_separator = false;
    for ch in name.chars() {
        if matches!(ch, '-' | '_' | '.') {
            in_separator = true;
        } else {
            if in_separator && !key.is_empty() {
                key.push('-');
            }
            in_separator = false;
            for lower in ch.to_lowercase() {
                key.push(lower);
            }
        }
    }
    key
}

/// One requirement parsed from a manifest line, e.g. `zipp>=3.7,<4`.
///
/// Extras and environment markers are retained for display but never
/// evaluated; compatibility is decided by the specifier set alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Name as written in the manifest.
    pub name: String,
    /// Canonical lookup key derived from `name`.
    pub key: String,
    /// Extras listed in brackets after the name, if any.
    pub extras: Vec<String>,
    /// Version constraints in declaration order.
    pub specifiers: SpecifierSet,
    /// Raw environment marker text after `;`, if any.
    pub marker: Option<String>,
}

impl Requirement {
    /// Parse a single requirement expression.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(parse_error(input, "empty requirement"));
        }

        let head = Regex::new(
            r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[(?P<extras>[^\]]*)\])?\s*(?P<rest>.*)$",
        )
        .map_err(|e| parse_error(input, &e.to_string()))?;

        let caps = head
            .captures(trimmed)
            .ok_or_else(|| parse_error(input, "expected a package name"))?;

        let name = caps["name"].to_string();
        let extras = caps
            .name("extras")
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(|e| e.trim().to_string())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rest = caps
            .name("rest")
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if rest.starts_with('@') {
            return Err(parse_error(input, "URL requirements are not supported"));
        }

        let (spec_text, marker) = match rest.split_once(';') {
            Some((specs, marker)) => (specs.trim(), Some(marker.trim().to_string())),
            None => (rest, None),
        };

        let specifiers = parse_specifiers(input, spec_text)?;

        Ok(Requirement {
            key: canonical_key(&name),
            name,
            extras,
            specifiers,
            marker,
        })
    }
}

fn parse_specifiers(input: &str, spec_text: &str) -> Result<SpecifierSet> {
    if spec_text.is_empty() {
        return Ok(SpecifierSet::default());
    }
    let clause_re = Regex::new(r"^(?P<op>===|==|~=|!=|<=|>=|<|>|\^|~)\s*(?P<version>[A-Za-z0-9*+!._-]+)$")
        .map_err(|e| parse_error(input, &e.to_string()))?;

    let mut clauses = Vec::new();
    for raw in spec_text.split(',') {
        let clause = raw.trim();
        let caps = clause_re
            .captures(clause)
            .ok_or_else(|| parse_error(input, &format!("invalid specifier clause '{}'", clause)))?;
        let op = caps["op"]
            .parse()
            .map_err(|e: String| parse_error(input, &e))?;
        clauses.push(Specifier::new(op, Version::parse(&caps["version"])));
    }
    Ok(SpecifierSet::new(clauses))
}

fn parse_error(input: &str, message: &str) -> KitlistError {
    KitlistError::RequirementParse {
        input: input.trim().to_string(),
        message: message.to_string(),
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if !self.specifiers.is_empty() {
            write!(f, "{}", self.specifiers)?;
        }
        if let Some(marker) = &self.marker {
            write!(f, "; {}", marker)?;
        }
        Ok(())
    }
}
