//! Version-specifier operators and constraint sets.

use std::fmt;
use std::str::FromStr;

use super::Version;

/// A comparison operator in a requirement expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecOp {
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEq,
    /// `==` (wildcard-aware)
    Eq,
    /// `!=`
    NotEq,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEq,
    /// `~=` compatible release
    Compatible,
    /// `===` arbitrary string equality
    ArbitraryEq,
    /// `^` caret range
    Caret,
    /// `~` tilde range
    Tilde,
}

impl FromStr for SpecOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::LessThan),
            "<=" => Ok(Self::LessThanOrEq),
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::NotEq),
            ">" => Ok(Self::GreaterThan),
            ">=" => Ok(Self::GreaterThanOrEq),
            "~=" => Ok(Self::Compatible),
            "===" => Ok(Self::ArbitraryEq),
            "^" => Ok(Self::Caret),
            "~" => Ok(Self::Tilde),
            _ => Err(format!("unknown operator: {}", s)),
        }
    }
}

impl fmt::Display for SpecOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::LessThan => "<",
            Self::LessThanOrEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEq => ">=",
            Self::Compatible => "~=",
            Self::ArbitraryEq => "===",
            Self::Caret => "^",
            Self::Tilde => "~",
        };
        write!(f, "{}", op)
    }
}

/// A single operator/version clause, e.g. `>=1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub op: SpecOp,
    pub version: Version,
}

impl Specifier {
    /// Create a new specifier clause.
    pub fn new(op: SpecOp, version: Version) -> Self {
        Self { op, version }
    }

    /// Whether `candidate` satisfies this clause. Pre-release candidates are
    /// compared like any other version.
    pub fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            SpecOp::LessThan => candidate < &self.version,
            SpecOp::LessThanOrEq => candidate <= &self.version,
            SpecOp::Eq => candidate == &self.version,
            SpecOp::NotEq => candidate != &self.version,
            SpecOp::GreaterThan => candidate > &self.version,
            SpecOp::GreaterThanOrEq => candidate >= &self.version,
            // ~=V is >=V plus prefix equality with the last segment wildcarded
            SpecOp::Compatible => {
                candidate >= &self.version && *candidate == self.version.with_last_wildcard()
            }
            SpecOp::ArbitraryEq => candidate.to_string() == self.version.to_string(),
            SpecOp::Caret => in_range(candidate, &self.version, self.version.caret_upper_bound()),
            SpecOp::Tilde => in_range(candidate, &self.version, self.version.tilde_upper_bound()),
        }
    }
}

/// Range check shared by caret and tilde: at least `lower`, below `upper`
/// when an upper bound exists.
fn in_range(candidate: &Version, lower: &Version, upper: Option<Version>) -> bool {
    if candidate < lower {
        return false;
    }
    match upper {
        Some(bound) => candidate < &bound,
        None => true,
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

/// An ordered conjunction of specifier clauses, e.g. `>=1.0,<2.0`.
///
/// The empty set matches every version (a bare package name constrains
/// nothing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecifierSet {
    clauses: Vec<Specifier>,
}

impl SpecifierSet {
    /// Create a specifier set from clauses in declaration order.
    pub fn new(clauses: Vec<Specifier>) -> Self {
        Self { clauses }
    }

    /// Whether no clauses are present.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in declaration order.
    pub fn clauses(&self) -> &[Specifier] {
        &self.clauses
    }

    /// Whether `candidate` satisfies every clause.
    pub fn matches(&self, candidate: &Version) -> bool {
        self.clauses.iter().all(|c| c.matches(candidate))
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .clauses
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(op: &str, version: &str) -> Specifier {
        Specifier::new(op.parse().unwrap(), Version::parse(version))
    }

    #[test]
    fn op_round_trips_through_str() {
        for op in ["<", "<=", "==", "!=", ">", ">=", "~=", "===", "^", "~"] {
            assert_eq!(op.parse::<SpecOp>().unwrap().to_string(), op);
        }
        assert!("=>".parse::<SpecOp>().is_err());
    }

    #[test]
    fn eq_is_wildcard_aware() {
        assert!(spec("==", "2.*").matches(&Version::parse("2.7")));
        assert!(!spec("==", "2.*").matches(&Version::parse("3.0")));
        assert!(spec("==", "2.2").matches(&Version::parse("2.2.0")));
    }

    #[test]
    fn ordering_operators() {
        assert!(spec(">=", "1.0").matches(&Version::parse("1.0")));
        assert!(spec(">", "1.0").matches(&Version::parse("1.0.1")));
        assert!(!spec(">", "1.0").matches(&Version::parse("1.0")));
        assert!(spec("<", "2.0").matches(&Version::parse("1.9.9")));
        assert!(!spec("<=", "2.0").matches(&Version::parse("2.0.1")));
        assert!(spec("!=", "1.5").matches(&Version::parse("1.6")));
    }

    #[test]
    fn compatible_release() {
        // ~=2.2 is >=2.2, ==2.*
        assert!(spec("~=", "2.2").matches(&Version::parse("2.2")));
        assert!(spec("~=", "2.2").matches(&Version::parse("2.9")));
        assert!(!spec("~=", "2.2").matches(&Version::parse("2.1")));
        assert!(!spec("~=", "2.2").matches(&Version::parse("3.0")));
        // ~=1.4.5 is >=1.4.5, ==1.4.*
        assert!(spec("~=", "1.4.5").matches(&Version::parse("1.4.9")));
        assert!(!spec("~=", "1.4.5").matches(&Version::parse("1.5.0")));
    }

    #[test]
    fn arbitrary_equality_is_textual() {
        assert!(spec("===", "1.0+local").matches(&Version::parse("1.0+local")));
        assert!(!spec("===", "1.0").matches(&Version::parse("1.0.0")));
    }

    #[test]
    fn caret_range() {
        assert!(spec("^", "1.7.1").matches(&Version::parse("1.20")));
        assert!(!spec("^", "1.7.1").matches(&Version::parse("2")));
        assert!(!spec("^", "1.7.1").matches(&Version::parse("1.6")));
        assert!(spec("^", "0.0.3").matches(&Version::parse("0.0.3.9")));
        assert!(!spec("^", "0.0.3").matches(&Version::parse("0.0.4")));
    }

    #[test]
    fn tilde_range() {
        assert!(spec("~", "1.7.1").matches(&Version::parse("1.7.2")));
        assert!(!spec("~", "1.7.1").matches(&Version::parse("1.8")));
        assert!(spec("~", "2").matches(&Version::parse("2.9.1")));
        assert!(!spec("~", "2").matches(&Version::parse("3")));
    }

    #[test]
    fn prerelease_candidates_match() {
        assert!(spec(">=", "1.0.rc1").matches(&Version::parse("1.0.rc2")));
        assert!(spec("<", "1.0.0").matches(&Version::parse("1.0.rc1")));
    }

    #[test]
    fn set_is_a_conjunction() {
        let set = SpecifierSet::new(vec![spec(">=", "0.2"), spec("<", "0.3")]);
        assert!(set.matches(&Version::parse("0.2.5")));
        assert!(!set.matches(&Version::parse("0.3")));
        assert!(!set.matches(&Version::parse("0.1")));
    }

    #[test]
    fn empty_set_matches_everything() {
        let set = SpecifierSet::default();
        assert!(set.is_empty());
        assert!(set.matches(&Version::parse("0.0.1")));
    }

    #[test]
    fn set_displays_comma_joined() {
        let set = SpecifierSet::new(vec![spec(">=", "1.0"), spec("<", "2.0")]);
        assert_eq!(set.to_string(), ">=1.0,<2.0");
    }
}
