//! Redaction rules and ordered rule sets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KitlistError, Result};

/// Built-in rules for the embedded demo blocks, in application order.
///
/// Order is semantic: `/home/tovi/` must collapse before the `~/scratch`
/// rule can see its output, and the bare `.venv311` rule has to run after
/// every longer `.venv311-*` name it would otherwise clobber.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("/home/tovi/", "~/"),
    ("~/scratch/", "~/work/"),
    (".venv-lab", ".venv-lb"),
    (".venv38", ".venv-te"),
    (".venv39", ".venv-tn"),
    (".venv310-scan", ".venv-sc"),
    (".venv311-kitlist-bench", ".venv-kb"),
    (".venv311-lab", ".venv-lab"),
    (".venv311", ".venv-tl"),
    (".venv312-audit", ".venv-au"),
    (".venv312", ".venv-tt"),
];

/// One literal substitution: every occurrence of `from` becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactRule {
    /// Literal substring to find.
    pub from: String,
    /// Replacement text.
    pub to: String,
}

/// An ordered list of redaction rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RedactRule>,
}

impl RuleSet {
    /// Create a rule set from rules in application order.
    pub fn new(rules: Vec<RedactRule>) -> Self {
        Self { rules }
    }

    /// The built-in rule list used for the embedded demo blocks.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|(from, to)| RedactRule {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                })
                .collect(),
        )
    }

    /// Load rules from a YAML file: a sequence of `{from, to}` entries,
    /// applied in file order.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KitlistError::RulesNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let rules: Vec<RedactRule> =
            serde_yaml::from_str(&content).map_err(|e| KitlistError::RulesParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!("loaded {} rules from {}", rules.len(), path.display());
        Ok(Self::new(rules))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order, each against the output of the previous
    /// one. A fold over progressively-updated text, never a combined pass.
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| {
                current.replace(&rule.from, &rule.to)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rules(pairs: &[(&str, &str)]) -> RuleSet {
        RuleSet::new(
            pairs
                .iter()
                .map(|(from, to)| RedactRule {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn applies_rules_sequentially() {
        let set = rules(&[(".venv38", ".venv-te"), ("/home/tovi/", "~/")]);
        assert_eq!(
            set.apply("/home/tovi/.venv38/lib/python3.8/site-packages"),
            "~/.venv-te/lib/python3.8/site-packages"
        );
    }

    #[test]
    fn later_rule_sees_earlier_output() {
        // the second rule's target only exists after the first rule runs
        let set = rules(&[("/home/tovi/", "~/"), ("~/scratch/", "~/work/")]);
        assert_eq!(set.apply("/home/tovi/scratch/report.txt"), "~/work/report.txt");

        // reversed, the chained rule never fires
        let reversed = rules(&[("~/scratch/", "~/work/"), ("/home/tovi/", "~/")]);
        assert_eq!(
            reversed.apply("/home/tovi/scratch/report.txt"),
            "~/scratch/report.txt"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let set = rules(&[("secret", "****")]);
        assert_eq!(set.apply("secret secret secret"), "**** **** ****");
    }

    #[test]
    fn empty_set_is_identity() {
        let set = RuleSet::default();
        assert!(set.is_empty());
        assert_eq!(set.apply("untouched"), "untouched");
    }

    #[test]
    fn builtin_rules_are_ordered() {
        let set = RuleSet::builtin();
        assert!(!set.is_empty());
        // the bare .venv311 rule must not clobber longer names before they map
        assert_eq!(
            set.apply("/home/tovi/.venv311-lab/lib"),
            "~/.venv-lab/lib"
        );
        assert_eq!(set.apply("/home/tovi/.venv311/lib"), "~/.venv-tl/lib");
    }

    #[test]
    fn builtin_redaction_snapshot() {
        let set = RuleSet::builtin();
        insta::assert_snapshot!(
            set.apply("/home/tovi/.venv311-kitlist-bench/bin/python3"),
            @"~/.venv-kb/bin/python3"
        );
        insta::assert_snapshot!(
            set.apply("/home/tovi/scratch/.venv312-audit/lib"),
            @"~/work/.venv-au/lib"
        );
    }

    #[test]
    fn yaml_file_preserves_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- from: /home/tovi/\n  to: '~/'").unwrap();
        writeln!(file, "- from: '~/scratch/'\n  to: '~/work/'").unwrap();
        let set = RuleSet::from_yaml_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.apply("/home/tovi/scratch/a"), "~/work/a");
    }

    #[test]
    fn missing_rules_file_is_distinct_error() {
        let err = RuleSet::from_yaml_file(Path::new("/nonexistent/rules.yml")).unwrap_err();
        assert!(matches!(err, KitlistError::RulesNotFound { .. }));
    }

    #[test]
    fn malformed_rules_file_reports_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from: not-a-sequence").unwrap();
        let err = RuleSet::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, KitlistError::RulesParse { .. }));
    }
}
