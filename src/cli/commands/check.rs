//! Check command implementation.
//!
//! The `kitlist check` command parses the requirements manifest, enumerates
//! installed packages once, and prints a per-requirement verdict.

use std::path::{Path, PathBuf};

use crate::check::{validate, CheckOutcome, CheckReport, Verdict};
use crate::cli::args::CheckArgs;
use crate::error::{KitlistError, Result};
use crate::manifest::load_manifest;
use crate::site::{discover_site_dirs, scan_sites};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest_path = self.resolve(&self.args.manifest);

        // A missing manifest is the one fatal input error, with its own exit
        // status; everything after this point completes the run.
        let parsed = match load_manifest(&manifest_path) {
            Ok(parsed) => parsed,
            Err(KitlistError::ManifestNotFound { path }) => {
                ui.error(&format!("Requirements manifest not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let site_dirs = if self.args.site.is_empty() {
            discover_site_dirs(&self.args.python)?
        } else {
            self.args.site.iter().map(|p| self.resolve(p)).collect()
        };
        let installed = scan_sites(&site_dirs);
        tracing::debug!(
            "{} requirements, {} installed packages",
            parsed.requirements.len(),
            installed.len()
        );

        let outcomes = validate(&parsed.requirements, &installed);

        if self.args.json {
            let report = CheckReport::new(
                &manifest_path.display().to_string(),
                &parsed.diagnostics,
                &outcomes,
            );
            let rendered =
                serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
        } else {
            ui.show_header(&format!("Requirements check - {}", manifest_path.display()));
            for diagnostic in &parsed.diagnostics {
                ui.warning(&diagnostic.message);
            }
            for outcome in &outcomes {
                show_outcome(ui, outcome, self.args.gaps_only);
            }
            show_summary(ui, &outcomes);
        }

        let gaps = outcomes.iter().filter(|o| !o.verdict.is_satisfied()).count();
        if self.args.strict && gaps > 0 {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

fn show_outcome(ui: &mut dyn UserInterface, outcome: &CheckOutcome, gaps_only: bool) {
    let req = &outcome.requirement;
    match &outcome.verdict {
        Verdict::Compatible { installed } => {
            if !gaps_only {
                ui.success(&format!("{} {} is compatible with {}", req.name, installed, req));
            }
        }
        Verdict::Incompatible { installed } => {
            ui.failure(&format!(
                "{} {} is NOT compatible with {}",
                req.name, installed, req
            ));
        }
        Verdict::NotInstalled => {
            ui.warning(&format!("{} is not installed", req.name));
        }
    }
}

fn show_summary(ui: &mut dyn UserInterface, outcomes: &[CheckOutcome]) {
    let missing = outcomes
        .iter()
        .filter(|o| o.verdict == Verdict::NotInstalled)
        .count();
    let unsatisfied = outcomes.iter().filter(|o| !o.verdict.is_satisfied()).count();
    if unsatisfied > 0 {
        ui.message(&format!(
            "{} of {} requirements unsatisfied; {} not installed",
            unsatisfied,
            outcomes.len(),
            missing
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(manifest: &str, site_entries: &[&str]) -> (TempDir, CheckArgs) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), manifest).unwrap();
        let site = temp.path().join("site-packages");
        fs::create_dir(&site).unwrap();
        for entry in site_entries {
            fs::create_dir(site.join(entry)).unwrap();
        }
        let args = CheckArgs {
            site: vec![site],
            ..Default::default()
        };
        (temp, args)
    }

    #[test]
    fn missing_manifest_exits_two() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("not found"));
    }

    #[test]
    fn compatible_requirement_reports_success() {
        let (temp, args) = setup("zipp>=3.7,<4\n", &["zipp-3.16.2.dist-info"]);
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes()[0].contains("zipp 3.16.2 is compatible with zipp>=3.7,<4"));
    }

    #[test]
    fn incompatible_requirement_reports_failure_but_exits_zero() {
        let (temp, args) = setup("zipp==3.18.1\n", &["zipp-3.20.2.dist-info"]);
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.failures()[0].contains("zipp 3.20.2 is NOT compatible with zipp==3.18.1"));
    }

    #[test]
    fn absent_package_reports_not_installed() {
        let (temp, args) = setup("numpy>=1.18\n", &[]);
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.warnings(), ["numpy is not installed"]);
    }

    #[test]
    fn malformed_line_yields_one_diagnostic_and_other_verdicts() {
        let (temp, args) = setup(
            "zipp>=3.7\n==broken==\nflask<3\n",
            &["zipp-3.16.2.dist-info", "flask-1.1.3.dist-info"],
        );
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].contains("==broken=="));
        assert_eq!(ui.successes().len(), 2);
    }

    #[test]
    fn gaps_only_suppresses_compatible_lines() {
        let (temp, mut args) = setup(
            "zipp>=3.7\nnumpy\n",
            &["zipp-3.16.2.dist-info"],
        );
        args.gaps_only = true;
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.successes().is_empty());
        assert_eq!(ui.warnings(), ["numpy is not installed"]);
    }

    #[test]
    fn strict_mode_fails_on_gaps() {
        let (temp, mut args) = setup("numpy\n", &[]);
        args.strict = true;
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn strict_mode_passes_when_all_satisfied() {
        let (temp, mut args) = setup("zipp>=3.7\n", &["zipp-3.16.2.dist-info"]);
        args.strict = true;
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
    }

    #[test]
    fn summary_counts_unsatisfied() {
        let (temp, args) = setup(
            "zipp==3.18.1\nnumpy\n",
            &["zipp-3.20.2.dist-info"],
        );
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui
            .messages()
            .iter()
            .any(|m| m.contains("2 of 2 requirements unsatisfied; 1 not installed")));
    }
}
