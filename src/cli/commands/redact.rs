//! Redact command implementation.
//!
//! The `kitlist redact` command prints each example block after applying the
//! redaction rules in order, with a `--` separator line after every block.
//! Blocks are data output and go straight to stdout, unstyled.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::RedactArgs;
use crate::error::{KitlistError, Result};
use crate::redact::{demo_blocks, RuleSet};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The redact command implementation.
pub struct RedactCommand {
    working_dir: PathBuf,
    args: RedactArgs,
}

impl RedactCommand {
    /// Create a new redact command.
    pub fn new(working_dir: &Path, args: RedactArgs) -> Self {
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

    fn load_blocks(&self) -> Result<Vec<String>> {
        if self.args.inputs.is_empty() {
            return Ok(demo_blocks());
        }
        let mut blocks = Vec::new();
        for input in &self.args.inputs {
            let path = self.resolve(input);
            let content = fs::read_to_string(&path).map_err(|e| KitlistError::InputRead {
                path: path.clone(),
                message: e.to_string(),
            })?;
            blocks.push(content);
        }
        Ok(blocks)
    }
}

impl Command for RedactCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rules = match &self.args.rules {
            Some(path) => RuleSet::from_yaml_file(&self.resolve(path))?,
            None => RuleSet::builtin(),
        };
        let blocks = self.load_blocks()?;
        tracing::debug!("{} blocks, {} rules", blocks.len(), rules.len());

        for block in &blocks {
            println!("{}", rules.apply(block));
            println!("--");
        }
        Ok(CommandResult::success())
    }
}
