//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! Both subcommands are non-interactive batch runs, so there are no prompts
//! or progress indicators — just leveled, styled lines.
//!
//! # Example
//!
//! ```
//! use kitlist::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("zipp 3.16.2 is compatible with zipp>=3.7");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, KitlistTheme};

/// Trait for leveled output.
///
/// This trait allows capturing output in tests via [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line.
    fn message(&mut self, msg: &str);

    /// Display a success line (a compatible verdict).
    fn success(&mut self, msg: &str);

    /// Display a warning line (a not-installed verdict, a skipped manifest line).
    fn warning(&mut self, msg: &str);

    /// Display a failed-check line (an incompatible verdict).
    fn failure(&mut self, msg: &str);

    /// Display a fatal error. Goes to stderr and is never suppressed.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
