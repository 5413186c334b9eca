//! Styled terminal output.

use super::theme::{should_use_colors, KitlistTheme};
use super::{OutputMode, UserInterface};

/// Terminal implementation of [`UserInterface`].
///
/// Informational lines are gated by the output mode; problem lines print in
/// every mode except Silent; fatal errors always print to stderr.
#[derive(Debug)]
pub struct TerminalUI {
    mode: OutputMode,
    theme: KitlistTheme,
}

impl TerminalUI {
    /// Create a terminal UI, picking a colored or plain theme from the
    /// environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            KitlistTheme::new()
        } else {
            KitlistTheme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_problems() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn failure(&mut self, msg: &str) {
        if self.mode.shows_problems() {
            println!("{}", self.theme.format_failure(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_failure(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_header(title));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_its_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
