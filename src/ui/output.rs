//! Output verbosity mode.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-site scan detail.
    Verbose,
    /// Show headers and all verdict lines.
    #[default]
    Normal,
    /// Suppress informational lines; problems still print.
    Quiet,
    /// Show nothing except fatal errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Whether informational lines (headers, compatible verdicts, summaries)
    /// are shown.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether problem lines (warnings, failed checks) are shown.
    pub fn shows_problems(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn quiet_hides_info_but_not_problems() {
        assert!(!OutputMode::Quiet.shows_info());
        assert!(OutputMode::Quiet.shows_problems());
    }

    #[test]
    fn silent_hides_problems_too() {
        assert!(!OutputMode::Silent.shows_info());
        assert!(!OutputMode::Silent.shows_problems());
    }

    #[test]
    fn normal_and_verbose_show_info() {
        assert!(OutputMode::Normal.shows_info());
        assert!(OutputMode::Verbose.shows_info());
    }
}
