use clap::builder::BoolishValueParser;
use clap::{Args, Command, FromArgMatches as _};
use std::ffi::OsString;

/// Flags accepted before or after any command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Enable verbose logging output
    #[arg(
        short,
        long,
        global = true,
        env = "CLIDEMO_VERBOSE",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Log filter used when `RUST_LOG` is not set
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Global flags from an `argv` the full grammar rejected
    ///
    /// Only the first verbose token ahead of `--` is kept, so an unknown
    /// command or flag elsewhere does not hide `-v`. `CLIDEMO_VERBOSE`
    /// still applies.
    #[must_use]
    pub fn recover(argv: &[OsString]) -> Self {
        let kept = argv.iter().take(1).chain(
            argv.iter()
                .skip(1)
                .take_while(|arg| *arg != "--")
                .find(|arg| is_verbose_token(arg)),
        );

        Self::augment_args(Command::new("globals"))
            .try_get_matches_from(kept)
            .ok()
            .and_then(|matches| Self::from_arg_matches(&matches).ok())
            .unwrap_or_default()
    }
}

fn is_verbose_token(arg: &OsString) -> bool {
    arg == "-v" || arg == "--verbose"
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> GlobalArgs {
        let matches = GlobalArgs::augment_args(Command::new("test"))
            .try_get_matches_from(argv)
            .unwrap();
        GlobalArgs::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(parse(&["test", "-v"]).log_level(), "debug");
        assert_eq!(parse(&["test", "--verbose"]).log_level(), "debug");
    }

    fn recover(argv: &[&str]) -> GlobalArgs {
        let argv: Vec<OsString> = argv.iter().map(OsString::from).collect();
        GlobalArgs::recover(&argv)
    }

    #[test]
    fn verbose_survives_unknown_command() {
        assert!(recover(&["clidemo", "-v", "nope"]).verbose);
        assert!(recover(&["clidemo", "info", "--bogus", "--verbose"]).verbose);
        assert!(recover(&["clidemo", "-v", "nope", "-v"]).verbose);
    }

    #[test]
    fn recovery_ignores_tokens_after_separator() {
        assert!(!recover(&["clidemo", "nope", "--", "-v"]).verbose);
        assert!(!recover(&["clidemo", "nope"]).verbose);
    }

    #[test]
    fn quiet_by_default() {
        assert_eq!(GlobalArgs::default().log_level(), "warn");
    }
}
