//! Root dispatcher
//!
//! Routes the process argument vector to one descriptor and maps the
//! result onto a process exit code. Per invocation the dispatcher moves
//! `Idle → Parsing → Dispatched → Executing` and ends in one [`Outcome`].

use crate::cli::args::GlobalArgs;
use crate::cli::descriptor::Descriptor;
use crate::error::CommandError;
use crate::ui::Terminal;
use clap::error::ErrorKind;
use clap::{ArgMatches, Args as _, Command, FromArgMatches as _};
use std::ffi::OsString;
use tracing::{debug, error, warn};

pub const BIN_NAME: &str = "clidemo";
pub const ABOUT: &str = "Demo CLI wiring clap argument parsing to rich terminal output";

/// Terminal state of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    Cancelled,
    ParseFailed,
}

impl Outcome {
    /// Process exit code: 0 on success, 1 for every other outcome
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Failed | Self::Cancelled | Self::ParseFailed => 1,
        }
    }
}

/// Result of a successful parse
#[derive(Debug)]
pub enum Parsed {
    /// A command was selected; run it with [`Dispatcher::execute`]
    Invocation(Invocation),
    /// `--help` or `--version` was requested; print the text and exit 0
    Informational(String),
}

/// A routed command with its flags
#[derive(Debug)]
pub struct Invocation {
    pub globals: GlobalArgs,
    index: usize,
    matches: ArgMatches,
}

/// Owns the command descriptors and routes arguments to them
pub struct Dispatcher {
    descriptors: Vec<Box<dyn Descriptor>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register a descriptor; registration order is help-listing order
    #[must_use]
    pub fn with(mut self, descriptor: impl Descriptor + 'static) -> Self {
        self.descriptors.push(Box::new(descriptor));
        self
    }

    /// Names of every registered command, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|descriptor| descriptor.name().to_owned())
            .collect()
    }

    /// Full clap grammar: global flags plus one subcommand per descriptor
    #[must_use]
    pub fn root_command(&self) -> Command {
        let root = Command::new(BIN_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .about(ABOUT)
            .subcommand_required(true)
            .disable_help_subcommand(true);
        let root = GlobalArgs::augment_args(root);
        self.descriptors
            .iter()
            .fold(root, |root, descriptor| root.subcommand(descriptor.command()))
    }

    /// Parse `argv` (program name first) into an invocation
    ///
    /// # Errors
    ///
    /// - `CommandNotFound` if the command token matches no descriptor
    /// - `InvalidArgument` for unknown flags, bad values or a missing command
    pub fn parse<I, T>(&self, argv: I) -> Result<Parsed, CommandError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        if let Some(token) = command_token(&argv)
            && !self.descriptors.iter().any(|d| d.name() == token)
        {
            return Err(CommandError::command_not_found(token, self.names()));
        }

        let matches = match self.root_command().try_get_matches_from(&argv) {
            Ok(matches) => matches,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        Ok(Parsed::Informational(err.render().to_string()))
                    }
                    ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        Err(CommandError::invalid_argument(format!(
                            "a command is required. Available commands: {}",
                            self.names().join(", ")
                        )))
                    }
                    _ => Err(CommandError::invalid_argument(summarize(&err))),
                };
            }
        };

        let globals = GlobalArgs::from_arg_matches(&matches)
            .map_err(|err| CommandError::invalid_argument(summarize(&err)))?;
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| CommandError::invalid_argument("a command is required"))?;
        let index = self
            .descriptors
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| CommandError::command_not_found(name, self.names()))?;

        Ok(Parsed::Invocation(Invocation {
            globals,
            index,
            matches: sub_matches.clone(),
        }))
    }

    /// Run a parsed invocation to its outcome
    pub fn execute(&mut self, invocation: &Invocation, terminal: &Terminal) -> Outcome {
        let Some(descriptor) = self.descriptors.get_mut(invocation.index) else {
            return Outcome::Failed;
        };
        let name = descriptor.name();
        debug!("Dispatching to {} command", name);

        match descriptor.invoke(&invocation.matches, terminal) {
            Ok(0) => Outcome::Succeeded,
            Ok(code) => {
                debug!("{} command exited with code {}", name, code);
                Outcome::Failed
            }
            Err(err) if err.is_cancelled() => {
                warn!("{} command cancelled", name);
                terminal.warning(&err);
                Outcome::Cancelled
            }
            Err(err) => {
                error!(command = name, error = %err, "Command failed");
                terminal.error(&err);
                Outcome::Failed
            }
        }
    }

    /// Report a parse failure on the terminal
    pub fn report_parse_failure(err: &CommandError, terminal: &Terminal) -> Outcome {
        debug!("Parse failed: {}", err);
        terminal.error(err);
        terminal.note(&format!("Run '{BIN_NAME} --help' for usage."));
        Outcome::ParseFailed
    }

    /// Parse and execute `argv` in one go
    pub fn run<I, T>(&mut self, argv: I, terminal: &Terminal) -> Outcome
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.parse(argv) {
            Ok(Parsed::Invocation(invocation)) => self.execute(&invocation, terminal),
            Ok(Parsed::Informational(text)) => {
                if terminal.write_block(&text).is_err() {
                    return Outcome::Failed;
                }
                Outcome::Succeeded
            }
            Err(err) => Self::report_parse_failure(&err, terminal),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// First token after the program name that is not a flag
///
/// Global flags take no values, so the first positional token is the
/// command name. Anything after `--` is never a command.
fn command_token(argv: &[OsString]) -> Option<String> {
    argv.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .take_while(|arg| arg != "--")
        .find(|arg| !arg.starts_with('-'))
        .map(|arg| arg.into_owned())
}

/// One-line description of a clap error, without usage and tips
fn summarize(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_owned()
}
