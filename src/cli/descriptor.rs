//! Command descriptors
//!
//! A descriptor pairs a command name and its flag grammar with the handler
//! that runs it. The grammar comes from the handler's options type via
//! `clap::Args`, so coercion and defaults are declared next to the fields.

use crate::commands::CommandHandler;
use crate::error::CommandError;
use crate::ui::Terminal;
use clap::{ArgMatches, Args, Command, FromArgMatches as _};
use tracing::debug;

/// Object-safe view of a command the dispatcher can route to
pub trait Descriptor {
    /// Exact, case-sensitive command name
    fn name(&self) -> &'static str;

    /// Flag grammar for this command
    fn command(&self) -> Command;

    /// Bind `matches` to options, validate them and run the handler
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if a flag value cannot be bound
    /// - `Validation` if the bound options break a constraint
    /// - whatever the handler itself lets escape (cancellation, unbound)
    fn invoke(&mut self, matches: &ArgMatches, terminal: &Terminal) -> Result<i32, CommandError>;
}

/// Descriptor backed by a concrete handler
pub struct CommandDescriptor<H> {
    name: &'static str,
    about: &'static str,
    handler: H,
}

impl<H> CommandDescriptor<H> {
    #[must_use]
    pub const fn new(name: &'static str, about: &'static str, handler: H) -> Self {
        Self {
            name,
            about,
            handler,
        }
    }
}

impl<H> Descriptor for CommandDescriptor<H>
where
    H: CommandHandler,
    H::Options: Args + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn command(&self) -> Command {
        H::Options::augment_args(Command::new(self.name).about(self.about))
    }

    fn invoke(&mut self, matches: &ArgMatches, terminal: &Terminal) -> Result<i32, CommandError> {
        let options = H::Options::from_arg_matches(matches)
            .map_err(|err| CommandError::invalid_argument(err.to_string().trim().to_owned()))?;
        debug!("Bound {} options: {:?}", self.name, options);

        self.handler.set_options(options)?;
        self.handler.execute(terminal)
    }
}
