//! Command handler contract

use crate::commands::options::CommandOptions;
use crate::error::{CommandError, ValidationError};
use crate::ui::Terminal;
use tracing::{error, info, warn};

/// Executes one command's side effects
///
/// A handler is bound to validated options with [`set_options`] and then
/// run with [`execute`]. Execution failures are settled inside the handler
/// (logged, reported on the terminal, turned into exit code 1). Only
/// cancellation and the unbound precondition surface as errors.
///
/// [`set_options`]: CommandHandler::set_options
/// [`execute`]: CommandHandler::execute
pub trait CommandHandler {
    type Options: CommandOptions;

    /// Validate and bind the options for the next execution
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the handler stays as it was
    fn set_options(&mut self, options: Self::Options) -> Result<(), ValidationError>;

    /// Run the command and produce its exit code
    ///
    /// # Errors
    ///
    /// - `CommandError::Unbound` if called before `set_options`
    /// - `CommandError::Cancelled` if the user interrupted the run
    fn execute(&mut self, terminal: &Terminal) -> Result<i32, CommandError>;
}

/// Turn the result of a handler's work into its exit code
///
/// # Errors
///
/// Passes cancellation and unbound errors through untouched
pub fn settle(
    command: &str,
    result: Result<(), CommandError>,
    terminal: &Terminal,
) -> Result<i32, CommandError> {
    match result {
        Ok(()) => {
            info!("{} command completed successfully", command);
            Ok(0)
        }
        Err(err @ CommandError::Cancelled { .. }) => {
            warn!("{} command was cancelled", command);
            Err(err)
        }
        Err(err @ CommandError::Unbound { .. }) => Err(err),
        Err(err) => {
            error!(command, error = %err, "Error executing {} command", command);
            terminal.error(&err);
            Ok(1)
        }
    }
}
