//! Custom error types with exit codes

use thiserror::Error;

/// An options field violated one of its declared constraints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Flag-facing name of the offending field
    pub field: &'static str,
    /// Human readable description of the violated constraint
    pub constraint: String,
}

impl ValidationError {
    #[inline]
    pub fn new<S: Into<String>>(field: &'static str, constraint: S) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}

/// Main error type for command dispatch and execution
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CommandError {
    /// Validation Error - an options field violates a constraint
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid Argument Error - a flag could not be coerced or was not recognized
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Command Not Found Error - no descriptor matches the requested name
    #[error("Unknown command '{name}'. Available commands: {}", .known.join(", "))]
    CommandNotFound { name: String, known: Vec<String> },

    /// Cancelled - the user interrupted a running command
    #[error("{} command cancelled.", capitalize(.command))]
    Cancelled { command: String },

    /// Execution Error - any other failure while a handler runs
    #[error("Error: {message}")]
    Execution { command: String, message: String },

    /// Unbound - a handler was executed before its options were set
    #[error("The {command} command was executed before its options were bound")]
    Unbound { command: String },
}

impl CommandError {
    /// Get the process exit code for this error
    ///
    /// The shell only ever sees a single failure code.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation(_)
            | Self::InvalidArgument { .. }
            | Self::CommandNotFound { .. }
            | Self::Cancelled { .. }
            | Self::Execution { .. }
            | Self::Unbound { .. } => 1,
        }
    }

    /// Whether this error is a user-initiated cancellation
    #[must_use]
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        matches!(*self, Self::Cancelled { .. })
    }

    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a command not found error
    #[inline]
    pub fn command_not_found<S: Into<String>>(name: S, known: Vec<String>) -> Self {
        Self::CommandNotFound {
            name: name.into(),
            known,
        }
    }

    /// Create a cancellation error
    #[inline]
    pub fn cancelled<S: Into<String>>(command: S) -> Self {
        Self::Cancelled {
            command: command.into(),
        }
    }

    /// Create an execution error
    #[inline]
    pub fn execution<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::Execution {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create an unbound handler error
    #[inline]
    pub fn unbound<S: Into<String>>(command: S) -> Self {
        Self::Unbound {
            command: command.into(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
