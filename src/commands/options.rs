//! Validated command options

use crate::error::{CommandError, ValidationError};

/// Parameter bag for one command invocation
///
/// Implementors are plain immutable records; `validate` inspects the
/// fields and reports the first constraint that does not hold.
pub trait CommandOptions {
    /// Check every field constraint
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the offending field
    #[inline]
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Slot holding the options a handler has been bound to
///
/// Options enter only through [`Binding::set`], which validates them, so
/// whatever [`Binding::get`] returns has passed validation exactly once.
#[derive(Debug)]
pub struct Binding<O> {
    command: &'static str,
    options: Option<O>,
}

impl<O: CommandOptions> Binding<O> {
    /// Empty binding for the named command
    #[must_use]
    #[inline]
    pub const fn new(command: &'static str) -> Self {
        Self {
            command,
            options: None,
        }
    }

    /// Validate `options` and bind them, replacing any earlier value
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the binding is left untouched
    #[inline]
    pub fn set(&mut self, options: O) -> Result<(), ValidationError> {
        options.validate()?;
        self.options = Some(options);
        Ok(())
    }

    /// The bound options
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Unbound` if nothing has been bound yet
    #[inline]
    pub fn get(&self) -> Result<&O, CommandError> {
        self.options
            .as_ref()
            .ok_or_else(|| CommandError::unbound(self.command))
    }

    #[must_use]
    #[inline]
    pub const fn is_bound(&self) -> bool {
        self.options.is_some()
    }
}
