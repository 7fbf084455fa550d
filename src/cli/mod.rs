//! Command-line interface module
//!
//! Handles argument parsing, command descriptors and dispatch

pub mod args;
pub mod descriptor;
pub mod dispatcher;

pub use args::*;
pub use descriptor::{CommandDescriptor, Descriptor};
pub use dispatcher::{Dispatcher, Invocation, Outcome, Parsed};

use crate::cancel::CancellationToken;
use crate::commands::greet::{self, GreetHandler};
use crate::commands::info::{self, InfoHandler};
use crate::commands::list::{self, ListHandler};
use crate::commands::progress::{self, ProgressHandler};
use crate::system::System;
use std::sync::Arc;

/// Dispatcher with every built-in command registered
#[must_use]
pub fn default_dispatcher(system: &Arc<dyn System>, cancel: &CancellationToken) -> Dispatcher {
    Dispatcher::new()
        .with(CommandDescriptor::new(
            greet::NAME,
            greet::ABOUT,
            GreetHandler::new(Arc::clone(system)),
        ))
        .with(CommandDescriptor::new(
            info::NAME,
            info::ABOUT,
            InfoHandler::new(Arc::clone(system)),
        ))
        .with(CommandDescriptor::new(list::NAME, list::ABOUT, ListHandler::new()))
        .with(CommandDescriptor::new(
            progress::NAME,
            progress::ABOUT,
            ProgressHandler::new(cancel.clone()),
        ))
}
