//! `info` command: host environment snapshot

use crate::commands::handler::{CommandHandler, settle};
use crate::commands::options::{Binding, CommandOptions};
use crate::error::{CommandError, ValidationError};
use crate::system::System;
use crate::ui::Terminal;
use crate::ui::render::{Border, Line, Span, panel};
use anyhow::Context as _;
use clap::Args;
use colored::Color;
use std::sync::Arc;
use tracing::info;

pub const NAME: &str = "info";
pub const ABOUT: &str = "Display system information";

/// The `info` command takes no flags
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoOptions {}

impl CommandOptions for InfoOptions {}

/// Handler for the `info` command
pub struct InfoHandler {
    binding: Binding<InfoOptions>,
    system: Arc<dyn System>,
}

impl InfoHandler {
    #[must_use]
    pub fn new(system: Arc<dyn System>) -> Self {
        Self {
            binding: Binding::new(NAME),
            system,
        }
    }

    /// Build the panel body from the host facts
    ///
    /// # Errors
    ///
    /// Returns an error if the host name or processor count is unavailable
    pub fn snapshot(&self) -> anyhow::Result<Vec<Line>> {
        let machine = self
            .system
            .machine_name()
            .context("Failed to read machine name")?;
        let processors = self
            .system
            .processor_count()
            .context("Failed to read processor count")?;

        let fact = |label: &str, value: String| -> Line {
            vec![
                Span::colored(label, Color::Yellow),
                Span::plain(format!(" {value}")),
            ]
        };

        Ok(vec![
            vec![Span::plain("System Information").bold()],
            Vec::new(),
            fact("OS:", self.system.os_version()),
            fact("Runtime:", self.system.runtime_version()),
            fact("Machine:", machine),
            fact("User:", self.system.user_name()),
            fact("64-bit:", self.system.is_64bit().to_string()),
            fact("Processors:", processors.to_string()),
        ])
    }

    fn run(&self, terminal: &Terminal) -> Result<(), CommandError> {
        info!("Executing info command");

        let rendered = self
            .snapshot()
            .map(|lines| {
                panel(
                    &Span::colored("System Info", Color::Cyan).bold(),
                    &lines,
                    Border::Double,
                    Color::Cyan,
                )
            })
            .map_err(|err| CommandError::execution(NAME, format!("{err:#}")))?;

        terminal
            .write_block(&rendered)
            .map_err(|err| CommandError::execution(NAME, err.to_string()))
    }
}

impl CommandHandler for InfoHandler {
    type Options = InfoOptions;

    fn set_options(&mut self, options: InfoOptions) -> Result<(), ValidationError> {
        self.binding.set(options)
    }

    fn execute(&mut self, terminal: &Terminal) -> Result<i32, CommandError> {
        self.binding.get()?;
        settle(NAME, self.run(terminal), terminal)
    }
}
