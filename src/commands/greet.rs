//! `greet` command: summary table followed by greeting lines

use crate::commands::handler::{CommandHandler, settle};
use crate::commands::options::{Binding, CommandOptions};
use crate::error::{CommandError, ValidationError};
use crate::system::System;
use crate::ui::Terminal;
use crate::ui::render::{Border, Span, table};
use clap::Args;
use colored::{Color, Colorize as _};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::info;

pub const NAME: &str = "greet";
pub const ABOUT: &str = "Greet someone with a fancy table";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options for the `greet` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GreetOptions {
    /// The name to greet
    #[arg(long, value_name = "NAME", default_value = "World")]
    name: String,

    /// Number of times to greet
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u32,
}

impl GreetOptions {
    #[must_use]
    pub fn new<S: Into<String>>(name: S, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

impl CommandOptions for GreetOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Name cannot be empty."));
        }
        Ok(())
    }
}

/// Handler for the `greet` command
pub struct GreetHandler {
    binding: Binding<GreetOptions>,
    system: Arc<dyn System>,
}

impl GreetHandler {
    #[must_use]
    pub fn new(system: Arc<dyn System>) -> Self {
        Self {
            binding: Binding::new(NAME),
            system,
        }
    }

    fn render(&self, options: &GreetOptions) -> String {
        let timestamp = self.system.now().format(TIMESTAMP_FORMAT).to_string();
        let mut out = table(
            &[
                Span::colored("Property", Color::Yellow).bold(),
                Span::colored("Value", Color::Cyan).bold(),
            ],
            &[
                vec![
                    Span::plain("Name"),
                    Span::colored(options.name(), Color::Green),
                ],
                vec![
                    Span::plain("Count"),
                    Span::colored(options.count().to_string(), Color::Blue),
                ],
                vec![
                    Span::plain("Timestamp"),
                    Span::colored(timestamp, Color::BrightBlack),
                ],
            ],
            Border::Rounded,
        );

        out.push('\n');
        for index in 1..=options.count() {
            let greeting = format!("Hello, {}!", options.name());
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{} (#{index})", greeting.green().bold());
        }
        out
    }
}

impl CommandHandler for GreetHandler {
    type Options = GreetOptions;

    fn set_options(&mut self, options: GreetOptions) -> Result<(), ValidationError> {
        self.binding.set(options)
    }

    fn execute(&mut self, terminal: &Terminal) -> Result<i32, CommandError> {
        let options = self.binding.get()?;
        info!(name = options.name(), count = options.count(), "Executing greet command");

        let result = terminal
            .write_block(&self.render(options))
            .map_err(|err| CommandError::execution(NAME, err.to_string()));
        settle(NAME, result, terminal)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn greets_count_times_after_table() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();
        let mut handler = GreetHandler::new(Arc::new(MockSystem::new()));

        handler.set_options(GreetOptions::new("Ada", 2)).unwrap();
        assert_eq!(handler.execute(&terminal).unwrap(), 0);

        let out = capture.stdout();
        assert!(out.contains("2024-01-02 03:04:05"));
        assert!(out.contains("Hello, Ada! (#1)"));
        assert!(out.contains("Hello, Ada! (#2)"));
        assert!(!out.contains("(#3)"));
        assert!(out.find("Timestamp").unwrap() < out.find("Hello").unwrap());
    }

    #[test]
    fn zero_count_prints_only_the_table() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();
        let mut handler = GreetHandler::new(Arc::new(MockSystem::new()));

        handler.set_options(GreetOptions::new("Ada", 0)).unwrap();
        assert_eq!(handler.execute(&terminal).unwrap(), 0);
        assert!(!capture.stdout().contains("Hello"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = GreetOptions::new("   ", 1).validate().unwrap_err();
        assert_eq!(err.field, "name");
    }
}
