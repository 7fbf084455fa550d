//! `list` command: bulleted item list

use crate::commands::handler::{CommandHandler, settle};
use crate::commands::options::{Binding, CommandOptions};
use crate::error::{CommandError, ValidationError};
use crate::ui::Terminal;
use crate::ui::render::{RULE_WIDTH, Span, bullets, rule};
use clap::Args;
use colored::Color;
use tracing::info;

pub const NAME: &str = "list";
pub const ABOUT: &str = "Display a list of items";

/// Items shown when `--items` is not given
pub const FALLBACK_ITEMS: [&str; 5] = ["Apple", "Banana", "Cherry", "Date", "Elderberry"];

/// Options for the `list` command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Items to display (comma-separated or repeated)
    #[arg(long, value_name = "ITEM", num_args = 1.., value_delimiter = ',')]
    items: Vec<String>,
}

impl ListOptions {
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Items to print, falling back to [`FALLBACK_ITEMS`] when none were given
    #[must_use]
    pub fn effective_items(&self) -> Vec<&str> {
        if self.items.is_empty() {
            FALLBACK_ITEMS.to_vec()
        } else {
            self.items.iter().map(String::as_str).collect()
        }
    }
}

/// Items are printed as given, so there is nothing to reject
impl CommandOptions for ListOptions {}

/// Handler for the `list` command
pub struct ListHandler {
    binding: Binding<ListOptions>,
}

impl ListHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            binding: Binding::new(NAME),
        }
    }
}

impl Default for ListHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for ListHandler {
    type Options = ListOptions;

    fn set_options(&mut self, options: ListOptions) -> Result<(), ValidationError> {
        self.binding.set(options)
    }

    fn execute(&mut self, terminal: &Terminal) -> Result<i32, CommandError> {
        let items = self.binding.get()?.effective_items();
        info!("Executing list command with {} items", items.len());

        let mut rendered = rule(&Span::colored("Item List", Color::Yellow).bold(), RULE_WIDTH);
        rendered.push_str(&bullets(&items));

        let result = terminal
            .write_block(&rendered)
            .map_err(|err| CommandError::execution(NAME, err.to_string()));
        settle(NAME, result, terminal)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    #[test]
    fn empty_list_falls_back_to_fruit() {
        assert_eq!(ListOptions::default().effective_items(), FALLBACK_ITEMS.to_vec());
    }

    #[test]
    fn items_are_printed_verbatim() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();
        let mut handler = ListHandler::new();

        handler
            .set_options(ListOptions::new(vec![" padded ".to_owned(), String::new()]))
            .unwrap();
        assert_eq!(handler.execute(&terminal).unwrap(), 0);

        let out = capture.stdout();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(&lines[1..], ["•  padded ", "• "]);
    }

    #[test]
    fn prints_rule_then_bullets() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();
        let mut handler = ListHandler::new();

        handler
            .set_options(ListOptions::new(vec!["x".to_owned(), "y".to_owned()]))
            .unwrap();
        assert_eq!(handler.execute(&terminal).unwrap(), 0);

        let out = capture.stdout();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Item List"));
        assert_eq!(&lines[1..], ["• x", "• y"]);
    }
}
