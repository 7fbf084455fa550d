//! `clidemo` - a demo CLI wiring clap argument parsing to rich terminal output
//!
//! Each subcommand follows the same pattern: a clap-derived options type
//! is bound and validated by a descriptor, then handed to a handler that
//! renders panels, tables, lists or progress bars through a [`ui::Terminal`].

pub mod cancel;
pub mod cli;
pub mod commands;
pub mod error;
pub mod system;
pub mod ui;

use cancel::CancellationToken;
use cli::{Outcome, Parsed};
use std::ffi::OsString;
use std::sync::Arc;
use system::{RealSystem, System};
use ui::Terminal;

/// Main entry point for the clidemo library
///
/// Parses `argv`, calls `init_logging` with the parsed global flags before
/// anything runs, and executes the selected command against the real host.
pub fn run<I, T, F>(argv: I, init_logging: F) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&cli::GlobalArgs),
{
    let system: Arc<dyn System> = Arc::new(RealSystem::new());
    let cancel = CancellationToken::new();
    let terminal = Terminal::stdio();
    let mut dispatcher = cli::default_dispatcher(&system, &cancel);
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    match dispatcher.parse(&argv) {
        Ok(Parsed::Invocation(invocation)) => {
            init_logging(&invocation.globals);
            if let Err(err) = cancel::listen_for_interrupt(cancel.clone()) {
                tracing::warn!("Ctrl-C handling unavailable: {}", err);
            }
            dispatcher.execute(&invocation, &terminal)
        }
        Ok(Parsed::Informational(text)) => match terminal.write_block(&text) {
            Ok(()) => Outcome::Succeeded,
            Err(_) => Outcome::Failed,
        },
        Err(err) => {
            init_logging(&cli::GlobalArgs::recover(&argv));
            cli::Dispatcher::report_parse_failure(&err, &terminal)
        }
    }
}
