//! # `clidemo`
//!
//! A small CLI showing how clap-parsed, validated options flow into
//! handlers that render rich terminal output.
//!
//! ## Usage
//!
//! ```sh
//! clidemo greet --name Ada --count 2
//! clidemo info
//! clidemo list --items apples,pears
//! clidemo progress --duration 5
//! ```
//!
//! Pass `-v` (or set `CLIDEMO_VERBOSE=true`) for debug logs on stderr;
//! `RUST_LOG` overrides the filter entirely.

use std::io::IsTerminal as _;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let outcome = clidemo::run(std::env::args_os(), |globals| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(globals.log_level()));

        fmt()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_env_filter(filter)
            .init();
    });

    std::process::exit(outcome.exit_code());
}
