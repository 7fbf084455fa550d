//! Commands module
//!
//! Options, handler contract and one handler per subcommand

pub mod greet;
pub mod handler;
pub mod info;
pub mod list;
pub mod options;
pub mod progress;

pub use handler::CommandHandler;
pub use options::{Binding, CommandOptions};
