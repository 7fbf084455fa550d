//! Error handling module
//!
//! Defines the command error taxonomy and its exit codes

pub mod types;

pub use types::*;
