//! System abstraction for host facts
//!
//! This module provides a unified trait for everything the commands read
//! from the machine they run on, allowing for easy testing with mock
//! implementations.

use chrono::{DateTime, Local};
use std::env::VarError;
use std::io;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for host queries
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std`, `hostname` and `chrono`
/// - `MockSystem`: Test implementation with fixed, in-memory answers
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    // ==================== Host Facts ====================

    /// Operating system description, e.g. `linux 6.8.0 (x86_64)`
    fn os_version(&self) -> String;

    /// Version string of the running program
    fn runtime_version(&self) -> String;

    /// Network host name of the machine
    fn machine_name(&self) -> io::Result<String>;

    /// Whether the target is a 64-bit platform
    fn is_64bit(&self) -> bool;

    /// Number of logical processors available to this process
    fn processor_count(&self) -> io::Result<usize>;

    /// Current local time
    fn now(&self) -> DateTime<Local>;

    /// Name of the user running the process
    ///
    /// Falls back to `"unknown"` when neither `USER` nor `USERNAME` is set.
    #[inline]
    fn user_name(&self) -> String {
        self.env_var("USER")
            .or_else(|_| self.env_var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_owned())
    }
}
