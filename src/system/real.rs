//! Real system implementation backed by the running host

use super::System;
use chrono::{DateTime, Local};
use std::env::VarError;
use std::io;

/// Location of the kernel release string on Linux hosts
const KERNEL_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Production implementation of System trait
///
/// Delegates straight to the standard library, `hostname` and `chrono`.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }

    fn os_version(&self) -> String {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        match std::fs::read_to_string(KERNEL_RELEASE_PATH) {
            Ok(release) => format!("{os} {} ({arch})", release.trim()),
            Err(_) => format!("{os} ({arch})"),
        }
    }

    fn runtime_version(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    fn machine_name(&self) -> io::Result<String> {
        hostname::get().map(|name| name.to_string_lossy().into_owned())
    }

    fn is_64bit(&self) -> bool {
        cfg!(target_pointer_width = "64")
    }

    fn processor_count(&self) -> io::Result<usize> {
        std::thread::available_parallelism().map(std::num::NonZeroUsize::get)
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
