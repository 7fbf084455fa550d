//! Mock system implementation for testing

use super::System;
use chrono::{DateTime, Local, TimeZone as _};
use std::collections::HashMap;
use std::env::VarError;
use std::io;
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` answers every host query from fixed state, so handler
/// output is deterministic in tests.
///
/// # Example
/// ```
/// use clidemo::system::{mock::MockSystem, System};
///
/// let system = MockSystem::new()
///     .with_env("USER", "ada").unwrap()
///     .with_processor_count(16).unwrap();
///
/// assert_eq!(system.user_name(), "ada");
/// assert_eq!(system.processor_count().unwrap(), 16);
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    env_vars: HashMap<String, String>,
    os_version: String,
    runtime_version: String,
    machine_name: Option<String>,
    is_64bit: bool,
    processor_count: usize,
    now: DateTime<Local>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        let now = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .earliest()
            .unwrap_or_else(Local::now);
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                env_vars: HashMap::new(),
                os_version: "mockos 1.0 (x86_64)".to_owned(),
                runtime_version: "clidemo 0.0.0-test".to_owned(),
                machine_name: Some("mock-host".to_owned()),
                is_64bit: true,
                processor_count: 4,
                now,
            })),
        }
    }

    /// Set an environment variable (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_env(self, key: &str, value: &str) -> io::Result<Self> {
        self.update(|state| {
            state.env_vars.insert(key.to_owned(), value.to_owned());
        })
    }

    /// Set the reported processor count (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_processor_count(self, count: usize) -> io::Result<Self> {
        self.update(|state| state.processor_count = count)
    }

    /// Set the reported machine name; `None` makes the lookup fail (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_machine_name(self, name: Option<&str>) -> io::Result<Self> {
        self.update(|state| state.machine_name = name.map(str::to_owned))
    }

    /// Set the current local time (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_now(self, now: DateTime<Local>) -> io::Result<Self> {
        self.update(|state| state.now = now)
    }

    fn update<F: FnOnce(&mut MockSystemState)>(self, apply: F) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        apply(&mut state);
        drop(state);
        Ok(self)
    }

    fn read<T, F: FnOnce(&MockSystemState) -> T>(&self, query: F) -> io::Result<T> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(query(&state))
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        self.read(|state| state.env_vars.get(key).cloned())
            .ok()
            .flatten()
            .ok_or(VarError::NotPresent)
    }

    #[inline]
    fn os_version(&self) -> String {
        self.read(|state| state.os_version.clone())
            .unwrap_or_default()
    }

    #[inline]
    fn runtime_version(&self) -> String {
        self.read(|state| state.runtime_version.clone())
            .unwrap_or_default()
    }

    #[inline]
    fn machine_name(&self) -> io::Result<String> {
        self.read(|state| state.machine_name.clone())?
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "host name unavailable"))
    }

    #[inline]
    fn is_64bit(&self) -> bool {
        self.read(|state| state.is_64bit).unwrap_or(true)
    }

    #[inline]
    fn processor_count(&self) -> io::Result<usize> {
        self.read(|state| state.processor_count)
    }

    #[inline]
    fn now(&self) -> DateTime<Local> {
        self.read(|state| state.now).unwrap_or_else(|_| Local::now())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    #[test]
    fn user_name_falls_back_through_env() {
        let system = MockSystem::new();
        assert_eq!(system.user_name(), "unknown");

        let system = system.with_env("USERNAME", "grace").unwrap();
        assert_eq!(system.user_name(), "grace");

        let system = system.with_env("USER", "ada").unwrap();
        assert_eq!(system.user_name(), "ada");
    }

    #[test]
    fn missing_machine_name_is_an_error() {
        let system = MockSystem::new().with_machine_name(None).unwrap();
        assert!(system.machine_name().is_err());
    }

    #[test]
    fn clones_share_state() {
        let system = MockSystem::new();
        let clone = system.clone().with_processor_count(32).unwrap();
        assert_eq!(system.processor_count().unwrap(), 32);
        assert_eq!(clone.processor_count().unwrap(), 32);
    }
}
