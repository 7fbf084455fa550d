//! Cooperative cancellation
//!
//! Long-running handlers poll a [`CancellationToken`] between units of
//! work. The binary wires the token to Ctrl-C with [`listen_for_interrupt`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tracing::warn;

/// Shared flag signalling that the user asked to stop
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Cancel `token` when the process receives Ctrl-C
///
/// The signal is awaited on a dedicated thread running a current-thread
/// tokio runtime, so the main thread stays synchronous.
///
/// # Errors
///
/// Returns an error if the listener thread cannot be spawned
pub fn listen_for_interrupt(token: CancellationToken) -> std::io::Result<()> {
    thread::Builder::new()
        .name("ctrl-c".to_owned())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_io()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    warn!("Ctrl-C handling unavailable: {}", err);
                    return;
                }
            };

            runtime.block_on(async {
                // Progress bars may still be drawing; the handler logs once it stops.
                match tokio::signal::ctrl_c().await {
                    Ok(()) => token.cancel(),
                    Err(err) => warn!("Failed to listen for Ctrl-C: {}", err),
                }
            });
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_cancellation() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();
        assert!(observer.is_cancelled());
    }
}
