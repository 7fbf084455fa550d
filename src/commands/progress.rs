//! Progress bar demonstration
//!
//! Three simulated tasks advance over `duration * 10` steps of 100 ms.
//! The first task moves every step, the second once a third of the steps
//! have passed, the third after the midpoint. Every task is clamped to
//! 100% when the run completes.

use crate::cancel::CancellationToken;
use crate::commands::handler::{CommandHandler, settle};
use crate::commands::options::{Binding, CommandOptions};
use crate::error::{CommandError, ValidationError};
use crate::ui::Terminal;
use crate::ui::progress::{BarSink, ProgressSink};
use clap::Args;
use colored::Colorize as _;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

pub const NAME: &str = "progress";
pub const ABOUT: &str = "Show a progress bar demo";

/// Duration used when `--duration` is omitted
pub const DEFAULT_DURATION_SECONDS: i64 = 3;

/// Steps executed per second of requested duration
pub const STEPS_PER_SECOND: u64 = 10;

/// Pause between two steps
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Labels of the simulated tasks, in display order
pub const TASK_LABELS: [&str; 3] = ["Processing files", "Downloading data", "Building cache"];

/// Options for the `progress` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProgressOptions {
    /// Duration in seconds for the progress demonstration
    #[arg(
        long = "duration",
        value_name = "SECONDS",
        default_value_t = DEFAULT_DURATION_SECONDS,
        allow_negative_numbers = true
    )]
    duration_seconds: i64,
}

impl ProgressOptions {
    #[must_use]
    pub const fn new(duration_seconds: i64) -> Self {
        Self { duration_seconds }
    }

    #[must_use]
    pub const fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECONDS)
    }
}

impl CommandOptions for ProgressOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_seconds <= 0 {
            return Err(ValidationError::new(
                "duration",
                "Duration must be greater than 0.",
            ));
        }
        Ok(())
    }
}

/// Step plan for one progress run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    steps: u64,
}

impl ProgressSchedule {
    /// Schedule for a validated, positive duration
    #[must_use]
    pub const fn for_duration(seconds: u64) -> Self {
        Self {
            steps: seconds.saturating_mul(STEPS_PER_SECOND),
        }
    }

    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Percentage units added to an active task per step
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "step counts stay far below 2^52")]
    pub fn increment(&self) -> f64 {
        100.0 / self.steps as f64
    }

    /// Which tasks advance during `step` (zero based)
    #[must_use]
    pub const fn active_tasks(&self, step: u64) -> [bool; 3] {
        [true, step > self.steps / 3, step > self.steps / 2]
    }

    /// Drive the schedule to completion
    ///
    /// Cancellation is checked after every pause, before the counters move.
    /// The sink is released before anything is logged so log lines never
    /// land between live bar frames.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Cancelled` when `cancel` fires mid-run
    pub fn run(
        &self,
        pacer: &mut dyn Pacer,
        sink: &mut dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<(), CommandError> {
        let increment = self.increment();
        let mut percent = [0.0_f64; 3];

        for step in 0..self.steps {
            pacer.pause(STEP_INTERVAL);

            if cancel.is_cancelled() {
                sink.abandon();
                debug!("Progress cancelled at step {} of {}", step, self.steps);
                return Err(CommandError::cancelled(NAME));
            }

            for (task, active) in self.active_tasks(step).into_iter().enumerate() {
                if active {
                    percent[task] = (percent[task] + increment).min(100.0);
                    sink.advance(task, step, percent[task]);
                }
            }
        }

        sink.complete();
        Ok(())
    }
}

/// Waits between steps
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Real-time pacer backed by `thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Handler for the `progress` command
pub struct ProgressHandler {
    binding: Binding<ProgressOptions>,
    cancel: CancellationToken,
    pacer: Box<dyn Pacer + Send>,
}

impl ProgressHandler {
    #[must_use]
    pub fn new(cancel: CancellationToken) -> Self {
        Self::with_pacer(cancel, Box::new(SleepPacer))
    }

    /// Handler using a custom pacer, e.g. one that does not sleep
    #[must_use]
    pub fn with_pacer(cancel: CancellationToken, pacer: Box<dyn Pacer + Send>) -> Self {
        Self {
            binding: Binding::new(NAME),
            cancel,
            pacer,
        }
    }

    fn run(&mut self, seconds: u64, terminal: &Terminal) -> Result<(), CommandError> {
        info!("Executing progress command with duration {}s", seconds);

        let labels = [
            TASK_LABELS[0].green().to_string(),
            TASK_LABELS[1].yellow().to_string(),
            TASK_LABELS[2].cyan().to_string(),
        ];
        let multi = terminal.progress();
        let mut sink = BarSink::new(&multi, &labels)
            .map_err(|err| CommandError::execution(NAME, err.to_string()))?;

        let schedule = ProgressSchedule::for_duration(seconds);
        schedule.run(self.pacer.as_mut(), &mut sink, &self.cancel)?;
        multi.clear().ok();

        terminal
            .line(&"✓ All tasks completed!".green().bold().to_string())
            .map_err(|err| CommandError::execution(NAME, err.to_string()))
    }
}

impl CommandHandler for ProgressHandler {
    type Options = ProgressOptions;

    fn set_options(&mut self, options: ProgressOptions) -> Result<(), ValidationError> {
        let seconds = options.duration_seconds();
        self.binding.set(options)?;
        debug!("Progress duration set to {} seconds", seconds);
        Ok(())
    }

    fn execute(&mut self, terminal: &Terminal) -> Result<i32, CommandError> {
        let seconds = self.binding.get()?.duration_seconds();
        let result = u64::try_from(seconds)
            .map_err(|_| CommandError::execution(NAME, "duration out of range"))
            .and_then(|seconds| self.run(seconds, terminal));
        settle(NAME, result, terminal)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    struct NoPause;

    impl Pacer for NoPause {
        fn pause(&mut self, _interval: Duration) {}
    }

    #[test]
    fn unbound_handler_refuses_to_run() {
        let (terminal, _capture) = Terminal::buffered();
        let mut handler = ProgressHandler::with_pacer(CancellationToken::new(), Box::new(NoPause));
        assert!(matches!(
            handler.execute(&terminal),
            Err(CommandError::Unbound { .. })
        ));
    }

    #[test]
    fn completed_run_prints_summary() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();
        let mut handler = ProgressHandler::with_pacer(CancellationToken::new(), Box::new(NoPause));

        handler.set_options(ProgressOptions::new(2)).unwrap();
        assert_eq!(handler.execute(&terminal).unwrap(), 0);
        assert!(capture.stdout().contains("✓ All tasks completed!"));
    }

    #[test]
    fn zero_duration_is_rejected_at_binding() {
        let mut handler = ProgressHandler::with_pacer(CancellationToken::new(), Box::new(NoPause));
        let err = handler.set_options(ProgressOptions::new(0)).unwrap_err();
        assert_eq!(err.field, "duration");
    }

    #[test]
    fn cancelled_token_stops_before_first_increment() {
        let (terminal, capture) = Terminal::buffered();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut handler = ProgressHandler::with_pacer(cancel, Box::new(NoPause));

        handler.set_options(ProgressOptions::default()).unwrap();
        let err = handler.execute(&terminal).unwrap_err();
        assert!(err.is_cancelled());
        assert!(!capture.stdout().contains("completed"));
    }
}
