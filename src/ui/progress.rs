//! Progress rendering
//!
//! [`ProgressSink`] decouples the progress loop from how progress is
//! shown. [`BarSink`] draws one indicatif bar per task inside a shared
//! `MultiProgress`.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif::style::TemplateError;
use std::time::Duration;

/// Bars are tracked in tenths of a percent
const BAR_RESOLUTION: u64 = 1000;

const BAR_TEMPLATE: &str = "{msg:<18} [{bar:40.green/white}] {percent:>3}% {spinner}";

/// Receives per-task progress from a running loop
pub trait ProgressSink {
    /// Task `task` reached `percent` during step `step`
    fn advance(&mut self, task: usize, step: u64, percent: f64);

    /// Every task finished
    fn complete(&mut self);

    /// The run stopped early
    fn abandon(&mut self);
}

/// Indicatif-backed sink, one bar per task
pub struct BarSink {
    bars: Vec<ProgressBar>,
}

impl BarSink {
    /// Add one bar per label to `multi`
    ///
    /// # Errors
    ///
    /// Returns an error if the bar template fails to parse
    pub fn new(multi: &MultiProgress, labels: &[String]) -> Result<Self, TemplateError> {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)?.progress_chars("━╸ ");

        let bars = labels
            .iter()
            .map(|label| {
                let bar = multi.add(ProgressBar::new(BAR_RESOLUTION));
                bar.set_style(style.clone());
                bar.set_message(label.clone());
                bar.enable_steady_tick(Duration::from_millis(100));
                bar
            })
            .collect();

        Ok(Self { bars })
    }
}

impl ProgressSink for BarSink {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "percent is clamped to 0..=100 before scaling"
    )]
    fn advance(&mut self, task: usize, _step: u64, percent: f64) {
        if let Some(bar) = self.bars.get(task) {
            let scaled = (percent.clamp(0.0, 100.0) * 10.0).round() as u64;
            bar.set_position(scaled);
        }
    }

    fn complete(&mut self) {
        for bar in &self.bars {
            bar.set_position(BAR_RESOLUTION);
            bar.finish();
        }
    }

    fn abandon(&mut self) {
        for bar in &self.bars {
            bar.abandon();
        }
    }
}
