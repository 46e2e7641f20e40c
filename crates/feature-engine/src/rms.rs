//! Running Root Mean Square

use crate::processor::Processor;

/// RMS over the entire history of pushed samples.
///
/// Only the newest sample (`window[last]`) is read; the window size does not
/// matter. The value is updated in place:
///
/// ```text
/// r_t = sqrt(((t - 1) / t) * r_{t-1}^2 + x_t^2 / t)
/// ```
///
/// which is the direct RMS rewritten so that no sum of squares is ever held.
/// A long stream therefore cannot overflow an accumulator.
#[derive(Debug, Clone, Default)]
pub struct RunningRms {
    /// RMS after the previous call
    previous_rms: f64,
    /// Samples seen so far
    count: u64,
}

impl RunningRms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current running value (zero before the first sample)
    pub fn value(&self) -> f64 {
        self.previous_rms
    }

    /// Number of samples folded into the running value
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fold one sample into the running value and return the new RMS
    pub fn update(&mut self, sample: f64) -> f64 {
        self.count += 1;
        let t = self.count as f64;
        self.previous_rms =
            (((t - 1.0) / t) * (self.previous_rms * self.previous_rms) + (sample * sample / t)).sqrt();
        self.previous_rms
    }

    /// Forget the history
    pub fn reset(&mut self) {
        self.previous_rms = 0.0;
        self.count = 0;
    }
}

impl Processor for RunningRms {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        debug_assert!(!window.is_empty(), "window must hold at least one sample");
        let newest = window[window.len() - 1];
        vec![self.update(newest)]
    }

    fn name(&self) -> &str {
        "rms"
    }
}
