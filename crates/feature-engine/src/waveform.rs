//! Waveform Shape Features
//!
//! Features computed over consecutive sample pairs. A window of one sample
//! has no pairs and yields zero.

use crate::processor::Processor;

/// Waveform Length (WL): cumulative absolute change across the window
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformLength;

impl WaveformLength {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for WaveformLength {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        let wl: f64 = window.windows(2).map(|pair| (pair[1] - pair[0]).abs()).sum();
        vec![wl]
    }

    fn name(&self) -> &str {
        "wl"
    }
}

/// Wilson Amplitude (WAMP).
///
/// Counts consecutive pairs whose absolute difference is strictly greater
/// than `threshold`. The count is returned as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonAmplitude {
    threshold: f64,
}

impl WilsonAmplitude {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Processor for WilsonAmplitude {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        let count = window
            .windows(2)
            .filter(|pair| (pair[0] - pair[1]).abs() > self.threshold)
            .count();
        vec![count as f64]
    }

    fn name(&self) -> &str {
        "wamp"
    }
}
