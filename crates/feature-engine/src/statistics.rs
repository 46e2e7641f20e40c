//! Amplitude Statistics over the Window
//!
//! Stateless processors whose output depends only on the current window.
//! Warm-up padding is counted like real data, so every mean divides by the
//! full window size.

use crate::processor::Processor;

fn mean_of(window: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    debug_assert!(!window.is_empty(), "window must hold at least one sample");
    window.iter().map(|&v| f(v)).sum::<f64>() / window.len() as f64
}

/// Arithmetic mean of the window
#[derive(Debug, Clone, Copy, Default)]
pub struct Average;

impl Average {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for Average {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        vec![mean_of(window, |v| v)]
    }

    fn name(&self) -> &str {
        "avg"
    }
}

/// Mean Absolute Value (MAV)
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAbsoluteValue;

impl MeanAbsoluteValue {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for MeanAbsoluteValue {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        vec![mean_of(window, f64::abs)]
    }

    fn name(&self) -> &str {
        "mav"
    }
}

/// Root mean square of the current window only
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedRms;

impl WindowedRms {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for WindowedRms {
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        vec![mean_of(window, |v| v * v).sqrt()]
    }

    fn name(&self) -> &str {
        "rms_window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_counts_padding() {
        let mut avg = Average::new();
        // Two real samples in a window of four
        let result = avg.process(&[0.0, 0.0, 4.0, 8.0]);
        assert!((result[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mav() {
        let mut mav = MeanAbsoluteValue::new();
        assert_eq!(mav.process(&[2.0, 3.0, 4.0]), vec![3.0]);
        assert_eq!(mav.process(&[-2.0, 3.0, -4.0]), vec![3.0]);
    }

    #[test]
    fn test_windowed_rms() {
        let mut rms = WindowedRms::new();
        let result = rms.process(&[3.0, 4.0]);
        assert!((result[0] - 12.5f64.sqrt()).abs() < 1e-12);

        // Padding zeros dilute the value
        let result = rms.process(&[0.0, 0.0, 3.0]);
        assert!((result[0] - 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_window() {
        assert_eq!(WindowedRms::new().process(&[0.0; 5]), vec![0.0]);
        assert_eq!(Average::new().process(&[0.0; 5]), vec![0.0]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Average.name(), "avg");
        assert_eq!(MeanAbsoluteValue.name(), "mav");
        assert_eq!(WindowedRms.name(), "rms_window");
    }
}
