//! Sliding Sample Window
//!
//! Provides a fixed-capacity FIFO of `f64` samples that is always full:
//! it starts zero-filled and every push evicts exactly one sample.

mod buffer;

pub use buffer::SampleWindow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Window construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A window must hold at least one sample
    #[error("Window capacity must be at least 1")]
    ZeroCapacity,
}

/// Point-in-time view of a window, detached from the live buffer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    /// Samples, oldest first
    pub samples: Vec<f64>,
    /// Real samples admitted since creation
    pub total_pushed: u64,
}
