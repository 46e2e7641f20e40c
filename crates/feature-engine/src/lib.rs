//! Feature Engineering Engine
//!
//! Incremental feature extraction over a streaming signal. A [`Signal`] owns
//! a fixed-size sliding window; every [`Signal::push`] advances the window by
//! one sample and evaluates each registered [`Processor`] against it.
//!
//! ```
//! use feature_engine::{MeanAbsoluteValue, Signal, WaveformLength};
//!
//! let mut signal = Signal::new(3, "demo").unwrap();
//! signal.add_processor(MeanAbsoluteValue::new());
//! signal.add_processor(WaveformLength::new());
//!
//! let mut result = None;
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     result = Some(signal.push(v));
//! }
//! assert_eq!(result.unwrap().processor_results, vec![vec![3.0], vec![2.0]]);
//! ```

mod error;
mod processor;
mod registry;
mod rms;
mod signal;
mod statistics;
mod waveform;

pub use error::SignalError;
pub use processor::Processor;
pub use registry::ProcessorKind;
pub use rms::RunningRms;
pub use sample_window::WindowSnapshot;
pub use signal::{ProcessorResult, Signal};
pub use statistics::{Average, MeanAbsoluteValue, WindowedRms};
pub use waveform::{WaveformLength, WilsonAmplitude};
