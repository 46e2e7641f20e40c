//! Signal: Window Plus Ordered Processors

use crate::error::SignalError;
use crate::processor::Processor;
use crate::registry::ProcessorKind;
use sample_window::{SampleWindow, WindowSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Output of a single push
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorResult {
    /// Identifier of the signal that produced this result
    pub id: String,
    /// The raw pushed sample
    pub value: f64,
    /// One vector per processor, in registration order
    pub processor_results: Vec<Vec<f64>>,
}

/// A named stream of samples with a fixed-size window and a set of
/// processors evaluated on every push.
///
/// The window starts zero-filled. Processors see those zeros like any other
/// sample until the window has been filled with real data.
pub struct Signal {
    id: String,
    window: SampleWindow,
    processors: Vec<Box<dyn Processor>>,
}

impl Signal {
    /// Create a signal with a zeroed window of `window_size` samples
    pub fn new(window_size: usize, id: impl Into<String>) -> Result<Self, SignalError> {
        let id = id.into();
        let window = SampleWindow::new(window_size).map_err(|e| {
            SignalError::InvalidConfiguration(format!("signal '{id}': {e}"))
        })?;
        debug!("Created signal '{}' with window size {}", id, window_size);
        Ok(Self {
            id,
            window,
            processors: Vec::new(),
        })
    }

    /// Create a signal and register a fresh processor for each kind, in order
    pub fn with_processors(
        window_size: usize,
        id: impl Into<String>,
        kinds: &[ProcessorKind],
    ) -> Result<Self, SignalError> {
        let mut signal = Self::new(window_size, id)?;
        for kind in kinds {
            signal.add_boxed(kind.build());
        }
        Ok(signal)
    }

    /// Register a processor; returns its position in every result
    pub fn add_processor<P: Processor + 'static>(&mut self, processor: P) -> usize {
        self.add_boxed(Box::new(processor))
    }

    /// Register an already boxed processor
    pub fn add_boxed(&mut self, processor: Box<dyn Processor>) -> usize {
        let index = self.processors.len();
        debug!("Signal '{}': processor #{} = {}", self.id, index, processor.name());
        self.processors.push(processor);
        index
    }

    /// Reset the window to zeros. Processor memory is left untouched.
    pub fn clear_window(&mut self) {
        debug!("Signal '{}': window cleared", self.id);
        self.window.clear();
    }

    /// Admit one sample and evaluate every processor on the updated window
    pub fn push(&mut self, value: f64) -> ProcessorResult {
        self.window.push(value);
        let window = self.window.as_slice();

        let processor_results: Vec<Vec<f64>> = self
            .processors
            .iter_mut()
            .map(|p| p.process(window))
            .collect();

        trace!(
            id = %self.id,
            value,
            pushed = self.window.total_pushed(),
            "pushed sample"
        );

        ProcessorResult {
            id: self.id.clone(),
            value,
            processor_results,
        }
    }

    /// Signal identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current window, oldest first
    pub fn window(&self) -> &[f64] {
        self.window.as_slice()
    }

    /// Copy of the current window
    pub fn snapshot(&self) -> WindowSnapshot {
        self.window.snapshot()
    }

    /// Configured window size
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Whether at least `window_size` samples have been pushed since
    /// creation. Not reset by [`Signal::clear_window`].
    pub fn is_warm(&self) -> bool {
        self.window.is_warm()
    }

    /// Number of registered processors
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Processor names in registration order
    pub fn processor_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Samples pushed since creation
    pub fn samples_pushed(&self) -> u64 {
        self.window.total_pushed()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.id)
            .field("window", &self.window.as_slice())
            .field("processors", &self.processor_names())
            .finish()
    }
}
