//! Per-id signal routing

use feature_engine::{ProcessorKind, ProcessorResult, Signal, SignalError};
use std::collections::HashMap;
use tracing::info;

/// Keeps one [`Signal`] per id, created on first sight with the configured
/// window size and a fresh set of processors.
pub struct SignalRouter {
    window_size: usize,
    kinds: Vec<ProcessorKind>,
    signals: HashMap<String, Signal>,
}

impl SignalRouter {
    pub fn new(window_size: usize, kinds: Vec<ProcessorKind>) -> Result<Self, SignalError> {
        if window_size == 0 {
            return Err(SignalError::InvalidConfiguration(
                "window size must be at least 1".into(),
            ));
        }
        Ok(Self {
            window_size,
            kinds,
            signals: HashMap::new(),
        })
    }

    /// Push a sample into the signal for `id`
    pub fn push(&mut self, id: &str, value: f64) -> Result<ProcessorResult, SignalError> {
        if let Some(signal) = self.signals.get_mut(id) {
            return Ok(signal.push(value));
        }

        let mut signal = Signal::with_processors(self.window_size, id, &self.kinds)?;
        let stateful = self.kinds.iter().filter(|k| k.is_stateful()).count();
        info!(
            "New signal '{}' ({} processors, {} with running state)",
            id,
            signal.processor_count(),
            stateful
        );
        let result = signal.push(value);
        self.signals.insert(id.to_string(), signal);
        Ok(result)
    }

    /// Processor names, in output order
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.kinds.iter().map(|k| k.name()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Signal> {
        self.signals.get(id)
    }

    /// Number of distinct signals seen
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_window_rejected() {
        assert!(SignalRouter::new(0, vec![]).is_err());
    }

    #[test]
    fn test_signals_are_independent() {
        let mut router = SignalRouter::new(3, vec![ProcessorKind::RunningRms]).unwrap();

        router.push("a", 10.0).unwrap();
        router.push("a", 10.0).unwrap();
        let b = router.push("b", 1.0).unwrap();

        assert_eq!(b.id, "b");
        assert_eq!(b.processor_results, vec![vec![1.0]]);
        assert_eq!(router.len(), 2);
        assert_eq!(router.get("a").unwrap().window(), &[0.0, 10.0, 10.0]);
        assert_eq!(router.get("b").unwrap().window(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_processor_names() {
        let router = SignalRouter::new(
            2,
            vec![ProcessorKind::WilsonAmplitude { threshold: 1.0 }, ProcessorKind::Average],
        )
        .unwrap();
        assert_eq!(router.processor_names(), vec!["wamp", "avg"]);
        assert!(router.is_empty());
    }

    proptest! {
        #[test]
        fn prop_windows_are_per_id_tails(
            window_size in 1usize..8,
            pushes in proptest::collection::vec((0usize..3, -1e3f64..1e3), 0..60),
        ) {
            let ids = ["a", "b", "c"];
            let mut router = SignalRouter::new(window_size, vec![ProcessorKind::Average]).unwrap();
            let mut history: HashMap<&str, Vec<f64>> = HashMap::new();

            for (i, value) in pushes {
                let id = ids[i];
                let result = router.push(id, value).unwrap();
                prop_assert_eq!(result.id.as_str(), id);
                history.entry(id).or_default().push(value);
            }

            prop_assert_eq!(router.len(), history.len());
            for (id, values) in &history {
                let mut expected = vec![0.0; window_size];
                expected.extend_from_slice(values);
                let tail = &expected[expected.len() - window_size..];
                prop_assert_eq!(router.get(id).unwrap().window(), tail);
            }
        }
    }
}
