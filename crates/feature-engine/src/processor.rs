//! Processor Contract

/// A feature extractor evaluated against the current window on every push.
///
/// `window` holds the samples oldest first and always has the signal's full
/// window size, including zero padding during warm-up. The returned vector
/// may have any length; most built-ins return a single value.
///
/// Implementations may keep private state between calls (see
/// [`RunningRms`](crate::RunningRms)). That state belongs to one instance;
/// registering the same instance on two signals is impossible without
/// wrapping it, because [`Signal`](crate::Signal) takes processors by value.
pub trait Processor: Send {
    /// Compute the feature vector for the current window
    fn process(&mut self, window: &[f64]) -> Vec<f64>;

    /// Short name used for output headers and logs
    fn name(&self) -> &str {
        "custom"
    }
}

/// Closures are processors, so callers can register ad-hoc features
/// without declaring a type.
impl<F> Processor for F
where
    F: FnMut(&[f64]) -> Vec<f64> + Send,
{
    fn process(&mut self, window: &[f64]) -> Vec<f64> {
        self(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_processor() {
        let mut max = |window: &[f64]| vec![window.iter().cloned().fold(f64::MIN, f64::max)];
        assert_eq!(max.process(&[1.0, 5.0, 3.0]), vec![5.0]);
        assert_eq!(Processor::name(&max), "custom");
    }

    #[test]
    fn test_closure_with_memory() {
        let mut calls = 0u32;
        let mut counter = move |_: &[f64]| {
            calls += 1;
            vec![calls as f64]
        };
        counter.process(&[0.0]);
        assert_eq!(counter.process(&[0.0]), vec![2.0]);
    }

    #[test]
    fn test_boxed_dispatch() {
        let mut processors: Vec<Box<dyn Processor>> = vec![
            Box::new(|w: &[f64]| vec![w.len() as f64]),
            Box::new(|w: &[f64]| vec![w[0], w[w.len() - 1]]),
        ];
        let window = [1.0, 2.0, 3.0];
        let out: Vec<Vec<f64>> = processors.iter_mut().map(|p| p.process(&window)).collect();
        assert_eq!(out, vec![vec![3.0], vec![1.0, 3.0]]);
    }
}
