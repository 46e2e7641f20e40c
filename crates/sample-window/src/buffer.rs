//! Mirrored Ring Buffer Implementation

use crate::{WindowError, WindowSnapshot};

/// Default window capacity used by the pipeline driver
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity sliding window of samples.
///
/// Every sample is written twice, at `head` and `head + capacity`, so the
/// logical window (oldest to newest) is always the contiguous slice
/// `storage[head..head + capacity]`. Pushing is O(1) and never reallocates.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    /// Pre-allocated storage, twice the capacity
    storage: Box<[f64]>,
    /// Capacity of the window
    capacity: usize,
    /// Index of the oldest sample (and next write position)
    head: usize,
    /// Total samples pushed (for statistics)
    total_pushed: u64,
}

impl SampleWindow {
    /// Create a zero-filled window holding exactly `capacity` samples
    pub fn new(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::ZeroCapacity);
        }
        Ok(Self {
            storage: vec![0.0; capacity * 2].into_boxed_slice(),
            capacity,
            head: 0,
            total_pushed: 0,
        })
    }

    /// Create a window with default capacity (10 samples)
    pub fn with_default_capacity() -> Self {
        Self {
            storage: vec![0.0; DEFAULT_CAPACITY * 2].into_boxed_slice(),
            capacity: DEFAULT_CAPACITY,
            head: 0,
            total_pushed: 0,
        }
    }

    /// Evict the oldest sample and append `value` as the newest
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.storage[self.head] = value;
        self.storage[self.head + self.capacity] = value;
        self.head = (self.head + 1) % self.capacity;
        self.total_pushed += 1;
    }

    /// Current window contents, oldest first
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.storage[self.head..self.head + self.capacity]
    }

    /// Most recently pushed sample (zero before the first push)
    pub fn latest(&self) -> f64 {
        self.as_slice()[self.capacity - 1]
    }

    /// Number of samples in the window; always equal to the capacity
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// A window is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every slot holds a real sample rather than start-up padding
    pub fn is_warm(&self) -> bool {
        self.total_pushed >= self.capacity as u64
    }

    /// Get total samples pushed since creation
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Reset every slot to zero. The push counter is kept.
    pub fn clear(&mut self) {
        self.storage.fill(0.0);
    }

    /// Copy the current contents out of the buffer
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            samples: self.as_slice().to_vec(),
            total_pushed: self.total_pushed,
        }
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
