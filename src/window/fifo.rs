//! Fixed-capacity FIFO buffer of raw numeric samples
//!
//! Insertion order equals arrival order; when the buffer is at capacity the
//! oldest sample is evicted and handed back to the caller.

use crate::traits::ConfigError;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

/// Fixed-capacity FIFO window of the most recent samples
///
/// The window never grows past its capacity: pushing into a full window
/// removes and returns the oldest sample. Evictions are always reported, so a
/// caller maintaining an auxiliary structure alongside the window can keep it
/// exactly synchronized.
///
/// # Example
///
/// ```
/// use windowstats::window::SampleWindow;
///
/// let mut window = SampleWindow::new(3).unwrap();
///
/// for v in [5.0, 1.0, 3.0] {
///     assert_eq!(window.push(v), None); // warm-up, nothing evicted
/// }
/// assert!(window.is_full());
///
/// assert_eq!(window.push(2.0), Some(5.0)); // FIFO: the oldest goes first
/// assert_eq!(window.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SampleWindow {
    /// Maximum number of samples held, fixed at construction
    capacity: usize,
    /// Samples in arrival order, oldest at the front
    buffer: VecDeque<f64>,
}

impl SampleWindow {
    /// Create a window holding up to `capacity` samples
    ///
    /// Fails with [`ConfigError::ZeroWindow`] for `capacity == 0`; a window
    /// that can hold nothing has no meaningful aggregate.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        Ok(Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a sample, evicting and returning the oldest if already full
    ///
    /// Returns `None` during warm-up (the window simply grows by one).
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(value);
        evicted
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check if the window has reached its capacity
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Iterate over the samples in arrival order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter().copied()
    }

    /// Remove all samples, keeping the configured capacity
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
