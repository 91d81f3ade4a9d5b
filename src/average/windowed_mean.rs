//! Sliding-window mean via an incremental running sum
//!
//! Each update adds the incoming sample to the sum and subtracts the evicted
//! one, so the mean costs O(1) per sample regardless of window size.

use crate::traits::{ConfigError, SampleError};
use crate::window::SampleWindow;

/// Running arithmetic mean over a sliding window
///
/// # Example
///
/// ```
/// use windowstats::average::RunningAverage;
///
/// let mut avg = RunningAverage::new(4).unwrap();
///
/// for v in [2.0, 4.0, 4.0, 6.0] {
///     avg.update(v).unwrap();
/// }
///
/// assert_eq!(avg.mean(), Some(4.0));
/// assert_eq!(avg.sum(), 16.0);
/// ```
#[derive(Clone, Debug)]
pub struct RunningAverage {
    window: SampleWindow,
    /// Sum of the samples currently in the window
    sum: f64,
}

impl RunningAverage {
    /// Create an engine over a window of `window_size` samples
    ///
    /// Fails with [`ConfigError::ZeroWindow`] for `window_size == 0`.
    pub fn new(window_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            window: SampleWindow::new(window_size)?,
            sum: 0.0,
        })
    }

    /// Feed one sample and return the mean of the current window
    ///
    /// Non-finite input is rejected before anything is touched.
    pub fn update(&mut self, value: f64) -> Result<f64, SampleError> {
        if !value.is_finite() {
            return Err(SampleError::NonFinite { value });
        }

        self.sum += value;
        if let Some(evicted) = self.window.push(value) {
            self.sum -= evicted;
        }

        Ok(self.sum / self.window.len() as f64)
    }

    /// The mean of the current window, without inserting
    ///
    /// Returns `None` while the window is empty.
    pub fn mean(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.sum / self.window.len() as f64)
        }
    }

    /// Sum of the samples currently in the window
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Configured window capacity
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no samples have been accepted
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Clear all state, returning to warm-up
    pub fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
    }
}

impl crate::traits::WindowAggregate for RunningAverage {
    fn update(&mut self, sample: f64) -> Result<f64, SampleError> {
        RunningAverage::update(self, sample)
    }

    fn current(&self) -> Option<f64> {
        self.mean()
    }

    fn reset(&mut self) {
        RunningAverage::reset(self);
    }

    fn capacity(&self) -> usize {
        RunningAverage::capacity(self)
    }

    fn len(&self) -> usize {
        RunningAverage::len(self)
    }
}
