//! Core trait and error types for windowed engines
//!
//! Every engine implements the base [`WindowAggregate`] trait: one sample in,
//! one aggregate out, computed over a fixed-capacity FIFO window of the most
//! recent samples.

use core::fmt::Debug;

/// Error constructing an engine or window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Window capacity must be at least 1
    ZeroWindow,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroWindow => write!(f, "window size must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error rejecting a single sample
///
/// A rejected sample leaves the engine completely unchanged; the update is
/// all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// Input was NaN or infinite
    ///
    /// Admitting a non-finite value would corrupt every subsequent ordering
    /// comparison, so the engine refuses it instead of silently skipping it.
    NonFinite { value: f64 },
}

impl core::fmt::Display for SampleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SampleError::NonFinite { value } => {
                write!(f, "sample must be finite, got {}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}

/// Core trait for all sliding-window aggregate engines
///
/// An engine owns a fixed-capacity FIFO window of the most recent samples and
/// recomputes its aggregate incrementally on every insertion. During warm-up
/// (fewer samples seen than the capacity) the aggregate covers whatever has
/// arrived so far.
pub trait WindowAggregate: Clone + Debug {
    /// Feed one sample and return the aggregate over the current window
    ///
    /// Evicts the oldest sample first when the window is already full.
    /// Non-finite input is rejected without mutating any state.
    fn update(&mut self, sample: f64) -> Result<f64, SampleError>;

    /// The aggregate over the current window contents, without inserting
    ///
    /// Returns `None` while the window is empty.
    fn current(&self) -> Option<f64>;

    /// Clear the window and all auxiliary structures, returning to warm-up
    fn reset(&mut self);

    /// Configured window capacity, fixed at construction
    fn capacity(&self) -> usize;

    /// Number of samples currently held in the window
    fn len(&self) -> usize;

    /// Check if no samples have been accepted since construction or reset
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the window has not yet reached its configured capacity
    fn is_warming_up(&self) -> bool {
        self.len() < self.capacity()
    }
}
