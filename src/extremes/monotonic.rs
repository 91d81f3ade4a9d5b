//! Sliding-window extremes via a monotonic candidate deque
//!
//! Candidates are kept as (arrival index, value) pairs in monotonic value
//! order: non-decreasing for the minimum, non-increasing for the maximum. The
//! front is always the current extremum. Every sample is pushed once and
//! popped at most once, so updates cost O(1) amortized.

use crate::traits::{ConfigError, SampleError};
use crate::window::SampleWindow;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

/// Which end of the ordering the tracker reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Whether an incumbent candidate can still beat the incoming sample
    /// after the incoming sample enters the window
    fn retains(self, incumbent: f64, incoming: f64) -> bool {
        match self {
            Extremum::Min => incumbent < incoming,
            Extremum::Max => incumbent > incoming,
        }
    }
}

/// Shared tracker behind [`RunningMin`] and [`RunningMax`]
///
/// The two directions differ only in the comparison used to discard dominated
/// back candidates.
#[derive(Clone, Debug)]
struct ExtremeTracker {
    /// Window owning the eviction order; its live length defines the valid
    /// arrival-index range during warm-up
    window: SampleWindow,
    /// (arrival index, value) candidates in monotonic value order
    candidates: VecDeque<(u64, f64)>,
    /// Total samples accepted since construction or reset
    arrivals: u64,
    extremum: Extremum,
}

impl ExtremeTracker {
    fn new(window_size: usize, extremum: Extremum) -> Result<Self, ConfigError> {
        Ok(Self {
            window: SampleWindow::new(window_size)?,
            candidates: VecDeque::with_capacity(window_size),
            arrivals: 0,
            extremum,
        })
    }

    fn update(&mut self, value: f64) -> Result<f64, SampleError> {
        if !value.is_finite() {
            return Err(SampleError::NonFinite { value });
        }

        let index = self.arrivals;
        self.arrivals += 1;
        self.window.push(value);

        // Dominated candidates can never become the extremum again while the
        // new sample remains in the window
        while let Some(&(_, incumbent)) = self.candidates.back() {
            if self.extremum.retains(incumbent, value) {
                break;
            }
            self.candidates.pop_back();
        }
        self.candidates.push_back((index, value));

        // Expire candidates that have left the window. The live window length
        // (not the configured capacity) bounds the range, which makes warm-up
        // come out right.
        let oldest_valid = index + 1 - self.window.len() as u64;
        while let Some(&(front_index, _)) = self.candidates.front() {
            if front_index >= oldest_valid {
                break;
            }
            self.candidates.pop_front();
        }

        match self.candidates.front() {
            Some(&(_, front)) => Ok(front),
            None => unreachable!("deque holds at least the sample just pushed"),
        }
    }

    fn current(&self) -> Option<f64> {
        self.candidates.front().map(|&(_, v)| v)
    }

    fn reset(&mut self) {
        self.window.clear();
        self.candidates.clear();
        self.arrivals = 0;
    }
}

macro_rules! extreme_engine {
    ($name:ident, $extremum:expr, $what:literal) => {
        #[doc = concat!("Running ", $what, " over a sliding window")]
        ///
        /// Reports the extremum of the most recent N samples after every
        /// insertion, in O(1) amortized time. During warm-up the extremum
        /// covers however many samples have arrived so far.
        #[derive(Clone, Debug)]
        pub struct $name {
            inner: ExtremeTracker,
        }

        impl $name {
            /// Create an engine over a window of `window_size` samples
            ///
            /// Fails with [`ConfigError::ZeroWindow`] for `window_size == 0`.
            pub fn new(window_size: usize) -> Result<Self, ConfigError> {
                Ok(Self {
                    inner: ExtremeTracker::new(window_size, $extremum)?,
                })
            }

            #[doc = concat!("Feed one sample and return the ", $what, " of the current window")]
            ///
            /// Non-finite input is rejected before anything is touched.
            pub fn update(&mut self, value: f64) -> Result<f64, SampleError> {
                self.inner.update(value)
            }

            #[doc = concat!("The ", $what, " of the current window, without inserting")]
            ///
            /// Returns `None` while the window is empty.
            pub fn current(&self) -> Option<f64> {
                self.inner.current()
            }

            /// Configured window capacity
            pub fn capacity(&self) -> usize {
                self.inner.window.capacity()
            }

            /// Number of samples currently in the window
            pub fn len(&self) -> usize {
                self.inner.window.len()
            }

            /// Check if no samples have been accepted
            pub fn is_empty(&self) -> bool {
                self.inner.window.is_empty()
            }

            /// Clear all state, returning to warm-up
            pub fn reset(&mut self) {
                self.inner.reset();
            }
        }

        impl crate::traits::WindowAggregate for $name {
            fn update(&mut self, sample: f64) -> Result<f64, SampleError> {
                $name::update(self, sample)
            }

            fn current(&self) -> Option<f64> {
                $name::current(self)
            }

            fn reset(&mut self) {
                $name::reset(self);
            }

            fn capacity(&self) -> usize {
                $name::capacity(self)
            }

            fn len(&self) -> usize {
                $name::len(self)
            }
        }
    };
}

extreme_engine!(RunningMin, Extremum::Min, "minimum");
extreme_engine!(RunningMax, Extremum::Max, "maximum");
