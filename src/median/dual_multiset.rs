//! Sliding-window median via two balanced multisets
//!
//! The window values are split into a "low" half and a "high" half, each a
//! tree multiset with O(log N) insert and O(log N) removal of a given value.
//! Removal-by-value is what eviction needs, and is the reason a binary heap
//! cannot back this structure: heaps only ever surrender their top element.

use crate::traits::{ConfigError, SampleError};
use crate::window::SampleWindow;

#[cfg(feature = "std")]
use std::collections::BTreeMap;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;

/// Total-order key for finite f64 values
///
/// The engines reject NaN at the boundary, so `total_cmp` gives a plain total
/// order over everything that can actually be stored.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OrdF64(f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Tree multiset of f64 values: occurrence counts keyed by value
#[derive(Clone, Debug, Default)]
struct TreeMultiset {
    entries: BTreeMap<OrdF64, usize>,
    len: usize,
}

impl TreeMultiset {
    fn insert(&mut self, value: f64) {
        *self.entries.entry(OrdF64(value)).or_insert(0) += 1;
        self.len += 1;
    }

    /// Remove one occurrence of `value`, reporting whether it was present
    fn remove(&mut self, value: f64) -> bool {
        match self.entries.get_mut(&OrdF64(value)) {
            Some(count) if *count > 1 => {
                *count -= 1;
            }
            Some(_) => {
                self.entries.remove(&OrdF64(value));
            }
            None => return false,
        }
        self.len -= 1;
        true
    }

    fn min(&self) -> Option<f64> {
        self.entries.keys().next().map(|k| k.0)
    }

    fn max(&self) -> Option<f64> {
        self.entries.keys().next_back().map(|k| k.0)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}

/// Exact running median over a sliding window
///
/// Maintains the window values split into two tree multisets: `low` holds the
/// smaller half, `high` the larger half, with `|low| - |high|` kept in
/// `{0, 1}` and every low value ≤ every high value. The median is then read
/// off the boundary in O(log N): `max(low)` for an odd count, the mean of
/// `max(low)` and `min(high)` for an even count.
///
/// Eviction removes the outgoing value from whichever half holds it, by
/// equality rather than position, so duplicate values behave as a multiset
/// and only one occurrence disappears per eviction.
///
/// # Example
///
/// ```
/// use windowstats::median::RunningMedian;
///
/// let mut median = RunningMedian::new(3).unwrap();
///
/// let outputs: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 8.0]
///     .into_iter()
///     .map(|v| median.update(v).unwrap())
///     .collect();
///
/// assert_eq!(outputs, vec![5.0, 3.0, 3.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct RunningMedian {
    /// Window owning the eviction order
    window: SampleWindow,
    /// Smaller half; its maximum is the lower middle value
    low: TreeMultiset,
    /// Larger half; its minimum is the upper middle value
    high: TreeMultiset,
}

impl RunningMedian {
    /// Create an engine over a window of `window_size` samples
    ///
    /// Fails with [`ConfigError::ZeroWindow`] for `window_size == 0`.
    pub fn new(window_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            window: SampleWindow::new(window_size)?,
            low: TreeMultiset::default(),
            high: TreeMultiset::default(),
        })
    }

    /// Feed one sample and return the median of the current window
    ///
    /// During warm-up the median covers however many samples have arrived so
    /// far. Non-finite input is rejected before anything is touched.
    pub fn update(&mut self, value: f64) -> Result<f64, SampleError> {
        if !value.is_finite() {
            return Err(SampleError::NonFinite { value });
        }

        // Insert into the half that preserves low ≤ high
        match self.low.max() {
            Some(low_max) if value > low_max => self.high.insert(value),
            _ => self.low.insert(value),
        }

        if let Some(evicted) = self.window.push(value) {
            // The evicted value must still be in one of the halves; anything
            // else means the structures desynchronized, which is a defect,
            // not an input error.
            if !self.low.remove(evicted) && !self.high.remove(evicted) {
                panic!("evicted sample {} missing from both halves", evicted);
            }
        }

        self.rebalance();

        match self.median() {
            Some(m) => Ok(m),
            None => unreachable!("window is non-empty after an accepted update"),
        }
    }

    /// The median of the current window contents, without inserting
    ///
    /// Even counts report the arithmetic mean of the two middle values.
    /// Returns `None` while the window is empty.
    pub fn median(&self) -> Option<f64> {
        let total = self.low.len() + self.high.len();
        if total == 0 {
            return None;
        }

        if total % 2 == 1 {
            // The extra element always lives in the low half
            self.low.max()
        } else {
            match (self.low.max(), self.high.min()) {
                (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
                _ => None,
            }
        }
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

    /// Clear the window and both halves, returning to warm-up
    pub fn reset(&mut self) {
        self.window.clear();
        self.low.clear();
        self.high.clear();
    }

    /// Restore `|low| - |high| ∈ {0, 1}` by moving boundary elements
    fn rebalance(&mut self) {
        loop {
            if self.low.len() > self.high.len() + 1 {
                let boundary = match self.low.max() {
                    Some(v) => v,
                    None => unreachable!("low half cannot outgrow an empty set"),
                };
                self.low.remove(boundary);
                self.high.insert(boundary);
            } else if self.high.len() > self.low.len() {
                let boundary = match self.high.min() {
                    Some(v) => v,
                    None => unreachable!("high half cannot outgrow an empty set"),
                };
                self.high.remove(boundary);
                self.low.insert(boundary);
            } else {
                break;
            }
        }
    }
}

impl crate::traits::WindowAggregate for RunningMedian {
    fn update(&mut self, sample: f64) -> Result<f64, SampleError> {
        RunningMedian::update(self, sample)
    }

    fn current(&self) -> Option<f64> {
        self.median()
    }

    fn reset(&mut self) {
        RunningMedian::reset(self);
    }

    fn capacity(&self) -> usize {
        RunningMedian::capacity(self)
    }

    fn len(&self) -> usize {
        RunningMedian::len(self)
    }
}
