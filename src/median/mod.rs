//! Running median over a sliding window
//!
//! This module provides an engine that reports the exact median of the most
//! recent N samples after every insertion, in O(log N) per sample.
//!
//! # Example
//!
//! ```
//! use windowstats::median::RunningMedian;
//!
//! let mut median = RunningMedian::new(3).unwrap();
//!
//! assert_eq!(median.update(5.0).unwrap(), 5.0);
//! assert_eq!(median.update(1.0).unwrap(), 3.0); // mean of the two middles
//! assert_eq!(median.update(3.0).unwrap(), 3.0);
//! assert_eq!(median.update(2.0).unwrap(), 2.0); // 5.0 evicted
//! ```

mod dual_multiset;

pub use dual_multiset::RunningMedian;
