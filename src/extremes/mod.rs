//! Running minimum and maximum over a sliding window
//!
//! [`RunningMin`] and [`RunningMax`] answer sliding-window extremum queries in
//! O(1) amortized time per sample using a monotonic candidate deque.
//!
//! # Example
//!
//! ```
//! use windowstats::extremes::RunningMin;
//!
//! let mut min = RunningMin::new(3).unwrap();
//!
//! let outputs: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 8.0]
//!     .into_iter()
//!     .map(|v| min.update(v).unwrap())
//!     .collect();
//!
//! assert_eq!(outputs, vec![5.0, 1.0, 1.0, 1.0, 2.0]);
//! ```

mod monotonic;

pub use monotonic::{RunningMax, RunningMin};
