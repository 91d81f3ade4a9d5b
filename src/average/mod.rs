//! Running average over a sliding window
//!
//! # Example
//!
//! ```
//! use windowstats::average::RunningAverage;
//!
//! let mut avg = RunningAverage::new(3).unwrap();
//!
//! assert_eq!(avg.update(1.0).unwrap(), 1.0);
//! assert_eq!(avg.update(2.0).unwrap(), 1.5);
//! assert_eq!(avg.update(3.0).unwrap(), 2.0);
//! assert_eq!(avg.update(7.0).unwrap(), 4.0); // window is now [2, 3, 7]
//! ```

mod windowed_mean;

pub use windowed_mean::RunningAverage;
