//! # Windowstats
//!
//! Streaming sliding-window statistics for Rust.
//!
//! Windowstats provides exact, incrementally-maintained aggregates over a
//! fixed-capacity window of the most recent samples, built for edge telemetry
//! pipelines where samples arrive one at a time and every insertion must
//! produce a fresh aggregate without rescanning the window.
//!
//! ## Features
//!
//! - **Running Median**: exact sliding-window median in O(log N) per sample
//! - **Running Extremes**: sliding-window min/max in O(1) amortized
//! - **Running Average**: sliding-window mean in O(1)
//! - **Transform Adapters**: the uniform per-sample `apply` contract that
//!   pipeline wiring drives, for stateless functions and windowed engines
//!   alike
//! - **Strict input handling**: non-finite samples are rejected without
//!   mutating any state; zero-size windows fail at construction
//!
//! ## Quick Start
//!
//! ```rust
//! use windowstats::prelude::*;
//!
//! // Median over the last 3 samples
//! let mut median = RunningMedian::new(3).unwrap();
//!
//! for (sample, expected) in [(5.0, 5.0), (1.0, 3.0), (3.0, 3.0), (2.0, 2.0), (8.0, 3.0)] {
//!     assert_eq!(median.update(sample).unwrap(), expected);
//! }
//! ```
//!
//! ## Warm-up and eviction
//!
//! Before a window reaches its configured capacity, aggregates cover however
//! many samples have arrived so far. Once full, every insertion evicts the
//! oldest sample first (FIFO), and the aggregate always reflects exactly the
//! most recent N samples:
//!
//! ```rust
//! use windowstats::extremes::RunningMin;
//!
//! let mut min = RunningMin::new(3).unwrap();
//!
//! assert_eq!(min.update(5.0).unwrap(), 5.0); // warm-up: min of [5]
//! assert_eq!(min.update(1.0).unwrap(), 1.0); // min of [5, 1]
//! assert_eq!(min.update(3.0).unwrap(), 1.0); // min of [5, 1, 3]
//! assert_eq!(min.update(2.0).unwrap(), 1.0); // 5 evicted, min of [1, 3, 2]
//! assert_eq!(min.update(8.0).unwrap(), 2.0); // 1 evicted, min of [3, 2, 8]
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (pick what you need):
//! - `median` (default): exact sliding-window median
//! - `extremes` (default): sliding-window minimum and maximum
//! - `average` (default): sliding-window mean
//! - `transform` (default, requires `std`): per-sample pipeline adapters
//! - `full`: all algorithm families plus `serde`
//!
//! Platform features:
//! - `std` (default): standard library support
//! - `serde`: serialization of transform configurations

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core trait and window always available
pub mod traits;
pub mod window;

#[cfg(feature = "median")]
#[cfg_attr(docsrs, doc(cfg(feature = "median")))]
pub mod median;

#[cfg(feature = "extremes")]
#[cfg_attr(docsrs, doc(cfg(feature = "extremes")))]
pub mod extremes;

#[cfg(feature = "average")]
#[cfg_attr(docsrs, doc(cfg(feature = "average")))]
pub mod average;

#[cfg(feature = "transform")]
#[cfg_attr(docsrs, doc(cfg(feature = "transform")))]
pub mod transform;

pub mod prelude {
    pub use crate::traits::*;
    pub use crate::window::SampleWindow;

    #[cfg(feature = "median")]
    pub use crate::median::RunningMedian;

    #[cfg(feature = "extremes")]
    pub use crate::extremes::{RunningMax, RunningMin};

    #[cfg(feature = "average")]
    pub use crate::average::RunningAverage;

    #[cfg(feature = "transform")]
    pub use crate::transform::{Transform, WindowedConfig, WindowedOp, WindowedTransform};
}

#[cfg(feature = "median")]
pub use median::RunningMedian;

#[cfg(feature = "extremes")]
pub use extremes::{RunningMax, RunningMin};

#[cfg(feature = "average")]
pub use average::RunningAverage;
