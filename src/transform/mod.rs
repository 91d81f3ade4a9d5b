//! Per-sample transform adapters for pipeline wiring
//!
//! The surrounding pipeline drives every stage through one uniform contract:
//! [`Transform::apply`], one numeric sample in, one numeric result out. Two
//! kinds of stage implement it:
//!
//! - **stateless** functions of the current sample only, like [`Sqrt`];
//! - **stateful** stages owning exactly one windowed engine, like
//!   [`WindowedTransform`], which binds its engine lazily on first use and
//!   guards the whole insert-evict-rebalance sequence with a single lock.
//!
//! # Example
//!
//! ```
//! use windowstats::transform::{Sqrt, Transform, WindowedConfig, WindowedOp, WindowedTransform};
//!
//! let sqrt = Sqrt;
//! assert_eq!(sqrt.apply(9.0).unwrap(), 3.0);
//!
//! let median = WindowedTransform::new(WindowedConfig {
//!     op: WindowedOp::Median,
//!     window_size: 3,
//! })
//! .unwrap();
//!
//! assert_eq!(median.apply(5.0).unwrap(), 5.0);
//! assert_eq!(median.apply(1.0).unwrap(), 3.0);
//! ```

mod stateless;
mod windowed;

pub use stateless::Sqrt;
pub use windowed::{WindowedConfig, WindowedOp, WindowedTransform};

use crate::traits::{ConfigError, SampleError};

/// Error from a transform stage
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The stage was misconfigured
    Config(ConfigError),
    /// The incoming sample was rejected
    Sample(SampleError),
    /// The sample was outside the function's domain
    ///
    /// Domain failures are reported, never coerced to a sentinel value.
    Domain { op: &'static str, value: f64 },
}

impl core::fmt::Display for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransformError::Config(err) => write!(f, "configuration: {}", err),
            TransformError::Sample(err) => write!(f, "sample: {}", err),
            TransformError::Domain { op, value } => {
                write!(f, "{} is undefined for input {}", op, value)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<ConfigError> for TransformError {
    fn from(err: ConfigError) -> Self {
        TransformError::Config(err)
    }
}

impl From<SampleError> for TransformError {
    fn from(err: SampleError) -> Self {
        TransformError::Sample(err)
    }
}

/// Uniform per-sample contract invoked once per arriving sample
///
/// Implementations take `&self` so one stage instance can be shared with a
/// surrounding concurrent runtime; stateful implementations serialize their
/// internal mutation behind a lock.
pub trait Transform: Send + Sync {
    /// Transform one sample
    fn apply(&self, sample: f64) -> Result<f64, TransformError>;

    /// Return the stage to its initial state
    ///
    /// Stateless stages have nothing to clear; the default is a no-op.
    fn reset(&self) {}
}
