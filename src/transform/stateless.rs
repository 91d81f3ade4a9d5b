//! Stateless per-sample transforms

use super::{Transform, TransformError};

/// Square root of each sample
///
/// Negative input is a domain error: the result would be complex, and a
/// sentinel like NaN would poison every downstream comparison.
///
/// # Example
///
/// ```
/// use windowstats::transform::{Sqrt, Transform};
///
/// assert_eq!(Sqrt.apply(16.0).unwrap(), 4.0);
/// assert!(Sqrt.apply(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sqrt;

impl Transform for Sqrt {
    fn apply(&self, sample: f64) -> Result<f64, TransformError> {
        if !sample.is_finite() {
            return Err(TransformError::Sample(
                crate::traits::SampleError::NonFinite { value: sample },
            ));
        }
        if sample < 0.0 {
            return Err(TransformError::Domain {
                op: "sqrt",
                value: sample,
            });
        }
        Ok(sample.sqrt())
    }
}
