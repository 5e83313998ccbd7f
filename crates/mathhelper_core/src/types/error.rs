//! Error types for the checked helper variants.
//!
//! The unchecked functions never return errors: precondition violations panic
//! and numeric degeneracies follow IEEE-754. `MathError` is only produced by
//! the `try_*` functions for callers that want a recoverable path.

use thiserror::Error;

/// Errors from the checked clamp and inverse-interpolation helpers.
///
/// Bounds are reported as `f64` regardless of the input type so the error
/// stays non-generic.
///
/// # Variants
/// - `DegenerateRange`: Interpolation range endpoints are (nearly) equal
/// - `InvalidRange`: Clamp bounds are reversed or unordered
/// - `NonFinite`: An input that must be finite is infinite or NaN
///
/// # Examples
/// ```
/// use mathhelper_core::types::MathError;
///
/// let err = MathError::InvalidRange { min: 10.0, max: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid range: min 10 exceeds max 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// Range endpoints too close together to invert an interpolation.
    #[error("Degenerate range: endpoints {a} and {b} are within tolerance")]
    DegenerateRange {
        /// Start of the range
        a: f64,
        /// End of the range
        b: f64,
    },

    /// Lower bound exceeds upper bound, or the bounds cannot be ordered.
    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound as supplied
        min: f64,
        /// Upper bound as supplied
        max: f64,
    },

    /// Non-finite input where a finite value is required.
    #[error("Non-finite input: {0}")]
    NonFinite(String),
}
