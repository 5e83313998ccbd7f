//! Range clamping for integer and floating-point values.
//!
//! One generic implementation serves every ordered scalar, so integers and
//! floats share the same branch structure. Value and bounds have the same
//! type; there is no implicit conversion between numeric kinds.

use crate::types::MathError;
use num_traits::{Float, ToPrimitive};

/// Clamp `value` into `[min, max]`.
///
/// Returns `min` when `value < min`, `max` when `value > max`, and `value`
/// unchanged otherwise. A NaN `value` compares false both ways and is
/// returned as is.
///
/// # Panics
/// Panics if `max < min`, or if the bounds cannot be ordered (NaN).
///
/// # Examples
/// ```
/// use mathhelper_core::math::clamp::clamp;
///
/// assert_eq!(clamp(-5, 0, 10), 0);
/// assert_eq!(clamp(15.0_f32, 0.0, 10.0), 10.0);
/// assert_eq!(clamp(5_i64, 0, 10), 5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    assert!(max >= min, "max must be greater than or equal to min");

    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp `value` into `[min, max]`, reporting bad bounds as an error.
///
/// Same result as [`clamp`] when `max >= min`.
///
/// # Errors
/// `MathError::InvalidRange` if `max < min` or the bounds are unordered.
///
/// # Examples
/// ```
/// use mathhelper_core::math::clamp::try_clamp;
/// use mathhelper_core::types::MathError;
///
/// assert_eq!(try_clamp(15, 0, 10), Ok(10));
/// assert_eq!(
///     try_clamp(5, 10, 0),
///     Err(MathError::InvalidRange { min: 10.0, max: 0.0 })
/// );
/// ```
pub fn try_clamp<T: PartialOrd + ToPrimitive>(value: T, min: T, max: T) -> Result<T, MathError> {
    if max >= min {
        return Ok(clamp(value, min, max));
    }

    let min = min.to_f64().unwrap_or(f64::NAN);
    let max = max.to_f64().unwrap_or(f64::NAN);
    tracing::debug!(min, max, "rejecting clamp with invalid range");
    Err(MathError::InvalidRange { min, max })
}

/// Clamp a float into `[0, 1]`.
///
/// # Examples
/// ```
/// use mathhelper_core::math::clamp::saturate;
///
/// assert_eq!(saturate(1.5_f64), 1.0);
/// assert_eq!(saturate(-0.5_f32), 0.0);
/// ```
#[inline]
pub fn saturate<T: Float>(value: T) -> T {
    clamp(value, T::zero(), T::one())
}
