//! Linear interpolation and its inverse.
//!
//! Neither direction clamps: factors outside `[0, 1]` extrapolate along the
//! same line, and reversed ranges (`min > max`) are interpolated mechanically.
//! All functions are generic over `T: num_traits::Float` for f32/f64 support.

use super::config::InterpolationConfig;
use crate::types::MathError;
use num_traits::Float;
use std::cmp::Ordering;

/// Linear interpolation between `min` and `max`.
///
/// # Mathematical Definition
/// ```text
/// lerp(min, max, t) = (max - min) * t + min
/// ```
///
/// Returns `min` at `t = 0` and `max` at `t = 1`. `t` is not clamped.
///
/// # Examples
/// ```
/// use mathhelper_core::math::lerp::lerp;
///
/// assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0_f32, 10.0, 1.5), 15.0);
/// assert_eq!(lerp(0.0_f32, 10.0, -1.5), -15.0);
/// ```
#[inline]
pub fn lerp<T: Float>(min: T, max: T, t: T) -> T {
    (max - min) * t + min
}

/// Recover the factor `t` for which `lerp(a, b, t) == value`.
///
/// # Mathematical Definition
/// ```text
/// inverse_lerp(a, b, value) = (value - a) / (b - a)
/// ```
///
/// Values outside `[a, b]` give `t` outside `[0, 1]`, and `a > b` is
/// supported. When `a == b` the division follows IEEE-754: ±infinity for
/// `value != a`, NaN for `value == a`. This is defined behaviour, not a
/// fault; use [`try_inverse_lerp`] to get an error instead.
///
/// # Examples
/// ```
/// use mathhelper_core::math::lerp::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0_f32, 7.0, 14.0), 2.0);
/// assert_eq!(inverse_lerp(7.0_f32, 0.0, 14.0), -1.0);
/// assert!(inverse_lerp(1.0_f64, 1.0, 2.0).is_infinite());
/// ```
#[inline]
pub fn inverse_lerp<T: Float>(a: T, b: T, value: T) -> T {
    (value - a) / (b - a)
}

/// Checked [`inverse_lerp`].
///
/// # Errors
/// - `MathError::NonFinite` if `a` or `b` is infinite or NaN
/// - `MathError::DegenerateRange` if `a == b`, or if `|b - a|` does not
///   exceed `config.degenerate_tolerance` (a NaN tolerance rejects every range)
///
/// # Examples
/// ```
/// use mathhelper_core::math::config::InterpolationConfig;
/// use mathhelper_core::math::lerp::try_inverse_lerp;
/// use mathhelper_core::types::MathError;
///
/// let config = InterpolationConfig::default();
/// assert_eq!(try_inverse_lerp(0.0_f64, 10.0, 5.0, &config), Ok(0.5));
/// assert_eq!(
///     try_inverse_lerp(2.0_f64, 2.0, 5.0, &config),
///     Err(MathError::DegenerateRange { a: 2.0, b: 2.0 })
/// );
/// ```
pub fn try_inverse_lerp<T: Float>(
    a: T,
    b: T,
    value: T,
    config: &InterpolationConfig<T>,
) -> Result<T, MathError> {
    let a_f64 = a.to_f64().unwrap_or(f64::NAN);
    let b_f64 = b.to_f64().unwrap_or(f64::NAN);

    if !a.is_finite() || !b.is_finite() {
        tracing::debug!(a = a_f64, b = b_f64, "rejecting inverse lerp over non-finite range");
        return Err(MathError::NonFinite(format!(
            "range endpoints a = {}, b = {}",
            a_f64, b_f64
        )));
    }

    // Equal endpoints are degenerate whatever the tolerance holds
    let spread = (b - a).abs();
    let within_tolerance = !matches!(
        spread.partial_cmp(&config.degenerate_tolerance),
        Some(Ordering::Greater)
    );
    if spread == T::zero() || within_tolerance {
        tracing::debug!(a = a_f64, b = b_f64, "rejecting inverse lerp over degenerate range");
        return Err(MathError::DegenerateRange { a: a_f64, b: b_f64 });
    }

    Ok(inverse_lerp(a, b, value))
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// # Mathematical Definition
/// ```text
/// remap(v, in_min, in_max, out_min, out_max)
///     = lerp(out_min, out_max, inverse_lerp(in_min, in_max, v))
/// ```
///
/// Unclamped on both sides; a degenerate input range propagates NaN or
/// infinity exactly as [`inverse_lerp`] does.
///
/// # Examples
/// ```
/// use mathhelper_core::math::lerp::remap;
///
/// assert_eq!(remap(0.5_f64, 0.0, 1.0, 0.0, 100.0), 50.0);
/// assert_eq!(remap(50.0_f64, 0.0, 100.0, 1.0, 0.0), 0.5);
/// ```
#[inline]
pub fn remap<T: Float>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}
