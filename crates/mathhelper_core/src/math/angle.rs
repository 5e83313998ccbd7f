//! Degree/radian conversion.
//!
//! Both directions are plain linear scalings through a full turn
//! (`360°` = `2π`). Inputs are not validated or normalised, so `370°`
//! converts to a value past `2π` and negative angles stay negative.

use num_traits::{Float, FloatConst};

#[inline]
fn degrees_per_turn<T: Float>() -> T {
    T::from(360.0).unwrap()
}

/// Convert an angle in degrees to radians.
///
/// # Mathematical Definition
/// ```text
/// to_radians(d) = d * 2π / 360
/// ```
///
/// # Examples
/// ```
/// use mathhelper_core::math::angle::to_radians;
///
/// assert!((to_radians(10.0_f32) - 0.174533).abs() < 1e-4);
/// assert!((to_radians(370.0_f32) - 6.45772).abs() < 1e-4);
/// ```
#[inline]
pub fn to_radians<T: Float + FloatConst>(degrees: T) -> T {
    degrees * T::TAU() / degrees_per_turn::<T>()
}

/// Convert an angle in radians to degrees.
///
/// # Mathematical Definition
/// ```text
/// to_degrees(r) = r * 360 / 2π
/// ```
///
/// # Examples
/// ```
/// use mathhelper_core::math::angle::to_degrees;
///
/// assert!((to_degrees(0.174533_f32) - 10.0).abs() < 1e-4);
/// ```
#[inline]
pub fn to_degrees<T: Float + FloatConst>(radians: T) -> T {
    radians * degrees_per_turn::<T>() / T::TAU()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_radians() {
        assert_relative_eq!(to_radians(10.0_f32), 0.174533, epsilon = 1e-4);
    }

    #[test]
    fn test_to_radians_negative() {
        assert_relative_eq!(to_radians(-10.0_f32), -0.174533, epsilon = 1e-4);
    }

    #[test]
    fn test_to_radians_over_full_turn_is_not_wrapped() {
        assert_relative_eq!(to_radians(370.0_f32), 6.45772, epsilon = 1e-4);
    }

    #[test]
    fn test_to_degrees() {
        assert_relative_eq!(to_degrees(0.174533_f32), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_to_degrees_negative() {
        assert_relative_eq!(to_degrees(-0.174533_f32), -10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_to_degrees_over_full_turn_is_not_wrapped() {
        assert_relative_eq!(to_degrees(6.45772_f32), 370.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_is_fixed_point() {
        assert_eq!(to_radians(0.0_f64), 0.0);
        assert_eq!(to_degrees(0.0_f64), 0.0);
    }

    #[test]
    fn test_f64_matches_std() {
        assert_relative_eq!(to_radians(123.0_f64), 123.0_f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(to_degrees(2.5_f64), 2.5_f64.to_degrees(), epsilon = 1e-12);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_degrees_round_trip(d in -1.0e6_f64..1.0e6) {
                let back = to_degrees(to_radians(d));
                prop_assert!((back - d).abs() <= 1e-9 * d.abs().max(1.0));
            }

            #[test]
            fn test_radians_round_trip(r in -1.0e3_f64..1.0e3) {
                let back = to_radians(to_degrees(r));
                prop_assert!((back - r).abs() <= 1e-9 * r.abs().max(1.0));
            }
        }
    }
}
