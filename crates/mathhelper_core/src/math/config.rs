//! Tolerance settings for the checked interpolation helpers.

use num_traits::Float;

/// Configuration for [`try_inverse_lerp`](crate::math::lerp::try_inverse_lerp).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f32`, `f64`)
///
/// # Example
///
/// ```
/// use mathhelper_core::math::config::InterpolationConfig;
///
/// let config: InterpolationConfig<f64> = InterpolationConfig::default();
/// assert!(config.degenerate_tolerance < 1e-8);
///
/// let custom = InterpolationConfig {
///     degenerate_tolerance: 1e-3,
/// };
/// assert_eq!(custom.degenerate_tolerance, 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolationConfig<T: Float> {
    /// Largest `|b - a|` that is still treated as a degenerate range.
    ///
    /// Zero rejects only exactly equal endpoints.
    pub degenerate_tolerance: T,
}

impl<T: Float> Default for InterpolationConfig<T> {
    /// Default values:
    /// - `degenerate_tolerance`: 1e-10
    fn default() -> Self {
        Self {
            degenerate_tolerance: T::from(1e-10).unwrap(),
        }
    }
}

impl<T: Float> InterpolationConfig<T> {
    /// Create a configuration with the given tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `degenerate_tolerance` is negative or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use mathhelper_core::math::config::InterpolationConfig;
    ///
    /// let config = InterpolationConfig::new(1e-6_f32);
    /// assert_eq!(config.degenerate_tolerance, 1e-6);
    /// ```
    pub fn new(degenerate_tolerance: T) -> Self {
        assert!(
            degenerate_tolerance >= T::zero(),
            "degenerate_tolerance must be non-negative"
        );
        Self {
            degenerate_tolerance,
        }
    }

    /// Reject only ranges whose endpoints are exactly equal.
    pub fn exact() -> Self {
        Self {
            degenerate_tolerance: T::zero(),
        }
    }

    /// Relaxed tolerance (1e-6), suited to `f32` data.
    pub fn relaxed() -> Self {
        Self {
            degenerate_tolerance: T::from(1e-6).unwrap(),
        }
    }
}
