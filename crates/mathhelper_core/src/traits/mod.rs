//! Numeric traits the public API is generic over.
//!
//! The interpolation family is written against [`Float`] so the same code
//! serves `f32` and `f64`. Angle conversion additionally needs [`FloatConst`]
//! for τ at the caller's precision.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use mathhelper_core::traits::Float;
///
/// fn midpoint<T: Float>(a: T, b: T) -> T {
///     (a + b) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(2.0_f64, 4.0), 3.0);
/// ```
pub use num_traits::Float;

/// Mathematical constants (π, τ, e, ...) at the implementing type's precision.
pub use num_traits::FloatConst;
