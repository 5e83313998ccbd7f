//! # mathhelper_core: Interpolation and Clamping Helpers
//!
//! Small, stateless math utilities for simulation, graphics and animation code:
//! - Named single-precision constants (`math::constants`)
//! - Degree/radian conversion (`math::angle`)
//! - Range clamping for integers and floats (`math::clamp`)
//! - Linear interpolation and its inverse (`math::lerp`)
//! - Generic bilinear and trilinear interpolation (`math::multilinear`)
//! - Tolerance settings for the checked variants (`math::config`)
//! - Error type: `MathError` (`types::error`)
//!
//! ## Generic Composition
//!
//! [`math::multilinear::bilerp`] and [`math::multilinear::trilerp`] never do
//! arithmetic on the interpolated value. Every combination goes through the
//! caller-supplied lerp function, so colours, vectors or any other value type
//! with a 1-D lerp can be interpolated across a grid cell.
//!
//! ## Usage Examples
//!
//! ```rust
//! use mathhelper_core::math::angle::to_radians;
//! use mathhelper_core::math::clamp::clamp;
//! use mathhelper_core::math::lerp::{inverse_lerp, lerp};
//! use mathhelper_core::math::multilinear::bilerp;
//!
//! let r = to_radians(10.0_f32);
//! assert!((r - 0.174533).abs() < 1e-4);
//!
//! assert_eq!(clamp(15, 0, 10), 10);
//! assert_eq!(lerp(0.0_f64, 10.0, 1.5), 15.0);
//! assert_eq!(inverse_lerp(7.0_f64, 0.0, 14.0), -1.0);
//!
//! let v = bilerp(lerp::<f32>, 0.5, 0.5, 1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v, 2.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `MathError` and `InterpolationConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
