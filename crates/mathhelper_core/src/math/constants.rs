//! Single-precision mathematical constants.
//!
//! `LOG10_E` and `LOG2_E` are fixed literals rather than the correctly
//! rounded `std` values; existing data was produced with these exact numbers.

/// The mathematical constant e (2.71828175).
pub const E: f32 = std::f32::consts::E;

/// Log base ten of e (0.4342945).
pub const LOG10_E: f32 = 0.4342945;

/// Log base two of e (1.442695).
pub const LOG2_E: f32 = 1.442695;

/// π (3.14159274).
pub const PI: f32 = std::f32::consts::PI;

/// π / 2 (1.57079637).
pub const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;

/// π / 4 (0.7853982).
pub const PI_OVER_4: f32 = std::f32::consts::FRAC_PI_4;

/// 2π (6.28318548).
pub const TWO_PI: f32 = std::f32::consts::TAU;
