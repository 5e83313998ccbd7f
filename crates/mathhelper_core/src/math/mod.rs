//! Mathematical utilities.
//!
//! This module provides:
//! - `constants`: Single-precision e, log and π constants
//! - `angle`: Degree/radian conversion
//! - `clamp`: Range clamping for integer and float scalars
//! - `lerp`: Linear interpolation, inverse interpolation and remapping
//! - `multilinear`: Generic bilinear and trilinear interpolation
//! - `config`: Tolerance settings for the checked variants

pub mod angle;
pub mod clamp;
pub mod config;
pub mod constants;
pub mod lerp;
pub mod multilinear;
