//! Shared types.
//!
//! This module provides:
//! - `error`: Structured error type for the checked clamp and inverse-lerp variants
//!
//! # Re-exports
//!
//! - [`MathError`] from `error`

pub mod error;

pub use error::MathError;
