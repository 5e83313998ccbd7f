//! Integration tests for module exports.
//!
//! Verify that all public modules and functions are reachable via absolute
//! paths.

/// Test that constants are accessible via absolute path.
#[test]
fn test_constants_module_exports() {
    use mathhelper_core::math::constants::{E, LOG10_E, LOG2_E, PI, PI_OVER_2, PI_OVER_4, TWO_PI};

    let all = [E, LOG10_E, LOG2_E, PI, PI_OVER_2, PI_OVER_4, TWO_PI];
    assert!(all.iter().all(|c| c.is_finite() && *c > 0.0));
}

/// Test that angle conversion is accessible via absolute path.
#[test]
fn test_angle_module_exports() {
    use mathhelper_core::math::angle::{to_degrees, to_radians};

    let _ = to_radians(90.0_f32);
    let _ = to_degrees(1.0_f64);
}

/// Test that clamp helpers are accessible via absolute path.
#[test]
fn test_clamp_module_exports() {
    use mathhelper_core::math::clamp::{clamp, saturate, try_clamp};

    assert_eq!(clamp(-5, 0, 10), 0);
    assert_eq!(saturate(2.0_f32), 1.0);
    assert!(try_clamp(0_u8, 1, 0).is_err());
}

/// Test that lerp helpers are accessible via absolute path.
#[test]
fn test_lerp_module_exports() {
    use mathhelper_core::math::config::InterpolationConfig;
    use mathhelper_core::math::lerp::{inverse_lerp, lerp, remap, try_inverse_lerp};

    let _ = lerp(0.0_f64, 1.0, 0.5);
    let _ = inverse_lerp(0.0_f64, 1.0, 0.5);
    let _ = remap(0.5_f64, 0.0, 1.0, 0.0, 2.0);
    let _ = try_inverse_lerp(0.0_f64, 1.0, 0.5, &InterpolationConfig::default());
}

/// Test that multilinear interpolation is accessible via absolute path.
#[test]
fn test_multilinear_module_exports() {
    use mathhelper_core::math::lerp::lerp;
    use mathhelper_core::math::multilinear::{bilerp, trilerp};

    let _ = bilerp(lerp::<f32>, 0.5, 0.5, 1.0, 2.0, 3.0, 4.0);
    let _ = trilerp(lerp::<f32>, 0.5, 0.5, 0.5, 1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0);
}

/// Test that types and traits are accessible via absolute path.
#[test]
fn test_types_and_traits_exports() {
    use mathhelper_core::traits::{Float, FloatConst};
    use mathhelper_core::types::error::MathError;
    use mathhelper_core::types::MathError as ReExported;

    fn half_turn<T: Float + FloatConst>() -> T {
        T::PI()
    }
    assert_eq!(half_turn::<f64>(), std::f64::consts::PI);

    let err: ReExported = MathError::NonFinite("x".to_string());
    let _: &dyn std::error::Error = &err;
}
