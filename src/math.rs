//! Math utility functions.

use num_traits::Float;

/// Degrees in a full turn of the hue circle.
pub const FULL_TURN: f64 = 360.0;

/// Compare against zero with machine epsilon instead of exact equality.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Compare two values with machine epsilon instead of exact equality.
pub fn almost_eq<T: Float>(a: T, b: T) -> bool {
    almost_zero(a - b)
}

/// Wrap a hue in degrees into `[0, 360)`. 360 maps to 0.
pub fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= FULL_TURN {
        0.0
    } else {
        hue
    }
}

/// Clamp into `[0, 1]`.
pub fn clamp_unit<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}

/// Convert a `[0, 1]` channel to a byte, rounding to nearest.
pub fn unit_to_byte(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert!(normalize_hue(-1.0e-20) < FULL_TURN);
    }

    #[test]
    fn epsilon_comparisons() {
        assert!(almost_zero(0.0_f64));
        assert!(almost_zero(f64::EPSILON / 2.0));
        assert!(!almost_zero(1.0e-9_f64));
        assert!(almost_eq(0.1 + 0.2, 0.3_f64));
    }

    #[test]
    fn bytes_round_and_clamp() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(0.5), 128);
        assert_eq!(unit_to_byte(1.5), 255);
        assert_eq!(unit_to_byte(-0.5), 0);
        assert_eq!(clamp_unit(2.0_f64), 1.0);
    }
}
