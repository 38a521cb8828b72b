//! Conversions between 8-bit RGB channels and the HSV notation.
//!
//! All intermediate math is done in `f64` with channels normalized to
//! `[0, 1]`. Floating point equality is never tested exactly; see
//! [`crate::math::almost_zero`].
//!
//! NOTE: For achromatic colors (no saturation or no value) the conversion
//!       yields a hue of 0. Retaining a meaningful hue in that region is the
//!       job of [`crate::CanonicalColor`], not of these functions.
//!
//! ```rust
//! use chromasync::{Argb, Hsv};
//! let green = Hsv::new(120.0, 1.0, 1.0).to_argb(0xFF);
//! assert_eq!(green, Argb::opaque(0, 255, 0));
//! ```

use crate::color::{Argb, Hsv};

/// Hue step between two stops of [`hsv_spectrum`].
const SPECTRUM_STEP: f64 = 12.0;

/// Number of distinct hues in [`hsv_spectrum`], before the closing stop.
const SPECTRUM_HUES: usize = 29;

/// Convert 8-bit RGB channels to HSV.
///
/// The result always has hue in `[0, 360)` and saturation and value in
/// `[0, 1]`.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    util::rgb_to_hsv(
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

/// Convert HSV to 8-bit channels with the given alpha.
///
/// A hue of 360 is the same as 0. Saturation and value are expected in
/// `[0, 1]`; out-of-range values are not rejected but the resulting bytes are
/// clamped.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64, alpha: u8) -> Argb {
    let [red, green, blue] = util::hsv_to_rgb(hue, saturation, value);
    Argb::new(
        alpha,
        crate::math::unit_to_byte(red),
        crate::math::unit_to_byte(green),
        crate::math::unit_to_byte(blue),
    )
}

/// Colors for painting a hue slider: fully saturated, full value, hues
/// 0 through 336 in 12 degree steps, closed with hue 0 again.
pub fn hsv_spectrum() -> Vec<Argb> {
    (0..SPECTRUM_HUES)
        .map(|i| hsv_to_rgb(i as f64 * SPECTRUM_STEP, 1.0, 1.0, 0xFF))
        .chain(std::iter::once(hsv_to_rgb(0.0, 1.0, 1.0, 0xFF)))
        .collect()
}

impl Argb {
    /// Convert the RGB channels of this color to HSV. Alpha is ignored.
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.red, self.green, self.blue)
    }
}

impl Hsv {
    /// Convert to 8-bit channels, attaching `alpha`.
    pub fn to_argb(&self, alpha: u8) -> Argb {
        hsv_to_rgb(self.hue, self.saturation, self.value, alpha)
    }
}

mod util {
    use crate::{
        color::Hsv,
        math::{almost_eq, almost_zero, normalize_hue},
    };

    /// Convert from normalized RGB to HSV.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB>
    pub fn rgb_to_hsv(red: f64, green: f64, blue: f64) -> Hsv {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if almost_zero(max) || almost_zero(delta) {
            return Hsv::new(0.0, 0.0, max);
        }

        let saturation = if almost_zero(min) { 1.0 } else { delta / max };

        let sector = if almost_eq(red, max) {
            (green - blue) / delta
        } else if almost_eq(green, max) {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        Hsv::new(normalize_hue(sector * 60.0), saturation, max)
    }

    /// Convert from HSV to normalized RGB.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB>
    pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
        if almost_zero(saturation) {
            return [value, value, value];
        }

        // The hue circle has six sectors of 60 degrees each.
        let position = normalize_hue(hue) / 60.0;
        let sector = position.floor();
        let fraction = position - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        match sector as u8 {
            0 => [value, t, p],
            1 => [q, value, p],
            2 => [p, value, t],
            3 => [p, q, value],
            4 => [t, p, value],
            _ => [value, p, q],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, f64, f64, f64)] = &[
            (255,   0,   0,   0.0, 1.0, 1.0),
            (  0, 255,   0, 120.0, 1.0, 1.0),
            (  0,   0, 255, 240.0, 1.0, 1.0),
            (255, 255,   0,  60.0, 1.0, 1.0),
            (  0, 255, 255, 180.0, 1.0, 1.0),
            (255,   0, 255, 300.0, 1.0, 1.0),
            (210, 105,  30,  25.0, 0.857143, 0.823529),
            (128,   0,   0,   0.0, 1.0, 0.501961),
            (255, 128, 128,   0.0, 0.498039, 1.0),
        ];

        for &(red, green, blue, hue, saturation, value) in TESTS {
            let hsv = rgb_to_hsv(red, green, blue);
            assert_component_eq!(hsv.hue, hue);
            assert_component_eq!(hsv.saturation, saturation);
            assert_component_eq!(hsv.value, value);

            let back = hsv_to_rgb(hue, saturation, value, 0xFF);
            assert_eq!(back, Argb::opaque(red, green, blue));
        }
    }

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        for gray in [0_u8, 1, 127, 128, 254, 255] {
            let hsv = rgb_to_hsv(gray, gray, gray);
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
            assert_component_eq!(hsv.value, gray as f64 / 255.0);
        }
    }

    #[test]
    fn round_trip_is_within_one_step() {
        for red in 0..=255_u8 {
            for green in 0..=255_u8 {
                for blue in (0..=255_u8).step_by(17) {
                    let back = rgb_to_hsv(red, green, blue).to_argb(0xFF);
                    assert!(back.red.abs_diff(red) <= 1, "{red} {green} {blue}");
                    assert!(back.green.abs_diff(green) <= 1, "{red} {green} {blue}");
                    assert!(back.blue.abs_diff(blue) <= 1, "{red} {green} {blue}");
                }
            }
        }
    }

    #[test]
    fn hue_360_wraps_to_0() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0, 0xFF), hsv_to_rgb(360.0, 1.0, 1.0, 0xFF));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0, 0xFF), Argb::opaque(255, 0, 0));
    }

    #[test]
    fn hue_stays_below_360() {
        // Just under pure red on the magenta side.
        let hsv = rgb_to_hsv(255, 0, 1);
        assert!(hsv.hue < 360.0);
        assert!(hsv.hue > 359.0);
    }

    #[test]
    fn alpha_is_passed_through() {
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0, 0x40), Argb::new(0x40, 0, 0, 255));
        assert_eq!(hsv_to_rgb(123.0, 0.0, 0.5, 0x11), Argb::new(0x11, 128, 128, 128));
    }

    #[test]
    fn spectrum_starts_and_ends_on_red() {
        let spectrum = hsv_spectrum();
        assert_eq!(spectrum.len(), 30);
        assert_eq!(spectrum[0], Argb::opaque(255, 0, 0));
        assert_eq!(spectrum[10], Argb::opaque(0, 255, 0));
        assert_eq!(spectrum[20], Argb::opaque(0, 0, 255));
        assert_eq!(spectrum[29], spectrum[0]);
        assert!(spectrum.iter().all(|c| c.alpha == 0xFF));
    }
}
