//! The color values passed in and out of the picker: an 8-bit [`Argb`]
//! quadruple (alpha first) and the [`Hsv`] triple derived from it.

use std::fmt;

/// A color with 8 bits per channel, stored alpha first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb {
    /// The alpha (opacity) channel.
    pub alpha: u8,
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Argb {
    /// Opaque white, the color a fresh picker starts with.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0xFF, 0x00, 0x00, 0x00);

    /// The value adopted when a picker is asked to hold "no color". Kept as
    /// transparent blue for compatibility with existing pickers; see
    /// [`crate::PickerOptions::with_empty_color`] to change it.
    pub const EMPTY: Self = Self::new(0x00, 0x00, 0x00, 0xFF);

    /// Create a color from its four channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Create a fully opaque color.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(0xFF, red, green, blue)
    }

    /// Unpack a `0xAARRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        let [alpha, red, green, blue] = value.to_be_bytes();
        Self::new(alpha, red, green, blue)
    }

    /// Pack into a `0xAARRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }

    /// Same color with a different alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// The four channels in `[alpha, red, green, blue]` order.
    pub const fn channels(self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }

    /// True when red, green and blue are equal, i.e. the color has no hue.
    pub const fn is_gray(self) -> bool {
        self.red == self.green && self.red == self.blue
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.to_u32()
    }
}

impl From<[u8; 4]> for Argb {
    fn from([alpha, red, green, blue]: [u8; 4]) -> Self {
        Self::new(alpha, red, green, blue)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

/// A color in the HSV (hue, saturation, value) notation.
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// The hue component, in degrees.
    pub hue: f64,
    /// The saturation component.
    pub saturation: f64,
    /// The value (brightness) component.
    pub value: f64,
}

impl Hsv {
    /// Create a new HSV triple.
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// The three components in `[hue, saturation, value]` order.
    pub const fn components(self) -> [f64; 3] {
        [self.hue, self.saturation, self.value]
    }

    /// True when hue carries no visual meaning (no saturation or no value).
    pub fn is_achromatic(self) -> bool {
        crate::math::almost_zero(self.saturation) || crate::math::almost_zero(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_alpha_first() {
        let c = Argb::new(0x80, 0x10, 0x20, 0x30);
        assert_eq!(c.to_u32(), 0x8010_2030);
        assert_eq!(Argb::from_u32(0x8010_2030), c);
        assert_eq!(Argb::from(0xFF00_FF00), Argb::opaque(0x00, 0xFF, 0x00));
        assert_eq!(u32::from(Argb::WHITE), 0xFFFF_FFFF);
    }

    #[test]
    fn display_is_hash_prefixed_argb() {
        assert_eq!(Argb::new(0x80, 0x10, 0x20, 0x30).to_string(), "#80102030");
    }

    #[test]
    fn gray_detection() {
        assert!(Argb::WHITE.is_gray());
        assert!(Argb::opaque(0x7F, 0x7F, 0x7F).is_gray());
        assert!(!Argb::opaque(0x7F, 0x7F, 0x80).is_gray());
    }

    #[test]
    fn achromatic_hsv() {
        assert!(Hsv::new(200.0, 0.0, 0.5).is_achromatic());
        assert!(Hsv::new(200.0, 0.5, 0.0).is_achromatic());
        assert!(!Hsv::new(200.0, 0.5, 0.5).is_achromatic());
    }
}
