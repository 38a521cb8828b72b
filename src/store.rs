//! The single authoritative color of a picker session.
//!
//! [`CanonicalColor`] holds the ARGB bytes and the HSV triple side by side
//! and keeps them describing the same color. It only changes through four
//! operations: [`CanonicalColor::replace`], [`CanonicalColor::patch_rgb`],
//! [`CanonicalColor::patch_hsv`] and [`CanonicalColor::patch_alpha`].
//!
//! RGB cannot tell which hue a gray, white or black color "had". When an RGB
//! driven update lands in that region the stored hue is kept, so raising
//! saturation again brings the previous hue back instead of jumping to red.

use crate::color::{Argb, Hsv};
use crate::math::normalize_hue;

chromasync_macros::gen_patch! {
    /// A partial update of the ARGB channels. Channels left as `None` keep
    /// their current byte.
    pub struct RgbPatch {
        /// The alpha channel.
        alpha: u8,
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

chromasync_macros::gen_patch! {
    /// A partial update of the HSV components. Components left as `None` keep
    /// their current value.
    pub struct HsvPatch {
        /// Hue in degrees. 360 is accepted and stored as 0.
        hue: f64,
        /// Saturation in `[0, 1]`.
        saturation: f64,
        /// Value in `[0, 1]`.
        value: f64,
    }
}

impl From<Argb> for RgbPatch {
    fn from(color: Argb) -> Self {
        Self {
            alpha: Some(color.alpha),
            red: Some(color.red),
            green: Some(color.green),
            blue: Some(color.blue),
        }
    }
}

impl From<Hsv> for HsvPatch {
    fn from(hsv: Hsv) -> Self {
        Self {
            hue: Some(hsv.hue),
            saturation: Some(hsv.saturation),
            value: Some(hsv.value),
        }
    }
}

/// The authoritative color: ARGB bytes plus the HSV triple they derive
/// from or derive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalColor {
    argb: Argb,
    hsv: Hsv,
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::new(Argb::WHITE)
    }
}

impl CanonicalColor {
    /// Start from an ARGB color.
    pub fn new(color: Argb) -> Self {
        Self {
            argb: color,
            hsv: color.to_hsv(),
        }
    }

    /// Start from an HSV triple with the given alpha.
    pub fn from_hsv(hsv: Hsv, alpha: u8) -> Self {
        let hsv = Hsv::new(normalize_hue(hsv.hue), hsv.saturation, hsv.value);
        Self {
            argb: hsv.to_argb(alpha),
            hsv,
        }
    }

    /// The current ARGB color.
    pub fn argb(&self) -> Argb {
        self.argb
    }

    /// The current HSV triple.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The alpha channel.
    pub fn alpha(&self) -> u8 {
        self.argb.alpha
    }

    /// The hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hsv.hue
    }

    /// The saturation, `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.hsv.saturation
    }

    /// The value, `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.hsv.value
    }

    /// Adopt `color` wholesale, or `empty` when there is none, and derive HSV
    /// from it.
    pub fn replace(&mut self, color: Option<Argb>, empty: Argb) {
        self.set_argb(color.unwrap_or(empty));
    }

    /// Change any subset of the ARGB channels and derive HSV from the result.
    pub fn patch_rgb(&mut self, patch: RgbPatch) {
        let argb = Argb::from(patch.resolve(self.argb.channels()));
        self.set_argb(argb);
    }

    /// Change any subset of the HSV components and derive RGB from the
    /// result. Alpha is kept.
    ///
    /// Components are not range checked; saturation and value outside
    /// `[0, 1]` are the caller's responsibility.
    pub fn patch_hsv(&mut self, patch: HsvPatch) {
        let [hue, saturation, value] = patch.resolve(self.hsv.components());
        self.hsv = Hsv::new(normalize_hue(hue), saturation, value);
        self.argb = self.hsv.to_argb(self.argb.alpha);
    }

    /// Change only the alpha channel. `None` does nothing.
    pub fn patch_alpha(&mut self, alpha: Option<u8>) {
        if let Some(alpha) = alpha {
            self.argb = self.argb.with_alpha(alpha);
        }
    }

    fn set_argb(&mut self, argb: Argb) {
        let derived = argb.to_hsv();
        let hue = if derived.is_achromatic() {
            self.hsv.hue
        } else {
            derived.hue
        };

        self.argb = argb;
        self.hsv = Hsv::new(hue, derived.saturation, derived.value);
    }
}
