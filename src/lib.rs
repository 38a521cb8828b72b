//! chromasync keeps every representation of a picked color in sync: ARGB
//! bytes, HSV components, a hex literal, a position on a saturation/value
//! surface and a hue slider.
//!
//! ```rust
//! use chromasync::{Argb, ColorPicker, HsvPatch, InputEvent};
//!
//! let mut picker = ColorPicker::default();
//! picker
//!     .dispatch(InputEvent::HsvPatch(HsvPatch::new().with_hue(120.0).with_saturation(1.0)))
//!     .unwrap();
//!
//! assert_eq!(picker.selected(), Some(Argb::opaque(0, 255, 0)));
//! assert_eq!(picker.hex(), "FF00FF00");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
pub mod hex;
mod math;
mod named;
mod options;
mod picker;
pub mod spatial;
mod store;

#[cfg(test)]
mod test;

pub use color::{Argb, Hsv};
pub use convert::{hsv_spectrum, hsv_to_rgb, rgb_to_hsv};
pub use error::{PickerError, PickerResult};
pub use named::display_name;
pub use options::{DisplaySpace, PickerOptions};
pub use picker::{ColorChanged, ColorPicker, InputEvent, PickerState, PickerView, Suppress};
pub use store::{CanonicalColor, HsvChannel, HsvPatch, RgbChannel, RgbPatch};
