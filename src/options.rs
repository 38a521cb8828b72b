//! Construction options for a [`crate::ColorPicker`].

use crate::color::Argb;
use crate::spatial::SurfaceSize;

/// Which channel family a front end should put in front of the user.
///
/// The picker keeps both families in sync regardless; this is only carried
/// so a front end can read it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplaySpace {
    /// Red, green and blue channels.
    #[default]
    Rgb,
    /// Hue, saturation and value components.
    Hsv,
}

/// Options used when creating a picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerOptions {
    /// Color the session starts with. `None` starts with no selection.
    pub initial_color: Option<Argb>,
    /// Whether the hex text shows the alpha channel.
    pub use_alpha: bool,
    /// Value the canonical color falls back to when the selection is
    /// cleared.
    pub empty_color: Argb,
    /// Which channel family to display.
    pub display_space: DisplaySpace,
    /// Pixel size of the pick surface, when already known.
    pub surface: Option<SurfaceSize>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            initial_color: Some(Argb::WHITE),
            use_alpha: true,
            empty_color: Argb::EMPTY,
            display_space: DisplaySpace::default(),
            surface: None,
        }
    }
}

impl PickerOptions {
    /// Start with `color` selected.
    pub fn with_initial_color(mut self, color: Option<Argb>) -> Self {
        self.initial_color = color;
        self
    }

    /// Show or hide the alpha digits of the hex text.
    pub fn with_alpha(mut self, use_alpha: bool) -> Self {
        self.use_alpha = use_alpha;
        self
    }

    /// Override the color adopted when the selection is cleared.
    pub fn with_empty_color(mut self, color: Argb) -> Self {
        self.empty_color = color;
        self
    }

    /// Choose the displayed channel family.
    pub fn with_display_space(mut self, space: DisplaySpace) -> Self {
        self.display_space = space;
        self
    }

    /// Set the pixel size of the pick surface.
    pub fn with_surface(mut self, size: SurfaceSize) -> Self {
        self.surface = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = PickerOptions::default();
        assert_eq!(options.initial_color, Some(Argb::WHITE));
        assert!(options.use_alpha);
        assert_eq!(options.empty_color, Argb::new(0, 0, 0, 255));
        assert_eq!(options.display_space, DisplaySpace::Rgb);
        assert_eq!(options.surface, None);
    }

    #[test]
    fn builder() {
        let options = PickerOptions::default()
            .with_initial_color(None)
            .with_alpha(false)
            .with_empty_color(Argb::new(0, 0, 0, 0))
            .with_display_space(DisplaySpace::Hsv)
            .with_surface(SurfaceSize::new(10.0, 20.0));

        assert_eq!(options.initial_color, None);
        assert!(!options.use_alpha);
        assert_eq!(options.empty_color, Argb::default());
        assert_eq!(options.display_space, DisplaySpace::Hsv);
        assert_eq!(options.surface, Some(SurfaceSize::new(10.0, 20.0)));
    }
}
