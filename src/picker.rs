//! The update coordinator.
//!
//! A [`ColorPicker`] owns one [`CanonicalColor`] and every representation
//! derived from it: the hex string, the ARGB and HSV channels, the selector
//! position on the pick surface and the hue slider. Input arrives as an
//! [`InputEvent`] from whichever front end widget the user touched. Each
//! event is merged into the canonical color, every other representation is
//! rewritten from it and, if the selected color changed, one
//! [`ColorChanged`] notification goes out.
//!
//! Derived fields are written through the same setters a bound widget would
//! use. Two [`Suppress`] flags mark those writes as echoes so they never
//! count as new input.

use std::fmt;

use bitflags::bitflags;

use crate::color::Argb;
use crate::error::PickerResult;
use crate::hex;
use crate::math::almost_eq;
use crate::options::{DisplaySpace, PickerOptions};
use crate::spatial::{self, SurfacePoint, SurfaceSize, UnitPoint};
use crate::store::{CanonicalColor, HsvChannel, HsvPatch, RgbChannel, RgbPatch};

bitflags! {
    /// Marks writes made by the picker itself while it fans an update out.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Suppress : u8 {
        /// Set while channel values derived from an update are written back.
        const CHANNEL_ECHO = 1 << 0;
        /// Set while the hex string is written as a result of an update
        /// rather than being its source.
        const HEX_ECHO = 1 << 1;
    }
}

/// One piece of input for the picker.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Some ARGB channels changed.
    RgbPatch(RgbPatch),
    /// Some HSV components changed.
    HsvPatch(HsvPatch),
    /// Only the alpha channel changed.
    Alpha(u8),
    /// The user is typing in the hex field. Nothing is applied until commit.
    HexEdit(String),
    /// The hex field was committed (enter or focus loss). Unreadable text is
    /// reverted to the last valid hex string.
    HexCommit(String),
    /// The hex string was assigned by code. Unreadable text is an error.
    HexAssign(String),
    /// The pointer pressed or dragged on the pick surface.
    SpatialDrag {
        /// Pointer position in surface pixels.
        point: SurfacePoint,
        /// Current size of the surface.
        size: SurfaceSize,
    },
    /// The hue slider moved.
    HueSlider(f64),
    /// The pick surface was resized. Never changes the color.
    SurfaceResized(SurfaceSize),
    /// The alpha digits of the hex string were shown or hidden.
    AlphaVisibility(bool),
    /// The selected color was assigned by code.
    Select(Option<Argb>),
}

/// Everything a front end shows, derived from the canonical color.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerState {
    /// The public selected color. `None` when the selection was cleared.
    pub selected: Option<Argb>,
    /// The last committed hex string. Always readable or empty.
    pub hex: String,
    /// Text currently shown in the hex field.
    pub hex_text: String,
    /// Alpha channel.
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Value.
    pub value: f64,
    /// Selector position on the pick surface, as fractions of its size.
    pub position: UnitPoint,
    /// Hue slider position.
    pub hue_slider: f64,
    /// Whether the hex string carries the alpha digits.
    pub use_alpha: bool,
}

impl PickerState {
    fn derive(color: &CanonicalColor, selected: Option<Argb>, use_alpha: bool) -> Self {
        let argb = color.argb();
        let hsv = color.hsv();
        let hex = hex::format(selected, use_alpha);

        Self {
            selected,
            hex_text: hex.clone(),
            hex,
            alpha: argb.alpha,
            red: argb.red,
            green: argb.green,
            blue: argb.blue,
            hue: hsv.hue,
            saturation: hsv.saturation,
            value: hsv.value,
            position: spatial::sv_to_unit(hsv.saturation, hsv.value),
            hue_slider: spatial::hue_to_slider(hsv.hue),
            use_alpha,
        }
    }

    /// Value of one ARGB channel.
    pub fn rgb(&self, channel: RgbChannel) -> u8 {
        match channel {
            RgbChannel::Alpha => self.alpha,
            RgbChannel::Red => self.red,
            RgbChannel::Green => self.green,
            RgbChannel::Blue => self.blue,
        }
    }

    /// Value of one HSV component.
    pub fn hsv(&self, channel: HsvChannel) -> f64 {
        match channel {
            HsvChannel::Hue => self.hue,
            HsvChannel::Saturation => self.saturation,
            HsvChannel::Value => self.value,
        }
    }

    fn rgb_mut(&mut self, channel: RgbChannel) -> &mut u8 {
        match channel {
            RgbChannel::Alpha => &mut self.alpha,
            RgbChannel::Red => &mut self.red,
            RgbChannel::Green => &mut self.green,
            RgbChannel::Blue => &mut self.blue,
        }
    }

    fn hsv_mut(&mut self, channel: HsvChannel) -> &mut f64 {
        match channel {
            HsvChannel::Hue => &mut self.hue,
            HsvChannel::Saturation => &mut self.saturation,
            HsvChannel::Value => &mut self.value,
        }
    }
}

/// Sent once per input event that changed the selected color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorChanged {
    /// Selected color before the event.
    pub old: Option<Argb>,
    /// Selected color after the event.
    pub new: Option<Argb>,
    /// Every derived field, as of the moment the notification was sent.
    pub state: PickerState,
}

/// Receives derived values as the picker writes them, to drive widgets.
///
/// Every method has an empty default so a view only implements what it
/// shows.
pub trait PickerView {
    /// The hex field text changed.
    fn hex_text(&mut self, _text: &str) {}

    /// An ARGB channel changed.
    fn rgb_channel(&mut self, _channel: RgbChannel, _value: u8) {}

    /// An HSV component changed.
    fn hsv_channel(&mut self, _channel: HsvChannel, _value: f64) {}

    /// The selector moved. `offset` is in pixels when the surface size is
    /// known.
    fn selector(&mut self, _position: UnitPoint, _offset: Option<SurfacePoint>) {}

    /// The hue slider moved.
    fn hue_slider(&mut self, _slider: f64) {}
}

impl PickerView for () {}

type Listener = Box<dyn FnMut(&ColorChanged)>;

/// Keeps every representation of one picked color in sync.
pub struct ColorPicker<V: PickerView = ()> {
    color: CanonicalColor,
    state: PickerState,
    suppress: Suppress,
    empty_color: Argb,
    display_space: DisplaySpace,
    surface: Option<SurfaceSize>,
    view: V,
    listeners: Vec<Listener>,
}

impl ColorPicker {
    /// Create a picker with no view attached.
    pub fn new(options: PickerOptions) -> Self {
        Self::with_view(options, ())
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(PickerOptions::default())
    }
}

impl<V: PickerView> ColorPicker<V> {
    /// Create a picker that writes derived values to `view`.
    pub fn with_view(options: PickerOptions, view: V) -> Self {
        let mut color = CanonicalColor::default();
        color.replace(options.initial_color, options.empty_color);

        let mut picker = Self {
            color,
            state: PickerState::derive(&color, options.initial_color, options.use_alpha),
            suppress: Suppress::empty(),
            empty_color: options.empty_color,
            display_space: options.display_space,
            surface: options.surface,
            view,
            listeners: vec![],
        };
        picker.push_all();
        picker
    }

    /// Register a callback for [`ColorChanged`] notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(&ColorChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The canonical color.
    pub fn color(&self) -> &CanonicalColor {
        &self.color
    }

    /// All derived fields.
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// The public selected color.
    pub fn selected(&self) -> Option<Argb> {
        self.state.selected
    }

    /// The committed hex string.
    pub fn hex(&self) -> &str {
        &self.state.hex
    }

    /// The channel family a front end should display.
    pub fn display_space(&self) -> DisplaySpace {
        self.display_space
    }

    /// Last known pixel size of the pick surface.
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// Pixel position of the selector, when the surface size is known.
    pub fn selector_offset(&self) -> Option<SurfacePoint> {
        self.surface
            .map(|size| spatial::unit_to_surface(self.state.position, size))
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The attached view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Apply one input event and fan the result out to every
    /// representation.
    ///
    /// Returns the notification that was sent, if the selected color
    /// changed. Only [`InputEvent::HexAssign`] can fail; the picker is left
    /// untouched when it does.
    pub fn dispatch(&mut self, event: InputEvent) -> PickerResult<Option<ColorChanged>> {
        let old = self.state.selected;

        match event {
            InputEvent::RgbPatch(patch) => self.apply_rgb(patch),
            InputEvent::HsvPatch(patch) => self.apply_hsv(patch),
            InputEvent::Alpha(alpha) => self.apply_alpha(alpha),
            InputEvent::HexEdit(text) => self.set_hex_text(text),
            InputEvent::HexCommit(text) => self.commit_text_input(text),
            InputEvent::HexAssign(text) => self.assign_color_literal(text)?,
            InputEvent::SpatialDrag { point, size } => self.drag(point, size),
            InputEvent::HueSlider(slider) => self.move_hue_slider(slider),
            InputEvent::SurfaceResized(size) => self.resize(size),
            InputEvent::AlphaVisibility(use_alpha) => self.set_use_alpha(use_alpha),
            InputEvent::Select(color) => self.select(color),
        }

        Ok(self.notify(old))
    }

    /// Write one ARGB channel, as a widget bound to it would.
    pub fn set_rgb_channel(&mut self, channel: RgbChannel, value: u8) -> Option<ColorChanged> {
        let old = self.state.selected;
        self.write_rgb(channel, value);
        self.notify(old)
    }

    /// Write one HSV component, as a widget bound to it would.
    ///
    /// Saturation and value are not range checked; keeping them in `[0, 1]`
    /// is up to the caller.
    pub fn set_hsv_channel(&mut self, channel: HsvChannel, value: f64) -> Option<ColorChanged> {
        let old = self.state.selected;
        self.write_hsv(channel, value);
        self.notify(old)
    }

    fn apply_rgb(&mut self, patch: RgbPatch) {
        self.color.patch_rgb(patch);
        self.sync(Some(self.color.argb()), true);
    }

    fn apply_hsv(&mut self, patch: HsvPatch) {
        self.color.patch_hsv(patch);
        self.sync(Some(self.color.argb()), true);
    }

    fn apply_alpha(&mut self, alpha: u8) {
        self.color.patch_alpha(Some(alpha));
        self.sync(Some(self.color.argb()), false);
    }

    fn select(&mut self, color: Option<Argb>) {
        match color {
            Some(c) => {
                if c != self.color.argb() {
                    self.color.patch_rgb(RgbPatch::from(c));
                }
                self.sync(Some(c), true);
            }
            None => {
                self.color.replace(None, self.empty_color);
                self.sync(None, true);
            }
        }
    }

    fn drag(&mut self, point: SurfacePoint, size: SurfaceSize) {
        self.surface = Some(size);
        let (saturation, value) = spatial::position_to_sv(point, size);
        self.apply_hsv(
            HsvPatch::new()
                .with_saturation(saturation)
                .with_value(value),
        );
    }

    fn move_hue_slider(&mut self, slider: f64) {
        if self.state.selected.is_none() {
            return;
        }
        self.state.hue_slider = slider;
        self.apply_hsv(HsvPatch::new().with_hue(spatial::slider_to_hue(slider)));
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.surface = Some(size);
        let offset = self.selector_offset();
        self.view.selector(self.state.position, offset);
    }

    fn set_use_alpha(&mut self, use_alpha: bool) {
        if self.state.use_alpha == use_alpha {
            return;
        }
        self.state.use_alpha = use_alpha;

        let text = if use_alpha {
            hex::format(self.state.selected, true)
        } else {
            hex::format_width(&self.state.hex, false)
        };
        self.write_hex(text);
    }

    /// Hex text committed from the text field. Unreadable text is put back
    /// to the last valid hex string instead of failing.
    fn commit_text_input(&mut self, text: String) {
        match hex::parse(&text) {
            Ok(color) => self.apply_hex(color),
            Err(_) => {
                let last_valid = self.state.hex.clone();
                self.set_hex_text(last_valid);
            }
        }
    }

    /// Hex text assigned by code. Unreadable text is reported to the caller
    /// and leaves the picker untouched.
    fn assign_color_literal(&mut self, text: String) -> PickerResult<()> {
        let color = hex::parse(&text)?;
        self.apply_hex(color);
        Ok(())
    }

    /// A parsed hex literal becomes the selected color, unless the hex
    /// string is being written as an echo of an update.
    fn apply_hex(&mut self, color: Option<Argb>) {
        if self.suppress.contains(Suppress::HEX_ECHO) {
            return;
        }

        if color == self.state.selected {
            // Same color, only the spelling differs.
            self.write_hex(hex::format(color, self.state.use_alpha));
            return;
        }

        self.color.replace(color, self.empty_color);
        self.sync(color, true);
    }

    fn write_hex(&mut self, text: String) {
        self.suppress.insert(Suppress::HEX_ECHO);
        self.store_hex(text);
        self.suppress.remove(Suppress::HEX_ECHO);
    }

    fn store_hex(&mut self, text: String) {
        self.state.hex = text.clone();
        self.set_hex_text(text);
    }

    fn set_hex_text(&mut self, text: String) {
        if self.state.hex_text != text {
            self.view.hex_text(&text);
            self.state.hex_text = text;
        }
    }

    fn write_rgb(&mut self, channel: RgbChannel, value: u8) {
        let slot = self.state.rgb_mut(channel);
        if *slot == value {
            return;
        }
        *slot = value;
        self.view.rgb_channel(channel, value);

        if self.suppress.contains(Suppress::CHANNEL_ECHO) {
            return;
        }

        match channel {
            RgbChannel::Alpha => self.apply_alpha(value),
            _ => self.apply_rgb(RgbPatch::single(channel, value)),
        }
    }

    fn write_hsv(&mut self, channel: HsvChannel, value: f64) {
        let slot = self.state.hsv_mut(channel);
        if almost_eq(*slot, value) {
            return;
        }
        *slot = value;
        self.view.hsv_channel(channel, value);

        if self.suppress.contains(Suppress::CHANNEL_ECHO) {
            return;
        }

        self.apply_hsv(HsvPatch::single(channel, value));
    }

    /// Rewrite every derived field from the canonical color.
    fn sync(&mut self, selected: Option<Argb>, move_selector: bool) {
        self.write_hex(hex::format(selected, self.state.use_alpha));

        let argb = self.color.argb();
        let hsv = self.color.hsv();

        self.suppress.insert(Suppress::CHANNEL_ECHO);
        for (channel, value) in RgbChannel::ALL.into_iter().zip(argb.channels()) {
            self.write_rgb(channel, value);
        }
        for (channel, value) in HsvChannel::ALL.into_iter().zip(hsv.components()) {
            self.write_hsv(channel, value);
        }
        self.suppress.remove(Suppress::CHANNEL_ECHO);

        if move_selector {
            // Grays have no hue to show, so the slider stays put.
            if !argb.is_gray() {
                self.state.hue_slider = spatial::hue_to_slider(hsv.hue);
                self.view.hue_slider(self.state.hue_slider);
            }
            self.state.position = spatial::sv_to_unit(hsv.saturation, hsv.value);
            let offset = self.selector_offset();
            self.view.selector(self.state.position, offset);
        }

        self.state.selected = selected;
    }

    /// Push every field to the view, changed or not.
    fn push_all(&mut self) {
        self.view.hex_text(&self.state.hex_text);
        for channel in RgbChannel::ALL {
            self.view.rgb_channel(channel, self.state.rgb(channel));
        }
        for channel in HsvChannel::ALL {
            self.view.hsv_channel(channel, self.state.hsv(channel));
        }
        self.view.hue_slider(self.state.hue_slider);
        let offset = self.selector_offset();
        self.view.selector(self.state.position, offset);
    }

    fn notify(&mut self, old: Option<Argb>) -> Option<ColorChanged> {
        if self.state.selected == old {
            return None;
        }

        let change = ColorChanged {
            old,
            new: self.state.selected,
            state: self.state.clone(),
        };
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
        Some(change)
    }
}

impl<V: PickerView> fmt::Debug for ColorPicker<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &self.color)
            .field("state", &self.state)
            .field("suppress", &self.suppress)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
