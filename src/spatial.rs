//! Mapping between the saturation/value plane, the pixels of the pick
//! surface that shows it, and the hue slider.
//!
//! Saturation grows to the right and value grows upwards, so the top-left
//! corner of the surface is white (`s = 0, v = 1`) and the whole bottom edge
//! is black. The hue slider runs opposite to hue: `slider = 360 - hue`.

use euclid::{Point2D, Size2D};

use crate::math::{normalize_hue, FULL_TURN};

/// Pixel coordinates on the pick surface, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpace;

/// The pick surface scaled to the unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitSpace;

/// A pointer position on the pick surface.
pub type SurfacePoint = Point2D<f64, SurfaceSpace>;

/// Pixel dimensions of the pick surface.
pub type SurfaceSize = Size2D<f64, SurfaceSpace>;

/// A position on the pick surface as fractions of its width and height.
pub type UnitPoint = Point2D<f64, UnitSpace>;

/// Saturation and value under `point`. The point is clamped to the surface
/// first, so dragging outside of it pins to the nearest edge.
pub fn position_to_sv(point: SurfacePoint, size: SurfaceSize) -> (f64, f64) {
    let unit = surface_to_unit(point, size);
    unit_to_sv(unit)
}

/// Pixel position showing `saturation` and `value`.
pub fn sv_to_position(saturation: f64, value: f64, size: SurfaceSize) -> SurfacePoint {
    unit_to_surface(sv_to_unit(saturation, value), size)
}

/// Unit square position showing `saturation` and `value`.
pub fn sv_to_unit(saturation: f64, value: f64) -> UnitPoint {
    UnitPoint::new(saturation, 1.0 - value)
}

/// Saturation and value shown at a unit square position.
pub fn unit_to_sv(unit: UnitPoint) -> (f64, f64) {
    (unit.x, 1.0 - unit.y)
}

/// Clamp a pixel position to the surface and scale it to the unit square.
///
/// An empty dimension maps to 0 instead of dividing by zero.
pub fn surface_to_unit(point: SurfacePoint, size: SurfaceSize) -> UnitPoint {
    let size = size.max(SurfaceSize::zero());
    let point = point.clamp(SurfacePoint::origin(), size.to_vector().to_point());
    UnitPoint::new(ratio(point.x, size.width), ratio(point.y, size.height))
}

/// Scale a unit square position back up to pixels.
pub fn unit_to_surface(unit: UnitPoint, size: SurfaceSize) -> SurfacePoint {
    SurfacePoint::new(unit.x * size.width, unit.y * size.height)
}

/// Position of the hue slider for a hue.
pub fn hue_to_slider(hue: f64) -> f64 {
    FULL_TURN - normalize_hue(hue)
}

/// Hue selected by a hue slider position.
pub fn slider_to_hue(slider: f64) -> f64 {
    normalize_hue(FULL_TURN - slider)
}

fn ratio(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset / extent
    } else {
        0.0
    }
}
