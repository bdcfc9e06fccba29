//! Rectangles in the two coordinate spaces the game deals with.
//!
//! Level files describe geometry in native tile-pixel units ([`NativeRect`]).
//! Everything that moves, collides or gets drawn lives in world space: native
//! units multiplied by the render scale and pushed down by the sky band. World
//! rectangles are plain macroquad [`Rect`]s. [`native_to_world`] is the only
//! place the conversion happens.

use macroquad::math::Rect;

/// Height given to rectangles exported with zero height, in native units.
pub const DEFAULT_NATIVE_HEIGHT: f32 = 16.0;

/// Axis-aligned rectangle in native tile-pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NativeRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height; zero means "use the default".
    pub height: f32,
}

impl NativeRect {
    /// Rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Convert a native rectangle into world space.
///
/// Zero-height rectangles are treated as [`DEFAULT_NATIVE_HEIGHT`] tall before
/// scaling.
pub fn native_to_world(rect: NativeRect, scale: f32, sky_offset: f32) -> Rect {
    let height = if rect.height == 0.0 {
        DEFAULT_NATIVE_HEIGHT
    } else {
        rect.height
    };
    Rect::new(
        rect.x * scale,
        rect.y * scale + sky_offset,
        rect.width * scale,
        height * scale,
    )
}

/// Strict horizontal overlap between two world rectangles.
///
/// Touching edges do not overlap.
#[inline]
pub fn overlaps_x(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x
}
