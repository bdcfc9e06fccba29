//! Horizontal scrolling.

/// The character sits at `viewport_width / LEAD_DIVISOR` from the left edge.
pub const LEAD_DIVISOR: f32 = 3.0;

/// Scroll offset that keeps the character a third of the way across the view.
///
/// Clamped so the view never starts left of the world and never runs past the
/// right edge of the scaled background. When the background is narrower than
/// the viewport the offset stays at 0.
pub fn camera_x(body_x: f32, viewport_width: f32, scaled_world_width: f32) -> f32 {
    let desired = body_x - viewport_width / LEAD_DIVISOR;
    desired.min(scaled_world_width - viewport_width).max(0.0)
}

/// Horizontal world span visible through the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpan {
    /// Left edge, equal to the camera x.
    pub min_x: f32,
    /// Right edge.
    pub max_x: f32,
}

impl ViewSpan {
    /// Span starting at `camera_x`, one viewport wide.
    pub fn new(camera_x: f32, viewport_width: f32) -> Self {
        Self {
            min_x: camera_x,
            max_x: camera_x + viewport_width,
        }
    }
}
