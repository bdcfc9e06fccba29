//! View culling for debug geometry.

use crate::camera::ViewSpan;
use macroquad::math::Rect;

/// Extra world pixels kept on each side of the view.
const CULL_MARGIN: f32 = 64.0;

/// Rectangles that intersect the visible span (padded by [`CULL_MARGIN`]),
/// in their original order.
pub fn visible_rects(rects: &[Rect], span: ViewSpan) -> impl Iterator<Item = &Rect> {
    let min = span.min_x - CULL_MARGIN;
    let max = span.max_x + CULL_MARGIN;
    rects.iter().filter(move |r| r.x < max && r.x + r.w > min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_overlapping_rects_in_stable_order() {
        let rects = [
            Rect::new(900.0, 0.0, 32.0, 32.0),   // inside
            Rect::new(0.0, 0.0, 100.0, 32.0),    // left of margin
            Rect::new(300.0, 0.0, 2000.0, 32.0), // spans the view
            Rect::new(1550.0, 0.0, 32.0, 32.0),  // inside the right margin
            Rect::new(1700.0, 0.0, 32.0, 32.0),  // beyond it
        ];
        let span = ViewSpan::new(700.0, 800.0);

        let kept: Vec<f32> = visible_rects(&rects, span).map(|r| r.x).collect();
        assert_eq!(kept, vec![900.0, 300.0, 1550.0]);
    }
}
