use macroquad::prelude::*;

use super::Canvas;

/// [`Canvas`] that draws straight to the macroquad window.
///
/// Translations are tracked here and added to every x coordinate, so the
/// default screen-space camera stays in place.
pub struct MacroquadCanvas {
    background: Option<Texture2D>,
    offsets: Vec<f32>,
}

impl MacroquadCanvas {
    /// Canvas drawing `background` with nearest-neighbour filtering, if there is one.
    pub fn new(background: Option<Texture2D>) -> Self {
        if let Some(tex) = &background {
            tex.set_filter(FilterMode::Nearest);
        }
        Self {
            background,
            offsets: Vec::new(),
        }
    }

    fn dx(&self) -> f32 {
        self.offsets.iter().sum()
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self) {
        self.offsets.clear();
        clear_background(BLACK);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x + self.dx(), rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(rect.x + self.dx(), rect.y, rect.w, rect.h, thickness, color);
    }

    fn draw_background(&mut self, source: Rect, dest: Rect) {
        let Some(tex) = &self.background else {
            return;
        };
        draw_texture_ex(
            tex,
            dest.x + self.dx(),
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: Some(source),
                ..Default::default()
            },
        );
    }

    fn push_translation(&mut self, dx: f32) {
        self.offsets.push(dx);
    }

    fn pop_translation(&mut self) {
        self.offsets.pop();
    }
}
