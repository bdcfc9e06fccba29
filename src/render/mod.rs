//! Drawing one frame: background, character, debug collision boxes.

pub mod cull;
mod macroquad_canvas;

pub use macroquad_canvas::MacroquadCanvas;

use macroquad::color::Color;
use macroquad::math::Rect;

use crate::background::{overworld_slice, sky_band, Background};
use crate::body::CharacterBody;
use crate::camera::ViewSpan;
use crate::config::GameConfig;
use crate::level::{Category, LevelGeometry};
use cull::visible_rects;

/// Outline width of debug boxes, in pixels.
pub const DEBUG_LINE_THICKNESS: f32 = 3.0;

/// Drawing surface. Coordinates are screen space until a translation is pushed.
pub trait Canvas {
    /// Wipe the previous frame.
    fn clear(&mut self);
    /// Solid rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Rectangle outline `thickness` pixels wide.
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    /// Draw part of the background image into `dest`.
    fn draw_background(&mut self, source: Rect, dest: Rect);
    /// Shift everything drawn afterwards by `dx`. Translations nest.
    fn push_translation(&mut self, dx: f32);
    /// Undo the last [`Canvas::push_translation`].
    fn pop_translation(&mut self);
}

/// Outline colour for a category's debug boxes.
pub fn debug_color(category: Category) -> Color {
    match category {
        Category::Ground => Color::new(1.0, 0.0, 0.0, 1.0),
        Category::Platform => Color::new(0.0, 0.0, 1.0, 1.0),
        Category::Mystery => Color::from_rgba(128, 0, 128, 255),
    }
}

/// Fill colour of the character box.
pub fn player_color() -> Color {
    Color::new(1.0, 0.0, 0.0, 1.0)
}

/// Everything needed to draw one frame.
pub struct Frame<'a> {
    /// World x of the left screen edge.
    pub camera_x: f32,
    /// The character.
    pub body: &'a CharacterBody,
    /// Geometry for debug boxes; `None` until a level loads.
    pub level: Option<&'a LevelGeometry>,
    /// Background state.
    pub background: &'a Background,
    /// Session config.
    pub config: &'a GameConfig,
}

/// Draw `frame`: background first, then the character and debug boxes in
/// world space.
pub fn render_frame(canvas: &mut impl Canvas, frame: &Frame<'_>) {
    let cfg = frame.config;
    canvas.clear();

    if frame.background.loaded {
        canvas.fill_rect(sky_band(cfg), frame.background.sky_color);
        let slice = overworld_slice(frame.camera_x, cfg);
        canvas.draw_background(slice.source, slice.dest);
    } else {
        canvas.fill_rect(
            Rect::new(0.0, 0.0, cfg.viewport_width, cfg.viewport_height),
            frame.background.sky_color,
        );
    }

    canvas.push_translation(-frame.camera_x);

    canvas.fill_rect(frame.body.bounds(), player_color());

    if let Some(level) = frame.level {
        let span = ViewSpan::new(frame.camera_x, cfg.viewport_width);
        for category in Category::ALL {
            let color = debug_color(category);
            for rect in visible_rects(level.rects(category), span) {
                canvas.stroke_rect(*rect, DEBUG_LINE_THICKNESS, color);
            }
        }
    }

    canvas.pop_translation();
}
