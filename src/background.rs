//! Background strip: sky colour and the slice shown under the camera.

use log::info;
use macroquad::color::Color;
use macroquad::math::Rect;
use macroquad::texture::Image;

use crate::config::GameConfig;

/// Sky colour used until (or unless) the background image is available.
pub fn default_sky_color() -> Color {
    Color::from_rgba(0x80, 0xc9, 0xff, 0xff)
}

/// Colour of the first pixel of the image's top-left block.
pub fn sample_sky_color(image: &Image) -> Color {
    if image.width == 0 || image.height == 0 {
        return default_sky_color();
    }
    image.get_pixel(0, 0)
}

/// What the renderer knows about the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Whether a background texture is available to draw.
    pub loaded: bool,
    /// Fill for the sky band, or the whole view when nothing is loaded.
    pub sky_color: Color,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            loaded: false,
            sky_color: default_sky_color(),
        }
    }
}

impl Background {
    /// Describe a freshly loaded background, sampling its sky colour.
    pub fn from_image(image: &Image) -> Self {
        let sky_color = sample_sky_color(image);
        info!(
            "Sky color sampled: rgba({}, {}, {}, {})",
            (sky_color.r * 255.0).round(),
            (sky_color.g * 255.0).round(),
            (sky_color.b * 255.0).round(),
            sky_color.a
        );
        Self {
            loaded: true,
            sky_color,
        }
    }
}

/// Source rectangle in the image and destination rectangle on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSlice {
    /// Native pixels in the background image.
    pub source: Rect,
    /// Screen pixels.
    pub dest: Rect,
}

/// Part of the overworld band visible at `camera_x`, stretched below the sky band.
pub fn overworld_slice(camera_x: f32, cfg: &GameConfig) -> BackgroundSlice {
    BackgroundSlice {
        source: Rect::new(
            camera_x / cfg.scale,
            0.0,
            cfg.viewport_width / cfg.scale,
            cfg.overworld_height,
        ),
        dest: Rect::new(
            0.0,
            cfg.sky_offset,
            cfg.viewport_width,
            cfg.viewport_height - cfg.sky_offset,
        ),
    }
}

/// The band above the overworld that is filled with the sky colour.
pub fn sky_band(cfg: &GameConfig) -> Rect {
    Rect::new(0.0, 0.0, cfg.viewport_width, cfg.sky_offset)
}
