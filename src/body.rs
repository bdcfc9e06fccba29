//! The player-controlled character.

use macroquad::math::Rect;

use crate::config::{GameConfig, Physics};
use crate::input::InputIntent;

/// Position, velocity and support state of the character, in world space.
///
/// `y` grows downwards. Width and height are fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterBody {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    width: f32,
    height: f32,
    /// Pixels per tick, positive to the right.
    pub velocity_x: f32,
    /// Pixels per tick, positive downwards.
    pub velocity_y: f32,
    /// Standing on a ground rectangle.
    pub on_ground: bool,
    /// Standing on a platform or mystery block.
    pub on_platform: bool,
}

impl CharacterBody {
    /// A body at rest, unsupported.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            on_platform: false,
        }
    }

    /// A body at the configured spawn point.
    pub fn spawn(cfg: &GameConfig) -> Self {
        Self::new(cfg.spawn_x, cfg.spawn_y, cfg.player_width, cfg.player_height)
    }

    /// Fixed width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Fixed height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top edge; same as `y`.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge, `y + height`.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Standing on anything. Only a supported body can jump.
    pub fn is_supported(&self) -> bool {
        self.on_ground || self.on_platform
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one tick.
    ///
    /// Direction keys set horizontal velocity outright. With no direction
    /// held, a supported body stops while an airborne one keeps drifting.
    /// A jump request is consumed only when the body is supported. Gravity is
    /// applied to velocity before the position moves. Afterwards `x` is
    /// clamped to `[0, world_width - width]`; velocity is left alone.
    pub fn integrate(&mut self, intent: &mut InputIntent, physics: &Physics, world_width: f32) {
        if intent.move_left {
            self.velocity_x = -physics.move_speed;
        } else if intent.move_right {
            self.velocity_x = physics.move_speed;
        } else if self.is_supported() {
            self.velocity_x = 0.0;
        }

        if intent.jump_requested && self.is_supported() {
            self.velocity_y = physics.jump_velocity;
            self.on_ground = false;
            self.on_platform = false;
            intent.jump_requested = false;
        }

        self.velocity_y += physics.gravity;
        self.x += self.velocity_x;
        self.y += self.velocity_y;

        self.x = self.x.min(world_width - self.width).max(0.0);
    }
}
