//! Tunable constants for a game session.
//!
//! Every field has a default, so a config file only needs to list what it
//! changes.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;
use crate::level::CategorySet;

/// Smallest clock-speed multiplier a session accepts.
pub const MIN_CLOCK_SPEED: f32 = 0.1;

/// Per-tick movement constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    /// Horizontal speed while a direction is held.
    pub move_speed: f32,
    /// Vertical velocity set on jump. Negative is up.
    pub jump_velocity: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            move_speed: 2.0,
            jump_velocity: -10.0,
        }
    }
}

/// Everything a session needs to know before it starts.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels.
    pub viewport_width: f32,
    /// Falling below this y ends the session.
    pub viewport_height: f32,
    /// Horizontal extent the body is clamped to.
    pub world_width: f32,
    /// Movement constants.
    pub physics: Physics,
    /// Character width in world pixels.
    pub player_width: f32,
    /// Character height in world pixels.
    pub player_height: f32,
    /// Spawn point, left edge.
    pub spawn_x: f32,
    /// Spawn point, top edge.
    pub spawn_y: f32,
    /// Initial clock multiplier, floored at [`MIN_CLOCK_SPEED`].
    pub clock_speed: f32,
    /// Native height of the playable band at the top of the background image.
    pub overworld_height: f32,
    /// Height of the sky band drawn above the scaled overworld.
    pub sky_offset: f32,
    /// Native to world scale factor.
    pub scale: f32,
    /// Native width of the background strip.
    pub background_width: f32,
    /// Categories whose collision handlers run.
    pub collision: CategorySet,
    /// Tiled JSON export holding the collision layers.
    pub level_path: PathBuf,
    /// Pre-rendered background strip.
    pub background_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            world_width: 3200.0,
            physics: Physics::default(),
            player_width: 32.0,
            player_height: 32.0,
            spawn_x: 50.0,
            spawn_y: 0.0,
            clock_speed: 1.0,
            overworld_height: 240.0,
            sky_offset: 120.0,
            scale: 2.0,
            background_width: 5376.0,
            collision: CategorySet::default(),
            level_path: PathBuf::from("assets/world1-1.json"),
            background_path: PathBuf::from("assets/world1-1.png"),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config document.
    pub fn from_json_str(txt: &str) -> Result<Self, LoadError> {
        let cfg: GameConfig =
            serde_json::from_str(txt).map_err(|source| LoadError::json("<inline>", source))?;
        cfg.validate()
    }

    /// Read, parse and validate a config file from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let txt = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: GameConfig =
            serde_json::from_str(&txt).map_err(|source| LoadError::json(path, source))?;
        cfg.validate()
    }

    fn validate(mut self) -> Result<Self, LoadError> {
        if self.scale <= 0.0 {
            return Err(LoadError::Invalid(format!("scale must be positive, got {}", self.scale)));
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(LoadError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.world_width < self.player_width {
            return Err(LoadError::Invalid(format!(
                "world width {} is narrower than the player ({})",
                self.world_width, self.player_width
            )));
        }
        self.clock_speed = self.clock_speed.max(MIN_CLOCK_SPEED);
        Ok(self)
    }

    /// Width of the background once scaled into world space.
    pub fn scaled_world_width(&self) -> f32 {
        self.background_width * self.scale
    }
}
