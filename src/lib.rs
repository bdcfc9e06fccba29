#![warn(missing_docs)]

//! Side-scrolling platformer core for Macroquad.
//!
//! Collision geometry comes from the `ground`, `platform` and `mystery`
//! object groups of a Tiled JSON export. A single character integrates simple
//! per-tick physics, collides with that geometry, and is followed by a
//! horizontally scrolling camera. All state for one play-through lives in a
//! [`Session`].

pub mod assets;
pub mod background;
pub mod body;
pub mod camera;
pub mod collision;
pub mod config;
mod error;
pub mod geom;
pub mod input;
pub mod ir_map;
pub mod level;
/// Level file decoders.
pub mod loader {
    pub mod json_loader;
}
pub mod render;
pub mod session;

pub use background::Background;
pub use body::CharacterBody;
pub use collision::CollisionReport;
pub use config::{GameConfig, Physics};
pub use error::{LoadError, MissingLayer};
pub use geom::{native_to_world, NativeRect};
pub use input::{InputIntent, InputTracker, KeyState};
pub use level::{Category, CategorySet, LevelGeometry};
pub use render::{render_frame, Canvas, Frame, MacroquadCanvas};
pub use session::{Session, SessionClock, SessionState, TickOutcome};
