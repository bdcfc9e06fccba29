//! One play-through: the character, the level, and the loop state around them.

use std::fmt;

use log::{error, info};

use crate::background::Background;
use crate::body::CharacterBody;
use crate::camera::camera_x;
use crate::collision::{resolve, CollisionReport};
use crate::config::{GameConfig, MIN_CLOCK_SPEED};
use crate::input::InputIntent;
use crate::level::LevelGeometry;
use crate::render::Frame;

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Level geometry has not arrived; the body moves but nothing collides.
    Loading,
    /// Ticking normally, with or without a level.
    Running,
    /// The character fell out of the world. Terminal for this session.
    Restarting,
}

/// Result of [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// The body dropped below the viewport this tick.
    FellOutOfWorld,
    /// The session had already ended; nothing was simulated.
    Halted,
}

/// Scaled game time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    speed: f32,
    elapsed: f64,
    ticks: u64,
}

impl SessionClock {
    /// A clock at zero running at `speed`.
    pub fn new(speed: f32) -> Self {
        Self {
            speed: speed.max(MIN_CLOCK_SPEED),
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Current multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the multiplier, floored at [`MIN_CLOCK_SPEED`].
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(MIN_CLOCK_SPEED);
    }

    /// Advance by one frame of `frame_time` real seconds; returns the scaled delta.
    pub fn advance(&mut self, frame_time: f32) -> f32 {
        let scaled = frame_time * self.speed;
        self.elapsed += scaled as f64;
        self.ticks += 1;
        scaled
    }

    /// Scaled seconds since the session started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[derive(Debug, Clone)]
enum LevelSlot {
    Pending,
    /// Copy of the level as loaded, before any block was broken.
    Loaded(LevelGeometry),
    Failed,
}

/// State of one play-through, from spawn until the character falls out of the world.
pub struct Session {
    config: GameConfig,
    state: SessionState,
    body: CharacterBody,
    level: Option<LevelGeometry>,
    slot: LevelSlot,
    background: Background,
    clock: SessionClock,
    last_collisions: CollisionReport,
}

impl Session {
    /// A fresh session waiting for its level.
    pub fn new(config: GameConfig) -> Self {
        Self {
            body: CharacterBody::spawn(&config),
            clock: SessionClock::new(config.clock_speed),
            state: SessionState::Loading,
            level: None,
            slot: LevelSlot::Pending,
            background: Background::default(),
            last_collisions: CollisionReport::default(),
            config,
        }
    }

    /// Start colliding against `level`. A copy is kept for [`Session::respawn`].
    pub fn attach_level(&mut self, level: LevelGeometry) {
        self.slot = LevelSlot::Loaded(level.clone());
        self.level = Some(level);
        if self.state == SessionState::Loading {
            self.state = SessionState::Running;
        }
    }

    /// Record a failed level load and carry on without collision.
    pub fn attach_failed(&mut self, err: &dyn fmt::Display) {
        error!("Error loading level: {err}; running without collision");
        self.slot = LevelSlot::Failed;
        self.level = None;
        if self.state == SessionState::Loading {
            self.state = SessionState::Running;
        }
    }

    /// Use a loaded background from now on.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Run one frame: integrate, collide, then check for a fall out of the world.
    pub fn tick(&mut self, frame_time: f32, intent: &mut InputIntent) -> TickOutcome {
        if self.state == SessionState::Restarting {
            return TickOutcome::Halted;
        }
        self.clock.advance(frame_time);

        self.body
            .integrate(intent, &self.config.physics, self.config.world_width);

        self.last_collisions = match self.level.as_mut() {
            Some(level) => resolve(&mut self.body, level, self.config.collision),
            None => CollisionReport::default(),
        };
        for block in &self.last_collisions.broken {
            info!("Mystery block broken at ({}, {})", block.x, block.y);
        }

        if self.body.y > self.config.viewport_height {
            info!("Fell out of the world at x = {}; restarting", self.body.x);
            self.state = SessionState::Restarting;
            return TickOutcome::FellOutOfWorld;
        }
        TickOutcome::Continue
    }

    /// A new session with the same config, background, and an unbroken copy of the level.
    pub fn respawn(&self) -> Session {
        let mut next = Session::new(self.config.clone());
        next.background = self.background;
        match &self.slot {
            LevelSlot::Pending => {}
            LevelSlot::Loaded(level) => next.attach_level(level.clone()),
            LevelSlot::Failed => {
                next.slot = LevelSlot::Failed;
                next.state = SessionState::Running;
            }
        }
        next
    }

    /// Set the clock multiplier, floored at [`MIN_CLOCK_SPEED`].
    pub fn set_clock_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
        info!("Clock speed: {:.1}", self.clock.speed());
    }

    /// Nudge the clock multiplier by `delta`. Zero is a no-op.
    pub fn adjust_clock_speed(&mut self, delta: f32) {
        if delta != 0.0 {
            self.set_clock_speed(self.clock.speed() + delta);
        }
    }

    /// Camera position for the body's current x.
    pub fn camera_x(&self) -> f32 {
        camera_x(
            self.body.x,
            self.config.viewport_width,
            self.config.scaled_world_width(),
        )
    }

    /// Snapshot for [`crate::render::render_frame`].
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            camera_x: self.camera_x(),
            body: &self.body,
            level: self.level.as_ref(),
            background: &self.background,
            config: &self.config,
        }
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The character.
    pub fn body(&self) -> &CharacterBody {
        &self.body
    }

    /// Mutable access to the character, for placing it directly.
    pub fn body_mut(&mut self) -> &mut CharacterBody {
        &mut self.body
    }

    /// Live geometry, missing broken blocks. `None` until loaded or after a failure.
    pub fn level(&self) -> Option<&LevelGeometry> {
        self.level.as_ref()
    }

    /// Scaled game time.
    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Config the session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// What collision resolution did on the last tick.
    pub fn last_collisions(&self) -> &CollisionReport {
        &self.last_collisions
    }
}
