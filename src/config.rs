use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Bouncing Ball in Circle".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -900.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    /// Radius of the circular boundary, centered on the world origin.
    pub radius: f32,
    /// Number of straight segments approximating the circle.
    pub segments: u32,
    pub restitution: f32,
    /// Line width used when drawing the boundary.
    pub wall_width: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            radius: 250.0,
            segments: 100,
            restitution: 0.9,
            wall_width: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub restitution: f32,
    pub mass: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            restitution: 0.9,
            mass: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Minimum interval between boundary-triggered spawns, in seconds.
    /// Must be comfortably larger than one 60 Hz frame to actually rate-limit.
    pub cooldown: f32,
    /// Balls created at startup.
    pub initial_count: usize,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            cooldown: 0.5,
            initial_count: 1,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub spawn: SpawnConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            arena: Default::default(),
            ball: Default::default(),
            spawn: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; balls may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world, typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.arena.radius <= self.ball.radius {
            w.push(format!(
                "arena.radius ({}) must exceed ball.radius ({}); no interior left to spawn into",
                self.arena.radius, self.ball.radius
            ));
        }
        if self.arena.segments < 8 {
            w.push(format!(
                "arena.segments {} very coarse; boundary will look and collide like a polygon",
                self.arena.segments
            ));
        }
        if self.arena.wall_width <= 0.0 {
            w.push("arena.wall_width must be > 0".into());
        }
        for (name, r) in [
            ("arena.restitution", self.arena.restitution),
            ("ball.restitution", self.ball.restitution),
        ] {
            if r < 0.0 {
                w.push(format!("{name} negative ({r})"));
            } else if r > 1.5 {
                w.push(format!("{name} {r} > 1.5; collisions will add energy"));
            }
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if self.ball.mass <= 0.0 {
            w.push("ball.mass must be > 0".into());
        }
        if self.spawn.cooldown < 0.0 {
            w.push(format!("spawn.cooldown negative ({})", self.spawn.cooldown));
        } else if self.spawn.cooldown < 1.0 / 60.0 {
            w.push(format!(
                "spawn.cooldown {} shorter than one 60 Hz frame; contact bursts within a single step will each spawn",
                self.spawn.cooldown
            ));
        }
        if self.spawn.initial_count == 0 {
            w.push("spawn.initial_count is 0; with no balls nothing ever collides or spawns".into());
        }
        w
    }
}
