pub mod arena;
pub mod auto_close;
pub mod collisions;
pub mod components;
pub mod config;
pub mod game;
pub mod rapier_physics;
pub mod render;
pub mod spawn;

// Curated re-exports
pub use components::{Ball, BallColor, BallRadius, BoundarySegment};
pub use config::GameConfig;
pub use game::GamePlugin;
