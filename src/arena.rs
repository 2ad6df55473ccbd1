use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::BoundarySegment;
use crate::config::GameConfig;

/// Segment endpoints of the boundary ring, retained for per-frame line drawing.
#[derive(Resource, Clone)]
pub struct BoundaryGeometry(pub Vec<(Vec2, Vec2)>);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_boundary);
    }
}

fn spawn_boundary(mut commands: Commands, cfg: Res<GameConfig>) {
    let segments = ring_segments(cfg.arena.radius, cfg.arena.segments);
    for &(a, b) in &segments {
        commands.spawn((
            BoundarySegment,
            RigidBody::Fixed,
            Collider::segment(a, b),
            Restitution::coefficient(cfg.arena.restitution),
            Transform::default(),
            GlobalTransform::default(),
        ));
    }
    info!(
        "Arena: {} boundary segments, radius {}",
        segments.len(),
        cfg.arena.radius
    );
    commands.insert_resource(BoundaryGeometry(segments));
}

/// Endpoints of a closed ring of `count` straight segments approximating a
/// circle of `radius` centered on the world origin. Consecutive segments share
/// endpoints so the ring has no gaps.
pub fn ring_segments(radius: f32, count: u32) -> Vec<(Vec2, Vec2)> {
    let step = std::f32::consts::TAU / count as f32;
    (0..count)
        .map(|i| {
            let a = i as f32 * step;
            let b = (i + 1) as f32 * step;
            (
                Vec2::new(radius * a.cos(), radius * a.sin()),
                Vec2::new(radius * b.cos(), radius * b.sin()),
            )
        })
        .collect()
}
