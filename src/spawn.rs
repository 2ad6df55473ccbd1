use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::components::{Ball, BallColor, BallRadius};
use crate::config::GameConfig;

/// Shared unit-diameter circle mesh; each ball scales it to its own diameter.
#[derive(Resource, Clone)]
pub struct CircleMesh(pub Handle<Mesh>);

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_initial_balls);
    }
}

fn spawn_initial_balls(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let circle = CircleMesh(meshes.add(Mesh::from(Circle { radius: 0.5 })));
    commands.insert_resource(circle.clone());

    let mut rng = rand::thread_rng();
    for _ in 0..cfg.spawn.initial_count {
        spawn_ball(&mut commands, &circle, &mut materials, &cfg, &mut rng);
    }
    info!("Spawned {} initial ball(s)", cfg.spawn.initial_count);
}

/// Spawn one ball at a uniformly random interior position with a uniformly
/// random RGB color. Always succeeds; returns the new entity.
pub fn spawn_ball(
    commands: &mut Commands,
    circle: &CircleMesh,
    materials: &mut Assets<ColorMaterial>,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) -> Entity {
    let radius = cfg.ball.radius;
    let pos = random_point_in_disc(rng, cfg.arena.radius - radius);
    let color = Color::srgb_u8(rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
    let material = materials.add(color);

    commands
        .spawn((
            Transform::from_translation(pos.extend(0.0)),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(radius),
            // Unit mass by default; Rapier derives the disk angular inertia
            // from the collider shape.
            ColliderMassProperties::Mass(cfg.ball.mass),
            Restitution::coefficient(cfg.ball.restitution),
            Velocity::zero(),
            Ccd::enabled(), // boundary segments are thin; avoid tunneling at 1/60 steps
            ActiveEvents::COLLISION_EVENTS,
            Ball,
            BallRadius(radius),
            BallColor(color),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(circle.0.clone()),
                MeshMaterial2d(material),
                Transform::from_scale(Vec3::splat(radius * 2.0)),
            ));
        })
        .id()
}

/// Uniform random angle in [0, 2π), uniform random radial distance in
/// [0, max_radius). Radial-uniform rather than area-uniform, which biases
/// spawns toward the center; that is the intended scatter for this demo.
/// A degenerate disc (max_radius <= 0, warned at config load) collapses to
/// the origin instead of panicking on an empty range.
pub fn random_point_in_disc(rng: &mut impl Rng, max_radius: f32) -> Vec2 {
    if max_radius <= 0.0 {
        return Vec2::ZERO;
    }
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let dist = rng.gen_range(0.0..max_radius);
    Vec2::new(dist * angle.cos(), dist * angle.sin())
}
