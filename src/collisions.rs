use std::collections::HashSet;
use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Ball, BoundarySegment};
use crate::config::GameConfig;
use crate::spawn::{spawn_ball, CircleMesh};

// Spawn/despawn policy on top of Rapier collision events. The handlers are
// pure observers: no contact-modification hook is installed, so the physical
// collision response always proceeds normally.
pub struct CollisionPolicyPlugin;

impl Plugin for CollisionPolicyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_cooldown)
            .add_systems(Update, (handle_collision_events, tick_cooldown).chain());
    }
}

/// Rate limiter for boundary-triggered spawns. Idle once the timer has run
/// out; triggering rearms it. At most one spawn is accepted per cooldown
/// window no matter how many boundary contacts land inside it.
#[derive(Resource)]
pub struct SpawnCooldown {
    timer: Timer,
}

impl SpawnCooldown {
    pub fn new(seconds: f32) -> Self {
        // A negative config value (warned at load) means no cooldown at all.
        let mut timer = Timer::from_seconds(seconds.max(0.0), TimerMode::Once);
        // Start idle so the very first boundary hit spawns.
        let full = timer.duration();
        timer.tick(full);
        Self { timer }
    }

    pub fn idle(&self) -> bool {
        self.timer.finished()
    }

    pub fn trigger(&mut self) {
        self.timer.reset();
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }
}

fn init_cooldown(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(SpawnCooldown::new(cfg.spawn.cooldown));
}

fn tick_cooldown(time: Res<Time>, mut cooldown: ResMut<SpawnCooldown>) {
    cooldown.advance(time.delta());
}

fn handle_collision_events(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut cooldown: ResMut<SpawnCooldown>,
    cfg: Res<GameConfig>,
    circle: Option<Res<CircleMesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    balls: Query<(), With<Ball>>,
    walls: Query<(), With<BoundarySegment>>,
) {
    // The shared mesh is created by the startup spawn; no balls exist to
    // collide before it does.
    let Some(circle) = circle else { return };

    // Despawn commands are deferred, so track removals made while walking this
    // frame's event batch; a ball named again after removal is treated as gone.
    let mut removed: HashSet<Entity> = HashSet::new();

    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        let a_ball = balls.contains(*e1) && !removed.contains(e1);
        let b_ball = balls.contains(*e2) && !removed.contains(e2);
        let a_wall = walls.contains(*e1);
        let b_wall = walls.contains(*e2);

        if (a_ball && b_wall) || (b_ball && a_wall) {
            // Ball vs boundary: spawn one replacement, gated by the cooldown.
            // The flag flips synchronously so a burst of boundary contacts in
            // one frame yields exactly one spawn.
            if cooldown.idle() {
                let entity = spawn_ball(
                    &mut commands,
                    &circle,
                    &mut materials,
                    &cfg,
                    &mut rand::thread_rng(),
                );
                cooldown.trigger();
                debug!("Boundary hit: spawned {entity:?}, cooldown armed");
            }
        } else if a_ball || b_ball {
            // Ball vs ball: remove every participant still present. A side
            // missing from the registry was already removed by a
            // near-simultaneous event; skip it and never error.
            for (entity, is_ball) in [(*e1, a_ball), (*e2, b_ball)] {
                if is_ball && removed.insert(entity) {
                    commands.entity(entity).try_despawn();
                }
            }
        }
    }
}
