use bevy::prelude::*;

use crate::arena::ArenaPlugin;
use crate::auto_close::AutoClosePlugin;
use crate::collisions::CollisionPolicyPlugin;
use crate::rapier_physics::PhysicsSetupPlugin;
use crate::render::RenderPlugin;
use crate::spawn::BallSpawnPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RenderPlugin,
            PhysicsSetupPlugin,
            ArenaPlugin,
            BallSpawnPlugin,
            CollisionPolicyPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Update, debug_entity_counts);
    }
}

fn debug_entity_counts(
    time: Res<Time>,
    mut timer: Local<f32>,
    q_balls: Query<&crate::components::Ball>,
) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        info!("balls={}", q_balls.iter().count());
    }
}
