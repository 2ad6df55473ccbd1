use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the demo

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        // Physics runs in the fixed schedule at 60 Hz: each iteration advances
        // simulated time by exactly 1/60 s, independent of the display refresh
        // rate driving the render loop.
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / 60.0,
                substeps: 1,
            })
            .add_systems(Startup, configure_gravity);
        if app.world().resource::<GameConfig>().rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(cfg: Res<GameConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    let Ok(mut rc) = rapier_cfg.single_mut() else {
        warn!("Rapier context missing; keeping default gravity");
        return;
    };
    rc.gravity = Vect::new(0.0, cfg.gravity.y);
}
