// Ends the run after `window.autoClose` seconds (0.0 = run until the window
// is closed). Smoke runs and CI use this to terminate unattended sessions.

use bevy::prelude::*;

use crate::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct ExitTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_exit_timer)
            .add_systems(Update, tick_exit_timer);
    }
}

fn arm_exit_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose armed");
        commands.insert_resource(ExitTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_exit_timer(
    time: Res<Time>,
    mut timer: Option<ResMut<ExitTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.finished() {
            info!("AutoClose: requesting app exit");
            ev_exit.write(AppExit::Success);
        }
    }
}
