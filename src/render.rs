use bevy::prelude::*;

use crate::arena::BoundaryGeometry;
use crate::config::GameConfig;

pub const BOUNDARY_COLOR: Color = Color::WHITE;

// Boundary lines redrawn every frame via gizmos; ball visuals are the circle
// mesh children created at spawn and moved by Rapier's transform writeback.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, configure_line_width))
            .add_systems(Update, draw_boundary);
    }
}

fn setup_camera(mut commands: Commands) {
    // Camera2d centers the world origin in the window; Required Components
    // supply the rest.
    commands.spawn(Camera2d);
}

fn configure_line_width(mut store: ResMut<GizmoConfigStore>, cfg: Res<GameConfig>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = cfg.arena.wall_width;
}

fn draw_boundary(mut gizmos: Gizmos, geometry: Option<Res<BoundaryGeometry>>) {
    let Some(geometry) = geometry else { return };
    for &(a, b) in &geometry.0 {
        gizmos.line_2d(a, b, BOUNDARY_COLOR);
    }
}
