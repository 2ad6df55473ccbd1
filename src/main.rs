use bevy::prelude::*;
use bevy::window::PresentMode;
use clap::Parser;
use std::path::PathBuf;

use ball_ring::config::GameConfig;
use ball_ring::game::GamePlugin;

/// Balls bounce inside a circular boundary under gravity; two balls touching
/// pop both, a ball touching the boundary spawns a replacement (rate-limited).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// RON config file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Exit automatically after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() {
    let cli = Cli::parse();

    let (mut cfg, load_err) = GameConfig::load_or_default(&cli.config);
    if let Some(auto_close) = cli.auto_close {
        cfg.window.auto_close = auto_close;
    }

    let mut app = App::new();
    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                // Vsync paces presentation only; physics advances in the
                // 60 Hz fixed schedule regardless of display refresh rate.
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin);

    // Logged after DefaultPlugins so bevy_log is installed.
    if let Some(e) = load_err {
        warn!("config {}: {e}; using defaults", cli.config.display());
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }

    app.run();
}
