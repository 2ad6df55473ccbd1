use std::time::Duration;

use ball_ring::collisions::{CollisionPolicyPlugin, SpawnCooldown};
use ball_ring::components::{Ball, BallColor, BallRadius, BoundarySegment};
use ball_ring::config::GameConfig;
use ball_ring::spawn::BallSpawnPlugin;
use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

// Headless app: no rendering, no physics pipeline. Collision events are
// injected by hand, which is all the spawn/despawn policy ever sees.
fn test_app(initial_count: usize) -> App {
    let mut cfg = GameConfig::default();
    cfg.spawn.initial_count = initial_count;
    cfg.spawn.cooldown = 60.0; // far beyond test wall time; released manually

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<ColorMaterial>::default());
    app.add_event::<CollisionEvent>();
    app.add_plugins((BallSpawnPlugin, CollisionPolicyPlugin));
    // Run startup so initial balls and the cooldown resource exist.
    app.update();
    app
}

fn ball_entities(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Ball>>();
    query.iter(world).collect()
}

fn ball_count(app: &mut App) -> usize {
    ball_entities(app).len()
}

fn send_started(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn spawn_wall(app: &mut App) -> Entity {
    app.world_mut().spawn(BoundarySegment).id()
}

#[test]
fn ball_ball_collision_removes_both() {
    let mut app = test_app(2);
    let balls = ball_entities(&mut app);
    assert_eq!(balls.len(), 2);

    send_started(&mut app, balls[0], balls[1]);
    app.update();

    assert_eq!(ball_count(&mut app), 0);
}

#[test]
fn missing_participant_removes_found_side_only() {
    let mut app = test_app(1);
    let balls = ball_entities(&mut app);
    let ghost = app.world_mut().spawn_empty().id();

    // The ghost stands in for a ball already removed by a near-simultaneous
    // event; handling must not panic and must still remove the live side.
    send_started(&mut app, balls[0], ghost);
    app.update();

    assert_eq!(ball_count(&mut app), 0);
}

#[test]
fn event_between_unknown_entities_is_ignored() {
    let mut app = test_app(1);
    let g1 = app.world_mut().spawn_empty().id();
    let g2 = app.world_mut().spawn_empty().id();

    send_started(&mut app, g1, g2);
    app.update();

    assert_eq!(ball_count(&mut app), 1);
}

#[test]
fn chained_events_remove_each_found_side_once() {
    let mut app = test_app(3);
    let balls = ball_entities(&mut app);

    // b0-b1 removes both; b1-b2 then finds only b2.
    send_started(&mut app, balls[0], balls[1]);
    send_started(&mut app, balls[1], balls[2]);
    app.update();

    assert_eq!(ball_count(&mut app), 0);
}

#[test]
fn boundary_burst_spawns_exactly_once() {
    let mut app = test_app(1);
    let wall = spawn_wall(&mut app);
    let balls = ball_entities(&mut app);

    // Several contacts inside one frame: the cooldown window admits one spawn.
    send_started(&mut app, balls[0], wall);
    send_started(&mut app, wall, balls[0]);
    send_started(&mut app, balls[0], wall);
    app.update();
    assert_eq!(ball_count(&mut app), 2);

    // Next frame, still inside the window: no further spawn.
    send_started(&mut app, balls[0], wall);
    app.update();
    assert_eq!(ball_count(&mut app), 2);
}

#[test]
fn cooldown_elapse_allows_next_spawn() {
    let mut app = test_app(1);
    let wall = spawn_wall(&mut app);
    let balls = ball_entities(&mut app);

    send_started(&mut app, balls[0], wall);
    app.update();
    assert_eq!(ball_count(&mut app), 2);

    // Let the window run out, then a fresh boundary hit spawns again.
    app.world_mut()
        .resource_mut::<SpawnCooldown>()
        .advance(Duration::from_secs(61));
    send_started(&mut app, balls[0], wall);
    app.update();
    assert_eq!(ball_count(&mut app), 3);
}

#[test]
fn spawned_balls_carry_color_and_radius() {
    let mut app = test_app(1);
    let wall = spawn_wall(&mut app);
    let balls = ball_entities(&mut app);
    send_started(&mut app, balls[0], wall);
    app.update();

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&BallRadius, &BallColor), With<Ball>>();
    let found: Vec<_> = query.iter(world).collect();
    assert_eq!(found.len(), 2);
    for (radius, _color) in found {
        assert_eq!(radius.0, GameConfig::default().ball.radius);
    }
}

#[test]
fn spawn_then_mutual_removal_scenario() {
    // Full lifecycle: 1 ball, boundary hit -> 2 balls, mutual hit -> 0 balls.
    let mut app = test_app(1);
    let wall = spawn_wall(&mut app);
    let balls = ball_entities(&mut app);
    assert_eq!(balls.len(), 1);

    send_started(&mut app, balls[0], wall);
    app.update();
    let balls = ball_entities(&mut app);
    assert_eq!(balls.len(), 2);

    send_started(&mut app, balls[0], balls[1]);
    app.update();
    assert_eq!(ball_count(&mut app), 0);
}
