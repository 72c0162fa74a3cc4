use super::*;
use crate::core::coords::{chunk_of, ChunkCoord, CHUNK_TILES};
use crate::core::error::WorldError;
use crate::spatial::chunks::ShiftEvent;

fn quiet_config() -> SimulationConfig {
    SimulationConfig {
        ambient_spawn_chance: 0.0,
        memory_spawn_chance: 0.0,
        ..SimulationConfig::default()
    }
}

fn playing(config: SimulationConfig) -> WorldCore {
    let mut world = WorldCore::with_config(config).unwrap();
    world.start();
    world
}

fn walk(world: &mut WorldCore, direction: Vec2, ticks: usize) {
    let input = TickInput { movement: direction, ..TickInput::default() };
    for _ in 0..ticks {
        world.tick(&input);
    }
}

const INITIAL_BLOCK: [ChunkCoord; 4] = [
    ChunkCoord::new(-1, -1),
    ChunkCoord::new(0, -1),
    ChunkCoord::new(-1, 0),
    ChunkCoord::new(0, 0),
];

#[test]
fn new_world_waits_on_start_screen() {
    let mut world = WorldCore::new();
    assert_eq!(world.screen(), GameScreen::Start);
    assert_eq!(world.window().coords(), INITIAL_BLOCK);

    let report = world.tick(&TickInput { movement: Vec2::new(1.0, 0.0), ..TickInput::default() });
    assert!(!report.advanced);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.observer().position, Vec2::new(10.0, 10.0));
}

#[test]
fn movement_uses_speed_over_tick_rate() {
    let mut world = playing(quiet_config());
    let report = world.tick(&TickInput { movement: Vec2::new(2.0, 0.0), ..TickInput::default() });
    assert!(report.advanced);
    assert_eq!(world.frame(), 1);
    let expected = 10.0 + 5.0 / 120.0;
    assert!((world.observer().position.x - expected).abs() < 1e-5);
}

#[test]
fn toggling_pause_stops_ticks() {
    let mut world = playing(quiet_config());
    world.toggle_pause();
    assert_eq!(world.screen(), GameScreen::Start);
    assert!(!world.tick(&TickInput::default()).advanced);
    world.toggle_pause();
    assert!(world.tick(&TickInput::default()).advanced);
}

#[test]
fn caught_observer_ends_the_game() {
    let mut world = playing(quiet_config());
    world.spawn_agent(Vec2::new(10.3, 10.0));

    let report = world.tick(&TickInput::default());
    assert!(report.swarm.caught);
    assert!(report.defeated);
    assert_eq!(world.screen(), GameScreen::GameOver);

    let frame = world.frame();
    assert!(!world.tick(&TickInput::default()).advanced);
    assert_eq!(world.frame(), frame);

    // Starting again from game over resets first.
    world.start();
    assert_eq!(world.screen(), GameScreen::Playing);
    assert_eq!(world.swarm().active_count(), 0);
    assert!(!world.observer().defeated);
}

#[test]
fn attack_kills_pays_and_petrifies() {
    let mut world = playing(quiet_config());
    world.spawn_agent(Vec2::new(12.0, 10.5));

    let report = world.tick(&TickInput {
        aim: Vec2::new(1.0, 0.0),
        attack: true,
        ..TickInput::default()
    });
    let outcome = report.attack.unwrap();
    assert_eq!(outcome.kills.len(), 1);
    assert_eq!(world.observer().kills, 1);
    assert_eq!(world.observer().resources, 51);
    assert_eq!(world.tile_at(outcome.kills[0]), Some(Tile::Solid));
    assert_eq!(world.swarm().memory().len(), 1);
    assert!(world.attack().remaining() > 0.0);
}

#[test]
fn walking_east_streams_chunks_through_the_cache() {
    let mut world = playing(quiet_config());
    walk(&mut world, Vec2::new(1.0, 0.0), 120 * 60);

    let position = world.observer().position;
    assert!(position.x > 300.0);
    assert!(world.window().is_contiguous());
    assert!(world.window().contains(chunk_of(position)));
    assert!(world.store().occupied() >= 4);
    assert!(world.store().cached_coords().all(|c| !world.window().contains(c)));
}

#[test]
fn obstacles_outside_the_window_are_rejected() {
    let mut world = WorldCore::new();
    assert!(world.place_obstacle(Vec2::new(11.5, 10.5)).is_ok());
    assert_eq!(world.tile_at(Vec2::new(11.5, 10.5)), Some(Tile::Solid));

    let err = world.place_obstacle(Vec2::new(1000.0, 10.0)).unwrap_err();
    assert!(matches!(err, WorldError::OutsideWindow { .. }));
}

#[test]
fn obstacle_blocks_observer_movement() {
    let mut world = playing(quiet_config());
    world.place_obstacle(Vec2::new(12.5, 10.5)).unwrap();
    walk(&mut world, Vec2::new(1.0, 0.0), 60);
    // Stopped with the leading face just short of tile x = 12.
    let x = world.observer().position.x;
    assert!(x < 12.0 - 0.29, "x = {x}");
    assert!(x > 11.6, "x = {x}");
}

#[test]
fn reset_restores_the_initial_state() {
    let mut world = playing(quiet_config());
    walk(&mut world, Vec2::new(1.0, 1.0), 120 * 30);
    world.spawn_agent(Vec2::new(0.0, 0.0));
    world.reset();

    assert_eq!(world.screen(), GameScreen::Start);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.observer().position, Vec2::new(10.0, 10.0));
    assert_eq!(world.observer().resources, 50);
    assert_eq!(world.window().coords(), INITIAL_BLOCK);
    assert_eq!(world.store().occupied(), 0);
    assert_eq!(world.swarm().active_count(), 0);
    assert!(world.attack().is_ready());
}

#[test]
fn teleport_recenters_the_window() {
    let mut world = WorldCore::new();
    let events = world.teleport_observer(Vec2::new(-5000.5, 700.25));
    assert!(matches!(events.as_slice(), [ShiftEvent::Recenter { .. }]));
    assert!(world.window().contains(chunk_of(Vec2::new(-5000.5, 700.25))));
}

#[test]
fn perf_stats_fill_only_when_enabled() {
    let mut world = playing(quiet_config());
    world.tick(&TickInput::default());
    assert_eq!(world.get_perf_stats().tick_ms(), 0.0);

    world.enable_perf_metrics(true);
    world.spawn_agent(Vec2::new(20.0, 10.0));
    world.tick(&TickInput::default());
    let stats = world.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.active_agents(), 1);
}

#[test]
fn render_extracts_are_flat() {
    let mut world = WorldCore::new();
    world.spawn_agent(Vec2::new(3.0, 4.0));
    assert_eq!(world.agent_positions(), vec![3.0, 4.0]);
    assert_eq!(world.resident_chunks(), vec![-1, -1, 0, -1, -1, 0, 0, 0]);
    assert_eq!(world.chunk_tiles(0).map(|t| t.len()), Some(CHUNK_TILES));
    assert!(world.chunk_tiles(4).is_none());
}

#[test]
fn variation_table_is_deterministic_and_bounded() {
    let a = WorldCore::new();
    let b = WorldCore::new();
    assert_eq!(a.variation().len(), CHUNK_TILES);
    assert_eq!(a.variation(), b.variation());
    assert!(a.variation().iter().all(|&v| (v as u32) < VARIATION_LEVELS));
    // Not a constant table.
    assert!(a.variation().iter().any(|&v| v != a.variation()[0]));
}

#[test]
fn facade_exposes_the_attack_cone() {
    let config = SimulationConfig::default();
    let world = World::new();
    assert_eq!(world.attack_range(), config.attack_range);
    assert!((world.attack_half_angle() - config.attack_half_angle()).abs() < 1e-6);
    assert_eq!(world.attack_cooldown(), 0.0);
}
