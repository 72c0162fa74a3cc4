use horde_engine::{GameScreen, SimulationConfig, TickInput, Vec2, WorldCore};

#[test]
fn spawn_pressure_respects_capacity() {
    let config = SimulationConfig {
        agent_capacity: 12,
        ambient_spawn_chance: 1.0,
        memory_spawn_chance: 1.0,
        spawn_ring_radius: 22.0,
        agent_speed: 0.0,
        ..SimulationConfig::default()
    };
    let mut world = WorldCore::with_config(config).unwrap();
    world.start();

    for _ in 0..100 {
        world.tick(&TickInput::default());
        assert!(world.swarm().active_count() <= 12);
    }
    assert_eq!(world.swarm().active_count(), 12);
    assert_eq!(world.screen(), GameScreen::Playing);
}

#[test]
fn swarm_eventually_catches_a_still_observer() {
    let config = SimulationConfig {
        ambient_spawn_chance: 1.0,
        ..SimulationConfig::default()
    };
    let mut world = WorldCore::with_config(config).unwrap();
    world.start();

    // Ring radius 25 at most, agents cover 4 tiles per second.
    for _ in 0..120 * 10 {
        world.tick(&TickInput::default());
        if world.screen() == GameScreen::GameOver {
            break;
        }
    }
    assert_eq!(world.screen(), GameScreen::GameOver);
    assert!(world.observer().defeated);
}

#[test]
fn kills_come_back_as_memory_spawns() {
    let config = SimulationConfig {
        ambient_spawn_chance: 0.0,
        memory_spawn_chance: 1.0,
        agent_speed: 0.0,
        ..SimulationConfig::default()
    };
    let mut world = WorldCore::with_config(config).unwrap();
    world.start();
    let site = Vec2::new(12.0, 10.0);
    world.spawn_agent(site);

    let report = world.tick(&TickInput {
        aim: Vec2::new(1.0, 0.0),
        attack: true,
        ..TickInput::default()
    });
    assert_eq!(report.attack.map(|o| o.kills.len()), Some(1));

    let report = world.tick(&TickInput::default());
    assert_eq!(report.swarm.spawns.memory, 1);
    assert_eq!(world.swarm().positions().collect::<Vec<_>>(), vec![site]);
}
