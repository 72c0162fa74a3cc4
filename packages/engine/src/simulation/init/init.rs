use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::domain::{Observer, SimulationConfig};
use crate::spatial::chunks::{ActiveWindow, ChunkStore};
use crate::systems::{AttackResolver, CollisionResolver, SwarmSimulator};

use super::perf_stats::TickStats;
use super::random::variation_table;
use super::{GameScreen, WorldCore};

pub(super) fn create_world_core(config: SimulationConfig) -> WorldCore {
    info!(
        "world: created, seed {}, cache {} chunks, {} agent slots",
        config.seed, config.cache_capacity, config.agent_capacity
    );
    WorldCore {
        store: ChunkStore::new(config.cache_capacity),
        window: ActiveWindow::around(config.start_position, config.shift_margin),
        observer: Observer::new(&config),
        swarm: SwarmSimulator::from_config(&config),
        attack: AttackResolver::from_config(&config),
        collision: CollisionResolver::from_config(&config),
        rng: SmallRng::seed_from_u64(config.seed),
        variation: variation_table(),
        screen: GameScreen::Start,
        frame: 0,
        perf_enabled: false,
        perf_stats: TickStats::default(),
        config,
    }
}

pub(super) fn reset_world_core(world: &mut WorldCore) {
    let config = &world.config;
    world.store.clear();
    world.window = ActiveWindow::around(config.start_position, config.shift_margin);
    world.observer = Observer::new(config);
    world.swarm.clear();
    world.attack.reset();
    world.rng = SmallRng::seed_from_u64(config.seed);
    world.screen = GameScreen::Start;
    world.frame = 0;
    world.perf_stats.reset();
    info!("world: reset to start screen");
}
