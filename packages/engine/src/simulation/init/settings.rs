use crate::domain::SimulationConfig;

use super::perf_stats::TickStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> TickStats {
    world.perf_stats.clone()
}

pub(super) fn config(world: &WorldCore) -> &SimulationConfig {
    &world.config
}
