//! The tick pipeline. Order is fixed: collision sees the pre-shift window,
//! the shift sees the post-collision position, the swarm and attack see the
//! shifted window.

use log::info;

use crate::core::math::Vec2;
use crate::spatial::chunks::{ChunkLoad, ChunkSource, ShiftEvent};

use super::{GameScreen, PerfTimer, TickInput, TickReport, WorldCore};

/// Per-tick observer displacement for a movement intent.
fn observer_displacement(intent: Vec2, step: f32) -> Vec2 {
    if !intent.is_finite() {
        return Vec2::ZERO;
    }
    intent.clamp_length(1.0) * step
}

pub(super) fn step(world: &mut WorldCore, input: &TickInput) -> TickReport {
    if world.screen != GameScreen::Playing {
        return TickReport::default();
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let mut timer = perf_on.then(PerfTimer::start);

    world.observer.aim(input.aim);

    // === Collision ===
    let displacement = observer_displacement(input.movement, world.config.observer_step());
    let resolution = world
        .collision
        .resolve(&world.window, world.observer.position, displacement);
    world.observer.position = resolution.position;
    if let Some(t) = timer.as_mut() {
        world.perf_stats.collision_ms = t.lap_ms();
    }

    // === Window shift ===
    let shifts = world
        .window
        .on_observer_moved(world.observer.position, &mut world.store);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.window_ms = t.lap_ms();
    }

    // === Swarm ===
    let swarm = world.swarm.advance(world.observer.position, &mut world.rng);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.swarm_ms = t.lap_ms();
    }
    if swarm.caught {
        world.observer.defeated = true;
        world.screen = GameScreen::GameOver;
        info!(
            "world: observer caught at frame {} with {} kills",
            world.frame, world.observer.kills
        );
    }

    // === Attack ===
    world.attack.recharge(world.config.tick_seconds());
    let attack = if input.attack && !swarm.caught {
        world.attack.trigger(
            world.observer.position,
            input.aim,
            &mut world.swarm,
            &mut world.window,
        )
    } else {
        None
    };
    if let Some(outcome) = &attack {
        world
            .observer
            .record_kills(outcome.kills.len() as u32, world.config.kill_reward);
    }
    if let Some(t) = timer.as_mut() {
        world.perf_stats.attack_ms = t.lap_ms();
    }

    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.active_agents = world.swarm.active_count() as u32;
        stats.ambient_spawns = swarm.spawns.ambient;
        stats.memory_spawns = swarm.spawns.memory;
        stats.dropped_spawns = swarm.spawns.dropped;
        stats.separations = swarm.separated;
        stats.kills = attack.as_ref().map_or(0, |o| o.kills.len() as u32);
        stats.shifts = shifts.len() as u32;
        for event in &shifts {
            let loaded: &[ChunkLoad] = match event {
                ShiftEvent::Shift { loaded, .. } => loaded,
                ShiftEvent::Recenter { loaded, .. } => loaded,
            };
            for load in loaded {
                match load.source {
                    ChunkSource::Reclaimed => stats.chunks_reclaimed += 1,
                    ChunkSource::Synthesized => stats.chunks_synthesized += 1,
                }
            }
        }
        stats.cache_occupancy = world.store.occupied() as u32;
        if let Some(t) = timer {
            stats.tick_ms = t.elapsed_ms();
        }
    }

    TickReport {
        advanced: true,
        resolution: Some(resolution),
        shifts,
        swarm,
        attack,
        defeated: world.observer.defeated,
    }
}
