//! Admission of new agents: remembered kill sites and the ambient ring.

use std::f32::consts::TAU;

use log::trace;
use rand::Rng;

use crate::core::math::{Vec2, WorldPosition};

use super::memory::SpawnMemory;
use super::slots::AgentPool;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    pub ring_radius: f32,
    pub ring_jitter: f32,
    pub ambient_chance: f64,
    pub memory_chance: f64,
    pub max_per_tick: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub ambient: u32,
    pub memory: u32,
    /// Requests that found the pool full.
    pub dropped: u32,
}

impl SpawnReport {
    pub fn spawned(&self) -> u32 {
        self.ambient + self.memory
    }
}

/// Point on the spawn ring around `center` at a random angle.
pub fn ring_position<R: Rng + ?Sized>(center: WorldPosition, params: &SpawnParams, rng: &mut R) -> WorldPosition {
    let angle = rng.gen_range(0.0..TAU);
    let jitter = if params.ring_jitter > 0.0 {
        rng.gen_range(0.0..=params.ring_jitter)
    } else {
        0.0
    };
    center + Vec2::from_angle(angle) * (params.ring_radius + jitter)
}

/// One tick of spawning. Once the memory gate passes, remembered sites are
/// drained oldest first up to the per-tick cap; a site is only consumed when
/// a slot is free for it. Whatever budget is left goes to the ambient ring.
pub fn spawn_wave<R: Rng + ?Sized>(
    pool: &mut AgentPool,
    memory: &mut SpawnMemory,
    center: WorldPosition,
    params: &SpawnParams,
    rng: &mut R,
) -> SpawnReport {
    let mut report = SpawnReport::default();
    let mut budget = params.max_per_tick;

    if budget > 0 && !memory.is_empty() && rng.gen_bool(params.memory_chance) {
        while budget > 0 && !memory.is_empty() {
            if pool.is_full() {
                report.dropped += 1;
                break;
            }
            let Some(site) = memory.take_oldest() else { break };
            if pool.spawn_at(site).is_none() {
                break;
            }
            report.memory += 1;
            budget -= 1;
        }
    }

    if budget > 0 && rng.gen_bool(params.ambient_chance) {
        let position = ring_position(center, params, rng);
        match pool.spawn_at(position) {
            Some(index) => {
                trace!("swarm: ambient spawn in slot {index} at ({:.2}, {:.2})", position.x, position.y);
                report.ambient += 1;
            }
            None => report.dropped += 1,
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn params(ambient: f64, memory: f64) -> SpawnParams {
        SpawnParams {
            ring_radius: 20.0,
            ring_jitter: 5.0,
            ambient_chance: ambient,
            memory_chance: memory,
            max_per_tick: 2,
        }
    }

    #[test]
    fn ring_spawns_land_in_the_annulus() {
        let mut rng = SmallRng::seed_from_u64(69);
        let center = Vec2::new(-300.0, 42.0);
        for _ in 0..500 {
            let d = ring_position(center, &params(1.0, 0.0), &mut rng).distance(center);
            assert!((20.0 - 1e-3..=25.0 + 1e-3).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn remembered_sites_are_reused_oldest_first() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut pool = AgentPool::new(4);
        let mut memory = SpawnMemory::new(4);
        memory.record(Vec2::new(1.0, 1.0));
        memory.record(Vec2::new(2.0, 2.0));

        let report = spawn_wave(&mut pool, &mut memory, Vec2::ZERO, &params(0.0, 1.0), &mut rng);
        assert_eq!(report, SpawnReport { ambient: 0, memory: 1, dropped: 0 });
        assert_eq!(pool.get(0), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn full_pool_keeps_remembered_site() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut pool = AgentPool::new(1);
        pool.spawn_at(Vec2::new(9.0, 9.0));
        let mut memory = SpawnMemory::new(4);
        memory.record(Vec2::new(1.0, 1.0));

        let report = spawn_wave(&mut pool, &mut memory, Vec2::ZERO, &params(1.0, 1.0), &mut rng);
        assert_eq!(report.spawned(), 0);
        assert_eq!(report.dropped, 2);
        assert_eq!(memory.len(), 1);
        assert_eq!(pool.get(0), Some(Vec2::new(9.0, 9.0)));
    }

    #[test]
    fn per_tick_cap_limits_admissions() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut pool = AgentPool::new(8);
        let mut memory = SpawnMemory::new(4);
        memory.record(Vec2::new(1.0, 1.0));
        let mut capped = params(1.0, 1.0);
        capped.max_per_tick = 1;

        let report = spawn_wave(&mut pool, &mut memory, Vec2::ZERO, &capped, &mut rng);
        assert_eq!(report.spawned(), 1);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn remembered_sites_fill_the_whole_tick_budget() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut pool = AgentPool::new(8);
        let mut memory = SpawnMemory::new(4);
        for i in 0..4 {
            memory.record(Vec2::new(i as f32, 0.0));
        }
        let mut wide = params(0.0, 1.0);
        wide.max_per_tick = 4;

        let report = spawn_wave(&mut pool, &mut memory, Vec2::ZERO, &wide, &mut rng);
        assert_eq!(report, SpawnReport { ambient: 0, memory: 4, dropped: 0 });
        assert!(memory.is_empty());
        assert_eq!(pool.get(3), Some(Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn memory_drain_leaves_budget_for_the_ring() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut pool = AgentPool::new(8);
        let mut memory = SpawnMemory::new(4);
        memory.record(Vec2::new(1.0, 1.0));
        let mut wide = params(1.0, 1.0);
        wide.max_per_tick = 3;

        let report = spawn_wave(&mut pool, &mut memory, Vec2::ZERO, &wide, &mut rng);
        assert_eq!(report, SpawnReport { ambient: 1, memory: 1, dropped: 0 });
        assert_eq!(pool.active_count(), 2);
    }
}
