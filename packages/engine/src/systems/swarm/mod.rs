//! Swarm simulation: a fixed-capacity population seeking the observer.
//!
//! Per tick: move every agent toward the observer, check whether any agent
//! caught it, push overlapping agents apart, then admit new agents. Agents
//! only leave through [`SwarmSimulator::kill`].

pub mod memory;
pub mod movement;
pub mod separation;
pub mod slots;
pub mod spawn;

use log::trace;
use rand::Rng;

use crate::core::math::WorldPosition;
use crate::domain::SimulationConfig;

pub use memory::SpawnMemory;
pub use separation::SeparationParams;
pub use slots::{AgentPool, AgentSlot};
pub use spawn::{SpawnParams, SpawnReport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwarmParams {
    pub capacity: usize,
    pub memory_capacity: usize,
    /// Tiles per tick.
    pub step: f32,
    pub catch_radius: f32,
    pub separation: SeparationParams,
    pub spawn: SpawnParams,
}

impl SwarmParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            capacity: config.agent_capacity,
            memory_capacity: config.spawn_memory_capacity,
            step: config.agent_step(),
            catch_radius: config.catch_radius,
            separation: SeparationParams {
                box_extent: config.separation_box,
                radius: config.separation_radius,
                weight: config.separation_weight,
            },
            spawn: SpawnParams {
                ring_radius: config.spawn_ring_radius,
                ring_jitter: config.spawn_ring_jitter,
                ambient_chance: config.ambient_spawn_chance,
                memory_chance: config.memory_spawn_chance,
                max_per_tick: config.max_spawns_per_tick,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwarmReport {
    /// Some agent came within the catch radius this tick.
    pub caught: bool,
    pub separated: u32,
    pub spawns: SpawnReport,
}

pub struct SwarmSimulator {
    params: SwarmParams,
    pool: AgentPool,
    memory: SpawnMemory,
}

impl SwarmSimulator {
    pub fn new(params: SwarmParams) -> Self {
        Self {
            pool: AgentPool::new(params.capacity),
            memory: SpawnMemory::new(params.memory_capacity),
            params,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(SwarmParams::from_config(config))
    }

    pub fn pool(&self) -> &AgentPool {
        &self.pool
    }

    pub fn memory(&self) -> &SpawnMemory {
        &self.memory
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn positions(&self) -> impl Iterator<Item = WorldPosition> + '_ {
        self.pool.iter().map(|(_, p)| p)
    }

    /// Place an agent directly; `None` when the pool is full.
    pub fn spawn_at(&mut self, position: WorldPosition) -> Option<usize> {
        self.pool.spawn_at(position)
    }

    /// Advance one tick toward `observer`.
    pub fn advance<R: Rng + ?Sized>(&mut self, observer: WorldPosition, rng: &mut R) -> SwarmReport {
        movement::move_agents(self.pool.slots_mut(), observer, self.params.step);

        let catch = self.params.catch_radius;
        let caught = self.pool.iter().any(|(_, p)| p.distance(observer) < catch);

        let separated = separation::separate(self.pool.slots_mut(), self.params.separation);
        let spawns = spawn::spawn_wave(&mut self.pool, &mut self.memory, observer, &self.params.spawn, rng);

        if spawns.spawned() > 0 || spawns.dropped > 0 {
            trace!(
                "swarm: +{} ambient +{} memory, {} dropped, {} active",
                spawns.ambient,
                spawns.memory,
                spawns.dropped,
                self.pool.active_count()
            );
        }

        SwarmReport {
            caught,
            separated,
            spawns,
        }
    }

    /// Active agents within `range` of `origin` (inclusive).
    pub fn agents_within(&self, origin: WorldPosition, range: f32) -> Vec<(usize, WorldPosition)> {
        self.pool
            .iter()
            .filter(|(_, p)| p.distance(origin) <= range)
            .collect()
    }

    /// Retire an agent and remember where it fell.
    pub fn kill(&mut self, index: usize) -> Option<WorldPosition> {
        let site = self.pool.despawn(index)?;
        self.memory.record(site);
        Some(site)
    }

    pub fn clear(&mut self) {
        self.pool.clear();
        self.memory.clear();
    }
}
