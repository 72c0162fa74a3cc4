//! World simulation - the owned context the tick pipeline runs against.
//!
//! `WorldCore` holds every piece of mutable state (window, cache, observer,
//! swarm, attack, RNG) and is passed by `&mut` through the pipeline in
//! `step/step.rs`. The wasm-facing `World` in `facade.rs` wraps it.

use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

use crate::core::error::{ConfigError, WorldError};
use crate::core::math::{Vec2, WorldPosition};
use crate::domain::{Observer, SimulationConfig, Tile};
use crate::spatial::chunks::{ActiveWindow, ChunkStore, ShiftEvents};
use crate::systems::{AttackOutcome, AttackResolver, CollisionResolver, Resolution, SwarmReport, SwarmSimulator};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::TickStats;
pub use random::VARIATION_LEVELS;

use perf_timer::PerfTimer;

/// Top-level game state.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameScreen {
    Start = 0,
    Playing = 1,
    GameOver = 2,
}

/// Per-tick input supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Movement intent; longer than one is clamped to unit length.
    pub movement: Vec2,
    /// Aim direction relative to the observer.
    pub aim: Vec2,
    pub attack: bool,
}

/// What one tick did. Default (all empty) when the tick was skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub advanced: bool,
    pub resolution: Option<Resolution>,
    pub shifts: ShiftEvents,
    pub swarm: SwarmReport,
    pub attack: Option<AttackOutcome>,
    pub defeated: bool,
}

/// The simulation world
pub struct WorldCore {
    config: SimulationConfig,
    store: ChunkStore,
    window: ActiveWindow,
    observer: Observer,
    swarm: SwarmSimulator,
    attack: AttackResolver,
    collision: CollisionResolver,
    rng: SmallRng,
    /// Render-only shade per local tile.
    variation: Vec<u8>,

    // State
    screen: GameScreen,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: TickStats,
}

impl WorldCore {
    /// World with the default configuration.
    pub fn new() -> Self {
        init::create_world_core(SimulationConfig::default())
    }

    /// World with a caller-supplied configuration, validated first.
    pub fn with_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        Self::with_config(SimulationConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimulationConfig {
        settings::config(self)
    }

    pub fn screen(&self) -> GameScreen { self.screen }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn observer(&self) -> &Observer { &self.observer }

    pub fn window(&self) -> &ActiveWindow { &self.window }

    pub fn store(&self) -> &ChunkStore { &self.store }

    pub fn swarm(&self) -> &SwarmSimulator { &self.swarm }

    pub fn attack(&self) -> &AttackResolver { &self.attack }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    pub fn start(&mut self) {
        commands::start(self)
    }

    pub fn toggle_pause(&mut self) {
        commands::toggle_pause(self)
    }

    /// Back to the initial state, same config and seed.
    pub fn reset(&mut self) {
        init::reset_world_core(self)
    }

    /// Turn the tile at `position` solid.
    pub fn place_obstacle(&mut self, position: WorldPosition) -> Result<(), WorldError> {
        commands::place_obstacle(self, position)
    }

    /// Move the observer without collision; the window follows next tick.
    pub fn teleport_observer(&mut self, position: WorldPosition) -> ShiftEvents {
        commands::teleport_observer(self, position)
    }

    /// Add an agent directly, bypassing the spawn gates.
    pub fn spawn_agent(&mut self, position: WorldPosition) -> Option<usize> {
        commands::spawn_agent(self, position)
    }

    /// Step the simulation forward one tick. No-op unless playing.
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        step::step(self, input)
    }

    // === Read access for the renderer ===

    pub fn tile_at(&self, position: WorldPosition) -> Option<Tile> {
        self.window.tile_at(position)
    }

    /// Flat `[x0, y0, x1, y1, ...]` of active agents.
    pub fn agent_positions(&self) -> Vec<f32> {
        render_extract::agent_positions(self)
    }

    /// Flat `[cx0, cy0, ...]` of resident chunks, in slot order.
    pub fn resident_chunks(&self) -> Vec<i32> {
        render_extract::resident_chunks(self)
    }

    /// Tile bytes of resident slot `slot` (row-major, 0 open, 1 solid).
    pub fn chunk_tiles(&self, slot: usize) -> Option<Vec<u8>> {
        render_extract::chunk_tiles(self, slot)
    }

    pub fn variation(&self) -> &[u8] {
        &self.variation
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
