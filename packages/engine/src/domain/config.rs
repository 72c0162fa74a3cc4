//! Startup configuration. Every constant the tick pipeline relies on lives
//! here; `CHUNK_SIZE` is the only compile-time one.
//!
//! Configs arrive either as `SimulationConfig::default()` or as JSON from the
//! host page. Missing JSON fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::core::coords::CHUNK_SIZE;
use crate::core::error::ConfigError;
use crate::core::math::{Vec2, WorldPosition};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === World streaming ===
    pub cache_capacity: usize,
    /// Hysteresis band in tiles; shifts fire within `shift_margin / 2` of an edge.
    pub shift_margin: u32,

    // === Timing ===
    pub tick_rate: f32,

    // === Observer ===
    pub start_position: WorldPosition,
    pub start_resources: u32,
    pub start_health: u32,
    /// Tiles per second.
    pub observer_speed: f32,
    /// Collision probe inset from the observer's centre.
    pub observer_half_extent: f32,

    // === Swarm ===
    pub agent_capacity: usize,
    /// Tiles per second.
    pub agent_speed: f32,
    pub catch_radius: f32,
    pub separation_box: f32,
    pub separation_radius: f32,
    pub separation_weight: f32,
    pub spawn_ring_radius: f32,
    pub spawn_ring_jitter: f32,
    /// Probability per tick of an ambient ring spawn.
    pub ambient_spawn_chance: f64,
    /// Probability per tick of reusing a remembered kill site.
    pub memory_spawn_chance: f64,
    pub max_spawns_per_tick: usize,
    pub spawn_memory_capacity: usize,

    // === Attack ===
    pub attack_range: f32,
    pub attack_half_angle_deg: f32,
    /// Recharge time in seconds.
    pub attack_cooldown: f32,
    pub kill_reward: u32,

    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 25,
            shift_margin: 50,
            tick_rate: 120.0,
            start_position: Vec2::new(10.0, 10.0),
            start_resources: 50,
            start_health: 100,
            observer_speed: 5.0,
            observer_half_extent: 0.29,
            agent_capacity: 256,
            agent_speed: 4.0,
            catch_radius: 0.5,
            separation_box: 0.15,
            separation_radius: 0.3,
            separation_weight: 2.0,
            spawn_ring_radius: 20.0,
            spawn_ring_jitter: 5.0,
            ambient_spawn_chance: 1.0 / 120.0,
            memory_spawn_chance: 1.0 / 240.0,
            max_spawns_per_tick: 2,
            spawn_memory_capacity: 16,
            attack_range: 3.0,
            attack_half_angle_deg: 45.0,
            attack_cooldown: 0.5,
            kill_reward: 1,
            seed: 69,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Maximum observer displacement per tick, in tiles.
    pub fn observer_step(&self) -> f32 {
        self.observer_speed / self.tick_rate
    }

    /// Agent displacement per tick, in tiles.
    pub fn agent_step(&self) -> f32 {
        self.agent_speed / self.tick_rate
    }

    pub fn attack_half_angle(&self) -> f32 {
        self.attack_half_angle_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::invalid("tick_rate", "must be a positive number"));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::invalid("cache_capacity", "must be at least 1"));
        }
        if self.shift_margin == 0 || self.shift_margin >= CHUNK_SIZE as u32 {
            return Err(ConfigError::invalid(
                "shift_margin",
                format!("must lie within 1..{CHUNK_SIZE}"),
            ));
        }

        // A single tick must never carry the observer through the hysteresis band.
        let band = self.shift_margin as f32 / 4.0;
        let step = self.observer_step();
        if !(step.is_finite() && step >= 0.0) || step >= band {
            return Err(ConfigError::invalid(
                "observer_speed",
                format!("moves {step:.3} tiles per tick, must stay under {band:.3}"),
            ));
        }
        if !(self.observer_half_extent > 0.0 && self.observer_half_extent < 0.5) {
            return Err(ConfigError::invalid("observer_half_extent", "must lie within (0, 0.5)"));
        }
        if !self.start_position.is_finite() {
            return Err(ConfigError::invalid("start_position", "must be finite"));
        }

        if self.agent_capacity == 0 {
            return Err(ConfigError::invalid("agent_capacity", "must be at least 1"));
        }
        if self.spawn_memory_capacity == 0 {
            return Err(ConfigError::invalid("spawn_memory_capacity", "must be at least 1"));
        }
        if !(self.agent_speed.is_finite() && self.agent_speed >= 0.0) {
            return Err(ConfigError::invalid("agent_speed", "must be a non-negative number"));
        }
        if self.agent_step() >= band {
            return Err(ConfigError::invalid(
                "agent_speed",
                format!("moves {:.3} tiles per tick, must stay under {band:.3}", self.agent_step()),
            ));
        }
        for (field, chance) in [
            ("ambient_spawn_chance", self.ambient_spawn_chance),
            ("memory_spawn_chance", self.memory_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::invalid(field, "must lie within [0, 1]"));
            }
        }
        if !(self.spawn_ring_radius >= 0.0 && self.spawn_ring_jitter >= 0.0) {
            return Err(ConfigError::invalid("spawn_ring_radius", "radius and jitter must be non-negative"));
        }

        // Kill sites are petrified, so the attack must stay inside the window.
        let coverage = self.shift_margin as f32 / 2.0;
        if !(self.attack_range > 0.0 && self.attack_range < coverage) {
            return Err(ConfigError::invalid(
                "attack_range",
                format!("must lie within (0, {coverage})"),
            ));
        }
        if !(self.attack_half_angle_deg > 0.0 && self.attack_half_angle_deg <= 180.0) {
            return Err(ConfigError::invalid("attack_half_angle_deg", "must lie within (0, 180]"));
        }
        if !(self.attack_cooldown.is_finite() && self.attack_cooldown >= 0.0) {
            return Err(ConfigError::invalid("attack_cooldown", "must be a non-negative number"));
        }
        Ok(())
    }
}
