//! Cone attack: kills agents in range and inside the aim arc, petrifying
//! the tile each one stood on.

use log::{trace, warn};

use crate::core::math::{Vec2, WorldPosition};
use crate::domain::{SimulationConfig, Tile};
use crate::spatial::chunks::ActiveWindow;

use super::swarm::SwarmSimulator;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttackOutcome {
    /// Where each killed agent stood.
    pub kills: Vec<WorldPosition>,
}

#[derive(Clone, Debug)]
pub struct AttackResolver {
    range: f32,
    half_angle: f32,
    recharge: f32,
    elapsed: f32,
}

impl AttackResolver {
    /// Starts fully charged.
    pub fn new(range: f32, half_angle: f32, recharge: f32) -> Self {
        Self {
            range,
            half_angle,
            recharge,
            elapsed: recharge,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.attack_range, config.attack_half_angle(), config.attack_cooldown)
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    pub fn recharge(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.recharge);
    }

    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.recharge
    }

    /// Seconds until the next trigger is accepted.
    pub fn remaining(&self) -> f32 {
        (self.recharge - self.elapsed).max(0.0)
    }

    /// Put the attack back to fully charged.
    pub fn reset(&mut self) {
        self.elapsed = self.recharge;
    }

    /// Inclusive range and arc test for a single target.
    pub fn in_arc(&self, origin: WorldPosition, aim: Vec2, target: WorldPosition) -> bool {
        let to_target = target - origin;
        if to_target.length() > self.range {
            return false;
        }
        match aim.angle_to(to_target) {
            Some(angle) => angle.abs() <= self.half_angle,
            None => false,
        }
    }

    /// Fire if charged. Returns `None` while recharging, otherwise the kills
    /// (possibly none); the cooldown restarts either way.
    pub fn trigger(
        &mut self,
        origin: WorldPosition,
        aim: Vec2,
        swarm: &mut SwarmSimulator,
        window: &mut ActiveWindow,
    ) -> Option<AttackOutcome> {
        if !self.is_ready() {
            return None;
        }
        self.elapsed = 0.0;

        let targets: Vec<usize> = swarm
            .agents_within(origin, self.range)
            .into_iter()
            .filter(|&(_, p)| self.in_arc(origin, aim, p))
            .map(|(index, _)| index)
            .collect();

        let mut outcome = AttackOutcome::default();
        for index in targets {
            let Some(site) = swarm.kill(index) else {
                continue;
            };
            if let Err(err) = window.set_tile(site, Tile::Solid) {
                warn!("attack: kill site ({:.2}, {:.2}) not petrified: {err}", site.x, site.y);
            }
            outcome.kills.push(site);
        }
        trace!("attack: {} kills", outcome.kills.len());
        Some(outcome)
    }
}
