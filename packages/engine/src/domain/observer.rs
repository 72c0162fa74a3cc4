use crate::core::math::{Vec2, WorldPosition};

use super::config::SimulationConfig;

/// The player: position, facing and bookkeeping counters.
#[derive(Clone, Debug, PartialEq)]
pub struct Observer {
    pub position: WorldPosition,
    /// Last non-zero aim direction (unit length).
    pub facing: Vec2,
    pub kills: u32,
    pub resources: u32,
    pub health: u32,
    pub defeated: bool,
}

impl Observer {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            position: config.start_position,
            facing: Vec2::new(1.0, 0.0),
            kills: 0,
            resources: config.start_resources,
            health: config.start_health,
            defeated: false,
        }
    }

    /// Point the observer along `aim`; a zero aim keeps the previous facing.
    pub fn aim(&mut self, aim: Vec2) {
        if aim.has_direction() && aim.is_finite() {
            self.facing = aim.normalize();
        }
    }

    pub fn record_kills(&mut self, kills: u32, reward: u32) {
        self.kills = self.kills.saturating_add(kills);
        self.resources = self
            .resources
            .saturating_add(kills.saturating_mul(reward));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_aim_keeps_facing() {
        let mut observer = Observer::new(&SimulationConfig::default());
        observer.aim(Vec2::new(0.0, -4.0));
        assert_eq!(observer.facing, Vec2::new(0.0, -1.0));
        observer.aim(Vec2::ZERO);
        assert_eq!(observer.facing, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn kills_pay_out_resources() {
        let mut observer = Observer::new(&SimulationConfig::default());
        let start = observer.resources;
        observer.record_kills(3, 2);
        assert_eq!(observer.kills, 3);
        assert_eq!(observer.resources, start + 6);
    }
}
