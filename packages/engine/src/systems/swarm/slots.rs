//! Fixed-capacity agent storage addressed by stable slot indices.

use crate::core::math::WorldPosition;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AgentSlot {
    #[default]
    Empty,
    Active { position: WorldPosition },
}

impl AgentSlot {
    #[inline]
    pub fn position(&self) -> Option<WorldPosition> {
        match self {
            AgentSlot::Active { position } => Some(*position),
            AgentSlot::Empty => None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, AgentSlot::Active { .. })
    }
}

/// Agent arena. The slot count never changes after construction; a full
/// pool drops spawn requests instead of growing.
#[derive(Debug)]
pub struct AgentPool {
    slots: Vec<AgentSlot>,
    active: usize,
}

impl AgentPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![AgentSlot::Empty; capacity],
            active: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn is_full(&self) -> bool {
        self.active >= self.slots.len()
    }

    /// Callers may move agents but must not change occupancy.
    pub(super) fn slots_mut(&mut self) -> &mut [AgentSlot] {
        &mut self.slots
    }

    pub fn get(&self, index: usize) -> Option<WorldPosition> {
        self.slots.get(index).and_then(AgentSlot::position)
    }

    /// Active agents with their slot index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, WorldPosition)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.position().map(|p| (index, p)))
    }

    /// Place an agent in the first empty slot; `None` when full.
    pub fn spawn_at(&mut self, position: WorldPosition) -> Option<usize> {
        let index = self.slots.iter().position(|slot| !slot.is_active())?;
        self.slots[index] = AgentSlot::Active { position };
        self.active += 1;
        Some(index)
    }

    /// Free a slot, returning where the agent stood.
    pub fn despawn(&mut self, index: usize) -> Option<WorldPosition> {
        let slot = self.slots.get_mut(index)?;
        let position = slot.position()?;
        *slot = AgentSlot::Empty;
        self.active -= 1;
        Some(position)
    }

    pub fn clear(&mut self) {
        self.slots.fill(AgentSlot::Empty);
        self.active = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    #[test]
    fn origin_is_a_valid_agent_position() {
        let mut pool = AgentPool::new(2);
        let index = pool.spawn_at(Vec2::ZERO).unwrap();
        assert_eq!(pool.get(index), Some(Vec2::ZERO));
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn spawns_fill_first_free_slot() {
        let mut pool = AgentPool::new(3);
        pool.spawn_at(Vec2::new(1.0, 0.0));
        pool.spawn_at(Vec2::new(2.0, 0.0));
        pool.spawn_at(Vec2::new(3.0, 0.0));
        assert_eq!(pool.despawn(1), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(pool.spawn_at(Vec2::new(9.0, 9.0)), Some(1));
    }

    #[test]
    fn full_pool_rejects_without_touching_agents() {
        let mut pool = AgentPool::new(2);
        pool.spawn_at(Vec2::new(1.0, 1.0));
        pool.spawn_at(Vec2::new(2.0, 2.0));
        assert!(pool.is_full());
        assert_eq!(pool.spawn_at(Vec2::new(5.0, 5.0)), None);
        let positions: Vec<_> = pool.iter().map(|(_, p)| p).collect();
        assert_eq!(positions, vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
    }

    #[test]
    fn despawning_an_empty_slot_is_a_no_op() {
        let mut pool = AgentPool::new(2);
        assert_eq!(pool.despawn(0), None);
        assert_eq!(pool.despawn(7), None);
        assert_eq!(pool.active_count(), 0);
    }
}
