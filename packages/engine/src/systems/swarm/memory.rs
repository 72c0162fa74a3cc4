use std::collections::VecDeque;

use crate::core::math::WorldPosition;

/// Recently vacated kill sites, oldest first. Recording into a full memory
/// overwrites the oldest site.
#[derive(Debug)]
pub struct SpawnMemory {
    sites: VecDeque<WorldPosition>,
    capacity: usize,
}

impl SpawnMemory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            sites: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn record(&mut self, site: WorldPosition) {
        if self.sites.len() == self.capacity {
            self.sites.pop_front();
        }
        self.sites.push_back(site);
    }

    pub fn take_oldest(&mut self) -> Option<WorldPosition> {
        self.sites.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldPosition> + '_ {
        self.sites.iter()
    }

    pub fn clear(&mut self) {
        self.sites.clear();
    }
}
