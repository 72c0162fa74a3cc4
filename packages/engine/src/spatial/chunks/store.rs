//! Chunk cache - bounded pool of non-resident chunks.
//!
//! Every insert ages all occupied slots by one, then writes into the oldest
//! slot. Empty slots rank as older than any real data, so real chunks are
//! only evicted once every slot is occupied. Ties go to the lowest index.

use log::debug;

use crate::core::coords::ChunkCoord;
use crate::domain::Chunk;

#[derive(Debug)]
enum CacheSlot {
    Empty,
    Occupied { chunk: Chunk, age: u32 },
}

impl CacheSlot {
    /// Eviction rank: higher is evicted first.
    #[inline]
    fn rank(&self) -> u64 {
        match self {
            CacheSlot::Empty => u64::MAX,
            CacheSlot::Occupied { age, .. } => *age as u64,
        }
    }

    #[inline]
    fn coord(&self) -> Option<ChunkCoord> {
        match self {
            CacheSlot::Empty => None,
            CacheSlot::Occupied { chunk, .. } => Some(chunk.coord()),
        }
    }
}

pub struct ChunkStore {
    slots: Vec<CacheSlot>,
}

impl ChunkStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| CacheSlot::Empty).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a chunk.
    pub fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, CacheSlot::Occupied { .. }))
            .count()
    }

    /// Slot holding `coord`, if cached.
    pub fn find(&self, coord: ChunkCoord) -> Option<usize> {
        self.slots.iter().position(|s| s.coord() == Some(coord))
    }

    /// Age of an occupied slot; `None` for empty or out-of-range slots.
    pub fn age(&self, slot: usize) -> Option<u32> {
        match self.slots.get(slot)? {
            CacheSlot::Empty => None,
            CacheSlot::Occupied { age, .. } => Some(*age),
        }
    }

    /// Coordinates of every cached chunk, in slot order.
    pub fn cached_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.slots.iter().filter_map(CacheSlot::coord)
    }

    /// Store `chunk`, evicting the oldest slot. Never fails.
    pub fn insert_evicting(&mut self, chunk: Chunk) -> usize {
        debug_assert!(
            self.find(chunk.coord()).is_none(),
            "chunk {:?} cached twice",
            chunk.coord()
        );

        for slot in &mut self.slots {
            if let CacheSlot::Occupied { age, .. } = slot {
                *age = age.saturating_add(1);
            }
        }

        let target = self.oldest_slot();
        let coord = chunk.coord();
        let previous = std::mem::replace(&mut self.slots[target], CacheSlot::Occupied { chunk, age: 0 });
        match previous {
            CacheSlot::Occupied { chunk: evicted, age } => debug!(
                "cache: chunk ({}, {}) replaced ({}, {}) in slot {} (age {})",
                coord.x,
                coord.y,
                evicted.coord().x,
                evicted.coord().y,
                target,
                age
            ),
            CacheSlot::Empty => debug!("cache: chunk ({}, {}) saved to slot {}", coord.x, coord.y, target),
        }
        target
    }

    /// Take `coord` back out of the cache, leaving its slot empty.
    pub fn reclaim(&mut self, coord: ChunkCoord) -> Option<Chunk> {
        let slot = self.find(coord)?;
        match std::mem::replace(&mut self.slots[slot], CacheSlot::Empty) {
            CacheSlot::Occupied { chunk, .. } => {
                debug!("cache: chunk ({}, {}) reclaimed from slot {}", coord.x, coord.y, slot);
                Some(chunk)
            }
            CacheSlot::Empty => None,
        }
    }

    /// Drop every cached chunk.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = CacheSlot::Empty);
    }

    fn oldest_slot(&self) -> usize {
        let mut oldest = 0;
        let mut oldest_rank = self.slots[0].rank();
        for (idx, slot) in self.slots.iter().enumerate().skip(1) {
            let rank = slot.rank();
            if rank > oldest_rank {
                oldest = idx;
                oldest_rank = rank;
            }
        }
        oldest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coords::LocalTile;
    use crate::domain::Tile;

    fn patterned(coord: ChunkCoord) -> Chunk {
        let mut chunk = Chunk::empty(coord);
        for i in 0..40u32 {
            chunk.set_tile(LocalTile::new((i * 7) % 128, (i * 13) % 128), Tile::Solid);
        }
        chunk
    }

    #[test]
    fn reclaim_returns_identical_tiles() {
        let coord = ChunkCoord::new(-4, 9);
        let mut store = ChunkStore::new(25);
        store.insert_evicting(patterned(coord));

        let back = store.reclaim(coord).expect("chunk should still be cached");
        assert_eq!(back, patterned(coord));
        assert_eq!(store.find(coord), None);
        assert_eq!(store.occupied(), 0);
    }

    #[test]
    fn fills_distinct_slots_before_evicting() {
        let mut store = ChunkStore::new(25);
        let mut used = Vec::new();
        for i in 0..25 {
            used.push(store.insert_evicting(Chunk::empty(ChunkCoord::new(i, 0))));
        }
        used.sort_unstable();
        used.dedup();
        assert_eq!(used.len(), 25);
        assert_eq!(store.occupied(), 25);
    }

    #[test]
    fn full_cache_evicts_the_oldest_chunk() {
        let mut store = ChunkStore::new(25);
        for i in 0..25 {
            store.insert_evicting(Chunk::empty(ChunkCoord::new(i, 0)));
        }
        assert_eq!(store.age(0), Some(24));
        assert_eq!(store.age(24), Some(0));

        let slot = store.insert_evicting(Chunk::empty(ChunkCoord::new(99, 99)));
        assert_eq!(slot, 0);
        assert_eq!(store.find(ChunkCoord::new(0, 0)), None);
        assert_eq!(store.find(ChunkCoord::new(99, 99)), Some(0));
        assert_eq!(store.age(1), Some(24));
    }

    #[test]
    fn reclaimed_slot_is_reused_before_any_eviction() {
        let mut store = ChunkStore::new(25);
        for i in 0..25 {
            store.insert_evicting(Chunk::empty(ChunkCoord::new(i, 0)));
        }
        assert!(store.reclaim(ChunkCoord::new(12, 0)).is_some());

        let slot = store.insert_evicting(Chunk::empty(ChunkCoord::new(-1, -1)));
        assert_eq!(slot, 12);
        assert_eq!(store.occupied(), 25);
        assert!(store.find(ChunkCoord::new(0, 0)).is_some());
    }

    #[test]
    fn equal_ages_break_toward_lowest_slot() {
        let mut store = ChunkStore::new(3);
        for i in 0..3 {
            store.insert_evicting(Chunk::empty(ChunkCoord::new(i, 0)));
        }
        store.reclaim(ChunkCoord::new(0, 0));
        store.reclaim(ChunkCoord::new(1, 0));
        // Two empty slots: the lower index wins.
        assert_eq!(store.insert_evicting(Chunk::empty(ChunkCoord::new(5, 5))), 0);
        assert_eq!(store.insert_evicting(Chunk::empty(ChunkCoord::new(6, 6))), 1);
    }

    #[test]
    fn miss_is_not_an_error() {
        let mut store = ChunkStore::new(4);
        assert!(store.reclaim(ChunkCoord::new(1, 1)).is_none());
        assert_eq!(store.find(ChunkCoord::new(1, 1)), None);
    }
}
