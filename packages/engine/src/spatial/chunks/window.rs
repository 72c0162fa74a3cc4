//! Active window - the four resident chunks around the observer.
//!
//! The window is always a 2x2 block of chunks. Per axis, a `Facing` records
//! on which side of the observer's chunk the second resident column (or row)
//! lies. Once the observer is within `margin / 2` tiles of the edge with no
//! resident neighbour, the trailing pair moves into the cache and the pair
//! ahead is reclaimed from it (or synthesized all-open).
//!
//! After a shift the observer sits more than `margin / 2` tiles from the new
//! trigger on the opposite side, so the next tick cannot undo it.

use log::{debug, warn};

use crate::core::coords::{to_chunk_and_local, ChunkCoord, LocalTile, CHUNK_SIZE};
use crate::core::error::WorldError;
use crate::core::math::WorldPosition;
use crate::domain::{Chunk, Tile};

use super::store::ChunkStore;

/// Which side of the observer's chunk holds the other resident column/row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Negative,
    Positive,
}

impl Facing {
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Facing::Negative => -1,
            Facing::Positive => 1,
        }
    }

    /// The side closer to a local tile offset.
    fn nearer(offset: u32) -> Self {
        if (offset as i32) < CHUNK_SIZE / 2 {
            Facing::Negative
        } else {
            Facing::Positive
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, coord: ChunkCoord) -> i32 {
        match self {
            Axis::X => coord.x,
            Axis::Y => coord.y,
        }
    }

    #[inline]
    fn with(self, coord: ChunkCoord, value: i32) -> ChunkCoord {
        match self {
            Axis::X => ChunkCoord::new(value, coord.y),
            Axis::Y => ChunkCoord::new(coord.x, value),
        }
    }

    #[inline]
    fn local(self, local: LocalTile) -> i32 {
        match self {
            Axis::X => local.x as i32,
            Axis::Y => local.y as i32,
        }
    }
}

/// Where a newly resident chunk came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkSource {
    Reclaimed,
    Synthesized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkLoad {
    pub coord: ChunkCoord,
    pub source: ChunkSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShiftEvent {
    /// Trailing pair cached, leading pair loaded.
    Shift {
        axis: Axis,
        toward: Facing,
        evicted: [ChunkCoord; 2],
        loaded: [ChunkLoad; 2],
    },
    /// The observer left the block entirely; every non-overlapping chunk was replaced.
    Recenter {
        evicted: Vec<ChunkCoord>,
        loaded: Vec<ChunkLoad>,
    },
}

pub type ShiftEvents = Vec<ShiftEvent>;

pub struct ActiveWindow {
    /// Always four chunks; order is by load slot, not by position.
    chunks: Vec<Chunk>,
    facing_x: Facing,
    facing_y: Facing,
    margin: i32,
}

impl ActiveWindow {
    pub const RESIDENT: usize = 4;

    /// Fresh all-open window whose second column/row lies on the side of
    /// the observer's chunk nearer to `position`.
    pub fn around(position: WorldPosition, margin: u32) -> Self {
        let (chunk, local) = to_chunk_and_local(position);
        let facing_x = Facing::nearer(local.x);
        let facing_y = Facing::nearer(local.y);
        let chunks = block_coords(block_origin(chunk, facing_x, facing_y))
            .into_iter()
            .map(Chunk::empty)
            .collect();
        Self {
            chunks,
            facing_x,
            facing_y,
            margin: margin as i32,
        }
    }

    // === Read access ===

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn coords(&self) -> [ChunkCoord; 4] {
        [
            self.chunks[0].coord(),
            self.chunks[1].coord(),
            self.chunks[2].coord(),
            self.chunks[3].coord(),
        ]
    }

    pub fn facing_x(&self) -> Facing {
        self.facing_x
    }

    pub fn facing_y(&self) -> Facing {
        self.facing_y
    }

    pub fn slot_of(&self, coord: ChunkCoord) -> Option<usize> {
        self.chunks.iter().position(|c| c.coord() == coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.slot_of(coord).is_some()
    }

    /// North-west chunk of the block.
    pub fn min_corner(&self) -> ChunkCoord {
        let x = self.chunks.iter().map(|c| c.coord().x).min().unwrap_or_default();
        let y = self.chunks.iter().map(|c| c.coord().y).min().unwrap_or_default();
        ChunkCoord::new(x, y)
    }

    /// Four distinct coordinates forming a 2x2 block.
    pub fn is_contiguous(&self) -> bool {
        self.chunks.len() == Self::RESIDENT
            && block_coords(self.min_corner())
                .iter()
                .all(|expected| self.contains(*expected))
    }

    // === Tile access ===

    /// Tile at a world position, `None` outside the resident block.
    pub fn tile_at(&self, position: WorldPosition) -> Option<Tile> {
        let (chunk, local) = to_chunk_and_local(position);
        self.slot_of(chunk).map(|slot| self.chunks[slot].tile(local))
    }

    /// Tile lookup for gameplay queries.
    ///
    /// # Panics
    ///
    /// Panics when `position` is outside the resident block. Callers keep
    /// their queries within `margin / 2` tiles of the observer, which the
    /// shift protocol keeps resident.
    pub fn probe(&self, position: WorldPosition) -> Tile {
        match self.tile_at(position) {
            Some(tile) => tile,
            None => {
                let (chunk, _) = to_chunk_and_local(position);
                panic!(
                    "tile probe at ({}, {}) falls in chunk ({}, {}) outside the active window",
                    position.x, position.y, chunk.x, chunk.y
                );
            }
        }
    }

    pub fn set_tile(&mut self, position: WorldPosition, tile: Tile) -> Result<(), WorldError> {
        let (chunk, local) = to_chunk_and_local(position);
        let slot = self
            .slot_of(chunk)
            .ok_or(WorldError::OutsideWindow { coord: chunk })?;
        self.chunks[slot].set_tile(local, tile);
        Ok(())
    }

    // === Shift protocol ===

    /// Re-evaluate the window after the observer moved; shifts X then Y.
    pub fn on_observer_moved(&mut self, position: WorldPosition, store: &mut ChunkStore) -> ShiftEvents {
        let (chunk, local) = to_chunk_and_local(position);
        let mut events = ShiftEvents::new();

        if !self.contains(chunk) {
            events.push(self.recenter(position, store));
            return events;
        }

        self.refresh_facing(chunk);
        for axis in [Axis::X, Axis::Y] {
            if let Some(toward) = self.pending_shift(axis, local) {
                events.push(self.shift(axis, toward, chunk, store));
            }
        }

        debug_assert!(self.is_contiguous(), "window lost contiguity: {:?}", self.coords());
        events
    }

    /// Rebuild the block around `position`, keeping any chunks that overlap.
    pub fn recenter(&mut self, position: WorldPosition, store: &mut ChunkStore) -> ShiftEvent {
        let (chunk, local) = to_chunk_and_local(position);
        let facing_x = Facing::nearer(local.x);
        let facing_y = Facing::nearer(local.y);
        let targets = block_coords(block_origin(chunk, facing_x, facing_y));

        let mut previous: Vec<Option<Chunk>> =
            std::mem::take(&mut self.chunks).into_iter().map(Some).collect();
        let mut next = Vec::with_capacity(Self::RESIDENT);
        let mut loaded = Vec::new();
        for target in targets {
            let kept = previous
                .iter_mut()
                .find(|c| c.as_ref().map(Chunk::coord) == Some(target))
                .and_then(Option::take);
            match kept {
                Some(chunk) => next.push(chunk),
                None => {
                    let (chunk, source) = load_chunk(store, target);
                    loaded.push(ChunkLoad { coord: target, source });
                    next.push(chunk);
                }
            }
        }

        let mut evicted = Vec::new();
        for chunk in previous.into_iter().flatten() {
            evicted.push(chunk.coord());
            store.insert_evicting(chunk);
        }

        self.chunks = next;
        self.facing_x = facing_x;
        self.facing_y = facing_y;
        warn!(
            "window: observer outside resident block, recentred on chunk ({}, {})",
            chunk.x, chunk.y
        );
        ShiftEvent::Recenter { evicted, loaded }
    }

    fn facing(&self, axis: Axis) -> Facing {
        match axis {
            Axis::X => self.facing_x,
            Axis::Y => self.facing_y,
        }
    }

    fn set_facing(&mut self, axis: Axis, facing: Facing) {
        match axis {
            Axis::X => self.facing_x = facing,
            Axis::Y => self.facing_y = facing,
        }
    }

    /// Facing follows the observer when it walks into the other column/row.
    fn refresh_facing(&mut self, chunk: ChunkCoord) {
        let min = self.min_corner();
        self.facing_x = if chunk.x == min.x { Facing::Positive } else { Facing::Negative };
        self.facing_y = if chunk.y == min.y { Facing::Positive } else { Facing::Negative };
    }

    fn pending_shift(&self, axis: Axis, local: LocalTile) -> Option<Facing> {
        let offset = axis.local(local);
        let half = self.margin / 2;
        match self.facing(axis) {
            Facing::Negative if offset > CHUNK_SIZE - half => Some(Facing::Positive),
            Facing::Positive if offset < half => Some(Facing::Negative),
            _ => None,
        }
    }

    fn shift(&mut self, axis: Axis, toward: Facing, chunk: ChunkCoord, store: &mut ChunkStore) -> ShiftEvent {
        let trailing = axis.of(chunk) - toward.step();
        let leading = axis.of(chunk) + toward.step();
        let slots = self.slots_on(axis, trailing);

        // Reclaim before caching the trailing pair so the insert cannot evict them.
        let [first_in, second_in] =
            slots.map(|slot| load_chunk(store, axis.with(self.chunks[slot].coord(), leading)));
        let (first_out, first_load) = self.swap_in(slots[0], first_in, store);
        let (second_out, second_load) = self.swap_in(slots[1], second_in, store);
        self.set_facing(axis, toward);

        debug!(
            "window: shift {:?} {:?} evicted {:?} loaded {:?}",
            axis,
            toward,
            [first_out, second_out],
            [first_load, second_load]
        );
        ShiftEvent::Shift {
            axis,
            toward,
            evicted: [first_out, second_out],
            loaded: [first_load, second_load],
        }
    }

    fn slots_on(&self, axis: Axis, value: i32) -> [usize; 2] {
        let mut found = [0usize; 2];
        let mut count = 0;
        for (slot, chunk) in self.chunks.iter().enumerate() {
            if axis.of(chunk.coord()) == value && count < 2 {
                found[count] = slot;
                count += 1;
            }
        }
        debug_assert_eq!(count, 2, "expected a resident pair at {axis:?} = {value}");
        found
    }

    fn swap_in(
        &mut self,
        slot: usize,
        (incoming, source): (Chunk, ChunkSource),
        store: &mut ChunkStore,
    ) -> (ChunkCoord, ChunkLoad) {
        let load = ChunkLoad {
            coord: incoming.coord(),
            source,
        };
        let outgoing = std::mem::replace(&mut self.chunks[slot], incoming);
        let evicted = outgoing.coord();
        store.insert_evicting(outgoing);
        (evicted, load)
    }
}

fn load_chunk(store: &mut ChunkStore, coord: ChunkCoord) -> (Chunk, ChunkSource) {
    match store.reclaim(coord) {
        Some(chunk) => (chunk, ChunkSource::Reclaimed),
        None => {
            debug!("window: chunk ({}, {}) not cached, starting empty", coord.x, coord.y);
            (Chunk::empty(coord), ChunkSource::Synthesized)
        }
    }
}

fn block_origin(chunk: ChunkCoord, facing_x: Facing, facing_y: Facing) -> ChunkCoord {
    let x = if facing_x == Facing::Negative { chunk.x - 1 } else { chunk.x };
    let y = if facing_y == Facing::Negative { chunk.y - 1 } else { chunk.y };
    ChunkCoord::new(x, y)
}

/// West/east by north/south, row by row.
fn block_coords(origin: ChunkCoord) -> [ChunkCoord; 4] {
    [
        origin,
        origin.offset(1, 0),
        origin.offset(0, 1),
        origin.offset(1, 1),
    ]
}
