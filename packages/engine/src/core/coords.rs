//! Coordinate mapping - continuous world positions to (chunk, local tile).
//!
//! Both axes use the same floor rule, so negative positions land in the
//! chunk to their left/top: x = -0.5 is tile -1, which is local tile 127 of
//! chunk -1.

use serde::{Deserialize, Serialize};

use super::math::WorldPosition;

/// Tiles per chunk edge.
pub const CHUNK_SIZE: i32 = 128;

/// Tiles per chunk.
pub const CHUNK_TILES: usize = (CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Integer address of a chunk in the unbounded grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// World position of the chunk's top-left tile corner.
    pub fn origin(&self) -> WorldPosition {
        WorldPosition::new(
            (self.x as f32) * CHUNK_SIZE as f32,
            (self.y as f32) * CHUNK_SIZE as f32,
        )
    }
}

/// Tile address inside a chunk, both components in `0..CHUNK_SIZE`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalTile {
    pub x: u32,
    pub y: u32,
}

impl LocalTile {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Row-major index into a chunk's tile array.
    #[inline]
    pub fn index(&self) -> usize {
        (self.y as usize) * (CHUNK_SIZE as usize) + self.x as usize
    }
}

/// Integer tile column/row containing `v` (floor, not truncation).
#[inline]
pub fn tile_index(v: f32) -> i32 {
    v.floor() as i32
}

/// Split a world position into its chunk and the tile inside that chunk.
#[inline]
pub fn to_chunk_and_local(pos: WorldPosition) -> (ChunkCoord, LocalTile) {
    let tx = tile_index(pos.x);
    let ty = tile_index(pos.y);
    let chunk = ChunkCoord::new(tx.div_euclid(CHUNK_SIZE), ty.div_euclid(CHUNK_SIZE));
    let local = LocalTile::new(
        tx.rem_euclid(CHUNK_SIZE) as u32,
        ty.rem_euclid(CHUNK_SIZE) as u32,
    );
    (chunk, local)
}

#[inline]
pub fn chunk_of(pos: WorldPosition) -> ChunkCoord {
    to_chunk_and_local(pos).0
}
