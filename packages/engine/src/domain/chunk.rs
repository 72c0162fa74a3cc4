use crate::core::coords::{ChunkCoord, LocalTile, CHUNK_TILES};

use super::tile::Tile;

/// 128x128 tiles owned by exactly one of the cache or the active window.
///
/// Deliberately not `Clone`: chunks move between owners, they are never copied.
#[derive(Debug, PartialEq, Eq)]
pub struct Chunk {
    coord: ChunkCoord,
    tiles: Vec<Tile>,
}

impl Chunk {
    /// All-open chunk; first visits to any region start here.
    pub fn empty(coord: ChunkCoord) -> Self {
        Self {
            coord,
            tiles: vec![Tile::Open; CHUNK_TILES],
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn tile(&self, local: LocalTile) -> Tile {
        self.tiles[local.index()]
    }

    #[inline]
    pub fn set_tile(&mut self, local: LocalTile, tile: Tile) {
        self.tiles[local.index()] = tile;
    }

    /// Row-major tile data.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_solid()).count()
    }

    /// Row-major tile tags as bytes (for the renderer).
    pub fn tile_bytes(&self) -> Vec<u8> {
        self.tiles.iter().map(|t| t.as_u8()).collect()
    }
}
