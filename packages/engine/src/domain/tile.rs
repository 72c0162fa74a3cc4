use serde::{Deserialize, Serialize};

/// Per-tile state. `Open` is zero so a fresh chunk is all open ground.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Open = 0,
    Solid = 1,
}

impl Tile {
    #[inline]
    pub fn is_solid(self) -> bool {
        self == Tile::Solid
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
