//! Chunk residency - which chunks are live, which are parked in the cache.

pub mod store;
pub mod window;

pub use store::ChunkStore;
pub use window::{ActiveWindow, Axis, ChunkLoad, ChunkSource, Facing, ShiftEvent, ShiftEvents};
