//! Spatial streaming: the chunk cache and the 2x2 active window.

pub mod chunks;

pub use chunks::{ActiveWindow, ChunkStore, ShiftEvent, ShiftEvents};
