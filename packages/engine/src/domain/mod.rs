//! Domain types: tiles, chunks, the observer and startup configuration.

pub mod chunk;
pub mod config;
pub mod observer;
pub mod tile;

pub use chunk::Chunk;
pub use config::SimulationConfig;
pub use observer::Observer;
pub use tile::Tile;
