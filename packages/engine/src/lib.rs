//! Horde Engine - chunk streaming and swarm simulation in WASM
//!
//! An unbounded tile world is paged through four resident chunks while a
//! swarm of agents chases the observer.
//!
//! Architecture:
//! - core/       - Vector math, coordinate mapping, errors, logging
//! - domain/     - Tiles, chunks, observer, configuration
//! - spatial/    - Chunk cache and the active window
//! - systems/    - Collision, swarm and attack
//! - simulation/ - WorldCore tick pipeline and the wasm facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logger(log::LevelFilter::Info);
    log::info!("horde engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Tiles per chunk edge
#[wasm_bindgen]
pub fn chunk_size() -> i32 {
    crate::core::coords::CHUNK_SIZE
}

// Re-export main types
pub use crate::core::math::{Vec2, WorldPosition};
pub use domain::{SimulationConfig, Tile};
pub use simulation::{GameScreen, TickInput, TickReport, TickStats, World, WorldCore};
