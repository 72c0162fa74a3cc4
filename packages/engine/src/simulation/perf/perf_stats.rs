use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) window_ms: f64,
    pub(super) swarm_ms: f64,
    pub(super) attack_ms: f64,
    pub(super) active_agents: u32,
    pub(super) ambient_spawns: u32,
    pub(super) memory_spawns: u32,
    pub(super) dropped_spawns: u32,
    pub(super) separations: u32,
    pub(super) kills: u32,
    pub(super) shifts: u32,
    pub(super) chunks_reclaimed: u32,
    pub(super) chunks_synthesized: u32,
    pub(super) cache_occupancy: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn window_ms(&self) -> f64 { self.window_ms }
    #[wasm_bindgen(getter)]
    pub fn swarm_ms(&self) -> f64 { self.swarm_ms }
    #[wasm_bindgen(getter)]
    pub fn attack_ms(&self) -> f64 { self.attack_ms }
    #[wasm_bindgen(getter)]
    pub fn active_agents(&self) -> u32 { self.active_agents }
    #[wasm_bindgen(getter)]
    pub fn ambient_spawns(&self) -> u32 { self.ambient_spawns }
    #[wasm_bindgen(getter)]
    pub fn memory_spawns(&self) -> u32 { self.memory_spawns }
    #[wasm_bindgen(getter)]
    pub fn dropped_spawns(&self) -> u32 { self.dropped_spawns }
    #[wasm_bindgen(getter)]
    pub fn separations(&self) -> u32 { self.separations }
    #[wasm_bindgen(getter)]
    pub fn kills(&self) -> u32 { self.kills }
    #[wasm_bindgen(getter)]
    pub fn shifts(&self) -> u32 { self.shifts }
    #[wasm_bindgen(getter)]
    pub fn chunks_reclaimed(&self) -> u32 { self.chunks_reclaimed }
    #[wasm_bindgen(getter)]
    pub fn chunks_synthesized(&self) -> u32 { self.chunks_synthesized }
    #[wasm_bindgen(getter)]
    pub fn cache_occupancy(&self) -> u32 { self.cache_occupancy }
}
