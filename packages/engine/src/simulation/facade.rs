use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;

use super::perf_stats::TickStats;
use super::{GameScreen, TickInput, WorldCore};

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    /// Create a world from a JSON config; missing fields take defaults.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn screen(&self) -> GameScreen { self.core.screen() }

    // === Commands ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn toggle_pause(&mut self) {
        self.core.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Make the tile at world (x, y) solid
    pub fn place_obstacle(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core
            .place_obstacle(Vec2::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn teleport(&mut self, x: f32, y: f32) {
        self.core.teleport_observer(Vec2::new(x, y));
    }

    /// Advance one tick. Returns the screen after the tick.
    pub fn tick(&mut self, move_x: f32, move_y: f32, aim_x: f32, aim_y: f32, attack: bool) -> GameScreen {
        let input = TickInput {
            movement: Vec2::new(move_x, move_y),
            aim: Vec2::new(aim_x, aim_y),
            attack,
        };
        self.core.tick(&input);
        self.core.screen()
    }

    // === Observer ===

    #[wasm_bindgen(getter)]
    pub fn observer_x(&self) -> f32 { self.core.observer().position.x }

    #[wasm_bindgen(getter)]
    pub fn observer_y(&self) -> f32 { self.core.observer().position.y }

    #[wasm_bindgen(getter)]
    pub fn facing_x(&self) -> f32 { self.core.observer().facing.x }

    #[wasm_bindgen(getter)]
    pub fn facing_y(&self) -> f32 { self.core.observer().facing.y }

    #[wasm_bindgen(getter)]
    pub fn kills(&self) -> u32 { self.core.observer().kills }

    #[wasm_bindgen(getter)]
    pub fn resources(&self) -> u32 { self.core.observer().resources }

    #[wasm_bindgen(getter)]
    pub fn health(&self) -> u32 { self.core.observer().health }

    /// Seconds until the attack is ready again
    #[wasm_bindgen(getter)]
    pub fn attack_cooldown(&self) -> f32 { self.core.attack().remaining() }

    /// Reach of the attack cone in tiles
    #[wasm_bindgen(getter)]
    pub fn attack_range(&self) -> f32 { self.core.attack().range() }

    /// Half-angle of the attack cone in radians
    #[wasm_bindgen(getter)]
    pub fn attack_half_angle(&self) -> f32 { self.core.attack().half_angle() }

    // === Render extraction ===

    #[wasm_bindgen(getter)]
    pub fn active_agents(&self) -> u32 { self.core.swarm().active_count() as u32 }

    /// Flat [x0, y0, x1, y1, ...] of active agents
    pub fn agent_positions(&self) -> Vec<f32> {
        self.core.agent_positions()
    }

    /// Flat [cx0, cy0, ...] of the four resident chunks, in slot order
    pub fn resident_chunks(&self) -> Vec<i32> {
        self.core.resident_chunks()
    }

    /// Tile bytes of a resident slot (empty for an unknown slot)
    pub fn chunk_tiles(&self, slot: usize) -> Vec<u8> {
        self.core.chunk_tiles(slot).unwrap_or_default()
    }

    /// Render-only shade per local tile, row-major
    pub fn tile_variation(&self) -> Vec<u8> {
        self.core.variation().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn cache_occupancy(&self) -> u32 { self.core.store().occupied() as u32 }

    // === Perf ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.core.get_perf_stats()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Native access to the underlying core.
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
