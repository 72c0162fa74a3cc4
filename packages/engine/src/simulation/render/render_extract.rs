use super::WorldCore;

pub(super) fn agent_positions(world: &WorldCore) -> Vec<f32> {
    let mut out = Vec::with_capacity(world.swarm.active_count() * 2);
    for p in world.swarm.positions() {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

pub(super) fn resident_chunks(world: &WorldCore) -> Vec<i32> {
    world
        .window
        .coords()
        .iter()
        .flat_map(|c| [c.x, c.y])
        .collect()
}

pub(super) fn chunk_tiles(world: &WorldCore, slot: usize) -> Option<Vec<u8>> {
    world.window.chunks().get(slot).map(|chunk| chunk.tile_bytes())
}
