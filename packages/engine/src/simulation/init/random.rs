//! Deterministic hashing for render-time tile variation.

use crate::core::coords::{CHUNK_SIZE, CHUNK_TILES};

const VARIATION_SALT: u32 = 0x56BA_F78F;
const SCRAMBLE_ROUNDS: u32 = 83;

/// Number of distinct variation shades.
pub const VARIATION_LEVELS: u32 = 3;

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Many xorshift rounds with an increment, so neighbouring inputs diverge.
fn scramble(value: u32) -> u32 {
    let mut state = value;
    for _ in 0..SCRAMBLE_ROUNDS {
        xorshift32(&mut state);
        state = state.wrapping_add(1);
    }
    state
}

/// Per-local-tile shade in `0..VARIATION_LEVELS`, row-major like chunk tiles.
/// Identical for every chunk.
pub(crate) fn variation_table() -> Vec<u8> {
    let mut table = Vec::with_capacity(CHUNK_TILES);
    for y in 0..CHUNK_SIZE as u32 {
        let hy = scramble(y ^ VARIATION_SALT);
        for x in 0..CHUNK_SIZE as u32 {
            let hx = scramble(x ^ VARIATION_SALT);
            table.push((scramble(hx ^ hy) % VARIATION_LEVELS) as u8);
        }
    }
    table
}
