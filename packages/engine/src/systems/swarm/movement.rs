//! Seeking: every active agent steps toward the observer at constant speed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::WorldPosition;

use super::slots::AgentSlot;

/// Agents closer than this do not move.
pub const SEEK_EPSILON: f32 = 1e-4;

/// Below this many slots the pass stays on the calling thread.
pub const PARALLEL_MIN_AGENTS: usize = 128;

/// Move `position` toward `target` by at most `step` tiles.
///
/// The interpolation fraction `step / distance` is clamped to 1, so an
/// agent within one step lands exactly on the target.
#[inline]
pub fn advance_toward(position: WorldPosition, target: WorldPosition, step: f32) -> WorldPosition {
    let distance = position.distance(target);
    if distance < SEEK_EPSILON {
        return position;
    }
    position.lerp(target, (step / distance).min(1.0))
}

#[inline]
fn advance_slot(slot: &mut AgentSlot, target: WorldPosition, step: f32) {
    if let AgentSlot::Active { position } = slot {
        *position = advance_toward(*position, target, step);
    }
}

/// Advance every active slot. Agents move independently, so the pass may
/// run on the rayon pool.
pub fn move_agents(slots: &mut [AgentSlot], target: WorldPosition, step: f32) {
    #[cfg(feature = "parallel")]
    {
        if slots.len() >= PARALLEL_MIN_AGENTS {
            slots
                .par_iter_mut()
                .for_each(|slot| advance_slot(slot, target, step));
            return;
        }
    }
    slots
        .iter_mut()
        .for_each(|slot| advance_slot(slot, target, step));
}
