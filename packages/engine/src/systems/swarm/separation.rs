//! Pairwise overlap push-apart. O(n^2) over the pool, bounded by capacity.

use crate::core::math::Vec2;

use super::movement::SEEK_EPSILON;
use super::slots::AgentSlot;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparationParams {
    /// Per-axis prefilter half-width.
    pub box_extent: f32,
    pub radius: f32,
    pub weight: f32,
}

/// Resolve overlaps for every ordered pair `(i, j)`: agent `i` is re-placed
/// at `lerp(a_j, a_i, weight)`, which pushes it away from `j`. Later pairs
/// see earlier corrections. Returns the number of corrections applied.
pub fn separate(slots: &mut [AgentSlot], params: SeparationParams) -> u32 {
    let mut corrected = 0;
    for i in 0..slots.len() {
        let Some(mut a) = slots[i].position() else {
            continue;
        };
        for (j, other) in slots.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(b) = other.position() else {
                continue;
            };
            let gap = a - b;
            if gap.x.abs() > params.box_extent || gap.y.abs() > params.box_extent {
                continue;
            }
            let distance = gap.length();
            if distance > params.radius {
                continue;
            }
            a = if distance < SEEK_EPSILON {
                b + Vec2::new(params.radius, 0.0)
            } else {
                b.lerp(a, params.weight)
            };
            corrected += 1;
        }
        slots[i] = AgentSlot::Active { position: a };
    }
    corrected
}
