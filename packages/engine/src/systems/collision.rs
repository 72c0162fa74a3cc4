//! Axis-separated observer collision against the resident tiles.
//!
//! X is tried first, then Y from the X-resolved position. Each axis probes
//! the three points on the leading face of the observer's box (midpoint and
//! both corners); any solid probe rolls that axis back while the other axis
//! still applies, so the observer slides along walls.

use crate::core::math::{Vec2, WorldPosition};
use crate::domain::SimulationConfig;
use crate::spatial::chunks::{ActiveWindow, Axis};

/// Outcome of one resolved move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub position: WorldPosition,
    pub blocked_x: bool,
    pub blocked_y: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct CollisionResolver {
    half_extent: f32,
}

impl CollisionResolver {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.observer_half_extent)
    }

    /// Apply `displacement` to `position`, rejecting each axis that would
    /// push the leading face into a solid tile.
    ///
    /// Probes go through [`ActiveWindow::probe`], so the caller keeps the
    /// displacement small enough to stay inside the window.
    pub fn resolve(&self, window: &ActiveWindow, position: WorldPosition, displacement: Vec2) -> Resolution {
        let mut resolved = position;

        let blocked_x = self.axis_blocked(window, resolved, Axis::X, displacement.x);
        if !blocked_x {
            resolved.x += displacement.x;
        }

        let blocked_y = self.axis_blocked(window, resolved, Axis::Y, displacement.y);
        if !blocked_y {
            resolved.y += displacement.y;
        }

        Resolution {
            position: resolved,
            blocked_x,
            blocked_y,
        }
    }

    /// True when any corner or face midpoint of the box at `position` is solid.
    pub fn overlaps_solid(&self, window: &ActiveWindow, position: WorldPosition) -> bool {
        let h = self.half_extent;
        [-h, 0.0, h].iter().any(|&dx| {
            [-h, 0.0, h]
                .iter()
                .any(|&dy| (dx != 0.0 || dy != 0.0) && window.probe(position + Vec2::new(dx, dy)).is_solid())
        })
    }

    fn axis_blocked(&self, window: &ActiveWindow, from: WorldPosition, axis: Axis, delta: f32) -> bool {
        if delta == 0.0 {
            return false;
        }
        self.leading_face(from, axis, delta)
            .iter()
            .any(|&point| window.probe(point).is_solid())
    }

    /// Midpoint and corners of the face moving along `axis`, after moving by `delta`.
    fn leading_face(&self, from: WorldPosition, axis: Axis, delta: f32) -> [WorldPosition; 3] {
        let h = self.half_extent;
        let edge = h.copysign(delta);
        match axis {
            Axis::X => {
                let x = from.x + delta + edge;
                [
                    Vec2::new(x, from.y),
                    Vec2::new(x, from.y - h),
                    Vec2::new(x, from.y + h),
                ]
            }
            Axis::Y => {
                let y = from.y + delta + edge;
                [
                    Vec2::new(from.x, y),
                    Vec2::new(from.x - h, y),
                    Vec2::new(from.x + h, y),
                ]
            }
        }
    }
}
