//! Per-tick systems operating on the active window.

pub mod attack;
pub mod collision;
pub mod swarm;

pub use attack::{AttackOutcome, AttackResolver};
pub use collision::{CollisionResolver, Resolution};
pub use swarm::{SwarmParams, SwarmReport, SwarmSimulator};
