//! Core building blocks shared by every system: vector math, the world to
//! chunk coordinate mapping, error types and the console logger.

pub mod coords;
pub mod error;
pub mod logging;
pub mod math;
