use thiserror::Error;

use super::coords::ChunkCoord;

/// Problems found while loading or validating a [`SimulationConfig`](crate::domain::config::SimulationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid simulation config: `{field}` {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("chunk ({}, {}) is not resident in the active window", coord.x, coord.y)]
    OutsideWindow { coord: ChunkCoord },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
