use thiserror::Error;

use crate::knowledge::LoadError;
use crate::router::ConfigError;

/// Startup failures. Per-query outcomes never surface here: an empty result
/// set is a normal answer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("knowledge store unavailable: {0}")]
    Load(#[from] LoadError),
    #[error("invalid router config: {0}")]
    Config(#[from] ConfigError),
}
