use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ALPHA: f64 = 0.1;
pub const DEFAULT_EPSILON: f64 = 0.1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("learning rate must be in (0, 1], got {0}")]
    Alpha(f64),
    #[error("exploration rate must be in [0, 1], got {0}")]
    Epsilon(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Step size of the exponential value update.
    pub alpha: f64,
    /// Probability of picking a uniformly random arm.
    pub epsilon: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            epsilon: DEFAULT_EPSILON,
            seed: None,
        }
    }
}

impl RouterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(alpha) = env_parse::<f64>("RAG_ALPHA") {
            config.alpha = alpha;
        }
        if let Some(epsilon) = env_parse::<f64>("RAG_EPSILON") {
            config.epsilon = epsilon;
        }
        if let Some(seed) = env_parse::<u64>("RAG_SEED") {
            config.seed = Some(seed);
        }

        config
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::Alpha(self.alpha));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        Ok(())
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable env value");
            None
        }
    }
}
