use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::router::features::QueryFeatures;
use crate::router::strategy::RetrievalStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Explore,
    Exploit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmSelection {
    pub strategy: RetrievalStrategy,
    pub mode: SelectionMode,
}

#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.clamp(0.0, 1.0),
        }
    }

    /// `values` holds one estimate per entry of [`RetrievalStrategy::ALL`].
    /// Query features are accepted so a contextual policy can slot in here,
    /// but this policy does not read them: the arm choice depends only on the
    /// coin flip and the value estimates.
    pub fn select<R: Rng>(
        &self,
        values: &[f64],
        _features: &QueryFeatures,
        rng: &mut R,
    ) -> ArmSelection {
        if rng.random::<f64>() < self.epsilon {
            let idx = rng.random_range(0..RetrievalStrategy::count());
            return ArmSelection {
                strategy: RetrievalStrategy::ALL[idx],
                mode: SelectionMode::Explore,
            };
        }
        ArmSelection {
            strategy: best_strategy(values),
            mode: SelectionMode::Exploit,
        }
    }
}

/// Strategy with the largest value estimate; the lowest index wins ties.
/// Strategies without an estimate are skipped.
pub fn best_strategy(values: &[f64]) -> RetrievalStrategy {
    let mut best = RetrievalStrategy::ComponentSearch;
    let mut best_value = f64::NEG_INFINITY;
    for (strategy, value) in RetrievalStrategy::ALL.into_iter().zip(values) {
        if *value > best_value {
            best = strategy;
            best_value = *value;
        }
    }
    best
}
