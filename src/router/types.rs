use serde::{Deserialize, Serialize};

use crate::router::policy::SelectionMode;
use crate::router::strategy::{RetrievalStrategy, RetrievedItem};

/// Running estimate for one arm. `value` is an exponentially weighted average
/// of rewards, so recent pulls dominate regardless of `count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmState {
    pub value: f64,
    pub count: u64,
}

impl ArmState {
    pub fn apply_reward(&mut self, alpha: f64, reward: f64) {
        self.count += 1;
        self.value += alpha * (reward - self.value);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RetrievalOutcome {
    pub results: Vec<RetrievedItem>,
    pub selected_arm: usize,
    pub strategy: RetrievalStrategy,
    pub reward: f64,
    pub mode: SelectionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmStatistics {
    pub arm: usize,
    pub strategy: RetrievalStrategy,
    pub value: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterStatistics {
    pub arms: Vec<ArmStatistics>,
    pub best_arm: usize,
    pub total_pulls: u64,
}

impl RouterStatistics {
    pub fn arm_values(&self) -> Vec<f64> {
        self.arms.iter().map(|a| a.value).collect()
    }

    pub fn arm_counts(&self) -> Vec<u64> {
        self.arms.iter().map(|a| a.count).collect()
    }
}

/// What a caller of the retrieval surface gets back: the results, the arm
/// that produced them and the statistics right after the update.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalResponse {
    pub results: Vec<RetrievedItem>,
    pub selected_arm: usize,
    pub arm_statistics: RouterStatistics,
}
