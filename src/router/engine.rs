use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::knowledge::KnowledgeStore;
use crate::router::config::{ConfigError, RouterConfig};
use crate::router::features::QueryFeatures;
use crate::router::policy::{best_strategy, EpsilonGreedy};
use crate::router::reward::compute_reward;
use crate::router::strategy::RetrievalStrategy;
use crate::router::types::{
    ArmState, ArmStatistics, RetrievalOutcome, RetrievalResponse, RouterStatistics,
};

struct RouterState {
    arms: Vec<ArmState>,
    rng: StdRng,
}

impl RouterState {
    fn new(config: &RouterConfig) -> Self {
        Self {
            arms: vec![ArmState::default(); RetrievalStrategy::count()],
            rng: new_rng(config.seed),
        }
    }

    fn values(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.value).collect()
    }

    fn statistics(&self) -> RouterStatistics {
        let arms = RetrievalStrategy::ALL
            .iter()
            .zip(&self.arms)
            .map(|(strategy, arm)| ArmStatistics {
                arm: strategy.index(),
                strategy: *strategy,
                value: arm.value,
                count: arm.count,
            })
            .collect();
        RouterStatistics {
            arms,
            best_arm: best_strategy(&self.values()).index(),
            total_pulls: self.arms.iter().map(|arm| arm.count).sum(),
        }
    }
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Epsilon-greedy router over the retrieval strategies.
///
/// Arm state lives behind one mutex and each retrieval holds it from selection
/// through the value update, so concurrent callers are serialized and never
/// lose an update. Arm state is in-memory only and starts at zero.
pub struct BanditRouter {
    store: Arc<KnowledgeStore>,
    config: RouterConfig,
    policy: EpsilonGreedy,
    state: Mutex<RouterState>,
}

impl BanditRouter {
    pub fn new(store: Arc<KnowledgeStore>, config: RouterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::info!(
            arms = RetrievalStrategy::count(),
            alpha = config.alpha,
            epsilon = config.epsilon,
            seeded = config.seed.is_some(),
            "bandit router initialized"
        );
        Ok(Self {
            store,
            policy: EpsilonGreedy::new(config.epsilon),
            state: Mutex::new(RouterState::new(&config)),
            config,
        })
    }

    pub fn retrieve(&self, query: &str) -> RetrievalOutcome {
        let mut state = self.state.lock();
        self.retrieve_locked(&mut state, query)
    }

    /// Retrieval plus the statistics observed right after its update, taken
    /// under the same lock.
    pub fn retrieve_with_statistics(&self, query: &str) -> RetrievalResponse {
        let mut state = self.state.lock();
        let outcome = self.retrieve_locked(&mut state, query);
        RetrievalResponse {
            results: outcome.results,
            selected_arm: outcome.selected_arm,
            arm_statistics: state.statistics(),
        }
    }

    pub fn statistics(&self) -> RouterStatistics {
        self.state.lock().statistics()
    }

    /// Zeroes every arm and reseeds the RNG, as if freshly constructed.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        *state = RouterState::new(&self.config);
        tracing::info!("bandit router reset");
    }

    fn retrieve_locked(&self, state: &mut RouterState, query: &str) -> RetrievalOutcome {
        let features = QueryFeatures::extract(query);
        let values = state.values();
        let selection = self.policy.select(&values, &features, &mut state.rng);
        let strategy = selection.strategy;

        let results = strategy.execute(&self.store, query);
        let reward = compute_reward(&results);

        let arm = &mut state.arms[strategy.index()];
        arm.apply_reward(self.config.alpha, reward);

        tracing::debug!(
            arm = strategy.index(),
            strategy = %strategy,
            mode = ?selection.mode,
            results = results.len(),
            reward,
            value = arm.value,
            count = arm.count,
            "retrieval completed"
        );

        RetrievalOutcome {
            results,
            selected_arm: strategy.index(),
            strategy,
            reward,
            mode: selection.mode,
        }
    }
}
