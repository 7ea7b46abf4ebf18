pub mod config;
pub mod engine;
pub mod features;
pub mod policy;
pub mod reward;
pub mod strategy;
pub mod types;

pub use config::{ConfigError, RouterConfig};
pub use engine::BanditRouter;
pub use features::QueryFeatures;
pub use policy::{ArmSelection, EpsilonGreedy, SelectionMode};
pub use reward::compute_reward;
pub use strategy::{RetrievalStrategy, RetrievedItem};
pub use types::{
    ArmState, ArmStatistics, RetrievalOutcome, RetrievalResponse, RouterStatistics,
};
