pub mod cli;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod logging;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use knowledge::{KnowledgeStore, LoadError};
pub use router::{BanditRouter, RetrievalStrategy, RouterConfig};
pub use state::AppState;
