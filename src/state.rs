use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::knowledge::KnowledgeStore;
use crate::router::BanditRouter;

/// Shared handles for everything that serves queries. Cloning is cheap; all
/// clones see the same store and the same arm statistics.
#[derive(Clone)]
pub struct AppState {
    store: Arc<KnowledgeStore>,
    router: Arc<BanditRouter>,
}

impl AppState {
    pub fn new(store: Arc<KnowledgeStore>, router: Arc<BanditRouter>) -> Self {
        Self { store, router }
    }

    /// Loads the corpus and builds the router. Nothing is usable until the
    /// corpus has loaded.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let store = Arc::new(KnowledgeStore::load(&config.corpus_path)?);
        let router = Arc::new(BanditRouter::new(Arc::clone(&store), config.router.clone())?);
        Ok(Self::new(store, router))
    }

    pub fn store(&self) -> Arc<KnowledgeStore> {
        Arc::clone(&self.store)
    }

    pub fn router(&self) -> Arc<BanditRouter> {
        Arc::clone(&self.router)
    }
}
