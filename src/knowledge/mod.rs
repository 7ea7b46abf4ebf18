pub mod error;
pub mod store;
pub mod types;

pub use error::LoadError;
pub use store::KnowledgeStore;
pub use types::{
    ComponentType, ComponentValue, Essay, EssayStructure, Exemplar, EXEMPLAR_MIN_SCORE,
    MAX_BAND_SCORE,
};
