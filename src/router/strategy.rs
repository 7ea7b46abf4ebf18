use serde::{Deserialize, Serialize};

use crate::knowledge::{ComponentType, Essay, EssayStructure, Exemplar, KnowledgeStore};

/// Component types the exemplar arm looks for in the query, in priority order.
pub const EXEMPLAR_PRIORITY: [ComponentType; 3] =
    [ComponentType::Claim, ComponentType::Data, ComponentType::Warrant];

/// One record returned by a strategy. Each shape carries the band score that
/// the reward is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetrievedItem {
    Essay(Essay),
    Structure(EssayStructure),
    Exemplar(Exemplar),
}

impl RetrievedItem {
    pub fn band_score(&self) -> f64 {
        match self {
            RetrievedItem::Essay(e) => e.band_score,
            RetrievedItem::Structure(s) => s.band_score,
            RetrievedItem::Exemplar(x) => x.band_score,
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            RetrievedItem::Essay(e) => &e.topic,
            RetrievedItem::Structure(s) => &s.topic,
            RetrievedItem::Exemplar(x) => &x.topic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Free-text match across every component.
    ComponentSearch,
    /// Reference structure of the first high-scoring essay on the topic.
    StructureSearch,
    /// High-scoring exemplars of the component named in the query.
    ExemplarSearch,
}

impl RetrievalStrategy {
    pub const ALL: [RetrievalStrategy; 3] = [
        RetrievalStrategy::ComponentSearch,
        RetrievalStrategy::StructureSearch,
        RetrievalStrategy::ExemplarSearch,
    ];

    pub fn count() -> usize {
        Self::ALL.len()
    }

    pub fn index(self) -> usize {
        match self {
            RetrievalStrategy::ComponentSearch => 0,
            RetrievalStrategy::StructureSearch => 1,
            RetrievalStrategy::ExemplarSearch => 2,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            RetrievalStrategy::ComponentSearch => "component_search",
            RetrievalStrategy::StructureSearch => "structure_search",
            RetrievalStrategy::ExemplarSearch => "exemplar_search",
        }
    }

    pub fn execute(&self, store: &KnowledgeStore, query: &str) -> Vec<RetrievedItem> {
        match self {
            RetrievalStrategy::ComponentSearch => store
                .find_by_text(query, None)
                .into_iter()
                .cloned()
                .map(RetrievedItem::Essay)
                .collect(),
            RetrievalStrategy::StructureSearch => store
                .find_structure_by_topic(query)
                .map(RetrievedItem::Structure)
                .into_iter()
                .collect(),
            RetrievalStrategy::ExemplarSearch => match exemplar_component(query) {
                Some(component) => store
                    .find_exemplars(component.as_str())
                    .into_iter()
                    .map(RetrievedItem::Exemplar)
                    .collect(),
                None => Vec::new(),
            },
        }
    }
}

impl std::fmt::Display for RetrievalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// First entry of [`EXEMPLAR_PRIORITY`] that occurs in the query.
pub fn exemplar_component(query: &str) -> Option<ComponentType> {
    let lowered = query.to_lowercase();
    EXEMPLAR_PRIORITY
        .into_iter()
        .find(|component| lowered.contains(component.as_str()))
}
