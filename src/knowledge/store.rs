use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::knowledge::error::LoadError;
use crate::knowledge::types::{ComponentValue, Essay, EssayStructure, Exemplar, MAX_BAND_SCORE};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Wrapped { essays: Vec<RawEssay> },
    Bare(Vec<RawEssay>),
}

impl CorpusDocument {
    fn into_essays(self) -> Vec<RawEssay> {
        match self {
            CorpusDocument::Wrapped { essays } => essays,
            CorpusDocument::Bare(essays) => essays,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEssay {
    id: Option<serde_json::Value>,
    topic: Option<String>,
    #[serde(alias = "quality_score")]
    band_score: Option<f64>,
    components: Option<BTreeMap<String, ComponentValue>>,
}

impl RawEssay {
    fn validate(self, index: usize) -> Result<Essay, LoadError> {
        let topic = self.topic.ok_or(LoadError::MissingField {
            index,
            field: "topic",
        })?;
        let band_score = self.band_score.ok_or(LoadError::MissingField {
            index,
            field: "band_score",
        })?;
        if !band_score.is_finite() || !(0.0..=MAX_BAND_SCORE).contains(&band_score) {
            return Err(LoadError::InvalidField {
                index,
                field: "band_score",
                reason: format!("expected a score in [0, {MAX_BAND_SCORE}], got {band_score}"),
            });
        }
        let components = self.components.ok_or(LoadError::MissingField {
            index,
            field: "components",
        })?;

        let id = match self.id {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => format!("essay-{index}"),
        };

        Ok(Essay {
            id,
            topic,
            band_score,
            components,
        })
    }
}

/// Immutable essay corpus. Every query is a linear scan in corpus order, so
/// results are deterministic and the store is safe to share across threads
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    essays: Vec<Essay>,
}

impl KnowledgeStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CorpusDocument =
            serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let essays = document
            .into_essays()
            .into_iter()
            .enumerate()
            .map(|(index, essay)| essay.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(path = %path.display(), essays = essays.len(), "knowledge store loaded");
        Ok(Self { essays })
    }

    pub fn from_essays(essays: Vec<Essay>) -> Self {
        Self { essays }
    }

    pub fn essays(&self) -> &[Essay] {
        &self.essays
    }

    pub fn len(&self) -> usize {
        self.essays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.essays.is_empty()
    }

    /// Component names present anywhere in the corpus.
    pub fn component_types(&self) -> BTreeSet<&str> {
        self.essays
            .iter()
            .flat_map(|essay| essay.components.keys().map(String::as_str))
            .collect()
    }

    pub fn has_component_type(&self, component_type: &str) -> bool {
        self.essays
            .iter()
            .any(|essay| essay.components.contains_key(component_type))
    }

    /// Case-insensitive substring search. With a component type only that
    /// component is inspected; without one an essay matches as soon as any of
    /// its components does, and is returned once.
    pub fn find_by_text(&self, query: &str, component_type: Option<&str>) -> Vec<&Essay> {
        let needle = query.to_lowercase();

        match component_type {
            Some(name) => {
                self.log_unknown_component(name);
                self.essays
                    .iter()
                    .filter(|essay| {
                        essay
                            .component(name)
                            .is_some_and(|value| value.contains_lowercase(&needle))
                    })
                    .collect()
            }
            None => self
                .essays
                .iter()
                .filter(|essay| {
                    essay
                        .components
                        .values()
                        .any(|value| value.contains_lowercase(&needle))
                })
                .collect(),
        }
    }

    /// First high-scoring essay, in corpus order, whose topic contains `topic`.
    /// Corpus order is the tie-break; no ranking is attempted.
    pub fn find_structure_by_topic(&self, topic: &str) -> Option<EssayStructure> {
        let needle = topic.to_lowercase();
        self.essays
            .iter()
            .find(|essay| essay.is_high_scoring() && essay.topic.to_lowercase().contains(&needle))
            .map(Essay::structure)
    }

    pub fn find_exemplars(&self, component_type: &str) -> Vec<Exemplar> {
        self.log_unknown_component(component_type);
        self.essays
            .iter()
            .filter(|essay| essay.is_high_scoring())
            .filter_map(|essay| {
                essay.component(component_type).map(|value| Exemplar {
                    example: value.clone(),
                    topic: essay.topic.clone(),
                    band_score: essay.band_score,
                })
            })
            .collect()
    }

    fn log_unknown_component(&self, component_type: &str) {
        if !self.has_component_type(component_type) {
            tracing::debug!(component_type, "component type not present in corpus");
        }
    }
}
