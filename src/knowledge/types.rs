use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Essays at or above this band score count as exemplars and as reference
/// structures.
pub const EXEMPLAR_MIN_SCORE: f64 = 7.0;

/// Top of the band scale; used to normalize scores into `[0, 1]`.
pub const MAX_BAND_SCORE: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Claim,
    Data,
    Warrant,
    Backing,
    Rebuttal,
    Qualifier,
}

impl ComponentType {
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Claim,
        ComponentType::Data,
        ComponentType::Warrant,
        ComponentType::Backing,
        ComponentType::Rebuttal,
        ComponentType::Qualifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Claim => "claim",
            ComponentType::Data => "data",
            ComponentType::Warrant => "warrant",
            ComponentType::Backing => "backing",
            ComponentType::Rebuttal => "rebuttal",
            ComponentType::Qualifier => "qualifier",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == lowered)
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component is either one passage (claim, warrant, ...) or an ordered list
/// of passages (typically data points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentValue {
    Single(String),
    Many(Vec<String>),
}

impl ComponentValue {
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            ComponentValue::Single(text) => text.to_lowercase().contains(needle),
            ComponentValue::Many(items) => {
                items.iter().any(|item| item.to_lowercase().contains(needle))
            }
        }
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.contains_lowercase(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub id: String,
    pub topic: String,
    pub band_score: f64,
    pub components: BTreeMap<String, ComponentValue>,
}

impl Essay {
    pub fn component(&self, name: &str) -> Option<&ComponentValue> {
        self.components.get(name)
    }

    pub fn is_high_scoring(&self) -> bool {
        self.band_score >= EXEMPLAR_MIN_SCORE
    }

    pub fn structure(&self) -> EssayStructure {
        EssayStructure {
            topic: self.topic.clone(),
            components: self.components.clone(),
            band_score: self.band_score,
        }
    }
}

/// Outline of a high-scoring essay, used as a template for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayStructure {
    pub topic: String,
    pub components: BTreeMap<String, ComponentValue>,
    pub band_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exemplar {
    pub example: ComponentValue,
    pub topic: String,
    pub band_score: f64,
}
