use serde::{Deserialize, Serialize};

use crate::knowledge::ComponentType;

pub const FEATURE_DIM: usize = 5;
const LENGTH_NORMALIZER: f64 = 100.0;
const KEYWORDS: [ComponentType; 4] = [
    ComponentType::Claim,
    ComponentType::Data,
    ComponentType::Warrant,
    ComponentType::Rebuttal,
];

/// Light query descriptor: normalized length followed by keyword flags for
/// claim, data, warrant and rebuttal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryFeatures {
    values: [f64; FEATURE_DIM],
}

impl QueryFeatures {
    pub fn extract(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let mut values = [0.0; FEATURE_DIM];
        values[0] = query.chars().count() as f64 / LENGTH_NORMALIZER;
        for (slot, keyword) in values[1..].iter_mut().zip(KEYWORDS) {
            *slot = if lowered.contains(keyword.as_str()) { 1.0 } else { 0.0 };
        }
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn normalized_length(&self) -> f64 {
        self.values[0]
    }

    pub fn has_keyword(&self, keyword: ComponentType) -> bool {
        KEYWORDS
            .iter()
            .position(|k| *k == keyword)
            .is_some_and(|idx| self.values[idx + 1] > 0.0)
    }
}
