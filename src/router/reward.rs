use crate::knowledge::MAX_BAND_SCORE;
use crate::router::strategy::RetrievedItem;

/// Mean normalized band score of the results; 0 when nothing was found.
pub fn compute_reward(results: &[RetrievedItem]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results
        .iter()
        .map(|item| item.band_score() / MAX_BAND_SCORE)
        .sum();
    total / results.len() as f64
}
