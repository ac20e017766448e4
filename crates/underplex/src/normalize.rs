//! Min-max normalization of keyed scores.

use std::collections::HashMap;
use std::hash::Hash;

/// Rescale values linearly so the minimum maps to 0 and the maximum to 1.
///
/// Empty and single-entry maps give an empty result (one value has no range).
/// If every value is equal the range is zero and all keys map to 0.
pub fn normalize<K: Eq + Hash + Clone>(scores: &HashMap<K, f64>) -> HashMap<K, f64> {
    if scores.len() < 2 {
        return HashMap::new();
    }
    let min = scores.values().copied().fold(f64::INFINITY, f64::min);
    let max = scores.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    scores
        .iter()
        .map(|(k, &v)| {
            let n = if range > 0.0 { (v - min) / range } else { 0.0 };
            (k.clone(), n)
        })
        .collect()
}
