// The three similarity formulas as independent pure functions.
//
// The engine dispatches to these; keeping them free of tokenization and
// vectorization concerns makes each formula testable on its own. None of
// them log, print, or touch shared state.

use std::collections::BTreeSet;

use crate::error::{Sentence, SimilarityError};

/// Jaccard similarity: |A∩B| / |A∪B|.
///
/// Undefined when both sets are empty (the union has cardinality 0), which
/// is reported as `EmptyInput` rather than producing NaN.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Result<f64, SimilarityError> {
    let union = a.union(b).count();
    if union == 0 {
        return Err(SimilarityError::EmptyInput);
    }
    let intersection = a.intersection(b).count();
    Ok(intersection as f64 / union as f64)
}

/// Euclidean (L2) distance between two vectors of equal dimensionality:
/// sqrt(Σ(x_i - y_i)²).
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a vocabulary");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Transform a distance into a similarity via exponential decay: S = 1/e^d.
///
/// Strictly decreasing in d; equals 1.0 only at d = 0 (identical vectors)
/// and approaches 0.0 as the distance grows.
pub fn distance_to_similarity(distance: f64) -> f64 {
    (-distance).exp()
}

/// Cosine similarity: (A·B) / (‖A‖‖B‖).
///
/// Undefined when either vector has zero norm; reported as `ZeroVector`
/// naming the offending sentence instead of dividing by zero.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a vocabulary");
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 {
        return Err(SimilarityError::ZeroVector(Sentence::First));
    }
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_b == 0.0 {
        return Err(SimilarityError::ZeroVector(Sentence::Second));
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    Ok(dot / (norm_a * norm_b))
}
