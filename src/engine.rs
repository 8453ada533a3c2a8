// The similarity engine — the crate's single public operation.
//
// `compute` takes two raw sentences and a metric, and returns the score
// together with the intermediates that justify it (token sets for Jaccard,
// weight vectors for the vector-space metrics). All entities are built per
// call and discarded; the engine holds no state and performs no I/O.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::metrics;
use crate::tfidf;
use crate::tokenize;

/// The closed set of supported similarity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Set overlap over whitespace tokens: |A∩B| / |A∪B|
    Jaccard,
    /// Exponential decay of the L2 distance between TF-IDF vectors: 1/e^d
    EuclideanSimilarity,
    /// Angle between TF-IDF vectors: (A·B) / (‖A‖‖B‖)
    Cosine,
}

impl FromStr for Metric {
    type Err = SimilarityError;

    /// Parse a metric name from an open string. Unknown names fail loudly
    /// rather than defaulting to any metric.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jaccard" => Ok(Metric::Jaccard),
            "euclidean" | "euclidean-similarity" => Ok(Metric::EuclideanSimilarity),
            "cosine" => Ok(Metric::Cosine),
            other => Err(SimilarityError::InvalidMetric(other.to_string())),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Jaccard => write!(f, "Jaccard"),
            Metric::EuclideanSimilarity => write!(f, "Euclidean distance-based"),
            Metric::Cosine => write!(f, "Cosine"),
        }
    }
}

/// A computed similarity score, tagged with the metric that produced it and
/// the intermediate representation behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub metric: Metric,
    /// Jaccard and Cosine: [0, 1]. Euclidean-derived: (0, 1], 1.0 only for
    /// identical vectors.
    pub score: f64,
    pub breakdown: Breakdown,
}

/// The intermediates a score was derived from. Which variant you get
/// depends on the metric: Jaccard works on token sets, the vector-space
/// metrics on a joint TF-IDF vectorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Breakdown {
    TokenSets {
        tokens_a: BTreeSet<String>,
        tokens_b: BTreeSet<String>,
        shared: BTreeSet<String>,
        union_size: usize,
    },
    Vectors {
        /// Index i names dimension i of both vectors
        vocabulary: Vec<String>,
        vector_a: Vec<f64>,
        vector_b: Vec<f64>,
        /// The L2 distance, for the Euclidean path only
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
    },
}

/// Compare two sentences under the given metric.
///
/// Deterministic: identical inputs always produce identical scores. Errors
/// are returned for the degenerate inputs each metric cannot define a score
/// for — see `SimilarityError`.
pub fn compute(
    sentence_a: &str,
    sentence_b: &str,
    metric: Metric,
) -> Result<SimilarityResult, SimilarityError> {
    match metric {
        Metric::Jaccard => {
            let tokens_a = tokenize::token_set(sentence_a);
            let tokens_b = tokenize::token_set(sentence_b);
            let score = metrics::jaccard(&tokens_a, &tokens_b)?;
            let shared: BTreeSet<String> = tokens_a.intersection(&tokens_b).cloned().collect();
            let union_size = tokens_a.union(&tokens_b).count();
            Ok(SimilarityResult {
                metric,
                score,
                breakdown: Breakdown::TokenSets {
                    tokens_a,
                    tokens_b,
                    shared,
                    union_size,
                },
            })
        }
        Metric::EuclideanSimilarity => {
            let pair = tfidf::vectorize_pair(sentence_a, sentence_b)?;
            let distance = metrics::euclidean_distance(&pair.vector_a, &pair.vector_b);
            let score = metrics::distance_to_similarity(distance);
            Ok(SimilarityResult {
                metric,
                score,
                breakdown: Breakdown::Vectors {
                    vocabulary: pair.vocabulary,
                    vector_a: pair.vector_a,
                    vector_b: pair.vector_b,
                    distance: Some(distance),
                },
            })
        }
        Metric::Cosine => {
            let pair = tfidf::vectorize_pair(sentence_a, sentence_b)?;
            let score = metrics::cosine(&pair.vector_a, &pair.vector_b)?;
            Ok(SimilarityResult {
                metric,
                score,
                breakdown: Breakdown::Vectors {
                    vocabulary: pair.vocabulary,
                    vector_a: pair.vector_a,
                    vector_b: pair.vector_b,
                    distance: None,
                },
            })
        }
    }
}
