// Error taxonomy for the similarity engine.
//
// Every failure mode of `compute` is a distinct variant so callers can
// decide how to surface it. The engine never returns NaN or Inf in place
// of an error, and never coerces an undefined comparison to 0.0 — that
// would conflate "undefined" with "maximally dissimilar".

use thiserror::Error;

/// Which of the two input sentences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentence {
    First,
    Second,
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentence::First => write!(f, "first"),
            Sentence::Second => write!(f, "second"),
        }
    }
}

/// Errors produced by the similarity engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// Both sentences tokenized to the empty set, so the Jaccard union is
    /// empty and the ratio |A∩B| / |A∪B| is undefined.
    #[error("both sentences tokenize to empty sets; the Jaccard ratio is undefined")]
    EmptyInput,

    /// A sentence retained no terms under the vectorizer (empty, or made up
    /// entirely of punctuation and single-character tokens), so its TF-IDF
    /// vector has zero norm and vector-space similarity is undefined.
    #[error("the {0} sentence retains no terms after vectorization; its vector norm is zero")]
    ZeroVector(Sentence),

    /// A metric name that matches none of the recognized metrics. Only
    /// reachable when constructing a `Metric` from an open string; the enum
    /// itself is closed.
    #[error("unknown similarity metric '{0}' (expected jaccard, euclidean, or cosine)")]
    InvalidMetric(String),
}
