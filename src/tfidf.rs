// Joint TF-IDF vectorization of a sentence pair.
//
// The two sentences are vectorized together, never independently: the
// vocabulary is the union of both sentences' terms, so the two weight
// vectors share a dimensionality and Euclidean/Cosine comparisons are
// meaningful. The corpus for IDF purposes is exactly the two sentences.
//
// The formulation is fixed so scores are reproducible:
//   tf(t, s)  = raw count of term t in sentence s
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1, with n = 2 documents
//   weight    = tf * idf, then each vector is L2-normalized
//
// The smoothing (+1 on document count and document frequency, +1 on the
// log) keeps terms present in both sentences from vanishing to zero IDF.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Sentence, SimilarityError};
use crate::tokenize;

/// The corpus size for IDF: always the two sentences under comparison.
const DOCUMENT_COUNT: f64 = 2.0;

/// A pair of TF-IDF weight vectors over a shared vocabulary.
#[derive(Debug, Clone)]
pub struct VectorPair {
    /// The joint vocabulary, sorted; index i names dimension i of both vectors.
    pub vocabulary: Vec<String>,
    pub vector_a: Vec<f64>,
    pub vector_b: Vec<f64>,
}

/// Vectorize two sentences against their joint vocabulary.
///
/// Fails with `ZeroVector` when either sentence retains no terms under the
/// vectorizer's tokenization (see `tokenize::vector_terms`), since its
/// weight vector would have zero norm.
pub fn vectorize_pair(sentence_a: &str, sentence_b: &str) -> Result<VectorPair, SimilarityError> {
    let terms_a = tokenize::vector_terms(sentence_a);
    if terms_a.is_empty() {
        return Err(SimilarityError::ZeroVector(Sentence::First));
    }
    let terms_b = tokenize::vector_terms(sentence_b);
    if terms_b.is_empty() {
        return Err(SimilarityError::ZeroVector(Sentence::Second));
    }

    // Joint vocabulary, sorted for a deterministic dimension order
    let vocabulary: Vec<String> = terms_a
        .iter()
        .chain(terms_b.iter())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let counts_a = term_counts(&terms_a);
    let counts_b = term_counts(&terms_b);

    let mut vector_a = Vec::with_capacity(vocabulary.len());
    let mut vector_b = Vec::with_capacity(vocabulary.len());

    for term in &vocabulary {
        let tf_a = counts_a.get(term.as_str()).copied().unwrap_or(0) as f64;
        let tf_b = counts_b.get(term.as_str()).copied().unwrap_or(0) as f64;

        // Document frequency over the 2-sentence corpus: 1 or 2 (every
        // vocabulary term appears in at least one sentence)
        let df = (tf_a > 0.0) as u32 + (tf_b > 0.0) as u32;
        let idf = ((1.0 + DOCUMENT_COUNT) / (1.0 + df as f64)).ln() + 1.0;

        vector_a.push(tf_a * idf);
        vector_b.push(tf_b * idf);
    }

    // Both sentences have at least one term and idf >= 1, so the norms are
    // strictly positive here
    l2_normalize(&mut vector_a);
    l2_normalize(&mut vector_b);

    Ok(VectorPair {
        vocabulary,
        vector_a,
        vector_b,
    })
}

fn term_counts(terms: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
