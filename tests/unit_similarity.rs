// Integration tests for the similarity engine.
//
// Exercises compute() end to end across all three metrics, the error
// taxonomy for degenerate inputs, and the pinned regression fixtures from
// the bundled sample sentences.

use simile::engine::{compute, Breakdown, Metric};
use simile::error::{Sentence, SimilarityError};
use simile::metrics::distance_to_similarity;

// ============================================================
// Identity and symmetry across metrics
// ============================================================

#[test]
fn identical_sentences_jaccard_is_exactly_one() {
    let result = compute("the cat sat", "the cat sat", Metric::Jaccard).unwrap();
    assert_eq!(result.score, 1.0);
}

#[test]
fn identical_sentences_cosine_is_one_within_tolerance() {
    let result = compute("the cat sat", "the cat sat", Metric::Cosine).unwrap();
    assert!((result.score - 1.0).abs() < 1e-12);
}

#[test]
fn identical_sentences_euclidean_similarity_is_one() {
    // Identical vectors have distance 0, and 1/e^0 = 1
    let result = compute("the cat sat", "the cat sat", Metric::EuclideanSimilarity).unwrap();
    assert_eq!(result.score, 1.0);
}

#[test]
fn every_metric_is_symmetric() {
    let a = "the quick brown fox jumps";
    let b = "the lazy brown dog sleeps";
    for metric in [Metric::Jaccard, Metric::EuclideanSimilarity, Metric::Cosine] {
        let ab = compute(a, b, metric).unwrap().score;
        let ba = compute(b, a, metric).unwrap().score;
        assert!(
            (ab - ba).abs() < 1e-12,
            "{metric} not symmetric: {ab} vs {ba}"
        );
    }
}

#[test]
fn scores_stay_in_range() {
    let pairs = [
        ("the cat sat", "the cat sat"),
        ("the cat sat", "the dog ran"),
        ("one shared word here", "word salad entirely different"),
    ];
    for (a, b) in pairs {
        for metric in [Metric::Jaccard, Metric::EuclideanSimilarity, Metric::Cosine] {
            let score = compute(a, b, metric).unwrap().score;
            assert!(
                (0.0..=1.0).contains(&score),
                "{metric} score {score} out of range for ({a}, {b})"
            );
        }
    }
}

// ============================================================
// Disjoint sentences
// ============================================================

#[test]
fn disjoint_sentences_jaccard_is_zero() {
    let result = compute("the cat sat", "a dog ran", Metric::Jaccard).unwrap();
    assert_eq!(result.score, 0.0);
}

#[test]
fn disjoint_sentences_cosine_is_zero() {
    // No shared vocabulary terms ("a" is dropped by the vectorizer), so the
    // vectors are orthogonal
    let result = compute("the cat sat", "a dog ran", Metric::Cosine).unwrap();
    assert_eq!(result.score, 0.0);
}

#[test]
fn disjoint_sentences_euclidean_similarity_is_exp_of_minus_sqrt_two() {
    // Both vectors are L2-normalized and orthogonal, so d = sqrt(2) and
    // the similarity is 1/e^sqrt(2) ≈ 0.2431
    let result = compute("the cat sat", "a dog ran", Metric::EuclideanSimilarity).unwrap();
    assert!((result.score - (-(2.0f64.sqrt())).exp()).abs() < 1e-12);
    assert!((result.score - 0.24312).abs() < 1e-5);
}

#[test]
fn euclidean_score_matches_decay_of_reported_distance() {
    let result = compute(
        "some partly shared words",
        "other partly shared words",
        Metric::EuclideanSimilarity,
    )
    .unwrap();
    match result.breakdown {
        Breakdown::Vectors { distance, .. } => {
            let d = distance.expect("Euclidean breakdown carries the distance");
            assert_eq!(result.score, distance_to_similarity(d));
        }
        _ => panic!("expected a vector breakdown"),
    }
}

// ============================================================
// Pinned regression fixture — the bundled sample sentences
// ============================================================

const SAMPLE_A: &str = "mcdonald's is unhealthy because it has processed food.";
const SAMPLE_B: &str = "denny's is unhealthy because it has processed food.";

#[test]
fn sample_sentences_jaccard_is_seven_ninths() {
    // Punctuation is kept by design: "food." counts as one token with its
    // trailing period. The token sets share 7 of 9 union members; only
    // "mcdonald's" and "denny's" differ.
    let result = compute(SAMPLE_A, SAMPLE_B, Metric::Jaccard).unwrap();
    assert!((result.score - 7.0 / 9.0).abs() < 1e-12);
    match result.breakdown {
        Breakdown::TokenSets {
            shared, union_size, ..
        } => {
            assert_eq!(shared.len(), 7);
            assert_eq!(union_size, 9);
            assert!(shared.contains("food."));
            assert!(!shared.contains("food"));
        }
        _ => panic!("expected a token set breakdown"),
    }
}

#[test]
fn sample_sentences_cosine_pinned() {
    // Seven shared terms (idf = 1) and one distinctive term per sentence
    // (idf = ln 1.5 + 1) give cos = 7 / (7 + (ln 1.5 + 1)^2)
    let result = compute(SAMPLE_A, SAMPLE_B, Metric::Cosine).unwrap();
    let expected = 7.0 / (7.0 + (1.5f64.ln() + 1.0).powi(2));
    assert!((result.score - expected).abs() < 1e-12);
    assert!((result.score - 0.7799).abs() < 1e-4);
}

#[test]
fn sample_sentences_euclidean_similarity_strictly_between_zero_and_one() {
    let result = compute(SAMPLE_A, SAMPLE_B, Metric::EuclideanSimilarity).unwrap();
    assert!(result.score > 0.0 && result.score < 1.0);
}

// ============================================================
// Error taxonomy
// ============================================================

#[test]
fn jaccard_of_two_empty_strings_is_empty_input() {
    assert_eq!(
        compute("", "", Metric::Jaccard).unwrap_err(),
        SimilarityError::EmptyInput
    );
}

#[test]
fn jaccard_of_whitespace_only_strings_is_empty_input() {
    assert_eq!(
        compute("   ", "\t\n", Metric::Jaccard).unwrap_err(),
        SimilarityError::EmptyInput
    );
}

#[test]
fn jaccard_with_one_empty_side_is_zero_not_an_error() {
    // The union is non-empty, so the ratio is defined: 0/|B| = 0
    let result = compute("", "the dog ran", Metric::Jaccard).unwrap();
    assert_eq!(result.score, 0.0);
}

#[test]
fn vector_metrics_report_zero_vector_with_position() {
    for metric in [Metric::EuclideanSimilarity, Metric::Cosine] {
        assert_eq!(
            compute("", "the dog ran", metric).unwrap_err(),
            SimilarityError::ZeroVector(Sentence::First)
        );
        assert_eq!(
            compute("the dog ran", "", metric).unwrap_err(),
            SimilarityError::ZeroVector(Sentence::Second)
        );
    }
}

#[test]
fn single_character_tokens_are_a_zero_vector_for_vector_metrics() {
    // "a I o" survives Jaccard tokenization but the vectorizer drops every
    // token, leaving a zero-norm vector
    assert_eq!(
        compute("a I o", "the dog ran", Metric::Cosine).unwrap_err(),
        SimilarityError::ZeroVector(Sentence::First)
    );
    // ...while Jaccard happily compares the raw token sets
    assert!(compute("a I o", "the dog ran", Metric::Jaccard).is_ok());
}

#[test]
fn error_messages_name_the_problem() {
    let err = compute("", "", Metric::Jaccard).unwrap_err();
    assert!(err.to_string().contains("undefined"));

    let err = compute("", "the dog ran", Metric::Cosine).unwrap_err();
    assert!(err.to_string().contains("first"));

    let err = "chebyshev".parse::<Metric>().unwrap_err();
    assert!(err.to_string().contains("chebyshev"));
}

// ============================================================
// Joint vectorization invariants
// ============================================================

#[test]
fn vector_breakdown_dimensions_match_the_joint_vocabulary() {
    let result = compute(
        "the cat sat on the mat",
        "the dog ran in the park",
        Metric::Cosine,
    )
    .unwrap();
    match result.breakdown {
        Breakdown::Vectors {
            vocabulary,
            vector_a,
            vector_b,
            ..
        } => {
            assert_eq!(vector_a.len(), vocabulary.len());
            assert_eq!(vector_b.len(), vocabulary.len());
            // Both sentences' terms appear in the shared vocabulary
            assert!(vocabulary.iter().any(|t| t == "cat"));
            assert!(vocabulary.iter().any(|t| t == "dog"));
        }
        _ => panic!("expected a vector breakdown"),
    }
}
