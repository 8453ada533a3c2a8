// Colored terminal output for similarity results and metric explanations.
//
// This module handles all terminal-specific formatting. The library core
// never prints; main.rs delegates rendering here after compute returns.

use colored::Colorize;

use crate::engine::{Breakdown, Metric, SimilarityResult};
use crate::output::truncate_chars;

/// Display a computed similarity result with its breakdown.
///
/// `precision` is the number of decimal places in the reported score.
pub fn display_result(
    sentence_a: &str,
    sentence_b: &str,
    result: &SimilarityResult,
    precision: usize,
) {
    println!(
        "\n{}",
        format!("=== {} Similarity ===", result.metric).bold()
    );
    println!();
    println!("  A: {}", truncate_chars(sentence_a, 100).dimmed());
    println!("  B: {}", truncate_chars(sentence_b, 100).dimmed());
    println!();

    let score_str = format!("{:.*}", precision, result.score);
    let colored_score = if result.score >= 0.75 {
        score_str.bright_green().bold()
    } else if result.score >= 0.40 {
        score_str.bright_yellow().bold()
    } else {
        score_str.bright_blue().bold()
    };
    println!("  Score: {colored_score}");

    match &result.breakdown {
        Breakdown::TokenSets {
            tokens_a,
            tokens_b,
            shared,
            union_size,
        } => {
            println!(
                "  Tokens: {} in A, {} in B, {} shared, {} in the union",
                tokens_a.len(),
                tokens_b.len(),
                shared.len(),
                union_size
            );
            if !shared.is_empty() {
                let shared_str = shared.iter().cloned().collect::<Vec<_>>().join(", ");
                println!("  Shared: {}", shared_str.dimmed());
            }
        }
        Breakdown::Vectors {
            vocabulary,
            distance,
            ..
        } => {
            println!("  Joint vocabulary: {} terms", vocabulary.len());
            if let Some(d) = distance {
                println!("  Euclidean distance: {d:.4} (similarity = 1/e^d)");
            }
        }
    }
    println!();
}

/// Print the mathematical explanation for a metric.
///
/// This is the explanatory text a user sees alongside the score: the
/// formula, what its variables mean, and any transform applied.
pub fn display_explanation(metric: Metric) {
    println!(
        "\n{}",
        format!("=== Mathematical Explanation: {metric} ===").bold()
    );
    println!();

    match metric {
        Metric::Jaccard => {
            println!("  The Jaccard similarity coefficient is the size of the intersection");
            println!("  divided by the size of the union of two sets:");
            println!();
            println!("      {}", "J(A, B) = |A ∩ B| / |A ∪ B|".bold());
            println!();
            println!(
                "  {}",
                "where A and B are the sets of words from the two sentences".dimmed()
            );
            println!(
                "  {}",
                "(lower-cased, split on whitespace, punctuation kept).".dimmed()
            );
        }
        Metric::EuclideanSimilarity => {
            println!("  The Euclidean distance between two points in space is:");
            println!();
            println!("      {}", "d(x, y) = sqrt( Σ (x_i - y_i)² )".bold());
            println!();
            println!("  The distance is converted to a similarity score with an");
            println!("  exponential decay:");
            println!();
            println!("      {}", "S = 1 / e^d".bold());
            println!();
            println!(
                "  {}",
                "where x and y are the TF-IDF vectors of the two sentences,".dimmed()
            );
            println!(
                "  {}",
                "built jointly over the vocabulary of the pair.".dimmed()
            );
        }
        Metric::Cosine => {
            println!("  The Cosine similarity between two vectors is the dot product");
            println!("  divided by the product of the vector magnitudes:");
            println!();
            println!("      {}", "cos(θ) = (A · B) / (‖A‖ ‖B‖)".bold());
            println!();
            println!(
                "  {}",
                "where A and B are the TF-IDF vector representations of the".dimmed()
            );
            println!(
                "  {}",
                "sentences; with non-negative weights the score falls in [0, 1].".dimmed()
            );
        }
    }
    println!();
}
