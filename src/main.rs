use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use simile::engine::{self, Metric};
use simile::output::terminal;

/// Simile: text similarity from the command line.
///
/// Compares two sentences under a choice of metric — Jaccard over token
/// sets, or Euclidean/Cosine over a joint TF-IDF vectorization — and
/// reports the score with the intermediates behind it.
#[derive(Parser)]
#[command(name = "simile", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two sentences and print the similarity score
    Compare {
        /// The first sentence
        sentence_a: String,

        /// The second sentence
        sentence_b: String,

        /// Similarity metric: jaccard, euclidean, or cosine
        #[arg(long, default_value = "cosine")]
        metric: Metric,

        /// Decimal places in the reported score (default: 4)
        #[arg(long, default_value = "4")]
        precision: usize,

        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also print the metric's mathematical explanation
        #[arg(long)]
        explain: bool,
    },

    /// Print the mathematical explanation for a metric
    Explain {
        /// Similarity metric: jaccard, euclidean, or cosine
        metric: Metric,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("simile=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            sentence_a,
            sentence_b,
            metric,
            precision,
            json,
            explain,
        } => {
            let result = engine::compute(&sentence_a, &sentence_b, metric)?;
            info!(metric = %metric, score = result.score, "similarity computed");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_result(&sentence_a, &sentence_b, &result, precision);
                if explain {
                    terminal::display_explanation(metric);
                }
            }
        }

        Commands::Explain { metric } => {
            terminal::display_explanation(metric);
        }
    }

    Ok(())
}
