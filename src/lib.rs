// Simile: text similarity scoring.
//
// This is the library root. The engine module is the public entry point;
// the rest are the pieces it dispatches to.

pub mod engine;
pub mod error;
pub mod metrics;
pub mod output;
pub mod tfidf;
pub mod tokenize;
