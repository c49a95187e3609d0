//! Top-level module for the n-gram modeling engine.
//!
//! This module provides word-level language models, including:
//! - Tokenized corpora (`Corpus`)
//! - Count tables for each order (`UnigramTable`, `NGramTable`)
//! - Frequency counting with boundary markers (`counter`)
//! - Smoothed probability estimation (`smoothing`)
//! - The trained model and its perplexity evaluation (`NGramModel`)

/// Whitespace-tokenized corpus, one sequence per line.
pub mod corpus;

/// Frequency counting of unigrams, bigrams and trigrams.
pub mod counter;

/// Trained n-gram model (tagged by order) and perplexity evaluation.
pub mod ngram_model;

/// Model order and sequence boundary markers.
pub mod order;

/// Smoothing policies and the conditional-probability estimator.
pub mod smoothing;

/// Unigram and two-level n-gram count tables.
pub mod table;

/// Per-context transition counts.
///
/// Exposed through `table`, built only by it.
pub mod state;

pub use corpus::Corpus;
pub use counter::NGramCounts;
pub use ngram_model::NGramModel;
pub use order::{Order, END_TOKEN, START_TOKEN};
pub use smoothing::{Smoothing, EPSILON};
pub use table::{BigramTable, NGramTable, TrigramTable, UnigramTable};
