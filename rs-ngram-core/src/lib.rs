//! N-gram language modeling library.
//!
//! This crate provides word-level n-gram models and their evaluation, including:
//! - Tokenized corpora loaded from plain text (one sequence per line)
//! - Unigram, bigram and trigram frequency counting with boundary markers
//! - Smoothed conditional probabilities (Laplace or add-epsilon)
//! - Corpus perplexity under a trained model
//! - Corpus preparation (consolidation and train/dev splitting)
//!
//! File helpers are kept internal; the modeling and preparation APIs are public.

/// Error type shared by the fallible operations of this crate.
pub mod error;

/// Core n-gram models, counting, smoothing and perplexity.
///
/// Training and evaluation never fail: degenerate inputs produce sentinel
/// values (empty corpus, infinite perplexity, epsilon probabilities).
pub mod model;

/// Corpus preparation: consolidates a directory of text files and splits it
/// into training and dev files.
pub mod prep;

/// I/O utilities (file loading, directory walking).
///
/// Not exposed
pub(crate) mod io;

pub use error::{NGramError, Result};
