use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use super::counter::{self, NGramCounts};
use super::order::Order;
use super::smoothing::{self, Smoothing};
use super::table::{BigramTable, TrigramTable, UnigramTable};

/// A trained word-level n-gram model.
///
/// The three orders share the same estimation and evaluation shape and
/// differ only in the arity of their context (none, one token, two tokens).
///
/// # Responsibilities
/// - Train count tables from a corpus (once, through `train`)
/// - Compute smoothed conditional probabilities
/// - Score a corpus by perplexity
///
/// # Invariants
/// - Immutable after training
/// - `vocab_size` is the number of distinct unigram types of the training
///   corpus; evaluating other corpora never changes it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum NGramModel {
	Unigram {
		unigrams: UnigramTable,
		vocab_size: usize,
	},
	Bigram {
		bigrams: BigramTable,
		unigrams: UnigramTable,
		vocab_size: usize,
	},
	Trigram {
		trigrams: TrigramTable,
		bigrams: BigramTable,
		vocab_size: usize,
	},
}

impl From<NGramCounts> for NGramModel {
	fn from(counts: NGramCounts) -> Self {
		match counts {
			NGramCounts::Unigram { unigrams, .. } => {
				let vocab_size = unigrams.vocab_size();
				NGramModel::Unigram { unigrams, vocab_size }
			}
			NGramCounts::Bigram { bigrams, unigrams, vocab_size } => NGramModel::Bigram { bigrams, unigrams, vocab_size },
			NGramCounts::Trigram { trigrams, bigrams, vocab_size, .. } => NGramModel::Trigram { trigrams, bigrams, vocab_size },
		}
	}
}

impl NGramModel {
	/// Trains a model of the given order on a corpus.
	///
	/// An empty corpus produces a model with empty tables; every probability
	/// it yields is the epsilon floor.
	pub fn train(corpus: &Corpus, order: Order) -> Self {
		let model: Self = counter::count(corpus, order).into();
		info!(
			"Trained {} model on {} line(s): vocabulary size {}, {} bigram context(s), {} trigram context(s)",
			order,
			corpus.len(),
			model.vocab_size(),
			model.bigrams().map_or(0, BigramTable::len),
			model.trigrams().map_or(0, TrigramTable::len),
		);
		model
	}

	pub fn order(&self) -> Order {
		match self {
			NGramModel::Unigram { .. } => Order::Unigram,
			NGramModel::Bigram { .. } => Order::Bigram,
			NGramModel::Trigram { .. } => Order::Trigram,
		}
	}

	pub fn vocab_size(&self) -> usize {
		match self {
			NGramModel::Unigram { vocab_size, .. }
			| NGramModel::Bigram { vocab_size, .. }
			| NGramModel::Trigram { vocab_size, .. } => *vocab_size,
		}
	}

	/// Unigram counts; not kept by trigram models.
	pub fn unigrams(&self) -> Option<&UnigramTable> {
		match self {
			NGramModel::Unigram { unigrams, .. } | NGramModel::Bigram { unigrams, .. } => Some(unigrams),
			NGramModel::Trigram { .. } => None,
		}
	}

	/// Bigram counts, kept by bigram and trigram models.
	pub fn bigrams(&self) -> Option<&BigramTable> {
		match self {
			NGramModel::Unigram { .. } => None,
			NGramModel::Bigram { bigrams, .. } | NGramModel::Trigram { bigrams, .. } => Some(bigrams),
		}
	}

	pub fn trigrams(&self) -> Option<&TrigramTable> {
		match self {
			NGramModel::Trigram { trigrams, .. } => Some(trigrams),
			_ => None,
		}
	}

	/// Probability of `token` following `context`.
	///
	/// `context` holds the preceding tokens, oldest first. Only the last
	/// `n - 1` of them are used: none for unigrams, one for bigrams, two for
	/// trigrams. A context shorter than that is treated as unseen.
	///
	/// Always in `(0, 1]`.
	pub fn probability(&self, context: &[&str], token: &str, smoothing: Smoothing) -> f64 {
		let arity = self.order().n() - 1;
		if context.len() < arity {
			return smoothing::EPSILON;
		}
		let context = &context[context.len() - arity..];

		let (count, context_total) = match self {
			NGramModel::Unigram { unigrams, .. } => (unigrams.count(token), unigrams.total()),
			NGramModel::Bigram { bigrams, .. } => (bigrams.count(context[0], token), bigrams.context_total(context[0])),
			NGramModel::Trigram { trigrams, .. } => {
				let key = (context[0].to_owned(), context[1].to_owned());
				match trigrams.state(&key) {
					Some(state) => (state.count(token), state.total()),
					None => (0, 0),
				}
			}
		};

		smoothing::probability(count, context_total, self.vocab_size(), smoothing)
	}

	/// Sum of the natural log-probabilities of every n-gram of one line.
	///
	/// The line is boundary-annotated for the model order first, so
	/// boundary transitions are scored as well.
	pub fn log_probability(&self, tokens: &[String], smoothing: Smoothing) -> f64 {
		let n = self.order().n();
		self.order()
			.annotate(tokens)
			.windows(n)
			.map(|window| {
				let (context, token) = window.split_at(n - 1);
				self.probability(context, token[0], smoothing).ln()
			})
			.sum()
	}

	/// Perplexity of the model on a corpus: `exp(-Σ ln p / total_words)`.
	///
	/// `total_words` excludes boundary markers even though boundary
	/// transitions are scored.
	///
	/// # Returns
	/// - A value `>= 1.0` for a corpus with at least one word
	/// - `f64::INFINITY` (with a logged warning) for a corpus without words
	pub fn perplexity(&self, corpus: &Corpus, smoothing: Smoothing) -> f64 {
		let total_words = corpus.total_words();
		if total_words == 0 {
			warn!("No words found in corpus. Returning infinite perplexity.");
			return f64::INFINITY;
		}

		let total_log_prob: f64 = corpus
			.lines()
			.iter()
			.map(|line| self.log_probability(line, smoothing))
			.sum();

		(-total_log_prob / total_words as f64).exp()
	}
}
