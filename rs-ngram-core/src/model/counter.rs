//! Frequency counting of unigrams, bigrams and trigrams over a corpus.
//!
//! Higher orders build every lower order first: the vocabulary size always
//! comes from the plain unigram counts, never from the boundary markers.

use log::debug;

use super::corpus::Corpus;
use super::order::Order;
use super::table::{BigramTable, TrigramTable, UnigramTable};

/// Count tables produced for one model order.
#[derive(Clone, Debug, PartialEq)]
pub enum NGramCounts {
	Unigram {
		unigrams: UnigramTable,
		/// Total token occurrences (no boundary markers)
		total: u64,
	},
	Bigram {
		bigrams: BigramTable,
		unigrams: UnigramTable,
		vocab_size: usize,
	},
	Trigram {
		trigrams: TrigramTable,
		bigrams: BigramTable,
		unigrams: UnigramTable,
		vocab_size: usize,
	},
}

impl NGramCounts {
	pub fn order(&self) -> Order {
		match self {
			NGramCounts::Unigram { .. } => Order::Unigram,
			NGramCounts::Bigram { .. } => Order::Bigram,
			NGramCounts::Trigram { .. } => Order::Trigram,
		}
	}

	/// Unigram counts, present for every order.
	pub fn unigrams(&self) -> &UnigramTable {
		match self {
			NGramCounts::Unigram { unigrams, .. }
			| NGramCounts::Bigram { unigrams, .. }
			| NGramCounts::Trigram { unigrams, .. } => unigrams,
		}
	}

	/// Total token occurrences of the counted corpus, boundary markers excluded.
	pub fn total_tokens(&self) -> u64 {
		match self {
			NGramCounts::Unigram { total, .. } => *total,
			NGramCounts::Bigram { unigrams, .. } | NGramCounts::Trigram { unigrams, .. } => unigrams.total(),
		}
	}

	/// Number of distinct unigram types in the counted corpus.
	pub fn vocab_size(&self) -> usize {
		match self {
			NGramCounts::Unigram { unigrams, .. } => unigrams.vocab_size(),
			NGramCounts::Bigram { vocab_size, .. } | NGramCounts::Trigram { vocab_size, .. } => *vocab_size,
		}
	}
}

/// Counts every whitespace token of the corpus.
///
/// Returns the unigram table and the total number of tokens.
pub fn count_unigrams(corpus: &Corpus) -> (UnigramTable, u64) {
	let mut unigrams = UnigramTable::new();
	for token in corpus.lines().iter().flatten() {
		unigrams.increment(token);
	}
	let total = unigrams.total();
	(unigrams, total)
}

/// Counts adjacent pairs over `[<s>] + tokens + [</s>]` for every line.
///
/// Returns the bigram table, the unigram table and the vocabulary size.
pub fn count_bigrams(corpus: &Corpus) -> (BigramTable, UnigramTable, usize) {
	let (unigrams, _) = count_unigrams(corpus);
	let vocab_size = unigrams.vocab_size();

	let mut bigrams = BigramTable::new();
	for line in corpus.lines() {
		let words = Order::Bigram.annotate(line);
		for pair in words.windows(2) {
			bigrams.increment(pair[0].to_owned(), pair[1]);
		}
	}

	(bigrams, unigrams, vocab_size)
}

/// Counts consecutive triples over `[<s>, <s>] + tokens + [</s>]` for every line.
///
/// Returns the trigram table, the bigram table, the unigram table and the
/// vocabulary size.
pub fn count_trigrams(corpus: &Corpus) -> (TrigramTable, BigramTable, UnigramTable, usize) {
	let (bigrams, unigrams, vocab_size) = count_bigrams(corpus);

	let mut trigrams = TrigramTable::new();
	for line in corpus.lines() {
		let words = Order::Trigram.annotate(line);
		for triple in words.windows(3) {
			trigrams.increment((triple[0].to_owned(), triple[1].to_owned()), triple[2]);
		}
	}

	(trigrams, bigrams, unigrams, vocab_size)
}

/// Builds all count tables needed by a model of the given order.
///
/// Deterministic for a given corpus and order. An empty corpus yields empty
/// tables and a vocabulary size of 0.
pub fn count(corpus: &Corpus, order: Order) -> NGramCounts {
	let counts = match order {
		Order::Unigram => {
			let (unigrams, total) = count_unigrams(corpus);
			NGramCounts::Unigram { unigrams, total }
		}
		Order::Bigram => {
			let (bigrams, unigrams, vocab_size) = count_bigrams(corpus);
			NGramCounts::Bigram { bigrams, unigrams, vocab_size }
		}
		Order::Trigram => {
			let (trigrams, bigrams, unigrams, vocab_size) = count_trigrams(corpus);
			NGramCounts::Trigram { trigrams, bigrams, unigrams, vocab_size }
		}
	};
	debug!("Counted {} n-grams over {} line(s), vocabulary size {}", order, corpus.len(), counts.vocab_size());
	counts
}
