use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::state::State;

/// Frequency table of single tokens.
///
/// # Invariants
/// - `total` equals the sum of all counts
/// - Boundary markers are never counted here
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnigramTable {
	counts: HashMap<String, u64>,
	total: u64,
}

impl UnigramTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `token`.
	pub fn increment(&mut self, token: &str) {
		match self.counts.get_mut(token) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(token.to_owned(), 1);
			}
		}
		self.total += 1;
	}

	/// Occurrences of `token`, 0 if it was never seen.
	pub fn count(&self, token: &str) -> u64 {
		self.counts.get(token).copied().unwrap_or(0)
	}

	/// Total number of token occurrences.
	pub fn total(&self) -> u64 {
		self.total
	}

	/// Number of distinct tokens.
	pub fn vocab_size(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}
}

/// Two-level count table: context → next token → count.
///
/// `K` is the context type: a single token (`String`) for bigrams,
/// a pair of tokens (`(String, String)`) for trigrams.
///
/// Lookups on missing contexts or tokens return 0; they never insert.
/// Insertion only happens through `increment`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NGramTable<K: Eq + Hash> {
	/// Mapping from a context to its outgoing transitions
	states: HashMap<K, State>,
}

/// Context of a bigram is the previous token.
pub type BigramTable = NGramTable<String>;

/// Context of a trigram is the pair of previous tokens.
pub type TrigramTable = NGramTable<(String, String)>;

impl<K: Eq + Hash> Default for NGramTable<K> {
	fn default() -> Self {
		Self { states: HashMap::new() }
	}
}

impl<K: Eq + Hash> NGramTable<K> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `next` following `context`.
	pub fn increment(&mut self, context: K, next: &str) {
		self.states.entry(context).or_default().add_transition(next);
	}

	/// Returns the state of `context`, if it was ever observed.
	pub fn state<Q>(&self, context: &Q) -> Option<&State>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.states.get(context)
	}

	/// Number of times `next` followed `context`.
	pub fn count<Q>(&self, context: &Q, next: &str) -> u64
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.state(context).map_or(0, |state| state.count(next))
	}

	/// Number of times `context` was followed by any token.
	pub fn context_total<Q>(&self, context: &Q) -> u64
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.state(context).map_or(0, State::total)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn contexts(&self) -> impl Iterator<Item = (&K, &State)> {
		self.states.iter()
	}
}
