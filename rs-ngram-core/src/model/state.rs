use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Represents a context state in an n-gram count table.
///
/// A `State` corresponds to one context (the previous token, or the previous
/// pair of tokens) and stores every observed transition from this context to
/// the next token, along with how many times it was observed.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during counting
/// - Answer count lookups, returning 0 for unseen tokens
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - `total` is the sum of all transition counts
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Outgoing transitions indexed by the next token.
	/// Example: { "the" => 42, "</s>" => 3 }
	transitions: HashMap<String, u64>,
	/// Number of times this context was followed by any token.
	total: u64,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of a transition toward `next`.
	pub fn add_transition(&mut self, next: &str) {
		match self.transitions.get_mut(next) {
			Some(count) => *count += 1,
			None => {
				self.transitions.insert(next.to_owned(), 1);
			}
		}
		self.total += 1;
	}

	/// Number of times `next` followed this context, 0 if never.
	pub fn count(&self, next: &str) -> u64 {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	pub fn total(&self) -> u64 {
		self.total
	}

	/// Iterates over `(next token, count)` pairs in arbitrary order.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, u64)> {
		self.transitions.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Number of distinct tokens observed after this context.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}
}
