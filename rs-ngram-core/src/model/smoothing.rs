use std::fmt;

use serde::{Deserialize, Serialize};

/// Floor probability for unseen contexts, and the additive constant of
/// add-epsilon smoothing.
pub const EPSILON: f64 = 1e-10;

/// Smoothing policy, applied uniformly to whichever model order is active.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Smoothing {
	/// Add-one: `(count + 1) / (context_total + vocab_size)`
	Laplace,
	/// `(count + ε) / (context_total + ε)`
	AddEpsilon,
}

impl Smoothing {
	/// Maps the `--laplace` flag to a policy.
	pub fn from_laplace(laplace: bool) -> Self {
		if laplace { Smoothing::Laplace } else { Smoothing::AddEpsilon }
	}
}

impl fmt::Display for Smoothing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Smoothing::Laplace => f.write_str("laplace"),
			Smoothing::AddEpsilon => f.write_str("add-epsilon"),
		}
	}
}

/// Smoothed conditional probability of a token given its context.
///
/// # Parameters
/// - `count`: occurrences of the (context, token) n-gram
/// - `context_total`: occurrences of the context followed by anything
///   (total token count for unigrams)
/// - `vocab_size`: distinct unigram types of the training corpus
///
/// # Returns
/// A probability in `(0, 1]`, safe to pass to `ln`.
///
/// # Notes
/// - A context never observed in training (`context_total == 0`) gets the
///   fixed floor `EPSILON` whatever the policy.
/// - Add-epsilon is not a normalized distribution: summed over all tokens
///   of a context it exceeds 1.
pub fn probability(count: u64, context_total: u64, vocab_size: usize, smoothing: Smoothing) -> f64 {
	if context_total == 0 {
		return EPSILON;
	}

	let count = count as f64;
	let context_total = context_total as f64;
	match smoothing {
		Smoothing::Laplace => (count + 1.0) / (context_total + vocab_size as f64),
		Smoothing::AddEpsilon => (count + EPSILON) / (context_total + EPSILON),
	}
}
