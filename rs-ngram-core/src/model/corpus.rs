use std::path::Path;

use log::{debug, warn};

use crate::io::read_file;

/// An ordered sequence of whitespace-tokenized lines.
///
/// Each line is one sequence (utterance). Lines without any token are never
/// stored, so every line contributes at least one word.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corpus {
	lines: Vec<Vec<String>>,
}

impl Corpus {
	/// Builds a corpus from raw lines, splitting each on whitespace.
	///
	/// Blank or whitespace-only lines are dropped.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let lines = lines
			.into_iter()
			.map(|line| line.as_ref().split_whitespace().map(str::to_owned).collect::<Vec<_>>())
			.filter(|tokens| !tokens.is_empty())
			.collect();
		Self { lines }
	}

	/// Loads a corpus from a text file, one sequence per line.
	///
	/// # Notes
	/// - Lines are trimmed and blank lines are dropped.
	/// - A missing or unreadable file is not an error: a warning is logged
	///   and an empty corpus is returned, letting the caller decide.
	pub fn load<P: AsRef<Path>>(path: P) -> Self {
		let path = path.as_ref();
		if !path.exists() {
			warn!("File {} not found", path.display());
			return Self::default();
		}

		match read_file(path) {
			Ok(lines) => {
				let corpus = Self::from_lines(lines);
				debug!("Loaded {} line(s), {} word(s) from {}", corpus.len(), corpus.total_words(), path.display());
				corpus
			}
			Err(err) => {
				warn!("Failed to read {}: {err}", path.display());
				Self::default()
			}
		}
	}

	/// Returns the tokenized lines.
	pub fn lines(&self) -> &[Vec<String>] {
		&self.lines
	}

	/// Number of (non-empty) lines.
	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Total number of word tokens across all lines.
	///
	/// Boundary markers are never part of a corpus, so they are not counted.
	pub fn total_words(&self) -> usize {
		self.lines.iter().map(Vec::len).sum()
	}
}
