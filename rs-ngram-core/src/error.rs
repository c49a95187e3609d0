use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by corpus preparation and argument parsing.
///
/// Modeling itself does not produce errors; see the `model` module.
#[derive(Error, Debug)]
pub enum NGramError {
	/// I/O error with file context
	#[error("I/O error for {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("The directory {} does not exist", .0.display())]
	MissingDirectory(PathBuf),

	#[error("The file {} does not exist or is empty", .0.display())]
	MissingInput(PathBuf),

	/// Fewer lines than needed to produce both a training and a dev file
	#[error("Not enough data to split: {lines} line(s) in {}", .path.display())]
	NotEnoughData { path: PathBuf, lines: usize },

	#[error("Split ratio must be strictly between 0.0 and 1.0, got {0}")]
	InvalidSplitRatio(f64),

	#[error("Unknown model '{0}', expected one of: unigram, bigram, trigram")]
	UnknownOrder(String),
}

impl NGramError {
	/// Wraps an I/O error with the path it occurred on.
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, NGramError>;
