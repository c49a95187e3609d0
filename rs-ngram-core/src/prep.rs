use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{NGramError, Result};
use crate::io::{ensure_parent_dir, is_non_empty_file, list_files_recursive, read_file};

/// Locations and parameters of the corpus preparation pipeline.
///
/// Every path is given explicitly; nothing falls back to a process-wide
/// default location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PrepConfig {
	/// Directory scanned recursively for `*.txt` files
	pub input_dir: PathBuf,
	/// Single file receiving every sequence, one per line
	pub consolidated_path: PathBuf,
	pub train_path: PathBuf,
	pub dev_path: PathBuf,
	/// Fraction of lines going to the training file, in (0, 1)
	pub split_ratio: f64,
	/// Seed of the shuffle; `None` draws from the thread RNG
	pub seed: Option<u64>,
}

/// Result of the consolidation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsolidateOutcome {
	Written { files: usize, lines: usize },
	/// The consolidated file already existed and was not empty
	Skipped,
}

/// Result of the split step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitOutcome {
	Written { train_lines: usize, dev_lines: usize },
	/// Both the training and the dev file already existed and were not empty
	Skipped,
}

impl PrepConfig {
	/// Checks that the split ratio leaves room for both files.
	pub fn validate(&self) -> Result<()> {
		if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
			return Err(NGramError::InvalidSplitRatio(self.split_ratio));
		}
		Ok(())
	}
}

/// Runs consolidation then splitting.
pub fn prepare(config: &PrepConfig) -> Result<(ConsolidateOutcome, SplitOutcome)> {
	config.validate()?;
	let consolidated = consolidate(config)?;
	let split = split(config)?;
	Ok((consolidated, split))
}

/// Concatenates every `*.txt` file under `input_dir` into `consolidated_path`.
///
/// # Behavior
/// - Files are visited in sorted path order.
/// - Each line is trimmed; blank lines are dropped; every written line
///   ends with `\n`.
/// - Skips the step if the output already exists and is not empty.
///
/// # Errors
/// - `MissingDirectory` if `input_dir` is not a directory
/// - `Io` on any read or write failure
pub fn consolidate(config: &PrepConfig) -> Result<ConsolidateOutcome> {
	let input_dir = &config.input_dir;
	if !input_dir.is_dir() {
		return Err(NGramError::MissingDirectory(input_dir.clone()));
	}

	let output = &config.consolidated_path;
	if is_non_empty_file(output) {
		info!("{} already exists and contains data. Skipping consolidation.", output.display());
		return Ok(ConsolidateOutcome::Skipped);
	}

	let files = list_files_recursive(input_dir, "txt").map_err(|e| NGramError::io(input_dir, e))?;
	ensure_parent_dir(output).map_err(|e| NGramError::io(output, e))?;
	let mut writer = BufWriter::new(File::create(output).map_err(|e| NGramError::io(output, e))?);

	let mut lines = 0;
	for file in &files {
		for line in read_file(file).map_err(|e| NGramError::io(file, e))? {
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			writeln!(writer, "{line}").map_err(|e| NGramError::io(output, e))?;
			lines += 1;
		}
	}
	writer.flush().map_err(|e| NGramError::io(output, e))?;

	info!("Consolidation complete. {} line(s) from {} file(s) saved to {}", lines, files.len(), output.display());
	Ok(ConsolidateOutcome::Written { files: files.len(), lines })
}

/// Shuffles the consolidated file and splits it into training and dev files.
///
/// # Behavior
/// - The training file receives the first `max(1, floor(len * split_ratio))`
///   shuffled lines, the dev file the rest.
/// - Skips the step if both output files already exist and are not empty.
///
/// # Errors
/// - `InvalidSplitRatio` if the ratio is outside (0, 1)
/// - `MissingInput` if the consolidated file is missing or empty
/// - `NotEnoughData` if it holds fewer than 2 lines
/// - `Io` on any read or write failure
pub fn split(config: &PrepConfig) -> Result<SplitOutcome> {
	config.validate()?;

	let input = &config.consolidated_path;
	if !is_non_empty_file(input) {
		return Err(NGramError::MissingInput(input.clone()));
	}

	if is_non_empty_file(&config.train_path) && is_non_empty_file(&config.dev_path) {
		info!("Training and dev files already exist and contain data. Skipping split.");
		return Ok(SplitOutcome::Skipped);
	}

	let mut lines: Vec<String> = read_file(input)
		.map_err(|e| NGramError::io(input, e))?
		.into_iter()
		.filter(|line| !line.trim().is_empty())
		.collect();
	if lines.len() < 2 {
		return Err(NGramError::NotEnoughData { path: input.clone(), lines: lines.len() });
	}

	match config.seed {
		Some(seed) => lines.shuffle(&mut StdRng::seed_from_u64(seed)),
		None => lines.shuffle(&mut rand::rng()),
	}

	// Both sides are non-empty: 1 <= split_index < len since ratio < 1
	let split_index = ((lines.len() as f64 * config.split_ratio) as usize).clamp(1, lines.len() - 1);
	let (train, dev) = lines.split_at(split_index);

	write_lines(&config.train_path, train)?;
	write_lines(&config.dev_path, dev)?;

	info!(
		"Data split complete. Training data saved to {}, Dev data saved to {}",
		config.train_path.display(),
		config.dev_path.display()
	);
	Ok(SplitOutcome::Written { train_lines: train.len(), dev_lines: dev.len() })
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
	ensure_parent_dir(path).map_err(|e| NGramError::io(path, e))?;
	let mut contents = lines.join("\n");
	contents.push('\n');
	fs::write(path, contents).map_err(|e| NGramError::io(path, e))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(root: &Path) -> PrepConfig {
		PrepConfig {
			input_dir: root.join("transformed"),
			consolidated_path: root.join("data/consolidated.txt"),
			train_path: root.join("data/training.txt"),
			dev_path: root.join("data/dev.txt"),
			split_ratio: 0.8,
			seed: Some(7),
		}
	}

	fn write_inputs(root: &Path) {
		fs::create_dir_all(root.join("transformed/speaker1")).unwrap();
		fs::write(root.join("transformed/a.txt"), "a b c\n\n  d e  \n").unwrap();
		fs::write(root.join("transformed/speaker1/b.txt"), "f g\nh\ni j k\n").unwrap();
		fs::write(root.join("transformed/ignored.csv"), "x,y\n").unwrap();
	}

	#[test]
	fn test_consolidate() {
		let dir = tempfile::tempdir().unwrap();
		write_inputs(dir.path());
		let config = config(dir.path());

		let outcome = consolidate(&config).unwrap();
		assert_eq!(outcome, ConsolidateOutcome::Written { files: 2, lines: 5 });

		let contents = fs::read_to_string(&config.consolidated_path).unwrap();
		assert_eq!(contents, "a b c\nd e\nf g\nh\ni j k\n");

		// Second run leaves the existing output alone
		assert_eq!(consolidate(&config).unwrap(), ConsolidateOutcome::Skipped);
	}

	#[test]
	fn test_consolidate_missing_directory() {
		let dir = tempfile::tempdir().unwrap();
		let err = consolidate(&config(dir.path())).unwrap_err();
		assert!(matches!(err, NGramError::MissingDirectory(_)));
	}

	#[test]
	fn test_split() {
		let dir = tempfile::tempdir().unwrap();
		write_inputs(dir.path());
		let config = config(dir.path());
		consolidate(&config).unwrap();

		let outcome = split(&config).unwrap();
		assert_eq!(outcome, SplitOutcome::Written { train_lines: 4, dev_lines: 1 });

		let mut all: Vec<String> = read_file(&config.train_path).unwrap();
		all.extend(read_file(&config.dev_path).unwrap());
		all.sort();
		assert_eq!(all, vec!["a b c", "d e", "f g", "h", "i j k"]);

		assert_eq!(split(&config).unwrap(), SplitOutcome::Skipped);
	}

	#[test]
	fn test_split_is_reproducible_with_seed() {
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		for root in [first.path(), second.path()] {
			write_inputs(root);
			prepare(&config(root)).unwrap();
		}

		let read = |root: &Path| fs::read_to_string(config(root).train_path).unwrap();
		assert_eq!(read(first.path()), read(second.path()));
	}

	#[test]
	fn test_split_not_enough_data() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(dir.path());
		fs::create_dir_all(dir.path().join("data")).unwrap();
		fs::write(&config.consolidated_path, "only one line\n").unwrap();

		let err = split(&config).unwrap_err();
		assert!(matches!(err, NGramError::NotEnoughData { lines: 1, .. }));
	}

	#[test]
	fn test_split_missing_input() {
		let dir = tempfile::tempdir().unwrap();
		let err = split(&config(dir.path())).unwrap_err();
		assert!(matches!(err, NGramError::MissingInput(_)));
	}

	#[test]
	fn test_invalid_split_ratio() {
		let dir = tempfile::tempdir().unwrap();
		for ratio in [0.0, 1.0, -0.5, f64::NAN] {
			let config = PrepConfig { split_ratio: ratio, ..config(dir.path()) };
			assert!(matches!(config.validate(), Err(NGramError::InvalidSplitRatio(_))));
		}
	}

	#[test]
	fn test_small_ratio_keeps_one_training_line() {
		let dir = tempfile::tempdir().unwrap();
		let config = PrepConfig { split_ratio: 0.1, ..config(dir.path()) };
		fs::create_dir_all(dir.path().join("data")).unwrap();
		fs::write(&config.consolidated_path, "a\nb\nc\n").unwrap();

		let outcome = split(&config).unwrap();
		assert_eq!(outcome, SplitOutcome::Written { train_lines: 1, dev_lines: 2 });
	}
}
