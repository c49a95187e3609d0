use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};

use rs_ngram_core::model::{Corpus, NGramModel, Order, Smoothing};
use rs_ngram_core::prep::{self, PrepConfig};

#[derive(Parser, Debug)]
#[command(name = "ngram")]
#[command(about = "Train and evaluate n-gram language models", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Train a model on the training file and report perplexity on both files
	Evaluate(EvaluateArgs),
	/// Consolidate a directory of text files and split it into training and dev files
	Prepare(PrepareArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum ModelKind {
	Unigram,
	Bigram,
	Trigram,
}

impl From<ModelKind> for Order {
	fn from(kind: ModelKind) -> Self {
		match kind {
			ModelKind::Unigram => Order::Unigram,
			ModelKind::Bigram => Order::Bigram,
			ModelKind::Trigram => Order::Trigram,
		}
	}
}

#[derive(Args, Debug)]
struct EvaluateArgs {
	/// Type of n-gram model to use
	#[arg(value_enum)]
	model: ModelKind,

	/// Path to the training data file
	train_file: PathBuf,

	/// Path to the dev data file
	dev_file: PathBuf,

	/// Apply Laplace (add-one) smoothing instead of add-epsilon
	#[arg(long)]
	laplace: bool,
}

#[derive(Args, Debug)]
struct PrepareArgs {
	/// Directory scanned recursively for .txt files
	#[arg(long, env = "NGRAM_INPUT_DIR")]
	input_dir: PathBuf,

	/// Output file holding every sequence, one per line
	#[arg(long, env = "NGRAM_CONSOLIDATED")]
	consolidated: PathBuf,

	/// Output training file
	#[arg(long, env = "NGRAM_TRAIN")]
	train: PathBuf,

	/// Output dev file
	#[arg(long, env = "NGRAM_DEV")]
	dev: PathBuf,

	/// Fraction of lines written to the training file
	#[arg(long, env = "NGRAM_SPLIT_RATIO", default_value_t = 0.8)]
	split_ratio: f64,

	/// Seed for a reproducible shuffle
	#[arg(long, env = "NGRAM_SEED")]
	seed: Option<u64>,
}

impl From<PrepareArgs> for PrepConfig {
	fn from(args: PrepareArgs) -> Self {
		Self {
			input_dir: args.input_dir,
			consolidated_path: args.consolidated,
			train_path: args.train,
			dev_path: args.dev,
			split_ratio: args.split_ratio,
			seed: args.seed,
		}
	}
}

/// Trains on `train_file` and prints training-set and dev-set perplexity.
///
/// Returns `(train, dev)` perplexity, or `None` when an input is missing or
/// empty: that case is reported and nothing is modeled, but it is not a failure.
fn evaluate(args: &EvaluateArgs) -> Option<(f64, f64)> {
	let train = Corpus::load(&args.train_file);
	let dev = Corpus::load(&args.dev_file);

	if train.is_empty() || dev.is_empty() {
		error!("Training or dev data is empty. Ensure data files are correctly prepared.");
		return None;
	}

	let order = Order::from(args.model);
	let smoothing = Smoothing::from_laplace(args.laplace);
	let model = NGramModel::train(&train, order);

	let train_perplexity = model.perplexity(&train, smoothing);
	let dev_perplexity = model.perplexity(&dev, smoothing);

	println!("{} Model Perplexity (Laplace Smoothing: {}) - Training Set: {}", order, args.laplace, train_perplexity);
	println!("{} Model Perplexity (Laplace Smoothing: {}) - Dev Set: {}", order, args.laplace, dev_perplexity);
	Some((train_perplexity, dev_perplexity))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	match cli.command {
		Commands::Evaluate(args) => {
			evaluate(&args);
		}
		Commands::Prepare(args) => {
			let config = PrepConfig::from(args);
			let (consolidated, split) = prep::prepare(&config)?;
			info!("Consolidation: {:?}, split: {:?}", consolidated, split);
		}
	}

	Ok(())
}
