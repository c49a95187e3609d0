use std::fs;

use rs_ngram_core::model::counter::{count_bigrams, count_unigrams};
use rs_ngram_core::model::{Corpus, NGramModel, Order, Smoothing, UnigramTable, EPSILON};

#[test]
fn unigram_laplace_scenario() {
	let corpus = Corpus::from_lines(["a b", "a c"]);
	let (unigrams, total) = count_unigrams(&corpus);
	assert_eq!(total, 4);
	assert_eq!(unigrams.vocab_size(), 3);

	let model = NGramModel::train(&corpus, Order::Unigram);
	assert_eq!(model.probability(&[], "a", Smoothing::Laplace), 3.0 / 7.0);
}

#[test]
fn bigram_laplace_scenario() {
	let corpus = Corpus::from_lines(["a b"]);
	let (bigrams, _, vocab_size) = count_bigrams(&corpus);
	assert_eq!(bigrams.count("<s>", "a"), 1);
	assert_eq!(bigrams.count("a", "b"), 1);
	assert_eq!(bigrams.count("b", "</s>"), 1);
	assert_eq!(vocab_size, 2);

	let model = NGramModel::train(&corpus, Order::Bigram);
	assert_eq!(model.probability(&["<s>"], "a", Smoothing::Laplace), 2.0 / 3.0);
}

#[test]
fn empty_dev_file_gives_infinite_perplexity() {
	let dir = tempfile::tempdir().unwrap();
	let train_path = dir.path().join("training.txt");
	let dev_path = dir.path().join("dev.txt");
	fs::write(&train_path, "a b\nb c\n").unwrap();
	fs::write(&dev_path, "\n   \n").unwrap();

	let train = Corpus::load(&train_path);
	let dev = Corpus::load(&dev_path);
	assert!(dev.is_empty());

	for order in [Order::Unigram, Order::Bigram, Order::Trigram] {
		let model = NGramModel::train(&train, order);
		assert_eq!(model.perplexity(&dev, Smoothing::Laplace), f64::INFINITY);
		assert_eq!(model.perplexity(&dev, Smoothing::AddEpsilon), f64::INFINITY);
	}
}

#[test]
fn unseen_context_in_dev_floors_to_epsilon() {
	let train = Corpus::from_lines(["a b"]);
	let dev = Corpus::from_lines(["z q"]);
	let model = NGramModel::train(&train, Order::Bigram);

	assert_eq!(model.probability(&["z"], "q", Smoothing::Laplace), EPSILON);

	// <s> -> z is a seen context: (0 + 1) / (1 + 2)
	let expected = (-((1.0f64 / 3.0).ln() + 2.0 * EPSILON.ln()) / 2.0).exp();
	let perplexity = model.perplexity(&dev, Smoothing::Laplace);
	assert!(perplexity.is_finite());
	assert!(perplexity > 1e9);
	assert!((perplexity / expected - 1.0).abs() < 1e-9);
}

#[test]
fn dev_tokens_do_not_grow_vocabulary() {
	let train = Corpus::from_lines(["a b", "a c"]);
	let dev = Corpus::from_lines(["d e f g"]);
	let model = NGramModel::train(&train, Order::Unigram);

	model.perplexity(&dev, Smoothing::Laplace);
	assert_eq!(model.vocab_size(), 3);
	assert_eq!(model.probability(&[], "d", Smoothing::Laplace), 1.0 / 7.0);
}

#[test]
fn dev_perplexity_is_worse_than_training() {
	let train = Corpus::from_lines([
		"the cat sat on the mat",
		"the dog sat on the log",
		"a cat and a dog",
		"the mat and the log",
	]);
	let dev = Corpus::from_lines(["the bird sat on a mat", "a dog and the cat"]);

	for order in [Order::Unigram, Order::Bigram, Order::Trigram] {
		for smoothing in [Smoothing::Laplace, Smoothing::AddEpsilon] {
			let model = NGramModel::train(&train, order);
			let train_ppl = model.perplexity(&train, smoothing);
			let dev_ppl = model.perplexity(&dev, smoothing);
			assert!(train_ppl >= 1.0, "{order} {smoothing}: {train_ppl}");
			assert!(dev_ppl > train_ppl, "{order} {smoothing}: {dev_ppl} <= {train_ppl}");
		}
	}
}

#[test]
fn count_tables_serialize() {
	let corpus = Corpus::from_lines(["a b c", "a c", "b"]);
	for order in [Order::Unigram, Order::Bigram, Order::Trigram] {
		let model = NGramModel::train(&corpus, order);
		let bytes = postcard::to_stdvec(&model).unwrap();
		let restored: NGramModel = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(restored, model);
	}

	let (unigrams, _) = count_unigrams(&corpus);
	let bytes = postcard::to_stdvec(&unigrams).unwrap();
	let restored: UnigramTable = postcard::from_bytes(&bytes).unwrap();
	assert_eq!(restored.count("a"), 2);
}
