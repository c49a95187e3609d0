use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NGramError;

/// Synthetic token marking the start of a sequence.
pub const START_TOKEN: &str = "<s>";

/// Synthetic token marking the end of a sequence.
pub const END_TOKEN: &str = "</s>";

/// Order of an n-gram model.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Order {
	Unigram,
	Bigram,
	Trigram,
}

impl Order {
	/// Number of tokens in one n-gram (context plus predicted token).
	pub fn n(self) -> usize {
		match self {
			Order::Unigram => 1,
			Order::Bigram => 2,
			Order::Trigram => 3,
		}
	}

	/// Number of leading `<s>` markers inserted before each sequence.
	///
	/// Unigram sequences carry no boundary markers at all.
	pub fn start_markers(self) -> usize {
		self.n() - 1
	}

	/// Builds the boundary-annotated token sequence of a line for this order.
	///
	/// - Unigram: the tokens as-is
	/// - Bigram: `[<s>] + tokens + [</s>]`
	/// - Trigram: `[<s>, <s>] + tokens + [</s>]`
	pub fn annotate<'a>(self, tokens: &'a [String]) -> Vec<&'a str> {
		if self == Order::Unigram {
			return tokens.iter().map(String::as_str).collect();
		}

		let markers = self.start_markers();
		let mut annotated = Vec::with_capacity(tokens.len() + markers + 1);
		annotated.extend(std::iter::repeat_n(START_TOKEN, markers));
		annotated.extend(tokens.iter().map(String::as_str));
		annotated.push(END_TOKEN);
		annotated
	}

	fn name(self) -> &'static str {
		match self {
			Order::Unigram => "unigram",
			Order::Bigram => "bigram",
			Order::Trigram => "trigram",
		}
	}
}

impl fmt::Display for Order {
	/// Capitalized name, as shown in reports ("Unigram", "Bigram", "Trigram").
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = self.name();
		let mut chars = name.chars();
		if let Some(first) = chars.next() {
			write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
		}
		Ok(())
	}
}

impl FromStr for Order {
	type Err = NGramError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"unigram" => Ok(Order::Unigram),
			"bigram" => Ok(Order::Bigram),
			"trigram" => Ok(Order::Trigram),
			_ => Err(NGramError::UnknownOrder(s.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(line: &str) -> Vec<String> {
		line.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn test_annotate() {
		let line = tokens("a b");
		assert_eq!(Order::Unigram.annotate(&line), vec!["a", "b"]);
		assert_eq!(Order::Bigram.annotate(&line), vec!["<s>", "a", "b", "</s>"]);
		assert_eq!(Order::Trigram.annotate(&line), vec!["<s>", "<s>", "a", "b", "</s>"]);
	}

	#[test]
	fn test_from_str() {
		assert_eq!("bigram".parse::<Order>().unwrap(), Order::Bigram);
		assert_eq!(" TRIGRAM ".parse::<Order>().unwrap(), Order::Trigram);
		assert!(matches!("fourgram".parse::<Order>(), Err(NGramError::UnknownOrder(_))));
	}

	#[test]
	fn test_display() {
		assert_eq!(Order::Unigram.to_string(), "Unigram");
		assert_eq!(Order::Trigram.to_string(), "Trigram");
	}
}
