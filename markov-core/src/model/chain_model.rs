use std::collections::HashMap;

use log::debug;

use super::generation_input::StartPolicy;
use super::state::State;
use super::token::{NGram, Token};
use crate::error::{Error, Result};

/// Represents a word-level n-gram chain model.
///
/// The `ChainModel` maps every run of `size` consecutive tokens found in
/// the source to the list of tokens that followed it.
///
/// # Responsibilities
/// - Build the model from a token sequence in one scan
/// - Give read-only access to states and successor lists
/// - Select the keys a generation may start from
///
/// # Invariants
/// - `size` is always >= 1
/// - Each state corresponds to a unique key of exactly `size` words
/// - Every successor list is non-empty
/// - `states` is ordered by first appearance of the key in the source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainModel {
	/// Number of tokens in each key.
	size: usize, // must be >= 1

	/// States in order of first appearance.
	states: Vec<State>,

	/// Position of each key in `states`.
	index: HashMap<NGram, usize>,
}

impl ChainModel {
	/// Builds the chain model from `tokens` (words followed by `Token::End`).
	///
	/// Slides a window of `size` tokens over the sequence; each window whose
	/// successor exists records that successor under its key.
	///
	/// # Notes
	/// - A sequence no longer than `size` yields an empty model.
	/// - The last recorded successor is always the final token (`End` when
	///   the input comes from `tokenize`).
	///
	/// # Errors
	/// Returns `Error::InvalidSize` if `size == 0`.
	pub fn build(tokens: &[Token], size: usize) -> Result<Self> {
		if size == 0 {
			return Err(Error::InvalidSize(size));
		}

		let mut model = Self { size, states: Vec::new(), index: HashMap::new() };

		// Each window of size + 1 is a key followed by its successor
		for window in tokens.windows(size + 1) {
			let key = NGram::new(window[..size].to_vec());
			let next = window[size].clone();

			let position = match model.index.get(&key) {
				Some(&position) => position,
				None => {
					model.states.push(State::new(key.clone()));
					model.index.insert(key, model.states.len() - 1);
					model.states.len() - 1
				}
			};
			model.states[position].add_successor(next);
		}

		debug!(
			"built chain model: size={}, tokens={}, keys={}, successors={}",
			size,
			tokens.len(),
			model.len(),
			model.total_successors()
		);

		Ok(model)
	}

	/// Number of tokens per key.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the state stored for `key`, if any.
	pub fn state(&self, key: &NGram) -> Option<&State> {
		self.index.get(key).map(|&position| &self.states[position])
	}

	/// Returns the successors observed after `key`.
	pub fn successors(&self, key: &NGram) -> Option<&[Token]> {
		self.state(key).map(State::successors)
	}

	/// Iterates over the keys in order of first appearance.
	pub fn keys(&self) -> impl Iterator<Item = &NGram> {
		self.states.iter().map(State::key)
	}

	/// Sum of all successor list lengths (one entry per scanned window).
	pub fn total_successors(&self) -> usize {
		self.states.iter().map(|state| state.successors().len()).sum()
	}

	/// Keys a generation may start from under `policy`.
	///
	/// - `Uniform`: every key
	/// - `Sentence`: keys whose first word starts with an uppercase letter
	pub fn start_keys(&self, policy: StartPolicy) -> Vec<&NGram> {
		match policy {
			StartPolicy::Uniform => self.keys().collect(),
			StartPolicy::Sentence => self.keys().filter(|key| key.is_sentence_start()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::tokenize;

	fn words(list: &[&str]) -> Vec<Token> {
		list.iter().map(|w| Token::from(*w)).collect()
	}

	#[test]
	fn zero_size_is_rejected() {
		let tokens = tokenize("a b c");
		assert!(matches!(ChainModel::build(&tokens, 0), Err(Error::InvalidSize(0))));
	}

	#[test]
	fn bigram_scenario() {
		let tokens = tokenize("hi there mary hi there juanita");
		let model = ChainModel::build(&tokens, 2).unwrap();

		assert_eq!(model.len(), 4);
		assert_eq!(
			model.successors(&NGram::from_words(&["hi", "there"])).unwrap(),
			words(&["mary", "juanita"]).as_slice()
		);
		assert_eq!(
			model.successors(&NGram::from_words(&["there", "mary"])).unwrap(),
			words(&["hi"]).as_slice()
		);
		assert_eq!(
			model.successors(&NGram::from_words(&["mary", "hi"])).unwrap(),
			words(&["there"]).as_slice()
		);
		assert_eq!(
			model.successors(&NGram::from_words(&["there", "juanita"])).unwrap(),
			&[Token::End]
		);
	}

	#[test]
	fn keys_follow_first_appearance() {
		let model = ChainModel::build(&tokenize("hi there mary hi there juanita"), 2).unwrap();
		let keys: Vec<&NGram> = model.keys().collect();
		assert_eq!(keys[0], &NGram::from_words(&["hi", "there"]));
		assert_eq!(keys[1], &NGram::from_words(&["there", "mary"]));
		assert_eq!(keys[2], &NGram::from_words(&["mary", "hi"]));
		assert_eq!(keys[3], &NGram::from_words(&["there", "juanita"]));
	}

	#[test]
	fn one_successor_per_window() {
		let tokens = tokenize("the cat sat on the mat and the cat ran");
		for size in 1..=4 {
			let model = ChainModel::build(&tokens, size).unwrap();
			assert_eq!(model.total_successors(), tokens.len() - size);
			assert!(model.keys().all(|key| key.len() == size));
			assert!(model.states.iter().all(|state| !state.successors().is_empty()));
			assert!(model.states.iter().any(|state| state.successors().contains(&Token::End)));
		}
	}

	#[test]
	fn unigram_model() {
		let model = ChainModel::build(&tokenize("a b a c"), 1).unwrap();
		assert_eq!(model.successors(&NGram::from_words(&["a"])).unwrap(), words(&["b", "c"]).as_slice());
		assert_eq!(model.successors(&NGram::from_words(&["c"])).unwrap(), &[Token::End]);
	}

	#[test]
	fn short_input_gives_empty_model() {
		let tokens = tokenize("one two");
		// 3 tokens with the sentinel
		assert!(ChainModel::build(&tokens, 3).unwrap().is_empty());
		assert!(ChainModel::build(&tokens, 5).unwrap().is_empty());
		assert!(ChainModel::build(&tokenize(""), 1).unwrap().is_empty());
	}

	#[test]
	fn build_is_repeatable() {
		let tokens = tokenize("a b a b c a b d");
		let first = ChainModel::build(&tokens, 2).unwrap();
		let second = ChainModel::build(&tokens, 2).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn sentence_start_keys() {
		let model = ChainModel::build(&tokenize("The dog ran. the End came"), 2).unwrap();
		let starts = model.start_keys(StartPolicy::Sentence);
		assert_eq!(
			starts,
			vec![&NGram::from_words(&["The", "dog"]), &NGram::from_words(&["End", "came"])]
		);
		assert_eq!(model.start_keys(StartPolicy::Uniform).len(), model.len());
	}
}
