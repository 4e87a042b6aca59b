use super::sampler::Sampler;
use super::token::{NGram, Token};

/// Represents a state in the chain model.
///
/// A `State` corresponds to one n-gram key and stores every token observed
/// right after it in the source, one entry per occurrence.
///
/// Conceptually, this is a node in a Markov chain where each outgoing edge
/// appears as many times as it was observed, so a uniform pick over the
/// list follows the observed frequencies.
///
/// ## Responsibilities:
/// - Accumulate successors during the build scan
/// - Sample the next token through a `Sampler`
///
/// ## Invariants
/// - All successors belong to the same `key`
/// - Once built, `successors` is never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Identifier of the state.
	key: NGram,
	/// Successors in order of appearance in the source.
	/// Example: (hi, there) => [mary, juanita]
	successors: Vec<Token>,
}

impl State {
	/// Creates a new state for the given key with no successor yet.
	pub(crate) fn new(key: NGram) -> Self {
		Self { key, successors: Vec::new() }
	}

	/// Records one occurrence of `next` following this key.
	pub(crate) fn add_successor(&mut self, next: Token) {
		self.successors.push(next);
	}

	pub fn key(&self) -> &NGram {
		&self.key
	}

	pub fn successors(&self) -> &[Token] {
		&self.successors
	}

	/// Picks the next token.
	///
	/// Returns `None` if the state has no successors.
	pub fn sample<S: Sampler>(&self, sampler: &mut S) -> Option<&Token> {
		sampler.choose(&self.successors)
	}
}
