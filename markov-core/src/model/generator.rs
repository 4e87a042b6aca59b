use log::{trace, warn};

use crate::error::{Error, Result};
use crate::model::chain_model::ChainModel;
use crate::model::generation_input::{GenerationInput, StartPolicy};
use crate::model::sampler::Sampler;
use crate::model::token::NGram;

/// Walks a `ChainModel` to produce text.
///
/// # Responsibilities
/// - Select a start key according to the `StartPolicy`
/// - Slide the key window one sampled successor at a time
/// - Stop on a terminal key: the end of the corpus, or (with
///   `StartPolicy::Sentence`) a word closing a sentence
/// - Report walks that exceed the step cap instead of looping forever
///
/// The model is borrowed read-only; one generator can run any number of
/// independent walks.
#[derive(Debug)]
pub struct Generator<'a> {
	model: &'a ChainModel,
	policy: StartPolicy,
	max_steps: usize,
}

impl<'a> Generator<'a> {
	pub fn new(model: &'a ChainModel, input: &GenerationInput) -> Self {
		Self { model, policy: input.policy, max_steps: input.max_steps }
	}

	/// Generates one text from a randomly selected start key.
	///
	/// # Errors
	/// - `Error::EmptyModel` if no key is eligible as a start
	/// - `Error::GenerationStalled` if the step cap is exceeded
	pub fn generate<S: Sampler>(&self, sampler: &mut S) -> Result<String> {
		let start = self.pick_start(sampler)?.clone();
		self.walk(start, sampler)
	}

	/// Generates one text starting from `start`.
	///
	/// The start key is not checked against the policy: a lowercase key
	/// is accepted under `StartPolicy::Sentence`.
	///
	/// # Errors
	/// - `Error::UnknownKey` if `start` is not a key of the model
	/// - `Error::GenerationStalled` if the step cap is exceeded
	pub fn generate_from<S: Sampler>(&self, start: &NGram, sampler: &mut S) -> Result<String> {
		if self.model.state(start).is_none() {
			return Err(Error::UnknownKey(start.to_string()));
		}
		self.walk(start.clone(), sampler)
	}

	/// Picks a start key among the keys allowed by the policy.
	fn pick_start<S: Sampler>(&self, sampler: &mut S) -> Result<&'a NGram> {
		let candidates = self.model.start_keys(self.policy);
		sampler.choose(&candidates).copied().ok_or(Error::EmptyModel)
	}

	/// Random walk over the key space until a terminal key is reached.
	fn walk<S: Sampler>(&self, start: NGram, sampler: &mut S) -> Result<String> {
		let mut words: Vec<String> = Vec::new();
		let mut key = start;
		let mut steps = 0;

		loop {
			// Sentence end anywhere in the key closes the text
			if self.policy == StartPolicy::Sentence {
				if let Some(last) = key.sentence_end() {
					Self::emit(&mut words, &key, last + 1);
					break;
				}
			}

			if key.is_terminal() {
				Self::emit(&mut words, &key, key.len() - 1);
				break;
			}

			// Only sliding counts as a step; terminal keys always return
			if self.max_steps > 0 && steps >= self.max_steps {
				warn!("walk stopped after {} steps at key {}", steps, key);
				return Err(Error::GenerationStalled { steps });
			}
			steps += 1;

			Self::emit(&mut words, &key, 1);

			// Walked keys come from model windows and built states are never
			// empty, so a miss means `key` is not a model key
			let next = self
				.model
				.state(&key)
				.and_then(|state| state.sample(&mut *sampler))
				.cloned()
				.ok_or_else(|| Error::UnknownKey(key.to_string()))?;

			trace!("step {}: {} -> {}", steps, key, next);
			key = key.slide(next);
		}

		Ok(words.join(" "))
	}

	/// Appends the words among the first `count` tokens of `key`.
	fn emit(words: &mut Vec<String>, key: &NGram, count: usize) {
		words.extend(
			key.tokens()
				.iter()
				.take(count)
				.filter_map(|token| token.as_word().map(str::to_owned)),
		);
	}
}
