//! Word-level Markov chain text generation library.
//!
//! This crate builds an n-gram chain model from a text and walks it to
//! produce new text in the same style:
//! - Tokenization with an explicit end-of-corpus sentinel
//! - Chain model construction (n-gram key to observed successors)
//! - Random walk generation with a sentence-aware or uniform start policy
//! - An injectable sampler so generations can be reproduced
//!
//! `run` is the entry point used by the command line: it reads a file,
//! builds the model and returns the generated texts.

use std::path::PathBuf;

use log::info;

/// Chain model, tokens, sampling and generation.
pub mod model;

/// Error taxonomy shared by every operation of the crate.
pub mod error;

/// File loading.
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use model::chain_model::ChainModel;
pub use model::generation_input::{GenerationInput, StartPolicy};
pub use model::generator::Generator;
pub use model::sampler::{RngSampler, Sampler};
pub use model::token::{NGram, Token, tokenize};

/// Parsed arguments of a generation run.
#[derive(Clone, Debug)]
pub struct RunArgs {
	/// UTF-8 text file used as corpus.
	pub path: PathBuf,
	/// Number of words per n-gram key (>= 1).
	pub size: usize,
	/// Policy, step cap, count and seed of the generation.
	pub input: GenerationInput,
}

/// Reads `args.path`, builds the chain model and generates
/// `args.input.count()` texts.
///
/// # Errors
/// - `Error::InvalidSize` if `args.size == 0` (checked before reading)
/// - `Error::Io` if the file cannot be read
/// - Any generation error (see `generate_text`)
pub fn run<S: Sampler>(args: &RunArgs, sampler: &mut S) -> Result<Vec<String>> {
	if args.size == 0 {
		return Err(Error::InvalidSize(args.size));
	}
	let text = io::read_text(&args.path)?;
	info!("read {} bytes from {}", text.len(), args.path.display());
	generate_text(&text, args.size, &args.input, sampler)
}

/// Builds the chain model for `text` and generates `input.count()` texts.
///
/// Every text is an independent walk over the same model.
///
/// # Errors
/// - `Error::InvalidSize` if `size == 0`
/// - `Error::EmptyModel` if no start key is eligible
/// - `Error::GenerationStalled` if a walk exceeds `input.max_steps`
pub fn generate_text<S: Sampler>(
	text: &str,
	size: usize,
	input: &GenerationInput,
	sampler: &mut S,
) -> Result<Vec<String>> {
	let model = ChainModel::build(&tokenize(text), size)?;
	info!("chain model ready: {} keys of {} words", model.len(), model.size());

	let generator = Generator::new(&model, input);
	(0..input.count()).map(|_| generator.generate(sampler)).collect()
}
