use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io;

/// Default cap on walk steps before a generation is reported as stalled.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Strategy used to select the starting key and the stop condition.
///
/// # Variants
/// - `Sentence`: start on a key whose first word is capitalized and stop at
///   the first word ending in `.`, `?` or `!` (or at the end of the corpus).
/// - `Uniform`: start on any key and stop only at the end of the corpus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPolicy {
	#[default]
	Sentence,
	Uniform,
}

impl std::str::FromStr for StartPolicy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"sentence" => Ok(StartPolicy::Sentence),
			"uniform" => Ok(StartPolicy::Uniform),
			other => Err(Error::Config(format!(
				"Policy must be 'sentence' or 'uniform', got '{other}'"
			))),
		}
	}
}

/// Parameters of a generation run.
///
/// Can be read from a JSON file; missing fields take their default value.
///
/// ```json
/// { "policy": "uniform", "max_steps": 5000, "count": 3, "seed": 42 }
/// ```
///
/// # Invariants
/// - `count` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationInput {
	/// Start and stop strategy.
	pub policy: StartPolicy,

	/// Maximum number of walk steps per generation (0 = unbounded).
	pub max_steps: usize,

	/// Number of texts to generate per run.
	count: usize,

	/// Seed for a reproducible random stream. `None` uses entropy.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			policy: StartPolicy::default(),
			max_steps: DEFAULT_MAX_STEPS,
			count: 1,
			seed: None,
		}
	}
}

impl GenerationInput {
	/// Loads a configuration from a JSON file.
	///
	/// # Errors
	/// - `Error::Io` if the file cannot be read
	/// - `Error::Config` if the content is not a valid configuration
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let contents = io::read_text(&path)?;
		Self::from_json(&contents)
	}

	/// Parses a configuration from a JSON string.
	///
	/// # Errors
	/// Returns `Error::Config` on malformed JSON or an invalid value.
	pub fn from_json(contents: &str) -> Result<Self> {
		let input: Self = serde_json::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
		if input.count == 0 {
			return Err(Error::Config("count must be >= 1".to_owned()));
		}
		Ok(input)
	}

	/// Returns the number of texts to generate.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Sets the number of texts to generate.
	///
	/// # Errors
	/// Returns an error if `count` is 0.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Err(Error::Config("count must be >= 1".to_owned()));
		}
		self.count = count;
		Ok(())
	}
}
