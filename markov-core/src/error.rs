use std::io;
use std::path::PathBuf;

/// Result type for markov-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a chain model or walking it.
///
/// None of these are transient: a walk is fully determined by the model
/// and the sampler stream, so callers report them rather than retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The n-gram size must be a positive integer.
	#[error("Invalid n-gram size: {0} (must be >= 1)")]
	InvalidSize(usize),

	/// No legal start key exists (empty model, or no sentence start).
	#[error("No eligible start key in the chain model")]
	EmptyModel,

	/// The walk did not reach a terminal state within the step cap.
	#[error("Generation stalled after {steps} steps without reaching an end")]
	GenerationStalled { steps: usize },

	/// A key that should be part of the model is not.
	#[error("Unknown n-gram key: {0}")]
	UnknownKey(String),

	/// The corpus or configuration file could not be read.
	#[error("Failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A configuration value is malformed or out of range.
	#[error("Invalid configuration: {0}")]
	Config(String),
}
