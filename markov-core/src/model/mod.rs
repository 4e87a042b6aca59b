//! Word-level Markov chain model and generation.
//!
//! This module provides:
//! - Tokens and n-gram keys (`Token`, `NGram`)
//! - The chain model built from a token sequence (`ChainModel`)
//! - Internal state management (`State`)
//! - Generation configuration (`GenerationInput`, `StartPolicy`)
//! - The injectable random choice capability (`Sampler`)
//! - The random walk producing text (`Generator`)

/// Random walk over a `ChainModel`.
///
/// Handles start-key selection, sentence and end-of-corpus termination,
/// and the step cap.
pub mod generator;

/// Chain model mapping n-gram keys to observed successors.
///
/// Built once from a token sequence, read-only afterwards.
pub mod chain_model;

/// Tokens, the end-of-corpus sentinel, n-gram keys and tokenization.
pub mod token;

/// Injectable source of random choices.
pub mod sampler;

/// Single state (key + successor list) of the chain model.
mod state;

/// Generation parameters and start policy.
///
/// Stores the policy, the step cap, the number of texts and the seed.
/// Can be loaded from a JSON file.
pub mod generation_input;
