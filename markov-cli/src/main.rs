use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use markov_core::{GenerationInput, RngSampler, RunArgs, StartPolicy, run};

/// Generate random text from a corpus with a word-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "markov", version, about)]
struct Cli {
	/// UTF-8 text file used as corpus
	path: PathBuf,

	/// Number of words in each n-gram key
	size: usize,

	/// Start/stop policy: 'sentence' (capitalized start, stop at . ? !) or 'uniform'
	#[arg(long)]
	policy: Option<StartPolicy>,

	/// Seed for a reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Number of texts to generate
	#[arg(long)]
	count: Option<usize>,

	/// Maximum walk steps per text (0 = unbounded)
	#[arg(long)]
	max_steps: Option<usize>,

	/// JSON file with default generation settings (flags override it)
	#[arg(long)]
	config: Option<PathBuf>,
}

impl Cli {
	/// Merges the configuration file (if any) with command line flags.
	fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = match &self.config {
			Some(path) => GenerationInput::from_json_file(path)
				.with_context(|| format!("Failed to load config {}", path.display()))?,
			None => GenerationInput::default(),
		};

		if let Some(policy) = self.policy {
			input.policy = policy;
		}
		if let Some(seed) = self.seed {
			input.seed = Some(seed);
		}
		if let Some(count) = self.count {
			input.set_count(count)?;
		}
		if let Some(max_steps) = self.max_steps {
			input.max_steps = max_steps;
		}

		Ok(input)
	}
}

fn main() -> Result<()> {
	env_logger::init();

	let cli = Cli::parse();
	let input = cli.generation_input()?;
	debug!("generation input: {:?}", input);

	let args = RunArgs { path: cli.path, size: cli.size, input };

	// Seeded runs are reproducible, others draw from the thread RNG
	let texts = match args.input.seed {
		Some(seed) => run(&args, &mut RngSampler::seeded(seed)),
		None => run(&args, &mut RngSampler::from_thread()),
	}
	.with_context(|| format!("Failed to generate text from {}", args.path.display()))?;

	for text in texts {
		println!("{text}");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positional_arguments() {
		let cli = Cli::try_parse_from(["markov", "corpus.txt", "2"]).unwrap();
		assert_eq!(cli.path, PathBuf::from("corpus.txt"));
		assert_eq!(cli.size, 2);
		assert_eq!(cli.generation_input().unwrap(), GenerationInput::default());
	}

	#[test]
	fn size_must_be_an_integer() {
		assert!(Cli::try_parse_from(["markov", "corpus.txt", "two"]).is_err());
		assert!(Cli::try_parse_from(["markov", "corpus.txt", "-1"]).is_err());
		assert!(Cli::try_parse_from(["markov", "corpus.txt"]).is_err());
	}

	#[test]
	fn flags_override_defaults() {
		let cli = Cli::try_parse_from([
			"markov", "corpus.txt", "3", "--policy", "uniform", "--seed", "7", "--count", "5",
			"--max-steps", "10",
		])
		.unwrap();
		let input = cli.generation_input().unwrap();
		assert_eq!(input.policy, StartPolicy::Uniform);
		assert_eq!(input.seed, Some(7));
		assert_eq!(input.count(), 5);
		assert_eq!(input.max_steps, 10);
	}

	#[test]
	fn zero_count_is_rejected() {
		let cli = Cli::try_parse_from(["markov", "corpus.txt", "3", "--count", "0"]).unwrap();
		assert!(cli.generation_input().is_err());
	}

	#[test]
	fn config_file_then_flags() {
		let path = std::env::temp_dir().join(format!("markov-cli-config-{}.json", std::process::id()));
		std::fs::write(&path, r#"{ "policy": "uniform", "count": 2, "seed": 1 }"#).unwrap();
		let cli = Cli::try_parse_from([
			"markov",
			"corpus.txt",
			"2",
			"--config",
			path.to_str().unwrap(),
			"--seed",
			"9",
		])
		.unwrap();
		let input = cli.generation_input();
		std::fs::remove_file(&path).unwrap();

		let input = input.unwrap();
		assert_eq!(input.policy, StartPolicy::Uniform);
		assert_eq!(input.count(), 2);
		assert_eq!(input.seed, Some(9));
	}
}
