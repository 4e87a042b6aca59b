use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Source of random choices used by the generator.
///
/// Given a non-empty ordered slice, returns one of its elements.
/// Returns `None` only when the slice is empty.
///
/// Swapping the implementation makes a generation reproducible: tests
/// use deterministic stubs, the CLI uses a seeded or thread-local RNG.
pub trait Sampler {
	fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Uniform sampler backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
	rng: R,
}

impl<R: Rng> RngSampler<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RngSampler<StdRng> {
	/// Sampler producing the same stream for the same `seed`.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl RngSampler<ThreadRng> {
	/// Sampler backed by the thread-local RNG.
	pub fn from_thread() -> Self {
		Self::new(rand::rng())
	}
}

impl<R: Rng> Sampler for RngSampler<R> {
	fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		items.choose(&mut self.rng)
	}
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
	fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		(**self).choose(items)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_slice_yields_none() {
		let mut sampler = RngSampler::seeded(7);
		let empty: [u8; 0] = [];
		assert!(sampler.choose(&empty).is_none());
	}

	#[test]
	fn choice_is_an_element() {
		let mut sampler = RngSampler::from_thread();
		let items = ["a", "b", "c"];
		for _ in 0..32 {
			let picked = sampler.choose(&items).unwrap();
			assert!(items.contains(picked));
		}
	}

	#[test]
	fn same_seed_same_stream() {
		let items: Vec<u32> = (0..100).collect();
		let mut a = RngSampler::seeded(42);
		let mut b = RngSampler::seeded(42);
		let run_a: Vec<u32> = (0..20).map(|_| *a.choose(&items).unwrap()).collect();
		let run_b: Vec<u32> = (0..20).map(|_| *b.choose(&items).unwrap()).collect();
		assert_eq!(run_a, run_b);
	}
}
