//! Random sources used to seed particles.
//!
//! The simulation never calls a global RNG directly. Everything that needs
//! randomness takes a [`RandomSource`], so tests can swap in fixed sequences.

/// A stream of uniform samples in `[0, 1)`.
pub trait RandomSource {
	/// Next sample, uniform in `[0, 1)`.
	fn next_unit(&mut self) -> f64;

	/// Uniform sample in `[min, max)`. An empty range yields `min`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		let value = min + self.next_unit() * (max - min);
		if value < max {
			value
		} else if min < max {
			// Rounding can land exactly on `max` for samples just below 1.
			max.next_down()
		} else {
			min
		}
	}
}

/// Browser randomness via `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}
