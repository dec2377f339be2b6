//! Finding particle pairs close enough to be linked.
//!
//! Both strategies report every unordered pair `(i, j)` with `i < j` whose
//! distance is below the threshold, exactly once. Only the visiting order
//! differs.

use std::collections::HashMap;

use serde::Deserialize;

use super::particles::Particle;

/// Strategy for the link-distance search.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NeighborScan {
	/// Check every pair directly. O(n²), fine for a few hundred particles.
	#[default]
	Pairwise,
	/// Bucket particles into threshold-sized cells and only compare adjacent
	/// cells.
	Grid,
}

impl NeighborScan {
	/// Call `visit(i, j, distance)` for each pair closer than `threshold`.
	pub fn for_each_pair<F>(self, particles: &[Particle], threshold: f64, visit: F)
	where
		F: FnMut(usize, usize, f64),
	{
		match self {
			NeighborScan::Pairwise => pairwise(particles, threshold, visit),
			NeighborScan::Grid => bucketed(particles, threshold, visit),
		}
	}
}

/// Compare every unordered pair once, in index order.
pub fn pairwise<F>(particles: &[Particle], threshold: f64, mut visit: F)
where
	F: FnMut(usize, usize, f64),
{
	for (i, a) in particles.iter().enumerate() {
		for (j, b) in particles.iter().enumerate().skip(i + 1) {
			let distance = a.distance_to(b);
			if distance < threshold {
				visit(i, j, distance);
			}
		}
	}
}

/// Uniform-grid variant of [`pairwise`].
///
/// Cells are `threshold` wide, so any pair within range lies in the same or
/// an adjacent cell. Positions outside the surface just land in negative or
/// far cells.
pub fn bucketed<F>(particles: &[Particle], threshold: f64, mut visit: F)
where
	F: FnMut(usize, usize, f64),
{
	if !(threshold > 0.0 && threshold.is_finite()) {
		return pairwise(particles, threshold, visit);
	}

	let cell_of = |p: &Particle| {
		(
			(p.x / threshold).floor() as i64,
			(p.y / threshold).floor() as i64,
		)
	};

	let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
	for (i, p) in particles.iter().enumerate() {
		cells.entry(cell_of(p)).or_default().push(i);
	}

	for (i, a) in particles.iter().enumerate() {
		let (cx, cy) = cell_of(a);
		for ox in -1..=1 {
			for oy in -1..=1 {
				let Some(bucket) = cells.get(&(cx + ox, cy + oy)) else {
					continue;
				};
				for &j in bucket.iter().filter(|&&j| j > i) {
					let distance = a.distance_to(&particles[j]);
					if distance < threshold {
						visit(i, j, distance);
					}
				}
			}
		}
	}
}
