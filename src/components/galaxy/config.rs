//! Tunable parameters for the galaxy field.
//!
//! [`FieldConfig::default`] reproduces the stock look. A page may override any
//! subset of fields with a JSON object, e.g.
//!
//! ```json
//! { "link_distance": 120, "neighbor_scan": "grid" }
//! ```

use serde::Deserialize;

use super::neighbors::NeighborScan;

/// Upper limit on either particle count. Links are found by an O(n²) scan
/// every frame, so counts beyond this stall the page.
pub const MAX_PARTICLES: usize = 2000;

/// Numeric parameters for spawning, physics, and link rendering.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Initial viewport widths below this get `compact_count` particles.
	pub breakpoint: f64,
	/// Particle count for narrow viewports.
	pub compact_count: usize,
	/// Particle count for everything else.
	pub full_count: usize,
	/// Radius is drawn from `[radius_min, radius_max)`.
	pub radius_min: f64,
	pub radius_max: f64,
	/// Each velocity component is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Opacity is drawn from `[opacity_min, opacity_max)`.
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Particles closer than this to the pointer are pushed away.
	pub repulsion_radius: f64,
	/// Fraction of the pointer offset removed per frame while in range.
	pub repulsion_strength: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Link alpha at zero distance; fades linearly to 0 at `link_distance`.
	pub link_max_alpha: f64,
	/// How linked pairs are found.
	pub neighbor_scan: NeighborScan,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			breakpoint: 768.0,
			compact_count: 50,
			full_count: 100,
			radius_min: 0.5,
			radius_max: 2.5,
			max_speed: 0.25,
			opacity_min: 0.1,
			opacity_max: 0.6,
			repulsion_radius: 150.0,
			repulsion_strength: 0.01,
			link_distance: 100.0,
			link_max_alpha: 0.1,
			neighbor_scan: NeighborScan::Pairwise,
		}
	}
}

impl FieldConfig {
	/// Parse a (possibly partial) JSON override and sanitize it.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(json).map(Self::sanitized)
	}

	/// Density policy: how many particles a session gets, decided once from
	/// the viewport width at startup.
	pub fn particle_count(&self, initial_width: f64) -> usize {
		if initial_width < self.breakpoint {
			self.compact_count
		} else {
			self.full_count
		}
	}

	/// Repair values that would make spawning or drawing misbehave.
	///
	/// Non-finite numbers fall back to their defaults, inverted ranges are
	/// swapped, distances and sizes are clamped to be non-negative, alphas to
	/// `[0, 1]`, and particle counts to [`MAX_PARTICLES`].
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let finite_or = |value: f64, fallback: f64| {
			if value.is_finite() { value } else { fallback }
		};
		let ordered = |min: f64, max: f64| if min > max { (max, min) } else { (min, max) };

		let (radius_min, radius_max) = ordered(
			finite_or(self.radius_min, defaults.radius_min).max(0.0),
			finite_or(self.radius_max, defaults.radius_max).max(0.0),
		);
		let (opacity_min, opacity_max) = ordered(
			finite_or(self.opacity_min, defaults.opacity_min).clamp(0.0, 1.0),
			finite_or(self.opacity_max, defaults.opacity_max).clamp(0.0, 1.0),
		);

		Self {
			breakpoint: finite_or(self.breakpoint, defaults.breakpoint),
			compact_count: self.compact_count.min(MAX_PARTICLES),
			full_count: self.full_count.min(MAX_PARTICLES),
			radius_min,
			radius_max,
			max_speed: finite_or(self.max_speed, defaults.max_speed).abs(),
			opacity_min,
			opacity_max,
			repulsion_radius: finite_or(self.repulsion_radius, defaults.repulsion_radius).max(0.0),
			repulsion_strength: finite_or(self.repulsion_strength, defaults.repulsion_strength),
			link_distance: finite_or(self.link_distance, defaults.link_distance).max(0.0),
			link_max_alpha: finite_or(self.link_max_alpha, defaults.link_max_alpha).clamp(0.0, 1.0),
			neighbor_scan: self.neighbor_scan,
		}
	}
}
