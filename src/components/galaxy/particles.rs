//! Drifting background particles: spawning and the per-frame physics step.

use super::config::FieldConfig;
use super::random::RandomSource;
use super::state::{Bounds, Point};

/// A single drifting point.
///
/// Position and velocity evolve every frame. Radius and opacity are fixed at
/// spawn and only change when the whole set is rebuilt.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	radius: f64,
	opacity: f64,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, opacity: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			opacity,
		}
	}

	/// Spawn a particle uniformly inside `bounds` with randomized size, drift
	/// and opacity.
	pub fn spawn<R: RandomSource + ?Sized>(
		random: &mut R,
		bounds: Bounds,
		config: &FieldConfig,
	) -> Self {
		let x = random.range(0.0, bounds.width);
		let y = random.range(0.0, bounds.height);
		let radius = random.range(config.radius_min, config.radius_max);
		let vx = random.range(-config.max_speed, config.max_speed);
		let vy = random.range(-config.max_speed, config.max_speed);
		let opacity = random.range(config.opacity_min, config.opacity_max);
		Self::new(x, y, vx, vy, radius, opacity)
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	pub fn opacity(&self) -> f64 {
		self.opacity
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Advance one frame: integrate, reflect at the edges, then back away from
	/// the pointer if it is within the repulsion radius.
	///
	/// Reflection only flips the velocity sign. The position is not clamped,
	/// so a particle that crossed an edge stays outside for one frame before
	/// the flipped velocity carries it back.
	pub fn step(&mut self, bounds: Bounds, pointer: Option<Point>, config: &FieldConfig) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > bounds.width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > bounds.height {
			self.vy = -self.vy;
		}

		if let Some(pointer) = pointer {
			let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < config.repulsion_radius {
				self.x -= dx * config.repulsion_strength;
				self.y -= dy * config.repulsion_strength;
			}
		}
	}
}

/// Build a fresh particle set of exactly `count` particles.
pub fn spawn_set<R: RandomSource + ?Sized>(
	count: usize,
	bounds: Bounds,
	config: &FieldConfig,
	random: &mut R,
) -> Vec<Particle> {
	(0..count)
		.map(|_| Particle::spawn(random, bounds, config))
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::random::testing::Sequence;
	use super::*;

	const EPS: f64 = 1e-9;

	fn still(x: f64, y: f64) -> Particle {
		Particle::new(x, y, 0.0, 0.0, 1.0, 0.5)
	}

	#[test]
	fn test_spawn_ranges() {
		let config = FieldConfig::default();
		let bounds = Bounds::new(1280.0, 720.0);
		let mut rng = SmallRng::seed_from_u64(42);

		for p in spawn_set(10_000, bounds, &config, &mut rng) {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!((0.5..2.5).contains(&p.radius()));
			assert!((0.1..0.6).contains(&p.opacity()));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
		}
	}

	#[test]
	fn test_spawn_extremes() {
		let config = FieldConfig::default();
		let bounds = Bounds::new(100.0, 50.0);

		let low = Particle::spawn(&mut Sequence::constant(0.0), bounds, &config);
		assert_eq!((low.x, low.y), (0.0, 0.0));
		assert!((low.radius() - 0.5).abs() < EPS);
		assert!((low.vx - -0.25).abs() < EPS);
		assert!((low.opacity() - 0.1).abs() < EPS);

		let mid = Particle::spawn(
			&mut Sequence::new(&[0.25, 0.5, 0.75, 1.0 / 3.0, 0.6, 0.2]),
			bounds,
			&config,
		);
		assert!((mid.x - 25.0).abs() < EPS);
		assert!((mid.y - 25.0).abs() < EPS);
		assert!((mid.radius() - 2.0).abs() < EPS);
		assert!((mid.vx - (-0.25 + 0.5 / 3.0)).abs() < EPS);
		assert!((mid.vy - 0.05).abs() < EPS);
		assert!((mid.opacity() - 0.2).abs() < EPS);
	}

	#[test]
	fn test_spawn_largest_sample_stays_below_max() {
		let config = FieldConfig::default();
		let mut rng = Sequence::constant(1.0 - f64::EPSILON / 2.0);
		let p = Particle::spawn(&mut rng, Bounds::new(100.0, 100.0), &config);

		assert!(p.x < 100.0 && p.y < 100.0);
		assert!(p.radius() < 2.5);
		assert!(p.opacity() < 0.6);
		assert!(p.vx < 0.25 && p.vy < 0.25);
	}

	#[test]
	fn test_spawn_set_count() {
		let mut rng = SmallRng::seed_from_u64(1);
		let config = FieldConfig::default();
		let bounds = Bounds::new(800.0, 600.0);
		assert_eq!(spawn_set(0, bounds, &config, &mut rng).len(), 0);
		assert_eq!(spawn_set(50, bounds, &config, &mut rng).len(), 50);
	}

	#[test]
	fn test_integrates_velocity() {
		let mut p = Particle::new(10.0, 20.0, 0.2, -0.1, 1.0, 0.5);
		p.step(Bounds::new(100.0, 100.0), None, &FieldConfig::default());
		assert!((p.x - 10.2).abs() < EPS);
		assert!((p.y - 19.9).abs() < EPS);
		assert_eq!((p.vx, p.vy), (0.2, -0.1));
	}

	#[test]
	fn test_reflection_flips_without_clamping() {
		let bounds = Bounds::new(100.0, 100.0);
		let config = FieldConfig::default();
		let mut p = Particle::new(101.0, 50.0, 0.2, 0.0, 1.0, 0.5);

		p.step(bounds, None, &config);
		assert!((p.vx - -0.2).abs() < EPS);
		// Still outside: the position is left alone for this frame.
		assert!((p.x - 101.2).abs() < EPS);
		assert!(p.x > bounds.width);

		p.step(bounds, None, &config);
		assert!(p.x < 101.2);
	}

	#[test]
	fn test_reflection_per_axis() {
		let bounds = Bounds::new(100.0, 100.0);
		let mut p = Particle::new(50.0, -0.05, 0.1, -0.1, 1.0, 0.5);
		p.step(bounds, None, &FieldConfig::default());
		assert_eq!(p.vx, 0.1);
		assert_eq!(p.vy, 0.1);
	}

	#[test]
	fn test_edges_are_inside() {
		let bounds = Bounds::new(100.0, 100.0);
		let mut p = Particle::new(99.5, 0.5, 0.5, -0.5, 1.0, 0.5);
		p.step(bounds, None, &FieldConfig::default());
		// Landing exactly on the edge does not reflect.
		assert_eq!((p.x, p.y), (100.0, 0.0));
		assert_eq!((p.vx, p.vy), (0.5, -0.5));
	}

	#[test]
	fn test_repulsion_inside_radius() {
		let config = FieldConfig::default();
		let mut p = still(200.0, 200.0);
		let pointer = Point { x: 349.0, y: 200.0 };

		p.step(Bounds::new(1000.0, 1000.0), Some(pointer), &config);
		assert!((p.x - (200.0 - 149.0 * 0.01)).abs() < EPS);
		assert!((p.y - 200.0).abs() < EPS);
	}

	#[test]
	fn test_repulsion_outside_radius() {
		let config = FieldConfig::default();
		let mut p = Particle::new(200.0, 200.0, -0.1, 0.05, 1.0, 0.5);
		let pointer = Point { x: 351.0, y: 200.0 };

		p.step(Bounds::new(1000.0, 1000.0), Some(pointer), &config);
		assert!((p.x - 199.9).abs() < EPS);
		assert!((p.y - 200.05).abs() < EPS);
	}

	#[test]
	fn test_repulsion_pushes_away_diagonally() {
		let config = FieldConfig::default();
		let mut p = still(100.0, 100.0);
		let pointer = Point { x: 130.0, y: 140.0 };
		let before = ((130.0f64 - 100.0).powi(2) + (140.0f64 - 100.0).powi(2)).sqrt();

		p.step(Bounds::new(500.0, 500.0), Some(pointer), &config);
		let after = ((pointer.x - p.x).powi(2) + (pointer.y - p.y).powi(2)).sqrt();
		assert!(after > before);
		assert!((p.x - 99.7).abs() < EPS);
		assert!((p.y - 99.6).abs() < EPS);
	}

	#[test]
	fn test_pointer_at_origin_still_repels() {
		let config = FieldConfig::default();
		let mut p = still(10.0, 10.0);
		p.step(Bounds::new(500.0, 500.0), Some(Point { x: 0.0, y: 0.0 }), &config);
		assert!((p.x - 10.1).abs() < EPS);
		assert!((p.y - 10.1).abs() < EPS);
	}

	#[test]
	fn test_step_keeps_radius_and_opacity() {
		let config = FieldConfig::default();
		let mut p = Particle::new(0.0, 0.0, -0.2, -0.2, 2.25, 0.45);
		for _ in 0..50 {
			p.step(Bounds::new(10.0, 10.0), Some(Point { x: 1.0, y: 1.0 }), &config);
		}
		assert_eq!(p.radius(), 2.25);
		assert_eq!(p.opacity(), 0.45);
	}

	#[test]
	fn test_distance() {
		let a = still(0.0, 0.0);
		let b = still(3.0, 4.0);
		assert!((a.distance_to(&b) - 5.0).abs() < EPS);
		assert!((b.distance_to(&a) - 5.0).abs() < EPS);
	}
}
