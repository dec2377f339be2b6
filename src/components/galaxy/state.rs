//! Simulation context owned by the frame driver.
//!
//! Holds the particle set together with the surface bounds and the last
//! pointer position, so the physics step and the renderer read explicit state
//! instead of page globals.

use log::debug;

use super::config::FieldConfig;
use super::particles::{Particle, spawn_set};
use super::random::RandomSource;
use super::render;
use super::surface::Surface;
use super::theme::Theme;

/// Drawing surface dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// A point in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Last known pointer position.
///
/// Absent until the first pointer-move notification, never expires afterwards.
/// Written only by the pointer-move handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer {
	last: Option<Point>,
}

impl Pointer {
	/// Record a pointer-move. No smoothing or validation.
	pub fn track(&mut self, x: f64, y: f64) {
		self.last = Some(Point { x, y });
	}

	pub fn position(&self) -> Option<Point> {
		self.last
	}
}

/// Particle set plus everything the per-frame update needs to read.
///
/// Created once at mount. The particle count is fixed here from the initial
/// width and reused by every [`resize`](Self::resize).
pub struct GalaxyState<R> {
	pub particles: Vec<Particle>,
	pub bounds: Bounds,
	pub pointer: Pointer,
	count: usize,
	config: FieldConfig,
	random: R,
}

impl<R: RandomSource> GalaxyState<R> {
	pub fn new(config: FieldConfig, bounds: Bounds, mut random: R) -> Self {
		let count = config.particle_count(bounds.width);
		let particles = spawn_set(count, bounds, &config, &mut random);
		Self {
			particles,
			bounds,
			pointer: Pointer::default(),
			count,
			config,
			random,
		}
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Adopt new surface bounds and replace the whole particle set.
	///
	/// Nothing survives from the previous set, even if the bounds are unchanged.
	pub fn resize(&mut self, bounds: Bounds) {
		self.bounds = bounds;
		self.particles = spawn_set(self.count, bounds, &self.config, &mut self.random);
		debug!(
			"galaxy-field: rebuilt {} particles for {}x{}",
			self.count, bounds.width, bounds.height
		);
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let pointer = self.pointer.position();
		for p in &mut self.particles {
			p.step(self.bounds, pointer, &self.config);
		}
	}

	/// One full frame: every particle is stepped before anything is drawn,
	/// then the surface is cleared and redrawn.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &S, theme: &Theme) {
		self.step();
		render::render(&self.particles, self.bounds, surface, &self.config, theme);
	}
}
