//! Drawing the field.
//!
//! Each frame is drawn in passes:
//! 1. Clear the whole surface
//! 2. Particles, each in its own opacity
//! 3. Links between pairs closer than the link distance, fading with distance

use super::config::FieldConfig;
use super::particles::Particle;
use super::state::Bounds;
use super::surface::Surface;
use super::theme::Theme;

/// Renders one frame of the field to `surface`.
pub fn render<S: Surface + ?Sized>(
	particles: &[Particle],
	bounds: Bounds,
	surface: &S,
	config: &FieldConfig,
	theme: &Theme,
) {
	surface.clear(bounds);
	draw_particles(particles, surface, theme);
	draw_links(particles, surface, config, theme);
}

fn draw_particles<S: Surface + ?Sized>(particles: &[Particle], surface: &S, theme: &Theme) {
	for p in particles {
		surface.fill_circle(
			p.x,
			p.y,
			p.radius(),
			theme.particle_color.with_alpha(p.opacity()),
		);
	}
}

fn draw_links<S: Surface + ?Sized>(
	particles: &[Particle],
	surface: &S,
	config: &FieldConfig,
	theme: &Theme,
) {
	config
		.neighbor_scan
		.for_each_pair(particles, config.link_distance, |i, j, distance| {
			let (a, b) = (&particles[i], &particles[j]);
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				theme.link_color.with_alpha(link_alpha(distance, config)),
				theme.link_width,
			);
		});
}

/// Linear fade from `link_max_alpha` at distance 0 to nothing at the link
/// distance.
pub fn link_alpha(distance: f64, config: &FieldConfig) -> f64 {
	if config.link_distance <= 0.0 {
		return 0.0;
	}
	(config.link_max_alpha * (1.0 - distance / config.link_distance)).max(0.0)
}
