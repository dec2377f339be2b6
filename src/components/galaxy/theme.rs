//! Colors and stroke styles for the galaxy field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always `rgba(...)`, since nearly every draw here is translucent.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Visual style of the field.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Particle fill hue. Alpha comes from each particle's opacity.
	pub particle_color: Color,
	/// Link stroke hue. Alpha comes from the pair distance.
	pub link_color: Color,
	/// Link stroke width in pixels.
	pub link_width: f64,
}

impl Theme {
	/// Azure particles and links on a transparent canvas (default)
	pub fn azure() -> Self {
		Self {
			particle_color: Color::rgb(0, 113, 227),
			link_color: Color::rgb(0, 113, 227),
			link_width: 0.5,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::azure()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_includes_alpha() {
		assert_eq!(Color::rgb(0, 113, 227).with_alpha(0.35).to_css(), "rgba(0, 113, 227, 0.35)");
		assert_eq!(Color::rgba(1, 2, 3, 1.0).to_css(), "rgba(1, 2, 3, 1)");
	}
}
