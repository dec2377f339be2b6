//! The drawing primitives the field needs, and the canvas that provides them.

use std::f64::consts::PI;
use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::Bounds;
use super::theme::Color;

/// A 2D target for one frame of the field.
pub trait Surface {
	/// Erase the region `(0, 0)..(width, height)`.
	fn clear(&self, bounds: Bounds);
	/// Filled circle centred at `(x, y)`.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	/// Straight stroked segment.
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Failures while acquiring the browser drawing surface.
#[derive(Debug)]
pub enum SurfaceError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// `getContext("2d")` threw.
	ContextUnavailable(String),
	/// `getContext("2d")` returned null.
	NoContext,
	/// The context object was not a `CanvasRenderingContext2D`.
	NotCanvas2d,
}

impl fmt::Display for SurfaceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SurfaceError::NoWindow => write!(f, "no global window"),
			SurfaceError::ContextUnavailable(msg) => {
				write!(f, "failed to get 2d canvas context: {}", msg)
			}
			SurfaceError::NoContext => write!(f, "canvas has no 2d context"),
			SurfaceError::NotCanvas2d => write!(f, "context is not a CanvasRenderingContext2D"),
		}
	}
}

impl std::error::Error for SurfaceError {}

/// Get the 2D rendering context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::ContextUnavailable(format!("{:?}", e)))?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NotCanvas2d)
}
