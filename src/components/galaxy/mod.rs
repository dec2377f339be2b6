//! Ambient galaxy background component.
//!
//! Renders a field of slowly drifting particles on a full-viewport canvas:
//! - Particles bounce off the viewport edges
//! - The pointer pushes nearby particles away
//! - Close pairs are joined by faint lines that fade with distance
//! - The whole set is rebuilt whenever the window is resized
//!
//! # Example
//!
//! ```ignore
//! use galaxy_field::{FieldConfig, GalaxyCanvas};
//!
//! view! { <GalaxyCanvas config=FieldConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod neighbors;
pub mod particles;
pub mod random;
mod render;
pub mod state;
pub mod surface;
pub mod theme;

pub use component::GalaxyCanvas;
pub use config::FieldConfig;
pub use neighbors::NeighborScan;
pub use particles::Particle;
pub use random::{MathRandom, RandomSource};
pub use state::{Bounds, GalaxyState, Point, Pointer};
pub use surface::{Surface, SurfaceError};
pub use theme::{Color, Theme};
