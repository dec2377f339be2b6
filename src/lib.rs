//! galaxy-field: ambient particle background for a personal landing page.
//!
//! This crate provides a WASM canvas component that renders a slowly drifting
//! field of points, pushed away by the pointer and joined to their neighbours
//! by faint lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::galaxy::{FieldConfig, GalaxyCanvas, NeighborScan, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("galaxy-field: logging initialized");
}

/// Load config overrides from a script element with id="galaxy-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("galaxy-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!("galaxy-field: loaded config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("galaxy-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the galaxy background behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Title text="Galaxy" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<GalaxyCanvas config=config />
	}
}
