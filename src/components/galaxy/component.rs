//! Leptos component hosting the galaxy field canvas.
//!
//! The component mounts a viewport-sized canvas, listens for window
//! `mousemove` and `resize`, and drives the simulation from a
//! `requestAnimationFrame` loop that re-registers itself every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::random::MathRandom;
use super::state::{Bounds, GalaxyState};
use super::surface::{SurfaceError, context_2d};
use super::theme::Theme;

/// Simulation state bundled with its visual style.
struct GalaxyContext {
	state: GalaxyState<MathRandom>,
	theme: Theme,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Handles kept alive for the lifetime of the page.
#[derive(Clone, Default)]
struct Handles {
	context: Shared<GalaxyContext>,
	animate: Shared<Closure<dyn FnMut()>>,
	resize: Shared<Closure<dyn FnMut()>>,
	pointer: Shared<Closure<dyn FnMut(MouseEvent)>>,
}

/// Current viewport size. Missing values read as zero, which still yields a
/// valid (degenerate) field.
fn viewport_bounds(window: &Window) -> Bounds {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Bounds::new(read(window.inner_width()), read(window.inner_height()))
}

fn size_canvas(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width as u32);
	canvas.set_height(bounds.height as u32);
}

fn request_frame(animate: &Shared<Closure<dyn FnMut()>>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Set up the simulation on `canvas` and start the frame loop.
fn start(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	handles: &Handles,
) -> Result<(), SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let ctx = context_2d(&canvas)?;

	let bounds = viewport_bounds(&window);
	size_canvas(&canvas, bounds);

	let state = GalaxyState::new(config, bounds, MathRandom);
	info!(
		"galaxy-field: {} particles on {}x{}",
		state.count(),
		bounds.width,
		bounds.height
	);
	*handles.context.borrow_mut() = Some(GalaxyContext {
		state,
		theme: Theme::default(),
	});

	let context_resize = handles.context.clone();
	*handles.resize.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let bounds = viewport_bounds(&win);
		size_canvas(&canvas, bounds);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(bounds);
		}
	}));
	if let Some(ref cb) = *handles.resize.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let context_pointer = handles.context.clone();
	*handles.pointer.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
		if let Some(ref mut c) = *context_pointer.borrow_mut() {
			c.state
				.pointer
				.track(ev.client_x() as f64, ev.client_y() as f64);
		}
	}));
	if let Some(ref cb) = *handles.pointer.borrow() {
		let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
	}

	let (context_anim, animate_inner) = (handles.context.clone(), handles.animate.clone());
	*handles.animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			c.state.frame(&ctx, &c.theme);
		}
		request_frame(&animate_inner);
	}));
	request_frame(&handles.animate);

	Ok(())
}

/// Renders the drifting particle field on a full-viewport canvas.
///
/// The canvas sits behind the page (`z-index: -1`) and ignores pointer
/// events; pointer positions are read from the window instead so the field
/// reacts even under other content. Pass `config` to override the defaults.
#[component]
pub fn GalaxyCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = Handles::default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handles.context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = start(canvas, config.clone(), &handles) {
			warn!("galaxy-field: not starting: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="bg-canvas"
			class="galaxy-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
