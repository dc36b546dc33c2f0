//! Leptos component wrapping the map canvas.
//!
//! The canvas sizes itself to its parent and follows window resizes until it
//! is unmounted. Mouse
//! handlers drive pan, wheel zoom, hover and click selection; a
//! `requestAnimationFrame` loop advances the highlight fades and redraws.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::scale::MapScaleConfig;
use super::state::MapState;
use super::theme::MapTheme;
use super::types::MapData;

const FRAME_DT: f64 = 0.016;

struct MapContext {
	state: MapState,
	scale: MapScaleConfig,
	theme: MapTheme,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

fn parent_size(canvas: &HtmlCanvasElement, fallback_height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	let w = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0);
	let h = fallback_height.unwrap_or_else(|| {
		parent
			.as_ref()
			.map(|p| p.client_height() as f64)
			.filter(|h| *h > 0.0)
			.unwrap_or(560.0)
	});
	(w, h)
}

/// Stops the animation loop and runs `release` when the owning scope is disposed.
fn teardown_on_cleanup(alive: Arc<AtomicBool>, release: impl FnOnce() + Send + Sync + 'static) {
	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		release();
	});
}

/// Pointer position relative to the canvas.
fn local_point(canvas: Option<HtmlCanvasElement>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = canvas?.get_bounding_client_rect();
	Some((ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top()))
}

/// Interactive map of one region's cities and edges.
///
/// `data` is reactive: new links keep the current view, a new set of cities
/// refits it. Clicking a city writes its id to `selected`; clicking empty
/// map clears it.
#[component]
pub fn NetworkMapCanvas(
	#[prop(into)] data: Signal<MapData>,
	selected: RwSignal<Option<String>>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<MapContext> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	// Removed on unmount; the map page remounts on every visit.
	let context_resize = context.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (w, h) = parent_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(w, h);
		}
	});

	teardown_on_cleanup(alive.clone(), move || resize.remove());

	let (context_init, animate_init) = (context.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("trade-atlas: canvas context has unexpected type");
					return;
				}
			},
			_ => {
				warn!("trade-atlas: 2d canvas context unavailable");
				return;
			}
		};

		*context_init.borrow_mut() = Some(MapContext {
			state: MapState::new(data.get_untracked(), w, h),
			scale: MapScaleConfig::default(),
			theme: MapTheme::default(),
		});
		debug!("trade-atlas: map canvas {w}x{h}");

		let (context_anim, animate_inner, alive_anim) =
			(context_init.clone(), animate_init.clone(), alive.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(FRAME_DT);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let next = data.get();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			c.state.set_data(next);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref.get(), &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.begin_pan(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref.get(), &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.pan.active {
				c.state.pan_to(x, y);
			}
			if !c.state.pan.moved {
				let hovered = c.state.node_at_position(x, y, &c.scale);
				c.state.set_hover(hovered);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let point = local_point(canvas_ref.get(), &ev);
		let clicked = {
			let mut guard = context_mu.borrow_mut();
			let Some(c) = guard.as_mut() else {
				return;
			};
			if !c.state.end_pan() {
				return;
			}
			point
				.and_then(|(x, y)| c.state.node_at_position(x, y, &c.scale))
				.and_then(|idx| c.state.data.nodes.get(idx))
				.map(|n| n.id.clone())
		};
		selected.set(clicked);
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.end_pan();
			c.state.set_hover(None);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref.get(), &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let step = c.scale.wheel_factor;
			let factor = if ev.delta_y() > 0.0 { 1.0 / step } else { step };
			c.state.zoom_at(x, y, factor, &c.scale);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
