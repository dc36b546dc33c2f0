//! Canvas drawing for the network map.
//!
//! Passes, back to front:
//! 1. Background and vignette base (screen space)
//! 2. Graticule, then edges (world space)
//! 3. Dimmed markers, then highlighted markers with ring and label on top

use std::f64::consts::PI;

use log::debug;
use web_sys::CanvasRenderingContext2d;

use super::scale::{MapScaleConfig, ScaledValues};
use super::state::MapState;
use super::theme::MapTheme;
use super::types::MapNode;

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Draws one frame.
pub fn render(state: &MapState, ctx: &CanvasRenderingContext2d, config: &MapScaleConfig, theme: &MapTheme) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	if let Some(step) = theme.graticule_step {
		draw_graticule(state, ctx, &scale, theme, step);
	}
	draw_links(state, ctx, &scale, theme);
	draw_markers(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &MapState, ctx: &CanvasRenderingContext2d, theme: &MapTheme) {
	let bg = &theme.background;
	let (cx, cy) = (state.width / 2.0, state.height / 2.0);
	let gradient = if bg.use_gradient {
		ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, state.width.max(state.height) * 0.8)
			.ok()
	} else {
		None
	};

	match gradient {
		Some(g) => {
			let _ = g.add_color_stop(0.0, &bg.color_secondary.to_css());
			let _ = g.add_color_stop(1.0, &bg.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&g);
		}
		None => ctx.set_fill_style_str(&bg.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &MapState, ctx: &CanvasRenderingContext2d, theme: &MapTheme) {
	let (cx, cy) = (state.width / 2.0, state.height / 2.0);
	let Ok(gradient) = ctx.create_radial_gradient(
		cx,
		cy,
		state.width.min(state.height) * 0.3,
		cx,
		cy,
		state.width.max(state.height) * 0.7,
	) else {
		debug!("trade-atlas: vignette gradient unavailable");
		return;
	};
	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", theme.background.vignette));
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Meridians and parallels spanning the fitted bounds.
fn draw_graticule(
	state: &MapState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &MapTheme,
	step: f64,
) {
	if step <= 0.0 || state.data.nodes.is_empty() {
		return;
	}
	let b = state.projection.bounds;
	let (lng0, lng1) = ((b.min_lng / step).floor() * step, (b.max_lng / step).ceil() * step);
	let (lat0, lat1) = ((b.min_lat / step).floor() * step, (b.max_lat / step).ceil() * step);
	let p = &state.projection;

	ctx.set_stroke_style_str(&theme.graticule_color.to_css());
	ctx.set_line_width(1.0 / scale.k);
	ctx.begin_path();

	let mut lng = lng0;
	while lng <= lng1 {
		let (x, y0) = p.project(lng, lat1);
		let (_, y1) = p.project(lng, lat0);
		ctx.move_to(x, y0);
		ctx.line_to(x, y1);
		lng += step;
	}
	let mut lat = lat0;
	while lat <= lat1 {
		let (x0, y) = p.project(lng0, lat);
		let (x1, _) = p.project(lng1, lat);
		ctx.move_to(x0, y);
		ctx.line_to(x1, y);
		lat += step;
	}
	ctx.stroke();
}

fn draw_links(state: &MapState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues, theme: &MapTheme) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let dim = 1.0 - (1.0 - theme.highlight.dim_alpha) * max_t;

	ctx.set_line_cap("round");
	for link in &state.data.links {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(state.positions.get(link.source), state.positions.get(link.target))
		else {
			continue;
		};
		let t = smooth_step(state.highlight.link_intensity(link.source, link.target));
		let base = scale.edge_alpha * dim;
		let alpha = base + (1.0 - base) * t;
		let width = scale.edge_width(link.width) * (1.0 + 0.5 * t);

		ctx.set_stroke_style_str(&link.color.with_alpha(alpha).to_css());
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_markers(state: &MapState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues, theme: &MapTheme) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let dim = 1.0 - (1.0 - theme.highlight.dim_alpha) * max_t;

	// Pass 1: everything not highlighted
	for (idx, (node, &(x, y))) in state.data.nodes.iter().zip(&state.positions).enumerate() {
		if state.highlight.node_intensity(idx) > 0.001 {
			continue;
		}
		draw_marker(ctx, node, x, y, scale, dim, 1.0);
		if node.always_labeled || !scale.cull_labels {
			let label_alpha = if node.always_labeled { 1.0 } else { scale.label_alpha };
			draw_label(ctx, node, x, y, scale, theme, label_alpha * dim, 1.0);
		}
	}

	// Pass 2: highlighted cities on top
	for (idx, (node, &(x, y))) in state.data.nodes.iter().zip(&state.positions).enumerate() {
		let t = smooth_step(state.highlight.node_intensity(idx));
		if t <= 0.001 {
			continue;
		}
		let alpha = dim + (1.0 - dim) * t;
		let grow = 1.0 + theme.highlight.grow * t;
		draw_marker(ctx, node, x, y, scale, alpha, grow);

		let ring_t = smooth_step(state.highlight.ring_intensity(idx));
		if ring_t > 0.01 {
			let r = scale.marker_radius(node.style.radius) * grow + scale.ring_offset;
			ctx.begin_path();
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&theme.highlight.ring_color.with_alpha(0.8 * ring_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
		draw_label(ctx, node, x, y, scale, theme, alpha, grow);
	}
}

fn draw_marker(
	ctx: &CanvasRenderingContext2d,
	node: &MapNode,
	x: f64,
	y: f64,
	scale: &ScaledValues,
	alpha: f64,
	grow: f64,
) {
	let style = &node.style;
	let radius = scale.marker_radius(style.radius) * grow;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&style.fill.with_alpha(style.fill_opacity * alpha).to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&style.stroke.with_alpha(alpha).to_css());
	ctx.set_line_width(scale.marker_stroke(style.stroke_width));
	ctx.stroke();
}

#[allow(clippy::too_many_arguments)]
fn draw_label(
	ctx: &CanvasRenderingContext2d,
	node: &MapNode,
	x: f64,
	y: f64,
	scale: &ScaledValues,
	theme: &MapTheme,
	alpha: f64,
	grow: f64,
) {
	if alpha < 0.05 {
		return;
	}
	let radius = scale.marker_radius(node.style.radius) * grow;
	ctx.set_font(&scale.label_font);
	ctx.set_fill_style_str(&theme.highlight.label_color.with_alpha(0.9 * alpha).to_css());
	let _ = ctx.fill_text(&node.label, x + radius + scale.label_offset, y + 3.0 / scale.k);
}
