//! Ready-made draw calls that record ticks into a `TickFrame`.
//!
//! Tick strokes run across the axis: along the normal `(-dy, dx)` of the
//! direction vector, so a left-to-right ruler gets vertical marks.

use serde::{Deserialize, Serialize};

use crate::api::{DrawCall, DrawFlow, DrawState};
use crate::core::LayoutParams;
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive, TickFrame};

/// Stroke style for tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMarkStyle {
    /// Mark length in pixels.
    pub length: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// Portion of the mark placed before the axis line, in `0..=1`.
    pub align: f64,
}

impl Default for TickMarkStyle {
    fn default() -> Self {
        Self {
            length: 8.0,
            stroke_width: 1.0,
            color: Color::rgb(0.0, 0.0, 0.0),
            align: 0.0,
        }
    }
}

/// Text style for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLabelStyle {
    pub font_size_px: f64,
    pub color: Color,
    /// Label offset from the axis line along the normal, in pixels.
    pub offset: f64,
    pub precision: usize,
    pub h_align: TextHAlign,
}

impl Default for TickLabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: 10.0,
            color: Color::rgb(0.0, 0.0, 0.0),
            offset: 12.0,
            precision: 0,
            h_align: TextHAlign::Center,
        }
    }
}

/// Unit normal of the axis direction; zero when the direction is degenerate.
#[must_use]
pub fn axis_normal(params: &LayoutParams) -> (f64, f64) {
    let (dx, dy) = (params.direction_x, params.direction_y);
    let norm = dx.hypot(dy);
    if norm <= f64::EPSILON {
        return (0.0, 0.0);
    }
    (-dy / norm, dx / norm)
}

/// Formats a tick value with fixed precision, without a `-0` artifact.
#[must_use]
pub fn format_tick_value(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    let is_negative_zero = text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.');
    if is_negative_zero {
        text[1..].to_owned()
    } else {
        text
    }
}

/// Line primitive for the tick at the current draw position.
#[must_use]
pub fn tick_line(state: &DrawState, params: &LayoutParams, style: TickMarkStyle) -> LinePrimitive {
    let (nx, ny) = axis_normal(params);
    let before = style.length * style.align;
    let after = style.length - before;
    LinePrimitive::new(
        state.x - nx * before,
        state.y - ny * before,
        state.x + nx * after,
        state.y + ny * after,
        style.stroke_width,
        style.color,
    )
}

/// Records one stroke per accepted value.
///
/// The bundle stops itself when the style is fully transparent.
#[must_use]
pub fn tick_lines<S: 'static>(style: TickMarkStyle) -> DrawCall<TickFrame, S> {
    DrawCall::new(move |frame: &mut TickFrame, _store: &mut S, state, params| {
        frame.push_line(tick_line(state, params, style));
    })
    .with_init(move |_frame, _store, _state, _params| {
        if style.color.is_transparent() {
            DrawFlow::Stop
        } else {
            DrawFlow::Continue
        }
    })
}

/// Records one numeric label per accepted value.
#[must_use]
pub fn tick_labels<S: 'static>(style: TickLabelStyle) -> DrawCall<TickFrame, S> {
    DrawCall::new(move |frame: &mut TickFrame, _store: &mut S, state, params| {
        let (nx, ny) = axis_normal(params);
        frame.push_text(TextPrimitive::new(
            format_tick_value(state.value, style.precision),
            state.x + nx * style.offset,
            state.y + ny * style.offset,
            style.font_size_px,
            style.color,
            style.h_align,
        ));
    })
    .with_init(move |_frame, _store, _state, _params| {
        if style.color.is_transparent() {
            DrawFlow::Stop
        } else {
            DrawFlow::Continue
        }
    })
}
