// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner-side configuration.
//!
//! [`ArcConfig`] carries the settings of the parent arc that notches follow;
//! [`NotchConfig`] carries the notch count and length. Both normalize their
//! inputs when a value is set: negative or non-finite extents become zero, the
//! sweep is clamped to `[0, 360]`, and the draw angle never exceeds the
//! sweep. Generation trusts these values and never re-checks them.
//!
//! Setters return `true` when the stored value changed, which is the owner's
//! cue to request a redraw.

use peniko::Color;
use peniko::color::palette::css;

use crate::geometry::FULL_SWEEP;
use crate::style::StrokeStyle;

/// Floors `value` at zero, mapping NaN to zero.
///
/// Only for angles, which are capped at the sweep afterwards.
#[inline]
fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// Maps a length or size to a finite value, zero when negative or not finite.
#[inline]
fn extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Stores `value` into `slot`, reporting whether it differed.
#[inline]
fn replace(slot: &mut f64, value: f64) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}

#[inline]
fn same_color(a: Color, b: Color) -> bool {
    a.components == b.components
}

/// Settings of the parent arc.
#[derive(Clone, Copy, Debug)]
pub struct ArcConfig {
    start_angle: f64,
    sweep_angle: f64,
    /// `None` follows the sweep angle.
    draw_angle: Option<f64>,
    stroke_size: f64,
    stroke_color: Color,
    stroke_style: StrokeStyle,
}

impl ArcConfig {
    /// Stroke size used by [`ArcConfig::new`].
    pub const DEFAULT_STROKE_SIZE: f64 = 3.0;

    /// Creates a full-circle arc starting at 0°, stroked black with
    /// [`DEFAULT_STROKE_SIZE`](Self::DEFAULT_STROKE_SIZE).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_angle: 0.0,
            sweep_angle: FULL_SWEEP,
            draw_angle: None,
            stroke_size: Self::DEFAULT_STROKE_SIZE,
            stroke_color: css::BLACK,
            stroke_style: StrokeStyle::Line,
        }
    }

    /// Sets the start angle.
    #[must_use]
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.set_start_angle(degrees);
        self
    }

    /// Sets the sweep angle.
    #[must_use]
    pub fn with_sweep_angle(mut self, degrees: f64) -> Self {
        self.set_sweep_angle(degrees);
        self
    }

    /// Sets the draw angle.
    #[must_use]
    pub fn with_draw_angle(mut self, degrees: f64) -> Self {
        self.set_draw_angle(degrees);
        self
    }

    /// Sets the stroke size.
    #[must_use]
    pub fn with_stroke_size(mut self, size: f64) -> Self {
        self.set_stroke_size(size);
        self
    }

    /// Sets the stroke color.
    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.set_stroke_color(color);
        self
    }

    /// Sets the stroke style.
    #[must_use]
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.set_stroke_style(style);
        self
    }

    /// Angle, in degrees, where the arc begins.
    #[inline]
    #[must_use]
    pub const fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angular extent of the arc, in `[0, 360]`.
    #[inline]
    #[must_use]
    pub const fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Angular extent actually revealed, in `[0, sweep_angle]`.
    ///
    /// Equals the sweep angle unless a draw angle has been set.
    #[inline]
    #[must_use]
    pub fn draw_angle(&self) -> f64 {
        match self.draw_angle {
            Some(draw) => draw.min(self.sweep_angle),
            None => self.sweep_angle,
        }
    }

    /// Stroke width of the arc, also the default notch size.
    #[inline]
    #[must_use]
    pub const fn stroke_size(&self) -> f64 {
        self.stroke_size
    }

    /// Stroke color of the arc, also the default notch color.
    #[inline]
    #[must_use]
    pub const fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Stroke style of the arc, also the default notch style.
    #[inline]
    #[must_use]
    pub const fn stroke_style(&self) -> StrokeStyle {
        self.stroke_style
    }

    /// Sets the start angle. Non-finite values become 0.
    pub fn set_start_angle(&mut self, degrees: f64) -> bool {
        let degrees = if degrees.is_finite() { degrees } else { 0.0 };
        replace(&mut self.start_angle, degrees)
    }

    /// Sets the sweep angle, clamped to `[0, 360]`.
    pub fn set_sweep_angle(&mut self, degrees: f64) -> bool {
        replace(&mut self.sweep_angle, non_negative(degrees).min(FULL_SWEEP))
    }

    /// Limits drawing to the first `degrees` of the sweep.
    ///
    /// The value is floored at 0 here and capped by the sweep when read.
    pub fn set_draw_angle(&mut self, degrees: f64) -> bool {
        let degrees = non_negative(degrees);
        let changed = self.draw_angle != Some(degrees);
        self.draw_angle = Some(degrees);
        changed
    }

    /// Makes the draw angle follow the sweep angle again.
    pub fn clear_draw_angle(&mut self) -> bool {
        self.draw_angle.take().is_some()
    }

    /// Sets the stroke size. Negative or non-finite sizes become 0.
    pub fn set_stroke_size(&mut self, size: f64) -> bool {
        replace(&mut self.stroke_size, extent(size))
    }

    /// Sets the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) -> bool {
        let changed = !same_color(self.stroke_color, color);
        self.stroke_color = color;
        changed
    }

    /// Sets the stroke style.
    pub fn set_stroke_style(&mut self, style: StrokeStyle) -> bool {
        let changed = self.stroke_style != style;
        self.stroke_style = style;
        changed
    }
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Notch count and length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchConfig {
    count: u32,
    length: f64,
}

impl NotchConfig {
    /// Creates a configuration with no notches.
    ///
    /// The notch length defaults to twice the arc's stroke size. It is
    /// derived once here and does not follow later stroke size changes.
    #[must_use]
    pub fn new(arc: &ArcConfig) -> Self {
        Self {
            count: 0,
            length: extent(arc.stroke_size() * 2.0),
        }
    }

    /// Sets the notch count.
    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.set_count(count);
        self
    }

    /// Sets the notch length.
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.set_length(length);
        self
    }

    /// Number of notches the sweep is divided into.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Radial extent of every notch, before listener overrides.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Sets the notch count. Negative counts become 0.
    pub fn set_count(&mut self, count: i32) -> bool {
        let count = u32::try_from(count).unwrap_or(0);
        let changed = self.count != count;
        self.count = count;
        changed
    }

    /// Sets the notch length. Negative or non-finite lengths become 0.
    pub fn set_length(&mut self, length: f64) -> bool {
        replace(&mut self.length, extent(length))
    }

    /// Returns the values a host persists across restarts.
    #[must_use]
    pub fn state(&self) -> NotchState {
        NotchState {
            count: i32::try_from(self.count).unwrap_or(i32::MAX),
            length: self.length,
        }
    }

    /// Applies persisted values, normalizing them like the setters do.
    pub fn restore(&mut self, state: NotchState) -> bool {
        let count_changed = self.set_count(state.count);
        let length_changed = self.set_length(state.length);
        count_changed || length_changed
    }
}

/// Persisted notch settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NotchState {
    /// Notch count, as stored by the host.
    pub count: i32,
    /// Notch length, as stored by the host.
    pub length: f64,
}
