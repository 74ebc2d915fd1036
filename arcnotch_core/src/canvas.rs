// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface contract.
//!
//! The core never creates or owns a surface. Hosts implement [`Canvas`] on
//! top of whatever they render with (a GPU scene, a raster target, an SVG
//! writer) and pass it to [`Notchs::draw`](crate::generate::Notchs::draw).

use kurbo::{Circle, Line};
use peniko::Color;

use crate::notch::Notch;
use crate::style::PaintStyle;

/// Color, width and mode of a single draw operation.
#[derive(Clone, Copy, Debug)]
pub struct Paint {
    /// Draw color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
    /// Stroke only, or fill and stroke.
    pub style: PaintStyle,
}

impl Paint {
    /// Returns the paint a notch is drawn with.
    #[must_use]
    pub const fn for_notch(notch: &Notch) -> Self {
        Self {
            color: notch.color,
            width: notch.size,
            style: notch.style.paint_style(),
        }
    }
}

/// Accepts the draw operations notches are rendered with.
///
/// Both real surfaces and recording test doubles implement this trait.
pub trait Canvas {
    /// Draws a straight line.
    fn draw_line(&mut self, line: Line, paint: &Paint);

    /// Draws a circle, filled or not according to `paint.style`.
    fn draw_circle(&mut self, circle: Circle, paint: &Paint);
}
