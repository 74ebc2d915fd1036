// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch renderers.
//!
//! Both renderers work on the arc's bounding rectangle and move outward by
//! [inflating](crate::geometry::inflate) it, so notches follow elliptical
//! arcs as well as circular ones.

use kurbo::{Circle, Line, Rect};

use crate::canvas::{Canvas, Paint};
use crate::geometry::{inflate, point_from_angle};
use crate::notch::Notch;
use crate::style::NotchShape;

/// Returns the radial segment a line notch covers.
///
/// `p0` lies `length + distance_from_border` beyond the border and `p1`
/// lies `distance_from_border` beyond it.
#[must_use]
pub fn line_geometry(notch: &Notch, area: Rect) -> Line {
    let start_area = inflate(area, notch.length + notch.distance_from_border);
    let end_area = inflate(area, notch.distance_from_border);
    Line::new(
        point_from_angle(notch.angle, start_area),
        point_from_angle(notch.angle, end_area),
    )
}

/// Returns the circle a circle notch covers.
///
/// The radius is the notch `length`; `size` only pads the placement.
#[must_use]
pub fn circle_geometry(notch: &Notch, area: Rect) -> Circle {
    let padding = notch.size / 2.0 + notch.length + notch.distance_from_border;
    let center = point_from_angle(notch.angle, inflate(area, padding));
    Circle::new(center, notch.length)
}

/// Draws `notch` with the renderer its style selects.
pub fn draw_notch(canvas: &mut dyn Canvas, notch: &Notch, area: Rect) {
    let paint = Paint::for_notch(notch);
    match notch.style.shape() {
        NotchShape::Line => canvas.draw_line(line_geometry(notch, area), &paint),
        NotchShape::Circle { .. } => canvas.draw_circle(circle_geometry(notch, area), &paint),
    }
}
