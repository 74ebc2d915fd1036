// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives for placing notches on an arc.
//!
//! An arc is described by its bounding rectangle: the arc runs along the
//! ellipse inscribed in that rectangle. Notches sitting at a different
//! radius are placed by [inflating](inflate) the rectangle instead of
//! re-deriving the ellipse.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Sweep angle, in degrees, of a complete circle.
pub const FULL_SWEEP: f64 = 360.0;

/// Returns the point at `degrees` on the ellipse inscribed in `area`.
///
/// Angle 0 points along +x. Since y grows downward, increasing angles run
/// clockwise on screen. The mapping is periodic with period 360.
#[must_use]
pub fn point_from_angle(degrees: f64, area: Rect) -> Point {
    let radians = degrees.to_radians();
    #[cfg(feature = "std")]
    let (s, c) = radians.sin_cos();
    #[cfg(not(feature = "std"))]
    let (s, c) = (radians.sin(), radians.cos());
    let center = area.center();
    Point::new(
        center.x + c * area.width() / 2.0,
        center.y + s * area.height() / 2.0,
    )
}

/// Expands `area` by `amount` on all four sides.
///
/// A negative `amount` contracts the rectangle.
#[inline]
#[must_use]
pub fn inflate(area: Rect, amount: f64) -> Rect {
    area.inflate(amount, amount)
}

/// Inclusive range test: `min <= value <= max`.
#[inline]
#[must_use]
pub fn within_range(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}
