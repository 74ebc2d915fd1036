// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-notch descriptor.

use peniko::Color;
use peniko::color::palette::css;

use crate::style::StrokeStyle;

/// Describes one notch of a draw pass.
///
/// A fresh `Notch` is built for every candidate angle, handed once to the
/// [`NotchListener`](crate::generate::NotchListener) for customization, and
/// dropped after its draw dispatch. Every field may be changed by the
/// listener; changing [`index`](Self::index) does not affect iteration.
#[derive(Clone, Copy, Debug)]
pub struct Notch {
    /// Absolute angle in degrees (arc start angle plus local offset).
    pub angle: f64,
    /// Zero-based position in the pass.
    pub index: u32,
    /// Radial extent: line length, or circle radius.
    pub length: f64,
    /// Stroke width for lines; placement padding for circles.
    pub size: f64,
    /// Draw color.
    pub color: Color,
    /// Radial offset from the arc border before the notch begins.
    pub distance_from_border: f64,
    /// Selects the renderer and paint mode.
    pub style: StrokeStyle,
    /// Cleared to skip drawing this notch.
    pub visible: bool,
}

impl Notch {
    /// Creates a visible notch with zero extents, black color and
    /// [`StrokeStyle::Line`].
    #[must_use]
    pub const fn new(index: u32, angle: f64) -> Self {
        Self {
            angle,
            index,
            length: 0.0,
            size: 0.0,
            color: css::BLACK,
            distance_from_border: 0.0,
            style: StrokeStyle::Line,
            visible: true,
        }
    }
}

impl Default for Notch {
    fn default() -> Self {
        Self::new(0, 0.0)
    }
}
