// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory canvas.
//!
//! [`RecordingCanvas`] implements [`Canvas`] by appending every call to a
//! list of [`DrawOp`]s, which the exporters in this crate and tests read
//! back.

use arcnotch_core::canvas::{Canvas, Paint};
use kurbo::{Circle, Line, Rect, Shape};

/// One recorded draw call.
#[derive(Clone, Copy, Debug)]
pub enum DrawOp {
    /// A [`Canvas::draw_line`] call.
    Line {
        /// Segment drawn.
        line: Line,
        /// Paint used.
        paint: Paint,
    },
    /// A [`Canvas::draw_circle`] call.
    Circle {
        /// Circle drawn.
        circle: Circle,
        /// Paint used.
        paint: Paint,
    },
}

impl DrawOp {
    /// Returns the paint the operation was drawn with.
    #[must_use]
    pub fn paint(&self) -> &Paint {
        match self {
            Self::Line { paint, .. } | Self::Circle { paint, .. } => paint,
        }
    }

    /// Returns the bounding box of the geometry, grown by half the stroke
    /// width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let (shape_bounds, width) = match self {
            Self::Line { line, paint } => (line.bounding_box(), paint.width),
            Self::Circle { circle, paint } => (circle.bounding_box(), paint.width),
        };
        shape_bounds.inflate(width / 2.0, width / 2.0)
    }
}

/// A [`Canvas`] that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded operations in draw order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the canvas and returns the recorded operations.
    #[must_use]
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Discards all recorded operations, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Returns the union of all operation bounds, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.ops
            .iter()
            .map(DrawOp::bounds)
            .reduce(|acc, r| acc.union(r))
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, line: Line, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            line,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, circle: Circle, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            circle,
            paint: *paint,
        });
    }
}
