// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styles and what they resolve to.

/// How the arc (and, by default, each notch) is stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    /// Radial line notches.
    #[default]
    Line,
    /// Outlined circle notches.
    ClosedArc,
    /// Filled circle notches.
    FilledArc,
}

impl StrokeStyle {
    /// Returns the shape a notch with this style is drawn as.
    #[inline]
    #[must_use]
    pub const fn shape(self) -> NotchShape {
        match self {
            Self::Line => NotchShape::Line,
            Self::ClosedArc => NotchShape::Circle { filled: false },
            Self::FilledArc => NotchShape::Circle { filled: true },
        }
    }

    /// Returns the paint mode used for this style.
    #[inline]
    #[must_use]
    pub const fn paint_style(self) -> PaintStyle {
        match self.shape() {
            NotchShape::Circle { filled: true } => PaintStyle::FillAndStroke,
            NotchShape::Line | NotchShape::Circle { filled: false } => PaintStyle::Stroke,
        }
    }
}

/// The primitive a notch is rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotchShape {
    /// A straight radial stroke.
    Line,
    /// A circle centered beyond the arc border.
    Circle {
        /// Whether the circle interior is filled.
        filled: bool,
    },
}

/// Whether a draw operation strokes the outline only or also fills it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    /// Outline only.
    #[default]
    Stroke,
    /// Fill the interior and stroke the outline.
    FillAndStroke,
}
