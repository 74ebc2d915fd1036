// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of recorded draw operations.

use std::io::{self, Write};

use arcnotch_core::canvas::Paint;
use arcnotch_core::style::PaintStyle;
use kurbo::Rect;

use crate::json::hex_color;
use crate::recording::DrawOp;

/// Writes `ops` as a standalone SVG document whose `viewBox` is `view`.
pub fn export(ops: &[DrawOp], view: Rect, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
    )?;
    for op in ops {
        match op {
            DrawOp::Line { line, paint } => writeln!(
                writer,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
                line.p0.x,
                line.p0.y,
                line.p1.x,
                line.p1.y,
                paint_attrs(paint),
            )?,
            DrawOp::Circle { circle, paint } => writeln!(
                writer,
                r#"  <circle cx="{}" cy="{}" r="{}" {}/>"#,
                circle.center.x,
                circle.center.y,
                circle.radius,
                paint_attrs(paint),
            )?,
        }
    }
    writeln!(writer, "</svg>")
}

fn paint_attrs(paint: &Paint) -> String {
    let color = hex_color(paint.color);
    let fill = match paint.style {
        PaintStyle::Stroke => "none",
        PaintStyle::FillAndStroke => color.as_str(),
    };
    format!(
        r#"stroke="{color}" stroke-width="{}" fill="{fill}""#,
        paint.width
    )
}
