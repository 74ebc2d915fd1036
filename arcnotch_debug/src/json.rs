// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded draw operations.
//!
//! [`export`] writes a JSON array with one object per [`DrawOp`], in draw
//! order. Colors are written as `#rrggbbaa` hex strings.

use std::io::{self, Write};

use arcnotch_core::canvas::Paint;
use arcnotch_core::style::PaintStyle;
use peniko::Color;
use serde_json::{Value, json};

use crate::recording::DrawOp;

/// Writes `ops` as a JSON array to `writer`.
///
/// Line objects carry `from`/`to` points, circle objects `center`/`radius`;
/// both carry the paint's `color`, `width` and `style`.
pub fn export(ops: &[DrawOp], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = ops.iter().map(op_to_json).collect();
    serde_json::to_writer_pretty(&mut *writer, &events)?;
    writeln!(writer)
}

fn op_to_json(op: &DrawOp) -> Value {
    match op {
        DrawOp::Line { line, paint } => json!({
            "kind": "line",
            "from": [line.p0.x, line.p0.y],
            "to": [line.p1.x, line.p1.y],
            "paint": paint_to_json(paint),
        }),
        DrawOp::Circle { circle, paint } => json!({
            "kind": "circle",
            "center": [circle.center.x, circle.center.y],
            "radius": circle.radius,
            "paint": paint_to_json(paint),
        }),
    }
}

fn paint_to_json(paint: &Paint) -> Value {
    json!({
        "color": hex_color(paint.color),
        "width": paint.width,
        "style": match paint.style {
            PaintStyle::Stroke => "stroke",
            PaintStyle::FillAndStroke => "fill-and-stroke",
        },
    })
}

/// Formats `color` as `#rrggbbaa`.
pub(crate) fn hex_color(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}
