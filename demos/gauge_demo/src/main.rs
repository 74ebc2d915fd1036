// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge notches revealed over a simulated animation.
//!
//! Draws the notches of a 270° gauge while its draw angle grows from 0 to
//! the full sweep, tracing each pass to stdout with a
//! [`PrettyPrintSink`](arcnotch_debug::pretty::PrettyPrintSink). The first
//! and last notches are hidden by a listener, and every fifth notch is drawn
//! longer and in red. The final frame is written to `gauge.svg` and
//! `gauge.json`.

use std::fs::File;
use std::io::{self, BufWriter};

use arcnotch_core::config::{ArcConfig, NotchConfig};
use arcnotch_core::generate::Notchs;
use arcnotch_core::notch::Notch;
use arcnotch_core::trace::Tracer;
use arcnotch_debug::pretty::PrettyPrintSink;
use arcnotch_debug::recording::RecordingCanvas;
use arcnotch_debug::{json, svg};
use kurbo::Rect;
use peniko::color::palette::css;

const FRAME_COUNT: u32 = 12;
const NOTCH_COUNT: i32 = 20;

fn main() -> io::Result<()> {
    let area = Rect::new(40.0, 40.0, 360.0, 360.0);

    // -- configuration -----------------------------------------------------
    let arc = ArcConfig::new()
        .with_start_angle(135.0)
        .with_sweep_angle(270.0)
        .with_stroke_size(4.0)
        .with_stroke_color(css::STEEL_BLUE);
    let mut notchs = Notchs::new(arc, NotchConfig::new(&arc).with_count(NOTCH_COUNT));

    let last = notchs.notches().count();
    let length = notchs.notches().length();
    notchs.set_on_draw_listener(move |n: &mut Notch| {
        n.visible = n.index > 0 && n.index < last;
        if n.index % 5 == 0 {
            n.length = length * 1.5;
            n.color = css::CRIMSON;
        }
    });

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(io::stdout())).hidden_only(true);
    let mut canvas = RecordingCanvas::new();

    // -- simulated reveal --------------------------------------------------
    let sweep = notchs.arc().sweep_angle();
    for frame in 0..=FRAME_COUNT {
        let draw_angle = sweep * f64::from(frame) / f64::from(FRAME_COUNT);
        notchs.arc_mut().set_draw_angle(draw_angle);

        canvas.clear();
        let summary = notchs.draw_traced(&mut canvas, area, &mut Tracer::new(&mut pretty));
        println!(
            "frame {frame:>2}: {:>6.2}° revealed, {} of {} notches drawn",
            draw_angle, summary.drawn, summary.generated,
        );
    }

    // -- export ------------------------------------------------------------
    let view = canvas
        .bounds()
        .map_or(area, |b| b.union(area))
        .inflate(8.0, 8.0);
    let mut svg_out = BufWriter::new(File::create("gauge.svg")?);
    svg::export(canvas.ops(), view, &mut svg_out)?;
    let mut json_out = BufWriter::new(File::create("gauge.json")?);
    json::export(canvas.ops(), &mut json_out)?;

    println!("wrote gauge.svg and gauge.json ({} ops)", canvas.ops().len());
    Ok(())
}
