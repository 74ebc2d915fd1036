// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Each line
//! is prefixed with the number of the pass it belongs to.

use std::io::Write;

use arcnotch_core::style::StrokeStyle;
use arcnotch_core::trace::{NotchEvent, PassBeginEvent, PassSummary, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    pass: u64,
    hidden_only: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("pass", &self.pass)
            .field("hidden_only", &self.hidden_only)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            pass: 0,
            hidden_only: false,
        }
    }

    /// Only print notch lines for notches the listener hid.
    ///
    /// Pass begin/end lines are always printed.
    #[must_use]
    pub fn hidden_only(mut self, hidden_only: bool) -> Self {
        self.hidden_only = hidden_only;
        self
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn style_name(style: StrokeStyle) -> &'static str {
    match style {
        StrokeStyle::Line => "line",
        StrokeStyle::ClosedArc => "closed-arc",
        StrokeStyle::FilledArc => "filled-arc",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} notchs={} candidates={} delta={:.2}° limit={:.2}°",
            self.pass, e.count, e.candidates, e.delta_angle, e.draw_angle,
        );
    }

    fn on_notch(&mut self, e: &NotchEvent) {
        if self.hidden_only && e.visible {
            return;
        }
        let shown = if e.visible { "drawn" } else { "hidden" };
        let _ = writeln!(
            self.writer,
            "[notch] pass={} slot={} angle={:.2}° style={} {shown}",
            self.pass,
            e.slot,
            e.angle,
            style_name(e.style),
        );
    }

    fn on_pass_end(&mut self, s: &PassSummary) {
        let end = if s.stopped_at_limit { "limit" } else { "complete" };
        let _ = writeln!(
            self.writer,
            "[pass:end] pass={} generated={} drawn={} {end}",
            self.pass, s.generated, s.drawn,
        );
        self.pass += 1;
    }
}
