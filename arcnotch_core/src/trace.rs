// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for draw passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that a
//! draw pass calls as it runs. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::notch::Notch;
use crate::style::StrokeStyle;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a draw pass starts generating notches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassBeginEvent {
    /// Configured notch count.
    pub count: u32,
    /// Number of candidate notches, including the closing one on partial
    /// sweeps.
    pub candidates: u32,
    /// Angular step between consecutive notches, in degrees.
    pub delta_angle: f64,
    /// Draw limit, in degrees relative to the start angle.
    pub draw_angle: f64,
}

/// Emitted for every generated notch, after the listener ran.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchEvent {
    /// Position in the pass (the iteration counter, not the listener's
    /// possibly rewritten [`Notch::index`]).
    pub slot: u32,
    /// Absolute angle the notch is drawn at.
    pub angle: f64,
    /// Style the notch is drawn with.
    pub style: StrokeStyle,
    /// Whether the notch was dispatched to a renderer.
    pub visible: bool,
}

impl NotchEvent {
    /// Creates an event for `notch`, generated at position `slot`.
    #[must_use]
    pub const fn new(slot: u32, notch: &Notch) -> Self {
        Self {
            slot,
            angle: notch.angle,
            style: notch.style,
            visible: notch.visible,
        }
    }
}

/// Outcome of one draw pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PassSummary {
    /// Notches generated (listener invocations).
    pub generated: u32,
    /// Notches dispatched to a renderer.
    pub drawn: u32,
    /// Whether generation stopped early at the draw angle.
    pub stopped_at_limit: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from draw passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called before the first notch of a non-empty pass.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called for each generated notch.
    fn on_notch(&mut self, e: &NotchEvent) {
        _ = e;
    }

    /// Called when a pass finishes, including empty passes.
    fn on_pass_end(&mut self, s: &PassSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NotchEvent`].
    #[inline]
    pub fn notch(&mut self, e: &NotchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_notch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_end(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_end(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}
