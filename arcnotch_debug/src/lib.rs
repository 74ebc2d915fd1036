// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON/SVG export for arcnotch diagnostics.
//!
//! This crate provides development-time implementations of the
//! `arcnotch_core` seams:
//!
//! - [`recording::RecordingCanvas`]: a [`Canvas`](arcnotch_core::canvas::Canvas)
//!   that keeps every draw operation as a [`recording::DrawOp`].
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event
//!   [`TraceSink`](arcnotch_core::trace::TraceSink) output.
//! - [`json::export`]: writes recorded draw operations as a JSON array.
//! - [`svg::export`]: writes recorded draw operations as an SVG document.

pub mod json;
pub mod pretty;
pub mod recording;
pub mod svg;
