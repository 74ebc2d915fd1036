// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular notch generation and rendering along elliptical arcs.
//!
//! `arcnotch_core` draws the tick marks ("notches") of annular gauge-style
//! indicators. It is `no_std` compatible (with `alloc`) and talks to the
//! outside world through two small seams: a [`Canvas`](canvas::Canvas) that
//! accepts line and circle draws, and an optional
//! [`NotchListener`](generate::NotchListener) that customizes each notch
//! before it is drawn.
//!
//! # Architecture
//!
//! One draw pass flows through the crate like this:
//!
//! ```text
//!   ArcConfig + NotchConfig
//!       │
//!       ▼
//!   NotchIter ──► Notch (defaults) ──► NotchListener::on_draw_notch()
//!                                              │
//!                 ┌────────────────────────────┘
//!                 ▼
//!   visible? ──► render::draw_notch() ──► Canvas::draw_line / draw_circle
//! ```
//!
//! **[`geometry`]**: angle-to-point mapping on the ellipse inscribed in a
//! bounding rectangle, symmetric inflation, inclusive range tests.
//!
//! **[`config`]**: owner-side settings: [`ArcConfig`](config::ArcConfig)
//! for the parent arc (angles, stroke) and
//! [`NotchConfig`](config::NotchConfig) for the notch count and length.
//! Invalid values are normalized when set, never at draw time.
//!
//! **[`notch`]**: the per-notch [`Notch`](notch::Notch) descriptor handed
//! to the listener.
//!
//! **[`style`]**: stroke styles and the shape/paint mode each resolves to.
//!
//! **[`generate`]**: [`NotchIter`](generate::NotchIter) and the
//! [`Notchs`](generate::Notchs) engine that runs a full draw pass.
//!
//! **[`render`]**: line and circle renderers.
//!
//! **[`canvas`]**: the [`Canvas`](canvas::Canvas) trait and
//! [`Paint`](canvas::Paint).
//!
//! **[`trace`]**: the [`TraceSink`](trace::TraceSink) trait and event types for
//! draw-pass instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod canvas;
pub mod config;
pub mod generate;
pub mod geometry;
pub mod notch;
pub mod render;
pub mod style;
pub mod trace;
