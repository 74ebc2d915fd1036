// Copyright 2026 the Arcnotch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch generation and draw passes.
//!
//! The sweep of the arc is divided into `count` equal steps. A notch is
//! generated at every step; when the sweep stops short of a full circle one
//! more notch closes the arc at its end. Generation stops, rather than
//! skips, at the first step past the draw angle, since steps only grow.
//!
//! [`NotchIter`] yields the default descriptors of a pass. [`Notchs`] runs a
//! complete pass: it hands each descriptor to the registered
//! [`NotchListener`] and draws the visible ones.

use alloc::boxed::Box;
use core::iter::FusedIterator;

use kurbo::Rect;

use crate::canvas::Canvas;
use crate::config::{ArcConfig, NotchConfig};
use crate::geometry::{FULL_SWEEP, within_range};
use crate::notch::Notch;
use crate::render::draw_notch;
use crate::trace::{NotchEvent, PassBeginEvent, PassSummary, Tracer};

/// Customizes notches right before they are drawn.
///
/// Called synchronously, exactly once per generated notch and before its
/// visibility check. It runs once per notch on every draw pass, so keep it
/// cheap.
///
/// The listener has no handle back to its [`Notchs`]. Values it needs from
/// the configuration, such as the notch count to recognize the closing
/// notch, are read before registering and moved into the closure:
///
/// ```rust,ignore
/// let last = notchs.notches().count();
/// notchs.set_on_draw_listener(move |n: &mut Notch| n.visible = n.index < last);
/// ```
///
/// Implemented for every `FnMut(&mut Notch)` closure.
pub trait NotchListener {
    /// Adjusts `notch`. Clearing [`Notch::visible`] skips the draw.
    fn on_draw_notch(&mut self, notch: &mut Notch);
}

impl<F: FnMut(&mut Notch)> NotchListener for F {
    fn on_draw_notch(&mut self, notch: &mut Notch) {
        self(notch);
    }
}

/// Iterator over the default notch descriptors of one pass.
///
/// Yields nothing when the notch count or length is zero.
#[derive(Clone, Debug)]
pub struct NotchIter {
    template: Notch,
    count: u32,
    candidates: u32,
    delta_angle: f64,
    sweep_angle: f64,
    draw_angle: f64,
    next: u32,
    stopped_at_limit: bool,
}

impl NotchIter {
    /// Starts a pass over `arc` with the given notch settings.
    #[must_use]
    pub fn new(arc: &ArcConfig, notches: &NotchConfig) -> Self {
        let count = notches.count();
        let length = notches.length();
        let sweep_angle = arc.sweep_angle();

        let (candidates, delta_angle) = if count == 0 || length <= 0.0 {
            (0, 0.0)
        } else {
            let closing = u32::from(sweep_angle < FULL_SWEEP);
            (
                count.saturating_add(closing),
                sweep_angle / f64::from(count),
            )
        };

        Self {
            template: Notch {
                angle: arc.start_angle(),
                length,
                size: arc.stroke_size(),
                color: arc.stroke_color(),
                style: arc.stroke_style(),
                ..Notch::default()
            },
            count,
            candidates,
            delta_angle,
            sweep_angle,
            draw_angle: arc.draw_angle(),
            next: 0,
            stopped_at_limit: false,
        }
    }

    /// Number of notches a pass generates when nothing is cut off by the
    /// draw angle.
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> u32 {
        self.candidates
    }

    /// Angular step between consecutive notches, in degrees.
    #[inline]
    #[must_use]
    pub const fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    /// Whether iteration ended at the draw angle rather than after the last
    /// candidate.
    #[inline]
    #[must_use]
    pub const fn stopped_at_limit(&self) -> bool {
        self.stopped_at_limit
    }

    fn local_angle(&self, idx: u32) -> f64 {
        // The closing notch lands exactly on the sweep end.
        if idx >= self.count {
            self.sweep_angle
        } else {
            f64::from(idx) * self.delta_angle
        }
    }
}

impl Iterator for NotchIter {
    type Item = Notch;

    fn next(&mut self) -> Option<Notch> {
        if self.stopped_at_limit || self.next >= self.candidates {
            return None;
        }
        let idx = self.next;
        let local = self.local_angle(idx);
        if !within_range(local, 0.0, self.draw_angle) {
            self.stopped_at_limit = true;
            return None;
        }
        self.next += 1;
        Some(Notch {
            angle: self.template.angle + local,
            index: idx,
            ..self.template
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stopped_at_limit {
            return (0, Some(0));
        }
        let left = usize::try_from(self.candidates - self.next).ok();
        (0, left)
    }
}

impl FusedIterator for NotchIter {}

/// Notch engine: configuration, optional listener, and draw passes.
///
/// Every call to [`draw`](Self::draw) regenerates all notches from the
/// current configuration; nothing is cached between passes.
///
/// # Usage
///
/// ```rust,ignore
/// let mut notchs = Notchs::new(arc, NotchConfig::new(&arc).with_count(10));
/// notchs.set_on_draw_listener(|notch: &mut Notch| {
///     notch.visible = notch.index % 2 == 0;
/// });
/// notchs.draw(&mut canvas, bounds);
/// ```
pub struct Notchs {
    arc: ArcConfig,
    notches: NotchConfig,
    listener: Option<Box<dyn NotchListener>>,
}

impl core::fmt::Debug for Notchs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notchs")
            .field("arc", &self.arc)
            .field("notches", &self.notches)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Notchs {
    /// Creates an engine without a listener.
    #[must_use]
    pub fn new(arc: ArcConfig, notches: NotchConfig) -> Self {
        Self {
            arc,
            notches,
            listener: None,
        }
    }

    /// Creates an engine over `arc` with no notches and the derived default
    /// notch length.
    #[must_use]
    pub fn from_arc(arc: ArcConfig) -> Self {
        Self::new(arc, NotchConfig::new(&arc))
    }

    /// The parent arc settings.
    #[inline]
    #[must_use]
    pub const fn arc(&self) -> &ArcConfig {
        &self.arc
    }

    /// Mutable access to the parent arc settings.
    #[inline]
    pub fn arc_mut(&mut self) -> &mut ArcConfig {
        &mut self.arc
    }

    /// The notch settings.
    #[inline]
    #[must_use]
    pub const fn notches(&self) -> &NotchConfig {
        &self.notches
    }

    /// Mutable access to the notch settings.
    #[inline]
    pub fn notches_mut(&mut self) -> &mut NotchConfig {
        &mut self.notches
    }

    /// Registers the listener called for every generated notch, replacing
    /// any previous one.
    pub fn set_on_draw_listener(&mut self, listener: impl NotchListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener.
    pub fn clear_on_draw_listener(&mut self) {
        self.listener = None;
    }

    /// Returns the default descriptors of a pass, without listener or draw.
    #[must_use]
    pub fn iter(&self) -> NotchIter {
        NotchIter::new(&self.arc, &self.notches)
    }

    /// Runs a draw pass on `canvas` for an arc bounded by `area`.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, area: Rect) -> PassSummary {
        self.draw_traced(canvas, area, &mut Tracer::none())
    }

    /// Runs a draw pass, reporting each step to `tracer`.
    pub fn draw_traced(
        &mut self,
        canvas: &mut dyn Canvas,
        area: Rect,
        tracer: &mut Tracer<'_>,
    ) -> PassSummary {
        let mut iter = NotchIter::new(&self.arc, &self.notches);
        let mut summary = PassSummary::default();

        if iter.candidates() > 0 {
            tracer.pass_begin(&PassBeginEvent {
                count: self.notches.count(),
                candidates: iter.candidates(),
                delta_angle: iter.delta_angle(),
                draw_angle: self.arc.draw_angle(),
            });
        }

        for mut notch in iter.by_ref() {
            let slot = summary.generated;
            if let Some(listener) = self.listener.as_mut() {
                listener.on_draw_notch(&mut notch);
            }
            summary.generated += 1;
            if notch.visible {
                draw_notch(canvas, &notch, area);
                summary.drawn += 1;
            }
            tracer.notch(&NotchEvent::new(slot, &notch));
        }

        summary.stopped_at_limit = iter.stopped_at_limit();
        tracer.pass_end(&summary);
        summary
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Circle, Line, Point};
    use peniko::color::palette::css;

    use super::*;
    use crate::canvas::Paint;
    use crate::style::{PaintStyle, StrokeStyle};

    const EPS: f64 = 1e-9;

    #[derive(Debug)]
    enum Op {
        Line(Line, Paint),
        Circle(Circle, Paint),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn draw_line(&mut self, line: Line, paint: &Paint) {
            self.ops.push(Op::Line(line, *paint));
        }

        fn draw_circle(&mut self, circle: Circle, paint: &Paint) {
            self.ops.push(Op::Circle(circle, *paint));
        }
    }

    fn area() -> Rect {
        Rect::new(-100.0, -100.0, 100.0, 100.0)
    }

    fn engine(arc: ArcConfig, count: i32, length: f64) -> Notchs {
        let notches = NotchConfig::new(&arc)
            .with_count(count)
            .with_length(length);
        Notchs::new(arc, notches)
    }

    fn angles(iter: NotchIter) -> Vec<f64> {
        iter.map(|n| n.angle).collect()
    }

    fn assert_angles(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn full_sweep_has_no_closing_notch() {
        let arc = ArcConfig::new().with_start_angle(30.0);
        let notchs = engine(arc, 6, 5.0);
        assert_angles(
            &angles(notchs.iter()),
            &[30.0, 90.0, 150.0, 210.0, 270.0, 330.0],
        );
    }

    #[test]
    fn partial_sweep_closes_at_sweep_end() {
        let arc = ArcConfig::new()
            .with_start_angle(135.0)
            .with_sweep_angle(270.0);
        for count in [1, 4, 7, 9, 11] {
            let notches: Vec<_> = engine(arc, count, 5.0).iter().collect();
            assert_eq!(notches.len(), count as usize + 1, "count {count}");
            let last = notches.last().map(|n| n.angle);
            assert_eq!(last, Some(135.0 + 270.0), "count {count}");
        }
    }

    #[test]
    fn indices_increase_from_zero() {
        let arc = ArcConfig::new().with_sweep_angle(180.0);
        let indices: Vec<u32> = engine(arc, 4, 5.0).iter().map(|n| n.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn defaults_come_from_configuration() {
        let arc = ArcConfig::new()
            .with_stroke_size(2.5)
            .with_stroke_color(css::ORANGE)
            .with_stroke_style(StrokeStyle::ClosedArc);
        let notch = engine(arc, 3, 7.0).iter().next();
        let notch = notch.expect("one notch");
        assert_eq!(notch.size, 2.5);
        assert_eq!(notch.length, 7.0);
        assert_eq!(notch.color.components, css::ORANGE.components);
        assert_eq!(notch.style, StrokeStyle::ClosedArc);
        assert_eq!(notch.distance_from_border, 0.0);
        assert!(notch.visible);
    }

    #[test]
    fn draw_angle_stops_generation() {
        let arc = ArcConfig::new()
            .with_sweep_angle(300.0)
            .with_draw_angle(100.0);
        let mut iter = engine(arc, 10, 5.0).iter();
        assert_angles(&angles(iter.clone()), &[0.0, 30.0, 60.0, 90.0]);
        assert_eq!(iter.by_ref().count(), 4);
        assert!(iter.stopped_at_limit());
        assert_eq!(iter.next().map(|n| n.index), None);
    }

    #[test]
    fn draw_angle_on_a_step_is_included() {
        let arc = ArcConfig::new().with_draw_angle(90.0);
        assert_angles(&angles(engine(arc, 4, 5.0).iter()), &[0.0, 90.0]);
    }

    #[test]
    fn zero_draw_angle_keeps_first_notch() {
        let arc = ArcConfig::new().with_draw_angle(0.0);
        assert_angles(&angles(engine(arc, 4, 5.0).iter()), &[0.0]);
    }

    #[test]
    fn zero_sweep_stacks_notches_at_start() {
        let arc = ArcConfig::new()
            .with_start_angle(45.0)
            .with_sweep_angle(0.0);
        let iter = engine(arc, 3, 5.0).iter();
        assert_eq!(iter.delta_angle(), 0.0);
        assert_angles(&angles(iter), &[45.0, 45.0, 45.0, 45.0]);
    }

    #[test]
    fn zero_count_or_length_is_a_no_op() {
        use alloc::rc::Rc;
        use core::cell::Cell;

        for (count, length) in [(0, 10.0), (-3, 10.0), (4, 0.0), (4, -1.0)] {
            let mut notchs = engine(ArcConfig::new(), count, length);
            let calls = Rc::new(Cell::new(0_u32));
            let counter = Rc::clone(&calls);
            notchs.set_on_draw_listener(move |_: &mut Notch| counter.set(counter.get() + 1));
            let mut canvas = Recorder::default();
            let summary = notchs.draw(&mut canvas, area());
            assert_eq!(summary, PassSummary::default(), "{count}/{length}");
            assert_eq!(calls.get(), 0, "{count}/{length}");
            assert!(canvas.ops.is_empty(), "{count}/{length}");
            assert_eq!(notchs.iter().count(), 0, "{count}/{length}");
        }
    }

    #[test]
    fn infinite_length_draws_nothing() {
        let mut notchs = engine(ArcConfig::new(), 4, f64::INFINITY);
        let mut canvas = Recorder::default();
        assert_eq!(notchs.draw(&mut canvas, area()), PassSummary::default());
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn from_arc_starts_without_notches() {
        let arc = ArcConfig::new().with_stroke_size(5.0);
        let mut notchs = Notchs::from_arc(arc);
        assert_eq!(notchs.notches().count(), 0);
        assert_eq!(notchs.notches().length(), 10.0);
        assert_eq!(notchs.iter().count(), 0);

        notchs.notches_mut().set_count(6);
        let mut canvas = Recorder::default();
        assert_eq!(notchs.draw(&mut canvas, area()).drawn, 6);
        assert_eq!(canvas.ops.len(), 6);
    }

    #[test]
    fn listener_runs_once_per_candidate() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let arc = ArcConfig::new().with_sweep_angle(200.0);
        let mut notchs = engine(arc, 5, 5.0);
        let log = Rc::clone(&seen);
        notchs.set_on_draw_listener(move |n: &mut Notch| log.borrow_mut().push(n.index));

        let summary = notchs.draw(&mut Recorder::default(), area());
        assert_eq!(*seen.borrow(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(summary.generated, 6);
        assert_eq!(summary.drawn, 6);
        assert!(!summary.stopped_at_limit);
    }

    #[test]
    fn hiding_first_and_last_leaves_inner_notches() {
        let count = 8;
        let arc = ArcConfig::new()
            .with_start_angle(135.0)
            .with_sweep_angle(270.0);
        let mut notchs = engine(arc, count, 6.0);
        let last = notchs.notches().count();
        notchs.set_on_draw_listener(move |n: &mut Notch| {
            n.visible = n.index > 0 && n.index < last;
        });

        let mut canvas = Recorder::default();
        let summary = notchs.draw(&mut canvas, area());
        assert_eq!(summary.generated, 9);
        assert_eq!(summary.drawn, 7);
        assert_eq!(canvas.ops.len(), 7);
    }

    #[test]
    fn rewriting_index_does_not_shift_iteration() {
        let arc = ArcConfig::new();
        let mut notchs = engine(arc, 4, 10.0);
        notchs.set_on_draw_listener(|n: &mut Notch| {
            n.index += 100;
            n.visible = n.index % 2 == 0;
        });
        let mut canvas = Recorder::default();
        let summary = notchs.draw(&mut canvas, area());
        assert_eq!(summary.generated, 4);
        assert_eq!(summary.drawn, 2);

        let ends: Vec<Point> = canvas
            .ops
            .iter()
            .map(|op| match op {
                Op::Line(line, _) => line.p1,
                Op::Circle(circle, _) => circle.center,
            })
            .collect();
        assert!(ends[0].distance(Point::new(100.0, 0.0)) < EPS, "{ends:?}");
        assert!(ends[1].distance(Point::new(-100.0, 0.0)) < EPS, "{ends:?}");
    }

    #[test]
    fn listener_overrides_style_color_and_size() {
        let arc = ArcConfig::new();
        let mut notchs = engine(arc, 2, 10.0);
        notchs.set_on_draw_listener(|n: &mut Notch| {
            if n.index == 1 {
                n.style = StrokeStyle::FilledArc;
                n.color = css::RED;
                n.size = 6.0;
            }
        });
        let mut canvas = Recorder::default();
        notchs.draw(&mut canvas, area());

        match &canvas.ops[..] {
            [Op::Line(_, first), Op::Circle(circle, second)] => {
                assert_eq!(first.width, ArcConfig::DEFAULT_STROKE_SIZE);
                assert_eq!(first.color.components, css::BLACK.components);
                assert_eq!(second.width, 6.0);
                assert_eq!(second.color.components, css::RED.components);
                assert_eq!(second.style, PaintStyle::FillAndStroke);
                assert_eq!(circle.radius, 10.0);
                // 180°: 100 + 6 / 2 + 10 to the left.
                assert!(
                    circle.center.distance(Point::new(-113.0, 0.0)) < EPS,
                    "{circle:?}"
                );
            }
            ops => panic!("unexpected ops: {ops:?}"),
        }
    }

    #[test]
    fn four_line_notches_on_a_square() {
        let arc = ArcConfig::new();
        let mut notchs = engine(arc, 4, 10.0);
        let mut canvas = Recorder::default();
        let summary = notchs.draw(&mut canvas, area());
        assert_eq!(summary.drawn, 4);

        let expected = [
            (Point::new(110.0, 0.0), Point::new(100.0, 0.0)),
            (Point::new(0.0, 110.0), Point::new(0.0, 100.0)),
            (Point::new(-110.0, 0.0), Point::new(-100.0, 0.0)),
            (Point::new(0.0, -110.0), Point::new(0.0, -100.0)),
        ];
        for (op, (start, end)) in canvas.ops.iter().zip(expected) {
            let Op::Line(line, _) = op else {
                panic!("expected a line, got {op:?}");
            };
            assert!(line.p0.distance(start) < EPS, "{line:?}");
            assert!(line.p1.distance(end) < EPS, "{line:?}");
        }
    }

    #[test]
    fn configuration_changes_apply_on_next_pass() {
        let mut notchs = engine(ArcConfig::new(), 4, 10.0);
        assert_eq!(notchs.draw(&mut Recorder::default(), area()).drawn, 4);

        notchs.notches_mut().set_count(6);
        notchs.arc_mut().set_draw_angle(120.0);
        let summary = notchs.draw(&mut Recorder::default(), area());
        assert_eq!(summary.generated, 3);
        assert!(summary.stopped_at_limit);

        notchs.clear_on_draw_listener();
        notchs.arc_mut().clear_draw_angle();
        assert_eq!(notchs.draw(&mut Recorder::default(), area()).drawn, 6);
    }

    #[test]
    fn closing_notch_stops_at_draw_limit() {
        let arc = ArcConfig::new()
            .with_sweep_angle(90.0)
            .with_draw_angle(89.0);
        let mut notchs = engine(arc, 3, 5.0);
        let summary = notchs.draw(&mut Recorder::default(), area());
        assert_eq!(summary.generated, 3);
        assert!(summary.stopped_at_limit);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn pass_is_traced() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Sink {
            begins: Vec<PassBeginEvent>,
            notches: Vec<NotchEvent>,
            ends: Vec<PassSummary>,
        }
        impl TraceSink for Sink {
            fn on_pass_begin(&mut self, e: &PassBeginEvent) {
                self.begins.push(*e);
            }
            fn on_notch(&mut self, e: &NotchEvent) {
                self.notches.push(*e);
            }
            fn on_pass_end(&mut self, s: &PassSummary) {
                self.ends.push(*s);
            }
        }

        let arc = ArcConfig::new().with_sweep_angle(180.0);
        let mut notchs = engine(arc, 2, 5.0);
        notchs.set_on_draw_listener(|n: &mut Notch| n.visible = n.index != 1);

        let mut sink = Sink::default();
        let mut tracer = Tracer::new(&mut sink);
        notchs.draw_traced(&mut Recorder::default(), area(), &mut tracer);
        drop(tracer);

        assert_eq!(
            sink.begins,
            [PassBeginEvent {
                count: 2,
                candidates: 3,
                delta_angle: 90.0,
                draw_angle: 180.0,
            }]
        );
        let visible: Vec<bool> = sink.notches.iter().map(|e| e.visible).collect();
        assert_eq!(visible, [true, false, true]);
        assert_eq!(
            sink.ends,
            [PassSummary {
                generated: 3,
                drawn: 2,
                stopped_at_limit: false,
            }]
        );
    }
}
