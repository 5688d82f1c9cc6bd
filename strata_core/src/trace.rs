// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for scene traversals.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`SceneGraph::paint_traced`](crate::layer::SceneGraph::paint_traced) and
//! [`SceneGraph::hit_test_traced`](crate::layer::SceneGraph::hit_test_traced)
//! call as they run. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates [`LayerVisit`] events, emitted
//!   once per painted layer.

use kurbo::Point;

use crate::layer::LayerId;
#[cfg(feature = "trace-rich")]
use crate::transform::Transform2d;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a paint traversal starts.
#[derive(Clone, Copy, Debug)]
pub struct PaintBeginEvent {
    /// The layer the traversal starts from.
    pub root: LayerId,
}

/// Counters collected over one paint traversal, emitted when it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintSummary {
    /// The layer the traversal started from.
    pub root: LayerId,
    /// Layers reached, including hidden ones.
    pub visited: u32,
    /// Draw calls issued by leaf layers.
    pub drawn: u32,
    /// Hidden layers whose subtree was skipped.
    pub skipped_hidden: u32,
    /// Clip regions pushed.
    pub clipped: u32,
    /// Clip regions the canvas reported as empty.
    pub empty_clips: u32,
}

impl PaintSummary {
    /// An all-zero summary for a traversal of `root`.
    #[must_use]
    pub const fn new(root: LayerId) -> Self {
        Self {
            root,
            visited: 0,
            drawn: 0,
            skipped_hidden: 0,
            clipped: 0,
            empty_clips: 0,
        }
    }
}

/// Emitted after a traced hit-test.
#[derive(Clone, Copy, Debug)]
pub struct HitTestEvent {
    /// The layer the test started from.
    pub root: LayerId,
    /// The query point, in the root's parent space.
    pub point: Point,
    /// The frontmost layer hit, if any.
    pub hit: Option<LayerId>,
}

/// A visible layer reached during painting.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct LayerVisit {
    /// The layer being painted.
    pub layer: LayerId,
    /// Its composed transform.
    pub transform: Transform2d,
    /// Its effective alpha.
    pub alpha: f32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from scene traversals.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a paint traversal starts.
    fn on_paint_begin(&mut self, e: &PaintBeginEvent) {
        _ = e;
    }

    /// Called when a paint traversal ends.
    fn on_paint_end(&mut self, s: &PaintSummary) {
        _ = s;
    }

    /// Called after a traced hit-test.
    fn on_hit_test(&mut self, e: &HitTestEvent) {
        _ = e;
    }

    /// Called for each visible layer painted (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_layer_visit(&mut self, e: &LayerVisit) {
        _ = e;
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

    /// Emits a [`PaintBeginEvent`].
    #[inline]
    pub fn paint_begin(&mut self, e: &PaintBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_paint_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PaintSummary`].
    #[inline]
    pub fn paint_end(&mut self, summary: &PaintSummary) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_paint_end(summary);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = summary;
        }
    }

    /// Emits a [`HitTestEvent`].
    #[inline]
    pub fn hit_test(&mut self, e: &HitTestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hit_test(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerVisit`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn layer_visit(&mut self, e: &LayerVisit) {
        if let Some(s) = &mut self.sink {
            s.on_layer_visit(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::SceneGraph;

    #[test]
    fn noop_sink_compiles() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let mut sink = NoopSink;
        sink.on_paint_begin(&PaintBeginEvent { root });
        sink.on_paint_end(&PaintSummary::new(root));
        sink.on_hit_test(&HitTestEvent {
            root,
            point: Point::ZERO,
            hit: None,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let mut tracer = Tracer::none();
        tracer.paint_begin(&PaintBeginEvent { root });
        tracer.paint_end(&PaintSummary::new(root));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_paint_and_hit_events() {
        use alloc::vec::Vec;
        use kurbo::Size;

        use crate::backend::Canvas;
        use crate::layer::{Image, ImageId, SurfaceId};
        use crate::transform::Transform2d;

        #[derive(Default)]
        struct RecordingSink {
            begins: u32,
            summaries: Vec<PaintSummary>,
            hits: Vec<Option<LayerId>>,
        }
        impl TraceSink for RecordingSink {
            fn on_paint_begin(&mut self, _: &PaintBeginEvent) {
                self.begins += 1;
            }
            fn on_paint_end(&mut self, s: &PaintSummary) {
                self.summaries.push(*s);
            }
            fn on_hit_test(&mut self, e: &HitTestEvent) {
                self.hits.push(e.hit);
            }
        }

        struct NullCanvas;
        impl Canvas for NullCanvas {
            fn draw_image(&mut self, _: &Transform2d, _: f32, _: &Image, _: Size) {}
            fn draw_surface(&mut self, _: &Transform2d, _: f32, _: SurfaceId, _: Size) {}
        }

        let mut scene = SceneGraph::new();
        let root = scene.create_clipped_group(Size::new(100.0, 100.0));
        let shown = scene.create_image(Some(Image::new(ImageId(1), Size::new(10.0, 10.0))));
        let hidden = scene.create_image(None);
        scene.add(root, shown);
        scene.add(root, hidden);
        scene.set_visible(hidden, false);

        let mut sink = RecordingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        scene.paint_traced(root, &mut NullCanvas, &Transform2d::IDENTITY, 1.0, &mut tracer);
        let hit = scene.hit_test_traced(root, Point::new(5.0, 5.0), &mut tracer);
        // Access sink after tracer is dropped.
        drop(tracer);

        assert_eq!(hit, Some(shown));
        assert_eq!(sink.begins, 1);
        assert_eq!(
            sink.summaries,
            [PaintSummary {
                root,
                visited: 3,
                drawn: 1,
                skipped_hidden: 1,
                clipped: 1,
                empty_clips: 0,
            }]
        );
        assert_eq!(sink.hits, [Some(shown)]);
    }
}
