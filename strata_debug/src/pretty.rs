// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::layer::LayerId;
use strata_core::trace::{HitTestEvent, LayerVisit, PaintBeginEvent, PaintSummary, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    visits: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("visits", &self.visits)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Per-layer visit lines are off; see [`with_visits`](Self::with_visits).
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            visits: false,
        }
    }

    /// Also print one line per painted layer.
    #[must_use]
    pub fn with_visits(mut self, visits: bool) -> Self {
        self.visits = visits;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn hit_name(hit: Option<LayerId>) -> String {
    hit.map_or_else(|| "none".to_owned(), |id| id.to_string())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_paint_begin(&mut self, e: &PaintBeginEvent) {
        let _ = writeln!(self.writer, "[paint:begin] root={}", e.root);
    }

    fn on_paint_end(&mut self, s: &PaintSummary) {
        let _ = writeln!(
            self.writer,
            "[paint:end] root={} visited={} drawn={} hidden={} clipped={} empty_clips={}",
            s.root, s.visited, s.drawn, s.skipped_hidden, s.clipped, s.empty_clips,
        );
    }

    fn on_hit_test(&mut self, e: &HitTestEvent) {
        let _ = writeln!(
            self.writer,
            "[hit] root={} at=({}, {}) -> {}",
            e.root,
            e.point.x,
            e.point.y,
            hit_name(e.hit),
        );
    }

    fn on_layer_visit(&mut self, e: &LayerVisit) {
        if !self.visits {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[visit] {} at=({}, {}) alpha={}",
            e.layer, e.transform.tx, e.transform.ty, e.alpha,
        );
    }
}
