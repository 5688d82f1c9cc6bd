// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that records every call it receives.
//!
//! [`RecordingCanvas`] is meant for tests and bug reports: paint a tree into
//! it, then assert on (or print) the [`DrawCall`] sequence.

use kurbo::{Rect, Size};
use strata_core::backend::Canvas;
use strata_core::layer::{Image, SurfaceId};
use strata_core::tint::NOOP_TINT;
use strata_core::transform::Transform2d;

/// One call made on a [`RecordingCanvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    /// [`Canvas::draw_image`].
    Image {
        /// Composed transform.
        transform: Transform2d,
        /// Effective alpha.
        alpha: f32,
        /// Tint in effect.
        tint: u32,
        /// The image drawn.
        image: Image,
        /// Local size of the quad.
        size: Size,
    },
    /// [`Canvas::draw_surface`].
    Surface {
        /// Composed transform.
        transform: Transform2d,
        /// Effective alpha.
        alpha: f32,
        /// Tint in effect.
        tint: u32,
        /// The surface drawn.
        surface: SurfaceId,
        /// Local size of the quad.
        size: Size,
    },
    /// [`Canvas::fill_rect`].
    Fill {
        /// Composed transform.
        transform: Transform2d,
        /// Effective alpha.
        alpha: f32,
        /// Tint in effect.
        tint: u32,
        /// Local rectangle.
        rect: Rect,
        /// Fill color.
        argb: u32,
    },
    /// [`Canvas::start_clipped`], with whether the clip was non-empty.
    StartClip(Rect, bool),
    /// [`Canvas::end_clipped`].
    EndClip,
}

impl DrawCall {
    /// Whether this call draws something (as opposed to clip bookkeeping).
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !matches!(self, Self::StartClip(..) | Self::EndClip)
    }
}

/// A [`Canvas`] that records calls instead of drawing.
///
/// Clips are reported empty when the requested rectangle has zero area;
/// no intersection with enclosing clips is performed. The tint set through
/// [`Canvas::set_tint`] is stamped on each draw call rather than recorded as
/// a call of its own.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
    tint: u32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            tint: NOOP_TINT,
        }
    }
}

impl RecordingCanvas {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of draw calls, ignoring clip bookkeeping.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_draw()).count()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_image(&mut self, transform: &Transform2d, alpha: f32, image: &Image, size: Size) {
        self.calls.push(DrawCall::Image {
            transform: *transform,
            alpha,
            tint: self.tint,
            image: *image,
            size,
        });
    }

    fn draw_surface(&mut self, transform: &Transform2d, alpha: f32, surface: SurfaceId, size: Size) {
        self.calls.push(DrawCall::Surface {
            transform: *transform,
            alpha,
            tint: self.tint,
            surface,
            size,
        });
    }

    fn fill_rect(&mut self, transform: &Transform2d, alpha: f32, rect: Rect, argb: u32) {
        self.calls.push(DrawCall::Fill {
            transform: *transform,
            alpha,
            tint: self.tint,
            rect,
            argb,
        });
    }

    fn start_clipped(&mut self, rect: Rect) -> bool {
        let visible = !rect.is_zero_area();
        self.calls.push(DrawCall::StartClip(rect, visible));
        visible
    }

    fn end_clipped(&mut self) {
        self.calls.push(DrawCall::EndClip);
    }

    fn set_tint(&mut self, tint: u32) {
        self.tint = tint;
    }
}
