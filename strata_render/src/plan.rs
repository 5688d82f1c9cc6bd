// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one frame.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use strata_core::backend::Canvas;
use strata_core::layer::{Image, SurfaceId};
use strata_core::tint::NOOP_TINT;
use strata_core::transform::Transform2d;

use crate::damage::DamageRegion;

/// What a [`RenderItem`] draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawKind {
    /// A textured quad sampling an image.
    Image(Image),
    /// A textured quad sampling an offscreen surface.
    Surface(SurfaceId),
    /// A solid `ARGB` fill.
    Fill(u32),
}

/// A single draw command in the render plan.
///
/// Items are produced in back-to-front order, matching the paint traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem {
    /// What to draw.
    pub kind: DrawKind,
    /// Composed transform from the item's local space to device space.
    pub transform: Transform2d,
    /// Effective alpha, accumulated from ancestors.
    pub alpha: f32,
    /// Composed `ARGB` tint; the alpha byte mirrors `alpha`.
    pub tint: u32,
    /// The quad to draw, in local space.
    pub local_bounds: Rect,
    /// Device-space scissor in effect, if any.
    pub scissor: Option<Rect>,
}

impl RenderItem {
    /// Texture coordinates for the quad's corners `(0, 0)` and
    /// `(width, height)`.
    ///
    /// Images stretch over the quad unless a repeat flag is set, in which
    /// case that axis spans one unit per image-sized tile and the sampler is
    /// expected to wrap. Other items sample the unit square.
    #[must_use]
    pub fn tex_coords(&self) -> Rect {
        let DrawKind::Image(image) = self.kind else {
            return Rect::new(0.0, 0.0, 1.0, 1.0);
        };
        let tiles = |repeat: bool, extent: f64, tile: f64| {
            if repeat && tile > 0.0 {
                extent / tile
            } else {
                1.0
            }
        };
        Rect::new(
            0.0,
            0.0,
            tiles(image.repeat_x, self.local_bounds.width(), image.size.width),
            tiles(image.repeat_y, self.local_bounds.height(), image.size.height),
        )
    }

    /// Device-space bounding box of the item, cut down to its scissor.
    #[must_use]
    pub fn device_bounds(&self) -> Rect {
        let bounds = self.transform.transform_rect_bbox(self.local_bounds);
        match self.scissor {
            Some(scissor) => bounds.intersect(scissor),
            None => bounds,
        }
    }
}

/// An ordered list of draw commands for a single frame.
///
/// Batching backends walk `items` once, flushing whenever the texture or
/// scissor changes.
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// Draw items in back-to-front order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Creates an empty render plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of draw items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the plan draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The device-space region this plan touches.
    ///
    /// Items whose scissored bounds are empty contribute nothing.
    #[must_use]
    pub fn damage(&self) -> DamageRegion {
        let mut region = DamageRegion::None;
        for item in &self.items {
            region.add_rect(item.device_bounds());
        }
        region
    }
}

/// A [`Canvas`] that records draw calls into a [`RenderPlan`].
///
/// Clip regions form a stack: each [`start_clipped`](Canvas::start_clipped)
/// intersects the requested rectangle with the one below it, and every
/// recorded item carries the innermost scissor.
#[derive(Debug)]
pub struct PlanCanvas {
    plan: RenderPlan,
    scissors: Vec<Rect>,
    tint: u32,
}

impl Default for PlanCanvas {
    fn default() -> Self {
        Self {
            plan: RenderPlan::default(),
            scissors: Vec::new(),
            tint: NOOP_TINT,
        }
    }
}

impl PlanCanvas {
    /// Creates a canvas with an empty plan and no scissor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The plan recorded so far.
    #[must_use]
    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    /// The innermost scissor, if any clip is active.
    #[must_use]
    pub fn scissor(&self) -> Option<Rect> {
        self.scissors.last().copied()
    }

    /// Number of active clip regions.
    #[must_use]
    pub fn scissor_depth(&self) -> usize {
        self.scissors.len()
    }

    /// Clears the recorded plan, the scissor stack and the tint for the next
    /// frame.
    pub fn reset(&mut self) {
        self.plan.clear();
        self.scissors.clear();
        self.tint = NOOP_TINT;
    }

    /// Consumes the canvas and returns the recorded plan.
    #[must_use]
    pub fn finish(self) -> RenderPlan {
        if !self.scissors.is_empty() {
            log::warn!(
                "render plan finished with {} unbalanced clip region(s)",
                self.scissors.len()
            );
        }
        self.plan
    }

    fn record(&mut self, kind: DrawKind, transform: &Transform2d, alpha: f32, local_bounds: Rect) {
        self.plan.items.push(RenderItem {
            kind,
            transform: *transform,
            alpha,
            tint: self.tint,
            local_bounds,
            scissor: self.scissor(),
        });
    }
}

impl Canvas for PlanCanvas {
    fn draw_image(&mut self, transform: &Transform2d, alpha: f32, image: &Image, size: Size) {
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        self.record(DrawKind::Image(*image), transform, alpha, bounds);
    }

    fn draw_surface(&mut self, transform: &Transform2d, alpha: f32, surface: SurfaceId, size: Size) {
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        self.record(DrawKind::Surface(surface), transform, alpha, bounds);
    }

    fn fill_rect(&mut self, transform: &Transform2d, alpha: f32, rect: Rect, argb: u32) {
        self.record(DrawKind::Fill(argb), transform, alpha, rect);
    }

    fn start_clipped(&mut self, rect: Rect) -> bool {
        let rect = match self.scissor() {
            Some(outer) => outer.intersect(rect),
            None => rect,
        };
        self.scissors.push(rect);
        !rect.is_zero_area()
    }

    fn end_clipped(&mut self) {
        if self.scissors.pop().is_none() {
            log::warn!("end_clipped without a matching start_clipped");
        }
    }

    fn set_tint(&mut self, tint: u32) {
        self.tint = tint;
    }
}
