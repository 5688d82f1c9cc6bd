// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for rendering integrations.
//!
//! Strata splits platform-specific work into *backend* code that lives
//! outside this crate. A backend provides:
//!
//! - **Canvas** — Implements the [`Canvas`] trait: the drawing capability the
//!   paint traversal calls into. A canvas-style backend issues 2-D context
//!   calls; a GL-style backend batches textured quads (see the
//!   `strata_render` crate).
//!
//! - **Asset loading** — Decodes images and hands them to image layers via
//!   [`SceneGraph::set_image`](crate::layer::SceneGraph::set_image) once
//!   ready. Layers skip drawing until then.
//!
//! - **Input** — Converts native pointer events into scene coordinates and
//!   calls [`SceneGraph::hit_layer`](crate::layer::SceneGraph::hit_layer).
//!
//! # Crate boundaries
//!
//! `strata_core` owns the layer tree, its algorithms, and this contract
//! module. It never reaches for a global platform object: everything a
//! traversal needs is passed in by the frame loop.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame(delta: f64) {
//!     // Update: mutate the tree in place (add/remove/set_depth/...).
//!     game.update(&mut scene, delta);
//!
//!     // Paint: walk the tree back to front into the backend canvas.
//!     scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
//! }
//!
//! fn on_pointer(x: f64, y: f64) {
//!     if let Some(hit) = scene.hit_layer(root, Point::new(x, y)) {
//!         game.dispatch(hit);
//!     }
//! }
//! ```

use kurbo::{Rect, Size};

use crate::layer::{Image, SurfaceId};
use crate::transform::Transform2d;

/// The drawing surface that painted layers render into.
///
/// Every call carries the fully composed transform (layer space to device
/// space) and the effective alpha of the layer being drawn, so a backend
/// does not need to maintain its own transform stack.
pub trait Canvas {
    /// Draws `image` stretched (or tiled, per its repeat flags) over the
    /// local rectangle `(0, 0, size.width, size.height)`.
    fn draw_image(&mut self, transform: &Transform2d, alpha: f32, image: &Image, size: Size);

    /// Draws the current contents of `surface` over the local rectangle
    /// `(0, 0, size.width, size.height)`.
    fn draw_surface(&mut self, transform: &Transform2d, alpha: f32, surface: SurfaceId, size: Size);

    /// Fills a local-space rectangle with a solid `ARGB` color.
    ///
    /// Used by immediate renderers; the default does nothing.
    fn fill_rect(&mut self, transform: &Transform2d, alpha: f32, rect: Rect, argb: u32) {
        _ = (transform, alpha, rect, argb);
    }

    /// Intersects the current clip with the device-space rectangle `rect`
    /// and pushes it. Returns `false` if the resulting clip is empty, in
    /// which case the caller skips drawing but still calls
    /// [`end_clipped`](Self::end_clipped).
    ///
    /// Backends that can't clip may keep the default, which clips nothing.
    fn start_clipped(&mut self, rect: Rect) -> bool {
        _ = rect;
        true
    }

    /// Pops the clip pushed by the matching
    /// [`start_clipped`](Self::start_clipped).
    fn end_clipped(&mut self) {}

    /// Sets the `ARGB` tint multiplied into the draws that follow.
    ///
    /// The paint traversal calls this before each leaf draws, with the tint
    /// composed from the leaf's ancestors. Its alpha byte is the quantized
    /// alpha passed to the draw calls. Backends that can't tint may keep the
    /// default, which ignores it.
    fn set_tint(&mut self, tint: u32) {
        _ = tint;
    }
}

/// Produces the drawing of an immediate layer each frame.
///
/// Implemented for any `FnMut(&mut dyn Canvas, &Transform2d, f32)`.
pub trait Renderer {
    /// Renders into `canvas` using the layer's composed `transform` and
    /// effective `alpha`.
    fn render(&mut self, canvas: &mut dyn Canvas, transform: &Transform2d, alpha: f32);
}

impl<F> Renderer for F
where
    F: FnMut(&mut dyn Canvas, &Transform2d, f32),
{
    #[inline]
    fn render(&mut self, canvas: &mut dyn Canvas, transform: &Transform2d, alpha: f32) {
        self(canvas, transform, alpha);
    }
}
