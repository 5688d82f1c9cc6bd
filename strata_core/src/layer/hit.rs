// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Front-to-back hit-testing.
//!
//! A hit-test maps a point down the tree through each layer's inverse
//! transform and returns the frontmost layer containing it. Children are
//! tested in reverse paint order, so a later-painted sibling wins over an
//! earlier one it covers.
//!
//! A degenerate transform (zero scale, NaN components) maps points to
//! non-finite coordinates, which never fall inside any bounds: the layer
//! and its subtree simply receive no hits.

use kurbo::{Point, Size};

use super::id::LayerId;
use super::store::SceneGraph;
use crate::trace::{HitTestEvent, Tracer};

/// Overrides how a layer decides whether it was hit.
///
/// The tester receives the point already mapped into the layer's local
/// coordinates and may return the layer itself, one of its descendants, or
/// `None`. It can delegate to
/// [`SceneGraph::hit_test_default`] to keep the standard behaviour for part
/// of the layer.
///
/// Implemented for any `Fn(&SceneGraph, LayerId, Point) -> Option<LayerId>`.
pub trait HitTester {
    /// Tests `point` (in `layer`'s local coordinates) against `layer`.
    fn hit_test(&self, scene: &SceneGraph, layer: LayerId, point: Point) -> Option<LayerId>;
}

impl<F> HitTester for F
where
    F: Fn(&SceneGraph, LayerId, Point) -> Option<LayerId>,
{
    #[inline]
    fn hit_test(&self, scene: &SceneGraph, layer: LayerId, point: Point) -> Option<LayerId> {
        self(scene, layer, point)
    }
}

impl SceneGraph {
    /// Returns the frontmost layer in `layer`'s subtree under `point`, given
    /// in the coordinate space of `layer`'s parent.
    ///
    /// Invisible layers are skipped along with their subtrees. A custom
    /// [`HitTester`] replaces the default test for its layer.
    #[must_use]
    pub fn hit_test(&self, layer: LayerId, point: Point) -> Option<LayerId> {
        self.validate(layer);
        self.hit_test_at(layer.idx, point)
    }

    /// Like [`hit_test`](Self::hit_test), reporting the query and its result
    /// to `tracer`.
    pub fn hit_test_traced(
        &self,
        layer: LayerId,
        point: Point,
        tracer: &mut Tracer<'_>,
    ) -> Option<LayerId> {
        let hit = self.hit_test(layer, point);
        tracer.hit_test(&HitTestEvent {
            root: layer,
            point,
            hit,
        });
        hit
    }

    /// The standard hit-test for `layer`, ignoring any custom tester
    /// installed on it. `point` is in `layer`'s local coordinates.
    ///
    /// Groups test their interactive children front to back, then
    /// themselves. A clipped group rejects points outside its clip before
    /// testing its children. An unclipped group that finds no interactive
    /// child can never be hit, so it marks itself non-interactive until a
    /// descendant becomes interactive again.
    /// A layer hits itself when the point lies in `[0, width) × [0, height)`
    /// and it isn't hit-transparent.
    #[must_use]
    pub fn hit_test_default(&self, layer: LayerId, point: Point) -> Option<LayerId> {
        self.validate(layer);
        self.hit_test_default_at(layer.idx, point)
    }

    /// Tests the layer at `idx` against `point` in its parent's space.
    pub(crate) fn hit_test_at(&self, idx: u32, point: Point) -> Option<LayerId> {
        let i = idx as usize;
        if self.flags[i].hidden {
            return None;
        }
        let local = self.parent_to_local(idx, point);
        match &self.hit_tester[i] {
            Some(tester) => tester.hit_test(self, self.id_at(idx), local),
            None => self.hit_test_default_at(idx, local),
        }
    }

    fn hit_test_default_at(&self, idx: u32, local: Point) -> Option<LayerId> {
        let i = idx as usize;
        let content = &self.content[i];
        if content.is_group() {
            if let Some(clip) = content.clip() {
                if !in_bounds(local, clip) {
                    return None;
                }
            }
            let mut saw_interactive = false;
            for &child in self.children[i].as_slice().iter().rev() {
                if !self.interactive[child as usize].get() {
                    continue;
                }
                saw_interactive = true;
                if let Some(hit) = self.hit_test_at(child, local) {
                    return Some(hit);
                }
            }
            if !saw_interactive && content.clip().is_none() && self.hit_tester[i].is_none() {
                self.interactive[i].set(false);
                return None;
            }
        }
        (!self.flags[i].hit_transparent && in_bounds(local, content.size()))
            .then(|| self.id_at(idx))
    }

    /// Maps `point` from the parent's space into the layer's own space.
    pub(crate) fn parent_to_local(&self, idx: u32, point: Point) -> Point {
        let i = idx as usize;
        let p = self.local_transform[i].inverse_transform_point(point);
        let o = self.origin[i];
        Point::new(p.x + o.x, p.y + o.y)
    }

    /// Maps `point` from the layer's own space into its parent's space.
    pub(crate) fn local_to_parent(&self, idx: u32, point: Point) -> Point {
        let i = idx as usize;
        let o = self.origin[i];
        self.local_transform[i].transform_point(Point::new(point.x - o.x, point.y - o.y))
    }
}

/// Whether `p` lies in `[0, width) × [0, height)`. False for NaN.
#[inline]
fn in_bounds(p: Point, size: Size) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x < size.width && p.y < size.height
}
