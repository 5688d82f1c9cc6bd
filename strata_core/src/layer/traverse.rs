// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice;

use super::id::LayerId;
use super::store::SceneGraph;

/// An iterator over the direct children of a layer, in paint order (back to
/// front). Reverse it for hit-test order.
///
/// Created by [`SceneGraph::children`].
#[derive(Debug)]
pub struct Children<'a> {
    scene: &'a SceneGraph,
    inner: slice::Iter<'a, u32>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(scene: &'a SceneGraph, children: &'a [u32]) -> Self {
        Self {
            scene,
            inner: children.iter(),
        }
    }
}

impl Iterator for Children<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        self.inner.next().map(|&idx| self.scene.id_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<LayerId> {
        self.inner.next_back().map(|&idx| self.scene.id_at(idx))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

impl SceneGraph {
    /// Calls `f` for `root` and every descendant, parents before children,
    /// siblings in paint order. The second argument is the depth below
    /// `root`.
    pub fn walk(&self, root: LayerId, mut f: impl FnMut(LayerId, usize)) {
        self.validate(root);
        let mut stack = alloc::vec![(root.idx, 0_usize)];
        while let Some((idx, level)) = stack.pop() {
            f(self.id_at(idx), level);
            for &child in self.children[idx as usize].as_slice().iter().rev() {
                stack.push((child, level + 1));
            }
        }
    }

    /// Slot indices of `root` and its descendants, in the same order as
    /// [`walk`](Self::walk).
    pub(crate) fn preorder(&self, root: u32) -> Vec<u32> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![root];
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(self.children[idx as usize].as_slice().iter().rev());
        }
        out
    }
}
