// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group membership and depth ordering.
//!
//! A group keeps its children sorted by depth, ascending, so painting walks
//! them back to front and hit-testing walks them front to back. Children
//! with equal depth stay in the order they were attached, including after
//! any number of depth changes.
//!
//! Structural misuse (adding a layer that already has another parent,
//! removing a layer from a group it isn't in, creating a cycle) is reported
//! by the `try_*` forms as a [`SceneError`]. The plain forms panic in debug
//! builds and log and ignore the call in release builds; in both cases the
//! tree is left unchanged.

use alloc::vec::Vec;

use kurbo::Point;

use super::children::keys;
use super::id::{INVALID, LayerId};
use super::store::SceneGraph;
use crate::error::{SceneError, misuse};

impl SceneGraph {
    /// Adds `child` to `group` at the position its depth dictates.
    ///
    /// See [`try_add`](Self::try_add) for the failure cases.
    pub fn add(&mut self, group: LayerId, child: LayerId) {
        if let Err(err) = self.try_add(group, child) {
            misuse(err);
        }
    }

    /// Adds `child` to `group` and returns the index it was inserted at.
    ///
    /// `on_add` fires once the child is linked. Adding a child to the group
    /// it is already in does nothing and returns its current index.
    ///
    /// # Errors
    ///
    /// - [`SceneError::StaleLayer`] if either handle is stale.
    /// - [`SceneError::NotAGroup`] if `group` is not a group layer.
    /// - [`SceneError::AlreadyAttached`] if `child` has a different parent.
    /// - [`SceneError::WouldCycle`] if `child` is `group` or one of its
    ///   ancestors.
    pub fn try_add(&mut self, group: LayerId, child: LayerId) -> Result<usize, SceneError> {
        self.check(group)?;
        self.check(child)?;
        let (g, c) = (group.idx, child.idx);
        if !self.content[g as usize].is_group() {
            return Err(SceneError::NotAGroup(group));
        }
        match self.parent[c as usize] {
            INVALID => {}
            p if p == g => {
                return self
                    .position_in_parent(c)
                    .ok_or(SceneError::NotAChild { child, group });
            }
            p => {
                return Err(SceneError::AlreadyAttached {
                    child,
                    parent: self.id_at(p),
                });
            }
        }
        if self.is_self_or_ancestor(c, g) {
            return Err(SceneError::WouldCycle { child, group });
        }
        Ok(self.link(g, c))
    }

    /// Sets the translation of `child` to `at`, then adds it to `group`.
    pub fn add_at(&mut self, group: LayerId, child: LayerId, at: Point) {
        if let Err(err) = self.try_add_at(group, child, at) {
            misuse(err);
        }
    }

    /// Fallible form of [`add_at`](Self::add_at). On error the translation
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// As for [`try_add`](Self::try_add).
    pub fn try_add_at(
        &mut self,
        group: LayerId,
        child: LayerId,
        at: Point,
    ) -> Result<usize, SceneError> {
        self.check(child)?;
        let old = self.translation[child.idx as usize];
        self.set_translation(child, at.x, at.y);
        self.try_add(group, child).inspect_err(|_| {
            self.set_translation(child, old.x, old.y);
        })
    }

    /// Removes `child` from `group`.
    ///
    /// See [`try_remove`](Self::try_remove) for the failure cases.
    pub fn remove(&mut self, group: LayerId, child: LayerId) {
        if let Err(err) = self.try_remove(group, child) {
            misuse(err);
        }
    }

    /// Removes `child` from `group` and returns the index it occupied.
    ///
    /// `on_remove` fires before the child is unlinked.
    ///
    /// # Errors
    ///
    /// - [`SceneError::StaleLayer`] if either handle is stale.
    /// - [`SceneError::NotAChild`] if `child` is not a child of `group`.
    pub fn try_remove(&mut self, group: LayerId, child: LayerId) -> Result<usize, SceneError> {
        self.check(group)?;
        self.check(child)?;
        if self.parent[child.idx as usize] != group.idx {
            return Err(SceneError::NotAChild { child, group });
        }
        self.unlink(group.idx, child.idx)
            .ok_or(SceneError::NotAChild { child, group })
    }

    /// Removes every child of `group`, last to first, firing `on_remove` for
    /// each.
    pub fn remove_all(&mut self, group: LayerId) {
        self.validate(group);
        self.detach_all(group.idx);
    }

    /// Removes every child of `group` (firing `on_remove` as
    /// [`remove_all`](Self::remove_all) does), then destroys each one.
    pub fn destroy_all(&mut self, group: LayerId) {
        self.validate(group);
        self.destroy_children(group.idx);
    }

    /// Moves `child` from its current parent (if any) to `group`, firing
    /// `on_remove` and then `on_add`.
    pub fn reparent(&mut self, child: LayerId, group: LayerId) {
        if let Err(err) = self.try_reparent(child, group) {
            misuse(err);
        }
    }

    /// Fallible form of [`reparent`](Self::reparent). Returns the index the
    /// child was inserted at.
    ///
    /// # Errors
    ///
    /// As for [`try_add`](Self::try_add), except that an existing parent is
    /// not an error. The child stays where it was if the move is rejected.
    pub fn try_reparent(&mut self, child: LayerId, group: LayerId) -> Result<usize, SceneError> {
        self.check(group)?;
        self.check(child)?;
        let (g, c) = (group.idx, child.idx);
        if !self.content[g as usize].is_group() {
            return Err(SceneError::NotAGroup(group));
        }
        if self.is_self_or_ancestor(c, g) {
            return Err(SceneError::WouldCycle { child, group });
        }
        match self.parent[c as usize] {
            p if p == g => {
                return self
                    .position_in_parent(c)
                    .ok_or(SceneError::NotAChild { child, group });
            }
            INVALID => {}
            p => {
                self.unlink(p, c);
            }
        }
        Ok(self.link(g, c))
    }

    /// Sets the depth of a layer, re-sorting it within its parent.
    ///
    /// Lower depths paint first and receive hits last. `-0.0` is stored as
    /// `0.0`. NaN depths are rejected: debug builds panic, release builds log
    /// and keep the old depth.
    pub fn set_depth(&mut self, id: LayerId, depth: f32) {
        self.validate(id);
        if depth.is_nan() {
            if cfg!(debug_assertions) {
                panic!("layer depth must not be NaN ({id:?})");
            }
            log::warn!("ignoring NaN depth on {id:?}");
            return;
        }
        // Sort keys compare with `total_cmp`, which orders -0.0 before 0.0.
        let depth = if depth == 0.0 { 0.0 } else { depth };
        let i = id.idx as usize;
        let old = self.depth[i];
        if old == depth {
            return;
        }
        self.depth[i] = depth;
        let p = self.parent[i];
        if p != INVALID {
            self.depth_changed(p, id.idx, old);
        }
    }

    /// Returns the index of a layer among its parent's children, or `None`
    /// if it is detached.
    #[must_use]
    pub fn index_in_parent(&self, id: LayerId) -> Option<usize> {
        self.validate(id);
        self.position_in_parent(id.idx)
    }

    // -- Internal helpers --

    pub(crate) fn check(&self, id: LayerId) -> Result<(), SceneError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(SceneError::StaleLayer(id))
        }
    }

    /// Links `c` into `g` and fires `on_add` through its subtree. `c` must
    /// be detached.
    fn link(&mut self, g: u32, c: u32) -> usize {
        self.seq[c as usize] = self.next_seq;
        self.next_seq += 1;
        let key = self.sort_key(c);
        let index = self.children[g as usize].insert(c, key, keys(&self.depth, &self.seq));
        self.parent[c as usize] = g;
        if self.interactive[c as usize].get() {
            self.activate(g);
        }
        self.fire_add(c);
        index
    }

    /// Fires `on_remove` through the subtree of `c` and unlinks it from `g`.
    pub(crate) fn unlink(&mut self, g: u32, c: u32) -> Option<usize> {
        self.fire_remove(c);
        let key = self.sort_key(c);
        let index = self.children[g as usize].remove(c, key, keys(&self.depth, &self.seq));
        self.parent[c as usize] = INVALID;
        index
    }

    /// Unlinks every child of `g` from the end, returning them in the order
    /// they were removed.
    fn detach_all(&mut self, g: u32) -> Vec<u32> {
        let mut removed = Vec::with_capacity(self.children[g as usize].len());
        while let Some(c) = self.children[g as usize].last() {
            self.fire_remove(c);
            self.children[g as usize].pop();
            self.parent[c as usize] = INVALID;
            removed.push(c);
        }
        removed
    }

    /// Detaches all children of `g`, then destroys them back to front.
    fn destroy_children(&mut self, g: u32) {
        let mut doomed = self.detach_all(g);
        doomed.reverse();
        for c in doomed {
            self.teardown(c);
        }
    }

    fn depth_changed(&mut self, g: u32, c: u32, old_depth: f32) {
        let seq = self.seq[c as usize];
        let mut old = self.sort_key(c);
        old.depth = old_depth;
        let new = self.sort_key(c);
        let moved = self.children[g as usize].reposition(c, old, new, keys(&self.depth, &self.seq));
        if let Some((from, to)) = moved {
            if from != to {
                log::trace!("layer #{c} (seq {seq}) moved from {from} to {to} in #{g}");
            }
        }
    }

    fn position_in_parent(&self, c: u32) -> Option<usize> {
        let p = self.parent[c as usize];
        if p == INVALID {
            return None;
        }
        self.children[p as usize].find(c, self.sort_key(c), keys(&self.depth, &self.seq))
    }

    /// Whether `c` is `g` or one of its ancestors.
    fn is_self_or_ancestor(&self, c: u32, g: u32) -> bool {
        let mut cur = g;
        while cur != INVALID {
            if cur == c {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }
}
