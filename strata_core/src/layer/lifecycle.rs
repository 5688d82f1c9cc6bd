// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach/detach hooks and layer destruction.

use alloc::vec::Vec;

use super::children::ChildList;
use super::content::LayerContent;
use super::id::{INVALID, LayerId};
use super::store::SceneGraph;

/// Where a layer is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerState {
    /// Alive and not attached to any group.
    Detached,
    /// Alive and attached to a group.
    Attached,
    /// Destroyed; the handle is stale.
    Destroyed,
}

/// Per-layer callbacks fired on structural changes.
///
/// Backends use these to acquire resources when a layer joins a tree and to
/// release them when it leaves. All methods default to no-ops.
///
/// Attaching or detaching a layer notifies its whole subtree, parents before
/// children: every descendant's hooks see the event with its own parent.
/// `on_add` fires after the layer is linked into its parent's children;
/// `on_remove` fires before it is unlinked. A depth change that reorders a
/// layer among its siblings fires neither.
pub trait LayerHooks {
    /// Called after `layer`, or one of its ancestors, was attached.
    /// `parent` is the layer's own parent.
    fn on_add(&mut self, layer: LayerId, parent: LayerId) {
        _ = (layer, parent);
    }

    /// Called before `layer`, or one of its ancestors, is detached.
    /// `parent` is the layer's own parent.
    fn on_remove(&mut self, layer: LayerId, parent: LayerId) {
        _ = (layer, parent);
    }

    /// Called once when `layer` is destroyed, after it has been detached and
    /// its children destroyed.
    fn on_destroy(&mut self, layer: LayerId) {
        _ = layer;
    }
}

impl SceneGraph {
    /// Returns the lifecycle state of a layer. Never panics, even on stale
    /// handles.
    #[must_use]
    pub fn state(&self, id: LayerId) -> LayerState {
        if !self.is_alive(id) {
            LayerState::Destroyed
        } else if self.parent[id.idx as usize] == INVALID {
            LayerState::Detached
        } else {
            LayerState::Attached
        }
    }

    /// Destroys a layer, freeing its slot for reuse.
    ///
    /// If the layer is attached it is removed from its parent first. A group
    /// detaches and destroys all of its descendants. Every layer that leaves
    /// a parent gets exactly one `on_remove`, then every destroyed layer gets
    /// `on_destroy`, children before parents. Destroying an already
    /// destroyed layer does nothing.
    pub fn destroy(&mut self, id: LayerId) {
        if !self.is_alive(id) {
            return;
        }
        let idx = id.idx;
        let p = self.parent[idx as usize];
        if p != INVALID {
            self.unlink(p, idx);
        } else {
            let children: Vec<u32> = self.children[idx as usize].as_slice().to_vec();
            for c in children.into_iter().rev() {
                self.fire_remove(c);
            }
        }
        if !self.children[idx as usize].is_empty() {
            log::debug!(
                "destroying {id:?} with {} children",
                self.children[idx as usize].len()
            );
        }
        self.teardown(idx);
    }

    /// Fires `on_add` through the subtree rooted at `child`, which has just
    /// been linked.
    pub(crate) fn fire_add(&mut self, child: u32) {
        for n in self.preorder(child) {
            let (layer, parent) = (self.id_at(n), self.id_at(self.parent[n as usize]));
            if let Some(hooks) = &mut self.hooks[n as usize] {
                hooks.on_add(layer, parent);
            }
        }
    }

    /// Fires `on_remove` through the subtree rooted at `child`, which is
    /// about to be unlinked.
    pub(crate) fn fire_remove(&mut self, child: u32) {
        for n in self.preorder(child) {
            let (layer, parent) = (self.id_at(n), self.id_at(self.parent[n as usize]));
            if let Some(hooks) = &mut self.hooks[n as usize] {
                hooks.on_remove(layer, parent);
            }
        }
    }

    /// Destroys `idx` and its subtree without firing `on_remove`; callers
    /// have already done so.
    pub(crate) fn teardown(&mut self, idx: u32) {
        let children = core::mem::take(&mut self.children[idx as usize]);
        for &c in children.as_slice() {
            self.parent[c as usize] = INVALID;
            self.teardown(c);
        }
        let id = self.id_at(idx);
        if let Some(hooks) = &mut self.hooks[idx as usize] {
            hooks.on_destroy(id);
        }
        self.release_slot(idx);
    }

    /// Bumps the generation so old handles immediately fail validation and
    /// drops everything the slot owns.
    fn release_slot(&mut self, idx: u32) {
        let i = idx as usize;
        self.generation[i] = self.generation[i].wrapping_add(1);
        self.live[i] = false;
        self.parent[i] = INVALID;
        self.children[i] = ChildList::default();
        self.content[i] = LayerContent::group();
        self.hit_tester[i] = None;
        self.hooks[i] = None;
        self.free_list.push(idx);
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder(&'static str, Log);

    impl LayerHooks for Recorder {
        fn on_add(&mut self, _: LayerId, _: LayerId) {
            self.1.borrow_mut().push(format!("add {}", self.0));
        }
        fn on_remove(&mut self, _: LayerId, _: LayerId) {
            self.1.borrow_mut().push(format!("remove {}", self.0));
        }
        fn on_destroy(&mut self, _: LayerId) {
            self.1.borrow_mut().push(format!("destroy {}", self.0));
        }
    }

    #[test]
    fn states() {
        let mut scene = SceneGraph::new();
        let group = scene.create_group();
        let leaf = scene.create_image(None);
        assert_eq!(scene.state(leaf), LayerState::Detached);
        scene.add(group, leaf);
        assert_eq!(scene.state(leaf), LayerState::Attached);
        scene.remove(group, leaf);
        assert_eq!(scene.state(leaf), LayerState::Detached);
        scene.destroy(leaf);
        assert_eq!(scene.state(leaf), LayerState::Destroyed);
    }

    #[test]
    fn hooks_fire_in_order() {
        let log = Log::default();
        let mut scene = SceneGraph::new();
        let group = scene.create_group();
        let leaf = scene.create_image(None);
        scene.set_hooks(leaf, Recorder("leaf", log.clone()));

        scene.add(group, leaf);
        scene.set_depth(leaf, 3.0);
        scene.remove(group, leaf);
        scene.add(group, leaf);
        scene.destroy(leaf);

        assert_eq!(
            *log.borrow(),
            ["add leaf", "remove leaf", "add leaf", "remove leaf", "destroy leaf"]
        );
    }

    #[test]
    fn destroy_is_idempotent() {
        let log = Log::default();
        let mut scene = SceneGraph::new();
        let group = scene.create_group();
        let leaf = scene.create_image(None);
        scene.set_hooks(leaf, Recorder("leaf", log.clone()));
        scene.add(group, leaf);

        scene.destroy(leaf);
        scene.destroy(leaf);

        assert_eq!(*log.borrow(), ["remove leaf", "destroy leaf"]);
        assert_eq!(scene.child_count(group), 0);
        assert_eq!(scene.live_count(), 1);
    }

    #[test]
    fn destroying_a_group_cascades() {
        let log = Log::default();
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let inner = scene.create_group();
        let a = scene.create_image(None);
        let b = scene.create_image(None);
        scene.add(root, group);
        scene.add(group, a);
        scene.add(group, inner);
        scene.add(inner, b);
        scene.set_hooks(group, Recorder("group", log.clone()));
        scene.set_hooks(a, Recorder("a", log.clone()));
        scene.set_hooks(b, Recorder("b", log.clone()));

        scene.destroy(group);

        for id in [group, inner, a, b] {
            assert_eq!(scene.state(id), LayerState::Destroyed);
        }
        assert_eq!(scene.child_count(root), 0);
        assert_eq!(
            *log.borrow(),
            [
                "remove group",
                "remove a",
                "remove b",
                "destroy a",
                "destroy b",
                "destroy group",
            ]
        );
    }

    #[test]
    fn attach_and_detach_reach_nested_layers() {
        let log = Log::default();
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let inner = scene.create_group();
        let leaf = scene.create_image(None);
        scene.add(group, inner);
        scene.add(inner, leaf);
        scene.set_hooks(group, Recorder("group", log.clone()));
        scene.set_hooks(leaf, Recorder("leaf", log.clone()));

        scene.add(root, group);
        assert_eq!(*log.borrow(), ["add group", "add leaf"]);
        log.borrow_mut().clear();

        scene.remove(root, group);
        assert_eq!(*log.borrow(), ["remove group", "remove leaf"]);
        log.borrow_mut().clear();

        scene.add(root, group);
        scene.remove_all(root);
        assert_eq!(
            *log.borrow(),
            ["add group", "add leaf", "remove group", "remove leaf"]
        );
    }

    #[test]
    fn nested_hooks_see_their_own_parent() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        struct Parents(Rc<RefCell<Vec<(LayerId, LayerId)>>>);
        impl LayerHooks for Parents {
            fn on_add(&mut self, layer: LayerId, parent: LayerId) {
                self.0.borrow_mut().push((layer, parent));
            }
        }

        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let leaf = scene.create_image(None);
        scene.add(group, leaf);
        scene.set_hooks(leaf, Parents(seen.clone()));
        scene.add(root, group);
        assert_eq!(*seen.borrow(), [(leaf, group)]);
    }

    #[test]
    fn destroying_a_detached_group_removes_its_children_once() {
        let log = Log::default();
        let mut scene = SceneGraph::new();
        let group = scene.create_group();
        let inner = scene.create_group();
        let a = scene.create_image(None);
        let b = scene.create_image(None);
        scene.add(group, a);
        scene.add(group, inner);
        scene.add(inner, b);
        scene.set_hooks(a, Recorder("a", log.clone()));
        scene.set_hooks(b, Recorder("b", log.clone()));

        scene.destroy(group);
        assert_eq!(*log.borrow(), ["remove b", "remove a", "destroy a", "destroy b"]);
        assert_eq!(scene.live_count(), 0);
    }
}
