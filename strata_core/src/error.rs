// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural misuse errors.
//!
//! Everything here is a programmer error. The fallible `try_*` operations on
//! [`SceneGraph`](crate::layer::SceneGraph) report them as values; the
//! infallible forms panic in debug builds and log and ignore the call in
//! release builds, leaving the tree untouched.

use crate::layer::LayerId;

/// A rejected structural operation on the layer tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The handle refers to a destroyed layer.
    #[error("stale LayerId: {0:?}")]
    StaleLayer(LayerId),
    /// Children can only be added to group layers.
    #[error("layer {0} is not a group")]
    NotAGroup(LayerId),
    /// The child is already attached to a different group.
    #[error("layer {child} is already attached to {parent}; remove it first")]
    AlreadyAttached {
        /// The layer being added.
        child: LayerId,
        /// Its current parent.
        parent: LayerId,
    },
    /// The layer is not a child of the group it was removed from.
    #[error("layer {child} is not a child of {group}")]
    NotAChild {
        /// The layer being removed.
        child: LayerId,
        /// The group it was removed from.
        group: LayerId,
    },
    /// Adding the layer would make a group its own ancestor.
    #[error("adding {child} to {group} would create a cycle")]
    WouldCycle {
        /// The layer being added.
        child: LayerId,
        /// The group that is a descendant of `child`.
        group: LayerId,
    },
    /// A coordinate conversion named an ancestor that isn't one.
    #[error("layer {ancestor} is not an ancestor of {layer}")]
    NotAnAncestor {
        /// The layer whose coordinates were being converted.
        layer: LayerId,
        /// The supposed ancestor.
        ancestor: LayerId,
    },
}

/// Handles a rejected structural operation from an infallible entry point.
///
/// Debug builds panic with the error message. Release builds log it and
/// carry on, leaving the tree as it was.
#[track_caller]
pub(crate) fn misuse(err: SceneError) {
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
    log::warn!("ignored invalid scene operation: {err}");
}
