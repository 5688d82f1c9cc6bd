// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer tree data model.
//!
//! A *layer* is a node in a retained-mode scene. Each layer has:
//!
//! - An identity ([`LayerId`]) — a generational handle that becomes stale when
//!   the layer is destroyed, preventing use-after-free bugs at the API level.
//! - Topology — a parent link and, for groups, a list of children kept sorted
//!   by [`depth`](SceneGraph::set_depth).
//! - **Local properties**: [`origin`](SceneGraph::set_origin),
//!   [`scale`](SceneGraph::set_scale), [`rotation`](SceneGraph::set_rotation),
//!   [`translation`](SceneGraph::set_translation),
//!   [`alpha`](SceneGraph::set_alpha) and [`visibility`](SceneGraph::set_visible).
//! - **Content** ([`LayerContent`]) — what the layer draws: children (groups),
//!   an image, a per-frame [`Renderer`](crate::backend::Renderer), or an
//!   offscreen surface.
//!
//! Layers are stored in struct-of-arrays layout with index-based handles.
//! There is no cached world state: [`paint`](SceneGraph::paint) and
//! [`hit_test`](SceneGraph::hit_test) compose transforms top-down on every
//! call, so mutations between frames are visible on the next traversal.
//!
//! # Lifecycle
//!
//! Layers are created detached. [`add`](SceneGraph::add) links a layer into a
//! group and fires [`LayerHooks::on_add`] through its subtree;
//! [`remove`](SceneGraph::remove) fires [`LayerHooks::on_remove`] through its
//! subtree and unlinks it.
//! [`destroy`](SceneGraph::destroy) detaches a layer, destroys its children
//! and frees its slot; it is idempotent.

mod children;
mod content;
mod coords;
mod group;
mod hit;
mod id;
mod lifecycle;
mod paint;
mod store;
mod traverse;

pub use content::{Image, LayerContent, LayerKind};
pub use hit::HitTester;
pub use id::{INVALID, ImageId, LayerId, SurfaceId};
pub use lifecycle::{LayerHooks, LayerState};
pub use store::{LayerFlags, SceneGraph};
pub use traverse::Children;
