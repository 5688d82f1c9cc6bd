// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained-mode 2D layer tree.
//!
//! `strata_core` provides the scene graph a game or UI builds each frame is
//! drawn from: a tree of layers, each with a transform, an alpha, a
//! visibility flag and a depth, where group layers keep their children sorted
//! by depth. It is `no_std` compatible (with `alloc`) and stores layers in
//! struct-of-arrays form addressed by generational handles.
//!
//! # Architecture
//!
//! ```text
//!   update(): add / remove / set_depth / set_translation ...
//!       │
//!       ▼
//!   SceneGraph (mutated in place)
//!       │
//!       ├──► paint(root, canvas, IDENTITY, 1.0) ──► Canvas (backend)
//!       │        back to front, invisible subtrees skipped
//!       │
//!       └──► hit_layer(root, point) ──► Option<LayerId>
//!                front to back, through inverse transforms
//! ```
//!
//! **[`layer`]** — The [`SceneGraph`](layer::SceneGraph): layer creation,
//! properties, depth-ordered groups, lifecycle hooks, hit-testing, painting
//! and coordinate conversion.
//!
//! **[`transform`]** — 2-D affine transform with pivot-aware composition.
//!
//! **[`backend`]** — The [`Canvas`](backend::Canvas) and
//! [`Renderer`](backend::Renderer) traits that drawing backends implement.
//!
//! **[`tint`]** — Packed `ARGB` tints and their channel-wise composition.
//!
//! **[`text`]** — Multi-line [`TextBlock`](text::TextBlock) layout over
//! backend-measured lines.
//!
//! **[`error`]** — [`SceneError`](error::SceneError) for rejected structural
//! operations.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! traversal instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-layer
//!   visit events during painting.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod error;
pub mod layer;
pub mod text;
pub mod tint;
pub mod trace;
pub mod transform;
