// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-plan flattening and damage bounds for strata.
//!
//! This crate is the GL-style specialization of [`strata_core`]'s paint
//! traversal. Instead of issuing draw calls as the tree is walked, a
//! [`PlanCanvas`] records them into a flat [`RenderPlan`] that a batching
//! backend can submit in one pass. It defines:
//!
//! - [`PlanCanvas`] — a [`Canvas`](strata_core::backend::Canvas) that records
//!   draw items and maintains an intersecting scissor stack
//! - [`RenderItem`] — a single draw command with its composed transform,
//!   alpha and scissor
//! - [`RenderPlan`] — an ordered list of draw commands for one frame
//! - [`DamageRegion`] — device-space regions that need redrawing

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod damage;
mod plan;

pub use damage::DamageRegion;
pub use plan::{DrawKind, PlanCanvas, RenderItem, RenderPlan};
