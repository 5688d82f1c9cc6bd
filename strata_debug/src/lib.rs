// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree printing, JSON snapshots, and trace output for strata diagnostics.
//!
//! - [`tree::print_tree`] / [`tree::log_tree`] — an indented one-line-per-layer
//!   dump of a subtree.
//! - [`snapshot::snapshot`] — the same subtree as a `serde_json` value, for
//!   bug reports and golden tests.
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](strata_core::trace::TraceSink) writing one line per event.
//! - [`recorder::RecordingCanvas`] — a
//!   [`Canvas`](strata_core::backend::Canvas) that records every call.

pub mod pretty;
pub mod recorder;
pub mod snapshot;
pub mod tree;
