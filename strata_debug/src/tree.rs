// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented layer-tree dumps.
//!
//! Each layer prints as one line, indented two spaces per level below the
//! root, children in paint order:
//!
//! ```text
//! Group #0 depth=0 at=(0, 0) alpha=1
//!   Image #1 depth=2 at=(10, 5) alpha=0.5 size=32x16 hidden
//! ```

use std::fmt::Write as _;

use strata_core::layer::{LayerId, SceneGraph};

/// Describes a single layer on one line, without indentation.
#[must_use]
pub fn describe(scene: &SceneGraph, id: LayerId) -> String {
    let at = scene.translation(id);
    let mut line = format!(
        "{:?} {id} depth={} at=({}, {}) alpha={}",
        scene.kind(id),
        scene.depth(id),
        at.x,
        at.y,
        scene.alpha(id),
    );
    let size = scene.size(id);
    if size.width != 0.0 || size.height != 0.0 {
        let _ = write!(line, " size={}x{}", size.width, size.height);
    }
    let tint = scene.tint(id) & 0x00FF_FFFF;
    if tint != 0x00FF_FFFF {
        let _ = write!(line, " tint=#{tint:06x}");
    }
    if !scene.visible(id) {
        line.push_str(" hidden");
    }
    if !scene.interactive(id) {
        line.push_str(" non-interactive");
    }
    if scene.hit_transparent(id) {
        line.push_str(" hit-transparent");
    }
    if scene.has_hit_tester(id) {
        line.push_str(" hit-tester");
    }
    line
}

/// Renders `root` and its subtree as an indented string.
#[must_use]
pub fn print_tree(scene: &SceneGraph, root: LayerId) -> String {
    let mut out = String::new();
    scene.walk(root, |id, level| {
        let _ = writeln!(out, "{:indent$}{}", "", describe(scene, id), indent = level * 2);
    });
    out
}

/// Logs `root` and its subtree at debug level, one record per layer.
pub fn log_tree(scene: &SceneGraph, root: LayerId) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    scene.walk(root, |id, level| {
        log::debug!("{:indent$}{}", "", describe(scene, id), indent = level * 2);
    });
}
