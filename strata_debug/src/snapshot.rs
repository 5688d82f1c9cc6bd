// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of a layer subtree.

use serde_json::{Value, json};

use strata_core::layer::{LayerContent, LayerId, SceneGraph};

/// Captures `root` and its subtree as a JSON object.
///
/// Every layer object carries its id, kind, transform components, depth,
/// alpha, flags and size; groups add a `children` array in paint order.
#[must_use]
pub fn snapshot(scene: &SceneGraph, root: LayerId) -> Value {
    let origin = scene.origin(root);
    let scale = scene.scale(root);
    let translation = scene.translation(root);
    let size = scene.size(root);

    let mut layer = json!({
        "id": root.to_string(),
        "kind": format!("{:?}", scene.kind(root)),
        "depth": scene.depth(root),
        "origin": [origin.x, origin.y],
        "scale": [scale.x, scale.y],
        "rotation": scene.rotation(root),
        "translation": [translation.x, translation.y],
        "alpha": scene.alpha(root),
        "tint": scene.tint(root),
        "visible": scene.visible(root),
        "interactive": scene.interactive(root),
        "hit_transparent": scene.hit_transparent(root),
        "size": [size.width, size.height],
    });

    match scene.content(root) {
        LayerContent::Group { clip } => {
            layer["clipped"] = json!(clip.is_some());
            let children: Vec<Value> = scene
                .children(root)
                .map(|child| snapshot(scene, child))
                .collect();
            layer["children"] = Value::Array(children);
        }
        LayerContent::Image { image, .. } => {
            layer["image"] = image.as_ref().map_or(Value::Null, |i| json!(i.id.0));
        }
        LayerContent::Surface { surface, .. } => {
            layer["surface"] = json!(surface.0);
        }
        LayerContent::Immediate { clip, .. } => {
            layer["clipped"] = json!(clip.is_some());
        }
    }
    layer
}
