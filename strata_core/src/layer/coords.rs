// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate conversion between layers and screen space.
//!
//! "Screen" space is the space the topmost ancestor is painted into, i.e.
//! the space its own transform maps into. Every conversion walks parent
//! links, so its cost is proportional to the depth of the layer in the
//! tree.

use alloc::vec::Vec;

use kurbo::Point;

use super::id::{INVALID, LayerId};
use super::store::SceneGraph;
use crate::error::SceneError;
use crate::transform::Transform2d;

impl SceneGraph {
    /// Maps `point` from `layer`'s space into the space of `ancestor`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotAnAncestor`] if `ancestor` is not `layer` or
    /// one of its ancestors, and [`SceneError::StaleLayer`] for stale
    /// handles.
    pub fn layer_to_parent(
        &self,
        layer: LayerId,
        ancestor: LayerId,
        point: Point,
    ) -> Result<Point, SceneError> {
        self.check(layer)?;
        self.check(ancestor)?;
        let mut p = point;
        let mut cur = layer.idx;
        while cur != ancestor.idx {
            if cur == INVALID {
                return Err(SceneError::NotAnAncestor { layer, ancestor });
            }
            p = self.local_to_parent(cur, p);
            cur = self.parent[cur as usize];
        }
        Ok(p)
    }

    /// Maps `point` from `layer`'s space into screen space.
    #[must_use]
    pub fn layer_to_screen(&self, layer: LayerId, point: Point) -> Point {
        self.validate(layer);
        let mut p = point;
        let mut cur = layer.idx;
        while cur != INVALID {
            p = self.local_to_parent(cur, p);
            cur = self.parent[cur as usize];
        }
        p
    }

    /// Maps `point` from the space of `ancestor` into `layer`'s space.
    ///
    /// # Errors
    ///
    /// As for [`layer_to_parent`](Self::layer_to_parent).
    pub fn parent_to_layer(
        &self,
        ancestor: LayerId,
        layer: LayerId,
        point: Point,
    ) -> Result<Point, SceneError> {
        self.check(layer)?;
        self.check(ancestor)?;
        let chain = self.chain_below(layer.idx, ancestor.idx);
        if chain.last().map_or(layer.idx, |&top| self.parent[top as usize]) != ancestor.idx {
            return Err(SceneError::NotAnAncestor { layer, ancestor });
        }
        Ok(chain
            .iter()
            .rev()
            .fold(point, |p, &idx| self.parent_to_local(idx, p)))
    }

    /// Maps `point` from screen space into `layer`'s space.
    #[must_use]
    pub fn screen_to_layer(&self, layer: LayerId, point: Point) -> Point {
        self.validate(layer);
        self.chain_below(layer.idx, INVALID)
            .iter()
            .rev()
            .fold(point, |p, &idx| self.parent_to_local(idx, p))
    }

    /// Returns the transform mapping `layer`'s space into screen space, as
    /// used when painting from its topmost ancestor.
    #[must_use]
    pub fn world_transform(&self, layer: LayerId) -> Transform2d {
        self.validate(layer);
        self.chain_below(layer.idx, INVALID)
            .iter()
            .rev()
            .fold(Transform2d::IDENTITY, |xf, &idx| {
                let i = idx as usize;
                xf.concatenate(&self.local_transform[i], self.origin[i])
            })
    }

    /// Returns the frontmost layer under a screen-space point in the
    /// subtree rooted at `root`.
    ///
    /// This is the entry point for input dispatch. If `root` has ancestors,
    /// the point is first mapped through them.
    #[must_use]
    pub fn hit_layer(&self, root: LayerId, point: Point) -> Option<LayerId> {
        self.validate(root);
        let p = match self.parent(root) {
            Some(parent) => self.screen_to_layer(parent, point),
            None => point,
        };
        self.hit_test_at(root.idx, p)
    }

    /// Whether a screen-space point falls within `layer`'s bounds, edges
    /// included.
    #[must_use]
    pub fn contains_screen_point(&self, layer: LayerId, point: Point) -> bool {
        let p = self.screen_to_layer(layer, point);
        let size = self.size(layer);
        p.x >= 0.0 && p.y >= 0.0 && p.x <= size.width && p.y <= size.height
    }

    /// Returns the frontmost visible layer whose bounds contain a
    /// screen-space point, searching the subtree of `root` (itself a root
    /// of the tree).
    ///
    /// Unlike [`hit_layer`](Self::hit_layer) this ignores custom hit
    /// testers, hit transparency and clipping; it's meant for debugging.
    #[must_use]
    pub fn layer_under_point(&self, root: LayerId, point: Point) -> Option<LayerId> {
        self.validate(root);
        let local = self.parent_to_local(root.idx, point);
        self.layer_under_local(root.idx, local)
    }

    /// Returns the number of ancestors of `layer`.
    #[must_use]
    pub fn graph_depth(&self, layer: LayerId) -> usize {
        self.validate(layer);
        let mut depth = 0;
        let mut cur = self.parent[layer.idx as usize];
        while cur != INVALID {
            depth += 1;
            cur = self.parent[cur as usize];
        }
        depth
    }

    fn layer_under_local(&self, idx: u32, p: Point) -> Option<LayerId> {
        let i = idx as usize;
        for &child in self.children[i].as_slice().iter().rev() {
            if self.flags[child as usize].hidden {
                continue;
            }
            let cp = self.parent_to_local(child, p);
            if let Some(hit) = self.layer_under_local(child, cp) {
                return Some(hit);
            }
        }
        let size = self.content[i].size();
        (p.x >= 0.0 && p.x < size.width && p.y >= 0.0 && p.y < size.height)
            .then(|| self.id_at(idx))
    }

    /// Collects `idx` and its ancestors, stopping before `stop`.
    fn chain_below(&self, idx: u32, stop: u32) -> Vec<u32> {
        let mut chain = Vec::new();
        let mut cur = idx;
        while cur != stop && cur != INVALID {
            chain.push(cur);
            cur = self.parent[cur as usize];
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_4;

    use kurbo::Size;

    use super::*;
    use crate::layer::{Image, ImageId};

    const TOL: f64 = 0.001;

    fn assert_near(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < TOL && (actual.y - y).abs() < TOL,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    /// root > middle > child, returning (scene, root, middle, child).
    fn three_levels() -> (SceneGraph, LayerId, LayerId, LayerId) {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let middle = scene.create_group();
        let child = scene.create_image(None);
        scene.add(root, middle);
        scene.add(middle, child);
        (scene, root, middle, child)
    }

    fn round_trips(scene: &SceneGraph, child: LayerId, point: Point) {
        let on_child = scene.screen_to_layer(child, point);
        assert_near(scene.layer_to_screen(child, on_child), point.x, point.y);
    }

    #[test]
    fn screen_to_layer_with_scale() {
        let (mut scene, _, middle, child) = three_levels();
        scene.set_scale(middle, 2.0, 0.1);
        let p = Point::new(100.0, 100.0);
        assert_near(scene.screen_to_layer(child, p), 50.0, 1000.0);
        round_trips(&scene, child, p);
    }

    #[test]
    fn screen_to_layer_with_translation() {
        let (mut scene, _, middle, child) = three_levels();
        scene.set_translation(middle, 10.0, -10.0);
        let p = Point::new(100.0, 100.0);
        assert_near(scene.screen_to_layer(child, p), 90.0, 110.0);
        round_trips(&scene, child, p);
    }

    #[test]
    fn screen_to_layer_with_rotation() {
        let (mut scene, _, middle, child) = three_levels();
        scene.set_rotation(middle, FRAC_PI_4);
        let p = Point::new(100.0, 100.0);
        assert_near(scene.screen_to_layer(child, p), 141.421_356, 0.0);
        round_trips(&scene, child, p);
    }

    #[test]
    fn screen_to_layer_with_scale_rotation_translation() {
        let (mut scene, _, middle, child) = three_levels();
        scene.set_rotation(middle, FRAC_PI_4);
        scene.set_translation(middle, 10.0, -10.0);
        scene.set_scale(middle, 10.0, 0.5);
        round_trips(&scene, child, Point::new(100.0, 100.0));
    }

    #[test]
    fn world_transform_matches_point_mapping() {
        let (mut scene, root, middle, child) = three_levels();
        scene.set_translation(root, 5.0, 5.0);
        scene.set_rotation(middle, 0.3);
        scene.set_origin(child, Point::new(2.0, 3.0));
        let p = Point::new(7.0, -4.0);
        let via_world = scene.world_transform(child).transform_point(p);
        let via_walk = scene.layer_to_screen(child, p);
        assert_near(via_world, via_walk.x, via_walk.y);
    }

    #[test]
    fn ancestor_conversions() {
        let (mut scene, root, middle, child) = three_levels();
        scene.set_translation(middle, 10.0, 20.0);
        scene.set_translation(root, 100.0, 100.0);

        let up = scene.layer_to_parent(child, root, Point::new(1.0, 1.0));
        assert_eq!(up, Ok(Point::new(11.0, 21.0)));
        let down = scene.parent_to_layer(root, child, Point::new(11.0, 21.0));
        assert_eq!(down, Ok(Point::new(1.0, 1.0)));
        assert_eq!(
            scene.layer_to_parent(child, child, Point::new(3.0, 4.0)),
            Ok(Point::new(3.0, 4.0))
        );

        let stranger = scene.create_group();
        assert_eq!(
            scene.layer_to_parent(child, stranger, Point::ZERO),
            Err(SceneError::NotAnAncestor {
                layer: child,
                ancestor: stranger
            })
        );
        assert_eq!(
            scene.parent_to_layer(stranger, child, Point::ZERO),
            Err(SceneError::NotAnAncestor {
                layer: child,
                ancestor: stranger
            })
        );
    }

    #[test]
    fn hit_layer_maps_through_ancestors() {
        let (mut scene, root, middle, child) = three_levels();
        scene.set_image(child, Some(Image::new(ImageId(0), Size::new(10.0, 10.0))));
        scene.set_translation(root, 50.0, 0.0);
        scene.set_translation(middle, 0.0, 50.0);

        assert_eq!(scene.hit_layer(root, Point::new(55.0, 55.0)), Some(child));
        assert_eq!(scene.hit_layer(middle, Point::new(55.0, 55.0)), Some(child));
        assert_eq!(scene.hit_layer(root, Point::new(5.0, 5.0)), None);
        assert!(scene.contains_screen_point(child, Point::new(60.0, 60.0)));
        assert!(!scene.contains_screen_point(child, Point::new(61.0, 60.0)));
    }

    #[test]
    fn layer_under_point_ignores_hit_rules() {
        let (mut scene, root, middle, child) = three_levels();
        scene.set_image(child, Some(Image::new(ImageId(0), Size::new(10.0, 10.0))));
        scene.set_hit_transparent(child, true);
        assert_eq!(scene.hit_layer(root, Point::new(5.0, 5.0)), None);
        assert_eq!(scene.layer_under_point(root, Point::new(5.0, 5.0)), Some(child));
        scene.set_visible(middle, false);
        assert_eq!(scene.layer_under_point(root, Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn graph_depth_and_index() {
        let (mut scene, root, middle, child) = three_levels();
        assert_eq!(scene.graph_depth(root), 0);
        assert_eq!(scene.graph_depth(child), 2);
        let sibling = scene.create_image(None);
        scene.set_depth(sibling, -1.0);
        scene.add(root, sibling);
        assert_eq!(scene.index_in_parent(middle), Some(1));
        assert_eq!(scene.index_in_parent(sibling), Some(0));
        assert_eq!(scene.index_in_parent(root), None);
    }
}
