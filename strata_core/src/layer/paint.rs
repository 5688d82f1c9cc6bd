// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Back-to-front paint traversal.

use kurbo::{Point, Rect};

use super::content::LayerContent;
use super::id::LayerId;
use super::store::SceneGraph;
use crate::backend::Canvas;
use crate::tint;
use crate::trace::{PaintBeginEvent, PaintSummary, Tracer};
use crate::transform::Transform2d;

impl SceneGraph {
    /// Paints `layer` and its subtree into `canvas`, back to front.
    ///
    /// `parent_transform` and `parent_alpha` are what the layer inherits;
    /// the frame loop passes [`Transform2d::IDENTITY`] and `1.0` for the
    /// root. Invisible layers are skipped along with their whole subtree.
    /// Tints compose from `layer` down; the canvas receives the composed
    /// tint through [`Canvas::set_tint`] before each leaf draws.
    pub fn paint(
        &mut self,
        layer: LayerId,
        canvas: &mut dyn Canvas,
        parent_transform: &Transform2d,
        parent_alpha: f32,
    ) {
        self.paint_traced(
            layer,
            canvas,
            parent_transform,
            parent_alpha,
            &mut Tracer::none(),
        );
    }

    /// Like [`paint`](Self::paint), reporting the traversal to `tracer`.
    pub fn paint_traced(
        &mut self,
        layer: LayerId,
        canvas: &mut dyn Canvas,
        parent_transform: &Transform2d,
        parent_alpha: f32,
        tracer: &mut Tracer<'_>,
    ) {
        self.validate(layer);
        tracer.paint_begin(&PaintBeginEvent { root: layer });
        let mut summary = PaintSummary::new(layer);
        self.paint_at(
            layer.idx,
            canvas,
            parent_transform,
            parent_alpha,
            tint::NOOP_TINT,
            &mut summary,
            tracer,
        );
        tracer.paint_end(&summary);
    }

    fn paint_at(
        &mut self,
        idx: u32,
        canvas: &mut dyn Canvas,
        parent_transform: &Transform2d,
        parent_alpha: f32,
        parent_tint: u32,
        summary: &mut PaintSummary,
        tracer: &mut Tracer<'_>,
    ) {
        let i = idx as usize;
        summary.visited += 1;
        if self.flags[i].hidden {
            summary.skipped_hidden += 1;
            return;
        }

        let transform = parent_transform.concatenate(&self.local_transform[i], self.origin[i]);
        let alpha = parent_alpha * self.alpha[i];
        let color = tint::combine(parent_tint, self.tint[i] | 0xFF00_0000);

        #[cfg(feature = "trace-rich")]
        tracer.layer_visit(&crate::trace::LayerVisit {
            layer: self.id_at(idx),
            transform,
            alpha,
        });

        let clipped = self.content[i].clip().map(|size| {
            summary.clipped += 1;
            let bounds = Rect::from_origin_size(Point::ZERO, size);
            canvas.start_clipped(transform.transform_rect_bbox(bounds))
        });

        if clipped == Some(false) {
            summary.empty_clips += 1;
        } else if self.content[i].is_group() {
            // Index loop: children may not be borrowed across the recursion.
            let mut k = 0;
            while let Some(&child) = self.children[i].as_slice().get(k) {
                self.paint_at(child, canvas, &transform, alpha, color, summary, tracer);
                k += 1;
            }
        } else {
            canvas.set_tint(tint::with_alpha(color, alpha));
            self.draw_leaf(i, canvas, &transform, alpha, summary);
        }

        if clipped.is_some() {
            canvas.end_clipped();
        }
    }

    fn draw_leaf(
        &mut self,
        i: usize,
        canvas: &mut dyn Canvas,
        transform: &Transform2d,
        alpha: f32,
        summary: &mut PaintSummary,
    ) {
        let size = self.content[i].size();
        match &mut self.content[i] {
            LayerContent::Image {
                image: Some(image), ..
            } => {
                canvas.draw_image(transform, alpha, image, size);
                summary.drawn += 1;
            }
            // Not loaded yet: nothing to draw this frame.
            LayerContent::Image { image: None, .. } => {}
            LayerContent::Immediate { renderer, .. } => {
                renderer.render(canvas, transform, alpha);
                summary.drawn += 1;
            }
            LayerContent::Surface { surface, .. } => {
                canvas.draw_surface(transform, alpha, *surface, size);
                summary.drawn += 1;
            }
            LayerContent::Group { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::*;
    use crate::layer::{Image, ImageId, SurfaceId};

    #[derive(Debug, PartialEq)]
    enum Call {
        Image(u32, Transform2d, f32),
        Surface(u32),
        Fill(u32),
        Clip(Rect),
        EndClip,
    }

    #[derive(Default)]
    struct Counting {
        calls: Vec<Call>,
        tints: Vec<u32>,
        reject_clips: bool,
    }

    impl Canvas for Counting {
        fn draw_image(&mut self, transform: &Transform2d, alpha: f32, image: &Image, _: Size) {
            self.calls.push(Call::Image(image.id.0, *transform, alpha));
        }
        fn draw_surface(&mut self, _: &Transform2d, _: f32, surface: SurfaceId, _: Size) {
            self.calls.push(Call::Surface(surface.0));
        }
        fn fill_rect(&mut self, _: &Transform2d, _: f32, _: Rect, argb: u32) {
            self.calls.push(Call::Fill(argb));
        }
        fn start_clipped(&mut self, rect: Rect) -> bool {
            self.calls.push(Call::Clip(rect));
            !self.reject_clips
        }
        fn end_clipped(&mut self) {
            self.calls.push(Call::EndClip);
        }
        fn set_tint(&mut self, tint: u32) {
            self.tints.push(tint);
        }
    }

    fn image(scene: &mut SceneGraph, id: u32) -> LayerId {
        scene.create_image(Some(Image::new(ImageId(id), Size::new(10.0, 10.0))))
    }

    fn image_ids(canvas: &Counting) -> Vec<u32> {
        canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Image(id, ..) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn paints_back_to_front() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let a = image(&mut scene, 1);
        let b = image(&mut scene, 2);
        let c = image(&mut scene, 3);
        scene.set_depth(a, 2.0);
        scene.add(root, a);
        scene.add(root, b);
        scene.add(root, c);

        let mut canvas = Counting::default();
        scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(image_ids(&canvas), [2, 3, 1]);
    }

    #[test]
    fn invisible_subtree_is_skipped() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let inner = scene.create_group();
        let shown = image(&mut scene, 1);
        scene.add(root, group);
        scene.add(root, shown);
        scene.add(group, inner);
        for n in 10..15 {
            let leaf = image(&mut scene, n);
            scene.add(inner, leaf);
        }
        let immediate = scene.create_immediate(
            |canvas: &mut dyn Canvas, xf: &Transform2d, alpha: f32| {
                canvas.fill_rect(xf, alpha, Rect::new(0.0, 0.0, 1.0, 1.0), 0xff00_00ff);
            },
        );
        scene.add(inner, immediate);

        let mut canvas = Counting::default();
        scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(canvas.calls.len(), 7);

        scene.set_visible(group, false);
        let mut canvas = Counting::default();
        scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(image_ids(&canvas), [1]);
        assert_eq!(canvas.calls.len(), 1);
    }

    #[test]
    fn composes_transform_and_alpha() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let leaf = image(&mut scene, 7);
        scene.add(root, leaf);
        scene.set_translation(root, 10.0, 20.0);
        scene.set_alpha(root, 0.5);
        scene.set_translation(leaf, 1.0, 2.0);
        scene.set_origin(leaf, Point::new(5.0, 5.0));
        scene.set_alpha(leaf, 0.5);

        let mut canvas = Counting::default();
        scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(
            canvas.calls,
            [Call::Image(
                7,
                Transform2d::from_translation(6.0, 17.0),
                0.25
            )]
        );
    }

    #[test]
    fn tints_compose_down_the_tree() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let red = image(&mut scene, 1);
        let plain = image(&mut scene, 2);
        scene.add(root, group);
        scene.add(group, red);
        scene.add(root, plain);
        scene.set_tint(group, 0xFF80_FFFF);
        scene.set_tint(red, 0xFFFF_0000);
        scene.set_alpha(plain, 0.0);

        let mut canvas = Counting::default();
        scene.paint(root, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(canvas.tints, [0xFF80_0000, 0x00FF_FFFF]);
    }

    #[test]
    fn unloaded_images_draw_nothing() {
        let mut scene = SceneGraph::new();
        let leaf = scene.create_image(None);
        let mut canvas = Counting::default();
        scene.paint(leaf, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert!(canvas.calls.is_empty());

        scene.set_image(leaf, Some(Image::new(ImageId(4), Size::new(2.0, 2.0))));
        scene.paint(leaf, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(image_ids(&canvas), [4]);
    }

    #[test]
    fn clipped_group_brackets_children() {
        let mut scene = SceneGraph::new();
        let clip = scene.create_clipped_group(Size::new(30.0, 40.0));
        let leaf = scene.create_surface(SurfaceId(9), Size::new(5.0, 5.0));
        scene.add(clip, leaf);
        scene.set_translation(clip, 10.0, 10.0);
        scene.set_scale(clip, 2.0, 1.0);

        let mut canvas = Counting::default();
        scene.paint(clip, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(
            canvas.calls,
            [
                Call::Clip(Rect::new(10.0, 10.0, 70.0, 50.0)),
                Call::Surface(9),
                Call::EndClip,
            ]
        );

        let mut canvas = Counting {
            reject_clips: true,
            ..Counting::default()
        };
        scene.paint(clip, &mut canvas, &Transform2d::IDENTITY, 1.0);
        assert_eq!(
            canvas.calls,
            [Call::Clip(Rect::new(10.0, 10.0, 70.0, 50.0)), Call::EndClip]
        );
    }
}
