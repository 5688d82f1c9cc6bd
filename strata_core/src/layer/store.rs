// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with allocation and property management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Point, Size, Vec2};

use super::children::{ChildList, SortKey};
use super::content::{Image, LayerContent, LayerKind};
use super::hit::HitTester;
use super::id::{INVALID, LayerId, SurfaceId};
use super::lifecycle::LayerHooks;
use super::traverse::Children;
use crate::backend::Renderer;
use crate::tint;
use crate::transform::Transform2d;

/// Per-layer boolean flags.
///
/// Setting [`hidden`](Self::hidden) suppresses painting and hit-testing of
/// the layer and its entire subtree. Properties can still be mutated while
/// hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerFlags {
    /// Whether the layer (and its subtree) is hidden.
    pub hidden: bool,
    /// Whether hit-tests pass through this layer. Children of a
    /// hit-transparent group are still tested.
    pub hit_transparent: bool,
}

/// Struct-of-arrays storage for a tree of layers.
///
/// Layers are addressed by [`LayerId`] handles. Internally, each layer
/// occupies a slot in parallel arrays. Destroyed layers are recycled via a
/// free list, and generation counters prevent stale handle access.
pub struct SceneGraph {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) children: Vec<ChildList>,

    // -- Ordering --
    pub(crate) depth: Vec<f32>,
    pub(crate) seq: Vec<u64>,
    pub(crate) next_seq: u64,

    // -- Local properties --
    pub(crate) origin: Vec<Point>,
    pub(crate) scale: Vec<Vec2>,
    pub(crate) rotation: Vec<f64>,
    pub(crate) translation: Vec<Vec2>,
    /// Cached composition of scale, rotation and translation.
    pub(crate) local_transform: Vec<Transform2d>,
    pub(crate) alpha: Vec<f32>,
    /// Tint color; only the low 24 bits are used, alpha lives in `alpha`.
    pub(crate) tint: Vec<u32>,
    pub(crate) flags: Vec<LayerFlags>,
    /// Cleared lazily by hit-testing, hence the `Cell`.
    pub(crate) interactive: Vec<Cell<bool>>,
    pub(crate) content: Vec<LayerContent>,

    // -- Behaviour --
    pub(crate) hit_tester: Vec<Option<Box<dyn HitTester>>>,
    pub(crate) hooks: Vec<Option<Box<dyn LayerHooks>>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) live: Vec<bool>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SceneGraph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneGraph")
            .field("len", &self.len)
            .field("live", &self.live_count())
            .finish_non_exhaustive()
    }
}

impl SceneGraph {
    /// Creates an empty scene graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            children: Vec::new(),
            depth: Vec::new(),
            seq: Vec::new(),
            next_seq: 0,
            origin: Vec::new(),
            scale: Vec::new(),
            rotation: Vec::new(),
            translation: Vec::new(),
            local_transform: Vec::new(),
            alpha: Vec::new(),
            tint: Vec::new(),
            flags: Vec::new(),
            interactive: Vec::new(),
            content: Vec::new(),
            hit_tester: Vec::new(),
            hooks: Vec::new(),
            generation: Vec::new(),
            live: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    // -- Allocation API --

    /// Creates a detached layer with the given content and returns its
    /// handle.
    ///
    /// The layer starts at depth 0 with an identity transform, full alpha,
    /// no tint, visible, interactive, and with no parent.
    pub fn create_layer(&mut self, content: LayerContent) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot. Its generation was bumped on destroy.
            let i = idx as usize;
            self.parent[i] = INVALID;
            self.children[i] = ChildList::default();
            self.depth[i] = 0.0;
            self.seq[i] = 0;
            self.origin[i] = Point::ZERO;
            self.scale[i] = Vec2::new(1.0, 1.0);
            self.rotation[i] = 0.0;
            self.translation[i] = Vec2::ZERO;
            self.local_transform[i] = Transform2d::IDENTITY;
            self.alpha[i] = 1.0;
            self.tint[i] = tint::NOOP_TINT;
            self.flags[i] = LayerFlags::default();
            self.interactive[i].set(true);
            self.content[i] = content;
            self.hit_tester[i] = None;
            self.hooks[i] = None;
            self.live[i] = true;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.children.push(ChildList::default());
            self.depth.push(0.0);
            self.seq.push(0);
            self.origin.push(Point::ZERO);
            self.scale.push(Vec2::new(1.0, 1.0));
            self.rotation.push(0.0);
            self.translation.push(Vec2::ZERO);
            self.local_transform.push(Transform2d::IDENTITY);
            self.alpha.push(1.0);
            self.tint.push(tint::NOOP_TINT);
            self.flags.push(LayerFlags::default());
            self.interactive.push(Cell::new(true));
            self.content.push(content);
            self.hit_tester.push(None);
            self.hooks.push(None);
            self.generation.push(0);
            self.live.push(true);
            idx
        };

        self.id_at(idx)
    }

    /// Creates an unclipped group layer.
    pub fn create_group(&mut self) -> LayerId {
        self.create_layer(LayerContent::group())
    }

    /// Creates a group layer whose children are clipped to `size`.
    pub fn create_clipped_group(&mut self, size: Size) -> LayerId {
        self.create_layer(LayerContent::clipped_group(size))
    }

    /// Creates an image layer, optionally with its image already loaded.
    pub fn create_image(&mut self, image: Option<Image>) -> LayerId {
        self.create_layer(LayerContent::image(image))
    }

    /// Creates an immediate layer that draws through `renderer` every frame.
    pub fn create_immediate(&mut self, renderer: impl Renderer + 'static) -> LayerId {
        self.create_layer(LayerContent::immediate(renderer))
    }

    /// Creates a surface layer presenting `surface` at `size`.
    pub fn create_surface(&mut self, surface: SurfaceId, size: Size) -> LayerId {
        self.create_layer(LayerContent::surface(surface, size))
    }

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        id.idx < self.len
            && self.live[id.idx as usize]
            && self.generation[id.idx as usize] == id.generation
    }

    /// Returns the number of live layers.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|&&l| l).count()
    }

    // -- Topology queries --

    /// Returns the parent of a layer, if any.
    #[must_use]
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        self.id_of(self.parent[id.idx as usize])
    }

    /// Returns an iterator over the children of a layer, back to front.
    ///
    /// Leaf layers have no children.
    #[must_use]
    pub fn children(&self, id: LayerId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.children[id.idx as usize].as_slice())
    }

    /// Returns the number of children of a layer.
    #[must_use]
    pub fn child_count(&self, id: LayerId) -> usize {
        self.validate(id);
        self.children[id.idx as usize].len()
    }

    /// Returns the child at `index` in paint order, if any.
    #[must_use]
    pub fn child_at(&self, id: LayerId, index: usize) -> Option<LayerId> {
        self.validate(id);
        self.children[id.idx as usize]
            .as_slice()
            .get(index)
            .map(|&c| self.id_at(c))
    }

    /// Returns every live layer that has no parent.
    #[must_use]
    pub fn roots(&self) -> Vec<LayerId> {
        (0..self.len)
            .filter(|&idx| self.live[idx as usize] && self.parent[idx as usize] == INVALID)
            .map(|idx| self.id_at(idx))
            .collect()
    }

    // -- Property getters --

    /// Returns the content of a layer.
    #[must_use]
    pub fn content(&self, id: LayerId) -> &LayerContent {
        self.validate(id);
        &self.content[id.idx as usize]
    }

    /// Returns the kind of a layer.
    #[must_use]
    pub fn kind(&self, id: LayerId) -> LayerKind {
        self.content(id).kind()
    }

    /// Returns the depth of a layer.
    #[must_use]
    pub fn depth(&self, id: LayerId) -> f32 {
        self.validate(id);
        self.depth[id.idx as usize]
    }

    /// Returns the alpha of a layer.
    #[must_use]
    pub fn alpha(&self, id: LayerId) -> f32 {
        self.validate(id);
        self.alpha[id.idx as usize]
    }

    /// Returns the tint of a layer as `ARGB`. The alpha byte is the layer's
    /// [`alpha`](Self::alpha), quantized.
    #[must_use]
    pub fn tint(&self, id: LayerId) -> u32 {
        self.validate(id);
        let i = id.idx as usize;
        tint::with_alpha(self.tint[i], self.alpha[i])
    }

    /// Returns whether a layer takes part in hit-testing below its parent.
    #[must_use]
    pub fn interactive(&self, id: LayerId) -> bool {
        self.validate(id);
        self.interactive[id.idx as usize].get()
    }

    /// Returns whether a layer is visible.
    #[must_use]
    pub fn visible(&self, id: LayerId) -> bool {
        self.validate(id);
        !self.flags[id.idx as usize].hidden
    }

    /// Returns whether hit-tests pass through a layer.
    #[must_use]
    pub fn hit_transparent(&self, id: LayerId) -> bool {
        self.validate(id);
        self.flags[id.idx as usize].hit_transparent
    }

    /// Returns the flags of a layer.
    #[must_use]
    pub fn flags(&self, id: LayerId) -> LayerFlags {
        self.validate(id);
        self.flags[id.idx as usize]
    }

    /// Returns the pivot point for scale and rotation, in layer space.
    #[must_use]
    pub fn origin(&self, id: LayerId) -> Point {
        self.validate(id);
        self.origin[id.idx as usize]
    }

    /// Returns the scale of a layer.
    #[must_use]
    pub fn scale(&self, id: LayerId) -> Vec2 {
        self.validate(id);
        self.scale[id.idx as usize]
    }

    /// Returns the rotation of a layer in radians.
    #[must_use]
    pub fn rotation(&self, id: LayerId) -> f64 {
        self.validate(id);
        self.rotation[id.idx as usize]
    }

    /// Returns the translation of a layer in parent space.
    #[must_use]
    pub fn translation(&self, id: LayerId) -> Vec2 {
        self.validate(id);
        self.translation[id.idx as usize]
    }

    /// Returns the local transform of a layer (scale, rotation and
    /// translation, without the origin pivot).
    #[must_use]
    pub fn transform(&self, id: LayerId) -> Transform2d {
        self.validate(id);
        self.local_transform[id.idx as usize]
    }

    /// Returns the size of a layer in local units.
    #[must_use]
    pub fn size(&self, id: LayerId) -> Size {
        self.content(id).size()
    }

    /// Returns the width of a layer in local units.
    #[must_use]
    pub fn width(&self, id: LayerId) -> f64 {
        self.size(id).width
    }

    /// Returns the height of a layer in local units.
    #[must_use]
    pub fn height(&self, id: LayerId) -> f64 {
        self.size(id).height
    }

    /// Returns the width of a layer multiplied by its horizontal scale.
    #[must_use]
    pub fn scaled_width(&self, id: LayerId) -> f64 {
        self.width(id) * self.scale(id).x
    }

    /// Returns the height of a layer multiplied by its vertical scale.
    #[must_use]
    pub fn scaled_height(&self, id: LayerId) -> f64 {
        self.height(id) * self.scale(id).y
    }

    // -- Property setters --

    /// Sets the alpha of a layer, clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, id: LayerId, alpha: f32) {
        self.validate(id);
        self.alpha[id.idx as usize] = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
    }

    /// Sets the tint of a layer as `ARGB`.
    ///
    /// The alpha byte replaces the layer's alpha; the color bytes are
    /// multiplied into everything the layer and its subtree draw.
    pub fn set_tint(&mut self, id: LayerId, argb: u32) {
        self.validate(id);
        let i = id.idx as usize;
        self.tint[i] = argb & 0x00FF_FFFF;
        self.alpha[i] = tint::alpha_of(argb);
    }

    /// Marks a layer as taking part in hit-testing, or not.
    ///
    /// Making a layer interactive also makes its ancestors interactive. A
    /// non-interactive layer and its subtree are skipped when its parent
    /// tests its children. Layers start out interactive.
    pub fn set_interactive(&mut self, id: LayerId, interactive: bool) {
        self.validate(id);
        if interactive {
            self.activate(id.idx);
        } else {
            self.interactive[id.idx as usize].set(false);
        }
    }

    /// Shows or hides a layer and its subtree.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        self.validate(id);
        self.flags[id.idx as usize].hidden = !visible;
    }

    /// Makes hit-tests pass through a layer (but not its children).
    pub fn set_hit_transparent(&mut self, id: LayerId, transparent: bool) {
        self.validate(id);
        self.flags[id.idx as usize].hit_transparent = transparent;
    }

    /// Sets the pivot point for scale and rotation, in layer space.
    pub fn set_origin(&mut self, id: LayerId, origin: Point) {
        self.validate(id);
        self.origin[id.idx as usize] = origin;
    }

    /// Sets the scale of a layer.
    ///
    /// A zero component makes the layer's transform non-invertible: it still
    /// paints (collapsed) but receives no hits until the scale is non-zero
    /// again.
    pub fn set_scale(&mut self, id: LayerId, sx: f64, sy: f64) {
        self.validate(id);
        if sx == 0.0 || sy == 0.0 {
            log::trace!("zero scale ({sx}, {sy}) on {id:?}; layer will not receive hits");
        }
        self.scale[id.idx as usize] = Vec2::new(sx, sy);
        self.update_local_transform(id.idx);
    }

    /// Sets the same scale on both axes.
    pub fn set_uniform_scale(&mut self, id: LayerId, scale: f64) {
        self.set_scale(id, scale, scale);
    }

    /// Sets the rotation of a layer in radians.
    pub fn set_rotation(&mut self, id: LayerId, radians: f64) {
        self.validate(id);
        self.rotation[id.idx as usize] = radians;
        self.update_local_transform(id.idx);
    }

    /// Sets the translation of a layer in parent space.
    pub fn set_translation(&mut self, id: LayerId, x: f64, y: f64) {
        self.validate(id);
        let t = Vec2::new(x, y);
        self.translation[id.idx as usize] = t;
        let xf = &mut self.local_transform[id.idx as usize];
        *xf = xf.with_translation(t);
    }

    /// Supplies (or clears) the image of an image layer.
    ///
    /// Ignored with a warning on other layer kinds.
    pub fn set_image(&mut self, id: LayerId, image: Option<Image>) {
        self.validate(id);
        match &mut self.content[id.idx as usize] {
            LayerContent::Image { image: slot, .. } => *slot = image,
            other => log::warn!("set_image on {:?} layer {id:?}", other.kind()),
        }
    }

    /// Overrides the width of an image layer.
    pub fn set_width(&mut self, id: LayerId, width: f64) {
        self.validate(id);
        match &mut self.content[id.idx as usize] {
            LayerContent::Image { width: w, .. } => *w = Some(width),
            other => log::warn!("set_width on {:?} layer {id:?}", other.kind()),
        }
    }

    /// Overrides the height of an image layer.
    pub fn set_height(&mut self, id: LayerId, height: f64) {
        self.validate(id);
        match &mut self.content[id.idx as usize] {
            LayerContent::Image { height: h, .. } => *h = Some(height),
            other => log::warn!("set_height on {:?} layer {id:?}", other.kind()),
        }
    }

    /// Sets the size of a layer.
    ///
    /// For image layers this overrides both dimensions; for clipped groups
    /// and clipped immediate layers it resizes the clip; for surface layers
    /// it sets the presented size. Unclipped groups and immediate layers
    /// have no size and ignore the call with a warning.
    pub fn set_size(&mut self, id: LayerId, size: Size) {
        self.validate(id);
        match &mut self.content[id.idx as usize] {
            LayerContent::Image { width, height, .. } => {
                *width = Some(size.width);
                *height = Some(size.height);
            }
            LayerContent::Group { clip: Some(clip) }
            | LayerContent::Immediate {
                clip: Some(clip), ..
            } => *clip = size,
            LayerContent::Surface { size: s, .. } => *s = size,
            other => log::warn!("set_size on unsized {:?} layer {id:?}", other.kind()),
        }
    }

    /// Reverts an image layer to the natural size of its image.
    pub fn clear_size(&mut self, id: LayerId) {
        self.validate(id);
        if let LayerContent::Image { width, height, .. } = &mut self.content[id.idx as usize] {
            *width = None;
            *height = None;
        }
    }

    /// Replaces the renderer of an immediate layer.
    pub fn set_renderer(&mut self, id: LayerId, renderer: impl Renderer + 'static) {
        self.validate(id);
        match &mut self.content[id.idx as usize] {
            LayerContent::Immediate { renderer: r, .. } => *r = Box::new(renderer),
            other => log::warn!("set_renderer on {:?} layer {id:?}", other.kind()),
        }
    }

    /// Installs a custom hit tester, replacing the default bounds test.
    ///
    /// The layer and its ancestors become interactive.
    pub fn set_hit_tester(&mut self, id: LayerId, tester: impl HitTester + 'static) {
        self.validate(id);
        self.hit_tester[id.idx as usize] = Some(Box::new(tester));
        self.activate(id.idx);
    }

    /// Removes a custom hit tester, restoring the default bounds test.
    pub fn clear_hit_tester(&mut self, id: LayerId) {
        self.validate(id);
        self.hit_tester[id.idx as usize] = None;
    }

    /// Whether a custom hit tester is installed.
    #[must_use]
    pub fn has_hit_tester(&self, id: LayerId) -> bool {
        self.validate(id);
        self.hit_tester[id.idx as usize].is_some()
    }

    /// Installs lifecycle hooks on a layer, replacing any previous ones.
    pub fn set_hooks(&mut self, id: LayerId, hooks: impl LayerHooks + 'static) {
        self.validate(id);
        self.hooks[id.idx as usize] = Some(Box::new(hooks));
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: LayerId) {
        assert!(
            self.is_alive(id),
            "stale LayerId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Builds a handle for a live slot.
    #[inline]
    pub(crate) fn id_at(&self, idx: u32) -> LayerId {
        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Builds a handle for a slot index that may be [`INVALID`].
    #[inline]
    pub(crate) fn id_of(&self, idx: u32) -> Option<LayerId> {
        (idx != INVALID).then(|| self.id_at(idx))
    }

    /// The ordering key of the layer at `idx`.
    #[inline]
    pub(crate) fn sort_key(&self, idx: u32) -> SortKey {
        SortKey {
            depth: self.depth[idx as usize],
            seq: self.seq[idx as usize],
        }
    }

    /// Marks `idx` and its ancestors interactive, stopping at the first one
    /// that already is.
    pub(crate) fn activate(&self, mut idx: u32) {
        while idx != INVALID && !self.interactive[idx as usize].get() {
            self.interactive[idx as usize].set(true);
            idx = self.parent[idx as usize];
        }
    }

    fn update_local_transform(&mut self, idx: u32) {
        let i = idx as usize;
        self.local_transform[i] =
            Transform2d::from_components(self.scale[i], self.rotation[i], self.translation[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ImageId;

    #[test]
    fn create_and_destroy() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        assert!(scene.is_alive(id));
        scene.destroy(id);
        assert!(!scene.is_alive(id));
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut scene = SceneGraph::new();
        let id1 = scene.create_image(None);
        scene.destroy(id1);
        let id2 = scene.create_image(None);
        // id2 reuses the same slot but has a different generation.
        assert!(!scene.is_alive(id1));
        assert!(scene.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn reused_slot_starts_fresh() {
        let mut scene = SceneGraph::new();
        let id = scene.create_image(None);
        scene.set_alpha(id, 0.25);
        scene.set_depth(id, 7.0);
        scene.set_visible(id, false);
        scene.set_translation(id, 5.0, 5.0);
        scene.destroy(id);

        let id = scene.create_group();
        assert_eq!(scene.alpha(id), 1.0);
        assert_eq!(scene.depth(id), 0.0);
        assert!(scene.visible(id));
        assert_eq!(scene.transform(id), Transform2d::IDENTITY);
        assert_eq!(scene.kind(id), LayerKind::Group);
    }

    #[test]
    fn defaults() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        assert_eq!(scene.parent(id), None);
        assert_eq!(scene.child_count(id), 0);
        assert_eq!(scene.origin(id), Point::ZERO);
        assert_eq!(scene.scale(id), Vec2::new(1.0, 1.0));
        assert_eq!(scene.rotation(id), 0.0);
        assert_eq!(scene.flags(id), LayerFlags::default());
        assert!(!scene.hit_transparent(id));
    }

    #[test]
    fn alpha_is_clamped() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        scene.set_alpha(id, 1.5);
        assert_eq!(scene.alpha(id), 1.0);
        scene.set_alpha(id, -0.5);
        assert_eq!(scene.alpha(id), 0.0);
        scene.set_alpha(id, 0.5);
        assert_eq!(scene.alpha(id), 0.5);
    }

    #[test]
    fn tint_shares_alpha() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        assert_eq!(scene.tint(id), tint::NOOP_TINT);

        scene.set_tint(id, 0x00FF_0000);
        assert_eq!(scene.alpha(id), 0.0);
        assert_eq!(scene.tint(id), 0x00FF_0000);

        scene.set_alpha(id, 1.0);
        assert_eq!(scene.tint(id), 0xFFFF_0000);
    }

    #[test]
    fn interactive_propagates_to_ancestors() {
        let mut scene = SceneGraph::new();
        let root = scene.create_group();
        let group = scene.create_group();
        let leaf = scene.create_image(None);
        scene.add(root, group);
        scene.add(group, leaf);
        assert!(scene.interactive(leaf));

        for id in [root, group, leaf] {
            scene.set_interactive(id, false);
        }
        scene.set_interactive(leaf, true);
        assert!(scene.interactive(group));
        assert!(scene.interactive(root));

        // Turning a layer off leaves its ancestors alone.
        scene.set_interactive(leaf, false);
        assert!(scene.interactive(group));
    }

    #[test]
    fn transform_tracks_components() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        scene.set_scale(id, 2.0, 3.0);
        scene.set_translation(id, 10.0, 20.0);
        assert_eq!(
            scene.transform(id),
            Transform2d::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0)
        );
        scene.set_rotation(id, 0.0);
        assert_eq!(scene.transform(id).translation(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn zero_scale_is_stored() {
        let mut scene = SceneGraph::new();
        let id = scene.create_image(Some(Image::new(ImageId(1), Size::new(10.0, 10.0))));
        scene.set_scale(id, 0.0, 1.0);
        assert_eq!(scene.scale(id), Vec2::new(0.0, 1.0));
        assert_eq!(scene.hit_test(id, Point::ZERO), None);
        scene.set_scale(id, 1.0, 1.0);
        assert_eq!(scene.hit_test(id, Point::ZERO), Some(id));
    }

    #[test]
    fn image_sizes() {
        let mut scene = SceneGraph::new();
        let id = scene.create_image(None);
        assert_eq!(scene.size(id), Size::ZERO);

        scene.set_image(id, Some(Image::new(ImageId(1), Size::new(40.0, 20.0))));
        assert_eq!(scene.size(id), Size::new(40.0, 20.0));

        scene.set_width(id, 100.0);
        assert_eq!(scene.width(id), 100.0);
        assert_eq!(scene.height(id), 20.0);

        scene.set_uniform_scale(id, 2.0);
        assert_eq!(scene.scaled_width(id), 200.0);
        assert_eq!(scene.scaled_height(id), 40.0);

        scene.clear_size(id);
        assert_eq!(scene.size(id), Size::new(40.0, 20.0));
    }

    #[test]
    fn set_size_resizes_clip() {
        let mut scene = SceneGraph::new();
        let clipped = scene.create_clipped_group(Size::new(10.0, 10.0));
        scene.set_size(clipped, Size::new(50.0, 60.0));
        assert_eq!(scene.content(clipped).clip(), Some(Size::new(50.0, 60.0)));

        // Unclipped groups stay unsized.
        let group = scene.create_group();
        scene.set_size(group, Size::new(50.0, 60.0));
        assert_eq!(scene.size(group), Size::ZERO);
    }

    #[test]
    fn roots_returns_parentless_layers() {
        let mut scene = SceneGraph::new();
        let a = scene.create_group();
        let b = scene.create_group();
        let c = scene.create_image(None);
        let dead = scene.create_group();

        scene.add(a, c);
        scene.destroy(dead);

        let roots = scene.roots();
        assert!(roots.contains(&a));
        assert!(roots.contains(&b));
        assert!(!roots.contains(&c));
        assert!(!roots.contains(&dead));
        assert_eq!(scene.live_count(), 3);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn destroyed_handle_panics_on_get_transform() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        scene.destroy(id);
        let _ = scene.transform(id);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn destroyed_handle_panics_on_set_alpha() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        scene.destroy(id);
        scene.set_alpha(id, 0.5);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn destroyed_handle_panics_on_parent() {
        let mut scene = SceneGraph::new();
        let id = scene.create_group();
        scene.destroy(id);
        let _ = scene.parent(id);
    }
}
