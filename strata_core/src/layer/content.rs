// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a layer draws.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Size;

use super::id::{ImageId, SurfaceId};
use crate::backend::Renderer;

/// A loaded image, as handed to a layer by the asset pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image {
    /// Backend handle for the image pixels.
    pub id: ImageId,
    /// Natural size of the image in layer units.
    pub size: Size,
    /// Tile the image horizontally instead of stretching it.
    pub repeat_x: bool,
    /// Tile the image vertically instead of stretching it.
    pub repeat_y: bool,
}

impl Image {
    /// Creates a stretched (non-repeating) image reference.
    #[inline]
    #[must_use]
    pub const fn new(id: ImageId, size: Size) -> Self {
        Self {
            id,
            size,
            repeat_x: false,
            repeat_y: false,
        }
    }

    /// Returns a copy with the given repeat flags.
    #[inline]
    #[must_use]
    pub const fn with_repeat(self, repeat_x: bool, repeat_y: bool) -> Self {
        Self {
            repeat_x,
            repeat_y,
            ..self
        }
    }
}

/// The kind of a layer, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Owns depth-ordered children.
    Group,
    /// Draws an image.
    Image,
    /// Draws through a caller-supplied [`Renderer`] every frame.
    Immediate,
    /// Presents an externally managed surface.
    Surface,
}

/// The drawable capability of a layer.
///
/// Every layer in a [`SceneGraph`](super::SceneGraph) shares the same
/// transform, depth, alpha and lifecycle machinery; the content decides what
/// is drawn and how large the layer is for hit-testing.
pub enum LayerContent {
    /// A group layer. With `clip` set, children are clipped to
    /// `(0, 0, width, height)` in the group's local space.
    Group {
        /// Clip size, if this is a clipped group.
        clip: Option<Size>,
    },
    /// An image layer. Draws nothing until `image` is set.
    Image {
        /// The image, once loaded.
        image: Option<Image>,
        /// Explicit width overriding the image's natural width.
        width: Option<f64>,
        /// Explicit height overriding the image's natural height.
        height: Option<f64>,
    },
    /// An immediate layer that renders via a callback each frame.
    Immediate {
        /// The render callback.
        renderer: Box<dyn Renderer>,
        /// Clip size, if this is a clipped immediate layer.
        clip: Option<Size>,
    },
    /// A layer presenting an offscreen surface of fixed size.
    Surface {
        /// The surface to present.
        surface: SurfaceId,
        /// Size of the surface in layer units.
        size: Size,
    },
}

impl LayerContent {
    /// An unclipped group.
    #[inline]
    #[must_use]
    pub const fn group() -> Self {
        Self::Group { clip: None }
    }

    /// A group whose children are clipped to `size`.
    #[inline]
    #[must_use]
    pub const fn clipped_group(size: Size) -> Self {
        Self::Group { clip: Some(size) }
    }

    /// An image layer, optionally with its image already available.
    #[inline]
    #[must_use]
    pub const fn image(image: Option<Image>) -> Self {
        Self::Image {
            image,
            width: None,
            height: None,
        }
    }

    /// An unclipped immediate layer.
    #[must_use]
    pub fn immediate(renderer: impl Renderer + 'static) -> Self {
        Self::Immediate {
            renderer: Box::new(renderer),
            clip: None,
        }
    }

    /// An immediate layer whose output is clipped to `size`.
    #[must_use]
    pub fn clipped_immediate(size: Size, renderer: impl Renderer + 'static) -> Self {
        Self::Immediate {
            renderer: Box::new(renderer),
            clip: Some(size),
        }
    }

    /// A surface layer.
    #[inline]
    #[must_use]
    pub const fn surface(surface: SurfaceId, size: Size) -> Self {
        Self::Surface { surface, size }
    }

    /// Returns the kind of this content.
    #[must_use]
    pub const fn kind(&self) -> LayerKind {
        match self {
            Self::Group { .. } => LayerKind::Group,
            Self::Image { .. } => LayerKind::Image,
            Self::Immediate { .. } => LayerKind::Immediate,
            Self::Surface { .. } => LayerKind::Surface,
        }
    }

    /// Whether this content can own children.
    #[inline]
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Returns the clip size for clipped groups and clipped immediate layers.
    #[must_use]
    pub const fn clip(&self) -> Option<Size> {
        match self {
            Self::Group { clip } | Self::Immediate { clip, .. } => *clip,
            _ => None,
        }
    }

    /// Returns the layer's size in local units.
    ///
    /// Layers that don't know their size (unclipped groups and immediate
    /// layers, image layers whose image hasn't arrived) report zero along
    /// the unknown axis.
    #[must_use]
    pub fn size(&self) -> Size {
        match self {
            Self::Group { clip } | Self::Immediate { clip, .. } => clip.unwrap_or(Size::ZERO),
            Self::Image {
                image,
                width,
                height,
            } => {
                let natural = image.map_or(Size::ZERO, |i| i.size);
                Size::new(
                    width.unwrap_or(natural.width),
                    height.unwrap_or(natural.height),
                )
            }
            Self::Surface { size, .. } => *size,
        }
    }
}

impl fmt::Debug for LayerContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { clip } => f.debug_struct("Group").field("clip", clip).finish(),
            Self::Image {
                image,
                width,
                height,
            } => f
                .debug_struct("Image")
                .field("image", image)
                .field("width", width)
                .field("height", height)
                .finish(),
            Self::Immediate { clip, .. } => f
                .debug_struct("Immediate")
                .field("clip", clip)
                .finish_non_exhaustive(),
            Self::Surface { surface, size } => f
                .debug_struct("Surface")
                .field("surface", surface)
                .field("size", size)
                .finish(),
        }
    }
}
