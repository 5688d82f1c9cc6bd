// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-space damage tracking for partial re-rendering.

use alloc::vec::Vec;

use kurbo::Rect;

/// A region of the output that needs re-rendering.
///
/// Backends can use this to limit the scissor of a frame to the areas a
/// plan actually touches.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DamageRegion {
    /// The entire output needs redrawing.
    #[default]
    Full,
    /// Device-space rectangles that need redrawing.
    Rects(Vec<Rect>),
    /// Nothing to redraw.
    None,
}

impl DamageRegion {
    /// Returns `true` if no region needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Adds a rectangle. Zero-area rectangles are ignored.
    pub fn add_rect(&mut self, rect: Rect) {
        if rect.is_zero_area() {
            return;
        }
        match self {
            Self::Full => {}
            Self::Rects(rects) => rects.push(rect),
            Self::None => *self = Self::Rects(alloc::vec![rect]),
        }
    }

    /// Merges another damage region into this one.
    pub fn merge(&mut self, other: &Self) {
        match (&mut *self, other) {
            (Self::Full, _) | (_, Self::None) => {}
            (_, Self::Full) => *self = Self::Full,
            (Self::None, _) => *self = other.clone(),
            (Self::Rects(a), Self::Rects(b)) => a.extend_from_slice(b),
        }
    }

    /// Bounding box of all damaged rectangles.
    ///
    /// Returns `None` for [`Full`](Self::Full) (the caller knows its output
    /// size) and for an empty region.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rects(rects) => rects.iter().copied().reduce(|a, b| a.union(b)),
            Self::Full | Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_rects_are_ignored() {
        let mut region = DamageRegion::None;
        region.add_rect(Rect::new(5.0, 5.0, 5.0, 10.0));
        assert!(region.is_empty());
        region.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(region, DamageRegion::Rects(alloc::vec![Rect::new(0.0, 0.0, 1.0, 1.0)]));
    }

    #[test]
    fn full_absorbs_everything() {
        let mut region = DamageRegion::Full;
        region.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        region.merge(&DamageRegion::Rects(alloc::vec![Rect::new(0.0, 0.0, 2.0, 2.0)]));
        assert_eq!(region, DamageRegion::Full);

        let mut region = DamageRegion::None;
        region.merge(&DamageRegion::Full);
        assert_eq!(region, DamageRegion::Full);
    }

    #[test]
    fn merge_concatenates_rects() {
        let mut region = DamageRegion::None;
        region.merge(&DamageRegion::None);
        assert!(region.is_empty());

        region.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        region.merge(&DamageRegion::Rects(alloc::vec![Rect::new(4.0, 4.0, 6.0, 8.0)]));
        assert_eq!(region.bounds(), Some(Rect::new(0.0, 0.0, 6.0, 8.0)));
        assert_eq!(DamageRegion::Full.bounds(), None);
    }
}
