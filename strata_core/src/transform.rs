// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal 2×3 affine transform.
//!
//! This type covers exactly what the layer tree needs (composition around a
//! pivot, forward and inverse point mapping, bounding boxes) and converts
//! losslessly to and from [`kurbo::Affine`] for callers that want the rest of
//! the `kurbo` toolbox.

use core::ops::Mul;

use kurbo::{Affine, Point, Rect, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A 2-D affine transform stored as a 2×3 matrix.
///
/// A point `(x, y)` maps to
/// `(m00 * x + m10 * y + tx, m01 * x + m11 * y + ty)`, so `(m00, m01)` and
/// `(m10, m11)` are the images of the unit x and y axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    /// X component of the transformed x axis.
    pub m00: f64,
    /// Y component of the transformed x axis.
    pub m01: f64,
    /// X component of the transformed y axis.
    pub m10: f64,
    /// Y component of the transformed y axis.
    pub m11: f64,
    /// Translation along x.
    pub tx: f64,
    /// Translation along y.
    pub ty: f64,
}

impl Transform2d {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its six coefficients.
    #[inline]
    #[must_use]
    pub const fn new(m00: f64, m01: f64, m10: f64, m11: f64, tx: f64, ty: f64) -> Self {
        Self {
            m00,
            m01,
            m10,
            m11,
            tx,
            ty,
        }
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Creates a rotation (radians, positive turns the x axis toward the y axis).
    #[inline]
    #[must_use]
    pub fn from_rotation(radians: f64) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Composes a layer's local transform from its scale, rotation and
    /// translation components.
    ///
    /// The scale is applied on top of the rotation (each rotated axis is
    /// stretched by the scale factor of the matching screen axis), and the
    /// translation is applied last, in parent space.
    #[must_use]
    pub fn from_components(scale: Vec2, rotation: f64, translation: Vec2) -> Self {
        let (s, c) = (rotation.sin(), rotation.cos());
        Self::new(
            c * scale.x,
            s * scale.y,
            -s * scale.x,
            c * scale.y,
            translation.x,
            translation.y,
        )
    }

    /// Returns the translation component.
    #[inline]
    #[must_use]
    pub const fn translation(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Returns a copy of this transform with its translation replaced.
    #[inline]
    #[must_use]
    pub const fn with_translation(self, translation: Vec2) -> Self {
        Self::new(
            self.m00,
            self.m01,
            self.m10,
            self.m11,
            translation.x,
            translation.y,
        )
    }

    /// Returns the determinant of the linear part.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns `self` followed by a translation applied *before* it, i.e.
    /// `self * from_translation(v)`.
    #[inline]
    #[must_use]
    pub fn pre_translate(self, v: Vec2) -> Self {
        Self {
            tx: self.m00 * v.x + self.m10 * v.y + self.tx,
            ty: self.m01 * v.x + self.m11 * v.y + self.ty,
            ..self
        }
    }

    /// Produces the transform used to place a layer's content: this (parent)
    /// transform, followed by the layer's `local` transform, with the layer's
    /// `origin` moved to the local coordinate origin so that scale and
    /// rotation pivot around it.
    ///
    /// Equivalent to `self * local * from_translation(-origin.x, -origin.y)`.
    #[inline]
    #[must_use]
    pub fn concatenate(&self, local: &Self, origin: Point) -> Self {
        let out = *self * *local;
        if origin.x != 0.0 || origin.y != 0.0 {
            out.pre_translate(Vec2::new(-origin.x, -origin.y))
        } else {
            out
        }
    }

    /// Maps a point from local to parent space.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.m00 * p.x + self.m10 * p.y + self.tx,
            self.m01 * p.x + self.m11 * p.y + self.ty,
        )
    }

    /// Maps a vector from local to parent space (ignores translation).
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * v.x + self.m10 * v.y,
            self.m01 * v.x + self.m11 * v.y,
        )
    }

    /// Maps a point from parent to local space.
    ///
    /// A degenerate (zero determinant) transform produces non-finite
    /// coordinates rather than failing; bounds checks against such a point
    /// are always false.
    #[inline]
    #[must_use]
    pub fn inverse_transform_point(&self, p: Point) -> Point {
        let det = self.determinant();
        let dx = p.x - self.tx;
        let dy = p.y - self.ty;
        Point::new(
            (self.m11 * dx - self.m10 * dy) / det,
            (self.m00 * dy - self.m01 * dx) / det,
        )
    }

    /// Returns the inverse transform.
    ///
    /// Like [`inverse_transform_point`](Self::inverse_transform_point), a
    /// degenerate transform yields non-finite coefficients.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_det = 1.0 / self.determinant();
        let m00 = self.m11 * inv_det;
        let m01 = -self.m01 * inv_det;
        let m10 = -self.m10 * inv_det;
        let m11 = self.m00 * inv_det;
        Self::new(
            m00,
            m01,
            m10,
            m11,
            -(m00 * self.tx + m10 * self.ty),
            -(m01 * self.tx + m11 * self.ty),
        )
    }

    /// Returns the axis-aligned bounding box of `rect` after transformation.
    #[must_use]
    pub fn transform_rect_bbox(&self, rect: Rect) -> Rect {
        let corners = [
            self.transform_point(Point::new(rect.x0, rect.y0)),
            self.transform_point(Point::new(rect.x1, rect.y0)),
            self.transform_point(Point::new(rect.x0, rect.y1)),
            self.transform_point(Point::new(rect.x1, rect.y1)),
        ];
        let mut out = Rect::from_points(corners[0], corners[0]);
        for c in &corners[1..] {
            out.x0 = out.x0.min(c.x);
            out.y0 = out.y0.min(c.y);
            out.x1 = out.x1.max(c.x);
            out.y1 = out.y1.max(c.y);
        }
        out
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.m00.is_finite()
            && self.m01.is_finite()
            && self.m10.is_finite()
            && self.m11.is_finite()
            && self.tx.is_finite()
            && self.ty.is_finite()
    }

    /// Is this transform [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.m00.is_nan()
            || self.m01.is_nan()
            || self.m10.is_nan()
            || self.m11.is_nan()
            || self.tx.is_nan()
            || self.ty.is_nan()
    }
}

impl Default for Transform2d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform2d {
    type Output = Self;

    /// Composes two transforms; `rhs` is applied first.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            m00: self.m00 * rhs.m00 + self.m10 * rhs.m01,
            m01: self.m01 * rhs.m00 + self.m11 * rhs.m01,
            m10: self.m00 * rhs.m10 + self.m10 * rhs.m11,
            m11: self.m01 * rhs.m10 + self.m11 * rhs.m11,
            tx: self.m00 * rhs.tx + self.m10 * rhs.ty + self.tx,
            ty: self.m01 * rhs.tx + self.m11 * rhs.ty + self.ty,
        }
    }
}

impl From<Transform2d> for Affine {
    #[inline]
    fn from(t: Transform2d) -> Self {
        Self::new([t.m00, t.m01, t.m10, t.m11, t.tx, t.ty])
    }
}

impl From<Affine> for Transform2d {
    #[inline]
    fn from(a: Affine) -> Self {
        let [m00, m01, m10, m11, tx, ty] = a.as_coeffs();
        Self::new(m00, m01, m10, m11, tx, ty)
    }
}
