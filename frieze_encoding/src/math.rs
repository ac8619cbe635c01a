// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restricted affine transforms used for content placement.

use std::ops::Mul;

use peniko::kurbo;

/// The composition of a uniform scaling and a translation.
///
/// Maps a point `p` to `p * scale + translation`. The scale factor is
/// never negative: every constructor and mutator stores its absolute
/// value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleTranslate {
    scale: f64,
    translation: kurbo::Point,
}

impl ScaleTranslate {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: kurbo::Point::ZERO,
    };

    /// Creates a transform from a translation and a scaling factor.
    pub fn new(translation: kurbo::Point, scale: f64) -> Self {
        Self {
            scale: scale.abs(),
            translation,
        }
    }

    /// Creates a pure scaling transform.
    pub fn from_scale(scale: f64) -> Self {
        Self::new(kurbo::Point::ZERO, scale)
    }

    /// Creates a pure translation.
    pub fn from_translation(translation: kurbo::Point) -> Self {
        Self::new(translation, 1.0)
    }

    /// Returns the scaling factor, which is never negative.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scaling factor, discarding its sign.
    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale.abs();
        self
    }

    /// Returns the translation.
    pub fn translation(&self) -> kurbo::Point {
        self.translation
    }

    /// Sets the translation.
    pub fn set_translation(&mut self, translation: kurbo::Point) -> &mut Self {
        self.translation = translation;
        self
    }

    /// Sets the x-coordinate of the translation.
    pub fn set_translation_x(&mut self, x: f64) -> &mut Self {
        self.translation.x = x;
        self
    }

    /// Sets the y-coordinate of the translation.
    pub fn set_translation_y(&mut self, y: f64) -> &mut Self {
        self.translation.y = y;
        self
    }

    /// Applies the transform to a point.
    pub fn apply_to_point(&self, p: kurbo::Point) -> kurbo::Point {
        kurbo::Point::new(
            p.x * self.scale + self.translation.x,
            p.y * self.scale + self.translation.y,
        )
    }

    /// Applies the inverse of the transform to a point.
    ///
    /// Equivalent to `self.inverse().apply_to_point(p)`. A zero scale
    /// produces IEEE infinities (or NaN at the fixed point).
    pub fn apply_inverse_to_point(&self, p: kurbo::Point) -> kurbo::Point {
        let inv_scale = 1.0 / self.scale;
        kurbo::Point::new(
            (p.x - self.translation.x) * inv_scale,
            (p.y - self.translation.y) * inv_scale,
        )
    }

    /// Returns the inverse transform.
    ///
    /// A zero scale has no inverse; the result then carries an infinite
    /// scale and infinite or NaN translation components, per IEEE
    /// arithmetic. Callers that admit degenerate transforms must check
    /// `scale() != 0.0` themselves.
    pub fn inverse(&self) -> Self {
        let scale = 1.0 / self.scale;
        Self {
            scale,
            translation: kurbo::Point::new(
                -scale * self.translation.x,
                -scale * self.translation.y,
            ),
        }
    }

    /// Linearly interpolates between two transforms.
    ///
    /// `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            scale: self.scale + t * (other.scale - self.scale),
            translation: self.translation.lerp(other.translation, t),
        }
    }

    /// Converts to a full affine matrix.
    pub fn to_kurbo(&self) -> kurbo::Affine {
        kurbo::Affine::new([
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translation.x,
            self.translation.y,
        ])
    }
}

impl Default for ScaleTranslate {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for ScaleTranslate {
    type Output = Self;

    /// Composes two transforms so that
    /// `(a * b).apply_to_point(p) == a.apply_to_point(b.apply_to_point(p))`.
    ///
    /// The translation of the composition is `b`'s translation
    /// re-expressed in `a`'s frame; scaling both parts independently
    /// would drop that cross term.
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            scale: self.scale * other.scale,
            translation: self.apply_to_point(other.translation),
        }
    }
}

pub fn point_to_f32(point: kurbo::Point) -> [f32; 2] {
    [point.x as f32, point.y as f32]
}
