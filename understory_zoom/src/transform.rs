// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale/offset/rotation transforms and their composition.
//!
//! A [`ZoomTransform`] maps content into the viewport in three steps: rotate
//! the content (its rotated bounding box is re-anchored at the origin), scale
//! it per axis, then translate it. The engine keeps two layers:
//!
//! - the *base* transform, derived from the fit mode, alignment and rotation;
//! - the *user* transform, accumulated from pan and zoom.
//!
//! [`ZoomTransform::concat`] merges them and [`ZoomTransform::split`] recovers
//! the user layer from a directly computed total.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::RotationError;
use crate::geometry::{Centroid, ScaleFactor};

/// Content rotation in clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// A quarter turn clockwise.
    Deg90,
    /// A half turn.
    Deg180,
    /// Three quarter turns clockwise.
    Deg270,
}

impl Rotation {
    /// Converts a multiple of 90 degrees into a rotation.
    ///
    /// Values are normalized modulo 360, so `-90` is [`Rotation::Deg270`] and
    /// `450` is [`Rotation::Deg90`].
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::NotRightAngle`] for any other value.
    pub fn from_degrees(degrees: i32) -> Result<Self, RotationError> {
        if degrees % 90 != 0 {
            return Err(RotationError::NotRightAngle(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    /// The rotation angle in degrees, one of `0`, `90`, `180` or `270`.
    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Returns `true` for rotations that swap the width and height axes.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Bounding size of `size` after rotation.
    #[must_use]
    pub fn rotate_size(self, size: Size) -> Size {
        if self.swaps_axes() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }

    /// Exact `(cos, sin)` of the rotation angle.
    fn cos_sin(self) -> (f64, f64) {
        match self {
            Self::Deg0 => (1.0, 0.0),
            Self::Deg90 => (0.0, 1.0),
            Self::Deg180 => (-1.0, 0.0),
            Self::Deg270 => (0.0, -1.0),
        }
    }

    /// Rotation about `pivot`, built from exact coefficients.
    fn about(self, pivot: Point) -> Affine {
        let (c, s) = self.cos_sin();
        Affine::new([
            c,
            s,
            -s,
            c,
            pivot.x - c * pivot.x + s * pivot.y,
            pivot.y - s * pivot.x - c * pivot.y,
        ])
    }
}

impl TryFrom<i32> for Rotation {
    type Error = RotationError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

/// Scale, offset and rotation mapping content into the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Per-axis scale.
    pub scale: ScaleFactor,
    /// Translation in viewport units.
    pub offset: Vec2,
    /// Content rotation.
    pub rotation: Rotation,
    /// Pivot of the rotation, normalized to the content size.
    pub rotation_origin: Centroid,
}

impl ZoomTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: ScaleFactor::ONE,
        offset: Vec2::ZERO,
        rotation: Rotation::Deg0,
        rotation_origin: Centroid::CENTER,
    };

    /// Creates an unrotated transform.
    #[must_use]
    pub fn new(scale: ScaleFactor, offset: Vec2) -> Self {
        Self {
            scale,
            offset,
            ..Self::IDENTITY
        }
    }

    /// Layers `user` on top of `self` (the base).
    ///
    /// The user scale applies to the base offset as well, since the user
    /// transform acts on the already placed content. Rotation and its origin
    /// come from the base.
    #[must_use]
    pub fn concat(self, user: Self) -> Self {
        Self {
            scale: self.scale * user.scale,
            offset: user.scale.scale_vec(self.offset) + user.offset,
            rotation: self.rotation,
            rotation_origin: self.rotation_origin,
        }
    }

    /// Recovers the user layer such that `base.concat(user) ≈ self`.
    ///
    /// Axes where `base` has a zero scale yield a zero user scale instead of
    /// an infinity.
    #[must_use]
    pub fn split(self, base: Self) -> Self {
        let scale = self.scale.div(base.scale);
        Self {
            scale,
            offset: self.offset - scale.scale_vec(base.offset),
            rotation: Rotation::Deg0,
            rotation_origin: Centroid::CENTER,
        }
    }

    /// Affine map from content coordinates (`0..content.width`,
    /// `0..content.height`) into viewport coordinates.
    #[must_use]
    pub fn to_affine(&self, content: Size) -> Affine {
        let pivot = self.rotation_origin.to_point_in(content);
        let rotate = self.rotation.about(pivot);
        let rotated = rotate.transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, content));
        Affine::translate(self.offset)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-rotated.origin().to_vec2())
            * rotate
    }

    /// Linear interpolation of scale and offset, for external animators.
    ///
    /// `t` is clamped into `[0, 1]`; rotation is taken from `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            scale: ScaleFactor::new(
                self.scale.x + (other.scale.x - self.scale.x) * t,
                self.scale.y + (other.scale.y - self.scale.y) * t,
            ),
            offset: self.offset.lerp(other.offset, t),
            rotation: other.rotation,
            rotation_origin: other.rotation_origin,
        }
    }

    /// Compares scale and offset within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.scale.x - other.scale.x).abs() <= tolerance
            && (self.scale.y - other.scale.y).abs() <= tolerance
            && (self.offset.x - other.offset.x).abs() <= tolerance
            && (self.offset.y - other.offset.y).abs() <= tolerance
            && self.rotation == other.rotation
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Result of a mutating engine operation.
///
/// When `animated` is `true` the engine has *not* applied `to`; an external
/// animator is expected to interpolate from `from` to `to` (for example with
/// [`ZoomTransform::lerp`]) and feed each frame back through
/// [`ZoomEngine::set_user_transform`](crate::ZoomEngine::set_user_transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformUpdate {
    /// User transform before the operation.
    pub from: ZoomTransform,
    /// Clamped target user transform.
    pub to: ZoomTransform,
    /// Whether the caller asked for an animated transition.
    pub animated: bool,
}

impl TransformUpdate {
    /// Returns `true` if the operation does not move anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Interpolated user transform at `t` in `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> ZoomTransform {
        self.from.lerp(&self.to, t)
    }
}
