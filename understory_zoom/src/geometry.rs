// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types layered on top of Kurbo's `Size`/`Rect`/`Point`.

use core::ops::Mul;

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::LayoutDirection;

/// Returns `true` if `size` cannot be used for layout.
///
/// A size is "unspecified" when either dimension is not strictly positive or
/// not finite. [`Size::ZERO`] is the canonical unspecified value; every
/// computation in this crate short-circuits to a zero-valued result for it.
#[must_use]
pub fn is_unspecified(size: Size) -> bool {
    !(size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite())
}

/// Divides `a` by `b`, returning `0.0` instead of an infinity or NaN.
pub(crate) fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 || !b.is_finite() {
        return 0.0;
    }
    let q = a / b;
    if q.is_finite() { q } else { 0.0 }
}

/// Restricts `rect` to lie within `0..size` on both axes.
///
/// Returns [`Rect::ZERO`] if nothing of `rect` remains.
#[must_use]
pub fn limit_rect_to(rect: Rect, size: Size) -> Rect {
    let x0 = rect.x0.clamp(0.0, size.width.max(0.0));
    let y0 = rect.y0.clamp(0.0, size.height.max(0.0));
    let x1 = rect.x1.clamp(x0, size.width.max(x0));
    let y1 = rect.y1.clamp(y0, size.height.max(y0));
    if x1 <= x0 || y1 <= y0 {
        return Rect::ZERO;
    }
    Rect::new(x0, y0, x1, y1)
}

/// Per-axis scale factor.
///
/// Uniform for isotropic fit modes; independent per axis for
/// [`FitMode::FillBounds`](crate::FitMode::FillBounds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor {
    /// Horizontal scale.
    pub x: f64,
    /// Vertical scale.
    pub y: f64,
}

impl ScaleFactor {
    /// Identity scale.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Zero scale, produced for unspecified inputs.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a scale factor from per-axis values.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a uniform scale factor.
    #[must_use]
    pub const fn uniform(scale: f64) -> Self {
        Self { x: scale, y: scale }
    }

    /// Divides per axis, yielding `0.0` on an axis whose divisor is zero.
    #[must_use]
    pub fn div(self, other: Self) -> Self {
        Self::new(safe_div(self.x, other.x), safe_div(self.y, other.y))
    }

    /// Scales a size per axis.
    #[must_use]
    pub fn scale_size(self, size: Size) -> Size {
        Size::new(size.width * self.x, size.height * self.y)
    }

    /// Scales a vector per axis.
    #[must_use]
    pub fn scale_vec(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.x, v.y * self.y)
    }

    /// Scales all rect coordinates per axis.
    #[must_use]
    pub fn scale_rect(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 * self.x,
            rect.y0 * self.y,
            rect.x1 * self.x,
            rect.y1 * self.y,
        )
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ONE
    }
}

impl Mul for ScaleFactor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// A point normalized to a reference size, each component in `[0, 1]`.
///
/// Centroids are the currency for zoom anchors: they survive changes of the
/// reference size, unlike absolute pixel positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    /// Horizontal fraction.
    pub x: f64,
    /// Vertical fraction.
    pub y: f64,
}

impl Centroid {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
    /// Center of the reference rect.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Creates a centroid, clamping each component into `[0, 1]`.
    ///
    /// Non-finite components become `0.0`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Normalizes `pt` against `size`.
    ///
    /// Returns [`Centroid::ORIGIN`] for an unspecified size.
    #[must_use]
    pub fn of_point_in(pt: Point, size: Size) -> Self {
        if is_unspecified(size) {
            return Self::ORIGIN;
        }
        Self::new(pt.x / size.width, pt.y / size.height)
    }

    /// Expands this centroid into an absolute point within `size`.
    #[must_use]
    pub fn to_point_in(self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }
}

impl Default for Centroid {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

/// Which ends of an axis the visible region currently touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Edge {
    /// Neither end is reached; the content can scroll both ways.
    #[default]
    None,
    /// The start (left/top) end is reached.
    Start,
    /// The end (right/bottom) end is reached.
    End,
    /// Both ends are reached; the axis cannot scroll.
    Both,
}

/// Per-axis [`Edge`] of the current view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct ScrollEdge {
    /// Edge along the horizontal axis.
    pub horizontal: Edge,
    /// Edge along the vertical axis.
    pub vertical: Edge,
}

impl ScrollEdge {
    /// Both axes pinned at both ends: nothing can scroll.
    pub const LOCKED: Self = Self {
        horizontal: Edge::Both,
        vertical: Edge::Both,
    };
}

/// Insets subtracted from the viewport before layout and bounds math.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContainerWhitespace {
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
}

impl ContainerWhitespace {
    /// No whitespace.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates whitespace with individual insets; negative values become `0.0`.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.max(0.0),
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    /// The same inset on every side.
    #[must_use]
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Returns `true` if every inset is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::ZERO
    }

    /// Swaps left and right insets for right-to-left layouts.
    #[must_use]
    pub fn flipped_for(self, direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => self,
            LayoutDirection::Rtl => Self {
                left: self.right,
                right: self.left,
                ..self
            },
        }
    }

    /// The region of a `viewport` sized container left over after insets.
    ///
    /// Returns [`Rect::ZERO`] if the insets consume the whole viewport.
    #[must_use]
    pub fn inner_rect(&self, viewport: Size) -> Rect {
        let rect = Rect::new(
            self.left,
            self.top,
            viewport.width - self.right,
            viewport.height - self.bottom,
        );
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            Rect::ZERO
        } else {
            rect
        }
    }
}
