// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived zoom levels and the read-mode initial transform.
//!
//! All scales here are *total* scales (base × user) measured on the
//! horizontal axis. The minimum is always the base fit-mode scale.

use kurbo::{Rect, Size, Vec2};

use crate::geometry::{ScaleFactor, is_unspecified, safe_div};
use crate::modes::{Alignment, AxisAlignment, FitMode};
use crate::transform::ZoomTransform;

/// The `(min, medium, max)` zoom levels.
///
/// Always ordered `min <= medium <= max`; levels collapse upward onto `min`
/// when the computed values would fall below it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScaleLevels {
    /// Minimum scale (the base fit-mode scale).
    pub min: f64,
    /// Medium scale, the first double-tap step.
    pub medium: f64,
    /// Maximum scale.
    pub max: f64,
}

impl ScaleLevels {
    /// Levels used while sizes are unspecified.
    pub const ZERO: Self = Self {
        min: 0.0,
        medium: 0.0,
        max: 0.0,
    };

    /// Creates ordered levels, raising `medium` and `max` as needed.
    #[must_use]
    pub fn new(min: f64, medium: f64, max: f64) -> Self {
        let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
        let medium = if medium.is_finite() { medium.max(min) } else { min };
        let max = if max.is_finite() { max.max(medium) } else { medium };
        Self { min, medium, max }
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Step scales cycled by [`crate::ZoomEngine::switch_scale`], ascending.
    pub fn steps(&self, three_step: bool) -> impl Iterator<Item = f64> {
        let count = if three_step { 3 } else { 2 };
        [self.min, self.medium, self.max].into_iter().take(count)
    }
}

/// Inputs for [`ScalesCalculator::calculate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalesInput {
    /// Viewport size.
    pub viewport: Size,
    /// Content size in the viewport frame.
    pub content: Size,
    /// Size of the original, full-resolution content in the viewport frame,
    /// or [`Size::ZERO`] if unknown.
    pub content_origin: Size,
    /// Active fit mode.
    pub fit: FitMode,
    /// Base fit-mode scale; becomes the minimum level.
    pub min_scale: f64,
    /// Scale of the initial transform, if it differs from the base (read mode).
    pub initial_scale: Option<f64>,
}

/// Policy deriving medium and maximum scales from the minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalesCalculator {
    /// `medium = min × multiple`, `max = medium × multiple`.
    Fixed {
        /// Step multiplier.
        multiple: f64,
    },
    /// Like [`ScalesCalculator::Fixed`], but the medium scale is raised to the
    /// scale that fills the viewport or shows the original content at full
    /// pixel density, whichever is larger.
    Dynamic {
        /// Step multiplier.
        multiple: f64,
    },
}

impl ScalesCalculator {
    /// Default step multiplier.
    pub const MULTIPLE: f64 = 3.0;
    /// Fixed policy with the default multiplier.
    pub const FIXED: Self = Self::Fixed {
        multiple: Self::MULTIPLE,
    };
    /// Dynamic policy with the default multiplier.
    pub const DYNAMIC: Self = Self::Dynamic {
        multiple: Self::MULTIPLE,
    };

    /// Step multiplier of this policy, never below `1.0`.
    #[must_use]
    pub fn multiple(&self) -> f64 {
        let (Self::Fixed { multiple } | Self::Dynamic { multiple }) = *self;
        if multiple.is_finite() { multiple.max(1.0) } else { Self::MULTIPLE }
    }

    /// Computes the zoom levels for `input`.
    #[must_use]
    pub fn calculate(&self, input: &ScalesInput) -> ScaleLevels {
        let min = input.min_scale;
        if is_unspecified(input.viewport) || is_unspecified(input.content) || min.is_nan() || min <= 0.0 {
            return ScaleLevels::ZERO;
        }
        let multiple = self.multiple();
        let mut medium = match self {
            Self::Fixed { .. } => min * multiple,
            Self::Dynamic { .. } if input.fit == FitMode::FillBounds => min * multiple,
            Self::Dynamic { .. } => {
                let fill_viewport = safe_div(input.viewport.width, input.content.width)
                    .max(safe_div(input.viewport.height, input.content.height));
                let origin_density = if is_unspecified(input.content_origin) {
                    1.0
                } else {
                    safe_div(input.content_origin.width, input.content.width)
                        .max(safe_div(input.content_origin.height, input.content.height))
                };
                (min * multiple).max(fill_viewport).max(origin_density)
            }
        };
        let mut max = medium * multiple;
        if let Some(initial) = input.initial_scale.filter(|s| s.is_finite() && *s > medium) {
            medium = initial;
            max = max.max(medium * multiple);
        }
        ScaleLevels::new(min, medium, max)
    }
}

impl Default for ScalesCalculator {
    fn default() -> Self {
        Self::DYNAMIC
    }
}

bitflags::bitflags! {
    /// Orientations of long content that read mode applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ReadModeDirections: u8 {
        /// Wide panoramas.
        const HORIZONTAL = 0b0000_0001;
        /// Tall strips.
        const VERTICAL   = 0b0000_0010;
    }
}

impl Default for ReadModeDirections {
    fn default() -> Self {
        Self::all()
    }
}

/// Decides whether content is "long" relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongContentDecider {
    /// Aspect-ratio multiple required when content and viewport share an
    /// orientation.
    pub same_direction_multiple: f64,
    /// Aspect-ratio multiple required when their orientations differ.
    pub not_same_direction_multiple: f64,
}

impl LongContentDecider {
    /// Returns `true` if `content` is a strip or panorama for `viewport`.
    #[must_use]
    pub fn is_long(&self, content: Size, viewport: Size) -> bool {
        if is_unspecified(content) || is_unspecified(viewport) {
            return false;
        }
        let content_ratio = content.width / content.height;
        let viewport_ratio = viewport.width / viewport.height;
        let same_direction = content_ratio == 1.0
            || viewport_ratio == 1.0
            || (content_ratio > 1.0) == (viewport_ratio > 1.0);
        let multiple = if same_direction {
            self.same_direction_multiple
        } else {
            self.not_same_direction_multiple
        };
        let ratio = (content_ratio / viewport_ratio).max(viewport_ratio / content_ratio);
        ratio >= multiple
    }
}

impl Default for LongContentDecider {
    fn default() -> Self {
        Self {
            same_direction_multiple: 2.5,
            not_same_direction_multiple: 5.0,
        }
    }
}

/// Policy replacing the initial placement of long content.
///
/// Long content starts scaled so its cross axis fills the viewport, which
/// makes the first paint readable instead of a thin sliver.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ReadMode {
    /// Orientations the policy applies to.
    pub directions: ReadModeDirections,
    /// Long-content test.
    pub decider: LongContentDecider,
}

impl ReadMode {
    /// Returns `true` if read mode should drive the initial transform.
    #[must_use]
    pub fn accepts(&self, content: Size, viewport: Size, fit: FitMode) -> bool {
        if fit == FitMode::FillBounds || !self.decider.is_long(content, viewport) {
            return false;
        }
        let tall = content.width / content.height < viewport.width / viewport.height;
        if tall {
            self.directions.contains(ReadModeDirections::VERTICAL)
        } else {
            self.directions.contains(ReadModeDirections::HORIZONTAL)
        }
    }
}

/// Total transform showing `content` cropped to fill `region`.
///
/// The cross axis fits exactly; the long axis starts at the alignment's side,
/// with a centered alignment reading from the start. Rotation is left for the
/// caller to fill in.
#[must_use]
pub fn read_mode_transform(content: Size, region: Rect, alignment: Alignment) -> ZoomTransform {
    if is_unspecified(content) || region.area() <= 0.0 {
        return ZoomTransform::new(ScaleFactor::ZERO, Vec2::ZERO);
    }
    let scale = safe_div(region.width(), content.width).max(safe_div(region.height(), content.height));
    let scaled = ScaleFactor::uniform(scale).scale_size(content);
    let reading = |axis: AxisAlignment| match axis {
        AxisAlignment::Center => AxisAlignment::Start,
        other => other,
    };
    let x = region.x0 + reading(alignment.horizontal()).align(scaled.width, region.width());
    let y = region.y0 + reading(alignment.vertical()).align(scaled.height, region.height());
    ZoomTransform::new(ScaleFactor::uniform(scale), Vec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{
        LongContentDecider, ReadMode, ReadModeDirections, ScaleLevels, ScalesCalculator, ScalesInput,
        read_mode_transform,
    };
    use crate::geometry::ScaleFactor;
    use crate::modes::{Alignment, FitMode};

    fn input(min_scale: f64) -> ScalesInput {
        ScalesInput {
            viewport: Size::new(516.0, 516.0),
            content: Size::new(86.0, 1522.0),
            content_origin: Size::ZERO,
            fit: FitMode::Fit,
            min_scale,
            initial_scale: None,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn fixed_levels_are_multiples_of_min() {
        let levels = ScalesCalculator::FIXED.calculate(&input(0.5));
        assert_eq!(levels, ScaleLevels::new(0.5, 1.5, 4.5));
    }

    #[test]
    fn dynamic_levels_fill_viewport() {
        let min = 516.0 / 1522.0;
        let levels = ScalesCalculator::DYNAMIC.calculate(&input(min));
        assert!(approx(levels.min, min));
        assert!(approx(levels.medium, 6.0));
        assert!(approx(levels.max, 18.0));
    }

    #[test]
    fn dynamic_levels_honor_origin_density() {
        let mut input = input(516.0 / 1522.0);
        input.content_origin = Size::new(860.0, 15220.0);
        let levels = ScalesCalculator::DYNAMIC.calculate(&input);
        assert!(approx(levels.medium, 10.0));
        assert!(approx(levels.max, 30.0));
    }

    #[test]
    fn dynamic_uses_fixed_steps_for_fill_bounds() {
        let mut input = input(2.0);
        input.fit = FitMode::FillBounds;
        let levels = ScalesCalculator::DYNAMIC.calculate(&input);
        assert_eq!(levels, ScaleLevels::new(2.0, 6.0, 18.0));
    }

    #[test]
    fn initial_scale_raises_medium() {
        let mut input = input(0.5);
        input.initial_scale = Some(2.0);
        let levels = ScalesCalculator::FIXED.calculate(&input);
        assert_eq!(levels, ScaleLevels::new(0.5, 2.0, 6.0));
    }

    #[test]
    fn levels_stay_ordered() {
        let levels = ScaleLevels::new(2.0, 1.0, 0.5);
        assert_eq!(levels, ScaleLevels::new(2.0, 2.0, 2.0));
        assert_eq!(ScaleLevels::new(f64::NAN, 1.0, f64::INFINITY), ScaleLevels::new(0.0, 1.0, 1.0));
        let degenerate = ScalesCalculator::Fixed { multiple: 0.5 }.calculate(&input(1.0));
        assert!(degenerate.min <= degenerate.medium && degenerate.medium <= degenerate.max);
    }

    #[test]
    fn unspecified_sizes_yield_zero_levels() {
        let mut input = input(1.0);
        input.viewport = Size::ZERO;
        assert_eq!(ScalesCalculator::DYNAMIC.calculate(&input), ScaleLevels::ZERO);
    }

    #[test]
    fn long_content_detection() {
        let decider = LongContentDecider::default();
        let square = Size::new(516.0, 516.0);
        assert!(decider.is_long(Size::new(86.0, 1522.0), square));
        assert!(!decider.is_long(Size::new(400.0, 600.0), square));
        // Portrait viewport, landscape content: needs the larger multiple.
        let portrait = Size::new(1000.0, 2000.0);
        assert!(!decider.is_long(Size::new(2000.0, 1000.0), portrait));
        assert!(decider.is_long(Size::new(3000.0, 1000.0), portrait));
    }

    #[test]
    fn read_mode_respects_directions() {
        let square = Size::new(516.0, 516.0);
        let tall = Size::new(86.0, 1522.0);
        let wide = Size::new(1522.0, 86.0);
        let vertical_only = ReadMode {
            directions: ReadModeDirections::VERTICAL,
            ..ReadMode::default()
        };
        assert!(vertical_only.accepts(tall, square, FitMode::Fit));
        assert!(!vertical_only.accepts(wide, square, FitMode::Fit));
        assert!(ReadMode::default().accepts(wide, square, FitMode::Inside));
        assert!(!ReadMode::default().accepts(tall, square, FitMode::FillBounds));
    }

    #[test]
    fn read_mode_transform_fills_cross_axis_from_start() {
        let region = Rect::new(0.0, 0.0, 516.0, 516.0);
        let t = read_mode_transform(Size::new(86.0, 1522.0), region, Alignment::Center);
        assert_eq!(t.scale, ScaleFactor::uniform(6.0));
        assert_eq!(t.offset, Vec2::ZERO);

        let t = read_mode_transform(Size::new(86.0, 1522.0), region, Alignment::BottomEnd);
        assert!(approx(t.offset.y, 516.0 - 1522.0 * 6.0));
        assert!(approx(t.offset.x, 0.0));
    }
}
