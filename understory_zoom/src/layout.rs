// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base placement of content inside the viewport.
//!
//! Everything here is a pure function of the viewport size, the content size
//! (already rotated into the viewport frame), the [`FitMode`], the
//! [`Alignment`] and the [`ContainerWhitespace`]. No user pan/zoom is
//! involved; see [`crate::ZoomEngine`] for that.

use kurbo::{Rect, Size, Vec2};

use crate::geometry::{ContainerWhitespace, ScaleFactor, is_unspecified, safe_div};
use crate::modes::{Alignment, FitMode};

/// Scale factor that maps `content` into `viewport` under `fit`.
///
/// Returns [`ScaleFactor::ZERO`] if either size is unspecified.
#[must_use]
pub fn scale_factor(content: Size, viewport: Size, fit: FitMode) -> ScaleFactor {
    if is_unspecified(content) || is_unspecified(viewport) {
        return ScaleFactor::ZERO;
    }
    let width_scale = safe_div(viewport.width, content.width);
    let height_scale = safe_div(viewport.height, content.height);
    match fit {
        FitMode::None => ScaleFactor::ONE,
        FitMode::Fit => ScaleFactor::uniform(width_scale.min(height_scale)),
        FitMode::Inside => ScaleFactor::uniform(width_scale.min(height_scale).min(1.0)),
        FitMode::FillWidth => ScaleFactor::uniform(width_scale),
        FitMode::FillHeight => ScaleFactor::uniform(height_scale),
        FitMode::FillBounds => ScaleFactor::new(width_scale, height_scale),
        FitMode::Crop => ScaleFactor::uniform(width_scale.max(height_scale)),
    }
}

/// Placement of scaled content inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentLayout {
    /// Full viewport size.
    pub viewport: Size,
    /// Region of the viewport left after whitespace insets.
    pub region: Rect,
    /// Content size in the viewport frame (after rotation).
    pub content: Size,
    /// Fit-mode scale factor.
    pub scale: ScaleFactor,
    /// Scaled content rect in viewport coordinates, possibly extending past
    /// the region when the content overflows.
    pub display_rect: Rect,
}

impl ContentLayout {
    /// Layout with nothing placed, used while sizes are unspecified.
    pub const EMPTY: Self = Self {
        viewport: Size::ZERO,
        region: Rect::ZERO,
        content: Size::ZERO,
        scale: ScaleFactor::ZERO,
        display_rect: Rect::ZERO,
    };

    /// Resolves the layout of `content` inside `viewport`.
    #[must_use]
    pub fn resolve(
        content: Size,
        viewport: Size,
        fit: FitMode,
        alignment: Alignment,
        whitespace: ContainerWhitespace,
    ) -> Self {
        if is_unspecified(content) || is_unspecified(viewport) {
            return Self::EMPTY;
        }
        let region = whitespace.inner_rect(viewport);
        if region.area() <= 0.0 {
            return Self::EMPTY;
        }
        let scale = scale_factor(content, region.size(), fit);
        let scaled = scale.scale_size(content);
        let left = region.x0 + alignment.horizontal().align(scaled.width, region.width());
        let top = region.y0 + alignment.vertical().align(scaled.height, region.height());
        Self {
            viewport,
            region,
            content,
            scale,
            display_rect: Rect::new(left, top, left + scaled.width, top + scaled.height),
        }
    }

    /// Returns `true` if nothing could be placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_rect.area() <= 0.0
    }

    /// Translation part of the base transform: the unclamped content origin.
    #[must_use]
    pub fn base_offset(&self) -> Vec2 {
        self.display_rect.origin().to_vec2()
    }

    /// The display rect clipped to the region: the area of the viewport the
    /// unzoomed content actually covers. Never extends past the region.
    #[must_use]
    pub fn placement_rect(&self) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        let r = self.display_rect;
        let x0 = r.x0.max(self.region.x0);
        let y0 = r.y0.max(self.region.y0);
        let x1 = r.x1.min(self.region.x1).max(x0);
        let y1 = r.y1.min(self.region.y1).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// The part of the scaled content that is visible before any zoom, in
    /// content-local scaled coordinates (origin at the content's top-left).
    ///
    /// On an axis where the content fits, this spans the whole scaled length.
    #[must_use]
    pub fn visible_window(&self) -> Rect {
        self.placement_rect() - self.base_offset()
    }

    /// [`ContentLayout::visible_window`] expressed in content units.
    #[must_use]
    pub fn base_visible_rect(&self) -> Rect {
        let window = self.visible_window();
        let inverse = ScaleFactor::ONE.div(self.scale);
        inverse.scale_rect(window)
    }
}

/// Rectangle covered by `content` in `viewport` under `fit` and `alignment`.
///
/// Clamped to the viewport, so overflowing content yields the viewport
/// itself on that axis.
#[must_use]
pub fn placement_rect(content: Size, viewport: Size, fit: FitMode, alignment: Alignment) -> Rect {
    ContentLayout::resolve(content, viewport, fit, alignment, ContainerWhitespace::ZERO)
        .placement_rect()
}

/// Sub-rect of the scaled content shown by the unzoomed layout, in
/// content-local scaled coordinates. Divide by [`scale_factor`] for content
/// units.
#[must_use]
pub fn content_visible_window(
    content: Size,
    viewport: Size,
    fit: FitMode,
    alignment: Alignment,
) -> Rect {
    ContentLayout::resolve(content, viewport, fit, alignment, ContainerWhitespace::ZERO)
        .visible_window()
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ContentLayout, content_visible_window, placement_rect, scale_factor};
    use crate::geometry::{ContainerWhitespace, ScaleFactor};
    use crate::modes::{Alignment, FitMode};

    const VIEWPORT: Size = Size::new(1000.0, 1000.0);
    const CONTENT: Size = Size::new(800.0, 400.0);

    #[test]
    fn scale_factor_per_fit_mode() {
        let cases = [
            (FitMode::None, ScaleFactor::ONE),
            (FitMode::Inside, ScaleFactor::ONE),
            (FitMode::Fit, ScaleFactor::uniform(1.25)),
            (FitMode::FillWidth, ScaleFactor::uniform(1.25)),
            (FitMode::FillHeight, ScaleFactor::uniform(2.5)),
            (FitMode::FillBounds, ScaleFactor::new(1.25, 2.5)),
            (FitMode::Crop, ScaleFactor::uniform(2.5)),
        ];
        for (fit, expected) in cases {
            assert_eq!(scale_factor(CONTENT, VIEWPORT, fit), expected, "{fit:?}");
        }
    }

    #[test]
    fn inside_scales_down_but_never_up() {
        let big = Size::new(2000.0, 1000.0);
        assert_eq!(
            scale_factor(big, VIEWPORT, FitMode::Inside),
            ScaleFactor::uniform(0.5)
        );
        assert_eq!(
            placement_rect(big, VIEWPORT, FitMode::Inside, Alignment::Center),
            Rect::new(0.0, 250.0, 1000.0, 750.0)
        );
    }

    #[test]
    fn unspecified_sizes_produce_zero_results() {
        for fit in [FitMode::None, FitMode::Fit, FitMode::Crop] {
            assert_eq!(scale_factor(Size::ZERO, VIEWPORT, fit), ScaleFactor::ZERO);
            assert_eq!(scale_factor(CONTENT, Size::ZERO, fit), ScaleFactor::ZERO);
            assert_eq!(
                placement_rect(CONTENT, Size::ZERO, fit, Alignment::Center),
                Rect::ZERO
            );
            assert_eq!(
                content_visible_window(Size::ZERO, VIEWPORT, fit, Alignment::Center),
                Rect::ZERO
            );
        }
    }

    #[test]
    fn placement_table() {
        let cases = [
            (FitMode::None, Alignment::TopStart, Rect::new(0.0, 0.0, 800.0, 400.0)),
            (FitMode::None, Alignment::Center, Rect::new(100.0, 300.0, 900.0, 700.0)),
            (FitMode::None, Alignment::BottomEnd, Rect::new(200.0, 600.0, 1000.0, 1000.0)),
            (FitMode::Inside, Alignment::CenterEnd, Rect::new(200.0, 300.0, 1000.0, 700.0)),
            (FitMode::Fit, Alignment::TopStart, Rect::new(0.0, 0.0, 1000.0, 500.0)),
            (FitMode::Fit, Alignment::Center, Rect::new(0.0, 250.0, 1000.0, 750.0)),
            (FitMode::Fit, Alignment::BottomEnd, Rect::new(0.0, 500.0, 1000.0, 1000.0)),
            (FitMode::FillWidth, Alignment::BottomCenter, Rect::new(0.0, 500.0, 1000.0, 1000.0)),
            (FitMode::FillHeight, Alignment::Center, Rect::new(0.0, 0.0, 1000.0, 1000.0)),
            (FitMode::FillBounds, Alignment::TopEnd, Rect::new(0.0, 0.0, 1000.0, 1000.0)),
            (FitMode::Crop, Alignment::BottomStart, Rect::new(0.0, 0.0, 1000.0, 1000.0)),
        ];
        for (fit, alignment, expected) in cases {
            assert_eq!(
                placement_rect(CONTENT, VIEWPORT, fit, alignment),
                expected,
                "{fit:?} {alignment:?}"
            );
        }
    }

    #[test]
    fn visible_window_follows_alignment_on_overflowing_axis() {
        let cases = [
            (Alignment::CenterStart, Rect::new(0.0, 0.0, 1000.0, 1000.0)),
            (Alignment::Center, Rect::new(500.0, 0.0, 1500.0, 1000.0)),
            (Alignment::CenterEnd, Rect::new(1000.0, 0.0, 2000.0, 1000.0)),
        ];
        for (alignment, expected) in cases {
            assert_eq!(
                content_visible_window(CONTENT, VIEWPORT, FitMode::Crop, alignment),
                expected,
                "{alignment:?}"
            );
        }
        // Fitting content shows its whole scaled extent.
        assert_eq!(
            content_visible_window(CONTENT, VIEWPORT, FitMode::Fit, Alignment::Center),
            Rect::new(0.0, 0.0, 1000.0, 500.0)
        );
    }

    #[test]
    fn base_visible_rect_is_in_content_units() {
        let layout = ContentLayout::resolve(
            CONTENT,
            VIEWPORT,
            FitMode::Crop,
            Alignment::Center,
            ContainerWhitespace::ZERO,
        );
        assert_eq!(layout.base_visible_rect(), Rect::new(200.0, 0.0, 600.0, 400.0));
    }

    #[test]
    fn whitespace_shrinks_the_layout_region() {
        let layout = ContentLayout::resolve(
            CONTENT,
            VIEWPORT,
            FitMode::Fit,
            Alignment::Center,
            ContainerWhitespace::uniform(100.0),
        );
        assert_eq!(layout.scale, ScaleFactor::uniform(1.0));
        assert_eq!(layout.display_rect, Rect::new(100.0, 300.0, 900.0, 700.0));
        assert_eq!(layout.placement_rect(), layout.display_rect);
    }
}
