// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focal-point conversions between pointer, viewport and content space.
//!
//! A viewport centroid is normalized to the *unzoomed* viewport; a content
//! centroid is normalized to the content size in the viewport frame (that is,
//! after rotation). Converting through a [`ContentLayout`] and back is exact
//! up to floating point precision for points inside the placed content, which
//! is what lets a focal point survive a fit mode or viewport size change.

use kurbo::{Point, Size, Vec2};

use crate::geometry::{Centroid, is_unspecified, safe_div};
use crate::layout::ContentLayout;

/// Normalizes a pointer position against the unzoomed viewport.
///
/// `scale` and `translation` are the current user transform; the pointer is
/// mapped back through them before normalizing. Returns
/// [`Centroid::ORIGIN`] for an unspecified viewport.
#[must_use]
pub fn touch_to_viewport_centroid(
    viewport: Size,
    scale: f64,
    translation: Vec2,
    touch: Point,
) -> Centroid {
    if is_unspecified(viewport) {
        return Centroid::ORIGIN;
    }
    let x = safe_div(touch.x - translation.x, scale);
    let y = safe_div(touch.y - translation.y, scale);
    Centroid::of_point_in(Point::new(x, y), viewport)
}

/// Maps a viewport centroid onto the content through `layout`.
///
/// Points outside the placed content are clamped onto its nearest edge.
#[must_use]
pub fn viewport_centroid_to_content_centroid(
    layout: &ContentLayout,
    centroid: Centroid,
) -> Centroid {
    if layout.is_empty() {
        return Centroid::ORIGIN;
    }
    let placement = layout.placement_rect();
    let window = layout.visible_window();
    let pt = centroid.to_point_in(layout.viewport);
    let local_x = (pt.x - placement.x0).clamp(0.0, placement.width());
    let local_y = (pt.y - placement.y0).clamp(0.0, placement.height());
    let content_pt = Point::new(
        safe_div(local_x + window.x0, layout.scale.x),
        safe_div(local_y + window.y0, layout.scale.y),
    );
    Centroid::of_point_in(content_pt, layout.content)
}

/// Maps a content centroid back into the unzoomed viewport through `layout`.
///
/// Content outside the base visible window is clamped onto its nearest edge.
#[must_use]
pub fn content_centroid_to_viewport_centroid(
    layout: &ContentLayout,
    centroid: Centroid,
) -> Centroid {
    if layout.is_empty() {
        return Centroid::ORIGIN;
    }
    let placement = layout.placement_rect();
    let window = layout.visible_window();
    let scaled = layout.scale.scale_vec(centroid.to_point_in(layout.content).to_vec2());
    let local_x = (scaled.x - window.x0).clamp(0.0, window.width());
    let local_y = (scaled.y - window.y0).clamp(0.0, window.height());
    Centroid::of_point_in(
        Point::new(placement.x0 + local_x, placement.y0 + local_y),
        layout.viewport,
    )
}

/// Translation that brings `centroid` of the unzoomed viewport to the
/// viewport center at user scale `scale`.
///
/// Each axis is clamped into `[-scaled_viewport, 0]`. Zooming from the
/// identity about the viewport center therefore keeps the center fixed.
#[must_use]
pub fn scale_target_translation(viewport: Size, scale: f64, centroid: Centroid) -> Vec2 {
    if is_unspecified(viewport) || !(scale.is_finite() && scale > 0.0) {
        return Vec2::ZERO;
    }
    let scaled = Size::new(viewport.width * scale, viewport.height * scale);
    let focus = centroid.to_point_in(scaled);
    Vec2::new(
        -(focus.x - viewport.width / 2.0).clamp(0.0, scaled.width),
        -(focus.y - viewport.height / 2.0).clamp(0.0, scaled.height),
    )
}

/// Translation that keeps the viewport point `anchor` fixed while the user
/// scale changes from `current_scale` to `target_scale`.
#[must_use]
pub fn anchored_scale_translation(
    current_scale: f64,
    current_translation: Vec2,
    target_scale: f64,
    anchor: Point,
) -> Vec2 {
    let ratio = safe_div(target_scale, current_scale);
    if ratio == 0.0 {
        return current_translation;
    }
    let anchor = anchor.to_vec2();
    anchor - (anchor - current_translation) * ratio
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{
        anchored_scale_translation, content_centroid_to_viewport_centroid, scale_target_translation,
        touch_to_viewport_centroid, viewport_centroid_to_content_centroid,
    };
    use crate::geometry::{Centroid, ContainerWhitespace};
    use crate::layout::ContentLayout;
    use crate::modes::{Alignment, FitMode};

    fn layout(fit: FitMode, alignment: Alignment) -> ContentLayout {
        ContentLayout::resolve(
            Size::new(800.0, 400.0),
            Size::new(1000.0, 1000.0),
            fit,
            alignment,
            ContainerWhitespace::ZERO,
        )
    }

    fn assert_centroid_eq(a: Centroid, b: Centroid) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn touch_centroid_inverts_user_transform() {
        let viewport = Size::new(1000.0, 2000.0);
        let c = touch_to_viewport_centroid(viewport, 2.0, Vec2::new(-500.0, -1000.0), Point::new(500.0, 1000.0));
        assert_centroid_eq(c, Centroid::CENTER);
        let clamped = touch_to_viewport_centroid(viewport, 1.0, Vec2::ZERO, Point::new(-10.0, 5000.0));
        assert_centroid_eq(clamped, Centroid::new(0.0, 1.0));
        assert_eq!(
            touch_to_viewport_centroid(Size::ZERO, 1.0, Vec2::ZERO, Point::new(1.0, 1.0)),
            Centroid::ORIGIN
        );
    }

    #[test]
    fn viewport_to_content_through_fit_layout() {
        let layout = layout(FitMode::Fit, Alignment::Center);
        let content = viewport_centroid_to_content_centroid(&layout, Centroid::new(0.3, 0.4));
        assert_centroid_eq(content, Centroid::new(0.3, 0.3));
        // Above the placed content clamps to its top edge.
        let top = viewport_centroid_to_content_centroid(&layout, Centroid::new(0.5, 0.1));
        assert_centroid_eq(top, Centroid::new(0.5, 0.0));
    }

    #[test]
    fn content_to_viewport_through_crop_layout() {
        let layout = layout(FitMode::Crop, Alignment::Center);
        let viewport = content_centroid_to_viewport_centroid(&layout, Centroid::new(0.5, 0.5));
        assert_centroid_eq(viewport, Centroid::CENTER);
        // Cropped away on the left: clamps to the viewport's left edge.
        let left = content_centroid_to_viewport_centroid(&layout, Centroid::new(0.1, 0.5));
        assert_centroid_eq(left, Centroid::new(0.0, 0.5));
    }

    #[test]
    fn round_trip_inside_placed_content() {
        for fit in [FitMode::None, FitMode::Fit, FitMode::FillHeight, FitMode::FillBounds, FitMode::Crop] {
            for alignment in Alignment::ALL {
                let layout = layout(fit, alignment);
                let placement = layout.placement_rect();
                for (fx, fy) in [(0.25, 0.25), (0.5, 0.5), (0.9, 0.1)] {
                    let c = Centroid::of_point_in(
                        Point::new(
                            placement.x0 + placement.width() * fx,
                            placement.y0 + placement.height() * fy,
                        ),
                        layout.viewport,
                    );
                    let back = content_centroid_to_viewport_centroid(
                        &layout,
                        viewport_centroid_to_content_centroid(&layout, c),
                    );
                    assert_centroid_eq(back, c);
                }
            }
        }
    }

    #[test]
    fn empty_layout_maps_to_origin() {
        let empty = ContentLayout::EMPTY;
        assert_eq!(
            viewport_centroid_to_content_centroid(&empty, Centroid::CENTER),
            Centroid::ORIGIN
        );
        assert_eq!(
            content_centroid_to_viewport_centroid(&empty, Centroid::CENTER),
            Centroid::ORIGIN
        );
    }

    #[test]
    fn scale_target_translation_closed_form() {
        let t = scale_target_translation(Size::new(1000.0, 2000.0), 2.0, Centroid::CENTER);
        assert_eq!(t, Vec2::new(-500.0, -1000.0));
        let corner = scale_target_translation(Size::new(1000.0, 2000.0), 2.0, Centroid::ORIGIN);
        assert_eq!(corner, Vec2::new(0.0, 0.0));
        assert_eq!(
            scale_target_translation(Size::ZERO, 2.0, Centroid::CENTER),
            Vec2::ZERO
        );
    }

    #[test]
    fn anchored_translation_keeps_anchor_fixed() {
        let anchor = Point::new(300.0, 700.0);
        let from_scale = 1.5;
        let from = Vec2::new(-120.0, -40.0);
        let to_scale = 4.0;
        let to = anchored_scale_translation(from_scale, from, to_scale, anchor);
        // The content point under the anchor is the same before and after.
        let before = (anchor.to_vec2() - from) / from_scale;
        let after = (anchor.to_vec2() - to) / to_scale;
        assert!((before - after).hypot() < 1e-9);
    }
}
