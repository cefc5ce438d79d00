// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legal pan range of the user transform and the scroll edges it implies.

use kurbo::{Rect, Vec2};

use crate::geometry::{Edge, ScaleFactor, ScrollEdge};
use crate::layout::ContentLayout;
use crate::modes::{Alignment, AxisAlignment};

/// Offsets closer than this to a bound count as touching it.
pub const EDGE_TOLERANCE: f64 = 1.0;

/// Range of user offsets for a user scale of `scale`.
///
/// The returned rect holds the minimum offsets in `x0`/`y0` and the maximum
/// offsets in `x1`/`y1`. At `scale <= 1` (or for an empty layout) the range is
/// [`Rect::ZERO`]: nothing can be panned.
///
/// On an axis where the zoomed content is larger than the layout region the
/// content may be dragged until its edges meet the region's edges. On an axis
/// where it is not, the range collapses to the single offset that keeps the
/// content aligned inside the region, so that axis only moves with the scale.
///
/// With `limit_to_base_visible` the content rect is first clipped to the part
/// visible without zoom, which keeps cropped-away content out of reach.
#[must_use]
pub fn user_offset_bounds(
    layout: &ContentLayout,
    alignment: Alignment,
    scale: f64,
    limit_to_base_visible: bool,
) -> Rect {
    if layout.is_empty() || !(scale.is_finite() && scale > 1.0) {
        return Rect::ZERO;
    }
    let content = if limit_to_base_visible {
        layout.placement_rect()
    } else {
        layout.display_rect
    };
    let scaled = ScaleFactor::uniform(scale).scale_rect(content);
    let region = layout.region;
    let (x0, x1) = axis_bounds(
        scaled.x0,
        scaled.x1,
        region.x0,
        region.x1,
        alignment.horizontal(),
    );
    let (y0, y1) = axis_bounds(
        scaled.y0,
        scaled.y1,
        region.y0,
        region.y1,
        alignment.vertical(),
    );
    Rect::new(x0, y0, x1, y1)
}

fn axis_bounds(
    start: f64,
    end: f64,
    region_start: f64,
    region_end: f64,
    alignment: AxisAlignment,
) -> (f64, f64) {
    if end - start > region_end - region_start {
        return (region_end - end, region_start - start);
    }
    let offset = match alignment {
        AxisAlignment::Start => region_start - start,
        AxisAlignment::Center => (region_start + region_end) / 2.0 - (start + end) / 2.0,
        AxisAlignment::End => region_end - end,
    };
    (offset, offset)
}

/// Clamps `offset` into `bounds` as returned by [`user_offset_bounds`].
#[must_use]
pub fn clamp_offset(offset: Vec2, bounds: Rect) -> Vec2 {
    Vec2::new(
        offset.x.clamp(bounds.x0, bounds.x1),
        offset.y.clamp(bounds.y0, bounds.y1),
    )
}

/// Which ends of each axis the user offset has reached within `bounds`.
#[must_use]
pub fn scroll_edge(bounds: Rect, offset: Vec2) -> ScrollEdge {
    ScrollEdge {
        horizontal: axis_edge(bounds.x0, bounds.x1, offset.x),
        vertical: axis_edge(bounds.y0, bounds.y1, offset.y),
    }
}

fn axis_edge(min: f64, max: f64, offset: f64) -> Edge {
    if max - min < EDGE_TOLERANCE {
        Edge::Both
    } else if offset >= max - EDGE_TOLERANCE {
        // Largest offset: the content's leading edge is in view.
        Edge::Start
    } else if offset <= min + EDGE_TOLERANCE {
        Edge::End
    } else {
        Edge::None
    }
}

/// A scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// Scroll direction along an [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the start: reveals content to the left or above.
    Backward,
    /// Toward the end: reveals content to the right or below.
    Forward,
}

/// Returns `true` if the view can scroll along `axis` in `direction`.
#[must_use]
pub fn can_scroll(edge: ScrollEdge, axis: Axis, direction: ScrollDirection) -> bool {
    let edge = match axis {
        Axis::Horizontal => edge.horizontal,
        Axis::Vertical => edge.vertical,
    };
    match direction {
        ScrollDirection::Forward => !matches!(edge, Edge::End | Edge::Both),
        ScrollDirection::Backward => !matches!(edge, Edge::Start | Edge::Both),
    }
}
