// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Zoom: a headless zoom/pan engine for a single piece of content.
//!
//! This crate models how content (an image, a page, a canvas) of a known size
//! is placed, zoomed and panned inside a viewport. It focuses on:
//! - Fitting content into the viewport with a [`FitMode`] and [`Alignment`],
//!   optionally rotated in quarter turns and inset by [`ContainerWhitespace`].
//! - Deriving zoom levels (min/medium/max) with a [`ScalesCalculator`].
//! - Keeping a user pan/zoom layer inside legal offset bounds, and reporting
//!   the [`ScrollEdge`]s it has reached.
//! - Preserving the focused content point across layout changes.
//! - Gesture policy: disabled-gesture masks, rubber-band overshoot and
//!   double-tap step cycling.
//!
//! It does **not** recognize gestures, render, decode images or animate.
//! Callers are expected to:
//! - Feed already classified gesture steps into
//!   [`ZoomEngine::gesture_transform`] and [`ZoomEngine::gesture_end`].
//! - Render using [`ZoomEngine::transform`] (for example via
//!   [`ZoomTransform::to_affine`]).
//! - Drive animations themselves from the returned [`TransformUpdate`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_zoom::{ScalesCalculator, ZoomEngine};
//!
//! // An 800x400 image in a 1000x1000 viewport, fitted and centered.
//! let mut engine = ZoomEngine::new(Size::new(1000.0, 1000.0), Size::new(800.0, 400.0));
//! assert_eq!(engine.content_display_rect(), Rect::new(0.0, 250.0, 1000.0, 750.0));
//!
//! engine.set_scales_calculator(ScalesCalculator::FIXED);
//! let levels = engine.scale_levels();
//! assert_eq!((levels.min, levels.medium, levels.max), (1.25, 3.75, 11.25));
//!
//! // Zoom far past the maximum: the scale is clamped.
//! engine.scale(100.0, None, false);
//! assert_eq!(engine.transform().scale.x, 11.25);
//! ```
//!
//! ## Animation
//!
//! Operations take an `animated` flag. Animated operations return the clamped
//! target without applying it:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_zoom::ZoomEngine;
//!
//! let mut engine = ZoomEngine::new(Size::new(500.0, 500.0), Size::new(500.0, 500.0));
//! let update = engine.scale(3.0, None, true);
//! assert_eq!(engine.transform().scale.x, 1.0);
//!
//! for frame in 1..=10 {
//!     engine.set_user_transform(update.at(f64::from(frame) / 10.0));
//! }
//! assert!((engine.transform().scale.x - 3.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The final transform is a base transform (fit, alignment, rotation)
//!   followed by a uniform user transform (pan and zoom).
//! - Scales given to and reported by [`ZoomEngine`] are total scales.
//! - Sizes that are not yet known are passed as [`kurbo::Size::ZERO`]; every
//!   query then reports zeros rather than failing.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod centroid;
mod engine;
mod error;
mod geometry;
mod gestures;
mod layout;
mod modes;
mod scales;
mod transform;

pub use bounds::{
    Axis, EDGE_TOLERANCE, ScrollDirection, can_scroll, clamp_offset, scroll_edge,
    user_offset_bounds,
};
pub use centroid::{
    anchored_scale_translation, content_centroid_to_viewport_centroid, scale_target_translation,
    touch_to_viewport_centroid, viewport_centroid_to_content_centroid,
};
pub use engine::{ZoomEngine, ZoomEngineDebugInfo};
pub use error::RotationError;
pub use geometry::{
    Centroid, ContainerWhitespace, Edge, ScaleFactor, ScrollEdge, is_unspecified, limit_rect_to,
};
pub use gestures::{
    GestureTypes, RUBBER_BAND_RATIO, STEP_SCALE_TOLERANCE, next_step_scale, rubber_band_scale,
};
pub use layout::{ContentLayout, content_visible_window, placement_rect, scale_factor};
pub use modes::{Alignment, AxisAlignment, FitMode, LayoutDirection};
pub use scales::{
    LongContentDecider, ReadMode, ReadModeDirections, ScaleLevels, ScalesCalculator, ScalesInput,
    read_mode_transform,
};
pub use transform::{Rotation, TransformUpdate, ZoomTransform};
