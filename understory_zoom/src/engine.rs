// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::bounds::{
    Axis, ScrollDirection, can_scroll, clamp_offset, scroll_edge, user_offset_bounds,
};
use crate::centroid::{
    anchored_scale_translation, content_centroid_to_viewport_centroid, scale_target_translation,
    touch_to_viewport_centroid, viewport_centroid_to_content_centroid,
};
use crate::error::RotationError;
use crate::geometry::{Centroid, ContainerWhitespace, ScaleFactor, ScrollEdge, safe_div};
use crate::gestures::{GestureTypes, next_step_scale, rubber_band_scale};
use crate::layout::ContentLayout;
use crate::modes::{Alignment, FitMode, LayoutDirection};
use crate::scales::{ReadMode, ScaleLevels, ScalesCalculator, ScalesInput, read_mode_transform};
use crate::transform::{Rotation, TransformUpdate, ZoomTransform};

/// Stateful zoom engine for one piece of content in one viewport.
///
/// `ZoomEngine` owns the inputs (sizes, fit mode, alignment, rotation and
/// policies) and keeps every derived value in sync with them: zoom levels,
/// the base/user/final transforms, offset bounds, scroll edges and the
/// display/visible rectangles. Every setter and operation recomputes what it
/// affects before returning; there is no deferred work.
///
/// Animation is not part of the engine. Operations that take an `animated`
/// flag return a [`TransformUpdate`]; when the flag is set the engine leaves
/// its state untouched and the caller's animator drives
/// [`ZoomEngine::set_user_transform`] with intermediate values.
///
/// All scales passed to and returned from the engine are *total* scales
/// (base × user), measured on the horizontal axis.
#[derive(Clone, Debug)]
pub struct ZoomEngine {
    viewport: Size,
    content: Size,
    content_origin: Size,
    fit: FitMode,
    alignment: Alignment,
    layout_direction: LayoutDirection,
    rotation: Rotation,
    whitespace: ContainerWhitespace,
    scales_calculator: ScalesCalculator,
    read_mode: Option<ReadMode>,
    rubber_band_scale: bool,
    three_step_scale: bool,
    limit_offset_within_base_visible_rect: bool,
    disabled_gestures: GestureTypes,

    layout: ContentLayout,
    levels: ScaleLevels,
    base: ZoomTransform,
    user: ZoomTransform,
    transform: ZoomTransform,
    offset_bounds: Rect,
    scroll_edge: ScrollEdge,
    /// Undamped total scale accumulated by the gesture in progress.
    gesture_scale: Option<f64>,
}

impl ZoomEngine {
    /// Creates an engine showing `content` inside `viewport`.
    ///
    /// Either size may be [`Size::ZERO`] until it is known; the engine then
    /// reports zero-valued rects and transforms and becomes fully usable once
    /// both sizes are set.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        let mut engine = Self {
            viewport,
            content,
            content_origin: Size::ZERO,
            fit: FitMode::default(),
            alignment: Alignment::default(),
            layout_direction: LayoutDirection::default(),
            rotation: Rotation::default(),
            whitespace: ContainerWhitespace::ZERO,
            scales_calculator: ScalesCalculator::default(),
            read_mode: None,
            rubber_band_scale: true,
            three_step_scale: false,
            limit_offset_within_base_visible_rect: false,
            disabled_gestures: GestureTypes::empty(),
            layout: ContentLayout::EMPTY,
            levels: ScaleLevels::ZERO,
            base: ZoomTransform::IDENTITY,
            user: ZoomTransform::IDENTITY,
            transform: ZoomTransform::IDENTITY,
            offset_bounds: Rect::ZERO,
            scroll_edge: ScrollEdge::LOCKED,
            gesture_scale: None,
        };
        engine.reset();
        engine
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size, keeping the focused content point centered.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        self.viewport = size;
        self.relayout();
    }

    /// Returns the content size, before rotation.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Sets the content size and resets the user transform.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content == size {
            return;
        }
        self.content = size;
        self.reset();
    }

    /// Returns the original (full resolution) content size, if known.
    #[must_use]
    pub fn content_origin_size(&self) -> Size {
        self.content_origin
    }

    /// Sets the original content size used by [`ScalesCalculator::Dynamic`].
    ///
    /// Pass [`Size::ZERO`] if unknown.
    pub fn set_content_origin_size(&mut self, size: Size) {
        if self.content_origin == size {
            return;
        }
        self.content_origin = size;
        self.reset();
    }

    /// Returns the fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit
    }

    /// Sets the fit mode, keeping the focused content point centered.
    pub fn set_fit_mode(&mut self, fit: FitMode) {
        if self.fit == fit {
            return;
        }
        self.fit = fit;
        self.relayout();
    }

    /// Returns the alignment as configured (before layout direction).
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Sets the alignment, keeping the focused content point centered.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment == alignment {
            return;
        }
        self.alignment = alignment;
        self.relayout();
    }

    /// Returns the layout direction.
    #[must_use]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Sets the layout direction, which mirrors start/end alignment and the
    /// left/right whitespace.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.layout_direction == direction {
            return;
        }
        self.layout_direction = direction;
        self.relayout();
    }

    /// Returns the container whitespace as configured.
    #[must_use]
    pub fn whitespace(&self) -> ContainerWhitespace {
        self.whitespace
    }

    /// Sets the insets subtracted from the viewport before layout.
    pub fn set_whitespace(&mut self, whitespace: ContainerWhitespace) {
        if self.whitespace == whitespace {
            return;
        }
        self.whitespace = whitespace;
        self.relayout();
    }

    /// Returns the current rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotates the content to `degrees`, a multiple of 90.
    ///
    /// The base transform and zoom levels are rebuilt for the rotated frame;
    /// the user transform is kept and re-clamped.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::NotRightAngle`] and leaves the engine
    /// unchanged if `degrees` is not a multiple of 90.
    pub fn rotate(&mut self, degrees: i32) -> Result<(), RotationError> {
        let rotation = Rotation::from_degrees(degrees).inspect_err(|err| {
            warn!(degrees, %err, "rejected rotation");
        })?;
        if self.rotation == rotation {
            return Ok(());
        }
        self.rotation = rotation;
        self.gesture_scale = None;
        self.rebuild_base();
        self.rebuild_levels(self.initial_user().1);
        let user = self.clamp_user(self.user);
        self.commit(user);
        debug!(degrees = rotation.degrees(), "rotated");
        Ok(())
    }

    /// Returns the zoom-level policy.
    #[must_use]
    pub fn scales_calculator(&self) -> ScalesCalculator {
        self.scales_calculator
    }

    /// Sets the zoom-level policy and resets the user transform.
    pub fn set_scales_calculator(&mut self, calculator: ScalesCalculator) {
        if self.scales_calculator == calculator {
            return;
        }
        self.scales_calculator = calculator;
        self.reset();
    }

    /// Returns the read-mode policy, if enabled.
    #[must_use]
    pub fn read_mode(&self) -> Option<ReadMode> {
        self.read_mode
    }

    /// Enables or disables read mode and resets the user transform.
    pub fn set_read_mode(&mut self, read_mode: Option<ReadMode>) {
        if self.read_mode == read_mode {
            return;
        }
        self.read_mode = read_mode;
        self.reset();
    }

    /// Returns whether gestures may overshoot the zoom levels.
    #[must_use]
    pub fn rubber_band_scale(&self) -> bool {
        self.rubber_band_scale
    }

    /// Allows gesture zoom to temporarily overshoot the zoom levels.
    pub fn set_rubber_band_scale(&mut self, enabled: bool) {
        self.rubber_band_scale = enabled;
    }

    /// Returns whether [`ZoomEngine::switch_scale`] cycles through three steps.
    #[must_use]
    pub fn three_step_scale(&self) -> bool {
        self.three_step_scale
    }

    /// Makes [`ZoomEngine::switch_scale`] cycle min → medium → max instead of
    /// min → medium.
    pub fn set_three_step_scale(&mut self, enabled: bool) {
        self.three_step_scale = enabled;
    }

    /// Returns whether panning is limited to the unzoomed visible content.
    #[must_use]
    pub fn limit_offset_within_base_visible_rect(&self) -> bool {
        self.limit_offset_within_base_visible_rect
    }

    /// Limits panning to the part of the content visible without zoom.
    pub fn set_limit_offset_within_base_visible_rect(&mut self, enabled: bool) {
        if self.limit_offset_within_base_visible_rect == enabled {
            return;
        }
        self.limit_offset_within_base_visible_rect = enabled;
        let user = self.clamp_user(self.user);
        self.commit(user);
    }

    /// Returns the disabled-gesture mask.
    #[must_use]
    pub fn disabled_gestures(&self) -> GestureTypes {
        self.disabled_gestures
    }

    /// Sets the disabled-gesture mask.
    pub fn set_disabled_gestures(&mut self, disabled: GestureTypes) {
        self.disabled_gestures = disabled;
    }

    /// Current zoom levels.
    #[must_use]
    pub fn scale_levels(&self) -> ScaleLevels {
        self.levels
    }

    /// Transform derived from the fit mode, alignment and rotation alone.
    #[must_use]
    pub fn base_transform(&self) -> ZoomTransform {
        self.base
    }

    /// Pan and zoom applied on top of the base transform.
    #[must_use]
    pub fn user_transform(&self) -> ZoomTransform {
        self.user
    }

    /// Final transform: base combined with user.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Layout resolved from the current inputs.
    #[must_use]
    pub fn layout(&self) -> &ContentLayout {
        &self.layout
    }

    /// Range of user offsets at the current scale.
    #[must_use]
    pub fn user_offset_bounds(&self) -> Rect {
        self.offset_bounds
    }

    /// Edges of the content reached by the current view.
    #[must_use]
    pub fn scroll_edge(&self) -> ScrollEdge {
        self.scroll_edge
    }

    /// Returns `true` if the view can scroll along `axis` in `direction`.
    #[must_use]
    pub fn can_scroll(&self, axis: Axis, direction: ScrollDirection) -> bool {
        can_scroll(self.scroll_edge, axis, direction)
    }

    /// Content bounds in viewport coordinates under the final transform.
    #[must_use]
    pub fn content_display_rect(&self) -> Rect {
        self.display_rect(&self.transform)
    }

    /// Part of the content visible in the viewport, in content coordinates.
    #[must_use]
    pub fn content_visible_rect(&self) -> Rect {
        self.visible_rect(&self.transform)
    }

    /// Content bounds in viewport coordinates under the base transform.
    #[must_use]
    pub fn content_base_display_rect(&self) -> Rect {
        self.display_rect(&self.base)
    }

    /// Part of the content visible without zoom, in content coordinates.
    #[must_use]
    pub fn content_base_visible_rect(&self) -> Rect {
        self.visible_rect(&self.base)
    }

    /// Maps a viewport point to the content point under it, clamped onto the
    /// content.
    #[must_use]
    pub fn touch_point_to_content_point(&self, touch: Point) -> Point {
        let Some(inverse) = self.content_to_viewport().map(|a| a.inverse()) else {
            return Point::ZERO;
        };
        let pt = inverse * touch;
        Point::new(
            pt.x.clamp(0.0, self.content.width),
            pt.y.clamp(0.0, self.content.height),
        )
    }

    /// Maps a content point to where it is shown in the viewport.
    #[must_use]
    pub fn content_point_to_touch_point(&self, content_point: Point) -> Point {
        self.content_to_viewport()
            .map_or(Point::ZERO, |affine| affine * content_point)
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomEngineDebugInfo {
        ZoomEngineDebugInfo {
            viewport: self.viewport,
            content: self.content,
            content_origin: self.content_origin,
            fit: self.fit,
            alignment: self.alignment,
            rotation: self.rotation,
            levels: self.levels,
            base: self.base,
            user: self.user,
            transform: self.transform,
            offset_bounds: self.offset_bounds,
            scroll_edge: self.scroll_edge,
            content_display_rect: self.content_display_rect(),
            content_visible_rect: self.content_visible_rect(),
        }
    }

    /// Restores the initial user transform: identity, or the read-mode
    /// transform when read mode applies.
    pub fn reset(&mut self) {
        self.gesture_scale = None;
        self.rebuild_base();
        let (initial, initial_scale) = self.initial_user();
        self.rebuild_levels(initial_scale);
        let user = self.clamp_user(initial);
        self.commit(user);
        debug!(
            viewport = ?self.viewport,
            content = ?self.content,
            fit = ?self.fit,
            alignment = ?self.alignment,
            min = self.levels.min,
            medium = self.levels.medium,
            max = self.levels.max,
            read_mode = initial_scale.is_some(),
            "zoom engine reset"
        );
    }

    /// Zooms to the total scale `target`, clamped into the zoom levels.
    ///
    /// `anchor` is a position normalized to the viewport as currently shown;
    /// the content under it stays in place. It defaults to the viewport
    /// center.
    pub fn scale(
        &mut self,
        target: f64,
        anchor: Option<Centroid>,
        animated: bool,
    ) -> TransformUpdate {
        if self.layout.is_empty() || !target.is_finite() {
            return self.transition(self.user, animated);
        }
        let user_scale = safe_div(self.levels.clamp(target), self.base.scale.x);
        let anchor = anchor.unwrap_or(Centroid::CENTER).to_point_in(self.viewport);
        let offset =
            anchored_scale_translation(self.user.scale.x, self.user.offset, user_scale, anchor);
        let to = self.clamp_user(ZoomTransform::new(ScaleFactor::uniform(user_scale), offset));
        self.transition(to, animated)
    }

    /// Pans to the user offset `target`, clamped into the offset bounds.
    pub fn offset(&mut self, target: Vec2, animated: bool) -> TransformUpdate {
        let to = self.clamp_user(ZoomTransform {
            offset: target,
            ..self.user
        });
        self.transition(to, animated)
    }

    /// Zooms to `target_scale` and centers `content_point` (in content
    /// coordinates) in the viewport as far as the offset bounds allow.
    pub fn locate(
        &mut self,
        content_point: Point,
        target_scale: f64,
        animated: bool,
    ) -> TransformUpdate {
        if self.layout.is_empty() || !target_scale.is_finite() {
            return self.transition(self.user, animated);
        }
        let user_scale = safe_div(self.levels.clamp(target_scale), self.base.scale.x);
        let point = self.base.to_affine(self.content) * content_point;
        let centroid = Centroid::of_point_in(point, self.viewport);
        let offset = scale_target_translation(self.viewport, user_scale, centroid);
        let to = self.clamp_user(ZoomTransform::new(ScaleFactor::uniform(user_scale), offset));
        self.transition(to, animated)
    }

    /// Moves to the next zoom step (see [`next_step_scale`]), keeping
    /// `anchor` in place.
    pub fn switch_scale(&mut self, anchor: Option<Centroid>, animated: bool) -> TransformUpdate {
        let target = next_step_scale(&self.levels, self.transform.scale.x, self.three_step_scale);
        self.scale(target, anchor, animated)
    }

    /// Applies a user transform directly, clamped into the zoom levels and
    /// offset bounds. This is the entry point for external animators.
    pub fn set_user_transform(&mut self, user: ZoomTransform) {
        let user = self.clamp_user(user);
        self.commit(user);
    }

    /// Applies one step of a recognized gesture: pan by `pan`, then zoom by
    /// the factor `zoom` about the viewport point `centroid`.
    ///
    /// Returns `false` without changing anything if `kind` is disabled. With
    /// rubber banding enabled the scale may overshoot the zoom levels until
    /// [`ZoomEngine::gesture_end`].
    pub fn gesture_transform(
        &mut self,
        kind: GestureTypes,
        centroid: Point,
        pan: Vec2,
        zoom: f64,
    ) -> bool {
        if self.disabled_gestures.intersects(kind) || self.layout.is_empty() {
            return false;
        }
        let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        let raw = self.gesture_scale.unwrap_or(self.transform.scale.x) * zoom;
        let total = if self.rubber_band_scale {
            self.gesture_scale = Some(raw);
            rubber_band_scale(raw, &self.levels)
        } else {
            let clamped = self.levels.clamp(raw);
            self.gesture_scale = Some(clamped);
            clamped
        };
        let user_scale = safe_div(total, self.base.scale.x);
        let offset =
            anchored_scale_translation(self.user.scale.x, self.user.offset, user_scale, centroid)
                + pan;
        let offset = if user_scale < 1.0 {
            // Shrinking below the minimum: keep the anchor, snap back on release.
            offset
        } else {
            let bounds = user_offset_bounds(
                &self.layout,
                self.resolved_alignment(),
                user_scale,
                self.limit_offset_within_base_visible_rect,
            );
            clamp_offset(offset, bounds)
        };
        self.commit(ZoomTransform::new(ScaleFactor::uniform(user_scale), offset));
        trace!(?kind, scale = total, x = offset.x, y = offset.y, "gesture");
        true
    }

    /// Ends the gesture in progress, snapping an overshooting scale back into
    /// the zoom levels about the viewport center.
    pub fn gesture_end(&mut self, animated: bool) -> TransformUpdate {
        self.gesture_scale = None;
        if self.layout.is_empty() {
            return self.transition(self.user, animated);
        }
        let current = self.user.scale.x;
        let user_scale = safe_div(
            self.levels.clamp(self.transform.scale.x),
            self.base.scale.x,
        );
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        let offset = anchored_scale_translation(current, self.user.offset, user_scale, center);
        let to = self.clamp_user(ZoomTransform::new(ScaleFactor::uniform(user_scale), offset));
        self.transition(to, animated)
    }

    /// Handles a double tap at the viewport point `touch` by switching to the
    /// next zoom step about it.
    ///
    /// Returns `None` if [`GestureTypes::DOUBLE_TAP_SCALE`] is disabled.
    pub fn double_tap(&mut self, touch: Point, animated: bool) -> Option<TransformUpdate> {
        if self.disabled_gestures.contains(GestureTypes::DOUBLE_TAP_SCALE) {
            return None;
        }
        let anchor = Centroid::of_point_in(touch, self.viewport);
        Some(self.switch_scale(Some(anchor), animated))
    }

    fn resolved_alignment(&self) -> Alignment {
        self.alignment.resolve(self.layout_direction)
    }

    fn rotated_content(&self) -> Size {
        self.rotation.rotate_size(self.content)
    }

    fn rebuild_base(&mut self) {
        self.layout = ContentLayout::resolve(
            self.rotated_content(),
            self.viewport,
            self.fit,
            self.resolved_alignment(),
            self.whitespace.flipped_for(self.layout_direction),
        );
        self.base = ZoomTransform {
            scale: self.layout.scale,
            offset: self.layout.base_offset(),
            rotation: self.rotation,
            rotation_origin: Centroid::CENTER,
        };
    }

    /// The initial user transform and, under read mode, the initial total
    /// scale.
    fn initial_user(&self) -> (ZoomTransform, Option<f64>) {
        let content = self.rotated_content();
        let accepted = self.read_mode.is_some_and(|read_mode| {
            !self.layout.is_empty() && read_mode.accepts(content, self.layout.region.size(), self.fit)
        });
        if !accepted {
            return (ZoomTransform::IDENTITY, None);
        }
        let mut target = read_mode_transform(content, self.layout.region, self.resolved_alignment());
        target.rotation = self.rotation;
        (target.split(self.base), Some(target.scale.x))
    }

    fn rebuild_levels(&mut self, initial_scale: Option<f64>) {
        self.levels = self.scales_calculator.calculate(&ScalesInput {
            viewport: self.layout.region.size(),
            content: self.rotated_content(),
            content_origin: self.rotation.rotate_size(self.content_origin),
            fit: self.fit,
            min_scale: self.base.scale.x,
            initial_scale,
        });
    }

    /// Rebuilds the layout after a viewport, fit mode, alignment, direction
    /// or whitespace change, keeping the content at the viewport center
    /// centered when the user has zoomed in.
    fn relayout(&mut self) {
        let old_layout = self.layout;
        let old_user = self.user;
        if old_layout.is_empty() || old_user.scale.x <= 1.0 {
            self.reset();
            return;
        }
        let center = Point::new(old_layout.viewport.width / 2.0, old_layout.viewport.height / 2.0);
        let focus = touch_to_viewport_centroid(
            old_layout.viewport,
            old_user.scale.x,
            old_user.offset,
            center,
        );
        let focus = viewport_centroid_to_content_centroid(&old_layout, focus);

        self.gesture_scale = None;
        self.rebuild_base();
        let (_, initial_scale) = self.initial_user();
        self.rebuild_levels(initial_scale);
        if self.layout.is_empty() {
            self.commit(ZoomTransform::IDENTITY);
            return;
        }
        let user_scale = safe_div(
            self.levels.clamp(self.base.scale.x * old_user.scale.x),
            self.base.scale.x,
        );
        let focus = content_centroid_to_viewport_centroid(&self.layout, focus);
        let offset = scale_target_translation(self.viewport, user_scale, focus);
        let user = self.clamp_user(ZoomTransform::new(ScaleFactor::uniform(user_scale), offset));
        self.commit(user);
        debug!(
            viewport = ?self.viewport,
            fit = ?self.fit,
            alignment = ?self.alignment,
            scale = self.transform.scale.x,
            "relayout kept focus"
        );
    }

    /// Clamps `user` into the zoom levels, then its offset into the bounds
    /// at the clamped scale.
    fn clamp_user(&self, user: ZoomTransform) -> ZoomTransform {
        if self.layout.is_empty() {
            return ZoomTransform::IDENTITY;
        }
        let base_scale = self.base.scale.x;
        let scale = safe_div(self.levels.clamp(base_scale * user.scale.x), base_scale);
        let bounds = user_offset_bounds(
            &self.layout,
            self.resolved_alignment(),
            scale,
            self.limit_offset_within_base_visible_rect,
        );
        ZoomTransform::new(ScaleFactor::uniform(scale), clamp_offset(user.offset, bounds))
    }

    fn transition(&mut self, to: ZoomTransform, animated: bool) -> TransformUpdate {
        let update = TransformUpdate {
            from: self.user,
            to,
            animated,
        };
        if !animated {
            self.commit(to);
        }
        update
    }

    fn commit(&mut self, user: ZoomTransform) {
        self.user = user;
        self.transform = self.base.concat(user);
        self.offset_bounds = user_offset_bounds(
            &self.layout,
            self.resolved_alignment(),
            user.scale.x,
            self.limit_offset_within_base_visible_rect,
        );
        self.scroll_edge = scroll_edge(self.offset_bounds, user.offset);
    }

    fn content_to_viewport(&self) -> Option<Affine> {
        (!self.layout.is_empty()).then(|| self.transform.to_affine(self.content))
    }

    fn content_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.content)
    }

    fn display_rect(&self, transform: &ZoomTransform) -> Rect {
        if self.layout.is_empty() {
            return Rect::ZERO;
        }
        transform
            .to_affine(self.content)
            .transform_rect_bbox(self.content_rect())
    }

    fn visible_rect(&self, transform: &ZoomTransform) -> Rect {
        if self.layout.is_empty() || transform.scale.x <= 0.0 || transform.scale.y <= 0.0 {
            return Rect::ZERO;
        }
        let inverse = transform.to_affine(self.content).inverse();
        let viewport = Rect::from_origin_size(Point::ZERO, self.viewport);
        let visible = inverse
            .transform_rect_bbox(viewport)
            .intersect(self.content_rect());
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            Rect::ZERO
        } else {
            visible
        }
    }
}

/// Debug snapshot of a [`ZoomEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomEngineDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Content size before rotation.
    pub content: Size,
    /// Original content size, or zero if unknown.
    pub content_origin: Size,
    /// Fit mode.
    pub fit: FitMode,
    /// Configured alignment.
    pub alignment: Alignment,
    /// Rotation.
    pub rotation: Rotation,
    /// Zoom levels.
    pub levels: ScaleLevels,
    /// Base transform.
    pub base: ZoomTransform,
    /// User transform.
    pub user: ZoomTransform,
    /// Final transform.
    pub transform: ZoomTransform,
    /// User offset bounds.
    pub offset_bounds: Rect,
    /// Scroll edges.
    pub scroll_edge: ScrollEdge,
    /// Content bounds in viewport coordinates.
    pub content_display_rect: Rect,
    /// Visible content, in content coordinates.
    pub content_visible_rect: Rect,
}
