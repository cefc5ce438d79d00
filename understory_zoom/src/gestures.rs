// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-facing policy: the disabled-gesture mask, rubber-band scale
//! damping and double-tap step selection.
//!
//! Recognizing gestures is the host's job. The engine only receives already
//! classified input (see [`ZoomEngine::gesture_transform`]) tagged with one
//! of the [`GestureTypes`] bits, which it checks against the mask.
//!
//! [`ZoomEngine::gesture_transform`]: crate::ZoomEngine::gesture_transform

use crate::scales::ScaleLevels;

bitflags::bitflags! {
    /// Categories of gesture input, used as a disabled-gesture mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct GestureTypes: u32 {
        /// Dragging with one finger (or the primary mouse button).
        const ONE_FINGER_DRAG   = 1 << 0;
        /// Pinch zoom with two fingers.
        const TWO_FINGER_SCALE  = 1 << 1;
        /// Double-tap-and-drag zoom with one finger.
        const ONE_FINGER_SCALE  = 1 << 2;
        /// Double tap cycling through the zoom levels.
        const DOUBLE_TAP_SCALE  = 1 << 3;
        /// Mouse wheel zoom.
        const MOUSE_WHEEL_SCALE = 1 << 4;
        /// Keyboard zoom.
        const KEYBOARD_SCALE    = 1 << 5;
        /// Keyboard panning.
        const KEYBOARD_DRAG     = 1 << 6;
    }
}

/// How far past the zoom levels a rubber-banded scale may stretch, as a
/// multiple of `max` (and a divisor of `min`).
pub const RUBBER_BAND_RATIO: f64 = 2.0;

/// Tolerance used when matching the current scale against the step scales.
pub const STEP_SCALE_TOLERANCE: f64 = 0.01;

/// Damps a `target` scale that leaves `[levels.min, levels.max]`.
///
/// Inside the range `target` is returned unchanged. Outside it the overshoot
/// is compressed so the result approaches, but never reaches,
/// `max × RUBBER_BAND_RATIO` or `min / RUBBER_BAND_RATIO`.
#[must_use]
pub fn rubber_band_scale(target: f64, levels: &ScaleLevels) -> f64 {
    if !target.is_finite() {
        return levels.clamp(levels.min);
    }
    if target > levels.max {
        let range = levels.max * (RUBBER_BAND_RATIO - 1.0);
        let excess = target - levels.max;
        if range <= 0.0 {
            return levels.max;
        }
        levels.max + range * excess / (excess + range)
    } else if target < levels.min {
        let range = levels.min - levels.min / RUBBER_BAND_RATIO;
        let deficit = levels.min - target;
        if range <= 0.0 {
            return levels.min;
        }
        levels.min - range * deficit / (deficit + range)
    } else {
        target
    }
}

/// The step scale a double tap moves to from `current`.
///
/// This is the first step strictly above `current` (allowing for
/// [`STEP_SCALE_TOLERANCE`]); past the last step it wraps around to `min`.
#[must_use]
pub fn next_step_scale(levels: &ScaleLevels, current: f64, three_step: bool) -> f64 {
    levels
        .steps(three_step)
        .find(|step| *step > current + STEP_SCALE_TOLERANCE)
        .unwrap_or(levels.min)
}

#[cfg(test)]
mod tests {
    use super::{GestureTypes, RUBBER_BAND_RATIO, next_step_scale, rubber_band_scale};
    use crate::scales::ScaleLevels;

    #[test]
    fn rubber_band_is_identity_inside_range() {
        let levels = ScaleLevels::new(1.0, 3.0, 9.0);
        assert_eq!(rubber_band_scale(1.0, &levels), 1.0);
        assert_eq!(rubber_band_scale(5.0, &levels), 5.0);
        assert_eq!(rubber_band_scale(9.0, &levels), 9.0);
    }

    #[test]
    fn rubber_band_damps_and_stays_below_limit() {
        let levels = ScaleLevels::new(1.0, 3.0, 9.0);
        let mut last = levels.max;
        for target in [10.0, 12.0, 20.0, 100.0, 1e9] {
            let damped = rubber_band_scale(target, &levels);
            assert!(damped > last, "{target}");
            assert!(damped < target);
            assert!(damped < levels.max * RUBBER_BAND_RATIO);
            last = damped;
        }
        let mut last = levels.min;
        for target in [0.9, 0.7, 0.3, 0.0] {
            let damped = rubber_band_scale(target, &levels);
            assert!(damped < last, "{target}");
            assert!(damped > levels.min / RUBBER_BAND_RATIO);
            last = damped;
        }
    }

    #[test]
    fn rubber_band_handles_degenerate_levels() {
        assert_eq!(rubber_band_scale(2.0, &ScaleLevels::ZERO), 0.0);
        assert_eq!(rubber_band_scale(f64::NAN, &ScaleLevels::new(1.0, 2.0, 3.0)), 1.0);
    }

    #[test]
    fn step_cycle_two_and_three_steps() {
        let levels = ScaleLevels::new(1.0, 3.0, 9.0);
        assert_eq!(next_step_scale(&levels, 1.0, false), 3.0);
        assert_eq!(next_step_scale(&levels, 3.0, false), 1.0);
        assert_eq!(next_step_scale(&levels, 2.0, false), 3.0);
        assert_eq!(next_step_scale(&levels, 3.0, true), 9.0);
        assert_eq!(next_step_scale(&levels, 9.0, true), 1.0);
        // Within tolerance of the medium step counts as being on it.
        assert_eq!(next_step_scale(&levels, 2.995, true), 9.0);
    }

    #[test]
    fn gesture_mask_defaults_to_nothing_disabled() {
        let mask = GestureTypes::default();
        assert!(mask.is_empty());
        let mask = GestureTypes::ONE_FINGER_DRAG | GestureTypes::KEYBOARD_DRAG;
        assert!(mask.contains(GestureTypes::KEYBOARD_DRAG));
        assert!(!mask.intersects(GestureTypes::TWO_FINGER_SCALE));
    }
}
