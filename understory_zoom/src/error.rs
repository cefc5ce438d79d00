// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a rotation is not a multiple of 90 degrees.
///
/// See [`Rotation::from_degrees`](crate::Rotation::from_degrees) and
/// [`ZoomEngine::rotate`](crate::ZoomEngine::rotate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationError {
    /// The requested angle, in degrees.
    NotRightAngle(i32),
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRightAngle(degrees) => write!(
                f,
                "rotation must be a multiple of 90 degrees, got {degrees}"
            ),
        }
    }
}

impl core::error::Error for RotationError {}
