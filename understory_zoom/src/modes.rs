// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How content is scaled into the viewport when it is not zoomed.
///
/// This mode is consulted by [`crate::scale_factor`] and everything derived
/// from it, including the engine's base transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum FitMode {
    /// Keep the content at its intrinsic size.
    None,
    /// Like [`FitMode::Fit`], but never scale the content up.
    Inside,
    /// Scale uniformly so the whole content fits inside the viewport.
    #[default]
    Fit,
    /// Scale uniformly so the content width matches the viewport width.
    FillWidth,
    /// Scale uniformly so the content height matches the viewport height.
    FillHeight,
    /// Scale each axis independently to exactly cover the viewport.
    ///
    /// The aspect ratio is not preserved.
    FillBounds,
    /// Scale uniformly so the content covers the viewport, cropping overflow.
    Crop,
}

/// Position along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum AxisAlignment {
    /// Left or top.
    Start,
    /// Centered.
    #[default]
    Center,
    /// Right or bottom.
    End,
}

impl AxisAlignment {
    /// Offset of an item of length `item` inside a space of length `space`.
    ///
    /// The result is negative when the item is larger than the space.
    #[must_use]
    pub fn align(self, item: f64, space: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => (space - item) / 2.0,
            Self::End => space - item,
        }
    }

    /// Mirrors start and end.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::Center => Self::Center,
            Self::End => Self::Start,
        }
    }
}

/// One of the nine anchor positions used to place content in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// Top edge, start side.
    TopStart,
    /// Top edge, centered horizontally.
    TopCenter,
    /// Top edge, end side.
    TopEnd,
    /// Centered vertically, start side.
    CenterStart,
    /// Centered on both axes.
    #[default]
    Center,
    /// Centered vertically, end side.
    CenterEnd,
    /// Bottom edge, start side.
    BottomStart,
    /// Bottom edge, centered horizontally.
    BottomCenter,
    /// Bottom edge, end side.
    BottomEnd,
}

impl Alignment {
    /// All nine alignments, row by row.
    pub const ALL: [Self; 9] = [
        Self::TopStart,
        Self::TopCenter,
        Self::TopEnd,
        Self::CenterStart,
        Self::Center,
        Self::CenterEnd,
        Self::BottomStart,
        Self::BottomCenter,
        Self::BottomEnd,
    ];

    /// Builds an alignment from its per-axis components.
    #[must_use]
    pub fn from_axes(horizontal: AxisAlignment, vertical: AxisAlignment) -> Self {
        use AxisAlignment::{Center, End, Start};
        match (vertical, horizontal) {
            (Start, Start) => Self::TopStart,
            (Start, Center) => Self::TopCenter,
            (Start, End) => Self::TopEnd,
            (Center, Start) => Self::CenterStart,
            (Center, Center) => Self::Center,
            (Center, End) => Self::CenterEnd,
            (End, Start) => Self::BottomStart,
            (End, Center) => Self::BottomCenter,
            (End, End) => Self::BottomEnd,
        }
    }

    /// Horizontal component.
    #[must_use]
    pub fn horizontal(self) -> AxisAlignment {
        match self {
            Self::TopStart | Self::CenterStart | Self::BottomStart => AxisAlignment::Start,
            Self::TopCenter | Self::Center | Self::BottomCenter => AxisAlignment::Center,
            Self::TopEnd | Self::CenterEnd | Self::BottomEnd => AxisAlignment::End,
        }
    }

    /// Vertical component.
    #[must_use]
    pub fn vertical(self) -> AxisAlignment {
        match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => AxisAlignment::Start,
            Self::CenterStart | Self::Center | Self::CenterEnd => AxisAlignment::Center,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => AxisAlignment::End,
        }
    }

    /// Resolves start/end against a layout direction.
    ///
    /// In [`LayoutDirection::Rtl`] the start side is on the right.
    #[must_use]
    pub fn resolve(self, direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => self,
            LayoutDirection::Rtl => Self::from_axes(self.horizontal().flipped(), self.vertical()),
        }
    }
}

/// Reading direction of the host layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::{Alignment, AxisAlignment, LayoutDirection};

    #[test]
    fn axes_round_trip_for_all_alignments() {
        for alignment in Alignment::ALL {
            let rebuilt = Alignment::from_axes(alignment.horizontal(), alignment.vertical());
            assert_eq!(rebuilt, alignment);
        }
    }

    #[test]
    fn axis_align_offsets() {
        assert_eq!(AxisAlignment::Start.align(400.0, 1000.0), 0.0);
        assert_eq!(AxisAlignment::Center.align(400.0, 1000.0), 300.0);
        assert_eq!(AxisAlignment::End.align(400.0, 1000.0), 600.0);
        assert_eq!(AxisAlignment::Center.align(1200.0, 1000.0), -100.0);
    }

    #[test]
    fn rtl_mirrors_horizontal_only() {
        assert_eq!(
            Alignment::TopStart.resolve(LayoutDirection::Rtl),
            Alignment::TopEnd
        );
        assert_eq!(
            Alignment::BottomCenter.resolve(LayoutDirection::Rtl),
            Alignment::BottomCenter
        );
        assert_eq!(
            Alignment::CenterEnd.resolve(LayoutDirection::Ltr),
            Alignment::CenterEnd
        );
    }
}
