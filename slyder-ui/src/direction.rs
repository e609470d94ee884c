//! Directional layouts of the slider track.
//!
//! ## Usage
//!
//! A [`Direction`] says which end of the track holds the minimum value. Two
//! directions are *logical* ([`Direction::LeadingToTrailing`] and
//! [`Direction::TrailingToLeading`]); their physical orientation depends on
//! the [`ReadingDirection`] of the surrounding layout, which callers pass in
//! explicitly.
//!
//! ```
//! use slyder_ui::direction::{Axis, Direction, ReadingDirection};
//! use slyder_ui::geometry::Vector;
//!
//! let drag = Vector::new(50.0, 0.0);
//!
//! let scalar = Direction::LeadingToTrailing.signed_scalar(drag, ReadingDirection::RightToLeft);
//! assert_eq!(scalar, -50.0);
//! assert_eq!(Direction::BottomToTop.axis(), Axis::Y);
//! ```

use crate::geometry::Vector;

/// The axis a slider track extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Returns the perpendicular axis.
    ///
    /// Rendering surfaces use it for cross-axis measurements such as the
    /// corner radius of a fully rounded track.
    pub fn counterpart(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Left-to-right or right-to-left orientation of the surrounding layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingDirection {
    /// Text flows from left to right; leading is left.
    #[default]
    LeftToRight,
    /// Text flows from right to left; leading is right.
    RightToLeft,
}

/// The direction in which the value of a slider increases.
///
/// The variant name reads "from minimum end to maximum end".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Horizontal track; the leading end is the minimum value.
    #[default]
    LeadingToTrailing,
    /// Horizontal track; the trailing end is the minimum value.
    TrailingToLeading,
    /// Horizontal track; the left end is the minimum value.
    LeftToRight,
    /// Horizontal track; the right end is the minimum value.
    RightToLeft,
    /// Vertical track; the top end is the minimum value.
    TopToBottom,
    /// Vertical track; the bottom end is the minimum value.
    BottomToTop,
}

impl Direction {
    /// All six directions, in declaration order.
    pub const ALL: [Direction; 6] = [
        Direction::LeadingToTrailing,
        Direction::TrailingToLeading,
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
        Direction::BottomToTop,
    ];

    /// The axis the track extends along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::TopToBottom | Direction::BottomToTop => Axis::Y,
            Direction::LeadingToTrailing
            | Direction::TrailingToLeading
            | Direction::LeftToRight
            | Direction::RightToLeft => Axis::X,
        }
    }

    /// Returns `true` for the two directions that mirror with the reading
    /// direction.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            Direction::LeadingToTrailing | Direction::TrailingToLeading
        )
    }

    /// Resolves a logical direction to the physical direction it means under
    /// `reading`. Physical directions are returned unchanged.
    pub fn resolved(self, reading: ReadingDirection) -> Direction {
        match (self, reading) {
            (Direction::LeadingToTrailing, ReadingDirection::LeftToRight)
            | (Direction::TrailingToLeading, ReadingDirection::RightToLeft) => {
                Direction::LeftToRight
            }
            (Direction::LeadingToTrailing, ReadingDirection::RightToLeft)
            | (Direction::TrailingToLeading, ReadingDirection::LeftToRight) => {
                Direction::RightToLeft
            }
            (physical, _) => physical,
        }
    }

    /// Projects a displacement onto this direction's signed axis.
    ///
    /// The result is positive when the displacement points from the minimum
    /// end towards the maximum end.
    pub fn signed_scalar(self, vector: Vector, reading: ReadingDirection) -> f64 {
        match self.resolved(reading) {
            Direction::LeftToRight => vector.dx,
            Direction::RightToLeft => -vector.dx,
            Direction::TopToBottom => vector.dy,
            Direction::BottomToTop => -vector.dy,
            // `resolved` never yields a logical direction.
            Direction::LeadingToTrailing | Direction::TrailingToLeading => vector.dx,
        }
    }

    /// Returns `true` when a growing coordinate on [`Self::axis`] means a
    /// growing value.
    ///
    /// When this is `false`, a position ratio measured from the coordinate
    /// origin must be inverted (`1 - ratio`) before it can be used as a value
    /// ratio.
    pub fn is_positively_correlated(self, reading: ReadingDirection) -> bool {
        match self.resolved(reading) {
            Direction::LeftToRight | Direction::TopToBottom => true,
            Direction::RightToLeft | Direction::BottomToTop => false,
            Direction::LeadingToTrailing | Direction::TrailingToLeading => true,
        }
    }
}
