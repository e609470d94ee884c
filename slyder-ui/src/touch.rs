//! Touch events delivered to a slider control.
//!
//! This module describes the input side of the control: a touch sequence
//! begins, moves any number of times and then ends or is cancelled. Events that
//! carry positions hold a [`TouchSet`]; the control is single-touch and only
//! ever looks at [`TouchEvent::primary`], the first touch of the set.
//!
//! # Usage
//!
//! ```
//! use slyder_ui::geometry::Point;
//! use slyder_ui::touch::{Touch, TouchEvent, TouchPhase};
//!
//! let down = TouchEvent::down(Point::new(10.0, 4.0));
//! assert_eq!(down.phase(), TouchPhase::Began);
//! assert_eq!(down.primary().map(|t| t.location), Some(Point::new(10.0, 4.0)));
//!
//! // A second finger in the same event is carried along but never used.
//! let pinch = TouchEvent::moved_many([
//!     Touch::new(0, Point::new(20.0, 4.0)),
//!     Touch::new(1, Point::new(90.0, 4.0)),
//! ]);
//! assert_eq!(pinch.primary().map(|t| t.id), Some(0));
//! ```
//!
//! # Thread Safety
//!
//! Events are plain values. They are normally produced and consumed on the
//! thread that owns the control.

use smallvec::SmallVec;

use crate::geometry::Point;

/// A set of touches reported together in one event.
///
/// The inline capacity covers the common single-finger case plus one stray
/// contact without allocating.
pub type TouchSet = SmallVec<[Touch; 2]>;

/// A single contact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Host-assigned identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Location in the control's local coordinate space.
    pub location: Point,
}

impl Touch {
    /// Creates a touch with an identifier and a location.
    pub const fn new(id: u64, location: Point) -> Self {
        Self { id, location }
    }
}

/// The lifecycle stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger went down.
    Began,
    /// A finger moved.
    Moved,
    /// A finger lifted.
    Ended,
    /// The host cancelled the touch sequence, e.g. because a system gesture
    /// took over.
    Cancelled,
}

/// An input event for the slider control.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    /// One or more touches began.
    Began(TouchSet),
    /// One or more touches moved.
    Moved(TouchSet),
    /// The touch sequence ended.
    Ended,
    /// The touch sequence was cancelled.
    Cancelled,
}

impl TouchEvent {
    /// A single-finger touch-down with id `0`.
    pub fn down(location: Point) -> Self {
        TouchEvent::Began(smallvec::smallvec![Touch::new(0, location)])
    }

    /// A single-finger move with id `0`.
    pub fn moved(location: Point) -> Self {
        TouchEvent::Moved(smallvec::smallvec![Touch::new(0, location)])
    }

    /// A touch-down carrying several touches.
    pub fn down_many(touches: impl IntoIterator<Item = Touch>) -> Self {
        TouchEvent::Began(touches.into_iter().collect())
    }

    /// A move carrying several touches.
    pub fn moved_many(touches: impl IntoIterator<Item = Touch>) -> Self {
        TouchEvent::Moved(touches.into_iter().collect())
    }

    /// The lifecycle stage of this event.
    pub fn phase(&self) -> TouchPhase {
        match self {
            TouchEvent::Began(_) => TouchPhase::Began,
            TouchEvent::Moved(_) => TouchPhase::Moved,
            TouchEvent::Ended => TouchPhase::Ended,
            TouchEvent::Cancelled => TouchPhase::Cancelled,
        }
    }

    /// All touches carried by the event. Empty for end and cancel.
    pub fn touches(&self) -> &[Touch] {
        match self {
            TouchEvent::Began(touches) | TouchEvent::Moved(touches) => touches.as_slice(),
            TouchEvent::Ended | TouchEvent::Cancelled => &[],
        }
    }

    /// The only touch that participates in tracking: the first one of the
    /// set. Every other touch is ignored.
    pub fn primary(&self) -> Option<&Touch> {
        self.touches().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_first_touch() {
        let event = TouchEvent::down_many([
            Touch::new(7, Point::new(1.0, 1.0)),
            Touch::new(3, Point::new(2.0, 2.0)),
        ]);
        assert_eq!(event.touches().len(), 2);
        assert_eq!(event.primary(), Some(&Touch::new(7, Point::new(1.0, 1.0))));
    }

    #[test]
    fn test_end_and_cancel_carry_no_touches() {
        assert!(TouchEvent::Ended.primary().is_none());
        assert!(TouchEvent::Cancelled.touches().is_empty());
        assert_eq!(TouchEvent::Cancelled.phase(), TouchPhase::Cancelled);
    }

    #[test]
    fn test_empty_set_has_no_primary() {
        let event = TouchEvent::moved_many(std::iter::empty());
        assert_eq!(event.phase(), TouchPhase::Moved);
        assert!(event.primary().is_none());
    }
}
