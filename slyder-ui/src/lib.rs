//! slyder-ui holds the primitives the slyder slider control is built on.
//!
//! # Overview
//!
//! The control turns raw touches into a clamped value. Doing that needs a
//! small amount of vocabulary, kept here so rendering surfaces and hosts can
//! share it without pulling in the control itself:
//!
//! - [`geometry`]: points, displacement vectors and sizes in local coordinates
//! - [`direction`]: the six track directions, their axis, and the sign rules
//!   that mirror logical directions under a right-to-left [`ReadingDirection`]
//! - [`projection`]: reduce a point or size to the coordinate that matters for
//!   an axis
//! - [`touch`]: touch events and the single-touch selection rule
//! - [`prop`]: identity-comparable callback handles
//! - [`error`]: configuration errors
//! - [`logging`]: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use slyder_ui::{Direction, Point, ReadingDirection, Size};
//!
//! let direction = Direction::TrailingToLeading;
//! let bounds = Size::new(200.0, 40.0);
//! let start = Point::new(120.0, 20.0);
//! let now = Point::new(70.0, 22.0);
//!
//! let moved = direction.signed_scalar(now - start, ReadingDirection::LeftToRight);
//! let ratio = moved / bounds.projection(direction.axis());
//! assert_eq!(ratio, 0.25);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod direction;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod projection;
pub mod prop;
pub mod touch;

pub use direction::{Axis, Direction, ReadingDirection};
pub use error::{Result, SlyderError};
pub use geometry::{Point, Size, Vector};
pub use prop::CallbackWith;
pub use touch::{Touch, TouchEvent, TouchPhase, TouchSet};
