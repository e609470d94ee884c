//! The slyder slider control and its rendering surfaces.
//!
//! # Usage
//!
//! Pick a surface, wrap it in a [`Slyder`](slyder::Slyder), then forward the
//! host's layout passes and touch events to it.
//!
//! ```
//! use slyder_components::{
//!     slyder::{Options, Slyder, TrackingBehavior},
//!     thumbless_slider::{Scaling, ThumblessSlider, ThumblessSliderArgs},
//! };
//! use slyder_ui::{Direction, Point, ReadingDirection, Size, TouchEvent};
//!
//! let surface = ThumblessSlider::new(
//!     ThumblessSliderArgs::default()
//!         .direction(Direction::LeadingToTrailing)
//!         .scale_ratio(Scaling::AgainstAxis(1.5))
//!         .bounds_size(Size::new(200.0, 40.0)),
//! );
//! let mut slyder = Slyder::new(
//!     surface,
//!     Options::default().tracking_behavior(TrackingBehavior::OnTranslation),
//! )
//! .on_value_change(|value| println!("value: {value}"));
//!
//! slyder.layout(ReadingDirection::RightToLeft);
//! slyder.set_value(0.5);
//!
//! // Dragging right lowers the value under a right-to-left layout.
//! slyder.handle_touch(&TouchEvent::down(Point::new(100.0, 20.0)));
//! slyder.handle_touch(&TouchEvent::moved(Point::new(150.0, 20.0)));
//! slyder.handle_touch(&TouchEvent::Ended);
//! assert_eq!(slyder.value(), 0.25);
//! ```
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod native_slider;
pub mod slidable;
pub mod slyder;
pub mod thumbless_slider;

pub use slyder_ui;
pub use slyder_ui::{Result, SlyderError};

pub use crate::{
    native_slider::NativeSlider,
    slidable::Slidable,
    slyder::{Options, Slyder, TrackingBehavior, ViewModel},
    thumbless_slider::{ThumblessSlider, ThumblessSliderArgs},
};
