//! A thumbless, filled-track slider surface.
//!
//! ## Usage
//!
//! The track is a rounded bar; the part between the minimum end and the
//! current value is filled. While the user touches the control the track can
//! grow (see [`Scaling`]), and the surface reports a spring transition the host
//! should animate.
//!
//! The surface computes geometry only. Hosts read [`ThumblessSlider::track_size`],
//! [`ThumblessSlider::fill_frame`] and [`ThumblessSlider::corner_radius_value`]
//! after each fit and draw with their own toolkit.
use derive_setters::Setters;
use slyder_ui::{Axis, Direction, Point, ReadingDirection, Size};

use crate::{
    slidable::Slidable,
    slyder::{LocationMapping, ViewModel},
};

pub use scaling::{ScaleRatio, Scaling};

mod scaling;

/// Duration of the scale transition, in seconds.
const TRANSITION_DURATION: f64 = 0.4;
/// Spring damping when the track scales up.
const SCALE_UP_DAMPING: f64 = 0.8;
/// Spring damping when the track returns to its resting size.
const SCALE_DOWN_DAMPING: f64 = 0.55;
/// Initial spring velocity when the track scales up.
const SCALE_UP_VELOCITY: f64 = 20.0;

/// Corner rounding of the track.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum CornerRadius {
    /// Half the track thickness: a pill shape.
    #[default]
    Full,
    /// A fixed radius.
    Fixed(f64),
}

/// Edge of the track the fill grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackEdge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

/// Spring animation the host should run when the track changes scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTransition {
    /// Whether the track is scaling to its interacting size.
    pub scaled: bool,
    /// Duration in seconds.
    pub duration: f64,
    /// Damping ratio of the spring.
    pub damping: f64,
    /// Initial velocity of the spring.
    pub initial_velocity: f64,
}

impl SpringTransition {
    fn towards(scaled: bool) -> Self {
        if scaled {
            Self {
                scaled,
                duration: TRANSITION_DURATION,
                damping: SCALE_UP_DAMPING,
                initial_velocity: SCALE_UP_VELOCITY,
            }
        } else {
            Self {
                scaled,
                duration: TRANSITION_DURATION,
                damping: SCALE_DOWN_DAMPING,
                initial_velocity: 0.0,
            }
        }
    }
}

/// Rectangle occupied by the fill, in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillFrame {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

/// Arguments for [`ThumblessSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ThumblessSliderArgs {
    /// Direction in which the value grows.
    pub direction: Direction,
    /// Scale applied while the user touches the track.
    #[setters(into)]
    pub scale_ratio: ScaleRatio,
    /// Corner rounding of the track.
    pub corner_radius: CornerRadius,
    /// Mapping used to turn the value into a fill ratio. Should match the
    /// control's [`crate::slyder::Options::location_mapping`].
    pub location_mapping: LocationMapping,
    /// Initial size of the track.
    pub bounds_size: Size,
}

impl Default for ThumblessSliderArgs {
    fn default() -> Self {
        Self {
            direction: Direction::LeadingToTrailing,
            scale_ratio: ScaleRatio::IDENTITY,
            corner_radius: CornerRadius::Full,
            location_mapping: LocationMapping::Legacy,
            bounds_size: Size::ZERO,
        }
    }
}

/// Filled-track rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumblessSlider {
    args: ThumblessSliderArgs,
    bounds_size: Size,
    reading_direction: ReadingDirection,
    value_ratio: f64,
    interacting: bool,
    scaled: bool,
    pending_transition: Option<SpringTransition>,
}

impl Default for ThumblessSlider {
    fn default() -> Self {
        Self::new(ThumblessSliderArgs::default())
    }
}

impl ThumblessSlider {
    /// Creates a surface. Its configuration is fixed from here on.
    pub fn new(args: ThumblessSliderArgs) -> Self {
        Self {
            bounds_size: args.bounds_size,
            args,
            reading_direction: ReadingDirection::default(),
            value_ratio: 0.0,
            interacting: false,
            scaled: false,
            pending_transition: None,
        }
    }

    /// The configuration this surface was built with.
    pub fn args(&self) -> &ThumblessSliderArgs {
        &self.args
    }

    /// Resizes the track, e.g. after a layout pass.
    pub fn set_bounds_size(&mut self, bounds_size: Size) {
        self.bounds_size = bounds_size;
    }

    /// Filled fraction of the track, as last fitted.
    pub fn value_ratio(&self) -> f64 {
        self.value_ratio
    }

    /// Whether the last fitted model was being interacted with.
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Takes the scale transition recorded by the last interaction flip, if
    /// the host has not consumed it yet.
    pub fn take_transition(&mut self) -> Option<SpringTransition> {
        self.pending_transition.take()
    }

    /// Size of the visible track, scaled while interacting.
    pub fn track_size(&self) -> Size {
        if !self.scaled {
            return self.bounds_size;
        }
        let ratio = self.args.scale_ratio;
        match self.args.direction.axis() {
            Axis::X => self.bounds_size.scaled(ratio.on_axis, ratio.against_axis),
            Axis::Y => self.bounds_size.scaled(ratio.against_axis, ratio.on_axis),
        }
    }

    /// Length of the fill along the track.
    pub fn fill_length(&self) -> f64 {
        let length = self.value_ratio * self.bounds_size.projection(self.args.direction.axis());
        if self.interacting {
            length * self.args.scale_ratio.on_axis
        } else {
            length
        }
    }

    /// Corner radius of the track in points.
    pub fn corner_radius_value(&self) -> f64 {
        match self.args.corner_radius {
            CornerRadius::Fixed(radius) => radius,
            CornerRadius::Full => {
                let thickness = self
                    .track_size()
                    .projection(self.args.direction.axis().counterpart());
                thickness / 2.0
            }
        }
    }

    /// Edge the fill is anchored to, after resolving logical directions.
    pub fn fill_anchor(&self) -> TrackEdge {
        match self.args.direction.resolved(self.reading_direction) {
            Direction::LeftToRight => TrackEdge::Left,
            Direction::RightToLeft => TrackEdge::Right,
            Direction::TopToBottom => TrackEdge::Top,
            Direction::BottomToTop => TrackEdge::Bottom,
            // `resolved` never yields a logical direction.
            Direction::LeadingToTrailing | Direction::TrailingToLeading => TrackEdge::Left,
        }
    }

    /// Rectangle occupied by the fill inside [`Self::track_size`].
    pub fn fill_frame(&self) -> FillFrame {
        let track = self.track_size();
        let length = self.fill_length();
        match self.fill_anchor() {
            TrackEdge::Left => FillFrame {
                origin: Point::ZERO,
                size: Size::new(length, track.height),
            },
            TrackEdge::Right => FillFrame {
                origin: Point::new(track.width - length, 0.0),
                size: Size::new(length, track.height),
            },
            TrackEdge::Top => FillFrame {
                origin: Point::ZERO,
                size: Size::new(track.width, length),
            },
            TrackEdge::Bottom => FillFrame {
                origin: Point::new(0.0, track.height - length),
                size: Size::new(track.width, length),
            },
        }
    }
}

impl Slidable for ThumblessSlider {
    fn direction(&self) -> Direction {
        self.args.direction
    }

    fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    fn fit(&mut self, view_model: &ViewModel) {
        self.value_ratio = self.args.location_mapping.ratio_for_value(view_model);
        self.interacting = view_model.interacting;

        let should_scale = view_model.interacting;
        if self.scaled != should_scale {
            self.scaled = should_scale;
            self.pending_transition = Some(SpringTransition::towards(should_scale));
        }
    }

    fn set_reading_direction(&mut self, reading_direction: ReadingDirection) {
        self.reading_direction = reading_direction;
    }
}
