//! Touch tracking for the slyder control.
//!
//! [`Interaction`] is a two-state machine (idle, tracking). Each event yields a
//! [`Transition`]: the next [`ViewModel`] plus the [`Effect`]s the owner has to
//! carry out. Nothing here talks to a surface or a callback directly.

use slyder_ui::{Direction, Point, ReadingDirection, Size, TouchEvent};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{
    options::{Options, TrackingBehavior},
    view_model::{LocationMapping, ViewModel},
};

/// Work the owner of the state machine must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Hand the new view model to the rendering surface.
    Fit(ViewModel),
    /// Notify the value-change handler.
    ValueChanged(f64),
}

/// Effects of one transition, in execution order.
pub type Effects = SmallVec<[Effect; 2]>;

/// Result of feeding one input into the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The model after the input was applied.
    pub view_model: ViewModel,
    /// What the owner has to do about it.
    pub effects: Effects,
}

impl Transition {
    /// Builds the transition from `old` to `new`.
    ///
    /// The surface is refitted only if the model changed, and the handler is
    /// notified only if the value changed.
    pub fn between(old: ViewModel, new: ViewModel) -> Self {
        let mut effects = Effects::new();
        if new != old {
            effects.push(Effect::Fit(new));
        }
        if new.value != old.value {
            effects.push(Effect::ValueChanged(new.value));
        }
        Self {
            view_model: new,
            effects,
        }
    }

    /// A transition that changes nothing.
    pub fn unchanged(model: ViewModel) -> Self {
        Self {
            view_model: model,
            effects: Effects::new(),
        }
    }

    /// Whether the owner has nothing to do.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Geometry the state machine needs to turn points into values.
///
/// `direction` and `bounds_size` come from the rendering surface; the reading
/// direction is supplied by the host once per layout pass.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrackingContext {
    /// Direction of the track.
    pub direction: Direction,
    /// Reading direction of the surrounding layout.
    pub reading_direction: ReadingDirection,
    /// Size of the tracked area.
    pub bounds_size: Size,
}

impl TrackingContext {
    /// Length of the track along its axis, if it can be divided by.
    fn extent(&self) -> Option<f64> {
        let extent = self.bounds_size.projection(self.direction.axis());
        if extent.is_finite() && extent > 0.0 {
            Some(extent)
        } else {
            debug!(
                bounds = ?self.bounds_size,
                direction = ?self.direction,
                "track has no usable extent; ignoring touch"
            );
            None
        }
    }
}

/// State recorded at touch-down and dropped at touch-end or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    /// Identifier of the touch that started the session.
    pub touch_id: u64,
    /// The value when the finger went down.
    pub value_at_touch_start: f64,
    /// Where the finger went down.
    pub point_at_touch_start: Point,
    /// Tracking behavior in effect for this gesture.
    pub behavior: TrackingBehavior,
    /// Location mapping in effect for this gesture.
    pub mapping: LocationMapping,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum TrackingState {
    #[default]
    Idle,
    Tracking(TouchSession),
}

/// The touch tracking state machine.
#[derive(Debug, Default, Clone)]
pub struct Interaction {
    state: TrackingState,
}

impl Interaction {
    /// Creates an idle state machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking(_))
    }

    /// The active gesture, if any.
    pub fn session(&self) -> Option<&TouchSession> {
        match &self.state {
            TrackingState::Idle => None,
            TrackingState::Tracking(session) => Some(session),
        }
    }

    /// Applies one touch event to `model`.
    ///
    /// `options` is only consulted at touch-down; a running gesture keeps the
    /// behavior it started with.
    pub fn handle(
        &mut self,
        event: &TouchEvent,
        model: ViewModel,
        options: &Options,
        context: &TrackingContext,
    ) -> Transition {
        match event {
            TouchEvent::Began(_) => self.touch_down(event, model, options, context),
            TouchEvent::Moved(_) => self.touch_move(event, model, context),
            TouchEvent::Ended | TouchEvent::Cancelled => self.touch_end(event, model),
        }
    }

    fn touch_down(
        &mut self,
        event: &TouchEvent,
        model: ViewModel,
        options: &Options,
        context: &TrackingContext,
    ) -> Transition {
        if let TrackingState::Tracking(session) = &self.state {
            trace!(
                touch_id = session.touch_id,
                "touch-down while tracking; keeping the first touch"
            );
            return Transition::unchanged(model);
        }
        let Some(touch) = primary_location(event) else {
            return Transition::unchanged(model);
        };

        let session = TouchSession {
            touch_id: touch.0,
            value_at_touch_start: model.value,
            point_at_touch_start: touch.1,
            behavior: options.tracking_behavior,
            mapping: options.location_mapping,
        };
        debug!(?session, "touch session started");
        self.state = TrackingState::Tracking(session);

        let mut next = model.with_interacting(true);
        if session.behavior.responds_immediately()
            && let Some(value) = location_value(touch.1, &next, session.mapping, context)
        {
            next.value = value;
        }
        Transition::between(model, next)
    }

    fn touch_move(
        &mut self,
        event: &TouchEvent,
        model: ViewModel,
        context: &TrackingContext,
    ) -> Transition {
        let TrackingState::Tracking(session) = self.state else {
            trace!("touch moved without an active session; ignoring");
            return Transition::unchanged(model);
        };
        let Some((_, point)) = primary_location(event) else {
            return Transition::unchanged(model);
        };

        let value = if session.behavior.tracks_location() {
            location_value(point, &model, session.mapping, context)
        } else {
            translated_value(&session, point, &model, context)
        };
        match value {
            Some(value) => Transition::between(model, model.with_value(value)),
            None => Transition::unchanged(model),
        }
    }

    fn touch_end(&mut self, event: &TouchEvent, model: ViewModel) -> Transition {
        match std::mem::take(&mut self.state) {
            TrackingState::Idle => {
                trace!(phase = ?event.phase(), "no active session; ignoring");
                Transition::unchanged(model)
            }
            TrackingState::Tracking(session) => {
                debug!(
                    touch_id = session.touch_id,
                    phase = ?event.phase(),
                    value = model.value,
                    "touch session finished"
                );
                Transition::between(model, model.with_interacting(false))
            }
        }
    }
}

/// First touch of the event, if it carries a usable location.
fn primary_location(event: &TouchEvent) -> Option<(u64, Point)> {
    let Some(touch) = event.primary() else {
        trace!(phase = ?event.phase(), "event carries no touches; ignoring");
        return None;
    };
    if !touch.location.is_finite() {
        trace!(?touch, "non-finite touch location; ignoring");
        return None;
    }
    Some((touch.id, touch.location))
}

/// Value for an absolute touch location on the track.
///
/// The location is normalized by the track extent, inverted when the value
/// grows against the coordinate system, then mapped and clamped.
pub fn location_value(
    point: Point,
    model: &ViewModel,
    mapping: LocationMapping,
    context: &TrackingContext,
) -> Option<f64> {
    let extent = context.extent()?;
    let direction = context.direction;
    let mut ratio = point.value_on(direction.axis()) / extent;
    if !direction.is_positively_correlated(context.reading_direction) {
        ratio = 1.0 - ratio;
    }
    Some(model.clamp(mapping.value_for_ratio(ratio, model)))
}

/// Value after dragging from the session's start point to `point`.
///
/// The displacement along the track, as a fraction of the track extent, moves
/// the value by the same fraction of the range.
pub fn translated_value(
    session: &TouchSession,
    point: Point,
    model: &ViewModel,
    context: &TrackingContext,
) -> Option<f64> {
    let extent = context.extent()?;
    let translation = point - session.point_at_touch_start;
    let ratio = context
        .direction
        .signed_scalar(translation, context.reading_direction)
        / extent;
    let value_change = ratio * model.span();
    Some(model.clamp(session.value_at_touch_start + value_change))
}
