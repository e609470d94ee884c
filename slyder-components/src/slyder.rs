//! The slyder control: a container that tracks touches and owns the value.
//!
//! ## Usage
//!
//! Wrap a [`Slidable`] surface in a [`Slyder`], feed it the host's touch
//! events and read the value back, or register a value-change handler.
//!
//! ```
//! use slyder_components::{
//!     native_slider::NativeSlider,
//!     slyder::{Options, Slyder, TrackingBehavior},
//! };
//! use slyder_ui::{Point, ReadingDirection, Size, TouchEvent};
//!
//! let surface = NativeSlider::new(Size::new(200.0, 44.0));
//! let mut slyder = Slyder::new(
//!     surface,
//!     Options::default().tracking_behavior(TrackingBehavior::OnLocation),
//! );
//! slyder.layout(ReadingDirection::LeftToRight);
//!
//! slyder.handle_touch(&TouchEvent::down(Point::new(150.0, 20.0)));
//! assert_eq!(slyder.value(), 0.75);
//! assert!(slyder.is_interacting());
//!
//! slyder.handle_touch(&TouchEvent::Ended);
//! assert!(!slyder.is_interacting());
//! assert_eq!(slyder.surface().value(), 0.75);
//! ```
use slyder_ui::{CallbackWith, ReadingDirection, Result, TouchEvent};
use tracing::{debug, warn};

use crate::slidable::Slidable;

pub use interaction::{
    Effect, Effects, Interaction, TouchSession, TrackingContext, Transition, location_value,
    translated_value,
};
pub use options::{Options, SlyderOption, TrackingBehavior};
pub use view_model::{LocationMapping, ViewModel, clamp};

mod interaction;
mod options;
mod view_model;

/// A slider control that delegates rendering to a [`Slidable`] surface.
pub struct Slyder<S> {
    surface: S,
    options: Options,
    view_model: ViewModel,
    interaction: Interaction,
    reading_direction: ReadingDirection,
    on_value_change: Option<CallbackWith<f64>>,
}

impl<S: Slidable> Slyder<S> {
    /// Creates a control around `surface` and fits it with the default model.
    pub fn new(surface: S, options: Options) -> Self {
        let mut slyder = Self {
            surface,
            options,
            view_model: ViewModel::default(),
            interaction: Interaction::new(),
            reading_direction: ReadingDirection::default(),
            on_value_change: None,
        };
        slyder.surface.fit(&slyder.view_model);
        slyder
    }

    /// Creates a control from a list of option entries.
    pub fn with_options(surface: S, options: impl IntoIterator<Item = SlyderOption>) -> Self {
        Self::new(surface, options.into_iter().collect())
    }

    /// Sets the value-change handler.
    ///
    /// The handler runs once for every distinct new value, whether it comes
    /// from a gesture or from [`Self::set_value`].
    pub fn on_value_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(handler));
        self
    }

    /// Replaces or removes the value-change handler.
    pub fn set_value_change_handler(&mut self, handler: Option<CallbackWith<f64>>) {
        self.on_value_change = handler;
    }

    /// The current value-change handler.
    pub fn value_change_handler(&self) -> Option<&CallbackWith<f64>> {
        self.on_value_change.as_ref()
    }

    /// Supplies the layout's reading direction; call once per layout pass.
    pub fn layout(&mut self, reading_direction: ReadingDirection) {
        if self.reading_direction != reading_direction {
            debug!(?reading_direction, "reading direction changed");
        }
        self.reading_direction = reading_direction;
        self.surface.set_reading_direction(reading_direction);
    }

    /// Feeds one touch event through the tracking state machine.
    ///
    /// Returns the transition that was applied.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Transition {
        let context = self.tracking_context();
        let transition =
            self.interaction
                .handle(event, self.view_model, &self.options, &context);
        self.apply(&transition);
        transition
    }

    /// Sets the value programmatically. Out-of-range values are clamped.
    pub fn set_value(&mut self, value: f64) -> Transition {
        if !value.is_finite() {
            warn!(value, "ignoring non-finite value");
            return Transition::unchanged(self.view_model);
        }
        let transition = Transition::between(self.view_model, self.view_model.with_value(value));
        self.apply(&transition);
        transition
    }

    /// Changes the value range; the current value is re-clamped.
    ///
    /// Fails without touching the control if the range is inverted or not
    /// finite.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<Transition> {
        let next = self
            .view_model
            .with_range(minimum, maximum)
            .inspect_err(|err| warn!(%err, "rejected value range"))?;
        let transition = Transition::between(self.view_model, next);
        self.apply(&transition);
        Ok(transition)
    }

    /// Replaces the options. A gesture in progress keeps its behavior.
    pub fn set_options(&mut self, options: Options) {
        if self.interaction.is_tracking() {
            debug!(?options, "options changed mid-gesture; applying from next touch");
        }
        self.options = options;
    }

    /// The options used for the next gesture.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current value state.
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.view_model.value
    }

    /// Whether a finger is on the control.
    pub fn is_interacting(&self) -> bool {
        self.view_model.interacting
    }

    /// The reading direction from the last layout pass.
    pub fn reading_direction(&self) -> ReadingDirection {
        self.reading_direction
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering surface, mutably; e.g. to resize it after layout.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The tracking state machine.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    fn tracking_context(&self) -> TrackingContext {
        TrackingContext {
            direction: self.surface.direction(),
            reading_direction: self.reading_direction,
            bounds_size: self.surface.bounds_size(),
        }
    }

    fn apply(&mut self, transition: &Transition) {
        self.view_model = transition.view_model;
        for effect in &transition.effects {
            match effect {
                Effect::Fit(view_model) => self.surface.fit(view_model),
                Effect::ValueChanged(value) => {
                    if let Some(handler) = &self.on_value_change {
                        handler.call(*value);
                    }
                }
            }
        }
    }
}

impl<S: Slidable + Default> Default for Slyder<S> {
    fn default() -> Self {
        Self::new(S::default(), Options::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Slyder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slyder")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("view_model", &self.view_model)
            .field("interaction", &self.interaction)
            .field("reading_direction", &self.reading_direction)
            .field("on_value_change", &self.on_value_change)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use slyder_ui::{Direction, Point, Size, SlyderError};

    use super::*;
    use crate::thumbless_slider::{ThumblessSlider, ThumblessSliderArgs};

    #[derive(Debug, Default)]
    struct RecordingSurface {
        direction: Direction,
        bounds_size: Size,
        fitted: Vec<ViewModel>,
        reading_direction: Option<ReadingDirection>,
    }

    impl RecordingSurface {
        fn new(direction: Direction) -> Self {
            Self {
                direction,
                bounds_size: Size::new(200.0, 40.0),
                ..Self::default()
            }
        }
    }

    impl Slidable for RecordingSurface {
        fn direction(&self) -> Direction {
            self.direction
        }

        fn bounds_size(&self) -> Size {
            self.bounds_size
        }

        fn fit(&mut self, view_model: &ViewModel) {
            self.fitted.push(*view_model);
        }

        fn set_reading_direction(&mut self, reading_direction: ReadingDirection) {
            self.reading_direction = Some(reading_direction);
        }
    }

    fn recorded(slyder: Slyder<RecordingSurface>) -> (Slyder<RecordingSurface>, Arc<Mutex<Vec<f64>>>) {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        let slyder = slyder.on_value_change(move |value| sink.lock().push(value));
        (slyder, values)
    }

    fn percent_slyder(direction: Direction, behavior: TrackingBehavior) -> Slyder<RecordingSurface> {
        let mut slyder = Slyder::new(
            RecordingSurface::new(direction),
            Options::default().tracking_behavior(behavior),
        );
        slyder.set_range(0.0, 100.0).unwrap();
        slyder
    }

    #[test]
    fn test_new_fits_default_model() {
        let slyder = Slyder::new(RecordingSurface::new(Direction::LeftToRight), Options::default());
        assert_eq!(slyder.surface().fitted, vec![ViewModel::default()]);
        assert_eq!(slyder.value(), 0.0);
        assert!(!slyder.is_interacting());
    }

    #[test]
    fn test_translation_law_and_callback() {
        let (mut slyder, values) =
            recorded(percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation));
        slyder.set_value(50.0);
        values.lock().clear();

        slyder.handle_touch(&TouchEvent::down(Point::new(10.0, 0.0)));
        slyder.handle_touch(&TouchEvent::moved(Point::new(60.0, 0.0)));
        assert_eq!(slyder.value(), 75.0);
        slyder.handle_touch(&TouchEvent::moved(Point::new(60.0, 10.0)));
        slyder.handle_touch(&TouchEvent::Ended);

        assert_eq!(*values.lock(), vec![75.0]);
        assert_eq!(slyder.value(), 75.0);
        assert!(!slyder.is_interacting());
    }

    #[test]
    fn test_reading_direction_mirrors_logical_direction() {
        let gesture = [
            TouchEvent::down(Point::new(10.0, 0.0)),
            TouchEvent::moved(Point::new(60.0, 0.0)),
        ];

        let mut logical = percent_slyder(Direction::LeadingToTrailing, TrackingBehavior::OnTranslation);
        logical.layout(ReadingDirection::RightToLeft);
        logical.set_value(50.0);

        let mut physical = percent_slyder(Direction::RightToLeft, TrackingBehavior::OnTranslation);
        physical.set_value(50.0);

        for event in &gesture {
            logical.handle_touch(event);
            physical.handle_touch(event);
        }
        assert_eq!(logical.value(), 25.0);
        assert_eq!(logical.value(), physical.value());
        assert_eq!(
            logical.surface().reading_direction,
            Some(ReadingDirection::RightToLeft)
        );
    }

    #[test]
    fn test_interacting_lifecycle() {
        for finish in [TouchEvent::Ended, TouchEvent::Cancelled] {
            let mut slyder =
                percent_slyder(Direction::TopToBottom, TrackingBehavior::OnLocationOnceMoved);
            assert!(!slyder.is_interacting());
            slyder.handle_touch(&TouchEvent::down(Point::new(5.0, 5.0)));
            assert!(slyder.is_interacting());
            slyder.handle_touch(&TouchEvent::moved(Point::new(5.0, 10.0)));
            assert!(slyder.is_interacting());
            slyder.handle_touch(&finish);
            assert!(!slyder.is_interacting());
            assert!(!slyder.interaction().is_tracking());
        }
    }

    #[test]
    fn test_callback_fires_once_per_distinct_value() {
        let (mut slyder, values) =
            recorded(percent_slyder(Direction::LeftToRight, TrackingBehavior::OnLocation));

        slyder.handle_touch(&TouchEvent::down(Point::new(100.0, 0.0)));
        slyder.handle_touch(&TouchEvent::moved(Point::new(100.0, 5.0)));
        slyder.handle_touch(&TouchEvent::moved(Point::new(150.0, 5.0)));
        slyder.handle_touch(&TouchEvent::moved(Point::new(150.0, 9.0)));
        slyder.handle_touch(&TouchEvent::Ended);
        assert_eq!(*values.lock(), vec![50.0, 75.0]);

        // A new gesture may report a value already seen in an earlier one.
        slyder.handle_touch(&TouchEvent::down(Point::new(100.0, 0.0)));
        slyder.handle_touch(&TouchEvent::Ended);
        assert_eq!(*values.lock(), vec![50.0, 75.0, 50.0]);
    }

    #[test]
    fn test_fit_runs_on_every_model_change_only() {
        let mut slyder = percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation);
        let before = slyder.surface().fitted.len();
        slyder.handle_touch(&TouchEvent::Ended);
        slyder.handle_touch(&TouchEvent::moved(Point::new(30.0, 0.0)));
        assert_eq!(slyder.surface().fitted.len(), before);

        slyder.handle_touch(&TouchEvent::down(Point::new(30.0, 0.0)));
        assert_eq!(slyder.surface().fitted.len(), before + 1);
        assert!(slyder.surface().fitted.last().is_some_and(|m| m.interacting));
    }

    #[test]
    fn test_set_value_clamps_and_notifies_on_change() {
        let (mut slyder, values) =
            recorded(percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation));
        slyder.set_value(140.0);
        slyder.set_value(100.0);
        slyder.set_value(-3.0);
        assert!(slyder.set_value(f64::NAN).is_noop());
        assert_eq!(*values.lock(), vec![100.0, 0.0]);
    }

    #[test]
    fn test_set_range_rejects_inverted_bounds() {
        let mut slyder = percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation);
        slyder.set_value(80.0);
        let err = slyder.set_range(10.0, 5.0).unwrap_err();
        assert_eq!(
            err,
            SlyderError::InvalidRange {
                minimum: 10.0,
                maximum: 5.0
            }
        );
        assert_eq!(slyder.view_model().maximum_value, 100.0);

        let transition = slyder.set_range(0.0, 50.0).unwrap();
        assert_eq!(slyder.value(), 50.0);
        assert!(transition.effects.contains(&Effect::ValueChanged(50.0)));
    }

    #[test]
    fn test_set_options_applies_to_next_gesture() {
        let mut slyder = percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation);
        slyder.set_value(50.0);
        slyder.handle_touch(&TouchEvent::down(Point::new(10.0, 0.0)));
        slyder.set_options(Options::default().tracking_behavior(TrackingBehavior::OnLocation));
        slyder.handle_touch(&TouchEvent::moved(Point::new(60.0, 0.0)));
        assert_eq!(slyder.value(), 75.0);
        slyder.handle_touch(&TouchEvent::Ended);

        slyder.handle_touch(&TouchEvent::down(Point::new(20.0, 0.0)));
        assert_eq!(slyder.value(), 10.0);
    }

    #[test]
    fn test_with_option_list() {
        let slyder = Slyder::with_options(
            RecordingSurface::new(Direction::LeftToRight),
            [SlyderOption::Tracks(TrackingBehavior::OnLocationOnceMoved)],
        );
        assert_eq!(
            slyder.options().tracking_behavior,
            TrackingBehavior::OnLocationOnceMoved
        );
    }

    #[test]
    fn test_handler_can_be_replaced_and_removed() {
        let (mut slyder, values) =
            recorded(percent_slyder(Direction::LeftToRight, TrackingBehavior::OnTranslation));
        let handler = slyder.value_change_handler().cloned();
        slyder.set_value_change_handler(None);
        slyder.set_value(10.0);
        assert!(values.lock().is_empty());

        slyder.set_value_change_handler(handler);
        slyder.set_value(20.0);
        assert_eq!(*values.lock(), vec![20.0]);
    }

    #[test]
    fn test_drives_thumbless_surface() {
        let surface = ThumblessSlider::new(
            ThumblessSliderArgs::default()
                .direction(Direction::BottomToTop)
                .bounds_size(Size::new(40.0, 200.0)),
        );
        let mut slyder = Slyder::new(
            surface,
            Options::default().tracking_behavior(TrackingBehavior::OnLocation),
        );
        slyder.handle_touch(&TouchEvent::down(Point::new(20.0, 150.0)));
        assert_eq!(slyder.value(), 0.25);
        assert_eq!(slyder.surface().value_ratio(), 0.25);
        assert_eq!(slyder.surface().fill_length(), 50.0);
        assert!(slyder.surface_mut().take_transition().is_some_and(|t| t.scaled));
    }
}
