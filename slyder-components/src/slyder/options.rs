use derive_setters::Setters;

use super::view_model::LocationMapping;

/// How the thumb follows the user's finger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingBehavior {
    /// The thumb is always attached to the finger, starting at touch-down.
    OnLocation,
    /// The thumb jumps to the finger once it starts moving; a tap alone does
    /// not move it.
    OnLocationOnceMoved,
    /// The thumb moves the same distance, in the same direction, as the
    /// finger.
    #[default]
    OnTranslation,
}

impl TrackingBehavior {
    /// Whether this behavior follows the absolute touch location.
    pub fn tracks_location(self) -> bool {
        matches!(
            self,
            TrackingBehavior::OnLocation | TrackingBehavior::OnLocationOnceMoved
        )
    }

    /// Whether the location mapping is applied at touch-down already.
    pub fn responds_immediately(self) -> bool {
        matches!(self, TrackingBehavior::OnLocation)
    }
}

/// Configuration of a slyder control.
///
/// Changes made while a gesture is in progress apply from the next touch-down
/// on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Behavior when the user moves a finger on the track.
    pub tracking_behavior: TrackingBehavior,
    /// Formula turning a touch location into a value for the location-based
    /// behaviors.
    pub location_mapping: LocationMapping,
}

/// A single configuration entry, for building [`Options`] from a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlyderOption {
    /// Sets [`Options::tracking_behavior`].
    Tracks(TrackingBehavior),
    /// Sets [`Options::location_mapping`].
    MapsLocation(LocationMapping),
}

impl FromIterator<SlyderOption> for Options {
    /// Folds the entries over the defaults; later entries win.
    fn from_iter<I: IntoIterator<Item = SlyderOption>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Options::default(), |options, option| match option {
                SlyderOption::Tracks(behavior) => options.tracking_behavior(behavior),
                SlyderOption::MapsLocation(mapping) => options.location_mapping(mapping),
            })
    }
}
