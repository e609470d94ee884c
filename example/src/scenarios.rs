use std::sync::Arc;

use parking_lot::Mutex;
use slyder_components::{
    NativeSlider, Slidable, Slyder,
    slyder::{LocationMapping, Options, TrackingBehavior},
    thumbless_slider::{Scaling, ThumblessSlider, ThumblessSliderArgs},
};
use slyder_ui::{Direction, Point, ReadingDirection, Result, Size, TouchEvent};
use tracing::{debug, info};

/// A scripted gesture replayed against a freshly built control.
pub struct Scenario {
    /// Name accepted on the command line.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    run: fn() -> Result<Report>,
}

impl Scenario {
    /// Builds the control and replays the gesture.
    pub fn run(&self) -> Result<Report> {
        let _span = tracing::info_span!("scenario", name = self.name).entered();
        (self.run)()
    }
}

/// Outcome of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Value after the last event.
    pub value: f64,
    /// Every value the change handler was called with, in order.
    pub notifications: Vec<f64>,
    /// Whether a finger was still down after the last event.
    pub interacting: bool,
}

/// Every scenario, in the order `all` runs them.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "translation",
        summary: "drag a quarter of the track to the right",
        run: translation,
    },
    Scenario {
        name: "location",
        summary: "tap at three quarters of a filled track",
        run: location,
    },
    Scenario {
        name: "once-moved",
        summary: "tap, then slide; the value follows only once moving",
        run: once_moved,
    },
    Scenario {
        name: "rtl",
        summary: "drag right under a right-to-left layout",
        run: right_to_left,
    },
    Scenario {
        name: "vertical",
        summary: "drag up on a bottom-to-top track that grows while touched",
        run: vertical,
    },
    Scenario {
        name: "legacy-mapping",
        summary: "tap a 20..100 track with the legacy location formula",
        run: legacy_mapping,
    },
    Scenario {
        name: "interpolated-mapping",
        summary: "tap a 20..100 track with the interpolated location formula",
        run: interpolated_mapping,
    },
];

/// Looks up a scenario by name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

#[derive(Clone, Default)]
struct ValueLog(Arc<Mutex<Vec<f64>>>);

impl ValueLog {
    fn handler(&self) -> impl Fn(f64) + Send + Sync + 'static {
        let values = Arc::clone(&self.0);
        move |value| {
            info!(value, "value changed");
            values.lock().push(value);
        }
    }

    fn report<S: Slidable>(&self, slyder: &Slyder<S>) -> Report {
        Report {
            value: slyder.value(),
            notifications: self.0.lock().clone(),
            interacting: slyder.is_interacting(),
        }
    }
}

fn replay<S: Slidable>(slyder: &mut Slyder<S>, events: &[TouchEvent]) {
    for event in events {
        let transition = slyder.handle_touch(event);
        debug!(
            phase = ?event.phase(),
            location = ?event.primary().map(|touch| touch.location),
            effects = transition.effects.len(),
            "replayed"
        );
    }
}

fn native(options: Options) -> (Slyder<NativeSlider>, ValueLog) {
    let log = ValueLog::default();
    let slyder = Slyder::new(NativeSlider::new(Size::new(200.0, 44.0)), options)
        .on_value_change(log.handler());
    (slyder, log)
}

fn filled(args: ThumblessSliderArgs, options: Options) -> (Slyder<ThumblessSlider>, ValueLog) {
    let log = ValueLog::default();
    let slyder = Slyder::new(ThumblessSlider::new(args), options).on_value_change(log.handler());
    (slyder, log)
}

fn log_fill(surface: &ThumblessSlider) {
    info!(
        track = ?surface.track_size(),
        fill = ?surface.fill_frame(),
        corner_radius = surface.corner_radius_value(),
        "surface geometry"
    );
}

fn translation() -> Result<Report> {
    let (mut slyder, log) = native(Options::default());
    slyder.set_range(0.0, 100.0)?;
    slyder.set_value(50.0);
    replay(
        &mut slyder,
        &[
            TouchEvent::down(Point::new(10.0, 22.0)),
            TouchEvent::moved(Point::new(35.0, 22.0)),
            TouchEvent::moved(Point::new(60.0, 22.0)),
            TouchEvent::Ended,
        ],
    );
    info!(native_value = slyder.surface().value(), "native control fitted");
    Ok(log.report(&slyder))
}

fn location() -> Result<Report> {
    let (mut slyder, log) = filled(
        ThumblessSliderArgs::default()
            .direction(Direction::LeftToRight)
            .bounds_size(Size::new(200.0, 40.0)),
        Options::default().tracking_behavior(TrackingBehavior::OnLocation),
    );
    slyder.set_range(0.0, 100.0)?;
    replay(&mut slyder, &[TouchEvent::down(Point::new(150.0, 20.0))]);
    log_fill(slyder.surface());
    replay(&mut slyder, &[TouchEvent::Ended]);
    Ok(log.report(&slyder))
}

fn once_moved() -> Result<Report> {
    let (mut slyder, log) =
        native(Options::default().tracking_behavior(TrackingBehavior::OnLocationOnceMoved));
    slyder.set_range(0.0, 100.0)?;
    slyder.set_value(10.0);
    replay(
        &mut slyder,
        &[
            TouchEvent::down(Point::new(150.0, 22.0)),
            TouchEvent::moved(Point::new(150.0, 22.0)),
            TouchEvent::moved(Point::new(100.0, 22.0)),
            TouchEvent::Cancelled,
        ],
    );
    Ok(log.report(&slyder))
}

fn right_to_left() -> Result<Report> {
    let (mut slyder, log) = native(Options::default());
    slyder.layout(ReadingDirection::RightToLeft);
    slyder.set_range(0.0, 100.0)?;
    slyder.set_value(50.0);
    replay(
        &mut slyder,
        &[
            TouchEvent::down(Point::new(10.0, 22.0)),
            TouchEvent::moved(Point::new(60.0, 22.0)),
            TouchEvent::Ended,
        ],
    );
    Ok(log.report(&slyder))
}

fn vertical() -> Result<Report> {
    let (mut slyder, log) = filled(
        ThumblessSliderArgs::default()
            .direction(Direction::BottomToTop)
            .scale_ratio(Scaling::Both {
                on_axis: 1.25,
                against_axis: 1.5,
            })
            .bounds_size(Size::new(40.0, 200.0)),
        Options::default(),
    );
    slyder.set_value(0.5);
    replay(
        &mut slyder,
        &[
            TouchEvent::down(Point::new(20.0, 150.0)),
            TouchEvent::moved(Point::new(20.0, 100.0)),
        ],
    );
    if let Some(transition) = slyder.surface_mut().take_transition() {
        info!(?transition, "track scaling");
    }
    log_fill(slyder.surface());
    replay(&mut slyder, &[TouchEvent::Ended]);
    if let Some(transition) = slyder.surface_mut().take_transition() {
        info!(?transition, "track scaling");
    }
    Ok(log.report(&slyder))
}

fn mapping_tap(mapping: LocationMapping) -> Result<Report> {
    let (mut slyder, log) = filled(
        ThumblessSliderArgs::default()
            .location_mapping(mapping)
            .bounds_size(Size::new(200.0, 40.0)),
        Options::default()
            .tracking_behavior(TrackingBehavior::OnLocation)
            .location_mapping(mapping),
    );
    slyder.set_range(20.0, 100.0)?;
    replay(
        &mut slyder,
        &[TouchEvent::down(Point::new(50.0, 20.0)), TouchEvent::Ended],
    );
    info!(
        ?mapping,
        fill_ratio = slyder.surface().value_ratio(),
        "tap at a quarter of the track"
    );
    Ok(log.report(&slyder))
}

fn legacy_mapping() -> Result<Report> {
    mapping_tap(LocationMapping::Legacy)
}

fn interpolated_mapping() -> Result<Report> {
    mapping_tap(LocationMapping::Interpolated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str) -> Report {
        find(name).unwrap().run().unwrap()
    }

    #[test]
    fn test_names_are_unique() {
        for (index, scenario) in SCENARIOS.iter().enumerate() {
            assert!(
                SCENARIOS[index + 1..]
                    .iter()
                    .all(|other| other.name != scenario.name)
            );
        }
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_translation() {
        let report = run("translation");
        assert_eq!(report.value, 75.0);
        assert_eq!(report.notifications, vec![50.0, 62.5, 75.0]);
        assert!(!report.interacting);
    }

    #[test]
    fn test_location() {
        assert_eq!(run("location").notifications, vec![75.0]);
    }

    #[test]
    fn test_once_moved() {
        assert_eq!(run("once-moved").notifications, vec![10.0, 75.0, 50.0]);
    }

    #[test]
    fn test_right_to_left() {
        assert_eq!(run("rtl").value, 25.0);
    }

    #[test]
    fn test_vertical() {
        let report = run("vertical");
        assert_eq!(report.notifications, vec![0.5, 0.75]);
    }

    #[test]
    fn test_mappings_diverge() {
        assert_eq!(run("legacy-mapping").value, 30.0);
        assert_eq!(run("interpolated-mapping").value, 40.0);
    }

    #[test]
    fn test_every_scenario_ends_idle() {
        for scenario in SCENARIOS {
            assert!(!scenario.run().unwrap().interacting, "{}", scenario.name);
        }
    }
}
