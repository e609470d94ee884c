//! Headless demo of the slyder control.
//!
//! Replays scripted touch gestures against both rendering surfaces and logs
//! what the control and the surfaces did with them. Set `RUST_LOG=debug` to
//! see every replayed event.
mod scenarios;

use std::process::ExitCode;

use tracing::{error, info};

pub use scenarios::{Report, SCENARIOS, Scenario, find};

/// Filter used when `RUST_LOG` is unset.
const LOG_FILTER: &str = "error,example=info,slyder_ui=info,slyder_components=info";

/// Runs the named scenario, or every scenario for `None` or `"all"`.
pub fn run(name: Option<&str>) -> ExitCode {
    slyder_ui::logging::init_tracing_with(LOG_FILTER);

    let selected: Vec<&Scenario> = match name {
        None | Some("all") => SCENARIOS.iter().collect(),
        Some(name) => match find(name) {
            Some(scenario) => vec![scenario],
            None => {
                let known: Vec<&str> = SCENARIOS.iter().map(|scenario| scenario.name).collect();
                error!(name, ?known, "unknown scenario");
                return ExitCode::FAILURE;
            }
        },
    };

    for scenario in selected {
        info!(name = scenario.name, "{}", scenario.summary);
        match scenario.run() {
            Ok(report) => info!(
                name = scenario.name,
                value = report.value,
                notifications = ?report.notifications,
                "scenario finished"
            ),
            Err(err) => {
                error!(name = scenario.name, %err, "scenario failed");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
