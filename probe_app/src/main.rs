//! Collision probe
//!
//! Loads a scenario file (TOML or RON) describing named shapes and a list of
//! overlap, point and ray queries, evaluates them and logs the results.
//!
//! ```text
//! collision_probe [scenario-file]
//! ```
//!
//! Set `RUST_LOG=debug` to also see construction diagnostics from the library.

mod scenario;

use collision2d::foundation::logging;
use scenario::Scenario;

const DEFAULT_SCENARIO: &str = "probe_app/scenarios/basic.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SCENARIO.to_string());
    log::info!("Loading scenario from {}", path);

    let scenario = match Scenario::load(&path) {
        Ok(scenario) => scenario,
        Err(e) => {
            log::error!("Failed to load {}: {}", path, e);
            return Err(e.into());
        }
    };

    log::info!(
        "Scenario '{}': {} shapes, {} overlap, {} point and {} ray queries",
        scenario.name,
        scenario.shapes.len(),
        scenario.overlaps.len(),
        scenario.points.len(),
        scenario.rays.len()
    );

    match scenario.evaluate() {
        Ok(report) => {
            log::info!(
                "Finished: {} of {} contact queries touching, {} of {} rays hit",
                report.contacts,
                scenario.overlaps.len() + scenario.points.len(),
                report.hits,
                scenario.rays.len()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            Err(e.into())
        }
    }
}
