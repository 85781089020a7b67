//! SkySim - N-Body Solar System Simulator
//!
//! Headless runner: loads a preset scenario, advances it for a number of
//! frames and logs where every body ended up.
//!
//! Usage: `skysim [scenario_id] [frames]`

use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use skysim::physics::SimulationPlugin;
use skysim::simulation::SolarSystem;
use skysim::types::SimulationTime;

const DEFAULT_SCENARIO: &str = "solar_system";
const DEFAULT_FRAMES: u32 = 600;
const FRAME_TIME: Duration = Duration::from_micros(16_667);

fn main() {
    let mut args = std::env::args().skip(1);
    let scenario_id = args.next().unwrap_or_else(|| DEFAULT_SCENARIO.to_string());
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            eprintln!("Invalid frame count: {err}");
            std::process::exit(2);
        }
    };

    let mut system = SolarSystem::default();
    if let Err(err) = system.load_scenario(&scenario_id) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Insert resources before the plugin so it keeps them
        .insert_resource(system)
        .insert_resource(SimulationTime::default())
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME_TIME))
        .add_plugins(SimulationPlugin);

    for _ in 0..frames {
        app.update();
    }

    report(app.world());
}

/// Log the final state of every body.
fn report(world: &World) {
    let sim_time = world.resource::<SimulationTime>();
    let system = world.resource::<SolarSystem>();

    info!(
        "Simulated {:.1} days{}",
        sim_time.days(),
        if sim_time.paused { " (paused)" } else { "" }
    );
    for body in system.bodies() {
        let pos = body.position_au();
        info!(
            "{:>3} {:<10} ({:>8.4}, {:>8.4}, {:>8.4}) AU, {:.2} km/s",
            body.id(),
            body.name,
            pos.x,
            pos.y,
            pos.z,
            body.velocity().length()
        );
    }
}
