// src/bin/plot_altitude_velocity.rs

use std::error::Error;

use rocket_flight_plots::config::AltitudeVelocityConfig;
use rocket_flight_plots::pipelines::altitude_velocity::run_altitude_velocity;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("rocket_flight_plots {}", rocket_flight_plots::crate_version());

    let config = AltitudeVelocityConfig::default();
    let output = run_altitude_velocity(&config)?;
    log::info!(
        "Processed {} altitude samples from '{}'.",
        output.data.time_s.len(),
        config.input_path.display()
    );
    Ok(())
}
