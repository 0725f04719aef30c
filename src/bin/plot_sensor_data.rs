// src/bin/plot_sensor_data.rs

use std::error::Error;

use rocket_flight_plots::config::MultiSensorConfig;
use rocket_flight_plots::pipelines::multi_sensor::run_multi_sensor_plots;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("rocket_flight_plots {}", rocket_flight_plots::crate_version());

    let config = MultiSensorConfig::default();
    let written = run_multi_sensor_plots(&config)?;
    log::info!("Wrote {} interactive plots.", written.len());
    Ok(())
}
