// src/pipelines/altitude_velocity.rs

use std::error::Error;
use std::path::PathBuf;

use crate::config::AltitudeVelocityConfig;
use crate::constants::NOMINAL_ALTIMETER_RATE_HZ;
use crate::data_analysis::altitude_velocity::{derive_altitude_velocity, AltitudeVelocity};
use crate::data_analysis::sample_rate::estimate_sample_rate;
use crate::data_input::flight_log::parse_flight_log;
use crate::display;
use crate::html_export::save_html;
use crate::plot_framework::render_png;
use crate::plot_functions::plot_altitude_velocity::build_altitude_velocity_figure;

/// Result of one altitude/velocity run.
#[derive(Debug, Clone)]
pub struct AltitudeVelocityOutput {
    pub data: AltitudeVelocity,
    pub png_path: Option<PathBuf>,
    pub html_path: PathBuf,
}

/// Reads the flight CSV, smooths altitude, derives velocity and writes the
/// dual-axis figure as PNG (when configured) and interactive HTML.
pub fn run_altitude_velocity(
    config: &AltitudeVelocityConfig,
) -> Result<AltitudeVelocityOutput, Box<dyn Error>> {
    config.filter.validate()?;
    let log_data = parse_flight_log(&config.input_path)?;

    let sample_rate = estimate_sample_rate(&log_data.time_s);
    match sample_rate {
        Some(rate) => {
            log::info!("Estimated altimeter sample rate: {:.1} Hz", rate);
            if (rate - NOMINAL_ALTIMETER_RATE_HZ).abs() > 0.5 * NOMINAL_ALTIMETER_RATE_HZ {
                log::warn!(
                    "Sample rate differs from the nominal {:.0} Hz; filter window span changes accordingly.",
                    NOMINAL_ALTIMETER_RATE_HZ
                );
            }
            log::info!(
                "Savitzky-Golay window: {} samples (~{:.2} s), polyorder {}",
                config.filter.window_length,
                config.filter.window_length as f64 / rate,
                config.filter.polyorder
            );
        }
        None => log::warn!("Could not estimate sample rate from the time column."),
    }

    let data = derive_altitude_velocity(&log_data, &config.filter)?;
    let figure = build_altitude_velocity_figure(&data, &config.title);

    let png_path = match &config.png_file {
        Some(name) => {
            let path = config.output_dir.join(name);
            render_png(&figure, &path)?;
            Some(path)
        }
        None => None,
    };

    let html_path = config.output_dir.join(&config.html_file);
    save_html(&figure, &html_path)?;

    if config.show_viewer {
        display::show(&html_path);
    }

    Ok(AltitudeVelocityOutput {
        data,
        png_path,
        html_path,
    })
}
