// src/pipelines/multi_sensor.rs

use std::error::Error;
use std::path::PathBuf;

use crate::config::MultiSensorConfig;
use crate::data_analysis::axis_select::select_axes;
use crate::data_analysis::sample_rate::estimate_sample_rate;
use crate::data_input::sensor_bundle::load_sensor_bundle;
use crate::plot_functions::plot_multi_axis::plot_multi_axis;

/// Loads the sensor bundle and writes one interactive multi-axis plot per
/// configured sensor view. Returns the written paths in configuration order.
///
/// The first missing sensor or column aborts the run; plots already written stay
/// on disk.
pub fn run_multi_sensor_plots(config: &MultiSensorConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let bundle = load_sensor_bundle(&config.input_path)?;
    let mut written = Vec::with_capacity(config.plots.len());

    for plot in &config.plots {
        let table = bundle.table(plot.sensor)?;
        let time = table.time_seconds();
        match estimate_sample_rate(time.as_slice().unwrap_or(&[])) {
            Some(rate) => log::info!("{}: estimated sample rate {:.1} Hz", plot.sensor, rate),
            None => log::warn!("{}: could not estimate sample rate", plot.sensor),
        }

        let axes = select_axes(table, &plot.columns, plot.divisor)?;
        let output_path = config.output_dir.join(&plot.output_file);
        log::info!(
            "Plotting {} from {} ({} samples)...",
            plot.columns.join(", "),
            plot.sensor,
            time.len()
        );
        plot_multi_axis(&time, &axes, plot.labels.as_ref(), Some(&output_path))?;
        written.push(output_path);
    }

    Ok(written)
}
