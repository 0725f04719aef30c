// src/config.rs

// Run configuration for both pipelines. The defaults reproduce the fixed file names
// and filter constants; tests substitute their own values.

use std::path::PathBuf;

use crate::constants::{
    ALTITUDE_VELOCITY_HTML_FILE, ALTITUDE_VELOCITY_PNG_FILE, ALTITUDE_VELOCITY_TITLE,
    BNO_ACCEL_COLUMNS, BNO_ACCEL_OUTPUT_FILE, BNO_GYRO_COLUMNS, BNO_GYRO_OUTPUT_FILE,
    FLIGHT_CSV_FILE, MAGNITUDE_LABEL, MMA_COLUMNS, MMA_OUTPUT_FILE, SAVGOL_POLYORDER,
    SAVGOL_WINDOW_LENGTH, SENSOR_BUNDLE_FILE, STANDARD_GRAVITY_M_S2,
};
use crate::error::{FlightDataError, FlightDataResult};
use crate::plot_functions::plot_multi_axis::PlotLabels;
use crate::sensor_names::Sensor;

/// Savitzky-Golay filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavgolParams {
    /// Odd number of samples in each fit window.
    pub window_length: usize,
    /// Degree of the fitted polynomial; must be below `window_length`.
    pub polyorder: usize,
}

impl SavgolParams {
    pub fn validate(&self) -> FlightDataResult<()> {
        if self.window_length == 0 || self.window_length % 2 == 0 {
            return Err(FlightDataError::InvalidFilterParameters(format!(
                "window_length must be a positive odd number, got {}",
                self.window_length
            )));
        }
        if self.polyorder >= self.window_length {
            return Err(FlightDataError::InvalidFilterParameters(format!(
                "polyorder {} must be less than window_length {}",
                self.polyorder, self.window_length
            )));
        }
        Ok(())
    }
}

impl Default for SavgolParams {
    fn default() -> Self {
        Self {
            window_length: SAVGOL_WINDOW_LENGTH,
            polyorder: SAVGOL_POLYORDER,
        }
    }
}

/// One multi-axis figure drawn from a single sensor table.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPlotSpec {
    pub sensor: Sensor,
    pub columns: Vec<String>,
    /// Unit conversion divisor applied to every column, if any.
    pub divisor: Option<f64>,
    pub labels: Option<PlotLabels>,
    /// Output file name, relative to the output directory.
    pub output_file: String,
}

impl SensorPlotSpec {
    fn labelled(
        sensor: Sensor,
        columns: &[&str],
        divisor: Option<f64>,
        title: &str,
        y_label: &str,
        output_file: &str,
    ) -> Self {
        let mut legend: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        legend.push(MAGNITUDE_LABEL.to_string());
        Self {
            sensor,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            divisor,
            labels: Some(PlotLabels {
                title: title.to_string(),
                x_label: "Time (s)".to_string(),
                y_label: y_label.to_string(),
                legend,
            }),
            output_file: output_file.to_string(),
        }
    }
}

/// Multi-sensor plots from the sensor bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSensorConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub plots: Vec<SensorPlotSpec>,
}

impl Default for MultiSensorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(SENSOR_BUNDLE_FILE),
            output_dir: PathBuf::from("."),
            plots: vec![
                SensorPlotSpec::labelled(
                    Sensor::Bno,
                    &BNO_ACCEL_COLUMNS,
                    Some(STANDARD_GRAVITY_M_S2),
                    "BNO055 Acceleration",
                    "Acceleration (G)",
                    BNO_ACCEL_OUTPUT_FILE,
                ),
                SensorPlotSpec::labelled(
                    Sensor::Bno,
                    &BNO_GYRO_COLUMNS,
                    None,
                    "BNO055 Roll Rate",
                    "Roll Rate (deg/s)",
                    BNO_GYRO_OUTPUT_FILE,
                ),
                SensorPlotSpec::labelled(
                    Sensor::Mma,
                    &MMA_COLUMNS,
                    Some(STANDARD_GRAVITY_M_S2),
                    "MMA65XX High-Range Acceleration",
                    "Acceleration (G)",
                    MMA_OUTPUT_FILE,
                ),
            ],
        }
    }
}

/// Altitude and derived velocity from the flight CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeVelocityConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Static image output; `None` skips raster rendering.
    pub png_file: Option<String>,
    pub html_file: String,
    pub title: String,
    pub filter: SavgolParams,
    /// Open the interactive document afterwards (needs the `viewer` feature).
    pub show_viewer: bool,
}

impl Default for AltitudeVelocityConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(FLIGHT_CSV_FILE),
            output_dir: PathBuf::from("."),
            png_file: Some(ALTITUDE_VELOCITY_PNG_FILE.to_string()),
            html_file: ALTITUDE_VELOCITY_HTML_FILE.to_string(),
            title: ALTITUDE_VELOCITY_TITLE.to_string(),
            filter: SavgolParams::default(),
            show_viewer: true,
        }
    }
}
