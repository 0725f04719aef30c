// src/plot_functions/plot_altitude_velocity.rs

use crate::constants::{
    LINE_WIDTH_PLOT, VIRIDIS_FILTERED_ALTITUDE, VIRIDIS_RAW_ALTITUDE, VIRIDIS_VELOCITY,
};
use crate::data_analysis::altitude_velocity::AltitudeVelocity;
use crate::plot_framework::{
    padded_range, viridis_color, Figure, LegendPosition, PlotSeries, SecondaryAxis,
};

pub const LABEL_RAW_ALTITUDE: &str = "Raw Altitude";
pub const LABEL_FILTERED_ALTITUDE: &str = "Filtered Altitude";
pub const LABEL_VELOCITY: &str = "Velocity from Filtered";

/// Dual-axis figure: raw and filtered altitude on the left axis, velocity (interior
/// samples only) on the right axis, sharing the time axis.
pub fn build_altitude_velocity_figure(data: &AltitudeVelocity, title: &str) -> Figure {
    let raw = PlotSeries::from_columns(
        &data.time_s,
        &data.raw_altitude_ft,
        LABEL_RAW_ALTITUDE,
        viridis_color(VIRIDIS_RAW_ALTITUDE),
        LINE_WIDTH_PLOT,
    );
    let filtered = PlotSeries::from_columns(
        &data.time_s,
        &data.filtered_altitude_ft,
        LABEL_FILTERED_ALTITUDE,
        viridis_color(VIRIDIS_FILTERED_ALTITUDE),
        LINE_WIDTH_PLOT,
    );

    let (velocity_time, velocity) = data.interior_velocity();
    let velocity_series = PlotSeries::from_columns(
        velocity_time,
        velocity,
        LABEL_VELOCITY,
        viridis_color(VIRIDIS_VELOCITY),
        LINE_WIDTH_PLOT,
    );

    let mut figure = Figure::new(vec![raw, filtered]);
    figure.title = Some(title.to_string());
    figure.x_label = Some("Time (s)".to_string());
    figure.y_label = Some("Altitude (ft)".to_string());
    figure.legend = Some(LegendPosition::UpperRight);
    figure.secondary = Some(SecondaryAxis {
        y_range: padded_range(velocity.iter().copied()),
        y_label: "Velocity (ft/s)".to_string(),
        series: vec![velocity_series],
    });
    figure
}
