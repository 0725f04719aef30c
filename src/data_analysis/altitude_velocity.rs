// src/data_analysis/altitude_velocity.rs

use crate::config::SavgolParams;
use crate::data_analysis::derivative::{centered_difference, interior};
use crate::data_analysis::savgol::savgol_filter;
use crate::data_input::flight_log::FlightLog;
use crate::error::FlightDataResult;

/// Altitude before and after smoothing, with the velocity derived from the
/// smoothed altitude. All vectors share the length of `time_s`.
#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeVelocity {
    pub time_s: Vec<f64>,
    pub raw_altitude_ft: Vec<f64>,
    pub filtered_altitude_ft: Vec<f64>,
    /// Centered-difference velocity; first and last entries are boundary fill.
    pub velocity_ft_s: Vec<f64>,
}

impl AltitudeVelocity {
    /// Time and velocity with the boundary samples removed.
    pub fn interior_velocity(&self) -> (&[f64], &[f64]) {
        (interior(&self.time_s), interior(&self.velocity_ft_s))
    }
}

/// Smooths altitude with a Savitzky-Golay filter and differentiates the result.
pub fn derive_altitude_velocity(
    log_data: &FlightLog,
    params: &SavgolParams,
) -> FlightDataResult<AltitudeVelocity> {
    let filtered = savgol_filter(&log_data.altitude_ft, params)?;
    let velocity = centered_difference(&filtered, &log_data.time_s)?;
    Ok(AltitudeVelocity {
        time_s: log_data.time_s.clone(),
        raw_altitude_ft: log_data.altitude_ft.clone(),
        filtered_altitude_ft: filtered,
        velocity_ft_s: velocity,
    })
}
