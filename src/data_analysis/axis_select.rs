// src/data_analysis/axis_select.rs

use ndarray::Array1;

use crate::data_input::sensor_bundle::SensorTable;
use crate::error::FlightDataResult;

/// Divides every sample by `divisor` (e.g. m/s^2 to G with 9.8).
pub fn scale_series(raw: &[f64], divisor: f64) -> Array1<f64> {
    raw.iter().map(|v| v / divisor).collect()
}

/// Extracts the named columns from a sensor table, optionally dividing each
/// sample by `divisor`. Fails on the first column the table does not have.
pub fn select_axes<S: AsRef<str>>(
    table: &SensorTable,
    columns: &[S],
    divisor: Option<f64>,
) -> FlightDataResult<Vec<Array1<f64>>> {
    columns
        .iter()
        .map(|name| {
            let raw = table.column(name.as_ref())?;
            Ok(match divisor {
                Some(d) => scale_series(raw, d),
                None => Array1::from(raw.to_vec()),
            })
        })
        .collect()
}
