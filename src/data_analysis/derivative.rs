// src/data_analysis/derivative.rs

use crate::error::{FlightDataError, FlightDataResult};

/// Value left at the first and last sample, where no centered difference exists.
pub const BOUNDARY_DERIVATIVE: f64 = 0.0;

/// Centered-difference derivative of `values` with respect to `time`.
///
/// Interior points use `(v[i+1] - v[i-1]) / (t[i+1] - t[i-1])`. The first and last
/// samples hold [`BOUNDARY_DERIVATIVE`] and carry no physical meaning; callers plotting
/// the result should use [`interior`] to drop them. Inputs shorter than three
/// samples have no interior and yield all-boundary output.
pub fn centered_difference(values: &[f64], time: &[f64]) -> FlightDataResult<Vec<f64>> {
    if values.len() != time.len() {
        return Err(FlightDataError::LengthMismatch {
            expected: time.len(),
            found: values.len(),
        });
    }

    let n = values.len();
    let mut derivative = vec![BOUNDARY_DERIVATIVE; n];
    if n < 3 {
        return Ok(derivative);
    }

    for i in 1..n - 1 {
        derivative[i] = (values[i + 1] - values[i - 1]) / (time[i + 1] - time[i - 1]);
    }

    Ok(derivative)
}

/// Interior samples of a series (everything but the first and last element).
pub fn interior<T>(data: &[T]) -> &[T] {
    if data.len() < 3 {
        return &[];
    }
    &data[1..data.len() - 1]
}
