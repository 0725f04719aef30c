// src/data_analysis/sample_rate.rs

/// Estimates the sample rate in Hz from the mean of strictly positive time deltas.
///
/// Returns `None` when fewer than two distinct timestamps exist.
pub fn estimate_sample_rate(time_s: &[f64]) -> Option<f64> {
    let mut total_delta = 0.0;
    let mut count = 0usize;
    for pair in time_s.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 1e-9 {
            total_delta += delta;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(1.0 / (total_delta / count as f64))
}
