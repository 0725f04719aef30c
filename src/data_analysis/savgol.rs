// src/data_analysis/savgol.rs

use nalgebra::{DMatrix, DVector};
use ndarray::{s, Array1, ArrayView1};

use crate::config::SavgolParams;
use crate::error::{FlightDataError, FlightDataResult};

/// Savitzky-Golay smoothing with polynomial edge fitting.
///
/// Each interior sample is replaced by the value at the window center of the least
/// squares polynomial of degree `polyorder` fitted over `window_length` samples. The
/// first and last `window_length / 2` samples are taken from one polynomial fitted to
/// the first (respectively last) full window, evaluated at their own positions, so
/// the output has the same length as the input.
///
/// Polynomials up to degree `polyorder` pass through unchanged.
pub fn savgol_filter(data: &[f64], params: &SavgolParams) -> FlightDataResult<Vec<f64>> {
    params.validate()?;
    let window = params.window_length;
    if data.len() < window {
        return Err(FlightDataError::InsufficientData {
            required: window,
            available: data.len(),
        });
    }

    let half = window / 2;
    let n = data.len();
    let mut smoothed = vec![0.0; n];
    let samples = ArrayView1::from(data);

    let center_weights = evaluation_weights(window, params.polyorder, 0.0)?;
    for i in half..n - half {
        smoothed[i] = samples.slice(s![i - half..=i + half]).dot(&center_weights);
    }

    // Edges: evaluate the first/last window's fit away from its center.
    let head = samples.slice(s![..window]);
    let tail = samples.slice(s![n - window..]);
    for offset in 1..=half {
        let before_center = evaluation_weights(window, params.polyorder, -(offset as f64))?;
        smoothed[half - offset] = head.dot(&before_center);

        let after_center = evaluation_weights(window, params.polyorder, offset as f64)?;
        smoothed[n - 1 - half + offset] = tail.dot(&after_center);
    }

    Ok(smoothed)
}

/// Weights `w` such that `w . window` is the least squares polynomial fit over the
/// window evaluated at `at`, an offset in samples from the window center.
///
/// Offsets are normalised to [-1, 1] before building the normal equations.
pub fn evaluation_weights(
    window_length: usize,
    polyorder: usize,
    at: f64,
) -> FlightDataResult<Array1<f64>> {
    let half = (window_length / 2) as f64;
    let scale = if half > 0.0 { half } else { 1.0 };
    let terms = polyorder + 1;

    // Vandermonde matrix: A[j][k] = u_j^k
    let vandermonde = DMatrix::from_fn(window_length, terms, |j, k| {
        ((j as f64 - half) / scale).powi(k as i32)
    });
    let normal = vandermonde.transpose() * &vandermonde;

    let at_scaled = at / scale;
    let target = DVector::from_fn(terms, |k, _| at_scaled.powi(k as i32));

    let z = normal.lu().solve(&target).ok_or_else(|| {
        FlightDataError::InvalidFilterParameters(format!(
            "singular fit for window {window_length}, order {polyorder}"
        ))
    })?;

    let weights = vandermonde * z;
    Ok(weights.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-7;

    fn params(window_length: usize, polyorder: usize) -> SavgolParams {
        SavgolParams {
            window_length,
            polyorder,
        }
    }

    #[test]
    fn test_classic_five_point_quadratic_weights() {
        let weights = evaluation_weights(5, 2, 0.0).unwrap();
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|w| w / 35.0);
        for (w, e) in weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12, "{w} vs {e}");
        }
    }

    #[test]
    fn test_cubic_edges_follow_window_fit() {
        // t^3 on 0..4 against a single quadratic fit over the whole window.
        let data: Vec<f64> = (0..5).map(|i| (i as f64).powi(3)).collect();
        let smoothed = savgol_filter(&data, &params(5, 2)).unwrap();
        let expected = [1.2, -1.4, 8.0, 29.4, 62.8];
        for (s, e) in smoothed.iter().zip(expected) {
            assert!((s - e).abs() < 1e-9, "{s} vs {e}");
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        for at in [-50.0, -10.0, 0.0, 25.0, 50.0] {
            let weights = evaluation_weights(101, 2, at).unwrap();
            assert!((weights.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quadratic_passes_through_unchanged() {
        let data: Vec<f64> = (0..300)
            .map(|i| {
                let t = i as f64 * 0.05;
                -16.1 * t * t + 600.0 * t + 4500.0
            })
            .collect();
        let smoothed = savgol_filter(&data, &params(101, 2)).unwrap();
        assert_eq!(smoothed.len(), data.len());
        for (s, d) in smoothed.iter().zip(&data) {
            assert!((s - d).abs() < TOLERANCE * d.abs().max(1.0), "{s} vs {d}");
        }
    }

    #[test]
    fn test_exact_window_length_input() {
        let data: Vec<f64> = (0..7).map(|i| 2.0 * i as f64 + 1.0).collect();
        let smoothed = savgol_filter(&data, &params(7, 1)).unwrap();
        for (s, d) in smoothed.iter().zip(&data) {
            assert!((s - d).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_noise_is_damped() {
        let data: Vec<f64> = (0..400)
            .map(|i| 100.0 + if i % 2 == 0 { 5.0 } else { -5.0 })
            .collect();
        let smoothed = savgol_filter(&data, &params(101, 2)).unwrap();
        for s in &smoothed[50..350] {
            assert!((s - 100.0).abs() < 0.5, "residual noise {s}");
        }
    }

    #[test]
    fn test_short_input_is_insufficient() {
        let data = vec![1.0; 100];
        match savgol_filter(&data, &params(101, 2)) {
            Err(FlightDataError::InsufficientData {
                required,
                available,
            }) => {
                assert_eq!(required, 101);
                assert_eq!(available, 100);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let data = vec![0.0; 200];
        assert!(matches!(
            savgol_filter(&data, &params(100, 2)),
            Err(FlightDataError::InvalidFilterParameters(_))
        ));
        assert!(matches!(
            savgol_filter(&data, &params(5, 5)),
            Err(FlightDataError::InvalidFilterParameters(_))
        ));
    }
}
