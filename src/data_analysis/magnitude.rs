// src/data_analysis/magnitude.rs

use ndarray::Array1;

use crate::error::{FlightDataError, FlightDataResult};

/// Pointwise Euclidean norm across any number of equal-length axes.
///
/// `|v|[t] = sqrt(sum_i axis_i[t]^2)`. Axes of differing length are rejected.
pub fn vector_magnitude(axes: &[Array1<f64>]) -> FlightDataResult<Array1<f64>> {
    let first = axes.first().ok_or(FlightDataError::NoAxes)?;
    let len = first.len();

    let mut sum_sq = Array1::<f64>::zeros(len);
    for axis in axes {
        if axis.len() != len {
            return Err(FlightDataError::LengthMismatch {
                expected: len,
                found: axis.len(),
            });
        }
        sum_sq.zip_mut_with(axis, |acc, &v| *acc += v * v);
    }

    Ok(sum_sq.mapv_into(f64::sqrt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_three_axis_magnitude() {
        let x = array![3.0, 0.0, 1.0];
        let y = array![4.0, 0.0, 2.0];
        let z = array![0.0, -5.0, 2.0];
        let mag = vector_magnitude(&[x, y, z]).unwrap();
        assert_eq!(mag, array![5.0, 5.0, 3.0]);
    }

    #[test]
    fn test_single_axis_is_absolute_value() {
        let mag = vector_magnitude(&[array![-2.5, 0.0, 7.0]]).unwrap();
        assert_eq!(mag, array![2.5, 0.0, 7.0]);
    }

    #[test]
    fn test_magnitude_is_non_negative_and_matches_definition() {
        let axes: Vec<Array1<f64>> = (0..4)
            .map(|k| Array1::from_iter((0..50).map(|t| ((t * (k + 3)) as f64).sin() * 9.0 - 2.0)))
            .collect();
        let mag = vector_magnitude(&axes).unwrap();
        for t in 0..50 {
            let expected = axes.iter().map(|a| a[t] * a[t]).sum::<f64>().sqrt();
            assert!(mag[t] >= 0.0);
            assert!((mag[t] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ragged_axes_are_rejected() {
        let err = vector_magnitude(&[array![1.0, 2.0], array![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            FlightDataError::LengthMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_no_axes_is_rejected() {
        assert!(matches!(vector_magnitude(&[]), Err(FlightDataError::NoAxes)));
    }
}
