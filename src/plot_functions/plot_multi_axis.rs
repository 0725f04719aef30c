// src/plot_functions/plot_multi_axis.rs

use ndarray::Array1;
use plotters::style::RGBColor;
use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_MAGNITUDE, LINE_WIDTH_PLOT};
use crate::data_analysis::magnitude::vector_magnitude;
use crate::error::{FlightDataError, FlightDataResult};
use crate::html_export::save_html;
use crate::plot_framework::{cycle_color, Figure, LegendPosition, PlotSeries};

/// Title, axis descriptions and legend entries for a multi-axis plot.
///
/// `legend` holds one entry per axis followed by the entry for the magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: Vec<String>,
}

fn series_from_arrays(
    time: &Array1<f64>,
    values: &Array1<f64>,
    label: &str,
    color: RGBColor,
) -> PlotSeries {
    PlotSeries {
        data: time.iter().copied().zip(values.iter().copied()).collect(),
        label: label.to_string(),
        color,
        stroke_width: LINE_WIDTH_PLOT,
    }
}

fn legend_entry(labels: Option<&PlotLabels>, index: usize) -> &str {
    labels.map_or("", |l| l.legend[index].as_str())
}

/// Builds the figure with one line per axis plus the black magnitude line.
///
/// Axes must already be in display units. Without labels the lines are drawn
/// without title, axis descriptions or legend.
pub fn build_multi_axis_figure(
    time: &Array1<f64>,
    axes: &[Array1<f64>],
    labels: Option<&PlotLabels>,
) -> FlightDataResult<Figure> {
    let magnitude = vector_magnitude(axes)?;
    if magnitude.len() != time.len() {
        return Err(FlightDataError::LengthMismatch {
            expected: time.len(),
            found: magnitude.len(),
        });
    }
    if let Some(labels) = labels {
        if labels.legend.len() != axes.len() + 1 {
            return Err(FlightDataError::LegendLabelCount {
                expected: axes.len() + 1,
                found: labels.legend.len(),
            });
        }
    }

    let mut series: Vec<PlotSeries> = axes
        .iter()
        .enumerate()
        .map(|(i, axis)| series_from_arrays(time, axis, legend_entry(labels, i), cycle_color(i)))
        .collect();
    series.push(series_from_arrays(
        time,
        &magnitude,
        legend_entry(labels, axes.len()),
        *COLOR_MAGNITUDE,
    ));

    let mut figure = Figure::new(series);
    if let Some(labels) = labels {
        figure.title = Some(labels.title.clone());
        figure.x_label = Some(labels.x_label.clone());
        figure.y_label = Some(labels.y_label.clone());
        figure.legend = Some(LegendPosition::UpperLeft);
    }
    Ok(figure)
}

/// Builds the multi-axis figure and, when `fname` is given, writes it as an
/// interactive HTML document (overwriting any existing file).
pub fn plot_multi_axis(
    time: &Array1<f64>,
    axes: &[Array1<f64>],
    labels: Option<&PlotLabels>,
    fname: Option<&Path>,
) -> Result<Figure, Box<dyn Error>> {
    let figure = build_multi_axis_figure(time, axes, labels)?;
    if let Some(path) = fname {
        save_html(&figure, path)?;
    }
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels() -> PlotLabels {
        PlotLabels {
            title: "BNO055 Acceleration".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Acceleration (G)".to_string(),
            legend: vec!["a_x".into(), "a_y".into(), "magnitude".into()],
        }
    }

    #[test]
    fn test_labelled_figure() {
        let time = array![0.0, 0.5, 1.0];
        let axes = vec![array![3.0, 0.0, 1.0], array![4.0, 2.0, 0.0]];
        let figure = build_multi_axis_figure(&time, &axes, Some(&labels())).unwrap();

        assert_eq!(figure.title.as_deref(), Some("BNO055 Acceleration"));
        assert_eq!(figure.legend, Some(LegendPosition::UpperLeft));
        assert_eq!(figure.series.len(), 3);
        let names: Vec<&str> = figure.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, vec!["a_x", "a_y", "magnitude"]);

        let magnitude = &figure.series[2];
        assert_eq!(magnitude.color, *COLOR_MAGNITUDE);
        assert_eq!(magnitude.data, vec![(0.0, 5.0), (0.5, 2.0), (1.0, 1.0)]);
        assert!(figure.y_range.end > 5.0);
    }

    #[test]
    fn test_unlabelled_figure_has_no_legend() {
        let time = array![0.0, 1.0];
        let axes = vec![array![1.0, -1.0]];
        let figure = build_multi_axis_figure(&time, &axes, None).unwrap();
        assert_eq!(figure.title, None);
        assert_eq!(figure.legend, None);
        assert_eq!(figure.series.len(), 2);
        assert!(figure.series.iter().all(|s| s.label.is_empty()));
        assert_eq!(figure.series[1].data, vec![(0.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_legend_count_checked() {
        let time = array![0.0, 1.0];
        let axes = vec![array![1.0, 2.0]];
        let err = build_multi_axis_figure(&time, &axes, Some(&labels())).unwrap_err();
        assert!(matches!(
            err,
            FlightDataError::LegendLabelCount {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_time_length_checked() {
        let time = array![0.0, 1.0, 2.0];
        let axes = vec![array![1.0, 2.0]];
        assert!(matches!(
            build_multi_axis_figure(&time, &axes, None),
            Err(FlightDataError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_plot_without_fname_writes_nothing() {
        let time = array![0.0, 1.0];
        let axes = vec![array![1.0, 2.0]];
        let figure = plot_multi_axis(&time, &axes, None, None).unwrap();
        assert_eq!(figure.series.len(), 2);
    }
}
