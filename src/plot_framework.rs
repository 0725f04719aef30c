// src/plot_framework.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    LEGEND_LINE_LENGTH_PX, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FLAT,
    RANGE_PADDING_FRACTION,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};

/// Calculate plot range with padding.
/// Adds `RANGE_PADDING_FRACTION` of the span on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_FLAT
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Minimum and maximum of the finite values, or `None` if there are none.
pub fn finite_extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let finite: Array1<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    let min = *finite.min().ok()?;
    let max = *finite.max().ok()?;
    Some((min, max))
}

/// Padded plot range covering the finite values, falling back to `0..1`.
pub fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = finite_extent(values).unwrap_or((0.0, 1.0));
    let (lo, hi) = calculate_range(min, max);
    lo..hi
}

/// Viridis colormap sample at `t` in [0, 1].
pub fn viridis_color(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Default line color cycle (category10), wrapping after ten series.
pub fn cycle_color(index: usize) -> RGBColor {
    let color = colorous::CATEGORY10[index % colorous::CATEGORY10.len()];
    RGBColor(color.r, color.g, color.b)
}

/// `#rrggbb` form of a color.
pub fn hex_color(color: &RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl PlotSeries {
    /// Pairs each time sample with its value; extra samples on either side are dropped.
    pub fn from_columns(
        time: &[f64],
        values: &[f64],
        label: &str,
        color: RGBColor,
        stroke_width: u32,
    ) -> Self {
        Self {
            data: time.iter().copied().zip(values.iter().copied()).collect(),
            label: label.to_string(),
            color,
            stroke_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

impl LegendPosition {
    fn series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LegendPosition::UpperLeft => "upper-left",
            LegendPosition::UpperRight => "upper-right",
        }
    }
}

/// A right-hand y-axis sharing the figure's x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryAxis {
    pub y_range: Range<f64>,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
}

/// In-memory figure: everything needed to render a raster image or an
/// interactive document, with no I/O attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub secondary: Option<SecondaryAxis>,
    /// `None` draws no legend.
    pub legend: Option<LegendPosition>,
    pub width: u32,
    pub height: u32,
}

impl Figure {
    /// Figure at the default pixel size, with ranges covering every series.
    pub fn new(series: Vec<PlotSeries>) -> Self {
        let x_range = padded_range(series.iter().flat_map(|s| s.data.iter().map(|p| p.0)));
        let y_range = padded_range(series.iter().flat_map(|s| s.data.iter().map(|p| p.1)));
        Self {
            title: None,
            x_label: None,
            y_label: None,
            x_range,
            y_range,
            series,
            secondary: None,
            legend: None,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }

    /// All series in legend order: primary first, then secondary.
    pub fn all_series(&self) -> impl Iterator<Item = &PlotSeries> {
        self.series
            .iter()
            .chain(self.secondary.iter().flat_map(|s| s.series.iter()))
    }
}

fn finite_points(data: &[(f64, f64)]) -> impl Iterator<Item = (f64, f64)> + '_ {
    data.iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

fn legend_line(color: RGBColor) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| {
        PathElement::new(
            vec![(x, y), (x + LEGEND_LINE_LENGTH_PX, y)],
            color.stroke_width(LINE_WIDTH_LEGEND),
        )
    }
}

fn configure_primary_mesh<'a, DB>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    figure: &Figure,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL);
    if let Some(x_label) = &figure.x_label {
        mesh.x_desc(x_label.as_str());
    }
    if let Some(y_label) = &figure.y_label {
        mesh.y_desc(y_label.as_str());
    }
    mesh.draw()?;
    Ok(())
}

fn draw_primary_lines<'a, DB>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &[PlotSeries],
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    for s in series {
        let drawn = chart.draw_series(LineSeries::new(
            finite_points(&s.data),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            drawn.label(s.label.as_str()).legend(legend_line(s.color));
        }
    }
    Ok(())
}

fn draw_legend<'a, DB>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    figure: &Figure,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    let has_labels = figure.all_series().any(|s| !s.label.is_empty());
    if let (Some(position), true) = (figure.legend, has_labels) {
        chart
            .configure_series_labels()
            .position(position.series_label_position())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Draws a figure onto any plotters drawing area.
pub fn draw_figure<DB>(root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70);
    if let Some(title) = &figure.title {
        builder.caption(title, FONT_TUPLE_CHART_TITLE);
    }

    match &figure.secondary {
        None => {
            let mut chart =
                builder.build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())?;
            configure_primary_mesh(&mut chart, figure)?;
            draw_primary_lines(&mut chart, &figure.series)?;
            draw_legend(&mut chart, figure)?;
        }
        Some(secondary) => {
            builder.right_y_label_area_size(70);
            let mut chart = builder
                .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())?
                .set_secondary_coord(figure.x_range.clone(), secondary.y_range.clone());
            configure_primary_mesh(&mut *chart, figure)?;
            chart
                .configure_secondary_axes()
                .y_desc(secondary.y_label.as_str())
                .label_style(FONT_TUPLE_AXIS_LABEL)
                .draw()?;
            draw_primary_lines(&mut *chart, &figure.series)?;
            for s in &secondary.series {
                let drawn = chart.draw_secondary_series(LineSeries::new(
                    finite_points(&s.data),
                    s.color.stroke_width(s.stroke_width),
                ))?;
                if !s.label.is_empty() {
                    drawn.label(s.label.as_str()).legend(legend_line(s.color));
                }
            }
            draw_legend(&mut *chart, figure)?;
        }
    }
    Ok(())
}

/// Renders a figure to a PNG file, overwriting any existing file.
pub fn render_png(figure: &Figure, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_path, (figure.width, figure.height)).into_drawing_area();
    draw_figure(&root, figure)?;
    root.present()?;
    log::info!("  Static plot saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_span() {
        let (lo, hi) = calculate_range(0.0, 100.0);
        assert!((lo + 5.0).abs() < 1e-12);
        assert!((hi - 105.0).abs() < 1e-12);
        assert_eq!(calculate_range(100.0, 0.0), (lo, hi));
    }

    #[test]
    fn test_calculate_range_flat_data() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn test_finite_extent_skips_nan() {
        assert_eq!(
            finite_extent(vec![f64::NAN, 2.0, -1.0, f64::INFINITY]),
            Some((-1.0, 2.0))
        );
        assert_eq!(finite_extent(vec![f64::NAN]), None);
        let fallback = padded_range(Vec::<f64>::new());
        assert!((fallback.start + 0.05).abs() < 1e-12);
        assert!((fallback.end - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_colors() {
        assert_eq!(hex_color(&RGBColor(0, 128, 255)), "#0080ff");
        // viridis starts dark purple and ends yellow
        let start = viridis_color(0.0);
        let end = viridis_color(1.0);
        assert!(start.2 > start.1);
        assert!(end.0 > 200 && end.1 > 200);
        assert_eq!(cycle_color(0), cycle_color(10));
        assert_ne!(cycle_color(0), cycle_color(1));
    }

    #[test]
    fn test_figure_ranges_cover_series() {
        let series = vec![
            PlotSeries::from_columns(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0], "a", BLACK, 1),
            PlotSeries::from_columns(&[0.0, 1.0], &[-5.0, 15.0], "b", BLACK, 1),
        ];
        let figure = Figure::new(series);
        assert!(figure.x_range.start < 0.0 && figure.x_range.end > 2.0);
        assert!(figure.y_range.start < -5.0 && figure.y_range.end > 15.0);
        assert_eq!(figure.all_series().count(), 2);
        assert_eq!(figure.width, PLOT_WIDTH);
    }
}
