// src/html_export.rs

// Interactive figure export: a single HTML file holding the figure as JSON plus an
// inline canvas viewer (hover readout, wheel zoom, drag pan, double-click reset).
// Needs nothing but a browser.

use serde::Serialize;
use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::font_config::{
    css_font, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
};
use crate::plot_framework::{hex_color, Figure, PlotSeries};

/// Viewer script embedded into every document.
static FIGURE_VIEWER_JS: &str = include_str!("../assets/figure_viewer.js");

#[derive(Debug, Serialize)]
struct AxisPayload<'a> {
    label: Option<&'a str>,
    range: [f64; 2],
}

#[derive(Debug, Serialize)]
struct SeriesPayload<'a> {
    label: &'a str,
    color: String,
    width: u32,
    axis: &'static str,
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct FontPayload {
    title: String,
    axis: String,
    legend: String,
}

#[derive(Debug, Serialize)]
struct FigurePayload<'a> {
    generator: String,
    title: Option<&'a str>,
    width: u32,
    height: u32,
    x_axis: AxisPayload<'a>,
    y_axis: AxisPayload<'a>,
    y2_axis: Option<AxisPayload<'a>>,
    legend: Option<&'static str>,
    fonts: FontPayload,
    series: Vec<SeriesPayload<'a>>,
}

fn axis_payload<'a>(label: Option<&'a str>, range: &Range<f64>) -> AxisPayload<'a> {
    AxisPayload {
        label,
        range: [range.start, range.end],
    }
}

fn series_payload<'a>(series: &'a PlotSeries, axis: &'static str) -> SeriesPayload<'a> {
    SeriesPayload {
        label: &series.label,
        color: hex_color(&series.color),
        width: series.stroke_width,
        axis,
        x: series.data.iter().map(|p| p.0).collect(),
        y: series.data.iter().map(|p| p.1).collect(),
    }
}

fn figure_payload(figure: &Figure) -> FigurePayload<'_> {
    let mut series: Vec<SeriesPayload> = figure
        .series
        .iter()
        .map(|s| series_payload(s, "primary"))
        .collect();
    if let Some(secondary) = &figure.secondary {
        series.extend(secondary.series.iter().map(|s| series_payload(s, "secondary")));
    }

    FigurePayload {
        generator: format!("rocket_flight_plots {}", crate::crate_version()),
        title: figure.title.as_deref(),
        width: figure.width,
        height: figure.height,
        x_axis: axis_payload(figure.x_label.as_deref(), &figure.x_range),
        y_axis: axis_payload(figure.y_label.as_deref(), &figure.y_range),
        y2_axis: figure
            .secondary
            .as_ref()
            .map(|s| axis_payload(Some(s.y_label.as_str()), &s.y_range)),
        legend: figure.legend.map(|p| p.as_str()),
        fonts: FontPayload {
            title: css_font(FONT_TUPLE_CHART_TITLE),
            axis: css_font(FONT_TUPLE_AXIS_LABEL),
            legend: css_font(FONT_TUPLE_LEGEND),
        },
        series,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serializes a figure into a self-contained interactive HTML document.
///
/// Output depends only on the figure, so identical figures give identical bytes.
/// Non-finite samples are written as `null` and shown as gaps.
pub fn figure_to_html(figure: &Figure) -> Result<String, serde_json::Error> {
    // '<' only occurs inside JSON strings, where < is equivalent and cannot
    // close the surrounding script element.
    let json = serde_json::to_string(&figure_payload(figure))?.replace('<', "\\u003c");
    let title = escape_html(figure.title.as_deref().unwrap_or("Figure"));

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ margin: 0; padding: 16px; font-family: sans-serif; background: #fafafa; }}
.figure {{ display: inline-block; background: #fff; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.2); }}
#figure-canvas {{ display: block; cursor: crosshair; }}
#figure-readout {{ min-height: 1.4em; padding: 4px 8px; font-size: 13px; font-family: monospace; white-space: pre; }}
</style>
</head>
<body>
<div class="figure">
<canvas id="figure-canvas" width="{width}" height="{height}"></canvas>
<div id="figure-readout"></div>
</div>
<script type="application/json" id="figure-data">{json}</script>
<script>
{script}
</script>
</body>
</html>
"#,
        title = title,
        width = figure.width,
        height = figure.height,
        json = json,
        script = FIGURE_VIEWER_JS,
    ))
}

/// Writes the interactive document, silently replacing any existing file.
pub fn save_html(figure: &Figure, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let html = figure_to_html(figure)?;
    fs::write(output_path, html)?;
    log::info!("  Interactive plot saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot_framework::{LegendPosition, SecondaryAxis};
    use plotters::style::RGBColor;

    fn figure() -> Figure {
        let mut figure = Figure::new(vec![PlotSeries::from_columns(
            &[0.0, 1.0, 2.0],
            &[1.0, f64::NAN, 3.0],
            "altitude",
            RGBColor(68, 1, 84),
            2,
        )]);
        figure.title = Some("Flight <1> & \"2\"".to_string());
        figure.x_label = Some("Time (s)".to_string());
        figure.legend = Some(LegendPosition::UpperRight);
        figure
    }

    fn embedded_payload(html: &str) -> serde_json::Value {
        let start_tag = r#"<script type="application/json" id="figure-data">"#;
        let start = html.find(start_tag).unwrap() + start_tag.len();
        let end = start + html[start..].find("</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = figure_to_html(&figure()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<canvas id=\"figure-canvas\""));
        assert!(html.contains("addEventListener(\"wheel\""));
        assert!(!html.contains("src=\"http"));
        assert!(html.contains("<title>Flight &lt;1&gt; &amp; &quot;2&quot;</title>"));
    }

    #[test]
    fn test_payload_round_trips_through_document() {
        let html = figure_to_html(&figure()).unwrap();
        let payload = embedded_payload(&html);
        assert_eq!(payload["title"], "Flight <1> & \"2\"");
        assert_eq!(payload["legend"], "upper-right");
        assert_eq!(payload["x_axis"]["label"], "Time (s)");
        assert!(payload["y2_axis"].is_null());

        let series = &payload["series"][0];
        assert_eq!(series["color"], "#440154");
        assert_eq!(series["axis"], "primary");
        assert_eq!(series["y"][0], 1.0);
        assert!(series["y"][1].is_null());
    }

    #[test]
    fn test_secondary_series_are_tagged() {
        let mut fig = figure();
        fig.secondary = Some(SecondaryAxis {
            y_range: -1.0..1.0,
            y_label: "Velocity (ft/s)".to_string(),
            series: vec![PlotSeries::from_columns(
                &[1.0],
                &[0.5],
                "velocity",
                RGBColor(0, 0, 0),
                2,
            )],
        });
        let payload = embedded_payload(&figure_to_html(&fig).unwrap());
        assert_eq!(payload["series"][1]["axis"], "secondary");
        assert_eq!(payload["y2_axis"]["label"], "Velocity (ft/s)");
        assert_eq!(payload["y2_axis"]["range"][0], -1.0);
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(
            figure_to_html(&figure()).unwrap(),
            figure_to_html(&figure()).unwrap()
        );
    }

    #[test]
    fn test_script_close_in_label_is_neutralised() {
        let mut fig = figure();
        fig.series[0].label = "</script><b>".to_string();
        let html = figure_to_html(&fig).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert_eq!(embedded_payload(&html)["series"][0]["label"], "</script><b>");
    }
}
