// src/font_config.rs

// Font styles for plot rendering, shared by the raster renderer and the
// interactive document so both outputs use the same sizes.

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND};

/// Font family name for default system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);

/// CSS font shorthand for a font tuple, used by the HTML viewer.
pub fn css_font(font: (&str, i32)) -> String {
    format!("{}px {}", font.1, font.0)
}
