// src/lib.rs - Library interface shared by the plotting binaries

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod display;
pub mod error;
pub mod font_config;
pub mod html_export;
pub mod pipelines;
pub mod plot_framework;
pub mod plot_functions;
pub mod sensor_names;

/// Crate version, recorded in every exported document.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
