// src/plot_functions/mod.rs

pub mod plot_altitude_velocity;
pub mod plot_multi_axis;

// src/plot_functions/mod.rs
