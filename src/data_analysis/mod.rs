// src/data_analysis/mod.rs

pub mod altitude_velocity;
pub mod axis_select;
pub mod derivative;
pub mod magnitude;
pub mod sample_rate;
pub mod savgol;

// src/data_analysis/mod.rs
