// src/pipelines/mod.rs

pub mod altitude_velocity;
pub mod multi_sensor;

// src/pipelines/mod.rs
