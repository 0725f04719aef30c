// src/data_input/mod.rs

pub mod flight_log;
pub mod sensor_bundle;

// src/data_input/mod.rs
