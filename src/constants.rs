// src/constants.rs

use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Plot dimensions (10 x 6 inches at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;

// Fraction of the data span added on each side of an axis range.
pub const RANGE_PADDING_FRACTION: f64 = 0.05;
// Padding used when the data span is (nearly) zero.
pub const RANGE_PADDING_FLAT: f64 = 0.5;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LEGEND_LINE_LENGTH_PX: i32 = 20;

// --- Unit conversion ---
/// Divisor turning m/s^2 into multiples of gravitational acceleration.
pub const STANDARD_GRAVITY_M_S2: f64 = 9.8;
/// Bundle timestamps are microseconds.
pub const MICROSECONDS_PER_SECOND: f64 = 1e6;

// --- Multi-sensor plots ---
pub const SENSOR_BUNDLE_FILE: &str = "data.json";
pub const BNO_ACCEL_COLUMNS: [&str; 3] = ["a_x", "a_y", "a_z"];
pub const BNO_GYRO_COLUMNS: [&str; 3] = ["w_x", "w_y", "w_z"];
pub const MMA_COLUMNS: [&str; 2] = ["mma_x", "mma_y"];
pub const MAGNITUDE_LABEL: &str = "magnitude";
pub const BNO_ACCEL_OUTPUT_FILE: &str = "bno_accel.html";
pub const BNO_GYRO_OUTPUT_FILE: &str = "bno_gyro.html";
pub const MMA_OUTPUT_FILE: &str = "mma.html";
pub const COLOR_MAGNITUDE: &RGBColor = &BLACK;

// --- Altitude and velocity ---
pub const FLIGHT_CSV_FILE: &str = "dataOlympus2019-04-06.csv";
pub const FLIGHT_CSV_TIME_HEADER: &str = "Time";
pub const FLIGHT_CSV_ALTITUDE_HEADER: &str = "Altitude";
pub const ALTITUDE_VELOCITY_PNG_FILE: &str = "Olympus_2019-04-06_altitude_velocity.png";
pub const ALTITUDE_VELOCITY_HTML_FILE: &str = "figure.html";
pub const ALTITUDE_VELOCITY_TITLE: &str = "Olympus 2019-04-06 Altitude and Velocity";

// Savitzky-Golay smoothing: about five seconds of Stratologger data at 20 Hz.
// Wide enough to flatten the transonic altitude dip.
pub const SAVGOL_WINDOW_LENGTH: usize = 101;
pub const SAVGOL_POLYORDER: usize = 2;
pub const NOMINAL_ALTIMETER_RATE_HZ: f64 = 20.0;

// Viridis positions for the altitude/velocity series.
pub const VIRIDIS_RAW_ALTITUDE: f64 = 0.0;
pub const VIRIDIS_FILTERED_ALTITUDE: f64 = 0.5;
pub const VIRIDIS_VELOCITY: f64 = 0.9;

// src/constants.rs
