// src/data_input/flight_log.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::{FLIGHT_CSV_ALTITUDE_HEADER, FLIGHT_CSV_TIME_HEADER};
use crate::error::{FlightDataError, FlightDataResult};

/// Altimeter samples read from a flight CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLog {
    /// Sample times in seconds.
    pub time_s: Vec<f64>,
    /// Barometric altitude in feet.
    pub altitude_ft: Vec<f64>,
}

impl FlightLog {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}

/// Parses the flight CSV, locating the `Time` and `Altitude` columns by header name.
///
/// Other columns are ignored. A missing header or a value that does not parse as a
/// number aborts the load.
pub fn parse_flight_log_from_reader<R: Read>(reader: R) -> FlightDataResult<FlightLog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let header_record = reader.headers()?.clone();
    log::debug!("Headers found in CSV: {:?}", header_record);

    let find_header = |target: &str| -> FlightDataResult<usize> {
        header_record
            .iter()
            .position(|h| h.trim() == target)
            .ok_or_else(|| FlightDataError::MissingColumn {
                column: target.to_string(),
                available: header_record.iter().collect::<Vec<_>>().join(", "),
            })
    };
    let time_idx = find_header(FLIGHT_CSV_TIME_HEADER)?;
    let altitude_idx = find_header(FLIGHT_CSV_ALTITUDE_HEADER)?;

    let mut log_data = FlightLog::default();
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let parse_field = |csv_idx: usize, column: &str| -> FlightDataResult<f64> {
            let raw = record.get(csv_idx).unwrap_or("");
            raw.parse::<f64>().map_err(|_| FlightDataError::InvalidValue {
                column: column.to_string(),
                row: row_index + 1,
                value: raw.to_string(),
            })
        };
        log_data
            .time_s
            .push(parse_field(time_idx, FLIGHT_CSV_TIME_HEADER)?);
        log_data
            .altitude_ft
            .push(parse_field(altitude_idx, FLIGHT_CSV_ALTITUDE_HEADER)?);
    }
    Ok(log_data)
}

/// Reads the flight CSV from disk.
pub fn parse_flight_log(path: &Path) -> FlightDataResult<FlightLog> {
    let file = File::open(path)?;
    let log_data = parse_flight_log_from_reader(BufReader::new(file))?;
    log::info!(
        "Finished reading {} data rows from '{}'.",
        log_data.len(),
        path.display()
    );
    Ok(log_data)
}
