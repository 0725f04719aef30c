// src/data_input/sensor_bundle.rs

use ndarray::Array1;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::MICROSECONDS_PER_SECOND;
use crate::error::{FlightDataError, FlightDataResult};
use crate::sensor_names::Sensor;

/// Table layout as written by pandas `DataFrame.to_json(orient="split")`.
#[derive(Debug, Deserialize)]
struct SplitTable {
    columns: Vec<String>,
    index: Vec<i64>,
    data: Vec<Vec<f64>>,
}

/// Time-indexed readings of one sensor, stored column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTable {
    /// Row timestamps in microseconds.
    pub timestamps_us: Vec<i64>,
    pub columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl SensorTable {
    /// Builds a table from row index and per-column values.
    pub fn new(
        timestamps_us: Vec<i64>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> FlightDataResult<Self> {
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            if column.len() != timestamps_us.len() {
                return Err(FlightDataError::MalformedTable(format!(
                    "column '{}' has {} values for {} index entries",
                    name,
                    column.len(),
                    timestamps_us.len()
                )));
            }
            names.push(name);
            values.push(column);
        }
        Ok(Self {
            timestamps_us,
            columns: names,
            values,
        })
    }

    fn from_split(split: SplitTable) -> FlightDataResult<Self> {
        let mut values = vec![Vec::with_capacity(split.data.len()); split.columns.len()];
        for (row_index, row) in split.data.iter().enumerate() {
            if row.len() != split.columns.len() {
                return Err(FlightDataError::MalformedTable(format!(
                    "row {} has {} values for {} columns",
                    row_index,
                    row.len(),
                    split.columns.len()
                )));
            }
            for (column, value) in values.iter_mut().zip(row) {
                column.push(*value);
            }
        }
        Self::new(split.index, split.columns.into_iter().zip(values).collect())
    }

    pub fn len(&self) -> usize {
        self.timestamps_us.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_us.is_empty()
    }

    /// Row timestamps converted to seconds.
    pub fn time_seconds(&self) -> Array1<f64> {
        self.timestamps_us
            .iter()
            .map(|&t_us| t_us as f64 / MICROSECONDS_PER_SECOND)
            .collect()
    }

    /// Values of the named column.
    pub fn column(&self, name: &str) -> FlightDataResult<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_slice())
            .ok_or_else(|| FlightDataError::MissingColumn {
                column: name.to_string(),
                available: self.columns.join(", "),
            })
    }
}

/// Readings of all onboard sensors, keyed by sensor index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorBundle {
    tables: BTreeMap<usize, SensorTable>,
}

impl SensorBundle {
    pub fn insert(&mut self, sensor_index: usize, table: SensorTable) {
        self.tables.insert(sensor_index, table);
    }

    pub fn table(&self, sensor: Sensor) -> FlightDataResult<&SensorTable> {
        self.tables
            .get(&sensor.index())
            .ok_or(FlightDataError::MissingSensor(sensor.index()))
    }

    pub fn sensor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.tables.keys().copied()
    }

    /// Parses a bundle from any JSON source.
    pub fn from_reader<R: Read>(reader: R) -> FlightDataResult<Self> {
        let raw: BTreeMap<usize, SplitTable> = serde_json::from_reader(reader)?;
        let mut bundle = SensorBundle::default();
        for (sensor_index, split) in raw {
            let table = SensorTable::from_split(split).map_err(|e| match e {
                FlightDataError::MalformedTable(msg) => {
                    FlightDataError::MalformedTable(format!("sensor {sensor_index}: {msg}"))
                }
                other => other,
            })?;
            bundle.insert(sensor_index, table);
        }
        Ok(bundle)
    }
}

/// Loads the sensor bundle from disk. Any I/O or structural problem is fatal.
pub fn load_sensor_bundle(path: &Path) -> FlightDataResult<SensorBundle> {
    let file = File::open(path)?;
    let bundle = SensorBundle::from_reader(BufReader::new(file))?;

    log::info!("Loaded sensor bundle '{}':", path.display());
    for sensor_index in bundle.sensor_indices() {
        let rows = bundle.tables[&sensor_index].len();
        match Sensor::from_index(sensor_index) {
            Some(sensor) => log::info!("  {sensor}: {rows} rows"),
            None => log::info!("  unknown sensor {sensor_index}: {rows} rows"),
        }
    }
    Ok(bundle)
}
