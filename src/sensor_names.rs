/// Onboard sensor naming
///
/// The avionics bundle stores one table per sensor, keyed by index.

/// All sensor names, ordered by bundle index
pub const SENSOR_NAMES: [&str; 4] = ["bmp", "mma", "bno", "gps"];

/// One of the four sensors recorded in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    /// BMP barometric pressure sensor
    Bmp,
    /// MMA65XX high-range accelerometer
    Mma,
    /// BNO055 absolute orientation IMU
    Bno,
    /// GPS receiver
    Gps,
}

impl Sensor {
    pub const ALL: [Sensor; 4] = [Sensor::Bmp, Sensor::Mma, Sensor::Bno, Sensor::Gps];

    /// Bundle index of this sensor.
    pub fn index(self) -> usize {
        match self {
            Sensor::Bmp => 0,
            Sensor::Mma => 1,
            Sensor::Bno => 2,
            Sensor::Gps => 3,
        }
    }

    pub fn name(self) -> &'static str {
        SENSOR_NAMES[self.index()]
    }

    pub fn from_index(index: usize) -> Option<Sensor> {
        Sensor::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (sensor {})", self.name(), self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_index_round_trip() {
        for (i, sensor) in Sensor::ALL.iter().enumerate() {
            assert_eq!(sensor.index(), i);
            assert_eq!(Sensor::from_index(i), Some(*sensor));
        }
        assert_eq!(Sensor::from_index(4), None);
    }

    #[test]
    fn test_sensor_names() {
        assert_eq!(Sensor::Mma.name(), "mma");
        assert_eq!(Sensor::Bno.name(), "bno");
        assert_eq!(Sensor::Bno.to_string(), "bno (sensor 2)");
    }
}
