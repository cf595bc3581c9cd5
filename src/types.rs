use crate::hw_def::*;

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// SHTC3 device driver
#[derive(Debug)]
pub struct Shtc3<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) address: u8,
    pub(crate) operation_mode: OperationMode,
    pub(crate) power_mode: PowerMode,
    pub(crate) settle_time_ms: u32,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// The identity register readback did not match the SHTC3
    DeviceIdMismatch,
    /// Invalid input data provided
    InvalidInputData,
    /// Failure of a checksum from the device was detected
    #[cfg(feature = "crc")]
    CrcMismatch,
}

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawMeasurement {
    /// unprocessed temperature ticks
    pub temperature: u16,
    /// unprocessed relative humidity ticks
    pub humidity: u16,
}
impl RawMeasurement {
    /// Get temperature in centigrade
    pub fn centigrade(&self) -> f64 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get temperature in fahrenheit
    pub fn fahrenheit(&self) -> f64 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f64 {
        raw_rel_humid_to_percent(self.humidity)
    }
}

/// Temperature and relative humidity from the device after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// degrees centigrade
    pub centigrade: f64,
    /// degrees fahrenheit
    pub fahrenheit: f64,
    /// relative humidity in percent
    pub humidity_percent: f64,
}
impl From<&RawMeasurement> for Measurement {
    fn from(raw: &RawMeasurement) -> Self {
        Self {
            centigrade: raw.centigrade(),
            fahrenheit: raw.fahrenheit(),
            humidity_percent: raw.humidity_percent(),
        }
    }
}
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C / {:.2} %RH", self.centigrade, self.humidity_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn raw_measurement_converts_both_fields() {
        let raw = RawMeasurement { temperature: 0x6666, humidity: 0x8000 };
        let m = Measurement::from(&raw);
        assert!(approx_eq!(f64, m.centigrade, 24.99, epsilon = 1e-9));
        assert!(approx_eq!(f64, m.fahrenheit, 76.982, epsilon = 1e-9));
        assert!(approx_eq!(f64, m.humidity_percent, 50.0, epsilon = 1e-9));
    }

    #[test]
    fn measurement_display_is_human_readable() {
        let raw = RawMeasurement { temperature: 0x6666, humidity: 0x8000 };
        assert_eq!(std::format!("{}", Measurement::from(&raw)), "24.99 °C / 50.00 %RH");
    }
}
