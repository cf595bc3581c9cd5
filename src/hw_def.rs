//! Hardware definitions for the SHTC3: command words, timing, and the raw-value
//! conversions from the datasheet.

#[cfg(feature = "defmt")]
use defmt::Format;

/// Default I²C address of the SHTC3 (7-bit). The address is fixed in hardware.
pub const I2C_ADDR: u8 = 0x70;

/// Expected value of the second byte of the identity register readback.
pub const DEVICE_ID_BYTE: u8 = 0x87;

/// Propagation delay after writing a command word, in milliseconds.
pub const COMMAND_DELAY_MS: u32 = 1;

/// Conversion time for a measurement in normal mode, in milliseconds.
pub const SETTLE_TIME_NORMAL_MS: u32 = 13;

/// Conversion time for a measurement in low-power mode, in milliseconds.
pub const SETTLE_TIME_LOW_POWER_MS: u32 = 1;

/// 16-bit command words accepted by the device, written big-endian with no payload.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Command {
    /// Read the identity register
    ReadId = 0xEFC8,
    /// Software reset
    SoftReset = 0x805D,
    /// Enter sleep mode
    Sleep = 0xB098,
    /// Exit sleep mode
    Wakeup = 0x3517,
    /// Start a measurement in normal mode, temperature first
    MeasureNormal = 0x7866,
    /// Start a measurement in low-power mode, temperature first
    MeasureLowPower = 0x609C,
}
impl Command {
    /// The command word as the two big-endian bytes that go on the wire
    pub fn to_be_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }
}

/// Wake/sleep state of the sensor, distinct from the power mode
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationMode {
    /// Low-power idle; the sensor does not accept measurement commands
    Sleep,
    /// Awake and ready to measure
    Wakeup,
}
impl OperationMode {
    /// The 16-bit wire code selecting this mode
    pub fn code(self) -> u16 {
        self.command() as u16
    }

    /// Map a 16-bit wire code back to a mode; `None` for anything outside the
    /// enumerated set
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            code if code == Command::Sleep as u16 => Some(Self::Sleep),
            code if code == Command::Wakeup as u16 => Some(Self::Wakeup),
            _ => None,
        }
    }

    pub(crate) fn command(self) -> Command {
        match self {
            Self::Sleep => Command::Sleep,
            Self::Wakeup => Command::Wakeup,
        }
    }
}

/// Measurement duty-cycle profile. Selecting a power mode also selects the
/// conversion time the driver waits before reading results.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PowerMode {
    /// Normal measurement mode, best repeatability
    Normal,
    /// Low-power measurement mode, fastest conversion
    LowPower,
}
impl PowerMode {
    /// The 16-bit wire code selecting this mode. The same word doubles as the
    /// measurement trigger for the mode.
    pub fn code(self) -> u16 {
        self.command() as u16
    }

    /// Map a 16-bit wire code back to a mode; `None` for anything outside the
    /// enumerated set
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            code if code == Command::MeasureNormal as u16 => Some(Self::Normal),
            code if code == Command::MeasureLowPower as u16 => Some(Self::LowPower),
            _ => None,
        }
    }

    /// Conversion time to wait after triggering a measurement in this mode
    pub fn settle_time_ms(self) -> u32 {
        match self {
            Self::Normal => SETTLE_TIME_NORMAL_MS,
            Self::LowPower => SETTLE_TIME_LOW_POWER_MS,
        }
    }

    pub(crate) fn command(self) -> Command {
        match self {
            Self::Normal => Command::MeasureNormal,
            Self::LowPower => Command::MeasureLowPower,
        }
    }
}

/// Convert raw temperature ticks to degrees centigrade.
///
/// Fixed-point reformulation of the datasheet formula −45 + 175·raw/65536; the
/// scaling stays in integer math and only the final centi-degree value is
/// divided out.
pub fn raw_temp_to_centigrade(raw: u16) -> f64 {
    (((4375 * raw as u32) >> 14) as i32 - 4500) as f64 / 100.0
}

/// Convert raw temperature ticks to degrees fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f64 {
    raw_temp_to_centigrade(raw) * 9.0 / 5.0 + 32.0
}

/// Convert raw relative humidity ticks to percent.
///
/// Fixed-point reformulation of the datasheet formula 100·raw/65536.
pub fn raw_rel_humid_to_percent(raw: u16) -> f64 {
    ((625 * raw as u32) >> 12) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_words_are_big_endian() {
        assert_eq!(Command::ReadId.to_be_bytes(), [0xEF, 0xC8]);
        assert_eq!(Command::SoftReset.to_be_bytes(), [0x80, 0x5D]);
        assert_eq!(Command::Sleep.to_be_bytes(), [0xB0, 0x98]);
        assert_eq!(Command::Wakeup.to_be_bytes(), [0x35, 0x17]);
        assert_eq!(Command::MeasureNormal.to_be_bytes(), [0x78, 0x66]);
        assert_eq!(Command::MeasureLowPower.to_be_bytes(), [0x60, 0x9C]);
    }

    #[test]
    fn mode_codes_round_trip() {
        assert_eq!(OperationMode::from_code(0xB098), Some(OperationMode::Sleep));
        assert_eq!(OperationMode::from_code(0x3517), Some(OperationMode::Wakeup));
        assert_eq!(OperationMode::Sleep.code(), 0xB098);
        assert_eq!(OperationMode::Wakeup.code(), 0x3517);
        assert_eq!(OperationMode::from_code(0x0000), None);

        assert_eq!(PowerMode::from_code(0x7866), Some(PowerMode::Normal));
        assert_eq!(PowerMode::from_code(0x609C), Some(PowerMode::LowPower));
        assert_eq!(PowerMode::Normal.code(), 0x7866);
        assert_eq!(PowerMode::LowPower.code(), 0x609C);
        assert_eq!(PowerMode::from_code(0xFFFF), None);
    }

    #[test]
    fn settle_time_follows_power_mode() {
        assert_eq!(PowerMode::Normal.settle_time_ms(), 13);
        assert_eq!(PowerMode::LowPower.settle_time_ms(), 1);
    }

    #[test]
    fn temperature_conversion_spans_full_range() {
        assert_eq!(raw_temp_to_centigrade(0), -45.0);
        assert_eq!(raw_temp_to_centigrade(u16::MAX), 129.99);
        assert_eq!(raw_temp_to_centigrade(0x6666), 24.99);
        assert_eq!(raw_temp_to_fahrenheit(0), -49.0);
    }

    #[test]
    fn humidity_conversion_spans_full_range() {
        assert_eq!(raw_rel_humid_to_percent(0), 0.0);
        assert_eq!(raw_rel_humid_to_percent(u16::MAX), 99.99);
        assert_eq!(raw_rel_humid_to_percent(0x8000), 50.0);
    }
}
