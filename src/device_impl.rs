use crate::hw_def::*;
use crate::types::*;

#[cfg(feature = "crc")]
use crc::{CRC_8_NRSC_5, Crc};
use embedded_hal::{delay::DelayNs, i2c::I2c};

#[cfg(feature = "defmt")]
use defmt::{trace, warn};
#[cfg(feature = "log")]
use log::{trace, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

// CRC-8/NRSC-5 matches the checksum the SHTC3 appends to each 16-bit word:
// polynomial 0x31, initial value 0xFF, MSB first, no final XOR.
#[cfg(feature = "crc")]
const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

impl<I2C, Delay, E> Shtc3<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a new SHTC3 driver instance on the default address.
    ///
    /// Probes the identity register, then wakes the sensor and selects
    /// [`PowerMode::Normal`]. Fails with [`Error::DeviceIdMismatch`] if the
    /// readback does not identify an SHTC3.
    pub fn new(i2c: I2C, delay: Delay) -> Result<Self, Error<E>> {
        Self::new_with_address(i2c, delay, I2C_ADDR)
    }

    /// Create a new SHTC3 driver instance on a non-default address
    pub fn new_with_address(i2c: I2C, delay: Delay, address: u8) -> Result<Self, Error<E>> {
        let mut dev = Self {
            i2c,
            delay,
            address,
            operation_mode: OperationMode::Sleep,
            power_mode: PowerMode::Normal,
            settle_time_ms: PowerMode::Normal.settle_time_ms(),
        };
        let id = dev.read_device_id()?;
        if id != DEVICE_ID_BYTE {
            warn!("shtc3::new(): unexpected identity byte {}", id);
            return Err(Error::DeviceIdMismatch);
        }
        dev.set_operation_mode(OperationMode::Wakeup)?;
        dev.set_power_mode(PowerMode::Normal)?;
        Ok(dev)
    }

    fn command(&mut self, command: Command) -> Result<(), Error<E>> {
        trace!("shtc3::command(): {:?}", command);
        self.i2c
            .write(self.address, &command.to_be_bytes())
            .map_err(Error::I2c)
    }

    fn read_device_id(&mut self) -> Result<u8, Error<E>> {
        self.command(Command::ReadId)?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        let mut buf = [0u8; 3];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        Ok(buf[1])
    }

    /// Put the sensor to sleep or wake it up.
    ///
    /// Writes the mode's command word, waits out the command propagation
    /// delay, and records the mode.
    pub fn set_operation_mode(&mut self, mode: OperationMode) -> Result<(), Error<E>> {
        self.command(mode.command())?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        self.operation_mode = mode;
        Ok(())
    }

    /// Set the operation mode from its 16-bit wire code.
    ///
    /// A code outside the enumerated set fails with
    /// [`Error::InvalidInputData`] before any bus traffic.
    pub fn set_operation_mode_raw(&mut self, code: u16) -> Result<(), Error<E>> {
        let mode = OperationMode::from_code(code).ok_or(Error::InvalidInputData)?;
        self.set_operation_mode(mode)
    }

    /// Select the measurement power mode.
    ///
    /// Writes the mode's command word, waits out the command propagation
    /// delay, and records the mode along with its conversion time.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<E>> {
        self.command(mode.command())?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        self.power_mode = mode;
        self.settle_time_ms = mode.settle_time_ms();
        Ok(())
    }

    /// Set the power mode from its 16-bit wire code.
    ///
    /// A code outside the enumerated set fails with
    /// [`Error::InvalidInputData`] before any bus traffic.
    pub fn set_power_mode_raw(&mut self, code: u16) -> Result<(), Error<E>> {
        let mode = PowerMode::from_code(code).ok_or(Error::InvalidInputData)?;
        self.set_power_mode(mode)
    }

    /// The last operation mode successfully written to the device
    pub fn operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    /// The last power mode successfully written to the device
    pub fn power_mode(&self) -> PowerMode {
        self.power_mode
    }

    /// Conversion time the driver waits before reading a measurement back
    pub fn settle_time_ms(&self) -> u32 {
        self.settle_time_ms
    }

    /// Take a temperature and relative humidity measurement.
    ///
    /// Runs the full cycle: wake the sensor, trigger a measurement in the
    /// current power mode, wait out the conversion time, read and CRC-check
    /// the result, and put the sensor back to sleep.
    pub fn measure(&mut self) -> Result<Measurement, Error<E>> {
        Ok(Measurement::from(&self.measure_raw()?))
    }

    /// Take a measurement and return the raw sensor ticks
    pub fn measure_raw(&mut self) -> Result<RawMeasurement, Error<E>> {
        self.set_operation_mode(OperationMode::Wakeup)?;
        self.command(self.power_mode.command())?;
        self.delay.delay_ms(self.settle_time_ms);
        let mut buf = [0u8; 6];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        Self::validate([buf[0], buf[1]], buf[2])?;
        Self::validate([buf[3], buf[4]], buf[5])?;
        let raw = RawMeasurement {
            temperature: u16::from_be_bytes([buf[0], buf[1]]),
            humidity: u16::from_be_bytes([buf[3], buf[4]]),
        };
        trace!(
            "shtc3::measure_raw(): temperature={} humidity={}",
            raw.temperature, raw.humidity
        );
        self.set_operation_mode(OperationMode::Sleep)?;
        Ok(raw)
    }

    /// The current temperature in degrees centigrade.
    ///
    /// Runs a full measurement cycle; call [`Shtc3::measure`] instead when
    /// both values are wanted, to avoid doubling the device transactions.
    pub fn temperature(&mut self) -> Result<f64, Error<E>> {
        Ok(self.measure()?.centigrade)
    }

    /// The current relative humidity in percent, from 0 to 100.
    ///
    /// Runs a full measurement cycle; call [`Shtc3::measure`] instead when
    /// both values are wanted, to avoid doubling the device transactions.
    pub fn relative_humidity(&mut self) -> Result<f64, Error<E>> {
        Ok(self.measure()?.humidity_percent)
    }

    /// Software reset
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.command(Command::SoftReset)?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Destroy the driver and release the I²C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn validate(word: [u8; 2], checksum: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "crc")]
        {
            let expected = CRC.checksum(&word);
            if checksum != expected {
                warn!(
                    "shtc3::validate(): crc mismatch: word={:?} checksum={} expected={}",
                    word, checksum, expected
                );
                return Err(Error::CrcMismatch);
            }
        }
        #[cfg(not(feature = "crc"))]
        let _ = (word, checksum);
        Ok(())
    }
}
