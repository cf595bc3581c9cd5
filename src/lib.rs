//! This is a platform-agnostic Rust driver for the Sensirion SHTC3 low-power humidity and
//! temperature digital sensor using the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//!
//! This driver allows you to:
//! - Probe the device identity register at construction.
//! - Put the sensor to sleep and wake it back up.
//! - Select the normal or low-power measurement mode, which also selects the
//!   conversion time the driver waits before reading results.
//! - Trigger a measurement and read back a CRC-checked temperature and relative
//!   humidity pair, either converted to engineering units or as raw sensor ticks.
//! - Trigger a software reset.
//!
//! This driver does not yet support the following device features:
//! - Clock-stretched measurement readout.
//! - The humidity-first data ordering variants of the measurement commands.
//!
//! ## Features
//!
//! - `crc`: Checks received CRC against computed CRC.
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: SHTC3
//!
//! The following description is copied from the manufacturer's datasheet:
//!
//! The SHTC3 is a digital humidity and temperature sensor designed especially for
//! battery-driven high-volume consumer electronics applications. To maximize battery
//! life, the SHTC3 features two selectable measurement modes with different power
//! budgets, as well as a sleep mode drawing less than a microampere. The sensor covers
//! a humidity measurement range of 0 to 100 %RH and a temperature measurement range of
//! −40 °C to 125 °C, and communicates over I²C at a fixed address of 0x70 with speeds
//! up to 1 MHz.
//!
//! Datasheet:
//!   [SHTC3](https://sensirion.com/media/documents/643F9C8E/63A5A436/Datasheet_SHTC3.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal` implementation, then
//! instantiate the device.
//!
//! ## Example:
//!
//! ```ignore
//! use shtc3::{PowerMode, Shtc3};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! // Shtc3; probes the identity register and wakes the sensor
//! let mut shtc3 = Shtc3::new(i2c, delay).unwrap();
//!
//! // Read and display a sample
//! let measurement = shtc3.measure().unwrap();
//! println!("{}", measurement);
//!
//! // The same, in the fast low-repeatability mode
//! shtc3.set_power_mode(PowerMode::LowPower).unwrap();
//! let measurement = shtc3.measure().unwrap();
//! println!("{:3} %RH, {:0.1} °C",
//!     measurement.humidity_percent,
//!     measurement.centigrade);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod device_impl;
mod hw_def;
mod types;

pub use crate::{hw_def::*, types::*};
