// src/lib.rs

//! Platform-agnostic driver for the Sensirion SHT3x (SHT30/SHT31/SHT35)
//! temperature and humidity sensors.
//!
//! The driver talks to the sensor through the [`SensirionI2c`] and
//! [`SensirionTimer`] traits. With the `impl-native` feature (on by default)
//! [`NativeAdapter`] implements both for any `embedded-hal` 1.0 I2C bus and
//! delay provider.
//!
//! ```ignore
//! use sht3x::{NativeAdapter, Sht3x, Sht3xAddr};
//!
//! let mut sensor = Sht3x::new(NativeAdapter::new(i2c, delay));
//! let m = sensor.measure_blocking_read(Sht3xAddr::Default)?;
//! // m.temperature is in milli-degrees Celsius, m.humidity in milli-percent RH
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod logging;

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    AlertLimit, AlertThreshold, Command, Config, Measurement, MeasurementMode, SensirionI2c,
    SensirionTimer, SensirionTransport, Sht3xAddr, Sht3xError, Status,
};
#[cfg(feature = "impl-native")]
pub use common::NativeAdapter;
pub use driver::{Sht3x, DRIVER_VERSION};
