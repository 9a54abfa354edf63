// src/driver/mod.rs

mod alert;
mod identity;
mod measurement;
#[cfg(test)]
pub(crate) mod mock;

pub use identity::DRIVER_VERSION;

use crate::common::{
    timing, Command, Config, MeasurementMode, SensirionI2c, SensirionTimer, SensirionTransport,
    Sht3xAddr, Sht3xError, Status,
};
use core::fmt::Debug;

/// SHT3x driver.
///
/// The handle owns the bus transport and the measurement [`Config`]. The
/// sensor address is passed to every call, so one handle can drive a sensor
/// at each address; they then share the configuration.
#[derive(Debug)]
pub struct Sht3x<IF>
where
    IF: SensirionI2c + SensirionTimer,
    IF::Error: Debug,
{
    interface: IF,
    config: Config,
}

impl<IF> Sht3x<IF>
where
    IF: SensirionI2c + SensirionTimer,
    IF::Error: Debug,
{
    /// Creates a driver with the default configuration: high precision,
    /// no clock stretching.
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, Config::default())
    }

    pub fn with_config(interface: IF, config: Config) -> Self {
        Sht3x { interface, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver and gives back the transport.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Configuration ---

    /// Selects the repeatability used by subsequent [`Sht3x::measure`] calls.
    /// A measurement already running on the sensor is not affected.
    pub fn set_power_mode(&mut self, mode: MeasurementMode) {
        self.config.mode = mode;
    }

    /// Two-level shortcut for [`Sht3x::set_power_mode`]: low precision when
    /// `enable` is set, high precision otherwise.
    pub fn enable_low_power_mode(&mut self, enable: bool) {
        self.config.mode = if enable { MeasurementMode::Low } else { MeasurementMode::High };
    }

    pub fn set_clock_stretching(&mut self, enabled: bool) {
        self.config.clock_stretching = enabled;
    }

    // --- Status register ---

    /// Checks that a sensor answers at `address` by reading its status
    /// register.
    pub fn probe(&mut self, address: Sht3xAddr) -> Result<(), Sht3xError<IF::Error>> {
        self.status(address).map(|_| ())
    }

    /// Reads the status register.
    pub fn status(&mut self, address: Sht3xAddr) -> Result<Status, Sht3xError<IF::Error>> {
        let mut word = [0u16; 1];
        debug!("sht3x@{:#x}: read status", address.as_u8());
        self.interface.delayed_read_command(
            address.as_u8(),
            Command::ReadStatus.code(),
            timing::as_micros_u32(timing::COMMAND_DURATION),
            &mut word,
        )?;
        Ok(Status::from_bits(word[0]))
    }

    /// Clears the alert flags in the status register.
    pub fn clear_status(&mut self, address: Sht3xAddr) -> Result<(), Sht3xError<IF::Error>> {
        self.send(address, Command::ClearStatus)
    }

    // --- Low-Level Helpers (Private) ---

    fn send(&mut self, address: Sht3xAddr, command: Command) -> Result<(), Sht3xError<IF::Error>> {
        debug!("sht3x@{:#x}: command {:#x}", address.as_u8(), command.code());
        self.interface.write_command(address.as_u8(), command.code())
    }

    fn delay(&mut self, duration: core::time::Duration) {
        self.interface.delay_us(timing::as_micros_u32(duration));
    }
}
