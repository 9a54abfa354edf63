// src/driver/measurement.rs

use super::Sht3x;
use crate::common::{
    timing, Measurement, SensirionI2c, SensirionTimer, Sht3xAddr, Sht3xError,
};
use core::fmt::Debug;

impl<IF> Sht3x<IF>
where
    IF: SensirionI2c + SensirionTimer,
    IF::Error: Debug,
{
    /// Starts a single shot measurement with the configured mode.
    ///
    /// The result is fetched with [`Sht3x::read`] once the conversion is done
    /// (see [`timing::MEASUREMENT_DURATION`]).
    pub fn measure(&mut self, address: Sht3xAddr) -> Result<(), Sht3xError<IF::Error>> {
        let command = self.config.measure_command();
        self.send(address, command)
    }

    /// Reads the result of a measurement started with [`Sht3x::measure`].
    ///
    /// A sensor that is still converting does not acknowledge the read, which
    /// shows up as [`Sht3xError::Nack`].
    pub fn read(&mut self, address: Sht3xAddr) -> Result<Measurement, Sht3xError<IF::Error>> {
        let mut words = [0u16; 2];
        self.interface.read_words(address.as_u8(), &mut words)?;
        let m = Measurement::from_words(words);
        debug!(
            "sht3x@{:#x}: T={} mC RH={} m%",
            address.as_u8(),
            m.temperature,
            m.humidity
        );
        Ok(m)
    }

    /// Non-blocking variant of [`Sht3x::read`]: a conversion still in
    /// progress is reported as `WouldBlock`.
    pub fn read_nb(&mut self, address: Sht3xAddr) -> nb::Result<Measurement, Sht3xError<IF::Error>> {
        match self.read(address) {
            Ok(m) => Ok(m),
            Err(Sht3xError::Nack) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    }

    /// Starts a measurement, waits for it and reads the result.
    ///
    /// With clock stretching enabled the sensor holds the bus until the data
    /// is ready and no wait is inserted.
    pub fn measure_blocking_read(
        &mut self,
        address: Sht3xAddr,
    ) -> Result<Measurement, Sht3xError<IF::Error>> {
        self.measure(address)?;
        if !self.config.clock_stretching {
            self.delay(timing::MEASUREMENT_DURATION);
        }
        self.read(address)
    }
}
