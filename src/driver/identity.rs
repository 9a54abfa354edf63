// src/driver/identity.rs

use super::Sht3x;
use crate::common::{
    bytes_to_u32, Command, SensirionI2c, SensirionTimer, Sht3xAddr, Sht3xError,
};
use crate::common::timing::COMMAND_DURATION;
use core::fmt::Debug;

/// Version of this driver crate.
pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");

impl<IF> Sht3x<IF>
where
    IF: SensirionI2c + SensirionTimer,
    IF::Error: Debug,
{
    /// Reads the 32-bit serial number.
    pub fn read_serial(&mut self, address: Sht3xAddr) -> Result<u32, Sht3xError<IF::Error>> {
        self.send(address, Command::ReadSerialId)?;
        self.delay(COMMAND_DURATION);
        let mut bytes = [0u8; 4];
        self.interface.read_words_as_bytes(address.as_u8(), &mut bytes)?;
        let serial = bytes_to_u32(bytes);
        trace!("sht3x@{:#x}: serial {:#x}", address.as_u8(), serial);
        Ok(serial)
    }

    /// Returns [`DRIVER_VERSION`]. The address is not used.
    pub fn driver_version(&self, _address: Sht3xAddr) -> &'static str {
        DRIVER_VERSION
    }

    /// Returns the bus address of `address`. The driver keeps no address
    /// state, so this is a plain lookup.
    pub fn configured_address(&self, address: Sht3xAddr) -> u8 {
        address.as_u8()
    }
}
