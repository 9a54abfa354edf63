// src/common/address.rs

use super::error::Sht3xError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of an SHT3x, selected by the ADDR pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(u8)]
pub enum Sht3xAddr {
    /// ADDR pin tied to VSS.
    #[default]
    Default = 0x44,
    /// ADDR pin tied to VDD.
    Alternate = 0x45,
}

impl Sht3xAddr {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Sht3xAddr {
    type Error = Sht3xError;

    /// Accepts only the two addresses the sensor can be strapped to.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x44 => Ok(Sht3xAddr::Default),
            0x45 => Ok(Sht3xAddr::Alternate),
            _ => Err(Sht3xError::InvalidParameters),
        }
    }
}

impl From<Sht3xAddr> for u8 {
    fn from(value: Sht3xAddr) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for Sht3xAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.as_u8())
    }
}
