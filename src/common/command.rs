//! SHT3x command words.
//!
//! Every command is a big-endian 16-bit word. See the SHT3x-DIS datasheet,
//! section 4 "Operation and Communication".

use core::convert::TryFrom;

use super::Sht3xError;

mod codes {
    // single shot, clock stretching disabled
    pub const MEASURE_HPM: u16 = 0x2400;
    pub const MEASURE_MPM: u16 = 0x240B;
    pub const MEASURE_LPM: u16 = 0x2416;

    // single shot, clock stretching enabled
    pub const MEASURE_HPM_CS: u16 = 0x2C06;
    pub const MEASURE_MPM_CS: u16 = 0x2C0D;
    pub const MEASURE_LPM_CS: u16 = 0x2C10;

    pub const READ_STATUS_REG: u16 = 0xF32D;
    pub const CLEAR_STATUS_REG: u16 = 0x3041;
    pub const READ_SERIAL_ID: u16 = 0x3780;

    // alert limit readout
    pub const READ_HIALRT_LIM_SET: u16 = 0xE11F;
    pub const READ_HIALRT_LIM_CLR: u16 = 0xE114;
    pub const READ_LOALRT_LIM_CLR: u16 = 0xE109;
    pub const READ_LOALRT_LIM_SET: u16 = 0xE102;

    // alert limit programming, followed by one argument word
    pub const WRITE_HIALRT_LIM_SET: u16 = 0x611D;
    pub const WRITE_HIALRT_LIM_CLR: u16 = 0x6116;
    pub const WRITE_LOALRT_LIM_CLR: u16 = 0x610B;
    pub const WRITE_LOALRT_LIM_SET: u16 = 0x6100;
}
use codes::*;

/// Repeatability (precision) of a single shot measurement. Lower precision
/// converts faster and draws less power.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum MeasurementMode {
    /// Low repeatability.
    Low,
    /// Medium repeatability.
    Medium,
    /// High repeatability.
    #[default]
    High,
}

impl TryFrom<u8> for MeasurementMode {
    type Error = Sht3xError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MeasurementMode::Low),
            1 => Ok(MeasurementMode::Medium),
            2 => Ok(MeasurementMode::High),
            _ => Err(Sht3xError::InvalidParameters),
        }
    }
}

/// The four programmable alert limits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertThreshold {
    /// Alert is raised above this limit.
    HighSet,
    /// High alert is cleared below this limit.
    HighClear,
    /// Low alert is cleared above this limit.
    LowClear,
    /// Alert is raised below this limit.
    LowSet,
}

impl AlertThreshold {
    pub const ALL: [AlertThreshold; 4] = [
        AlertThreshold::HighSet,
        AlertThreshold::HighClear,
        AlertThreshold::LowClear,
        AlertThreshold::LowSet,
    ];
}

impl TryFrom<u8> for AlertThreshold {
    type Error = Sht3xError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AlertThreshold::HighSet),
            1 => Ok(AlertThreshold::HighClear),
            2 => Ok(AlertThreshold::LowClear),
            3 => Ok(AlertThreshold::LowSet),
            _ => Err(Sht3xError::InvalidParameters),
        }
    }
}

/// Represents an SHT3x command.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Single shot measurement. The sensor answers with T (CRC) RH (CRC).
    Measure { mode: MeasurementMode, clock_stretching: bool },
    /// Read the status register (one word).
    ReadStatus,
    /// Clear the alert flags of the status register.
    ClearStatus,
    /// Read the 32-bit serial number (two words).
    ReadSerialId,
    /// Program an alert limit. Takes one argument word.
    WriteAlertLimit(AlertThreshold),
    /// Read back an alert limit (one word).
    ReadAlertLimit(AlertThreshold),
}

impl Command {
    /// Returns the 16-bit command word sent on the wire.
    pub const fn code(self) -> u16 {
        match self {
            Command::Measure { mode, clock_stretching: false } => match mode {
                MeasurementMode::High => MEASURE_HPM,
                MeasurementMode::Medium => MEASURE_MPM,
                MeasurementMode::Low => MEASURE_LPM,
            },
            Command::Measure { mode, clock_stretching: true } => match mode {
                MeasurementMode::High => MEASURE_HPM_CS,
                MeasurementMode::Medium => MEASURE_MPM_CS,
                MeasurementMode::Low => MEASURE_LPM_CS,
            },
            Command::ReadStatus => READ_STATUS_REG,
            Command::ClearStatus => CLEAR_STATUS_REG,
            Command::ReadSerialId => READ_SERIAL_ID,
            Command::WriteAlertLimit(slot) => match slot {
                AlertThreshold::HighSet => WRITE_HIALRT_LIM_SET,
                AlertThreshold::HighClear => WRITE_HIALRT_LIM_CLR,
                AlertThreshold::LowClear => WRITE_LOALRT_LIM_CLR,
                AlertThreshold::LowSet => WRITE_LOALRT_LIM_SET,
            },
            Command::ReadAlertLimit(slot) => match slot {
                AlertThreshold::HighSet => READ_HIALRT_LIM_SET,
                AlertThreshold::HighClear => READ_HIALRT_LIM_CLR,
                AlertThreshold::LowClear => READ_LOALRT_LIM_CLR,
                AlertThreshold::LowSet => READ_LOALRT_LIM_SET,
            },
        }
    }
}

impl From<Command> for u16 {
    fn from(value: Command) -> Self {
        value.code()
    }
}
