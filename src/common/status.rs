// src/common/status.rs

/// Snapshot of the sensor's 16-bit status register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status(u16);

impl Status {
    pub const ALERT_PENDING: u16 = 0x8000;
    pub const HEATER_ON: u16 = 0x2000;
    pub const HUMIDITY_TRACKING_ALERT: u16 = 0x0800;
    pub const TEMPERATURE_TRACKING_ALERT: u16 = 0x0400;
    pub const SYSTEM_RESET_DETECTED: u16 = 0x0010;
    pub const COMMAND_FAILED: u16 = 0x0002;
    pub const LAST_CRC_FAILED: u16 = 0x0001;

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Status(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    #[inline]
    const fn is_set(&self, mask: u16) -> bool {
        self.0 & mask != 0
    }

    /// At least one alert is pending.
    pub const fn alert_pending(&self) -> bool {
        self.is_set(Self::ALERT_PENDING)
    }

    pub const fn heater_on(&self) -> bool {
        self.is_set(Self::HEATER_ON)
    }

    pub const fn humidity_tracking_alert(&self) -> bool {
        self.is_set(Self::HUMIDITY_TRACKING_ALERT)
    }

    pub const fn temperature_tracking_alert(&self) -> bool {
        self.is_set(Self::TEMPERATURE_TRACKING_ALERT)
    }

    /// Set after power-up, soft reset or reset pin; cleared by `clear_status`.
    pub const fn system_reset_detected(&self) -> bool {
        self.is_set(Self::SYSTEM_RESET_DETECTED)
    }

    /// The last command was not processed (invalid or failed checksum).
    pub const fn command_failed(&self) -> bool {
        self.is_set(Self::COMMAND_FAILED)
    }

    /// The checksum of the last write transfer failed.
    pub const fn last_crc_failed(&self) -> bool {
        self.is_set(Self::LAST_CRC_FAILED)
    }
}

impl From<u16> for Status {
    fn from(value: u16) -> Self {
        Status(value)
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        value.0
    }
}
