// src/common/error.rs

/// Errors reported by the driver and the bus transports.
///
/// `E` is the error type of the underlying bus implementation. Errors that
/// cannot involve the bus (e.g. parameter validation) use the default `E = ()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Sht3xError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying bus error from the HAL implementation.
    #[error("I2C bus error: {0:?}")]
    Bus(E),

    /// The sensor did not acknowledge. Without clock stretching this is how the
    /// sensor signals that a conversion is still running.
    #[error("no acknowledgement from the sensor")]
    Nack,

    /// Malformed or implausible payload (e.g. odd byte count).
    #[error("bad data received from the sensor")]
    BadData,

    /// Received CRC does not match calculated CRC.
    #[error("CRC mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    CrcMismatch { expected: u8, calculated: u8 },

    /// Reserved for probe-style consumers; never raised by the driver itself.
    #[error("unknown device")]
    UnknownDevice,

    /// Out-of-range enumerator passed by the caller.
    #[error("invalid parameters")]
    InvalidParameters,

    /// Frame does not fit the fixed-capacity transfer buffer.
    #[error("buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },
}

impl<E: core::fmt::Debug> Sht3xError<E> {
    /// Flat integer status code for this error. Success is `0` and never
    /// produced here.
    pub const fn code(&self) -> i16 {
        match self {
            Sht3xError::Bus(_)
            | Sht3xError::Nack
            | Sht3xError::BadData
            | Sht3xError::BufferOverflow { .. } => -1,
            Sht3xError::CrcMismatch { .. } => -2,
            Sht3xError::UnknownDevice => -3,
            Sht3xError::InvalidParameters => -4,
        }
    }
}
