// src/common/hal_traits.rs

use super::error::Sht3xError;
use core::fmt::Debug;

/// Abstraction for delay operations required by the driver.
///
/// Note: `NativeAdapter` implements this on top of
/// `embedded_hal::delay::DelayNs`.
pub trait SensirionTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Word-oriented access to a Sensirion sensor on an I2C bus.
///
/// Implementations own the CRC handling: every word handed to the driver has
/// been checked, and every argument word written carries its CRC.
pub trait SensirionI2c {
    /// Associated error type of the underlying bus.
    type Error: Debug;

    /// Writes `command` followed by the argument words `args`.
    fn write_command_with_args(
        &mut self,
        address: u8,
        command: u16,
        args: &[u16],
    ) -> Result<(), Sht3xError<Self::Error>>;

    /// Reads `words.len()` CRC-checked words.
    fn read_words(&mut self, address: u8, words: &mut [u16]) -> Result<(), Sht3xError<Self::Error>>;

    /// Reads `data.len() / 2` CRC-checked words and stores them as big-endian
    /// bytes. `data.len()` must be even.
    fn read_words_as_bytes(
        &mut self,
        address: u8,
        data: &mut [u8],
    ) -> Result<(), Sht3xError<Self::Error>>;

    /// Writes a bare command word.
    fn write_command(&mut self, address: u8, command: u16) -> Result<(), Sht3xError<Self::Error>> {
        self.write_command_with_args(address, command, &[])
    }

    /// Writes `command` and immediately reads the answer.
    fn read_command(
        &mut self,
        address: u8,
        command: u16,
        words: &mut [u16],
    ) -> Result<(), Sht3xError<Self::Error>> {
        self.write_command(address, command)?;
        self.read_words(address, words)
    }
}

/// A bus that can also wait. Implemented for everything that is both
/// [`SensirionI2c`] and [`SensirionTimer`].
pub trait SensirionTransport: SensirionI2c + SensirionTimer {
    /// Writes `command`, waits `delay_us` and reads the answer. The read is
    /// skipped if the write fails.
    fn delayed_read_command(
        &mut self,
        address: u8,
        command: u16,
        delay_us: u32,
        words: &mut [u16],
    ) -> Result<(), Sht3xError<Self::Error>> {
        self.write_command(address, command)?;
        if delay_us > 0 {
            self.delay_us(delay_us);
        }
        self.read_words(address, words)
    }
}

impl<T: SensirionI2c + SensirionTimer> SensirionTransport for T {}
