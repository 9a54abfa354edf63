// src/common/native.rs

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use super::error::Sht3xError;
use super::hal_traits::{SensirionI2c, SensirionTimer};
use super::words::{self, MAX_READ_FRAME, MAX_WORDS, WORD_SIZE};

/// Adapts an `embedded-hal` 1.0 I2C bus and delay provider to the
/// [`SensirionI2c`] / [`SensirionTimer`] traits.
#[derive(Debug)]
pub struct NativeAdapter<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> NativeAdapter<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        NativeAdapter { i2c, delay }
    }

    /// Gives back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Reads the raw `[msb, lsb, crc]` frame for `word_count` words into `buf`.
    fn read_frame<'buf>(
        &mut self,
        address: u8,
        word_count: usize,
        buf: &'buf mut [u8; MAX_READ_FRAME],
    ) -> Result<&'buf [u8], Sht3xError<I2C::Error>> {
        if word_count > MAX_WORDS {
            return Err(Sht3xError::BufferOverflow {
                needed: words::frame_len(word_count),
                got: MAX_READ_FRAME,
            });
        }
        let raw = &mut buf[..words::frame_len(word_count)];
        self.i2c.read(address, raw).map_err(map_bus_error)?;
        trace!("sht3x@{:#x}: read {} bytes", address, raw.len());
        Ok(raw)
    }
}

/// A missing acknowledgement is the sensor saying "busy", everything else is a
/// plain bus failure.
fn map_bus_error<E: embedded_hal::i2c::Error>(e: E) -> Sht3xError<E> {
    match e.kind() {
        ErrorKind::NoAcknowledge(_) => Sht3xError::Nack,
        _ => Sht3xError::Bus(e),
    }
}

impl<I2C, D> SensirionI2c for NativeAdapter<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn write_command_with_args(
        &mut self,
        address: u8,
        command: u16,
        args: &[u16],
    ) -> Result<(), Sht3xError<Self::Error>> {
        let frame = words::encode_command(command, args)?;
        trace!("sht3x@{:#x}: write {:#x} with {} args", address, command, args.len());
        self.i2c.write(address, &frame).map_err(map_bus_error)
    }

    fn read_words(&mut self, address: u8, out: &mut [u16]) -> Result<(), Sht3xError<Self::Error>> {
        let mut buf = [0u8; MAX_READ_FRAME];
        let raw = self.read_frame(address, out.len(), &mut buf)?;
        words::decode_words(raw, out)
    }

    fn read_words_as_bytes(
        &mut self,
        address: u8,
        data: &mut [u8],
    ) -> Result<(), Sht3xError<Self::Error>> {
        if data.len() % WORD_SIZE != 0 {
            return Err(Sht3xError::BadData);
        }
        let mut buf = [0u8; MAX_READ_FRAME];
        let raw = self.read_frame(address, data.len() / WORD_SIZE, &mut buf)?;
        words::decode_words_as_bytes(raw, data)
    }
}

impl<I2C, D> SensirionTimer for NativeAdapter<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::hal_traits::SensirionTransport;
    use embedded_hal::i2c::NoAcknowledgeSource;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    const ADDR: u8 = 0x44;

    fn done(adapter: NativeAdapter<I2cMock, NoopDelay>) {
        let (mut i2c, _) = adapter.release();
        i2c.done(); // verify expectations
    }

    #[test]
    fn test_write_command() {
        let expectations = [Transaction::write(ADDR, vec![0x30, 0x41])];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        adapter.write_command(ADDR, 0x3041).unwrap();
        done(adapter);
    }

    #[test]
    fn test_write_command_with_args_appends_crc() {
        let expectations = [Transaction::write(ADDR, vec![0x61, 0x1D, 0xBE, 0xEF, 0x92])];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        adapter.write_command_with_args(ADDR, 0x611D, &[0xBEEF]).unwrap();
        done(adapter);
    }

    #[test]
    fn test_read_words() {
        let expectations = [Transaction::read(ADDR, vec![0x66, 0x66, 0x93, 0x99, 0x9A, 0xED])];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut words = [0u16; 2];
        adapter.read_words(ADDR, &mut words).unwrap();
        assert_eq!(words, [0x6666, 0x999A]);
        done(adapter);
    }

    #[test]
    fn test_read_words_crc_failure() {
        let expectations = [Transaction::read(ADDR, vec![0xBE, 0xEF, 0x00])];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut words = [0u16; 1];
        assert_eq!(
            adapter.read_words(ADDR, &mut words),
            Err(Sht3xError::CrcMismatch { expected: 0x00, calculated: 0x92 })
        );
        done(adapter);
    }

    #[test]
    fn test_read_words_as_bytes() {
        let expectations = [Transaction::read(ADDR, vec![0x12, 0x34, 0x37, 0x56, 0x78, 0x7D])];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut data = [0u8; 4];
        adapter.read_words_as_bytes(ADDR, &mut data).unwrap();
        assert_eq!(data, [0x12, 0x34, 0x56, 0x78]);
        done(adapter);
    }

    #[test]
    fn test_read_too_many_words() {
        let mut adapter = NativeAdapter::new(I2cMock::new(&[]), NoopDelay::new());
        let mut words = [0u16; MAX_WORDS + 1];
        assert_eq!(
            adapter.read_words(ADDR, &mut words),
            Err(Sht3xError::BufferOverflow { needed: 15, got: MAX_READ_FRAME })
        );
        done(adapter);
    }

    #[test]
    fn test_nack_is_reported_as_nack() {
        let expectations = [Transaction::read(ADDR, vec![0, 0, 0, 0, 0, 0])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut words = [0u16; 2];
        assert_eq!(adapter.read_words(ADDR, &mut words), Err(Sht3xError::Nack));
        done(adapter);
    }

    #[test]
    fn test_other_bus_errors_pass_through() {
        let expectations =
            [Transaction::write(ADDR, vec![0x30, 0x41]).with_error(ErrorKind::ArbitrationLoss)];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        assert_eq!(
            adapter.write_command(ADDR, 0x3041),
            Err(Sht3xError::Bus(ErrorKind::ArbitrationLoss))
        );
        done(adapter);
    }

    #[test]
    fn test_delayed_read_command() {
        let expectations = [
            Transaction::write(ADDR, vec![0xF3, 0x2D]),
            Transaction::read(ADDR, vec![0x80, 0x11, 0xD0]),
        ];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut status = [0u16; 1];
        adapter.delayed_read_command(ADDR, 0xF32D, 1000, &mut status).unwrap();
        assert_eq!(status, [0x8011]);
        done(adapter);
    }

    #[test]
    fn test_delayed_read_command_skips_read_on_write_failure() {
        let expectations = [Transaction::write(ADDR, vec![0xF3, 0x2D])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))];
        let mut adapter = NativeAdapter::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut status = [0u16; 1];
        assert_eq!(
            adapter.delayed_read_command(ADDR, 0xF32D, 1000, &mut status),
            Err(Sht3xError::Nack)
        );
        done(adapter);
    }
}
