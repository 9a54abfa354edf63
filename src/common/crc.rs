// src/common/crc.rs

use super::error::Sht3xError;
use crc::{Algorithm, Crc};

/// CRC-8 used by Sensirion sensors on every transmitted data word.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789")
pub const SENSIRION_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SENSIRION_CRC);

/// Calculates the Sensirion CRC-8 over `data` (normally one big-endian word).
#[inline]
pub fn crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Checks the CRC byte that follows a data word.
pub fn verify_word<E>(word: [u8; 2], received: u8) -> Result<(), Sht3xError<E>>
where
    E: core::fmt::Debug,
{
    let calculated = crc8(&word);
    if calculated == received {
        Ok(())
    } else {
        warn!("CRC mismatch: received {:#x}, calculated {:#x}", received, calculated);
        Err(Sht3xError::CrcMismatch { expected: received, calculated })
    }
}
