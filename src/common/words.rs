// src/common/words.rs

//! Wire framing for Sensirion word transfers.
//!
//! Writes are a big-endian command word optionally followed by argument words,
//! reads are a sequence of words. Every data word travels as `[msb, lsb, crc]`;
//! the command word itself carries no CRC.

use super::crc::{crc8, verify_word};
use super::error::Sht3xError;
use arrayvec::ArrayVec;

pub const WORD_SIZE: usize = 2;
pub const CRC_SIZE: usize = 1;
pub const WORD_WITH_CRC_SIZE: usize = WORD_SIZE + CRC_SIZE;

/// Largest number of data words moved in one transfer.
pub const MAX_WORDS: usize = 4;

pub const MAX_COMMAND_FRAME: usize = WORD_SIZE + MAX_WORDS * WORD_WITH_CRC_SIZE;
pub const MAX_READ_FRAME: usize = MAX_WORDS * WORD_WITH_CRC_SIZE;

pub type CommandFrame = ArrayVec<u8, MAX_COMMAND_FRAME>;

/// Builds the bytes for `command` followed by `args`, each argument word
/// followed by its CRC.
pub fn encode_command<E>(command: u16, args: &[u16]) -> Result<CommandFrame, Sht3xError<E>>
where
    E: core::fmt::Debug,
{
    let needed = WORD_SIZE + args.len() * WORD_WITH_CRC_SIZE;
    let overflow = || Sht3xError::BufferOverflow { needed, got: MAX_COMMAND_FRAME };

    let mut frame = CommandFrame::new();
    frame.try_extend_from_slice(&command.to_be_bytes()).map_err(|_| overflow())?;
    for arg in args {
        let word = arg.to_be_bytes();
        frame.try_extend_from_slice(&word).map_err(|_| overflow())?;
        frame.try_push(crc8(&word)).map_err(|_| overflow())?;
    }
    Ok(frame)
}

/// Number of raw bytes on the wire for `words` data words.
#[inline]
pub const fn frame_len(words: usize) -> usize {
    words * WORD_WITH_CRC_SIZE
}

/// Validates `raw` as `[msb, lsb, crc]` triples and stores the words in `words`.
///
/// `raw` must hold exactly `frame_len(words.len())` bytes.
pub fn decode_words<E>(raw: &[u8], words: &mut [u16]) -> Result<(), Sht3xError<E>>
where
    E: core::fmt::Debug,
{
    if raw.len() != frame_len(words.len()) {
        return Err(Sht3xError::BadData);
    }
    for (chunk, word) in raw.chunks_exact(WORD_WITH_CRC_SIZE).zip(words.iter_mut()) {
        let data = [chunk[0], chunk[1]];
        verify_word(data, chunk[2])?;
        *word = u16::from_be_bytes(data);
    }
    Ok(())
}

/// Like [`decode_words`] but keeps the payload as bytes, two per word.
///
/// `data` must have an even length.
pub fn decode_words_as_bytes<E>(raw: &[u8], data: &mut [u8]) -> Result<(), Sht3xError<E>>
where
    E: core::fmt::Debug,
{
    if data.len() % WORD_SIZE != 0 || raw.len() != frame_len(data.len() / WORD_SIZE) {
        return Err(Sht3xError::BadData);
    }
    for (chunk, out) in raw
        .chunks_exact(WORD_WITH_CRC_SIZE)
        .zip(data.chunks_exact_mut(WORD_SIZE))
    {
        let word = [chunk[0], chunk[1]];
        verify_word(word, chunk[2])?;
        out.copy_from_slice(&word);
    }
    Ok(())
}

/// Assembles four bytes, most significant first, into a `u32`.
#[inline]
pub const fn bytes_to_u32(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}
