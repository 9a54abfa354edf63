// src/driver/mock.rs

//! Recording transport for driver tests. Every bus call and delay is logged in
//! order; reads are answered from a queue of staged responses.

use crate::common::{SensirionI2c, SensirionTimer, Sht3xError};
use heapless::{Deque, Vec};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusOp {
    Write { address: u8, command: u16, args: Vec<u16, 4> },
    Read { address: u8, words: usize },
    ReadBytes { address: u8, len: usize },
    Delay(u32),
}

type Staged = Result<Vec<u16, 4>, Sht3xError<MockBusError>>;

pub struct MockBus {
    pub ops: Vec<BusOp, 16>,
    reads: Deque<Staged, 8>,
    write_error: Option<Sht3xError<MockBusError>>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            ops: Vec::new(),
            reads: Deque::new(),
            write_error: None,
        }
    }

    pub fn stage_read(&mut self, words: &[u16]) {
        let words = Vec::from_slice(words).unwrap();
        self.reads.push_back(Ok(words)).unwrap();
    }

    pub fn stage_read_error(&mut self, error: Sht3xError<MockBusError>) {
        self.reads.push_back(Err(error)).unwrap();
    }

    /// Makes every following write fail with `error`.
    pub fn fail_writes(&mut self, error: Sht3xError<MockBusError>) {
        self.write_error = Some(error);
    }

    pub fn write_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, BusOp::Write { .. })).count()
    }

    pub fn write(address: u8, command: u16) -> BusOp {
        Self::write_with_args(address, command, &[])
    }

    pub fn write_with_args(address: u8, command: u16, args: &[u16]) -> BusOp {
        BusOp::Write { address, command, args: Vec::from_slice(args).unwrap() }
    }

    fn next_read(&mut self) -> Staged {
        // an empty queue looks like a sensor that is still converting
        self.reads.pop_front().unwrap_or(Err(Sht3xError::Nack))
    }
}

impl SensirionI2c for MockBus {
    type Error = MockBusError;

    fn write_command_with_args(
        &mut self,
        address: u8,
        command: u16,
        args: &[u16],
    ) -> Result<(), Sht3xError<Self::Error>> {
        self.ops.push(Self::write_with_args(address, command, args)).unwrap();
        match self.write_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn read_words(&mut self, address: u8, words: &mut [u16]) -> Result<(), Sht3xError<Self::Error>> {
        self.ops.push(BusOp::Read { address, words: words.len() }).unwrap();
        let staged = self.next_read()?;
        if staged.len() != words.len() {
            return Err(Sht3xError::BadData);
        }
        words.copy_from_slice(&staged);
        Ok(())
    }

    fn read_words_as_bytes(
        &mut self,
        address: u8,
        data: &mut [u8],
    ) -> Result<(), Sht3xError<Self::Error>> {
        self.ops.push(BusOp::ReadBytes { address, len: data.len() }).unwrap();
        let staged = self.next_read()?;
        if staged.len() * 2 != data.len() {
            return Err(Sht3xError::BadData);
        }
        for (word, out) in staged.iter().zip(data.chunks_exact_mut(2)) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }
}

impl SensirionTimer for MockBus {
    fn delay_us(&mut self, us: u32) {
        self.ops.push(BusOp::Delay(us)).unwrap();
    }
}
