// src/common/timing.rs

use core::time::Duration;

// Nominal values from the SHT3x-DIS datasheet, table 4, rounded up to whole
// milliseconds.

/// Settle time between a register command (status, serial number) and the
/// following read.
pub const COMMAND_DURATION: Duration = Duration::from_micros(1000);

/// Worst case single shot conversion time (high repeatability). Only waited
/// for when clock stretching is disabled.
pub const MEASUREMENT_DURATION: Duration = Duration::from_micros(15000);

#[inline]
pub(crate) const fn as_micros_u32(d: Duration) -> u32 {
    d.as_micros() as u32
}
