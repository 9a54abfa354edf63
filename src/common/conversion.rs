// src/common/conversion.rs

//! Fixed-point conversions between sensor words and physical units.
//!
//! The datasheet formulas are
//!
//! ```text
//! T  = -45 + 175 * S_T  / 2^16   [°C]
//! RH =       100 * S_RH / 2^16   [%]
//! ```
//!
//! Scaled by 1000 and reduced so that the multiplication fits an `i32` for the
//! full 16-bit input range, they become a multiply and a shift.

/// 175_000 / 2^16 == 21875 / 2^13
const TEMPERATURE_FACTOR: i32 = 21875;
/// 100_000 / 2^16 == 12500 / 2^13
const HUMIDITY_FACTOR: i32 = 12500;
const SCALE_SHIFT: u32 = 13;
/// -45 °C in milli-degrees.
const TEMPERATURE_OFFSET: i32 = 45_000;

/// Upper 7 bits of an alert limit word hold the humidity.
pub const HUMIDITY_LIMIT_MASK: u16 = 0xFE00;
/// Lower 9 bits of an alert limit word hold the temperature.
pub const TEMPERATURE_LIMIT_MASK: u16 = 0x01FF;

/// Full scale of a sensor word (2^16 - 1).
const WORD_FULL_SCALE: u32 = 65535;
/// 100 %RH in tenths of a percent.
const HUMIDITY_SPAN_DECI: u32 = 1000;
/// 175 °C in tenths of a degree.
const TEMPERATURE_SPAN_DECI: u32 = 1750;
/// 45 °C in tenths of a degree.
const TEMPERATURE_BIAS_DECI: i32 = 450;
/// The 9-bit temperature limit holds bits 15..7 of a temperature word.
const TEMPERATURE_LIMIT_SHIFT: u32 = 7;

/// Converts a raw temperature word to milli-degrees Celsius.
#[inline]
pub const fn temperature_milli_celsius(raw: u16) -> i32 {
    ((TEMPERATURE_FACTOR * raw as i32) >> SCALE_SHIFT) - TEMPERATURE_OFFSET
}

/// Converts a raw humidity word to milli-percent relative humidity.
#[inline]
pub const fn humidity_milli_percent(raw: u16) -> i32 {
    (HUMIDITY_FACTOR * raw as i32) >> SCALE_SHIFT
}

/// Packs a humidity (tenths of %RH) and temperature (tenths of °C) pair into
/// an alert limit word.
///
/// Each quantity is scaled onto the 16-bit sensor range and truncated to its
/// field, so the limit resolution is roughly 0.8 %RH and 0.35 °C. Inputs are
/// not range checked; values outside 0..=1000 / -450..=1300 wrap the same way
/// the sensor's own fixed-point math would.
pub const fn encode_alert_limit(humidity: u16, temperature: i16) -> u16 {
    // h * 65535 / 1000
    let h = (humidity as u32).wrapping_mul(WORD_FULL_SCALE) / HUMIDITY_SPAN_DECI;
    let humidity_bits = (h as u16) & HUMIDITY_LIMIT_MASK;

    // (t + 45.0) * 65535 / 175.0, keep the 9 most significant bits
    let t = (temperature as i32 + TEMPERATURE_BIAS_DECI) as u32;
    let t = t.wrapping_mul(WORD_FULL_SCALE) / TEMPERATURE_SPAN_DECI;
    let temperature_bits = ((t >> TEMPERATURE_LIMIT_SHIFT) as u16) & TEMPERATURE_LIMIT_MASK;

    humidity_bits | temperature_bits
}

/// Unpacks an alert limit word into humidity (tenths of %RH) and temperature
/// (tenths of °C). Inverse of [`encode_alert_limit`] up to quantization.
pub const fn decode_alert_limit(word: u16) -> (u16, i16) {
    // 1000 * h / 65535
    let h = (word & HUMIDITY_LIMIT_MASK) as i32;
    let humidity = (HUMIDITY_SPAN_DECI as i32 * h) / WORD_FULL_SCALE as i32;

    // (t << 7) * 1750 / 65535 - 450
    let t = ((word & TEMPERATURE_LIMIT_MASK) as i32) << TEMPERATURE_LIMIT_SHIFT;
    let temperature = (t * TEMPERATURE_SPAN_DECI as i32) / WORD_FULL_SCALE as i32 - TEMPERATURE_BIAS_DECI;

    (humidity as u16, temperature as i16)
}
