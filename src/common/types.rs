// src/common/types.rs

use super::conversion::{
    decode_alert_limit, encode_alert_limit, humidity_milli_percent, temperature_milli_celsius,
};

/// A converted temperature/humidity sample.
///
/// Values are integers so no floating point is needed on the target.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Temperature in milli-degrees Celsius.
    pub temperature: i32,
    /// Relative humidity in milli-percent.
    pub humidity: i32,
}

impl Measurement {
    /// Converts the raw `[temperature, humidity]` words the sensor returns.
    pub const fn from_words(words: [u16; 2]) -> Self {
        Measurement {
            temperature: temperature_milli_celsius(words[0]),
            humidity: humidity_milli_percent(words[1]),
        }
    }

    pub fn celsius(&self) -> f32 {
        self.temperature as f32 / 1000.0
    }

    pub fn humidity_percent(&self) -> f32 {
        self.humidity as f32 / 1000.0
    }
}

/// An alert limit: a humidity and a temperature packed into one sensor word.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AlertLimit {
    /// Relative humidity in tenths of a percent.
    pub humidity: u16,
    /// Temperature in tenths of a degree Celsius.
    pub temperature: i16,
}

impl AlertLimit {
    pub const fn new(humidity: u16, temperature: i16) -> Self {
        AlertLimit { humidity, temperature }
    }

    /// Packs the limit into the word written to the sensor. Lossy, see
    /// [`encode_alert_limit`].
    pub const fn encode(&self) -> u16 {
        encode_alert_limit(self.humidity, self.temperature)
    }

    pub const fn decode(word: u16) -> Self {
        let (humidity, temperature) = decode_alert_limit(word);
        AlertLimit { humidity, temperature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_from_words() {
        let m = Measurement::from_words([0x0000, 0x0000]);
        assert_eq!(m, Measurement { temperature: -45_000, humidity: 0 });
        let m = Measurement::from_words([0x6666, 0x999A]);
        assert_eq!(m.temperature, 24_998);
        assert_eq!(m.humidity, 60_000);
    }

    #[test]
    fn test_measurement_floats() {
        let m = Measurement { temperature: 21_500, humidity: 42_250 };
        assert!((m.celsius() - 21.5).abs() < 1e-4);
        assert!((m.humidity_percent() - 42.25).abs() < 1e-4);
    }

    #[test]
    fn test_alert_limit_codec() {
        let limit = AlertLimit::new(800, 600);
        assert_eq!(limit.encode(), 0xCD33);
        assert_eq!(AlertLimit::decode(0xCD33), AlertLimit::new(796, 599));
    }
}
