// src/common/config.rs

use super::command::{Command, MeasurementMode};

/// Per-handle measurement settings.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Repeatability used by the next `measure`.
    pub mode: MeasurementMode,
    /// Use the clock stretching measurement commands. The bus then holds SCL
    /// low until the conversion is done, so no wait is inserted before reading.
    /// The I2C controller must support clock stretching.
    pub clock_stretching: bool,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            mode: MeasurementMode::High,
            clock_stretching: false,
        }
    }

    pub const fn with_mode(mut self, mode: MeasurementMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_clock_stretching(mut self, enabled: bool) -> Self {
        self.clock_stretching = enabled;
        self
    }

    /// The single shot command for the current settings.
    pub const fn measure_command(&self) -> Command {
        Command::Measure {
            mode: self.mode,
            clock_stretching: self.clock_stretching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_high_precision_without_stretching() {
        assert_eq!(Config::default(), Config::new());
        assert_eq!(Config::new().measure_command().code(), 0x2400);
    }

    #[test]
    fn test_builders() {
        let cfg = Config::new()
            .with_mode(MeasurementMode::Medium)
            .with_clock_stretching(true);
        assert_eq!(cfg.mode, MeasurementMode::Medium);
        assert!(cfg.clock_stretching);
        assert_eq!(cfg.measure_command().code(), 0x2C0D);
    }
}
