// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod config;
pub mod conversion;
pub mod crc;
pub mod error;
pub mod hal_traits;
#[cfg(feature = "impl-native")]
pub mod native;
pub mod status;
pub mod timing;
pub mod types;
pub mod words;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::Sht3xAddr;

// From command.rs
pub use command::{AlertThreshold, Command, MeasurementMode};

// From config.rs
pub use config::Config;

// From conversion.rs
pub use conversion::{
    decode_alert_limit, encode_alert_limit, humidity_milli_percent, temperature_milli_celsius,
};

// From crc.rs
pub use crc::crc8;

// From error.rs
pub use error::Sht3xError;

// From hal_traits.rs
pub use hal_traits::{SensirionI2c, SensirionTimer, SensirionTransport};

// From native.rs
#[cfg(feature = "impl-native")]
pub use native::NativeAdapter;

// From status.rs
pub use status::Status;

// From types.rs
pub use types::{AlertLimit, Measurement};

// From words.rs
pub use words::bytes_to_u32;
