// src/logging.rs

// Crate-internal log macros. They forward to `defmt` or `log` depending on the
// enabled feature and compile to nothing otherwise.

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        ::defmt::trace!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => {{
        ::defmt::debug!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => {{
        ::defmt::warn!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        ::log::trace!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => {{
        ::log::debug!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! warn {
    ($($arg:tt)*) => {{
        ::log::warn!($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}
