//! Logging shims.
//!
//! The driver logs through `defmt` when the `defmt` feature is enabled,
//! through `log` when the `log` feature is enabled, and compiles the calls
//! away otherwise. Format strings are limited to `{}` and `{:?}` so they
//! are valid for both backends.
#![allow(unused_macros)]

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        macro_rules! debug {
            ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
        }
        macro_rules! error {
            ($($arg:tt)*) => { ::defmt::error!($($arg)*) };
        }
    } else if #[cfg(feature = "log")] {
        macro_rules! debug {
            ($($arg:tt)*) => { ::log::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { ::log::warn!($($arg)*) };
        }
        macro_rules! error {
            ($($arg:tt)*) => { ::log::error!($($arg)*) };
        }
    } else {
        macro_rules! debug {
            ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x, )*); }};
        }
        macro_rules! warn {
            ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x, )*); }};
        }
        macro_rules! error {
            ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x, )*); }};
        }
    }
}
