//! Logging shims.
//!
//! With the `defmt-03` feature the macros forward to `defmt`, otherwise they
//! compile to nothing while still borrowing their arguments so callers don't
//! trip unused-variable lints.
#![allow(unused_macros)]

// Used through `#[macro_use]`, so it must stay the first module in lib.rs.

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-03")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt-03"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-03")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "defmt-03"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-03")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt-03"))]
        let _ = ($( & $x ),*);
    }};
}

