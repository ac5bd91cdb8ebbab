//! Fixed-point trigonometry and a driver for InvenSense MPU-6500, MPU-9250
//! and MPU-9255 motion sensors.
//!
//! [`trig`] works in centidegrees with Q15 results and needs no FPU. The
//! driver comes in a blocking ([`sensor::Mpu`]) and an async
//! ([`sensor_async::Mpu`]) flavour sharing the same register model.
//!
//! Enable the `defmt-03` feature for logging and `serde` for serializable
//! readings and configuration.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod accel;
pub mod address;
pub mod calibration;
pub mod calibration_async;
pub mod calibration_blocking;
pub mod config;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod orientation;
pub mod registers;
pub mod sensor;
pub mod sensor_async;
pub mod sensor_id;
pub mod temperature;
#[cfg(test)]
mod test_util;
pub mod trig;
