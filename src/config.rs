//! MPU Digital Low-Pass Filter and Reset Configuration
//!
//! The digital low-pass filters (DLPF) trade noise for latency. Listed in
//! order of increasing sensitivity to quick changes the settings are
//! 6, 5, 4, 3, 2, 1, 0, 7 for both the gyroscope and the accelerometer.
//! Figures below come from the MPU-9250 register map.

use crate::{accel::AccelFullScale, gyro::GyroFullScale};

/// Gyroscope (and temperature) low-pass filter, written to CONFIG.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroLowPassFilter {
    /// 8kHz sampling, 250Hz bandwidth, 0.97ms delay
    #[default]
    Filter0 = 0,
    /// 1kHz sampling, 184Hz bandwidth, 2.9ms delay
    Filter1 = 1,
    /// 1kHz sampling, 92Hz bandwidth, 3.9ms delay
    Filter2 = 2,
    /// 1kHz sampling, 41Hz bandwidth, 5.9ms delay
    Filter3 = 3,
    /// 1kHz sampling, 20Hz bandwidth, 9.9ms delay
    Filter4 = 4,
    /// 1kHz sampling, 10Hz bandwidth, 17.85ms delay
    Filter5 = 5,
    /// 1kHz sampling, 5Hz bandwidth, 33.48ms delay
    Filter6 = 6,
    /// 8kHz sampling, 3600Hz bandwidth, 0.17ms delay
    Filter7 = 7,
}

/// Accelerometer low-pass filter, written to ACCEL_CONFIG2.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelLowPassFilter {
    /// 1kHz sampling, 218.1Hz 3dB bandwidth, 1.88ms delay
    #[default]
    Filter0 = 0,
    /// 1kHz sampling, 218.1Hz 3dB bandwidth, 1.88ms delay
    Filter1 = 1,
    /// 1kHz sampling, 99Hz 3dB bandwidth, 2.88ms delay
    Filter2 = 2,
    /// 1kHz sampling, 44.8Hz 3dB bandwidth, 4.88ms delay
    Filter3 = 3,
    /// 1kHz sampling, 21.2Hz 3dB bandwidth, 8.87ms delay
    Filter4 = 4,
    /// 1kHz sampling, 10.2Hz 3dB bandwidth, 16.83ms delay
    Filter5 = 5,
    /// 1kHz sampling, 5.05Hz 3dB bandwidth, 32.48ms delay
    Filter6 = 6,
    /// 1kHz sampling, 420Hz 3dB bandwidth, 1.38ms delay
    Filter7 = 7,
}

/// Everything `reset` writes to the device.
///
/// Defaults to the widest ranges (±2000 °/s, ±16 g) with filter 0 on both
/// sensors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub gyro_filter: GyroLowPassFilter,
    pub accel_filter: AccelLowPassFilter,
    pub gyro_scale: GyroFullScale,
    pub accel_scale: AccelFullScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gyro_filter: GyroLowPassFilter::default(),
            accel_filter: AccelLowPassFilter::default(),
            gyro_scale: GyroFullScale::Deg2000,
            accel_scale: AccelFullScale::G16,
        }
    }
}

impl Config {
    /// Default ranges with the given filters.
    pub fn new(gyro_filter: GyroLowPassFilter, accel_filter: AccelLowPassFilter) -> Self {
        Self {
            gyro_filter,
            accel_filter,
            ..Self::default()
        }
    }

    /// Change gyro full scale
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_gyro_scale(self, gyro_scale: GyroFullScale) -> Self {
        Self { gyro_scale, ..self }
    }

    /// Change accelerometer full scale
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_accel_scale(self, accel_scale: AccelFullScale) -> Self {
        Self {
            accel_scale,
            ..self
        }
    }

    pub(crate) fn config_byte(&self) -> u8 {
        self.gyro_filter as u8
    }

    pub(crate) fn gyro_config_byte(&self) -> u8 {
        (self.gyro_scale as u8) << 3
    }

    pub(crate) fn accel_config_byte(&self) -> u8 {
        (self.accel_scale as u8) << 3
    }

    pub(crate) fn accel_config2_byte(&self) -> u8 {
        self.accel_filter as u8
    }
}
