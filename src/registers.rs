//! MPU-6500/9250/9255 Register Map
//!
//! Only the registers this driver touches are listed:
//! - Configuration registers: filters, full-scale ranges, resets
//! - Data registers: accelerometer, temperature and gyroscope outputs
//! - Calibration registers: gyroscope offsets
//!
//! Multi-byte values are stored high byte first and the device auto-increments
//! the register address, so a burst read starting at an `_H` register returns
//! the whole group.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    // Gyroscope Offset Registers
    /// High byte of X-axis gyroscope offset
    GyroOffsetX_H = 0x13,
    /// Low byte of X-axis gyroscope offset
    GyroOffsetX_L = 0x14,
    /// High byte of Y-axis gyroscope offset
    GyroOffsetY_H = 0x15,
    /// Low byte of Y-axis gyroscope offset
    GyroOffsetY_L = 0x16,
    /// High byte of Z-axis gyroscope offset
    GyroOffsetZ_H = 0x17,
    /// Low byte of Z-axis gyroscope offset
    GyroOffsetZ_L = 0x18,

    /// Configuration register (0x1A)
    /// Selects the gyroscope and temperature digital low pass filter
    Config = 0x1A,

    /// Gyroscope Configuration register (0x1B)
    /// Controls full-scale range
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Controls full-scale range
    AccelConfig = 0x1C,

    /// Accelerometer Configuration 2 register (0x1D)
    /// Selects the accelerometer digital low pass filter
    AccelConfig2 = 0x1D,

    // Accelerometer Data Registers
    /// High byte of X-axis acceleration
    AccelX_H = 0x3B,
    /// Low byte of X-axis acceleration
    AccelX_L = 0x3C,
    /// High byte of Y-axis acceleration
    AccelY_H = 0x3D,
    /// Low byte of Y-axis acceleration
    AccelY_L = 0x3E,
    /// High byte of Z-axis acceleration
    AccelZ_H = 0x3F,
    /// Low byte of Z-axis acceleration
    AccelZ_L = 0x40,

    // Temperature Data Registers
    /// High byte of temperature reading
    TempOut_H = 0x41,
    /// Low byte of temperature reading
    TempOut_L = 0x42,

    // Gyroscope Data Registers
    /// High byte of X-axis angular rate
    GyroX_H = 0x43,
    /// Low byte of X-axis angular rate
    GyroX_L = 0x44,
    /// High byte of Y-axis angular rate
    GyroY_H = 0x45,
    /// Low byte of Y-axis angular rate
    GyroY_L = 0x46,
    /// High byte of Z-axis angular rate
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate
    GyroZ_L = 0x48,

    /// Signal Path Reset register (0x68)
    /// Resets the gyroscope, accelerometer and temperature digital paths
    SignalPathReset = 0x68,

    /// User Control register (0x6A)
    /// Bit 0 resets all sensor signal paths and registers
    UserCtrl = 0x6A,

    /// Power Management 1 register (0x6B)
    /// Controls device reset and clock source
    PwrMgmt1 = 0x6B,

    /// Who Am I register (0x75)
    /// Holds the device identity, see [`SensorId`](crate::sensor_id::SensorId)
    WhoAmI = 0x75,
}

/// PWR_MGMT_1: H_RESET with the internal 20MHz clock selected
pub(crate) const PWR_MGMT_1_H_RESET: u8 = 0x80;
/// SIGNAL_PATH_RESET: GYRO_RST | ACCEL_RST | TEMP_RST
pub(crate) const SIGNAL_PATH_RESET_ALL: u8 = 0x07;
/// USER_CTRL: SIG_COND_RST
pub(crate) const USER_CTRL_SIG_COND_RST: u8 = 0x01;
