//! Device identification through the WHO_AM_I register.

/// The parts this driver supports, by WHO_AM_I value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorId {
    /// 6-axis MPU-6500
    Mpu6500 = 0x70,
    /// 9-axis MPU-9250
    Mpu9250 = 0x71,
    /// 9-axis MPU-9255
    Mpu9255 = 0x73,
}

impl SensorId {
    /// Raw WHO_AM_I value of this part.
    pub const fn who_am_i(self) -> u8 {
        self as u8
    }

    /// Map a WHO_AM_I reading to a supported part.
    pub const fn from_who_am_i(value: u8) -> Option<Self> {
        match value {
            0x70 => Some(Self::Mpu6500),
            0x71 => Some(Self::Mpu9250),
            0x73 => Some(Self::Mpu9255),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SensorId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_who_am_i(value).ok_or(value)
    }
}
