/// Temperature reading from the MPU's internal die sensor.
///
/// This is the temperature of the chip itself, a few degrees above ambient
/// once the device has warmed up.
///
/// # Example
/// ```
/// # use invmpu::temperature::Temperature;
/// let temp = Temperature::new(3339);
/// let celsius = temp.celsius(); // ~31.0°C
/// assert!((celsius - 31.0).abs() < 0.01);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    pub(crate) raw: i16,
}

impl Temperature {
    /// Counts per degree Celsius
    const SENSITIVITY: f32 = 333.87;
    /// Reading of zero corresponds to this temperature
    const OFFSET_CELSIUS: f32 = 21.0;

    pub const fn new(raw: i16) -> Self {
        Self { raw }
    }

    pub const fn from_bytes(data: [u8; 2]) -> Self {
        Self {
            raw: i16::from_be_bytes(data),
        }
    }

    pub fn raw(&self) -> i16 {
        self.raw
    }

    /// Convert raw temperature to degrees Celsius
    /// Formula from the MPU-9250 register map: TEMP_degC = TEMP_OUT / 333.87 + 21
    pub fn celsius(&self) -> f32 {
        (self.raw as f32) / Self::SENSITIVITY + Self::OFFSET_CELSIUS
    }
}
