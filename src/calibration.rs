//! Gyroscope bias estimation.
//!
//! While the sensor sits still the gyroscope should read zero on every axis;
//! whatever it reads instead is its bias. The estimate is the mean of a batch
//! of samples, accepted only when the per-axis variance shows the device was
//! actually steady. The bus side lives in [`crate::calibration_blocking`] and
//! [`crate::calibration_async`].

use crate::gyro::Gyro;

/// Number of samples averaged per estimate
pub(crate) const SAMPLES: usize = 100;
/// Largest per-axis variance (in squared counts) still considered steady
pub(crate) const MAX_VARIANCE: u32 = 40;
/// Delay between samples
pub(crate) const DELAY_MS: u32 = 1;

/// Gyro bias estimation parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasParameters {
    /// Number of samples averaged (at least one)
    pub samples: usize,
    /// Largest per-axis variance accepted as steady
    pub max_variance: u32,
    /// Delay between samples in milliseconds
    pub delay_ms: u32,
}

impl Default for BiasParameters {
    fn default() -> Self {
        Self {
            samples: SAMPLES,
            max_variance: MAX_VARIANCE,
            delay_ms: DELAY_MS,
        }
    }
}

impl BiasParameters {
    /// Change sample count
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_samples(self, samples: usize) -> Self {
        Self {
            samples: samples.max(1),
            ..self
        }
    }

    /// Change the steadiness threshold
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_max_variance(self, max_variance: u32) -> Self {
        Self {
            max_variance,
            ..self
        }
    }

    /// Change the delay between samples
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_delay_ms(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }
}

/// Per-axis variance of a batch of gyro samples, in squared counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroVariance {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl GyroVariance {
    /// True if no axis exceeds `max_variance`.
    pub fn is_within(&self, max_variance: u32) -> bool {
        self.x <= max_variance && self.y <= max_variance && self.z <= max_variance
    }
}

/// Outcome of a bias estimation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroBiasEstimate {
    /// Mean reading per axis
    pub mean: Gyro,
    /// Spread of the readings per axis
    pub variance: GyroVariance,
    /// Whether every axis stayed within the variance threshold
    pub steady: bool,
}

impl GyroBiasEstimate {
    /// The bias, if the sensor was steady enough for the mean to be trusted.
    pub fn bias(&self) -> Option<Gyro> {
        self.steady.then_some(self.mean)
    }
}

/// Running sums for mean and variance over gyro samples.
///
/// Only sums are kept, so no sample buffer is needed. The variance is taken
/// around the truncated integer mean, exactly as if the samples had been
/// stored and revisited.
#[derive(Clone, Debug, Default)]
pub struct BiasAccumulator {
    count: i64,
    sum: [i64; 3],
    sum_sq: [i64; 3],
}

impl BiasAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, gyro: &Gyro) {
        let axes = [gyro.x() as i64, gyro.y() as i64, gyro.z() as i64];
        for (i, v) in axes.iter().enumerate() {
            self.sum[i] += v;
            self.sum_sq[i] += v * v;
        }
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    fn axis(&self, i: usize) -> (i16, u32) {
        if self.count == 0 {
            return (0, 0);
        }
        let n = self.count;
        let mean = self.sum[i] / n;
        // sum((v - mean)^2) expanded over the running sums
        let squares = self.sum_sq[i] - 2 * mean * self.sum[i] + n * mean * mean;
        let variance = squares / n;
        (mean as i16, u32::try_from(variance).unwrap_or(u32::MAX))
    }

    /// Compute the estimate, judging steadiness against `max_variance`.
    pub fn estimate(&self, max_variance: u32) -> GyroBiasEstimate {
        let (mx, vx) = self.axis(0);
        let (my, vy) = self.axis(1);
        let (mz, vz) = self.axis(2);
        let variance = GyroVariance {
            x: vx,
            y: vy,
            z: vz,
        };
        GyroBiasEstimate {
            mean: Gyro::new(mx, my, mz),
            variance,
            steady: variance.is_within(max_variance),
        }
    }
}

/// Offset register values cancelling `bias`.
///
/// The offset registers count twice as fine as the ±2000 °/s readings, hence
/// the factor of two. Values wrap to 16 bits.
pub fn offset_for_bias(bias: &Gyro) -> Gyro {
    Gyro::new(
        bias.x().wrapping_mul(-2),
        bias.y().wrapping_mul(-2),
        bias.z().wrapping_mul(-2),
    )
}
