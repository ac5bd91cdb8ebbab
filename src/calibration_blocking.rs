//! Blocking Gyro Bias Calibration
//!
//! Sampling side of [`crate::calibration`] over blocking I2C:
//! - Clearing the gyro offset registers so raw bias is visible
//! - Collecting samples at a fixed interval
//! - Writing the compensating offsets once the estimate is trusted

use crate::{
    calibration::{offset_for_bias, BiasAccumulator, BiasParameters, GyroBiasEstimate},
    error::Error,
    gyro::Gyro,
    sensor::Mpu,
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Estimate the gyro bias from a batch of samples taken with zeroed offsets.
pub fn compute_gyro_bias<I>(
    mpu: &mut Mpu<I>,
    delay: &mut impl DelayNs,
    parameters: &BiasParameters,
) -> Result<GyroBiasEstimate, Error<I>>
where
    I: I2c,
{
    mpu.set_gyro_offset(&Gyro::default())?;

    let mut accumulator = BiasAccumulator::new();
    for _ in 0..parameters.samples.max(1) {
        let gyro = mpu.gyro()?;
        accumulator.add(&gyro);
        delay.delay_ms(parameters.delay_ms);
    }

    let estimate = accumulator.estimate(parameters.max_variance);
    debug!(
        "gyro variance x:{} y:{} z:{}",
        estimate.variance.x,
        estimate.variance.y,
        estimate.variance.z
    );
    if !estimate.steady {
        warn!(
            "gyro not steady, variance above {}",
            parameters.max_variance
        );
    }
    Ok(estimate)
}

/// Write the offsets cancelling `bias`.
pub fn set_gyro_bias<I>(mpu: &mut Mpu<I>, bias: &Gyro) -> Result<(), Error<I>>
where
    I: I2c,
{
    mpu.set_gyro_offset(&offset_for_bias(bias))
}

/// Estimate the bias and apply it if the sensor held still.
pub fn calibrate_gyro<I>(
    mpu: &mut Mpu<I>,
    delay: &mut impl DelayNs,
    parameters: &BiasParameters,
) -> Result<GyroBiasEstimate, Error<I>>
where
    I: I2c,
{
    let estimate = compute_gyro_bias(mpu, delay, parameters)?;
    if let Some(bias) = estimate.bias() {
        set_gyro_bias(mpu, &bias)?;
    }
    Ok(estimate)
}
