use crate::{
    calibration::{offset_for_bias, BiasAccumulator, BiasParameters, GyroBiasEstimate},
    error_async::Error,
    gyro::Gyro,
    sensor_async::Mpu,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// Estimate the gyro bias from a batch of samples taken with zeroed offsets.
pub async fn compute_gyro_bias<I>(
    mpu: &mut Mpu<I>,
    delay: &mut impl DelayNs,
    parameters: &BiasParameters,
) -> Result<GyroBiasEstimate, Error<I>>
where
    I: I2c,
{
    mpu.set_gyro_offset(&Gyro::default()).await?;

    let mut accumulator = BiasAccumulator::new();
    for _ in 0..parameters.samples.max(1) {
        let gyro = mpu.gyro().await?;
        accumulator.add(&gyro);
        delay.delay_ms(parameters.delay_ms).await;
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
pub async fn set_gyro_bias<I>(mpu: &mut Mpu<I>, bias: &Gyro) -> Result<(), Error<I>>
where
    I: I2c,
{
    mpu.set_gyro_offset(&offset_for_bias(bias)).await
}

/// Estimate the bias and apply it if the sensor held still.
pub async fn calibrate_gyro<I>(
    mpu: &mut Mpu<I>,
    delay: &mut impl DelayNs,
    parameters: &BiasParameters,
) -> Result<GyroBiasEstimate, Error<I>>
where
    I: I2c,
{
    let estimate = compute_gyro_bias(mpu, delay, parameters).await?;
    if let Some(bias) = estimate.bias() {
        set_gyro_bias(mpu, &bias).await?;
    }
    Ok(estimate)
}
