use crate::{
    accel::Accel,
    address::Address,
    calibration::{BiasParameters, GyroBiasEstimate},
    calibration_blocking::{calibrate_gyro, compute_gyro_bias, set_gyro_bias},
    config::Config,
    error::{Error, InitError},
    gyro::Gyro,
    orientation::Tilt,
    registers::{
        Register, PWR_MGMT_1_H_RESET, SIGNAL_PATH_RESET_ALL, USER_CTRL_SIG_COND_RST,
    },
    sensor_id::SensorId,
    temperature::Temperature,
};
use embedded_hal::{delay, i2c::I2c};

/// Time the device needs after H_RESET before it accepts writes
pub(crate) const RESET_DELAY_MS: u32 = 100;

/// InvenSense MPU-6500/9250/9255 Driver
pub struct Mpu<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    sensor_id: SensorId,
}

impl<I> Mpu<I>
where
    I: I2c,
{
    /// Construct a new i2c driver, checking WHO_AM_I for a supported part.
    pub fn new(mut i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let address: u8 = address.into();
        let mut buf = [0; 1];
        let error = match i2c.write_read(address, &[Register::WhoAmI as u8], &mut buf) {
            Ok(()) => match SensorId::from_who_am_i(buf[0]) {
                Some(sensor_id) => {
                    info!("found {} at {=u8:#x}", sensor_id, address);
                    return Ok(Self {
                        i2c,
                        address,
                        sensor_id,
                    });
                }
                None => Error::WrongDevice(buf[0]),
            },
            Err(e) => Error::WriteReadError(e),
        };
        warn!("no MPU-6500/9250/9255 at {=u8:#x}", address);
        Err(InitError { i2c, error })
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    /// The part detected by the last successful probe.
    pub fn sensor_id(&self) -> SensorId {
        self.sensor_id
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| Error::WriteError(e))
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf)?;
        Ok(buf)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value])
    }

    /// Raw WHO_AM_I value.
    pub fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.read_register(Register::WhoAmI)
    }

    /// Look for a MPU-6500, MPU-9250 or MPU-9255.
    ///
    /// Returns the part if one answered; the driver then remembers it as
    /// [`Mpu::sensor_id`].
    pub fn find(&mut self) -> Result<Option<SensorId>, Error<I>> {
        let found = SensorId::from_who_am_i(self.who_am_i()?);
        if let Some(sensor_id) = found {
            self.sensor_id = sensor_id;
        }
        Ok(found)
    }

    /// Reset the MPU and apply `config`.
    ///
    /// The write sequence is: device reset on the internal clock, signal
    /// path reset, signal conditioning reset, gyro filter, gyro range,
    /// accel range, accel filter.
    pub fn reset(
        &mut self,
        config: &Config,
        delay: &mut impl delay::DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, PWR_MGMT_1_H_RESET)?;
        delay.delay_ms(RESET_DELAY_MS);
        self.write_register(Register::SignalPathReset, SIGNAL_PATH_RESET_ALL)?;
        self.write_register(Register::UserCtrl, USER_CTRL_SIG_COND_RST)?;
        self.write_register(Register::Config, config.config_byte())?;
        self.write_register(Register::GyroConfig, config.gyro_config_byte())?;
        self.write_register(Register::AccelConfig, config.accel_config_byte())?;
        self.write_register(Register::AccelConfig2, config.accel_config2_byte())?;
        debug!("reset with {}", config);
        Ok(())
    }

    pub fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data)?;
        Ok(Accel::from_bytes(data))
    }

    pub fn gyro(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    pub fn temperature(&mut self) -> Result<Temperature, Error<I>> {
        let mut data = [0; 2];
        self.read_registers(Register::TempOut_H, &mut data)?;
        Ok(Temperature::from_bytes(data))
    }

    /// Gets the 6 degrees of freedom at once - Acceleration and Gyroscope.
    pub fn motion6(&mut self) -> Result<(Accel, Gyro), Error<I>> {
        let mut data = [0; 14];
        self.read_registers(Register::AccelX_H, &mut data)?;

        let accel = Accel::from_bytes([data[0], data[1], data[2], data[3], data[4], data[5]]);
        let gyro = Gyro::from_bytes([data[8], data[9], data[10], data[11], data[12], data[13]]);
        Ok((accel, gyro))
    }

    /// Roll and pitch from the current acceleration.
    pub fn tilt(&mut self) -> Result<Tilt, Error<I>> {
        Ok(Tilt::from(self.accel()?))
    }

    pub fn get_gyro_offset(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroOffsetX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// Write the raw gyro offset registers.
    pub fn set_gyro_offset(&mut self, offset: &Gyro) -> Result<(), Error<I>> {
        let data = offset.to_bytes();
        let bytes = [
            Register::GyroOffsetX_H as u8,
            data[0],
            data[1],
            data[2],
            data[3],
            data[4],
            data[5],
        ];
        self.write(&bytes)
    }

    /// Compute the gyro bias of each axis as the mean of a batch of samples.
    ///
    /// The offset registers are cleared first. The returned estimate carries
    /// the per-axis variance; its [`bias`](GyroBiasEstimate::bias) is only
    /// available when the sensor was steady enough.
    pub fn compute_gyro_bias(
        &mut self,
        delay: &mut impl delay::DelayNs,
        parameters: &BiasParameters,
    ) -> Result<GyroBiasEstimate, Error<I>> {
        compute_gyro_bias(self, delay, parameters)
    }

    /// Compensate `bias` (as found by [`Mpu::compute_gyro_bias`]) in hardware.
    pub fn set_gyro_bias(&mut self, bias: &Gyro) -> Result<(), Error<I>> {
        set_gyro_bias(self, bias)
    }

    /// [`Mpu::compute_gyro_bias`] followed by [`Mpu::set_gyro_bias`] when steady.
    pub fn calibrate_gyro(
        &mut self,
        delay: &mut impl delay::DelayNs,
        parameters: &BiasParameters,
    ) -> Result<GyroBiasEstimate, Error<I>> {
        calibrate_gyro(self, delay, parameters)
    }
}
