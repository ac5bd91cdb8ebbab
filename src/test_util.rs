//! Fake MPU register bank for driver tests.
//!
//! Behaves like the device on the wire: the first written byte sets the
//! register pointer, further bytes are stored with auto-increment, and reads
//! continue from the pointer. Every stored byte is logged so tests can check
//! the exact write sequence. Gyro samples queued with
//! [`FakeMpu::with_gyro_samples`] are latched into the gyro data registers
//! each time a read starts at GYRO_XOUT_H.

use crate::registers::Register;
use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
use std::vec::Vec;

pub(crate) struct FakeMpu {
    address: u8,
    regs: [u8; 128],
    pointer: usize,
    pub writes: Vec<(u8, u8)>,
    gyro_samples: Vec<[i16; 3]>,
    next_sample: usize,
    pub fail: bool,
}

impl FakeMpu {
    pub fn new(who_am_i: u8) -> Self {
        let mut regs = [0; 128];
        regs[Register::WhoAmI as usize] = who_am_i;
        Self {
            address: 0x68,
            regs,
            pointer: 0,
            writes: Vec::new(),
            gyro_samples: Vec::new(),
            next_sample: 0,
            fail: false,
        }
    }

    pub fn at_address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    pub fn with_gyro_samples(self, samples: &[[i16; 3]]) -> Self {
        Self {
            gyro_samples: samples.to_vec(),
            ..self
        }
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub fn set_i16(&mut self, reg: Register, value: i16) {
        let [h, l] = value.to_be_bytes();
        self.regs[reg as usize] = h;
        self.regs[reg as usize + 1] = l;
    }

    pub fn i16_at(&self, reg: Register) -> i16 {
        i16::from_be_bytes([self.regs[reg as usize], self.regs[reg as usize + 1]])
    }

    pub fn samples_read(&self) -> usize {
        self.next_sample
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Some((reg, data)) = bytes.split_first() {
            self.pointer = *reg as usize;
            for byte in data {
                self.regs[self.pointer % 128] = *byte;
                self.writes.push((self.pointer as u8, *byte));
                self.pointer += 1;
            }
        }
    }

    fn read_bytes(&mut self, buf: &mut [u8]) {
        if self.pointer == Register::GyroX_H as usize && !self.gyro_samples.is_empty() {
            let [x, y, z] = self.gyro_samples[self.next_sample % self.gyro_samples.len()];
            self.set_i16(Register::GyroX_H, x);
            self.set_i16(Register::GyroY_H, y);
            self.set_i16(Register::GyroZ_H, z);
            self.next_sample += 1;
        }
        for byte in buf.iter_mut() {
            *byte = self.regs[self.pointer % 128];
            self.pointer += 1;
        }
    }

    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        if self.fail || address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.write_bytes(bytes),
                Operation::Read(buf) => self.read_bytes(buf),
            }
        }
        Ok(())
    }
}

impl ErrorType for FakeMpu {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for FakeMpu {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for FakeMpu {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

/// Delay that only keeps count.
#[derive(Default)]
pub(crate) struct FakeDelay {
    elapsed_ns: u64,
}

impl FakeDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

impl embedded_hal_async::delay::DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
