//! Tilt angles from a single accelerometer reading.
//!
//! At rest the accelerometer measures only gravity, so the direction of that
//! vector gives the device attitude:
//! - Roll: rotation around X, from the Y/Z components
//! - Pitch: rotation around Y, from X against the Y/Z magnitude
//!
//! Angles are centidegrees computed with [`crate::trig`], so no FPU is needed.
//! Yaw cannot be recovered from gravity alone.

use crate::{accel::Accel, trig};

/// Roll and pitch in centidegrees.
///
/// Roll spans -18000 to 18000 and pitch -9000 to 9000.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tilt {
    pub roll: i32,
    pub pitch: i32,
}

impl From<Accel> for Tilt {
    /// roll = atan2(ay, az), pitch = atan2(-ax, sqrt(ay² + az²))
    fn from(accel: Accel) -> Self {
        let ax = accel.x() as i32;
        let ay = accel.y() as i32;
        let az = accel.z() as i32;

        let roll = trig::atan2_unchecked(ay, az);

        let mut across = -ax;
        let mut hyp = isqrt((ay as i64 * ay as i64 + az as i64 * az as i64) as u64) as i32;
        // the magnitude reaches ~46341; halve both to stay within atan2's domain
        if hyp > trig::ONE {
            across /= 2;
            hyp /= 2;
        }
        let pitch = trig::atan2_unchecked(across, hyp);

        Self { roll, pitch }
    }
}

/// Integer square root, rounded down.
fn isqrt(n: u64) -> u64 {
    let mut rem = n;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}
