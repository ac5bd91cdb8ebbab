//! Fixed-point trigonometry
//!
//! Angles are integers in centidegrees (degrees * 100) and amplitudes are
//! scaled so that 32768 represents 1.0. Everything is table driven and runs
//! in 32-bit integer arithmetic, so it is usable on cores without an FPU:
//! - [`sin`] and [`cos`] resolve to a tenth of a degree by combining the
//!   whole-degree table with a small correction table (angle addition).
//! - [`atan2`] interpolates linearly between whole-degree tangent breakpoints.
//! - [`rotate2d`] rotates an integer vector anti-clockwise in place.

use core::fmt;

/// Amplitude that represents 1.0.
pub const ONE: i32 = 32768;

/// Largest angle accepted by [`sin`] and [`cos`] (180 degrees).
pub const MAX_ANGLE: i32 = 18000;

/// 65536 * tan(i°) for i in 0..=89; the last entry stands in for the 90° asymptote.
const ATAN_TABLE: [i32; 91] = [
    0, 1144, 2289, 3435, 4583, 5734, 6889, 8047, 9211, 10380, // 0
    11556, 12739, 13931, 15131, 16340, 17561, 18793, 20037, 21294, 22566, // 10
    23854, 25157, 26479, 27819, 29179, 30560, 31965, 33393, 34847, 36328, // 20
    37838, 39379, 40952, 42560, 44205, 45889, 47615, 49385, 51203, 53071, // 30
    54992, 56970, 59009, 61114, 63288, 65536, 67865, 70279, 72786, 75391, // 40
    78103, 80931, 83883, 86970, 90203, 93596, 97162, 100917, 104880, 109071, // 50
    113512, 118231, 123256, 128622, 134369, 140543, 147197, 154394, 162208, 170728, // 60
    180059, 190331, 201700, 214359, 228552, 244584, 262851, 283868, 308323, 337154, // 70
    371674, 413779, 466313, 533748, 623534, 749080, 937209, 1250502, 1876706, 3754555, // 80
    37549324, // ~89.9
];

/// round(32768 * sin(d°)) for d in 0..=90.
const SIN_TABLE: [i32; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993, 4560, 5126, // 0
    5690, 6252, 6813, 7371, 7927, 8481, 9032, 9580, 10126, 10668, // 10
    11207, 11743, 12275, 12803, 13328, 13848, 14365, 14876, 15384, 15886, // 20
    16384, 16877, 17364, 17847, 18324, 18795, 19261, 19720, 20174, 20622, // 30
    21063, 21498, 21926, 22348, 22763, 23170, 23571, 23965, 24351, 24730, // 40
    25102, 25466, 25822, 26170, 26510, 26842, 27166, 27482, 27789, 28088, // 50
    28378, 28660, 28932, 29197, 29452, 29698, 29935, 30163, 30382, 30592, // 60
    30792, 30983, 31164, 31336, 31499, 31651, 31795, 31928, 32052, 32166, // 70
    32270, 32365, 32449, 32524, 32588, 32643, 32688, 32723, 32748, 32763, // 80
    32768,
];

/// 32768 * sin(r * 0.1°) for r in 0..10.
const SIN_SMALL: [i32; 10] = [0, 57, 114, 172, 229, 286, 343, 400, 458, 515];

/// 32768 * cos(r * 0.1°) for r in 0..10.
const COS_SMALL: [i32; 10] = [
    32768, 32768, 32768, 32768, 32767, 32767, 32766, 32766, 32765, 32764,
];

/// Past this value `d2 * 100` no longer fits in an `i32`.
const INTERPOLATION_OVERFLOW: i32 = 21474836;

/// Error returned when an argument lies outside its documented domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum TrigError {
    /// `name` was given `value`, which is out of range
    InvalidArgument { name: &'static str, value: i32 },
}

impl fmt::Display for TrigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "{} out of range: {}", name, value)
            }
        }
    }
}

fn check(name: &'static str, value: i32, limit: i32) -> Result<i32, TrigError> {
    if (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(TrigError::InvalidArgument { name, value })
    }
}

/// Sine of a whole number of degrees in [-180, 180].
const fn sin_deg(d: i32) -> i32 {
    if d >= 0 && d <= 90 {
        SIN_TABLE[d as usize]
    } else if d > 90 && d <= 180 {
        SIN_TABLE[(180 - d) as usize]
    } else if d < 0 && d >= -90 {
        -SIN_TABLE[(-d) as usize]
    } else {
        -SIN_TABLE[(180 + d) as usize]
    }
}

const fn cos_deg(d: i32) -> i32 {
    if d >= 0 {
        sin_deg(90 - d)
    } else {
        sin_deg(90 + d)
    }
}

/// `angle` must already be in [-18000, 18000].
pub(crate) const fn sin_unchecked(angle: i32) -> i32 {
    // Round to tenths of a degree on the magnitude. For negative angles the
    // sum is negated before the arithmetic shift, which floors, so e.g.
    // sin(-3010) is -16434 while sin(3010) is 16433. Callers depend on
    // these exact values.
    let z = (angle.abs() + 5) / 10;
    let d = z / 10;
    let r = (z % 10) as usize;
    let sum = sin_deg(d) * COS_SMALL[r] + cos_deg(d) * SIN_SMALL[r];
    if angle < 0 {
        (-sum) >> 15
    } else {
        sum >> 15
    }
}

pub(crate) const fn cos_unchecked(angle: i32) -> i32 {
    if angle >= 0 {
        sin_unchecked(9000 - angle)
    } else {
        sin_unchecked(9000 + angle)
    }
}

/// Returns 32768 * sin of `angle`.
///
/// `angle` is in centidegrees, between -18000 and 18000. The result is
/// accurate to a tenth of a degree of input resolution.
///
/// ```
/// assert_eq!(invmpu::trig::sin(3000), Ok(16384));
/// assert_eq!(invmpu::trig::sin(-9000), Ok(-32768));
/// assert!(invmpu::trig::sin(18001).is_err());
/// ```
pub fn sin(angle: i32) -> Result<i32, TrigError> {
    let angle = check("angle", angle, MAX_ANGLE)?;
    Ok(sin_unchecked(angle))
}

/// Returns 32768 * cos of `angle`, computed as a phase-shifted [`sin`].
///
/// `angle` is in centidegrees, between -18000 and 18000.
pub fn cos(angle: i32) -> Result<i32, TrigError> {
    let angle = check("angle", angle, MAX_ANGLE)?;
    Ok(cos_unchecked(angle))
}

/// `y` and `x` must already be in [-32768, 32768].
pub(crate) fn atan2_unchecked(y: i32, x: i32) -> i32 {
    if x == 0 {
        return match y {
            0 => 0,
            y if y > 0 => 9000,
            _ => -9000,
        };
    }

    // |y << 16| reaches 2^31, one past i32::MAX
    let ratio = ((y as i64) << 16) / x as i64;
    let (sign, ratio) = if ratio < 0 { (-1, -ratio) } else { (1, ratio) };

    for i in 1..ATAN_TABLE.len() {
        let upper = ATAN_TABLE[i];
        if ratio < upper as i64 {
            let lower = ATAN_TABLE[i - 1];
            // below the sentinel, so this fits
            let ratio = ratio as i32;
            let d = upper - lower;
            let d2 = ratio - lower;
            let d3 = if d2 > INTERPOLATION_OVERFLOW {
                d2 * 10 / d * 10
            } else {
                d2 * 100 / d
            };
            let base = (i as i32 - 1) * 100 + d3;
            return if x < 0 {
                sign * (base - 18000)
            } else {
                sign * base
            };
        }
    }

    sign * 9000
}

/// Returns the inverse tangent of `y / x` in centidegrees.
///
/// Both arguments must be between -32768 and 32768. The result is good to
/// about one centidegree except very close to ±90°, where the breakpoint
/// table coarsens. Two table quirks are kept as-is: `atan2(0, x)` for a
/// negative `x` yields -18000, and a ratio beyond the last breakpoint
/// yields ±9000 signed by the ratio alone.
///
/// ```
/// assert_eq!(invmpu::trig::atan2(1, -2), Ok(15344));
/// ```
pub fn atan2(y: i32, x: i32) -> Result<i32, TrigError> {
    let y = check("y", y, ONE)?;
    let x = check("x", x, ONE)?;
    Ok(atan2_unchecked(y, x))
}

/// Rotates `v` anti-clockwise by `angle` centidegrees, in place.
///
/// The products are formed in 64 bits, but a rotated component that no
/// longer fits in an `i32` is truncated; keeping magnitudes in range is up
/// to the caller. `v` is left untouched when `angle` is out of range.
pub fn rotate2d(angle: i32, v: &mut [i32; 2]) -> Result<(), TrigError> {
    let angle = check("angle", angle, MAX_ANGLE)?;
    let c = cos_unchecked(angle) as i64;
    let s = sin_unchecked(angle) as i64;
    let (x, y) = (v[0] as i64, v[1] as i64);
    v[0] = ((c * x - s * y) >> 15) as i32;
    v[1] = ((s * x + c * y) >> 15) as i32;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_whole_degrees_match_table() {
        for d in (0..=90).step_by(10) {
            assert_eq!(sin(d * 100), Ok(SIN_TABLE[d as usize]), "sin({})", d * 100);
        }
        assert_eq!(sin(0), Ok(0));
        assert_eq!(sin(3000), Ok(16384));
        assert_eq!(sin(6000), Ok(28378));
        assert_eq!(sin(9000), Ok(32768));
        assert_eq!(sin(12000), Ok(28378));
        assert_eq!(sin(15000), Ok(16384));
        assert_eq!(sin(18000), Ok(0));
        assert_eq!(sin(-3000), Ok(-16384));
        assert_eq!(sin(-6000), Ok(-28378));
        assert_eq!(sin(-9000), Ok(-32768));
        assert_eq!(sin(-12000), Ok(-28378));
        assert_eq!(sin(-15000), Ok(-16384));
        assert_eq!(sin(-18000), Ok(0));
    }

    #[test]
    fn sin_tenths_of_degree() {
        let expected = [57, 114, 172, 229, 286, 343, 400, 458, 515];
        for (i, value) in expected.iter().enumerate() {
            let angle = (i as i32 + 1) * 10;
            assert_eq!(sin(angle), Ok(*value));
            assert_eq!(sin(-angle), Ok(-*value));
        }
    }

    #[test]
    fn sin_negative_rounding_quirk() {
        let positive = [
            (3010, 16433),
            (3020, 16482),
            (3030, 16532),
            (3040, 16581),
            (3050, 16631),
            (3060, 16680),
            (3070, 16729),
            (3080, 16779),
            (3090, 16828),
        ];
        for (angle, value) in positive {
            assert_eq!(sin(angle), Ok(value), "sin({})", angle);
        }

        let negative = [
            (-3010, -16434),
            (-3020, -16483),
            (-3030, -16533),
            (-3040, -16582),
            (-3050, -16632),
            (-3060, -16681),
            (-3070, -16730),
            (-3080, -16780),
            (-3090, -16829),
        ];
        for (angle, value) in negative {
            assert_eq!(sin(angle), Ok(value), "sin({})", angle);
        }
    }

    #[test]
    fn sin_rounds_to_nearest_tenth() {
        assert_eq!(sin(4), Ok(0));
        assert_eq!(sin(5), Ok(57));
        assert_eq!(sin(-4), Ok(0));
        assert_eq!(sin(-5), Ok(-57));
        assert_eq!(sin(17999), Ok(0));
    }

    #[test]
    fn sin_is_odd_within_one_lsb() {
        for a in 0..=MAX_ANGLE {
            let sum = sin_unchecked(a) + sin_unchecked(-a);
            assert!(sum.abs() <= 1, "sin({}) + sin(-{}) = {}", a, a, sum);
        }
    }

    #[test]
    fn sin_reflects_around_ninety_degrees() {
        for a in (0..=MAX_ANGLE).step_by(10) {
            let diff = sin_unchecked(MAX_ANGLE - a) - sin_unchecked(a);
            assert!(diff.abs() <= 1, "sin({}) vs sin({})", MAX_ANGLE - a, a);
        }
    }

    #[test]
    fn sin_stays_within_unit_amplitude() {
        for a in -MAX_ANGLE..=MAX_ANGLE {
            let s = sin_unchecked(a);
            assert!((-ONE..=ONE).contains(&s));
        }
    }

    #[test]
    fn cos_values() {
        assert_eq!(cos(0), Ok(32768));
        assert_eq!(cos(3000), Ok(28378));
        assert_eq!(cos(6000), Ok(16384));
        assert_eq!(cos(9000), Ok(0));
        assert_eq!(cos(12000), Ok(-16384));
        assert_eq!(cos(15000), Ok(-28378));
        assert_eq!(cos(18000), Ok(-32768));
        assert_eq!(cos(-3000), Ok(28378));
        assert_eq!(cos(-6000), Ok(16384));
        assert_eq!(cos(-9000), Ok(0));
        assert_eq!(cos(-12000), Ok(-16384));
        assert_eq!(cos(-15000), Ok(-28378));
        assert_eq!(cos(-18000), Ok(-32768));
    }

    #[test]
    fn out_of_range_angles_are_rejected() {
        let err = TrigError::InvalidArgument {
            name: "angle",
            value: 18001,
        };
        assert_eq!(sin(18001), Err(err));
        assert_eq!(cos(18001), Err(err));
        assert!(sin(-18001).is_err());
        assert!(cos(i32::MIN).is_err());
    }

    #[test]
    fn atan2_axes() {
        assert_eq!(atan2(0, 0), Ok(0));
        assert_eq!(atan2(1, 0), Ok(9000));
        assert_eq!(atan2(-1, 0), Ok(-9000));
        assert_eq!(atan2(0, 1), Ok(0));
        assert_eq!(atan2(0, -1), Ok(-18000));
    }

    #[test]
    fn atan2_quadrants() {
        assert_eq!(atan2(1, 1), Ok(4500));
        assert_eq!(atan2(-1, 1), Ok(-4500));
        assert_eq!(atan2(1, -1), Ok(13500));
        assert_eq!(atan2(-1, -1), Ok(-13500));
        assert_eq!(atan2(1, 2), Ok(2656));
        assert_eq!(atan2(-1, 2), Ok(-2656));
        assert_eq!(atan2(1, -2), Ok(15344));
        assert_eq!(atan2(-1, -2), Ok(-15344));
        assert_eq!(atan2(16384, 28378), Ok(2999));
        assert_eq!(atan2(20000, 11547), Ok(5999));
    }

    #[test]
    fn atan2_near_asymptote() {
        assert_eq!(atan2(572, 1), Ok(8990));
        assert_eq!(atan2(3000, 100), Ok(8804));
        assert_eq!(atan2(600, 1), Ok(9000));
        assert_eq!(atan2(32768, 1), Ok(9000));
        assert_eq!(atan2(-32768, 1), Ok(-9000));
        assert_eq!(atan2(32768, 32768), Ok(4500));
        assert_eq!(atan2(1, 32768), Ok(0));
    }

    #[test]
    fn atan2_past_last_breakpoint_keeps_ratio_sign() {
        assert_eq!(atan2(32768, -1), Ok(-9000));
        assert_eq!(atan2(-32768, -1), Ok(9000));
    }

    #[test]
    fn atan2_rejects_out_of_range() {
        assert_eq!(
            atan2(40000, 0),
            Err(TrigError::InvalidArgument {
                name: "y",
                value: 40000
            })
        );
        assert_eq!(
            atan2(0, -32769),
            Err(TrigError::InvalidArgument {
                name: "x",
                value: -32769
            })
        );
    }

    #[test]
    fn atan2_round_trips_through_sin_and_cos() {
        for y in (-32000..=32000).step_by(1600) {
            for x in (-32000..=32000).step_by(1600) {
                if x == 0 || (((y as i64) << 16) / x as i64).abs() >= 37549324 {
                    continue;
                }
                let angle = atan2(y, x).unwrap();
                let s = sin(angle).unwrap() as f64;
                let c = cos(angle).unwrap() as f64;
                let norm = ((x * x + y * y) as f64).sqrt();
                let expected_s = 32768.0 * y as f64 / norm;
                let expected_c = 32768.0 * x as f64 / norm;
                assert!(
                    (s - expected_s).abs() < 128.0 && (c - expected_c).abs() < 128.0,
                    "atan2({}, {}) = {}",
                    y,
                    x,
                    angle
                );
            }
        }
    }

    #[test]
    fn rotate2d_quarter_turns() {
        let mut v = [20000, 30000];
        rotate2d(9000, &mut v).unwrap();
        assert_eq!(v, [-30000, 20000]);
        rotate2d(-9000, &mut v).unwrap();
        assert_eq!(v, [20000, 30000]);
    }

    #[test]
    fn rotate2d_eighth_turns() {
        let mut v = [20000, 30000];
        rotate2d(4500, &mut v).unwrap();
        assert_eq!(v, [-7071, 35354]);
        rotate2d(-4500, &mut v).unwrap();
        assert_eq!(v, [19998, 29998]);
    }

    #[test]
    fn rotate2d_half_turn_and_identity() {
        let mut v = [100, -200];
        rotate2d(18000, &mut v).unwrap();
        assert_eq!(v, [-100, 200]);

        let mut v = [123, -456];
        rotate2d(0, &mut v).unwrap();
        assert_eq!(v, [123, -456]);
    }

    #[test]
    fn rotate2d_rejects_bad_angle_without_touching_vector() {
        let mut v = [1, 2];
        assert!(rotate2d(-18001, &mut v).is_err());
        assert_eq!(v, [1, 2]);
    }
}
