//! Q15 fixed-point arithmetic for the offset/gain correction
//!
//! The converter calibration works in a signed fixed-point domain with 15 fractional bits. The
//! gain is stored as a Q15 ratio of the expected full-scale reading to the measured reference
//! reading, and every corrected sample is a Q15 multiply followed by a shift back to integer.

/// Number of fractional bits in the Q15 domain
pub const FRACTIONAL_BITS: u32 = 15;

/// Full-scale signed output of the 16-bit converter
pub const FULL_SCALE: i32 = 32767;

/// The expected full-scale reading, pre-shifted into the Q15 domain
pub const fn expected_full_scale() -> i32 {
    FULL_SCALE << FRACTIONAL_BITS
}

/// Compute the Q15 gain ratio from an offset-corrected reference reading
///
/// Returns `None` when the corrected reading is zero, which would otherwise divide by zero.
/// Division truncates toward zero, matching the converter's native integer semantics.
pub fn gain_from_reference(corrected_reference: i32) -> Option<i32> {
    if corrected_reference == 0 {
        None
    } else {
        Some(expected_full_scale() / corrected_reference)
    }
}

/// Apply an offset/gain correction pair to a raw conversion
///
/// The multiply wraps at 32 bits, as the arithmetic does on the target. Out-of-range results
/// are truncated to the native 16-bit width rather than reported as errors.
pub fn correct(raw: i16, offset: i32, gain: i32) -> i16 {
    let value = raw as i32 - offset;
    (gain.wrapping_mul(value) >> FRACTIONAL_BITS) as i16
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gain_formula() {
        // measured 16484, offset 100 -> corrected 16384
        assert_eq!(Some(65534), gain_from_reference(16484 - 100));
        // truncating division
        assert_eq!(Some((32767 << 15) / 3), gain_from_reference(3));
    }

    #[test]
    fn test_gain_zero_reference() {
        assert_eq!(None, gain_from_reference(0));
    }

    #[test]
    fn test_correct_regression_vector() {
        // Locks the fixed-point rounding behavior: raw 1124 with offset 100 and gain 65534
        // corrects to exactly 2047 (1024 * 65534 >> 15).
        assert_eq!(2047, correct(1124, 100, 65534));
    }

    #[test]
    fn test_correct_is_pure() {
        for _ in 0..3 {
            assert_eq!(2047, correct(1124, 100, 65534));
        }
    }

    #[test]
    fn test_correct_negative_input() {
        // (-924) * 65534 >> 15 with arithmetic shift
        let expected = ((-924i32).wrapping_mul(65534) >> 15) as i16;
        assert_eq!(expected, correct(-824, 100, 65534));
    }
}
