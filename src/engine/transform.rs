// ============================================================================
// Transformation Engine
// Absolute value, truncation, decimal-point shifting and rounding
// ============================================================================

use crate::numeric::word::{check_inputs, check_word, pow10, WORD_DIGITS};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

/// Absolute value of a mantissa.
///
/// # Errors
/// Returns `Overflow` for the most negative word value.
pub fn absolute_value(a: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    check_word(a.abs())
}

/// Integer portion of `a`, truncated toward zero and still scaled by `decimals`.
pub fn get_integer_part(a: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    let scale = pow10(decimals);
    Ok((a / &scale) * scale)
}

/// Move the decimal point of `a` by `places`.
///
/// Positive `places` multiply by `10^places`, negative ones divide by
/// `10^|places|` truncating toward zero.
///
/// # Errors
/// Returns `Overflow` if an upward shift leaves the word.
pub fn shift(a: &BigInt, decimals: u32, places: i64) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    let magnitude = places.unsigned_abs();

    if places >= 0 {
        if a.is_zero() {
            return Ok(BigInt::zero());
        }
        if magnitude >= u64::from(WORD_DIGITS) {
            return Err(CalcError::Overflow);
        }
        check_word(a * pow10(magnitude as u32))
    } else {
        if magnitude >= u64::from(WORD_DIGITS) {
            return Ok(BigInt::zero());
        }
        Ok(a / pow10(magnitude as u32))
    }
}

/// Round `a` to `digits` fractional digits, half away from zero.
///
/// The result keeps scale `decimals`; the dropped digits become zeros.
///
/// # Errors
/// - `InvalidArgument` if `digits > decimals`
/// - `Overflow` if rounding away from zero leaves the word
///
/// # Example
/// ```text
/// round_to(3.14159, 18, 3) = 3.142
/// round_to(-2.5, 18, 0)    = -3.0
/// ```
pub fn round_to(a: &BigInt, decimals: u32, digits: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    if digits > decimals {
        return Err(CalcError::InvalidArgument);
    }

    let factor = pow10(decimals - digits);
    let mut quotient = a / &factor;
    let remainder = a % &factor;

    // Remainder carries the sign of `a`; compare magnitudes against half a unit
    if remainder.abs() * 2 >= factor {
        match a.sign() {
            Sign::Minus => quotient -= 1,
            _ => quotient += 1,
        }
    }

    check_word(quotient * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::word::{WORD_MAX, WORD_MIN};

    fn fd(raw: i128) -> BigInt {
        BigInt::from(raw)
    }

    #[test]
    fn test_absolute_value() {
        assert_eq!(absolute_value(&fd(-5_500), 3).unwrap(), fd(5_500));
        assert_eq!(absolute_value(&fd(5_500), 3).unwrap(), fd(5_500));
        assert_eq!(absolute_value(&fd(0), 3).unwrap(), fd(0));
    }

    #[test]
    fn test_absolute_value_most_negative() {
        assert_eq!(absolute_value(&WORD_MIN, 18), Err(CalcError::Overflow));
    }

    #[test]
    fn test_get_integer_part() {
        // 3.14159 -> 3.0
        let x = fd(3_141_590_000_000_000_000);
        assert_eq!(get_integer_part(&x, 18).unwrap(), fd(3_000_000_000_000_000_000));

        // -3.7 -> -3.0 (toward zero)
        assert_eq!(get_integer_part(&fd(-37), 1).unwrap(), fd(-30));

        // Scale 0 is already integral
        assert_eq!(get_integer_part(&fd(-37), 0).unwrap(), fd(-37));
    }

    #[test]
    fn test_shift() {
        // 1.5 shifted left by 2 -> 150.0
        let x = fd(1_500_000_000_000_000_000);
        assert_eq!(shift(&x, 18, 2).unwrap(), fd(150_000_000_000_000_000_000));

        // 1.5 shifted right by 2 -> 0.015
        assert_eq!(shift(&x, 18, -2).unwrap(), fd(15_000_000_000_000_000));

        assert_eq!(shift(&x, 18, 0).unwrap(), x);
    }

    #[test]
    fn test_shift_truncates_toward_zero() {
        assert_eq!(shift(&fd(-199), 0, -2).unwrap(), fd(-1));
        assert_eq!(shift(&fd(199), 0, -2).unwrap(), fd(1));
    }

    #[test]
    fn test_shift_extremes() {
        assert_eq!(shift(&fd(1), 0, 76).unwrap(), pow10(76));
        assert_eq!(shift(&fd(1), 0, 77), Err(CalcError::Overflow));
        assert_eq!(shift(&fd(1), 0, i64::MAX), Err(CalcError::Overflow));
        assert_eq!(shift(&fd(0), 0, i64::MAX).unwrap(), fd(0));
        assert_eq!(shift(&WORD_MAX, 0, -76).unwrap(), fd(5));
        assert_eq!(shift(&WORD_MAX, 0, i64::MIN).unwrap(), fd(0));
    }

    #[test]
    fn test_round_to() {
        // 3.14159 -> 3.142
        let x = fd(3_141_590_000_000_000_000);
        assert_eq!(round_to(&x, 18, 3).unwrap(), fd(3_142_000_000_000_000_000));

        // 3.14149 -> 3.141
        let y = fd(3_141_490_000_000_000_000);
        assert_eq!(round_to(&y, 18, 3).unwrap(), fd(3_141_000_000_000_000_000));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(&fd(25), 1, 0).unwrap(), fd(30));
        assert_eq!(round_to(&fd(-25), 1, 0).unwrap(), fd(-30));
        assert_eq!(round_to(&fd(-24), 1, 0).unwrap(), fd(-20));
        assert_eq!(round_to(&fd(15), 1, 0).unwrap(), fd(20));
    }

    #[test]
    fn test_round_to_same_scale_is_identity() {
        assert_eq!(round_to(&fd(12_345), 4, 4).unwrap(), fd(12_345));
    }

    #[test]
    fn test_round_to_invalid_digits() {
        assert_eq!(round_to(&fd(1), 2, 3), Err(CalcError::InvalidArgument));
    }

    #[test]
    fn test_round_to_overflow() {
        // WORD_MAX ends in ...967, rounding to tens goes above the word
        assert_eq!(round_to(&WORD_MAX, 1, 0), Err(CalcError::Overflow));
    }
}
