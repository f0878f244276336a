// ============================================================================
// Word Bounds
// Signed 256-bit word limits and power-of-ten helpers
// ============================================================================

use super::errors::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::One;
use std::sync::LazyLock;

/// Bit width of the host word every result must fit.
pub const WORD_BITS: u32 = 256;

/// Largest scale whose `10^decimals` still fits the word.
pub const MAX_DECIMALS: u32 = 76;

/// Scale of the constants and of the scale-free operations.
pub const REFERENCE_DECIMALS: u32 = 18;

/// Decimal digits of `WORD_MAX`; no non-zero value survives an upshift this large.
pub const WORD_DIGITS: u32 = 77;

/// `2^255 - 1`
pub static WORD_MAX: LazyLock<BigInt> =
    LazyLock::new(|| (BigInt::one() << (WORD_BITS - 1)) - BigInt::one());

/// `-2^255`
pub static WORD_MIN: LazyLock<BigInt> = LazyLock::new(|| -(BigInt::one() << (WORD_BITS - 1)));

/// Compute `10^n`.
#[inline]
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Whether `value` lies inside the signed word.
#[inline]
pub fn fits_word(value: &BigInt) -> bool {
    value >= &*WORD_MIN && value <= &*WORD_MAX
}

/// Pass a computed result through, or report `Overflow` when it left the word.
#[inline]
pub fn check_word(value: BigInt) -> CalcResult<BigInt> {
    if fits_word(&value) {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Validate a caller-supplied operand.
#[inline]
pub fn check_operand(value: &BigInt) -> CalcResult<()> {
    if fits_word(value) {
        Ok(())
    } else {
        Err(CalcError::InvalidArgument)
    }
}

/// Validate a caller-supplied scale.
#[inline]
pub fn check_decimals(decimals: u32) -> CalcResult<()> {
    if decimals <= MAX_DECIMALS {
        Ok(())
    } else {
        Err(CalcError::InvalidArgument)
    }
}

/// Validate a scale together with every operand sharing it.
pub fn check_inputs(decimals: u32, operands: &[&BigInt]) -> CalcResult<()> {
    check_decimals(decimals)?;
    operands.iter().try_for_each(|operand| check_operand(operand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bounds() {
        assert_eq!(WORD_MAX.bits(), 255);
        assert_eq!(&*WORD_MIN + &*WORD_MAX, BigInt::from(-1));
        assert_eq!(WORD_MAX.to_string().len() as u32, WORD_DIGITS);
    }

    #[test]
    fn test_max_decimals_fits() {
        assert!(fits_word(&pow10(MAX_DECIMALS)));
        assert!(!fits_word(&pow10(MAX_DECIMALS + 1)));
    }

    #[test]
    fn test_check_word() {
        assert_eq!(check_word(WORD_MAX.clone()), Ok(WORD_MAX.clone()));
        assert_eq!(
            check_word(&*WORD_MAX + BigInt::one()),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            check_word(&*WORD_MIN - BigInt::one()),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_check_decimals() {
        assert!(check_decimals(0).is_ok());
        assert!(check_decimals(MAX_DECIMALS).is_ok());
        assert_eq!(check_decimals(MAX_DECIMALS + 1), Err(CalcError::InvalidArgument));
    }
}
