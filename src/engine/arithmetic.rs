// ============================================================================
// Arithmetic Engine
// Add, subtract, multiply, divide and negate over mantissas at a shared scale
// ============================================================================

use crate::numeric::word::{check_inputs, check_word, pow10};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::Zero;

/// Checked addition of two mantissas at `decimals`.
///
/// # Errors
/// Returns `Overflow` if the sum leaves the 256-bit word.
pub fn add(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b])?;
    check_word(a + b)
}

/// Checked subtraction of two mantissas at `decimals`.
///
/// # Errors
/// Returns `Overflow` if the difference leaves the 256-bit word.
pub fn subtract(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b])?;
    check_word(a - b)
}

/// Checked multiplication, truncating toward zero.
///
/// The product is formed in an unbounded intermediate and only the rescaled
/// result has to fit the word.
///
/// # Errors
/// Returns `Overflow` if the rescaled product leaves the word.
pub fn multiply(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b])?;
    // BigInt division truncates toward zero
    check_word((a * b) / pow10(decimals))
}

/// Checked division, truncating toward zero.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero
/// - `Overflow` if the quotient leaves the word
pub fn divide(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b])?;
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    check_word((a * pow10(decimals)) / b)
}

/// Checked negation.
///
/// # Errors
/// Returns `Overflow` for the most negative word value, whose negation has no
/// representation.
pub fn negate(a: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    check_word(-a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::word::{WORD_MAX, WORD_MIN};
    use num_traits::One;

    fn fd(raw: i128) -> BigInt {
        BigInt::from(raw)
    }

    #[test]
    fn test_add() {
        // 1.5 + 2.5 = 4.0
        let sum = add(&fd(1_500_000_000_000_000_000), &fd(2_500_000_000_000_000_000), 18).unwrap();
        assert_eq!(sum, fd(4_000_000_000_000_000_000));
    }

    #[test]
    fn test_add_overflow() {
        let result = add(&WORD_MAX, &BigInt::one(), 18);
        assert_eq!(result, Err(CalcError::Overflow));

        let result = add(&WORD_MIN, &BigInt::from(-1), 0);
        assert_eq!(result, Err(CalcError::Overflow));
    }

    #[test]
    fn test_subtract() {
        // 5.0 - 2.0 = 3.0
        let diff = subtract(&fd(5_000_000_000_000_000_000), &fd(2_000_000_000_000_000_000), 18).unwrap();
        assert_eq!(diff, fd(3_000_000_000_000_000_000));

        // Negative result
        let diff = subtract(&fd(2), &fd(5), 0).unwrap();
        assert_eq!(diff, fd(-3));

        let result = subtract(&WORD_MIN, &BigInt::one(), 0);
        assert_eq!(result, Err(CalcError::Overflow));
    }

    #[test]
    fn test_multiply() {
        // 2.5 * 4.0 = 10.0
        let product = multiply(&fd(2_500_000_000_000_000_000), &fd(4_000_000_000_000_000_000), 18).unwrap();
        assert_eq!(product, fd(10_000_000_000_000_000_000));

        // 1.5 * 1.5 = 2.25
        let product = multiply(&fd(15), &fd(15), 1).unwrap();
        assert_eq!(product, fd(22));
    }

    #[test]
    fn test_multiply_truncates_toward_zero() {
        // 0.333 * 3 = 0.999 at 3 decimals
        let product = multiply(&fd(333), &fd(3_000), 3).unwrap();
        assert_eq!(product, fd(999));

        // -0.05 * 0.5 = -0.025 -> -0.02
        let product = multiply(&fd(-5), &fd(50), 2).unwrap();
        assert_eq!(product, fd(-2));
    }

    #[test]
    fn test_multiply_wide_intermediate() {
        // MAX * 1.0 overflows a 256-bit intermediate but not the result
        let one = pow10(18);
        let product = multiply(&WORD_MAX, &one, 18).unwrap();
        assert_eq!(product, *WORD_MAX);

        let result = multiply(&WORD_MAX, &(one * 2), 18);
        assert_eq!(result, Err(CalcError::Overflow));
    }

    #[test]
    fn test_divide() {
        // 10.0 / 4.0 = 2.5
        let quotient = divide(&fd(10_000_000_000_000_000_000), &fd(4_000_000_000_000_000_000), 18).unwrap();
        assert_eq!(quotient, fd(2_500_000_000_000_000_000));

        // -1 / 3 at 4 decimals truncates toward zero
        let quotient = divide(&fd(-10_000), &fd(30_000), 4).unwrap();
        assert_eq!(quotient, fd(-3_333));
    }

    #[test]
    fn test_divide_by_zero() {
        let result = divide(&fd(1), &BigInt::zero(), 18);
        assert_eq!(result, Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_overflow() {
        // MAX / 0.5 doubles the magnitude
        let result = divide(&WORD_MAX, &fd(5), 1);
        assert_eq!(result, Err(CalcError::Overflow));
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(&fd(5), 0).unwrap(), fd(-5));
        assert_eq!(negate(&fd(-5), 0).unwrap(), fd(5));
        assert_eq!(negate(&WORD_MAX, 0).unwrap(), -&*WORD_MAX);
    }

    #[test]
    fn test_negate_most_negative() {
        assert_eq!(negate(&WORD_MIN, 18), Err(CalcError::Overflow));
    }

    #[test]
    fn test_invalid_scale_and_operand() {
        assert_eq!(add(&fd(1), &fd(1), 77), Err(CalcError::InvalidArgument));

        let outside = &*WORD_MAX + BigInt::one();
        assert_eq!(add(&outside, &fd(0), 18), Err(CalcError::InvalidArgument));
    }
}
