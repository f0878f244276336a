// ============================================================================
// Full-Precision Multiply-Divide
// (a × b) ÷ c without intermediate overflow
// ============================================================================

use crate::numeric::word::{check_inputs, check_word};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Calculates `(a × b) ÷ c` with full precision, truncating toward zero.
///
/// The product is held in an unbounded intermediate ("phantom overflow" is
/// allowed); only the final quotient has to fit the word. All three operands
/// share `decimals`, which cancels out of the result.
///
/// # Errors
/// - `DivisionByZero` if `c` is zero
/// - `Overflow` if the quotient leaves the word
pub fn full_mul_div(a: &BigInt, b: &BigInt, c: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b, c])?;
    if c.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    check_word((a * b) / c)
}

/// Calculates `(a × b) ÷ c`, rounding the magnitude up when the division
/// leaves a remainder.
///
/// # Errors
/// - `DivisionByZero` if `c` is zero
/// - `Overflow` if the rounded quotient leaves the word
pub fn full_mul_div_rounding_up(
    a: &BigInt,
    b: &BigInt,
    c: &BigInt,
    decimals: u32,
) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a, b, c])?;
    if c.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    let product = a * b;
    let (mut quotient, remainder) = product.div_rem(c);
    if !remainder.is_zero() {
        // Exact quotient sign is the product sign times the divisor sign
        if product.sign() == c.sign() {
            quotient += 1;
        } else {
            quotient -= 1;
        }
    }

    check_word(quotient)
}
