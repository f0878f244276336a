// ============================================================================
// Component Utilities
// Normalized (mantissa, exponent) form and canonical decimal text
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::scaled::ScaledInteger;
use super::word::{
    check_inputs, check_operand, check_word, pow10, MAX_DECIMALS, WORD_DIGITS,
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Strip trailing zero digits from `mantissa`, raising `exponent` to match.
///
/// Zero normalizes to `(0, 0)`. Idempotent: a normalized pair comes back
/// unchanged.
///
/// # Errors
/// - `InvalidArgument` if the mantissa is outside the word
/// - `Overflow` if the exponent runs past `i64::MAX`
pub fn normalize(mantissa: &BigInt, exponent: i64) -> CalcResult<(BigInt, i64)> {
    check_operand(mantissa)?;
    if mantissa.is_zero() {
        return Ok((BigInt::zero(), 0));
    }

    let ten = BigInt::from(10);
    let mut mantissa = mantissa.clone();
    let mut exponent = exponent;
    loop {
        let (quotient, remainder) = mantissa.div_rem(&ten);
        if !remainder.is_zero() {
            break;
        }
        mantissa = quotient;
        exponent = exponent.checked_add(1).ok_or(CalcError::Overflow)?;
    }
    Ok((mantissa, exponent))
}

/// Decompose a scaled value into its normalized `(mantissa, exponent)` form.
///
/// # Example
/// ```text
/// get_components(1.5 @ 18 decimals) = (15, -1)
/// ```
pub fn get_components(value: &BigInt, decimals: u32) -> CalcResult<(BigInt, i64)> {
    check_inputs(decimals, &[value])?;
    normalize(value, -i64::from(decimals))
}

/// Rebuild a scaled value from `(mantissa, exponent)`.
///
/// A negative exponent becomes the scale of the result; a non-negative one is
/// multiplied into the mantissa at scale 0.
///
/// # Errors
/// - `InvalidArgument` if the mantissa is outside the word or the implied
///   scale exceeds the largest supported scale
/// - `Overflow` if `mantissa · 10^exponent` leaves the word
pub fn from_components(mantissa: &BigInt, exponent: i64) -> CalcResult<ScaledInteger> {
    check_operand(mantissa)?;

    if exponent < 0 {
        let decimals = u32::try_from(exponent.unsigned_abs())
            .ok()
            .filter(|decimals| *decimals <= MAX_DECIMALS)
            .ok_or(CalcError::InvalidArgument)?;
        return Ok(ScaledInteger::from_raw(mantissa.clone(), decimals));
    }

    if mantissa.is_zero() {
        return Ok(ScaledInteger::from_raw(BigInt::zero(), 0));
    }
    if exponent >= i64::from(WORD_DIGITS) {
        return Err(CalcError::Overflow);
    }
    let scaled = check_word(mantissa * pow10(exponent as u32))?;
    Ok(ScaledInteger::from_raw(scaled, 0))
}

/// Canonical decimal text: sign, integer digits, `.`, and exactly `decimals`
/// fractional digits. No exponent notation and no trailing-zero suppression.
pub fn to_float_string(value: &BigInt, decimals: u32) -> CalcResult<String> {
    check_inputs(decimals, &[value])?;
    Ok(render(value, decimals))
}

/// Render without validation; used by `Display`.
pub(crate) fn render(value: &BigInt, decimals: u32) -> String {
    let digits = value.abs().to_string();
    let width = decimals as usize;

    let mut out = String::with_capacity(digits.len() + width + 3);
    if value.is_negative() {
        out.push('-');
    }
    if width == 0 {
        out.push_str(&digits);
        return out;
    }

    if digits.len() > width {
        let (int_part, frac_part) = digits.split_at(digits.len() - width);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(width - digits.len()));
        out.push_str(&digits);
    }
    out
}
