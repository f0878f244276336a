// ============================================================================
// Exponential
// Fixed-point e^x at the reference scale
// ============================================================================

use super::working::{self, LN2};
use crate::numeric::word::{check_operand, check_word, pow10, REFERENCE_DECIMALS};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::sync::LazyLock;

/// Taylor terms for `e^r` with `|r| <= ln2 / 2`; the last term is below
/// `10^-90`.
const EXP_TERMS: u32 = 60;

/// Inputs above 136.0 cannot fit the word (the real boundary is ~135.306).
static MAX_INPUT: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(136) * pow10(REFERENCE_DECIMALS));

/// Inputs below -42.0 truncate to zero at 18 decimals.
static MIN_INPUT: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(-42) * pow10(REFERENCE_DECIMALS));

/// Compute `e^x` for `x = a / 10^18`, returned at 18 decimals.
///
/// The argument is split as `x = k·ln2 + r` with `|r| <= ln2/2`, `e^r` is
/// summed over a fixed number of Taylor terms at the working scale, and the
/// result is scaled by `2^k` and truncated.
///
/// # Errors
/// Returns `Overflow` if the result leaves the word. Large negative inputs
/// yield `0`, never a negative value.
///
/// # Example
/// ```text
/// exponential(1.0)  = 2.718281828459045235
/// exponential(-1.0) = 0.367879441171442321
/// ```
pub fn exponential(a: &BigInt) -> CalcResult<BigInt> {
    check_operand(a)?;
    if a > &*MAX_INPUT {
        return Err(CalcError::Overflow);
    }
    if a < &*MIN_INPUT {
        return Ok(BigInt::zero());
    }

    let one = &*working::ONE;
    let ln2 = &*LN2;
    let x = working::lift(a, REFERENCE_DECIMALS);

    // k = round(x / ln2), half away from zero
    let half_step = if x.is_negative() { -ln2 } else { ln2.clone() };
    let two = BigInt::from(2);
    let k: BigInt = (&x * &two + half_step) / (ln2 * &two);
    let r = x - &k * ln2;

    let mut sum = one.clone();
    let mut term = one.clone();
    for n in 1..=EXP_TERMS {
        term = (term * &r) / (one * n);
        sum += &term;
    }

    // |k| <= 197 given the input bounds above
    let k = k.to_i64().ok_or(CalcError::Overflow)?;
    let unscale = pow10(working::WORKING_DECIMALS - REFERENCE_DECIMALS);
    let result = if k >= 0 {
        (sum << k as usize) / unscale
    } else {
        sum / (unscale << k.unsigned_abs() as usize)
    };

    check_word(result)
}
