// ============================================================================
// Natural Logarithm
// Range reduction by powers of two plus an atanh series
// ============================================================================

use super::working::{self, LN2, SQRT2};
use crate::numeric::word::{check_inputs, check_word};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Odd powers summed for `atanh(z)` with `|z| <= 0.172`; the last term is
/// below `10^-90`.
const LN_TERMS: u32 = 60;

/// Compute `ln(a / 10^decimals)`, returned at `decimals`, truncated toward zero.
///
/// The argument is written as `2^k · m` with `m` in `[1/√2, √2]`, then
/// `ln m = 2·atanh((m - 1) / (m + 1))` and `ln x = k·ln2 + ln m`.
///
/// # Errors
/// - `InvalidArgument` if `a <= 0`
/// - `Overflow` if the result leaves the word (tiny arguments at large scales)
pub fn natural_log(a: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[a])?;
    if !a.is_positive() {
        return Err(CalcError::InvalidArgument);
    }

    let one = &*working::ONE;
    let two = one * 2;
    let x = working::lift(a, decimals);

    let mut k = x.bits() as i64 - one.bits() as i64;
    let mut m = if k >= 0 {
        x >> k as usize
    } else {
        x << k.unsigned_abs() as usize
    };

    // The bit-length estimate is off by at most one doubling either way
    while m >= two {
        m >>= 1;
        k += 1;
    }
    while &m < one {
        m <<= 1;
        k -= 1;
    }

    // Fold m above √2 into m/2 so the series argument stays small
    let (numerator, denominator) = if m > *SQRT2 {
        k += 1;
        (&m - &two, &m + &two)
    } else {
        (&m - one, &m + one)
    };

    let z = numerator * one / denominator;
    let z_squared = &z * &z / one;

    let mut sum = BigInt::zero();
    let mut power = z;
    for n in 0..LN_TERMS {
        sum += &power / (2 * n + 1);
        power = power * &z_squared / one;
    }

    let result = BigInt::from(k) * &*LN2 + sum * 2;
    check_word(working::lower(result, decimals))
}
