// ============================================================================
// Constants
// Common values at the reference scale
// ============================================================================

use super::scaled::ScaledInteger;
use super::word::{pow10, REFERENCE_DECIMALS};
use num_bigint::BigInt;
use std::sync::LazyLock;

static ZERO: LazyLock<ScaledInteger> = LazyLock::new(|| reference(0));
static ONE: LazyLock<ScaledInteger> = LazyLock::new(|| reference(1));
static TWO: LazyLock<ScaledInteger> = LazyLock::new(|| reference(2));
static TEN: LazyLock<ScaledInteger> = LazyLock::new(|| reference(10));

fn reference(units: u32) -> ScaledInteger {
    ScaledInteger::from_raw(BigInt::from(units) * pow10(REFERENCE_DECIMALS), REFERENCE_DECIMALS)
}

/// `0` at 18 decimals.
#[inline]
pub fn zero() -> ScaledInteger {
    ZERO.clone()
}

/// `1.0` at 18 decimals (`10^18`).
#[inline]
pub fn one() -> ScaledInteger {
    ONE.clone()
}

/// `2.0` at 18 decimals.
#[inline]
pub fn two() -> ScaledInteger {
    TWO.clone()
}

/// `10.0` at 18 decimals.
#[inline]
pub fn ten() -> ScaledInteger {
    TEN.clone()
}
