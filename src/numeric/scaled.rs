// ============================================================================
// Scaled Integer
// Decimal value as a signed mantissa over a power-of-ten scale
// ============================================================================

use super::components;
use super::errors::{CalcError, CalcResult};
use super::word::{check_decimals, check_word, pow10};
use crate::engine::{arithmetic, transform};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal number stored as `mantissa / 10^decimals`.
///
/// The mantissa is bounded by the signed 256-bit word and the scale by
/// [`MAX_DECIMALS`](super::word::MAX_DECIMALS). Values are immutable; every
/// operation returns a fresh value.
///
/// Equality is structural: `1.5` at one decimal and `1.50` at two decimals are
/// different values under `==` but compare equal under [`value_cmp`].
///
/// # Example
/// ```
/// use float_calculator::numeric::ScaledInteger;
///
/// let a = ScaledInteger::parse("1.5", 18).unwrap();
/// let b = ScaledInteger::parse("2.5", 18).unwrap();
/// assert_eq!(a.checked_add(&b).unwrap().to_string(), "4.000000000000000000");
/// ```
///
/// [`value_cmp`]: ScaledInteger::value_cmp
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledInteger {
    mantissa: BigInt,
    decimals: u32,
}

impl ScaledInteger {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a mantissa already scaled by `decimals`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `decimals` exceeds the supported scale
    /// - `Overflow` if the mantissa is outside the word
    pub fn new(mantissa: BigInt, decimals: u32) -> CalcResult<Self> {
        check_decimals(decimals)?;
        let mantissa = check_word(mantissa)?;
        Ok(Self { mantissa, decimals })
    }

    /// Create from raw parts without validation.
    ///
    /// Callers must guarantee the mantissa fits the word and the scale is
    /// supported.
    #[inline]
    pub(crate) fn from_raw(mantissa: BigInt, decimals: u32) -> Self {
        Self { mantissa, decimals }
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an unsupported scale.
    pub fn from_integer(value: i64, decimals: u32) -> CalcResult<Self> {
        check_decimals(decimals)?;
        Self::new(BigInt::from(value) * pow10(decimals), decimals)
    }

    /// Parse decimal text at `decimals`.
    ///
    /// See [`parse_decimal`] for the accepted format.
    pub fn parse(text: &str, decimals: u32) -> CalcResult<Self> {
        parse_decimal(text, decimals).map(|mantissa| Self::from_raw(mantissa, decimals))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    #[inline]
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.mantissa, self.decimals)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    // ========================================================================
    // Rescaling
    // ========================================================================

    /// Express the same value at a larger scale.
    ///
    /// # Errors
    /// - `InvalidArgument` if `decimals` is smaller than the current scale
    ///   (that would truncate; use [`shift`](Self::shift) or
    ///   [`round_to`](Self::round_to)) or unsupported
    /// - `Overflow` if the rescaled mantissa leaves the word
    pub fn rescale(&self, decimals: u32) -> CalcResult<Self> {
        check_decimals(decimals)?;
        if decimals < self.decimals {
            return Err(CalcError::InvalidArgument);
        }
        let mantissa = check_word(&self.mantissa * pow10(decimals - self.decimals))?;
        Ok(Self::from_raw(mantissa, decimals))
    }

    /// Bring both operands to the larger of the two scales.
    fn align(&self, other: &Self) -> CalcResult<(BigInt, BigInt, u32)> {
        let decimals = self.decimals.max(other.decimals);
        let lhs = self.rescale(decimals)?;
        let rhs = other.rescale(decimals)?;
        Ok((lhs.mantissa, rhs.mantissa, decimals))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    pub fn checked_add(&self, rhs: &Self) -> CalcResult<Self> {
        let (a, b, decimals) = self.align(rhs)?;
        arithmetic::add(&a, &b, decimals).map(|m| Self::from_raw(m, decimals))
    }

    pub fn checked_sub(&self, rhs: &Self) -> CalcResult<Self> {
        let (a, b, decimals) = self.align(rhs)?;
        arithmetic::subtract(&a, &b, decimals).map(|m| Self::from_raw(m, decimals))
    }

    /// Checked multiplication, truncating toward zero at the common scale.
    pub fn checked_mul(&self, rhs: &Self) -> CalcResult<Self> {
        let (a, b, decimals) = self.align(rhs)?;
        arithmetic::multiply(&a, &b, decimals).map(|m| Self::from_raw(m, decimals))
    }

    /// Checked division, truncating toward zero at the common scale.
    pub fn checked_div(&self, rhs: &Self) -> CalcResult<Self> {
        let (a, b, decimals) = self.align(rhs)?;
        arithmetic::divide(&a, &b, decimals).map(|m| Self::from_raw(m, decimals))
    }

    pub fn checked_neg(&self) -> CalcResult<Self> {
        arithmetic::negate(&self.mantissa, self.decimals).map(|m| Self::from_raw(m, self.decimals))
    }

    pub fn abs(&self) -> CalcResult<Self> {
        transform::absolute_value(&self.mantissa, self.decimals)
            .map(|m| Self::from_raw(m, self.decimals))
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Integer part, truncated toward zero, at the same scale.
    pub fn integer_part(&self) -> CalcResult<Self> {
        transform::get_integer_part(&self.mantissa, self.decimals)
            .map(|m| Self::from_raw(m, self.decimals))
    }

    /// Move the decimal point by `places`, keeping the scale.
    pub fn shift(&self, places: i64) -> CalcResult<Self> {
        transform::shift(&self.mantissa, self.decimals, places)
            .map(|m| Self::from_raw(m, self.decimals))
    }

    /// Round half away from zero to `digits` fractional digits.
    pub fn round_to(&self, digits: u32) -> CalcResult<Self> {
        transform::round_to(&self.mantissa, self.decimals, digits)
            .map(|m| Self::from_raw(m, self.decimals))
    }

    /// Normalized `(mantissa, exponent)` form.
    pub fn components(&self) -> CalcResult<(BigInt, i64)> {
        components::get_components(&self.mantissa, self.decimals)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare by numeric value regardless of scale. Never fails: the
    /// rescaled mantissas live in an unbounded intermediate.
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        match self.decimals.cmp(&other.decimals) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => {
                let lifted = &self.mantissa * pow10(other.decimals - self.decimals);
                lifted.cmp(&other.mantissa)
            }
            Ordering::Greater => {
                let lifted = &other.mantissa * pow10(self.decimals - other.decimals);
                self.mantissa.cmp(&lifted)
            }
        }
    }

    #[inline]
    pub fn value_eq(&self, other: &Self) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ScaledInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledInteger({}, decimals={})",
            self.mantissa, self.decimals
        )
    }
}

impl fmt::Display for ScaledInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&components::render(&self.mantissa, self.decimals))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ScaledInteger {
    /// Convert from `rust_decimal::Decimal`, keeping its scale. Exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::from_raw(BigInt::from(d.mantissa()), d.scale())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the mantissa needs more than 96 bits or the
    /// scale exceeds 28.
    pub fn to_decimal(&self) -> CalcResult<rust_decimal::Decimal> {
        let mantissa = self.mantissa.to_i128().ok_or(CalcError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.decimals)
            .map_err(|_| CalcError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Convert decimal text into a mantissa at `decimals`.
///
/// Splits on `.`, pads or truncates the fraction to `decimals` digits (no
/// rounding), concatenates and parses the digits, then re-applies a leading
/// `-`. No floating-point intermediate is involved.
///
/// # Examples
/// - `"1.5"` at 18 -> `1500000000000000000`
/// - `"-0.001"` at 3 -> `-1`
/// - `"3.14159"` at 2 -> `314`
///
/// # Errors
/// - `InvalidInput` for empty text or anything besides digits and one `.`
/// - `InvalidArgument` for an unsupported scale
/// - `Overflow` if the value does not fit the word
pub fn parse_decimal(text: &str, decimals: u32) -> CalcResult<BigInt> {
    check_decimals(decimals)?;

    let text = text.trim();
    let (is_negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(CalcError::InvalidInput);
    }
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(CalcError::InvalidInput);
    }

    let width = decimals as usize;
    let mut digits = String::with_capacity(whole.len() + width);
    digits.push_str(whole);
    digits.extend(fraction.chars().chain(std::iter::repeat('0')).take(width));

    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(CalcError::InvalidInput)?;
    check_word(if is_negative { -magnitude } else { magnitude })
}

// ============================================================================
// Tests
// ============================================================================
