// ============================================================================
// Comparison Engine
// Exact total ordering over mantissas at a shared scale
// ============================================================================

use crate::numeric::word::check_inputs;
use crate::numeric::CalcResult;
use num_bigint::BigInt;
use std::cmp::Ordering;

/// Compare two mantissas at `decimals`.
///
/// Comparison is exact; there is no tolerance. The `Result` only reports
/// invalid arguments (scale or operand outside the word).
pub fn compare(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<Ordering> {
    check_inputs(decimals, &[a, b])?;
    Ok(a.cmp(b))
}

pub fn is_equal(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<bool> {
    compare(a, b, decimals).map(Ordering::is_eq)
}

pub fn is_greater_than(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<bool> {
    compare(a, b, decimals).map(Ordering::is_gt)
}

pub fn is_less_than(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<bool> {
    compare(a, b, decimals).map(Ordering::is_lt)
}

pub fn is_greater_or_equal(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<bool> {
    compare(a, b, decimals).map(Ordering::is_ge)
}

pub fn is_less_or_equal(a: &BigInt, b: &BigInt, decimals: u32) -> CalcResult<bool> {
    compare(a, b, decimals).map(Ordering::is_le)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::word::WORD_MAX;
    use crate::numeric::CalcError;
    use quickcheck::quickcheck;

    #[test]
    fn test_predicates() {
        let one = BigInt::from(1_000_000_000_000_000_000i64);
        let two = BigInt::from(2_000_000_000_000_000_000i64);

        assert!(is_equal(&one, &one, 18).unwrap());
        assert!(is_greater_than(&two, &one, 18).unwrap());
        assert!(is_less_than(&one, &two, 18).unwrap());
        assert!(is_greater_or_equal(&two, &two, 18).unwrap());
        assert!(is_less_or_equal(&one, &two, 18).unwrap());

        assert!(!is_equal(&one, &two, 18).unwrap());
        assert!(!is_greater_than(&one, &one, 18).unwrap());
        assert!(!is_less_or_equal(&two, &one, 18).unwrap());
    }

    #[test]
    fn test_no_tolerance() {
        // One unit apart at 18 decimals is still unequal
        let a = BigInt::from(1_000_000_000_000_000_000i64);
        let b = &a + 1;
        assert!(is_less_than(&a, &b, 18).unwrap());
        assert!(!is_equal(&a, &b, 18).unwrap());
    }

    #[test]
    fn test_negative_ordering() {
        let neg = BigInt::from(-5);
        let pos = BigInt::from(3);
        assert_eq!(compare(&neg, &pos, 0).unwrap(), Ordering::Less);
        assert_eq!(compare(&pos, &neg, 0).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_invalid_arguments() {
        let outside = &*WORD_MAX + 1;
        assert_eq!(
            is_equal(&outside, &outside, 18),
            Err(CalcError::InvalidArgument)
        );
        assert_eq!(
            is_less_than(&BigInt::from(1), &BigInt::from(2), 80),
            Err(CalcError::InvalidArgument)
        );
    }

    quickcheck! {
        fn prop_exactly_one_relation_holds(a: i64, b: i64) -> bool {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let lt = is_less_than(&a, &b, 18).unwrap();
            let eq = is_equal(&a, &b, 18).unwrap();
            let gt = is_greater_than(&a, &b, 18).unwrap();
            [lt, eq, gt].iter().filter(|held| **held).count() == 1
        }

        fn prop_antisymmetric(a: i64, b: i64) -> bool {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let ab = is_less_or_equal(&a, &b, 18).unwrap();
            let ba = is_less_or_equal(&b, &a, 18).unwrap();
            !(ab && ba) || is_equal(&a, &b, 18).unwrap()
        }

        fn prop_transitive(a: i64, b: i64, c: i64) -> bool {
            let (a, b, c) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
            let ab = is_less_or_equal(&a, &b, 18).unwrap();
            let bc = is_less_or_equal(&b, &c, 18).unwrap();
            !(ab && bc) || is_less_or_equal(&a, &c, 18).unwrap()
        }
    }
}
