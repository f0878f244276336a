// ============================================================================
// Cubic Solver
// One real root of t^3 + b·t^2 + c·t + d by exact bracketing and bisection
// ============================================================================

use crate::numeric::word::{check_inputs, check_word, pow10};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Upper bound on bisection steps per bracket. A bracket never spans more
/// than ~260 bits of grid units, so this is never reached in practice.
const MAX_BISECTIONS: u32 = 512;

/// Monic cubic with coefficients on the integer grid `T = t · 10^decimals`.
///
/// `eval` returns `f(t) · 10^(3·decimals)`, which is exact and has the same
/// sign as `f(t)`.
/// Grid unit `[floor, floor + 1)` holding a critical point of the cubic
struct CriticalPoint {
    floor: BigInt,
    sign: Sign,
}

struct ScaledCubic {
    b: BigInt,
    c_scaled: BigInt,
    d_scaled: BigInt,
}

impl ScaledCubic {
    fn new(b: &BigInt, c: &BigInt, d: &BigInt, decimals: u32) -> Self {
        let scale = pow10(decimals);
        Self {
            b: b.clone(),
            c_scaled: c * &scale,
            d_scaled: d * &scale * &scale,
        }
    }

    /// `T^3 + B·T^2 + C·S·T + D·S^2` in Horner form
    fn eval(&self, t: &BigInt) -> BigInt {
        ((t + &self.b) * t + &self.c_scaled) * t + &self.d_scaled
    }

    /// Critical points of `f` as grid units `[floor, floor + 1)`, each with
    /// the exact sign of `f` at the extremum.
    ///
    /// With `p = B`, `q = C·S`, `r = D·S^2` and `Δ = p^2 - 3q > 0` the
    /// critical points are `(-p ± √Δ) / 3` and
    /// `27·f = E ∓ 2·Δ·√Δ` there, where `E = 2·Δ·p + 27·r - 3·p·q`.
    fn critical_points(&self) -> SmallVec<[CriticalPoint; 2]> {
        let mut points = SmallVec::new();

        let three = BigInt::from(3);
        let p = &self.b;
        let q = &self.c_scaled;
        let delta: BigInt = p * p - q * &three;
        if !delta.is_positive() {
            return points;
        }

        let floor_root = delta.sqrt();
        let ceil_root = if &floor_root * &floor_root == delta {
            floor_root.clone()
        } else {
            &floor_root + BigInt::one()
        };

        let e: BigInt = &delta * p * BigInt::from(2) + &self.d_scaled * BigInt::from(27)
            - p * q * &three;
        let e_squared = &e * &e;
        let four_delta_cubed: BigInt = &delta * &delta * &delta * BigInt::from(4);
        let against_e = e_squared.cmp(&four_delta_cubed);

        // Local maximum: sign of E + 2Δ√Δ
        let max_sign = if !e.is_negative() {
            Sign::Plus
        } else {
            match against_e {
                Ordering::Greater => Sign::Minus,
                Ordering::Equal => Sign::NoSign,
                Ordering::Less => Sign::Plus,
            }
        };
        points.push(CriticalPoint {
            floor: (-p - ceil_root).div_floor(&three),
            sign: max_sign,
        });

        // Local minimum: sign of E - 2Δ√Δ
        let min_sign = if !e.is_positive() {
            Sign::Minus
        } else {
            match against_e {
                Ordering::Greater => Sign::Plus,
                Ordering::Equal => Sign::NoSign,
                Ordering::Less => Sign::Minus,
            }
        };
        points.push(CriticalPoint {
            floor: (-p + floor_root).div_floor(&three),
            sign: min_sign,
        });

        points
    }

    /// Root strictly inside a unit bracket `[lo, lo + 1]` whose endpoints
    /// share a sign, truncated toward zero.
    ///
    /// Such a bracket holds a root only around an extremum that reaches zero
    /// or crosses it.
    fn root_near_extremum(
        &self,
        lo: &BigInt,
        hi: &BigInt,
        critical: &[CriticalPoint],
    ) -> Option<BigInt> {
        if hi - lo != BigInt::one() {
            return None;
        }
        let endpoint_sign = self.eval(lo).sign();
        critical
            .iter()
            .filter(|point| &point.floor == lo)
            .any(|point| point.sign != endpoint_sign)
            .then(|| if lo.is_negative() { hi.clone() } else { lo.clone() })
    }

    /// Bisect `[lo, hi]` down to a single grid unit.
    ///
    /// Returns `None` when the endpoints do not bracket a sign change. A root
    /// strictly inside the final unit bracket is truncated toward zero.
    fn bisect(&self, lo: &BigInt, hi: &BigInt) -> CalcResult<Option<BigInt>> {
        let (mut lo, mut hi) = (lo.clone(), hi.clone());

        let mut f_lo = self.eval(&lo);
        if f_lo.is_zero() {
            return Ok(Some(lo));
        }
        let f_hi = self.eval(&hi);
        if f_hi.is_zero() {
            return Ok(Some(hi));
        }
        if f_lo.sign() == f_hi.sign() {
            return Ok(None);
        }

        let two = BigInt::from(2);
        for _ in 0..MAX_BISECTIONS {
            if &hi - &lo <= BigInt::one() {
                let toward_zero = if lo.is_negative() { hi } else { lo };
                return Ok(Some(toward_zero));
            }

            let mid = (&lo + &hi).div_floor(&two);
            let f_mid = self.eval(&mid);
            if f_mid.is_zero() {
                return Ok(Some(mid));
            }
            if f_mid.sign() == f_lo.sign() {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        tracing::warn!(
            "Cubic bisection exhausted {} steps between {} and {}",
            MAX_BISECTIONS,
            lo,
            hi
        );
        Err(CalcError::NoRealRoot)
    }
}

/// Solve `t^3 + b·t^2 + c·t + d = 0` for one real root at `decimals`.
///
/// Brackets come from the Cauchy bound `|t| <= 1 + max(|b|, |c|, |d|)` and the
/// grid units holding the critical points of the cubic, so every other
/// bracket is monotone. Monotone brackets with a sign change are bisected on
/// the exact integer grid. A unit bracket around a critical point holds a
/// root exactly when the extremum lies on the far side of zero from its
/// endpoints; that root is truncated toward zero. Among the roots found the
/// one nearest zero is returned; on an exact magnitude tie the non-negative
/// root wins.
///
/// # Errors
/// - `NoRealRoot` if bisection fails to converge
/// - `Overflow` if the selected root leaves the word
///
/// # Example
/// ```text
/// t^3 - t = 0  has roots {-1, 0, 1}  ->  0
/// t^3 - 5t^2 - t + 5 = 0  has roots {-1, 1, 5}  ->  1
/// ```
pub fn cubic_solve(b: &BigInt, c: &BigInt, d: &BigInt, decimals: u32) -> CalcResult<BigInt> {
    check_inputs(decimals, &[b, c, d])?;

    let cubic = ScaledCubic::new(b, c, d, decimals);
    let scale = pow10(decimals);

    let largest = [b.abs(), c.abs(), d.abs()]
        .into_iter()
        .max()
        .unwrap_or_default();
    let bound = &scale + largest;

    let critical = cubic.critical_points();

    let mut points: SmallVec<[BigInt; 6]> = SmallVec::new();
    points.push(-&bound);
    for point in &critical {
        points.push(point.floor.clone());
        points.push(&point.floor + BigInt::one());
    }
    points.push(bound);
    points.sort();
    points.dedup();

    let mut roots: SmallVec<[BigInt; 5]> = SmallVec::new();
    for bracket in points.windows(2) {
        let (lo, hi) = (&bracket[0], &bracket[1]);
        if let Some(root) = cubic.bisect(lo, hi)? {
            roots.push(root);
        } else if let Some(root) = cubic.root_near_extremum(lo, hi, &critical) {
            roots.push(root);
        }
    }

    let nearest = roots
        .into_iter()
        .min_by(|x, y| x.abs().cmp(&y.abs()).then_with(|| y.cmp(x)))
        .ok_or(CalcError::NoRealRoot)?;

    check_word(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::word::WORD_MAX;

    fn fd(units: i64) -> BigInt {
        BigInt::from(units) * pow10(18)
    }

    fn raw(digits: &str) -> BigInt {
        digits.parse().unwrap()
    }

    #[test]
    fn test_three_roots_picks_nearest_zero() {
        // t^3 - t: roots {-1, 0, 1}
        let root = cubic_solve(&fd(0), &fd(-1), &fd(0), 18).unwrap();
        assert_eq!(root, BigInt::zero());

        // (t-1)(t-2)(t-3)
        let root = cubic_solve(&fd(-6), &fd(11), &fd(-6), 18).unwrap();
        assert_eq!(root, fd(1));

        // (t+1)(t+2)(t+3)
        let root = cubic_solve(&fd(6), &fd(11), &fd(6), 18).unwrap();
        assert_eq!(root, fd(-1));

        // (t+1)(t-2)(t+2)
        let root = cubic_solve(&fd(1), &fd(-4), &fd(-4), 18).unwrap();
        assert_eq!(root, fd(-1));
    }

    #[test]
    fn test_magnitude_tie_prefers_non_negative() {
        // (t-5)(t^2-1): roots {-1, 1, 5}
        let root = cubic_solve(&fd(-5), &fd(-1), &fd(5), 18).unwrap();
        assert_eq!(root, fd(1));
    }

    #[test]
    fn test_single_real_root() {
        // t^3 = 8
        let root = cubic_solve(&fd(0), &fd(0), &fd(-8), 18).unwrap();
        assert_eq!(root, fd(2));

        // Cube root of 2, truncated
        let root = cubic_solve(&fd(0), &fd(0), &fd(-2), 18).unwrap();
        assert_eq!(root, raw("1259921049894873164"));

        // t^3 + 3t + 1 = 0 has one negative root, truncated toward zero
        let root = cubic_solve(&fd(0), &fd(3), &fd(1), 18).unwrap();
        assert_eq!(root, raw("-322185354626085592"));
    }

    #[test]
    fn test_degenerate_coefficients() {
        // t^3 = 0
        let root = cubic_solve(&fd(0), &fd(0), &fd(0), 18).unwrap();
        assert_eq!(root, BigInt::zero());

        // t^2 (t - 1): the double root sits on a critical point
        let root = cubic_solve(&fd(-1), &fd(0), &fd(0), 18).unwrap();
        assert_eq!(root, BigInt::zero());
    }

    #[test]
    fn test_scale_zero() {
        // t^3 - 4t at integer scale: roots {-2, 0, 2}
        let root = cubic_solve(&BigInt::zero(), &BigInt::from(-4), &BigInt::zero(), 0).unwrap();
        assert_eq!(root, BigInt::zero());

        // t^3 - 2 at integer scale truncates to 1
        let root = cubic_solve(&BigInt::zero(), &BigInt::zero(), &BigInt::from(-2), 0).unwrap();
        assert_eq!(root, BigInt::one());
    }

    #[test]
    fn test_root_beside_critical_point_at_low_scale() {
        // t^3 - 8t^2 - 8t: roots {-0.899, 0, 8.899}
        let root = cubic_solve(&BigInt::from(-8), &BigInt::from(-8), &BigInt::zero(), 0).unwrap();
        assert_eq!(root, BigInt::zero());

        // t^3 - 3t^2 - 0.3t at one decimal: roots {-0.095, 0, 3.095}
        let root = cubic_solve(&BigInt::from(-30), &BigInt::from(-3), &BigInt::zero(), 1).unwrap();
        assert_eq!(root, BigInt::zero());
    }

    #[test]
    fn test_two_roots_inside_one_grid_unit() {
        // t^3 + 5t^2 - 7t + 2: two roots in (0, 1), one in (-7, -6)
        let root =
            cubic_solve(&BigInt::from(5), &BigInt::from(-7), &BigInt::from(2), 0).unwrap();
        assert_eq!(root, BigInt::zero());

        // Mirrored: two roots in (-1, 0) truncate up to 0
        let root =
            cubic_solve(&BigInt::from(-5), &BigInt::from(-7), &BigInt::from(-2), 0).unwrap();
        assert_eq!(root, BigInt::zero());
    }

    #[test]
    fn test_critical_point_signs() {
        // t^3 - 3t: maximum 2 at -1, minimum -2 at 1
        let cubic = ScaledCubic::new(&BigInt::zero(), &BigInt::from(-3), &BigInt::zero(), 0);
        let points = cubic.critical_points();
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].floor.clone(), points[0].sign), (BigInt::from(-1), Sign::Plus));
        assert_eq!((points[1].floor.clone(), points[1].sign), (BigInt::one(), Sign::Minus));

        // t^3 + 5t^2 - 7t + 2: minimum near 0.594 dips below zero
        let cubic = ScaledCubic::new(&BigInt::from(5), &BigInt::from(-7), &BigInt::from(2), 0);
        let points = cubic.critical_points();
        assert_eq!((points[1].floor.clone(), points[1].sign), (BigInt::zero(), Sign::Minus));

        // Monotone cubic has none
        let cubic = ScaledCubic::new(&BigInt::zero(), &BigInt::from(3), &BigInt::one(), 0);
        assert!(cubic.critical_points().is_empty());
    }

    #[test]
    fn test_root_is_a_sign_change() {
        let (b, c, d) = (raw("1234500000000000000"), raw("-987600000000000000"), raw("55500000000000000"));
        let root = cubic_solve(&b, &c, &d, 18).unwrap();
        assert_eq!(root, raw("61093200780018208"));
        let cubic = ScaledCubic::new(&b, &c, &d, 18);
        let here = cubic.eval(&root);
        let step = if root.is_negative() { &root - 1 } else { &root + 1 };
        let beyond = cubic.eval(&step);
        assert!(here.is_zero() || here.sign() != beyond.sign());
    }

    #[test]
    fn test_word_sized_constant_term() {
        // t^3 + MAX = 0: the root -cbrt(MAX) is truncated toward zero
        let root = cubic_solve(&BigInt::zero(), &BigInt::zero(), &WORD_MAX, 0).unwrap();
        assert_eq!(root, raw("-38685626227668133590597631"));
        assert!(&root * &root * &root >= -&*WORD_MAX);
    }

    #[test]
    fn test_invalid_scale() {
        assert_eq!(
            cubic_solve(&fd(0), &fd(-1), &fd(0), 100),
            Err(CalcError::InvalidArgument)
        );
    }
}
