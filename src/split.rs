//! Splitting operands at a decimal boundary and putting sub-products back together.
//!
//! Both recursive multipliers use exactly these helpers, so they decompose their inputs the same
//! way and differ only in how many sub-products they compute.
use crate::low_level::add_assign_digits_slice;
use crate::stats::MulStats;
use crate::BigNat;

/// The boundary used to split `x` and `y`: half the digit count of the longer operand.
///
/// Taking the larger length keeps both halves balanced and makes every recursive call strictly
/// shorter than its parent.
pub fn split_point(x: &BigNat, y: &BigNat) -> usize {
    std::cmp::max(x.digit_count(), y.digit_count()) / 2
}

/// Splits `v` into `(high, low)` with `v = high * 10^half + low` and `low < 10^half`.
pub fn split_at(v: &BigNat, half: usize) -> (BigNat, BigNat) {
    if half >= v.digits.len() {
        return (BigNat::ZERO, v.clone());
    }
    let (low, high) = v.digits.split_at(half);
    // The top of `high` is the top of `v`, so only `low` can carry high zeros.
    let high = BigNat {
        digits: high.to_vec(),
    };
    (high, BigNat::from_digits(low.to_vec()))
}

/// `high * 10^(2 * half) + mid * 10^half + low`.
pub fn recombine(high: &BigNat, mid: &BigNat, low: &BigNat, half: usize) -> BigNat {
    let top = std::cmp::max(half + mid.digits.len(), 2 * half + high.digits.len());
    // One spare digit for the final carry.
    let mut digits = vec![0; std::cmp::max(top, low.digits.len()) + 1];
    add_assign_digits_slice(&mut digits, &low.digits);
    add_assign_digits_slice(&mut digits[half..], &mid.digits);
    add_assign_digits_slice(&mut digits[2 * half..], &high.digits);
    BigNat { digits }.normalize()
}

// Terminal case shared by the recursive multipliers: once either side is a single digit, the
// product is one digit row.
pub(crate) fn base_case(l: &BigNat, r: &BigNat, stats: &mut MulStats) -> Option<BigNat> {
    if let Some(digit) = l.single_digit() {
        stats.record_base_case(r.digit_count());
        Some(r.mul_digit(digit))
    } else if let Some(digit) = r.single_digit() {
        stats.record_base_case(l.digit_count());
        Some(l.mul_digit(digit))
    } else {
        None
    }
}

impl BigNat {
    /// `10^places`.
    pub fn pow10(places: usize) -> BigNat {
        BigNat::one().mul_pow10(places)
    }

    /// `self * 10^places`.
    pub fn mul_pow10(&self, places: usize) -> BigNat {
        if self.is_zero() {
            return BigNat::ZERO;
        }
        let mut digits = vec![0; places];
        digits.extend_from_slice(&self.digits);
        BigNat { digits }
    }
}
