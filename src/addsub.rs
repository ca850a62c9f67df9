use crate::low_level::{add_assign_digits, sub_assign_digits};
use crate::BigNat;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

impl Add for BigNat {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<&'a BigNat> for BigNat {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<BigNat> for &'a BigNat {
    type Output = BigNat;

    fn add(self, mut other: BigNat) -> BigNat {
        other += self;
        other
    }
}

impl<'a, 'b> Add<&'b BigNat> for &'a BigNat {
    type Output = BigNat;

    fn add(self, other: &'b BigNat) -> BigNat {
        let (big, small) = if self.digits.len() > other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };
        big.clone() + small
    }
}

impl AddAssign for BigNat {
    fn add_assign(&mut self, mut other: Self) {
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}

impl<'a> AddAssign<&'a BigNat> for BigNat {
    fn add_assign(&mut self, other: &'a Self) {
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}

impl BigNat {
    /// `self - other`, or `None` if the difference would be negative.
    pub fn checked_sub(&self, other: &BigNat) -> Option<BigNat> {
        match self.cmp(other) {
            Ordering::Less => None,
            Ordering::Equal => Some(BigNat::ZERO),
            Ordering::Greater => {
                let mut out = self.clone();
                sub_assign_digits(&mut out.digits, &other.digits);
                Some(out.normalize())
            }
        }
    }
}

// Subtraction panics when the result would be negative, the same way primitive unsigned
// integers do in debug builds. The multipliers only ever subtract a part from a whole.
impl<'a> SubAssign<&'a BigNat> for BigNat {
    fn sub_assign(&mut self, other: &'a Self) {
        match (*self).cmp(other) {
            Ordering::Less => panic!("attempt to subtract {} from {}", other, self),
            Ordering::Equal => *self = BigNat::ZERO,
            Ordering::Greater => {
                sub_assign_digits(&mut self.digits, &other.digits);
                self.normalize_in_place();
            }
        }
    }
}
impl SubAssign for BigNat {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl Sub for BigNat {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<'a> Sub<&'a BigNat> for BigNat {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<'a> Sub<BigNat> for &'a BigNat {
    type Output = BigNat;

    fn sub(self, other: BigNat) -> BigNat {
        self.clone() - &other
    }
}

impl<'a, 'b> Sub<&'b BigNat> for &'a BigNat {
    type Output = BigNat;

    fn sub(self, other: &'b BigNat) -> BigNat {
        self.clone() - other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;
    proptest! {
        #[test]
        fn test_addition_methods_match(a in any_bignat(0..40),b in any_bignat(0..40)) {
            let reference_sum = &a + &b;
            assert_eq!(reference_sum, &b + &a);
            assert_eq!(reference_sum, a.clone() + &b);
            assert_eq!(reference_sum, b.clone() + &a);
            assert_eq!(reference_sum, &a + b.clone());
            assert_eq!(reference_sum, &b + a.clone());
            assert_eq!(reference_sum, a.clone() + b.clone());
            assert_eq!(reference_sum, b.clone() + a.clone());
            assert_eq!(to_reference(&reference_sum), to_reference(&a) + to_reference(&b));
        }
    }
    proptest! {
        #[test]
        fn test_additive_identity(a in any_bignat(0..40)) {
            assert_eq!(a, BigNat::ZERO + &a);
        }
    }
    proptest! {
        #[test]
        fn test_additive_associatvity(
            a in any_bignat(0..40),
            b in any_bignat(0..40),
            c in any_bignat(0..40),
            ) {
            assert_eq!(&a + (&b + &c), (&a + &b) + &c);
        }
    }
    proptest! {
        #[test]
        fn test_add_small(a in any::<u64>(), b in any::<u64>()) {
            let sum_big = BigNat::from(a) + BigNat::from(b);
            assert_eq!(sum_big, BigNat::from(a as u128 + b as u128));
       }
    }
    proptest! {
        #[test]
        fn test_subtraction_methods_match(a in any_bignat(0..40),b in any_bignat(0..40)) {
            let (big, small) = if a >= b { (a, b) } else { (b, a) };
            let reference_diff = &big - &small;
            assert_eq!(reference_diff, big.clone() - &small);
            assert_eq!(reference_diff, &big - small.clone());
            assert_eq!(reference_diff, big.clone() - small.clone());
            assert_eq!(Some(reference_diff.clone()), big.checked_sub(&small));
            assert_eq!(reference_diff + &small, big);
        }
    }
    proptest! {
        #[test]
        fn test_sub_assign_matches_reference(a in any_bignat(0..40),b in any_bignat(0..40)) {
            let (big, small) = if a >= b { (a, b) } else { (b, a) };
            let mut by_ref = big.clone();
            by_ref -= &small;
            let mut by_value = big.clone();
            by_value -= small.clone();
            assert_eq!(by_ref, by_value);
            assert_eq!(to_reference(&by_ref), to_reference(&big) - to_reference(&small));
            let mut same = big.clone();
            same -= &big;
            assert_eq!(same, BigNat::ZERO);
        }
    }
    proptest! {
        #[test]
        fn test_checked_sub_underflow(a in any_bignat(0..40)) {
            let bigger = &a + &BigNat::one();
            assert_eq!(a.checked_sub(&bigger), None);
        }
    }
    #[test]
    #[should_panic]
    fn test_sub_underflow_panics() {
        let _ = BigNat::from(3u64) - BigNat::from(4u64);
    }
}
