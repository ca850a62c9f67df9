use crate::BigNat;
use proptest::prelude::*;

pub fn any_bignat(range: std::ops::Range<usize>) -> impl Strategy<Value = BigNat> {
    proptest::collection::vec(0u8..10, range).prop_map(BigNat::from_digits)
}

pub fn to_reference(x: &BigNat) -> num_bigint::BigUint {
    x.to_string().parse().unwrap()
}

// 10^n - 1: every digit is a 9, so every row and every split carries.
pub fn nines(n: usize) -> BigNat {
    BigNat::from_digits(vec![9; n])
}
