use crate::low_level::{add_assign_digits_slice, mul_digits_by_digit};
use crate::stats::MulStats;
use crate::BigNat;

/// Long multiplication, one digit row at a time.
pub fn schoolbook_mul(l: &BigNat, r: &BigNat) -> BigNat {
    schoolbook_mul_with_stats(l, r, &mut MulStats::default())
}

pub fn schoolbook_mul_with_stats(l: &BigNat, r: &BigNat, stats: &mut MulStats) -> BigNat {
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        // Row i is l[i] * r with the carry rippled along it, weighted by 10^i.
        let row = mul_digits_by_digit(&r.digits, l_digit);
        add_assign_digits_slice(&mut digits[i..], &row);
    }
    stats.record_digit_products(l.digits.len() * r.digits.len());
    BigNat { digits }.normalize()
}
