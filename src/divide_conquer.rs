use crate::split::{base_case, recombine, split_at, split_point};
use crate::stats::MulStats;
use crate::BigNat;

/// Recursive multiplication with all four cross sub-products.
///
/// Same split as [`karatsuba_mul`](crate::karatsuba_mul) without the three-product identity, so
/// the total work stays quadratic.
pub fn divide_and_conquer_mul(l: &BigNat, r: &BigNat) -> BigNat {
    divide_and_conquer_mul_with_stats(l, r, &mut MulStats::default())
}

pub fn divide_and_conquer_mul_with_stats(l: &BigNat, r: &BigNat, stats: &mut MulStats) -> BigNat {
    if let Some(prod) = base_case(l, r, stats) {
        return prod;
    }
    stats.record_split();
    let half = split_point(l, r);
    let (a, b) = split_at(l, half);
    let (c, d) = split_at(r, half);
    let ac = divide_and_conquer_mul_with_stats(&a, &c, stats);
    let ad = divide_and_conquer_mul_with_stats(&a, &d, stats);
    let bc = divide_and_conquer_mul_with_stats(&b, &c, stats);
    let bd = divide_and_conquer_mul_with_stats(&b, &d, stats);
    recombine(&ac, &(ad + bc), &bd, half)
}
