use crate::split::{base_case, recombine, split_at, split_point};
use crate::stats::MulStats;
use crate::BigNat;

pub fn karatsuba_mul(l: &BigNat, r: &BigNat) -> BigNat {
    karatsuba_mul_with_stats(l, r, &mut MulStats::default())
}

pub fn karatsuba_mul_with_stats(l: &BigNat, r: &BigNat, stats: &mut MulStats) -> BigNat {
    if let Some(prod) = base_case(l, r, stats) {
        return prod;
    }
    stats.record_split();
    let half = split_point(l, r);
    let (a, b) = split_at(l, half);
    let (c, d) = split_at(r, half);
    let ac = karatsuba_mul_with_stats(&a, &c, stats);
    let bd = karatsuba_mul_with_stats(&b, &d, stats);
    // (a + b)(c + d) = ac + ad + bc + bd. The sums may be one digit longer than half.
    let ad_plus_bc = karatsuba_mul_with_stats(&(&a + &b), &(&c + &d), stats) - &ac - &bd;
    recombine(&ac, &ad_plus_bc, &bd, half)
}
