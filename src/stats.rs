use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Work counters for a single multiplication.
///
/// Wall-clock time is noisy; these counts are exact and deterministic, so they are what the
/// complexity tests look at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MulStats {
    /// Recursive steps that split their operands (zero for schoolbook).
    pub splits: u64,
    /// Leaves of the recursion, where one operand is a single digit.
    pub base_cases: u64,
    /// Elementary digit-by-digit multiplications.
    pub digit_products: u64,
}

impl MulStats {
    pub(crate) fn record_split(&mut self) {
        self.splits += 1;
    }
    pub(crate) fn record_digit_products(&mut self, count: usize) {
        self.digit_products += count as u64;
    }
    pub(crate) fn record_base_case(&mut self, count: usize) {
        self.base_cases += 1;
        self.record_digit_products(count);
    }
}

impl AddAssign for MulStats {
    fn add_assign(&mut self, other: Self) {
        self.splits += other.splits;
        self.base_cases += other.base_cases;
        self.digit_products += other.digit_products;
    }
}

impl Add for MulStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
