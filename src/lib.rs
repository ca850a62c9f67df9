mod addsub;
pub mod bench;
pub mod divide_conquer;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod schoolbook_mul;
pub mod split;
pub mod stats;
#[cfg(test)]
mod test_utils;

pub use divide_conquer::{divide_and_conquer_mul, divide_and_conquer_mul_with_stats};
pub use error::{InvalidOperand, ParseAlgorithmError};
pub use karatsuba::{karatsuba_mul, karatsuba_mul_with_stats};
pub use schoolbook_mul::{schoolbook_mul, schoolbook_mul_with_stats};
pub use stats::MulStats;

use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Mul;
use std::str::FromStr;

/// An arbitrary-precision non-negative integer.
///
/// Stored as decimal digits, least significant first, with no high zero digits. Zero is the
/// empty digit vector.
#[derive(PartialEq, Eq, Clone, Hash, Default)]
pub struct BigNat {
    digits: Vec<u8>,
}

impl std::fmt::Debug for BigNat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigNat({})", self)
    }
}

impl std::fmt::Display for BigNat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }
        let rendered: String = self
            .digits
            .iter()
            .rev()
            .map(|&digit| char::from(b'0' + digit))
            .collect();
        f.pad_integral(true, "", &rendered)
    }
}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        let len_cmp = self.digits.len().cmp(&other.digits.len());
        if len_cmp != Ordering::Equal {
            return len_cmp;
        }
        for (s, o) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            let digit_cmp = s.cmp(o);
            if digit_cmp != Ordering::Equal {
                return digit_cmp;
            }
        }
        Ordering::Equal
    }
}

impl BigNat {
    pub const ZERO: BigNat = BigNat { digits: Vec::new() };

    pub fn one() -> Self {
        BigNat { digits: vec![1] }
    }

    // Callers must only pass decimal digits (0..=9).
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < low_level::RADIX));
        BigNat { digits }.normalize()
    }

    /// Decimal digits, least significant first. Empty for zero.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of decimal digits in the canonical rendering; `0` has one digit.
    pub fn digit_count(&self) -> usize {
        std::cmp::max(self.digits.len(), 1)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// `Some(d)` if the value is a single decimal digit (that is, below ten).
    pub fn single_digit(&self) -> Option<u8> {
        match self.digits.as_slice() {
            [] => Some(0),
            [digit] => Some(*digit),
            _ => None,
        }
    }

    pub(crate) fn mul_digit(&self, x: u8) -> BigNat {
        BigNat::from_digits(low_level::mul_digits_by_digit(&self.digits, x))
    }

    pub(crate) fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }
    pub(crate) fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
}

impl From<u128> for BigNat {
    fn from(mut x: u128) -> Self {
        let mut digits = Vec::new();
        while x > 0 {
            digits.push((x % 10) as u8);
            x /= 10;
        }
        BigNat { digits }
    }
}

impl From<u64> for BigNat {
    fn from(x: u64) -> Self {
        BigNat::from(x as u128)
    }
}

impl TryFrom<i64> for BigNat {
    type Error = InvalidOperand;

    fn try_from(x: i64) -> Result<Self, Self::Error> {
        if x < 0 {
            return Err(InvalidOperand::Negative(x.to_string()));
        }
        Ok(BigNat::from(x as u64))
    }
}

impl TryFrom<f64> for BigNat {
    type Error = InvalidOperand;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        if !x.is_finite() || x.fract() != 0.0 {
            return Err(InvalidOperand::NonIntegral(x.to_string()));
        }
        if x < 0.0 {
            return Err(InvalidOperand::Negative(x.to_string()));
        }
        // Integral floats print exactly with no fractional digits.
        format!("{:.0}", x).parse()
    }
}

impl FromStr for BigNat {
    type Err = InvalidOperand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if body.contains('.') {
            return Err(InvalidOperand::NonIntegral(trimmed.to_string()));
        }
        let offset = trimmed.len() - body.len();
        let mut digits = Vec::with_capacity(body.len());
        for (position, c) in body.chars().enumerate() {
            match c {
                '0'..='9' => digits.push(c as u8 - b'0'),
                '_' => {}
                digit => {
                    return Err(InvalidOperand::InvalidDigit {
                        digit,
                        position: position + offset,
                    })
                }
            }
        }
        if digits.is_empty() {
            return Err(InvalidOperand::Empty);
        }
        digits.reverse();
        let value = BigNat::from_digits(digits);
        if negative && !value.is_zero() {
            return Err(InvalidOperand::Negative(trimmed.to_string()));
        }
        Ok(value)
    }
}

impl<'a, 'b> Mul<&'b BigNat> for &'a BigNat {
    type Output = BigNat;

    fn mul(self, other: &'b BigNat) -> BigNat {
        karatsuba_mul(self, other)
    }
}

impl Mul for BigNat {
    type Output = BigNat;

    fn mul(self, other: BigNat) -> BigNat {
        &self * &other
    }
}

/// The multiplication algorithms under comparison. All three compute the exact same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Standard,
    Karatsuba,
    DivideAndConquer,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Standard,
        Algorithm::Karatsuba,
        Algorithm::DivideAndConquer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Standard => "standard",
            Algorithm::Karatsuba => "karatsuba",
            Algorithm::DivideAndConquer => "divide_and_conquer",
        }
    }

    pub fn multiply(self, x: &BigNat, y: &BigNat) -> BigNat {
        match self {
            Algorithm::Standard => schoolbook_mul(x, y),
            Algorithm::Karatsuba => karatsuba_mul(x, y),
            Algorithm::DivideAndConquer => divide_and_conquer_mul(x, y),
        }
    }

    pub fn multiply_with_stats(self, x: &BigNat, y: &BigNat, stats: &mut MulStats) -> BigNat {
        match self {
            Algorithm::Standard => schoolbook_mul_with_stats(x, y, stats),
            Algorithm::Karatsuba => karatsuba_mul_with_stats(x, y, stats),
            Algorithm::DivideAndConquer => divide_and_conquer_mul_with_stats(x, y, stats),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "schoolbook" => Ok(Algorithm::Standard),
            "karatsuba" => Ok(Algorithm::Karatsuba),
            "divide_and_conquer" | "divide-and-conquer" | "dc" => Ok(Algorithm::DivideAndConquer),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

pub fn multiply(algorithm: Algorithm, x: &BigNat, y: &BigNat) -> BigNat {
    algorithm.multiply(x, y)
}

#[cfg(test)]
mod tests {
    use crate::bench::random_operand;
    use crate::test_utils::*;
    use crate::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn nat(s: &str) -> BigNat {
        s.parse().unwrap()
    }

    proptest! {
        #[test]
        fn test_algorithms_match_reference(a in any_bignat(0..60), b in any_bignat(0..60)) {
            let expected = to_reference(&a) * to_reference(&b);
            for algorithm in Algorithm::ALL.iter() {
                let actual = multiply(*algorithm, &a, &b);
                assert_eq!(to_reference(&actual), expected, "{}", algorithm);
            }
        }
    }
    proptest! {
        #[test]
        fn test_algorithms_match_uneven(a in any_bignat(0..5), b in any_bignat(20..80)) {
            let expected = schoolbook_mul(&a, &b);
            assert_eq!(karatsuba_mul(&a, &b), expected);
            assert_eq!(divide_and_conquer_mul(&a, &b), expected);
            assert_eq!(karatsuba_mul(&b, &a), expected);
            assert_eq!(divide_and_conquer_mul(&b, &a), expected);
        }
    }
    proptest! {
        #[test]
        fn mul_zero(a in any_bignat(0..40)) {
            for algorithm in Algorithm::ALL.iter() {
                assert_eq!(algorithm.multiply(&BigNat::ZERO, &a), BigNat::ZERO);
                assert_eq!(algorithm.multiply(&a, &BigNat::ZERO), BigNat::ZERO);
            }
        }
    }
    proptest! {
        #[test]
        fn mul_identity(a in any_bignat(0..40)) {
            for algorithm in Algorithm::ALL.iter() {
                assert_eq!(algorithm.multiply(&BigNat::one(), &a), a);
            }
        }
    }
    proptest! {
        #[test]
        fn mul_operator_matches_u64(a in any::<u32>(), b in any::<u32>()) {
            let prod = &BigNat::from(a as u64) * &BigNat::from(b as u64);
            assert_eq!(prod, BigNat::from(a as u64 * b as u64));
        }
    }
    proptest! {
        #[test]
        fn display_round_trips(a in any_bignat(0..40)) {
            assert_eq!(nat(&a.to_string()), a);
        }
    }
    #[test]
    fn hardcoded() {
        assert_eq!(schoolbook_mul(&nat("123"), &nat("456")), nat("56088"));
        assert_eq!(karatsuba_mul(&nat("1234"), &nat("5678")), nat("7006652"));
        assert_eq!(
            divide_and_conquer_mul(&nat("9999"), &nat("9999")),
            nat("99980001")
        );
    }
    #[test]
    fn single_digit_base_case() {
        let x = BigNat::from(7u64);
        let y = BigNat::from(342u64);
        for algorithm in [Algorithm::Karatsuba, Algorithm::DivideAndConquer].iter() {
            let mut stats = MulStats::default();
            let prod = algorithm.multiply_with_stats(&x, &y, &mut stats);
            assert_eq!(prod, BigNat::from(2394u64));
            assert_eq!(stats.splits, 0);
            assert_eq!(stats.base_cases, 1);
        }
    }
    #[test]
    fn large_operands_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
        for _ in 0..10 {
            let a = random_operand(&mut rng, 50);
            let b = random_operand(&mut rng, 50);
            let expected = to_reference(&a) * to_reference(&b);
            let standard = schoolbook_mul(&a, &b);
            assert_eq!(to_reference(&standard), expected);
            assert_eq!(karatsuba_mul(&a, &b), standard);
            assert_eq!(divide_and_conquer_mul(&a, &b), standard);
        }
    }
    #[test]
    fn digit_count() {
        assert_eq!(BigNat::ZERO.digit_count(), 1);
        assert_eq!(BigNat::from(9u64).digit_count(), 1);
        assert_eq!(BigNat::from(10u64).digit_count(), 2);
        assert_eq!(BigNat::from(u64::MAX).digit_count(), 20);
    }
    #[test]
    fn ordering() {
        assert!(nat("99") < nat("100"));
        assert!(nat("123") < nat("124"));
        assert!(BigNat::ZERO < BigNat::one());
        assert_eq!(nat("00042").cmp(&nat("42")), std::cmp::Ordering::Equal);
    }
    #[test]
    fn parse() {
        assert_eq!(nat("  +1_000_000 "), BigNat::from(1_000_000u64));
        assert_eq!(nat("-0"), BigNat::ZERO);
        assert_eq!("".parse::<BigNat>(), Err(InvalidOperand::Empty));
        assert_eq!(
            "-12".parse::<BigNat>(),
            Err(InvalidOperand::Negative("-12".to_string()))
        );
        assert_eq!(
            "12.5".parse::<BigNat>(),
            Err(InvalidOperand::NonIntegral("12.5".to_string()))
        );
        assert_eq!(
            "+12a".parse::<BigNat>(),
            Err(InvalidOperand::InvalidDigit {
                digit: 'a',
                position: 3
            })
        );
    }
    #[test]
    fn convert() {
        assert_eq!(BigNat::try_from(42i64), Ok(BigNat::from(42u64)));
        assert_eq!(
            BigNat::try_from(-1i64),
            Err(InvalidOperand::Negative("-1".to_string()))
        );
        assert_eq!(BigNat::try_from(1e20f64), Ok(nat("100000000000000000000")));
        assert!(matches!(
            BigNat::try_from(0.5f64),
            Err(InvalidOperand::NonIntegral(_))
        ));
        assert!(matches!(
            BigNat::try_from(f64::NAN),
            Err(InvalidOperand::NonIntegral(_))
        ));
        assert!(matches!(
            BigNat::try_from(-3.0f64),
            Err(InvalidOperand::Negative(_))
        ));
    }
    #[test]
    fn algorithm_names() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(*algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!("schoolbook".parse::<Algorithm>(), Ok(Algorithm::Standard));
        assert_eq!(
            "toom".parse::<Algorithm>(),
            Err(ParseAlgorithmError("toom".to_string()))
        );
    }
}
