//! Side-by-side runs of both algorithms, on one operand pair or across a sweep of lengths.
use crate::error::{Error, Result};
use crate::operand::random_operand;
use crate::timer::{run, Algorithm, BenchmarkRecord};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub karatsuba: BenchmarkRecord,
    pub divide_and_conquer: BenchmarkRecord,
}

impl Comparison {
    pub fn record(&self, algorithm: Algorithm) -> &BenchmarkRecord {
        match algorithm {
            Algorithm::Karatsuba => &self.karatsuba,
            Algorithm::DivideAndConquer => &self.divide_and_conquer,
        }
    }
    pub fn speedup(&self) -> f64 {
        speedup(self.divide_and_conquer.elapsed, self.karatsuba.elapsed)
    }
}

/// Divide-and-conquer time over Karatsuba time, or 0 when the Karatsuba run took no
/// measurable time.
pub fn speedup(divide: Duration, karatsuba: Duration) -> f64 {
    if karatsuba.is_zero() {
        0.0
    } else {
        divide.as_secs_f64() / karatsuba.as_secs_f64()
    }
}

pub fn compare(x: &BigUint, y: &BigUint) -> Comparison {
    let divide_and_conquer = run(Algorithm::DivideAndConquer, x, y);
    let karatsuba = run(Algorithm::Karatsuba, x, y);
    Comparison {
        karatsuba,
        divide_and_conquer,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub digits: usize,
    pub comparison: Comparison,
}

/// Comparisons in the order the digit lengths were requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sweep {
    pub points: Vec<SweepPoint>,
}

impl Sweep {
    pub fn get(&self, digits: usize) -> Option<&Comparison> {
        self.points
            .iter()
            .find(|point| point.digits == digits)
            .map(|point| &point.comparison)
    }
    pub fn digit_lengths(&self) -> Vec<usize> {
        self.points.iter().map(|point| point.digits).collect()
    }
    /// Elapsed seconds per point.
    pub fn times(&self, algorithm: Algorithm) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| point.comparison.record(algorithm).elapsed.as_secs_f64())
            .collect()
    }
    pub fn calls(&self, algorithm: Algorithm) -> Vec<u64> {
        self.points
            .iter()
            .map(|point| point.comparison.record(algorithm).call_count)
            .collect()
    }
    pub fn speedups(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| point.comparison.speedup())
            .collect()
    }
}

/// Compares both algorithms on one random operand pair per digit length.
pub fn sweep<R: Rng + ?Sized>(digit_lengths: &[usize], rng: &mut R) -> Result<Sweep> {
    if digit_lengths.contains(&0) {
        return Err(Error::ZeroDigitLength);
    }
    let mut points = Vec::with_capacity(digit_lengths.len());
    for &digits in digit_lengths {
        let x = random_operand(rng, digits)?;
        let y = random_operand(rng, digits)?;
        let comparison = compare(&x, &y);
        tracing::info!(
            digits,
            divide_calls = comparison.divide_and_conquer.call_count,
            karatsuba_calls = comparison.karatsuba.call_count,
            speedup = comparison.speedup(),
            "sweep point"
        );
        points.push(SweepPoint { digits, comparison });
    }
    Ok(Sweep { points })
}

pub fn sweep_seeded(digit_lengths: &[usize], seed: u64) -> Result<Sweep> {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    sweep(digit_lengths, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;
    proptest! {
        #[test]
        fn test_compare_products_agree(a in decimal_operand(0..80), b in decimal_operand(0..80)) {
            let comparison = compare(&a, &b);
            let expected = &a * &b;
            assert_eq!(comparison.karatsuba.product, expected);
            assert_eq!(comparison.divide_and_conquer.product, expected);
            assert_eq!(comparison.karatsuba.algorithm, Algorithm::Karatsuba);
            assert_eq!(comparison.divide_and_conquer.algorithm, Algorithm::DivideAndConquer);
        }
    }
    #[test]
    fn test_compare_hardcoded() {
        let comparison = compare(&BigUint::from(1234u32), &BigUint::from(5678u32));
        assert_eq!(comparison.karatsuba.product, BigUint::from(7006652u32));
        assert_eq!(comparison.divide_and_conquer.product, BigUint::from(7006652u32));
        let comparison = compare(&BigUint::from(9u32), &BigUint::from(9u32));
        assert_eq!(comparison.karatsuba.call_count, 1);
        assert_eq!(comparison.divide_and_conquer.call_count, 1);
    }
    #[test]
    fn test_speedup() {
        assert_eq!(speedup(Duration::from_millis(5), Duration::ZERO), 0.0);
        assert_eq!(speedup(Duration::ZERO, Duration::ZERO), 0.0);
        assert_eq!(
            speedup(Duration::from_millis(30), Duration::from_millis(10)),
            3.0
        );
    }
    #[test]
    fn test_divide_makes_more_calls_on_long_operands() {
        let sweep = sweep_seeded(&[64, 128, 256], 0).unwrap();
        for point in &sweep.points {
            assert!(
                point.comparison.divide_and_conquer.call_count
                    >= point.comparison.karatsuba.call_count,
                "{} digits: {:?}",
                point.digits,
                point.comparison
            );
        }
        let divide = sweep.calls(Algorithm::DivideAndConquer);
        let karatsuba = sweep.calls(Algorithm::Karatsuba);
        assert!(divide[2] - divide[0] > karatsuba[2] - karatsuba[0]);
    }
    #[test]
    fn test_sweep_series() {
        let sweep = sweep_seeded(&[10, 3, 10], 7).unwrap();
        assert_eq!(sweep.digit_lengths(), vec![10, 3, 10]);
        assert_eq!(sweep.times(Algorithm::Karatsuba).len(), 3);
        assert_eq!(sweep.speedups().len(), 3);
        let comparison = sweep.get(3).unwrap();
        assert_eq!(
            comparison.karatsuba.product,
            comparison.divide_and_conquer.product
        );
        assert!(sweep.get(4).is_none());
        let repeated = sweep_seeded(&[10, 3, 10], 7).unwrap();
        assert_eq!(
            repeated.calls(Algorithm::Karatsuba),
            sweep.calls(Algorithm::Karatsuba)
        );
    }
    #[test]
    fn test_sweep_rejects_zero_length() {
        assert_eq!(sweep_seeded(&[10, 0], 0), Err(Error::ZeroDigitLength));
    }
}
