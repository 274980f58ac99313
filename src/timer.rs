//! Timed, counted multiplication: the one way in to both multipliers.
use crate::counter::CallCounter;
use crate::divide_conquer::divide_and_conquer_mul;
use crate::error::Error;
use crate::karatsuba::karatsuba_mul;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Karatsuba,
    DivideAndConquer,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::DivideAndConquer, Algorithm::Karatsuba];

    /// Short label used in charts and console output.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Karatsuba => "Karatsuba",
            Algorithm::DivideAndConquer => "Divide",
        }
    }

    fn multiply(self, x: &BigUint, y: &BigUint, counter: &mut CallCounter) -> BigUint {
        match self {
            Algorithm::Karatsuba => karatsuba_mul(x, y, counter),
            Algorithm::DivideAndConquer => divide_and_conquer_mul(x, y, counter),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Karatsuba => f.write_str("karatsuba"),
            Algorithm::DivideAndConquer => f.write_str("divide_and_conquer"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "karatsuba" => Ok(Algorithm::Karatsuba),
            "divide_and_conquer" | "divide" => Ok(Algorithm::DivideAndConquer),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Outcome of one top-level multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub algorithm: Algorithm,
    pub product: BigUint,
    pub call_count: u64,
    pub elapsed: Duration,
}

/// Multiplies `x` by `y` with `algorithm`, counting recursive calls on a fresh counter and
/// timing the whole recursion on the monotonic clock.
pub fn run(algorithm: Algorithm, x: &BigUint, y: &BigUint) -> BenchmarkRecord {
    let mut counter = CallCounter::new();
    let start = Instant::now();
    let product = algorithm.multiply(x, y, &mut counter);
    let elapsed = start.elapsed();
    let call_count = counter.finish();
    tracing::debug!(
        %algorithm,
        call_count,
        elapsed_us = elapsed.as_micros() as u64,
        "multiplication finished"
    );
    BenchmarkRecord {
        algorithm,
        product,
        call_count,
        elapsed,
    }
}
