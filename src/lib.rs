//! # mulrace
//!
//! Races Karatsuba (three-way) against divide-and-conquer (four-way) recursive multiplication on
//! arbitrary-precision decimal operands, counting recursive calls and timing each run.
//!
//! ```rust
//! use mulrace::{compare, BigUint};
//!
//! let comparison = compare(&BigUint::from(1234u32), &BigUint::from(5678u32));
//! assert_eq!(comparison.karatsuba.product, BigUint::from(7006652u32));
//! assert_eq!(comparison.divide_and_conquer.call_count, 21);
//! ```
extern crate num_bigint;

mod counter;
mod divide_conquer;
mod karatsuba;

pub mod chart;
pub mod compare;
pub mod config;
pub mod console;
pub mod digits;
pub mod error;
pub mod operand;
pub mod report;
pub mod timer;

#[cfg(feature = "server")]
pub mod server;

#[cfg(test)]
mod test_utils;

pub use compare::{compare, speedup, sweep, sweep_seeded, Comparison, Sweep, SweepPoint};
pub use config::Config;
pub use error::{Error, Result};
pub use num_bigint::BigUint;
pub use timer::{run, Algorithm, BenchmarkRecord};
