//! Operand parsing for the outer layers, and random operands of a fixed digit length.
use crate::digits::pow10;
use crate::error::{Error, Result};
use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Parses a non-negative decimal integer. Surrounding whitespace is ignored; signs are not
/// accepted.
pub fn parse_operand(text: &str) -> Result<BigUint> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyOperand);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidOperand(text.to_string()));
    }
    BigUint::parse_bytes(text.as_bytes(), 10).ok_or_else(|| Error::InvalidOperand(text.to_string()))
}

/// A uniformly random operand with exactly `digits` decimal digits.
pub fn random_operand<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> Result<BigUint> {
    if digits == 0 {
        return Err(Error::ZeroDigitLength);
    }
    Ok(rng.gen_biguint_range(&pow10(digits - 1), &pow10(digits)))
}
