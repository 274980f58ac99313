//! Decimal digit counting and splitting over `BigUint`.
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

const LOG10_2: f64 = std::f64::consts::LOG10_2;

pub fn pow10(exponent: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exponent)
}

pub fn is_single_digit(n: &BigUint) -> bool {
    n.to_u64().map_or(false, |small| small < 10)
}

/// Number of decimal digits in `n`, with zero counting as one digit.
///
/// The count is estimated from the bit length and then corrected against powers of ten, so
/// the integer is never formatted as text.
pub fn digit_count(n: &BigUint) -> usize {
    if n.is_zero() {
        return 1;
    }
    if let Some(small) = n.to_u64() {
        return small.ilog10() as usize + 1;
    }
    // floor(log10(2^(bits - 1))) + 1 is at most one short of the real count.
    let mut count = ((n.bits() - 1) as f64 * LOG10_2) as usize + 1;
    while count > 1 && *n < pow10(count - 1) {
        count -= 1;
    }
    while *n >= pow10(count) {
        count += 1;
    }
    count
}

/// Splits `n` into `(high, low)` with `n == high * 10^m + low` and `low < 10^m`.
pub fn split(n: &BigUint, m: usize) -> (BigUint, BigUint) {
    n.div_rem(&pow10(m))
}

/// Half the larger operand's digit count, rounded down.
pub fn split_position(x: &BigUint, y: &BigUint) -> usize {
    std::cmp::max(digit_count(x), digit_count(y)) / 2
}
