use crate::counter::CallCounter;
use crate::digits::{is_single_digit, pow10, split, split_position};
use num_bigint::BigUint;

/// Three-way recursive multiplication.
///
/// Every invocation counts once, base cases included. The split position is recomputed from
/// the operands of each call, so the `low + high` sums, which can carry an extra digit, are
/// split on their own terms one level down.
pub(crate) fn karatsuba_mul(x: &BigUint, y: &BigUint, counter: &mut CallCounter) -> BigUint {
    counter.increment();
    if is_single_digit(x) || is_single_digit(y) {
        return x * y;
    }
    let m = split_position(x, y);
    let (high1, low1) = split(x, m);
    let (high2, low2) = split(y, m);
    let z0 = karatsuba_mul(&low1, &low2, counter);
    let z1 = karatsuba_mul(&(&low1 + &high1), &(&low2 + &high2), counter);
    let z2 = karatsuba_mul(&high1, &high2, counter);
    // z1 >= z0 + z2: the remainder is exactly low1 * high2 + high1 * low2.
    let middle = z1 - &z2 - &z0;
    z2 * pow10(2 * m) + middle * pow10(m) + z0
}
