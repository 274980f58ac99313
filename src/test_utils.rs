extern crate proptest;
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;
/// Operands built one decimal digit at a time, so leading zeros (and zero itself) show up.
pub fn decimal_operand(range: std::ops::Range<usize>) -> impl Strategy<Value = BigUint> {
    proptest::collection::vec(0u32..10, range).prop_map(|digits| {
        digits
            .into_iter()
            .fold(BigUint::zero(), |acc, digit| acc * 10u32 + digit)
    })
}
pub fn single_digit() -> impl Strategy<Value = BigUint> {
    (0u32..10).prop_map(BigUint::from)
}
