use crate::counter::CallCounter;
use crate::digits::{is_single_digit, pow10, split, split_position};
use num_bigint::BigUint;

/// Four-way recursive multiplication, with the same base case and split rule as
/// [`karatsuba_mul`](crate::karatsuba::karatsuba_mul).
pub(crate) fn divide_and_conquer_mul(
    x: &BigUint,
    y: &BigUint,
    counter: &mut CallCounter,
) -> BigUint {
    counter.increment();
    if is_single_digit(x) || is_single_digit(y) {
        return x * y;
    }
    let m = split_position(x, y);
    let (high1, low1) = split(x, m);
    let (high2, low2) = split(y, m);
    let z0 = divide_and_conquer_mul(&low1, &low2, counter);
    let z1 = divide_and_conquer_mul(&low1, &high2, counter);
    let z2 = divide_and_conquer_mul(&high1, &low2, counter);
    let z3 = divide_and_conquer_mul(&high1, &high2, counter);
    z3 * pow10(2 * m) + (z1 + z2) * pow10(m) + z0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::karatsuba::karatsuba_mul;
    use crate::test_utils::*;
    use proptest::prelude::*;
    fn counted(x: u64, y: u64) -> (BigUint, u64) {
        let mut counter = CallCounter::new();
        let product = divide_and_conquer_mul(&BigUint::from(x), &BigUint::from(y), &mut counter);
        (product, counter.finish())
    }
    proptest! {
        #[test]
        fn test_divide_and_conquer_mul(a in decimal_operand(0..60), b in decimal_operand(0..60)) {
            let expected = &a * &b;
            let actual = divide_and_conquer_mul(&a, &b, &mut CallCounter::new());
            assert_eq!(expected, actual);
        }
    }
    proptest! {
        #[test]
        fn test_algorithms_agree(a in decimal_operand(0..40), b in decimal_operand(0..40)) {
            let divide = divide_and_conquer_mul(&a, &b, &mut CallCounter::new());
            let karatsuba = karatsuba_mul(&a, &b, &mut CallCounter::new());
            assert_eq!(divide, karatsuba);
        }
    }
    proptest! {
        #[test]
        fn test_divide_and_conquer_base_case_counts_once(
            a in single_digit(),
            b in decimal_operand(0..60),
        ) {
            let mut counter = CallCounter::new();
            assert_eq!(divide_and_conquer_mul(&b, &a, &mut counter), &a * &b);
            assert_eq!(counter.finish(), 1);
        }
    }
    #[test]
    fn test_divide_and_conquer_hardcoded() {
        assert_eq!(counted(1234, 5678).0, BigUint::from(7006652u32));
        assert_eq!(counted(9, 9), (BigUint::from(81u32), 1));
    }
    #[test]
    fn test_divide_and_conquer_call_trace() {
        // 123 * 456 splits at m = 1 into (12, 3) and (45, 6):
        //   3*6, 3*45, 12*6             1 call each
        //   12 * 45 -> 2*5, 2*4, 1*5, 1*4
        assert_eq!(counted(123, 456), (BigUint::from(56088u32), 9));
        // 1234 * 5678 splits at m = 2 into four two-digit products of five calls each.
        assert_eq!(counted(1234, 5678), (BigUint::from(7006652u32), 21));
    }
}
