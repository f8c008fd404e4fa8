//! Property tests over the engine's full input domain.

use bitlens_core::Word32;
use bitlens_engine::{convert_radix, decompose_float, simulate_operation};
use proptest::prelude::*;

proptest! {
    /// convert_radix never fails for any in-range integer, and its
    /// two's-complement string decodes back to the input.
    #[test]
    fn radix_complement_round_trips(n in any::<i32>()) {
        let view = convert_radix(&n.to_string()).unwrap();
        prop_assert_eq!(view.decimal, n);
        prop_assert_eq!(
            Word32::from_bit_string(&view.twos_complement).unwrap().to_i32(),
            n
        );
    }

    /// Addition traces always close on the declared result, which equals
    /// the natural sum.
    #[test]
    fn addition_trace_closes_on_declared_result(a in any::<i32>(), b in any::<i32>()) {
        let trace = simulate_operation("add", &a.to_string(), Some(&b.to_string())).unwrap();
        prop_assert_eq!(trace.result, a as i64 + b as i64);
        let last = trace.final_step().unwrap();
        prop_assert_eq!(&last.result, &trace.result_bits);
    }

    /// Subtraction reduces to addition of the negation without losing
    /// exactness in the declared result.
    #[test]
    fn subtraction_trace_closes_on_declared_result(a in any::<i32>(), b in any::<i32>()) {
        let trace = simulate_operation("subtract", &a.to_string(), Some(&b.to_string())).unwrap();
        prop_assert_eq!(trace.result, a as i64 - b as i64);
        let last = trace.final_step().unwrap();
        prop_assert_eq!(&last.result, &trace.result_bits);
    }

    /// Bitwise results match the native operators under signed semantics.
    #[test]
    fn bitwise_matches_native_operators(a in any::<i32>(), b in any::<i32>()) {
        let and = simulate_operation("and", &a.to_string(), Some(&b.to_string())).unwrap();
        prop_assert_eq!(and.result, (a & b) as i64);
        let or = simulate_operation("or", &a.to_string(), Some(&b.to_string())).unwrap();
        prop_assert_eq!(or.result, (a | b) as i64);
        let xor = simulate_operation("xor", &a.to_string(), Some(&b.to_string())).unwrap();
        prop_assert_eq!(xor.result, (a ^ b) as i64);
        let not = simulate_operation("not", &a.to_string(), None).unwrap();
        prop_assert_eq!(not.result, (!a) as i64);
    }

    /// Arithmetic right shifts match the native `>>` for in-width amounts,
    /// at every intermediate step.
    #[test]
    fn right_shift_matches_native(n in any::<i32>(), amount in 0usize..32) {
        let trace = simulate_operation(
            "shift_right",
            &n.to_string(),
            Some(&amount.to_string()),
        )
        .unwrap();
        prop_assert_eq!(trace.result, (n >> amount) as i64);
        let mut value = n;
        for step in &trace.steps[1..] {
            value >>= 1;
            prop_assert_eq!(
                Word32::from_bit_string(&step.result).unwrap().to_i32(),
                value
            );
        }
    }

    /// Left shifts match the native wrapping shift for in-width amounts.
    #[test]
    fn left_shift_matches_native_wrapping(n in any::<i32>(), amount in 0u32..32) {
        let trace = simulate_operation(
            "shift_left",
            &n.to_string(),
            Some(&amount.to_string()),
        )
        .unwrap();
        prop_assert_eq!(trace.result, n.wrapping_shl(amount) as i64);
    }

    /// Decomposed float fields always reassemble into the 32-bit encoding.
    #[test]
    fn float_fields_reassemble(
        value in proptest::num::f32::POSITIVE
            | proptest::num::f32::NEGATIVE
            | proptest::num::f32::NORMAL
            | proptest::num::f32::SUBNORMAL
            | proptest::num::f32::ZERO
            | proptest::num::f32::INFINITE,
    ) {
        let d = decompose_float(&value.to_string()).unwrap();
        prop_assert_eq!(d.bits, value.to_bits());
        prop_assert_eq!(d.encoding(), format!("{:032b}", d.bits));
        prop_assert_eq!(d.unbiased_exponent, d.biased_exponent as i32 - 127);
    }
}
