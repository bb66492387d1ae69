use ilshim_rt::ffi;
use ilshim_rt::wide::*;

#[test]
fn unsigned_arithmetic_wraps_at_128_bits() {
    assert_eq!(add_u128(u128::MAX, 1), 0);
    assert_eq!(sub_u128(0, 1), u128::MAX);
    assert_eq!(mul_u128(1 << 127, 2), 0);
    // (2^64 + 3) * (2^64 + 5) = 2^128 + 8 * 2^64 + 15
    let a = u128_from_halves(1, 3);
    let b = u128_from_halves(1, 5);
    assert_eq!(mul_u128(a, b), u128_from_halves(8, 15));
}

#[test]
fn signed_arithmetic_is_twos_complement() {
    assert_eq!(add_i128(i128::MAX, 1), i128::MIN);
    assert_eq!(sub_i128(i128::MIN, 1), i128::MAX);
    assert_eq!(mul_i128(i128::MIN, -1), i128::MIN);
    assert_eq!(mul_i128(-3, 7), -21);
    assert_eq!(neg_i128(i128::MIN), i128::MIN);
    assert_eq!(neg_i128(5), -5);
}

#[test]
fn halves_round_trip_through_shift_and_mask() {
    let upper = 0xDEAD_BEEF_0123_4567u64;
    let lower = 0x89AB_CDEF_FEDC_BA98u64;
    let value = u128_from_halves(upper, lower);
    assert_eq!(shr_u128(value, 64) as u64, upper);
    assert_eq!((value & u64::MAX as u128) as u64, lower);

    let signed = i128_from_halves(u64::MAX, 0);
    assert!(lt_i128(signed, 0));
    assert_eq!(shr_i128(signed, 64), -1);
    assert_eq!(signed as u128 & u64::MAX as u128, 0);
}

#[test]
fn right_shift_respects_signedness() {
    assert_eq!(shr_i128(i128::MIN, 127), -1);
    assert_eq!(shr_u128(1 << 127, 127), 1);
    assert_eq!(shr_i128(-8, 1), -4);
}

#[test]
fn comparisons_follow_signedness() {
    assert!(lt_i128(-1, 0));
    assert!(!lt_u128(u128::MAX, 0));
    assert!(lt_u128(0, u128::MAX));
    assert!(eq_i128(-7, -7));
    assert!(!eq_u128(1, 2));
}

#[test]
fn bitwise_operations() {
    assert_eq!(xor_u128(0b1100, 0b1010), 0b0110);
    assert_eq!(not_u128(0), u128::MAX);
    assert_eq!(not_i128(0), -1);
    assert_eq!(xor_i128(-1, 0), -1);
}

#[test]
fn conversions_truncate_and_extend() {
    assert_eq!(int128_narrow::<i8>(0x1_80), i8::MIN);
    assert_eq!(int128_narrow::<u32>(-1), u32::MAX);
    assert_eq!(uint128_narrow::<i64>(u128::MAX), -1);
    assert_eq!(uint128_narrow::<u16>(0x1_0002), 2);
    assert_eq!(int128_from(-2i64), -2);
    assert_eq!(uint128_from(-2i64), u128::MAX - 1);
    assert_eq!(int128_from(u128::MAX), -1);
}

#[test]
fn exports_match_rust_api() {
    assert_eq!(ffi::System_Int128_op_Addition_i128i128(i128::MAX, 1), i128::MIN);
    assert_eq!(ffi::System_UInt128_op_Subtraction_u128u128(0, 1), u128::MAX);
    assert_eq!(ffi::System_UInt128__ctor_mu128u64u64(1, 2), (1u128 << 64) | 2);
    assert_eq!(ffi::System_Int128__ctor_mi128u64u64(u64::MAX, u64::MAX), -1);
    assert_eq!(ffi::System_Int128_op_Explicit_i128_i32(1 << 40 | 9), 9);
    assert_eq!(ffi::System_Int128_op_Implicit_i16(-300), -300);
    assert_eq!(ffi::System_UInt128_op_Implicit_c(0xFFFF), 0xFFFF);
    assert!(ffi::System_Int128_op_LessThan_i128i128(-1, 1));
    assert!(!ffi::System_UInt128_op_LessThan_u128u128(u128::MAX, 1));
}
