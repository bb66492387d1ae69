use ilshim_rt::bits::*;
use ilshim_rt::ffi;
use ilshim_rt::math::*;

fn reference_pop_count(mut value: u32) -> i32 {
    let mut count = 0;
    while value != 0 {
        count += (value & 1) as i32;
        value >>= 1;
    }
    count
}

fn reference_trailing_zeros(value: u32) -> i32 {
    (0..32).find(|bit| value & (1 << bit) != 0).unwrap_or(32)
}

/// Deterministic spread over the 32-bit space plus the edges.
fn sample_words() -> impl Iterator<Item = u32> {
    let edges = [0, 1, 2, 3, 0x8000_0000, u32::MAX, 0x5555_5555, 0xAAAA_AAAA];
    let mut state = 0x1234_5678u32;
    let stride = std::iter::from_fn(move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Some(state)
    });
    edges.into_iter().chain((0..32).map(|b| 1 << b)).chain(stride.take(10_000))
}

#[test]
fn pop_count_matches_reference() {
    assert_eq!(pop_count_u32(0b1011), 3);
    for word in sample_words() {
        assert_eq!(pop_count_u32(word), reference_pop_count(word), "{:#x}", word);
    }
    assert_eq!(pop_count_u64(u64::MAX), 64);
}

#[test]
fn trailing_zero_count_matches_reference() {
    assert_eq!(trailing_zero_count_u32(8), 3);
    for word in sample_words() {
        assert_eq!(trailing_zero_count_u32(word), reference_trailing_zeros(word), "{:#x}", word);
    }
}

#[test]
fn trailing_zero_count_of_zero_is_operand_width() {
    assert_eq!(trailing_zero_count_u32(0), 32);
    assert_eq!(trailing_zero_count_i32(0), 32);
    assert_eq!(trailing_zero_count_u64(0), 64);
    assert_eq!(trailing_zero_count_i64(0), 64);
    assert_eq!(trailing_zero_count_i64(i64::MIN), 63);
}

#[test]
fn byte_swap_is_self_inverse() {
    assert_eq!(reverse_endianness_u32(0x1122_3344), 0x4433_2211);
    for word in sample_words() {
        assert_eq!(reverse_endianness_u32(reverse_endianness_u32(word)), word);
    }
    assert_eq!(reverse_endianness_u16(0xABCD), 0xCDAB);
    assert_eq!(reverse_endianness_i16(0x0180), 0x8001u16 as i16);
    assert_eq!(reverse_endianness_u64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
    assert_eq!(reverse_endianness_i32(1), 0x0100_0000);
    assert_eq!(reverse_endianness_i64(reverse_endianness_i64(-42)), -42);
}

#[test]
fn sqrt_follows_ieee754() {
    assert_eq!(sqrt_f32(4.0), 2.0);
    assert!(sqrt_f32(-1.0).is_nan());
    assert!(sqrt_f32(f32::NAN).is_nan());
    assert_eq!(sqrt_f32(f32::INFINITY), f32::INFINITY);

    let negative_zero = sqrt_f32(-0.0);
    assert_eq!(negative_zero, 0.0);
    assert!(negative_zero.is_sign_negative());

    assert!(sqrt_f64(-0.0).is_sign_negative());
    assert_eq!(sqrt_f64(2.25), 1.5);
}

#[test]
fn nan_test() {
    assert!(!is_nan_f32(0.0));
    assert!(is_nan_f32(sqrt_f32(-1.0)));
    assert!(!is_nan_f32(f32::INFINITY));
    assert!(is_nan_f64(f64::NAN));
    assert!(!is_nan_f64(-0.0));
}

#[test]
fn exported_numerics() {
    assert_eq!(ffi::System_Numerics_BitOperations_PopCount_u32(0b1011), 3);
    assert_eq!(ffi::System_Numerics_BitOperations_TrailingZeroCount_u32(8), 3);
    assert_eq!(ffi::System_Numerics_BitOperations_TrailingZeroCount_u32(0), 32);
    assert_eq!(
        ffi::System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u32(0xAABB_CCDD),
        0xDDCC_BBAA
    );
    assert!(ffi::System_Single_IsNaN_f32(ffi::System_MathF_Sqrt_f32(-1.0)));
    assert!(!ffi::System_Single_IsNaN_f32(0.0));
}
