use crate::{bits, math};

// --- System.Numerics.BitOperations ---

#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_PopCount_u32(value: u32) -> i32 {
    bits::pop_count_u32(value)
}

#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_PopCount_u64(value: u64) -> i32 {
    bits::pop_count_u64(value)
}

/// Returns 32 for a zero input.
#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_TrailingZeroCount_u32(value: u32) -> i32 {
    bits::trailing_zero_count_u32(value)
}

#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_TrailingZeroCount_i32(value: i32) -> i32 {
    bits::trailing_zero_count_i32(value)
}

/// Returns 64 for a zero input.
#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_TrailingZeroCount_u64(value: u64) -> i32 {
    bits::trailing_zero_count_u64(value)
}

#[no_mangle]
pub extern "C" fn System_Numerics_BitOperations_TrailingZeroCount_i64(value: i64) -> i32 {
    bits::trailing_zero_count_i64(value)
}

// --- System.Buffers.Binary.BinaryPrimitives ---

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u32(value: u32) -> u32 {
    bits::reverse_endianness_u32(value)
}

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i32(value: i32) -> i32 {
    bits::reverse_endianness_i32(value)
}

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u16(value: u16) -> u16 {
    bits::reverse_endianness_u16(value)
}

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i16(value: i16) -> i16 {
    bits::reverse_endianness_i16(value)
}

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u64(value: u64) -> u64 {
    bits::reverse_endianness_u64(value)
}

#[no_mangle]
pub extern "C" fn System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i64(value: i64) -> i64 {
    bits::reverse_endianness_i64(value)
}

// --- Math ---

#[no_mangle]
pub extern "C" fn System_MathF_Sqrt_f32(value: f32) -> f32 {
    math::sqrt_f32(value)
}

#[no_mangle]
pub extern "C" fn System_Math_Sqrt_f64(value: f64) -> f64 {
    math::sqrt_f64(value)
}

#[no_mangle]
pub extern "C" fn System_Single_IsNaN_f32(value: f32) -> bool {
    math::is_nan_f32(value)
}

#[no_mangle]
pub extern "C" fn System_Double_IsNaN_f64(value: f64) -> bool {
    math::is_nan_f64(value)
}

symbol_table!(register => [
    System_Numerics_BitOperations_PopCount_u32,
    System_Numerics_BitOperations_PopCount_u64,
    System_Numerics_BitOperations_TrailingZeroCount_u32,
    System_Numerics_BitOperations_TrailingZeroCount_i32,
    System_Numerics_BitOperations_TrailingZeroCount_u64,
    System_Numerics_BitOperations_TrailingZeroCount_i64,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u32,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i32,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u16,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i16,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_u64,
    System_Buffers_Binary_BinaryPrimitives_ReverseEndianness_i64,
    System_MathF_Sqrt_f32,
    System_Math_Sqrt_f64,
    System_Single_IsNaN_f32,
    System_Double_IsNaN_f64,
]);
