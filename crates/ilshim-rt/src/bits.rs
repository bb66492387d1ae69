//! Bit counting and byte order.

/// Number of set bits.
#[inline]
pub fn pop_count_u32(value: u32) -> i32 {
    value.count_ones() as i32
}

#[inline]
pub fn pop_count_u64(value: u64) -> i32 {
    value.count_ones() as i32
}

/// Index of the lowest set bit.
///
/// For a zero input this returns 32, the operand width. The native builtin
/// this replaces leaves that case undefined; the managed API defines it as
/// the width, and that is what generated code observes here.
#[inline]
pub fn trailing_zero_count_u32(value: u32) -> i32 {
    value.trailing_zeros() as i32
}

#[inline]
pub fn trailing_zero_count_i32(value: i32) -> i32 {
    value.trailing_zeros() as i32
}

/// As [`trailing_zero_count_u32`]; zero yields 64.
#[inline]
pub fn trailing_zero_count_u64(value: u64) -> i32 {
    value.trailing_zeros() as i32
}

#[inline]
pub fn trailing_zero_count_i64(value: i64) -> i32 {
    value.trailing_zeros() as i32
}

/// Reverses byte order. Self-inverse.
#[inline]
pub fn reverse_endianness_u32(value: u32) -> u32 {
    value.swap_bytes()
}

#[inline]
pub fn reverse_endianness_i32(value: i32) -> i32 {
    value.swap_bytes()
}

#[inline]
pub fn reverse_endianness_u16(value: u16) -> u16 {
    value.swap_bytes()
}

#[inline]
pub fn reverse_endianness_i16(value: i16) -> i16 {
    value.swap_bytes()
}

#[inline]
pub fn reverse_endianness_u64(value: u64) -> u64 {
    value.swap_bytes()
}

#[inline]
pub fn reverse_endianness_i64(value: i64) -> i64 {
    value.swap_bytes()
}
