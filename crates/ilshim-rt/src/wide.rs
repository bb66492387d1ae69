//! 128-bit integer operations.
//!
//! Everything here wraps silently at the 128-bit boundary. Signed values use
//! two's complement; there is no overflow-checking variant.

/// Mask applied to shift counts, matching the managed shift operators.
const SHIFT_MASK: i32 = 127;

// --- Signed ---

#[inline]
pub fn add_i128(a: i128, b: i128) -> i128 {
    a.wrapping_add(b)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> i128 {
    a.wrapping_sub(b)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> i128 {
    a.wrapping_mul(b)
}

#[inline]
pub fn eq_i128(a: i128, b: i128) -> bool {
    a == b
}

#[inline]
pub fn lt_i128(a: i128, b: i128) -> bool {
    a < b
}

#[inline]
pub fn xor_i128(a: i128, b: i128) -> i128 {
    a ^ b
}

/// Arithmetic shift right. Only the low 7 bits of `count` are used.
#[inline]
pub fn shr_i128(a: i128, count: i32) -> i128 {
    a >> (count & SHIFT_MASK)
}

#[inline]
pub fn not_i128(a: i128) -> i128 {
    !a
}

/// Two's complement negation; `neg_i128(i128::MIN) == i128::MIN`.
#[inline]
pub fn neg_i128(a: i128) -> i128 {
    a.wrapping_neg()
}

/// Builds a signed value from its high and low 64-bit halves.
#[inline]
pub fn i128_from_halves(upper: u64, lower: u64) -> i128 {
    u128_from_halves(upper, lower) as i128
}

// --- Unsigned ---

#[inline]
pub fn add_u128(a: u128, b: u128) -> u128 {
    a.wrapping_add(b)
}

#[inline]
pub fn sub_u128(a: u128, b: u128) -> u128 {
    a.wrapping_sub(b)
}

#[inline]
pub fn mul_u128(a: u128, b: u128) -> u128 {
    a.wrapping_mul(b)
}

#[inline]
pub fn eq_u128(a: u128, b: u128) -> bool {
    a == b
}

#[inline]
pub fn lt_u128(a: u128, b: u128) -> bool {
    a < b
}

#[inline]
pub fn xor_u128(a: u128, b: u128) -> u128 {
    a ^ b
}

/// Logical shift right. Only the low 7 bits of `count` are used.
#[inline]
pub fn shr_u128(a: u128, count: i32) -> u128 {
    a >> (count & SHIFT_MASK)
}

#[inline]
pub fn not_u128(a: u128) -> u128 {
    !a
}

#[inline]
pub fn neg_u128(a: u128) -> u128 {
    a.wrapping_neg()
}

/// Builds an unsigned value with `upper` in bits 64..128 and `lower` in bits 0..64.
#[inline]
pub fn u128_from_halves(upper: u64, lower: u64) -> u128 {
    ((upper as u128) << 64) | lower as u128
}

// --- Conversions ---

/// Plain `as` casts between a primitive integer and the 128-bit types.
///
/// Narrowing truncates to the low bits, widening sign- or zero-extends by the
/// signedness of the source. Explicit and implicit conversions share this
/// path; neither validates the range.
pub trait WideCast: Copy {
    fn into_i128(self) -> i128;
    fn into_u128(self) -> u128;
    fn from_i128(value: i128) -> Self;
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_wide_cast {
    ($($t:ty),* $(,)?) => {
        $(
            impl WideCast for $t {
                #[inline]
                fn into_i128(self) -> i128 { self as i128 }
                #[inline]
                fn into_u128(self) -> u128 { self as u128 }
                #[inline]
                fn from_i128(value: i128) -> Self { value as $t }
                #[inline]
                fn from_u128(value: u128) -> Self { value as $t }
            }
        )*
    };
}

impl_wide_cast!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[inline]
pub fn int128_from<T: WideCast>(value: T) -> i128 {
    value.into_i128()
}

#[inline]
pub fn uint128_from<T: WideCast>(value: T) -> u128 {
    value.into_u128()
}

#[inline]
pub fn int128_narrow<T: WideCast>(value: i128) -> T {
    T::from_i128(value)
}

#[inline]
pub fn uint128_narrow<T: WideCast>(value: u128) -> T {
    T::from_u128(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_count_is_masked() {
        assert_eq!(shr_u128(1 << 100, 128 + 100), 1);
        assert_eq!(shr_i128(-256, 132), -16);
    }

    #[test]
    fn widening_follows_source_signedness() {
        assert_eq!(int128_from(-1i8), -1);
        assert_eq!(int128_from(u64::MAX), u64::MAX as i128);
        assert_eq!(uint128_from(-1i32), u128::MAX);
    }
}
