use crate::wide;

// --- Int128 ---

#[no_mangle]
pub extern "C" fn System_Int128_op_Addition_i128i128(a: i128, b: i128) -> i128 {
    wide::add_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_Subtraction_i128i128(a: i128, b: i128) -> i128 {
    wide::sub_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_Multiply_i128i128(a: i128, b: i128) -> i128 {
    wide::mul_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_Equality_i128i128(a: i128, b: i128) -> bool {
    wide::eq_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_LessThan_i128i128(a: i128, b: i128) -> bool {
    wide::lt_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_ExclusiveOr_i128i128(a: i128, b: i128) -> i128 {
    wide::xor_i128(a, b)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_RightShift_i128i32(a: i128, count: i32) -> i128 {
    wide::shr_i128(a, count)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_OnesComplement_i128(a: i128) -> i128 {
    wide::not_i128(a)
}

#[no_mangle]
pub extern "C" fn System_Int128_op_UnaryNegation_i128(a: i128) -> i128 {
    wide::neg_i128(a)
}

/// Constructor from halves. Generated code assigns the returned value to the
/// instance being constructed.
#[no_mangle]
pub extern "C" fn System_Int128__ctor_mi128u64u64(upper: u64, lower: u64) -> i128 {
    wide::i128_from_halves(upper, lower)
}

// --- UInt128 ---

#[no_mangle]
pub extern "C" fn System_UInt128_op_Addition_u128u128(a: u128, b: u128) -> u128 {
    wide::add_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_Subtraction_u128u128(a: u128, b: u128) -> u128 {
    wide::sub_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_Multiply_u128u128(a: u128, b: u128) -> u128 {
    wide::mul_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_Equality_u128u128(a: u128, b: u128) -> bool {
    wide::eq_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_LessThan_u128u128(a: u128, b: u128) -> bool {
    wide::lt_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_ExclusiveOr_u128u128(a: u128, b: u128) -> u128 {
    wide::xor_u128(a, b)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_RightShift_u128i32(a: u128, count: i32) -> u128 {
    wide::shr_u128(a, count)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_OnesComplement_u128(a: u128) -> u128 {
    wide::not_u128(a)
}

#[no_mangle]
pub extern "C" fn System_UInt128_op_UnaryNegation_u128(a: u128) -> u128 {
    wide::neg_u128(a)
}

#[no_mangle]
pub extern "C" fn System_UInt128__ctor_mu128u64u64(upper: u64, lower: u64) -> u128 {
    wide::u128_from_halves(upper, lower)
}

symbol_table!(register_arithmetic => [
    System_Int128_op_Addition_i128i128,
    System_Int128_op_Subtraction_i128i128,
    System_Int128_op_Multiply_i128i128,
    System_Int128_op_Equality_i128i128,
    System_Int128_op_LessThan_i128i128,
    System_Int128_op_ExclusiveOr_i128i128,
    System_Int128_op_RightShift_i128i32,
    System_Int128_op_OnesComplement_i128,
    System_Int128_op_UnaryNegation_i128,
    System_Int128__ctor_mi128u64u64,
    System_UInt128_op_Addition_u128u128,
    System_UInt128_op_Subtraction_u128u128,
    System_UInt128_op_Multiply_u128u128,
    System_UInt128_op_Equality_u128u128,
    System_UInt128_op_LessThan_u128u128,
    System_UInt128_op_ExclusiveOr_u128u128,
    System_UInt128_op_RightShift_u128i32,
    System_UInt128_op_OnesComplement_u128,
    System_UInt128_op_UnaryNegation_u128,
    System_UInt128__ctor_mu128u64u64,
]);

// --- Conversions ---

/// Defines pass-through conversion exports and their registration function.
macro_rules! conversions {
    ($register:ident { $($name:ident: $conv:ident($arg:ty) -> $ret:ty;)* }) => {
        $(
            #[no_mangle]
            pub extern "C" fn $name(value: $arg) -> $ret {
                wide::$conv(value)
            }
        )*

        symbol_table!($register => [$($name),*]);
    };
}

conversions!(register_conversions {
    System_Int128_op_Implicit_i8: int128_from(i8) -> i128;
    System_Int128_op_Implicit_i16: int128_from(i16) -> i128;
    System_Int128_op_Implicit_i32: int128_from(i32) -> i128;
    System_Int128_op_Implicit_i64: int128_from(i64) -> i128;
    System_Int128_op_Implicit_is: int128_from(isize) -> i128;
    System_Int128_op_Implicit_u8: int128_from(u8) -> i128;
    System_Int128_op_Implicit_u16: int128_from(u16) -> i128;
    System_Int128_op_Implicit_u32: int128_from(u32) -> i128;
    System_Int128_op_Implicit_u64: int128_from(u64) -> i128;
    System_Int128_op_Implicit_us: int128_from(usize) -> i128;
    System_Int128_op_Implicit_c: int128_from(u16) -> i128;
    System_Int128_op_Explicit_u128: int128_from(u128) -> i128;

    System_Int128_op_Explicit_i128_i8: int128_narrow(i128) -> i8;
    System_Int128_op_Explicit_i128_i16: int128_narrow(i128) -> i16;
    System_Int128_op_Explicit_i128_i32: int128_narrow(i128) -> i32;
    System_Int128_op_Explicit_i128_i64: int128_narrow(i128) -> i64;
    System_Int128_op_Explicit_i128_is: int128_narrow(i128) -> isize;
    System_Int128_op_Explicit_i128_u8: int128_narrow(i128) -> u8;
    System_Int128_op_Explicit_i128_u16: int128_narrow(i128) -> u16;
    System_Int128_op_Explicit_i128_u32: int128_narrow(i128) -> u32;
    System_Int128_op_Explicit_i128_u64: int128_narrow(i128) -> u64;
    System_Int128_op_Explicit_i128_us: int128_narrow(i128) -> usize;
    System_Int128_op_Explicit_i128_u128: int128_narrow(i128) -> u128;
    System_Int128_op_Explicit_i128_c: int128_narrow(i128) -> u16;

    System_UInt128_op_Implicit_u8: uint128_from(u8) -> u128;
    System_UInt128_op_Implicit_u16: uint128_from(u16) -> u128;
    System_UInt128_op_Implicit_u32: uint128_from(u32) -> u128;
    System_UInt128_op_Implicit_u64: uint128_from(u64) -> u128;
    System_UInt128_op_Implicit_us: uint128_from(usize) -> u128;
    System_UInt128_op_Implicit_c: uint128_from(u16) -> u128;
    System_UInt128_op_Explicit_i8: uint128_from(i8) -> u128;
    System_UInt128_op_Explicit_i16: uint128_from(i16) -> u128;
    System_UInt128_op_Explicit_i32: uint128_from(i32) -> u128;
    System_UInt128_op_Explicit_i64: uint128_from(i64) -> u128;
    System_UInt128_op_Explicit_is: uint128_from(isize) -> u128;
    System_UInt128_op_Explicit_i128: uint128_from(i128) -> u128;

    System_UInt128_op_Explicit_u128_i8: uint128_narrow(u128) -> i8;
    System_UInt128_op_Explicit_u128_i16: uint128_narrow(u128) -> i16;
    System_UInt128_op_Explicit_u128_i32: uint128_narrow(u128) -> i32;
    System_UInt128_op_Explicit_u128_i64: uint128_narrow(u128) -> i64;
    System_UInt128_op_Explicit_u128_is: uint128_narrow(u128) -> isize;
    System_UInt128_op_Explicit_u128_u8: uint128_narrow(u128) -> u8;
    System_UInt128_op_Explicit_u128_u16: uint128_narrow(u128) -> u16;
    System_UInt128_op_Explicit_u128_u32: uint128_narrow(u128) -> u32;
    System_UInt128_op_Explicit_u128_u64: uint128_narrow(u128) -> u64;
    System_UInt128_op_Explicit_u128_us: uint128_narrow(u128) -> usize;
    System_UInt128_op_Explicit_u128_i128: uint128_narrow(u128) -> i128;
    System_UInt128_op_Explicit_u128_c: uint128_narrow(u128) -> u16;
});
