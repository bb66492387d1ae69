//! Native value types crossing the binding boundary, with their signature
//! abbreviations and C spellings.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abi {
    Void,
    Bool,
    /// A UTF-16 code unit.
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    ISize,
    U8,
    U16,
    U32,
    U64,
    U128,
    USize,
    F32,
    F64,
    /// Untyped native pointer.
    Ptr,
    /// NUL-terminated UTF-8 string.
    Str,
    /// NULL-terminated vector of strings.
    StrVec,
    /// The minimal type descriptor.
    TypeInfo,
}

impl Abi {
    /// The fixed-width integer types, in the order conversions are listed.
    pub const INTEGERS: [Abi; 10] = [
        Abi::I8,
        Abi::I16,
        Abi::I32,
        Abi::I64,
        Abi::ISize,
        Abi::U8,
        Abi::U16,
        Abi::U32,
        Abi::U64,
        Abi::USize,
    ];

    /// Abbreviation used in the symbol signature suffix.
    pub fn abbrev(self) -> &'static str {
        match self {
            Abi::Void => "v",
            Abi::Bool => "b",
            Abi::Char => "c",
            Abi::I8 => "i8",
            Abi::I16 => "i16",
            Abi::I32 => "i32",
            Abi::I64 => "i64",
            Abi::I128 => "i128",
            Abi::ISize => "is",
            Abi::U8 => "u8",
            Abi::U16 => "u16",
            Abi::U32 => "u32",
            Abi::U64 => "u64",
            Abi::U128 => "u128",
            Abi::USize => "us",
            Abi::F32 => "f32",
            Abi::F64 => "f64",
            Abi::Ptr => "p",
            Abi::Str => "s",
            Abi::StrVec => "a",
            Abi::TypeInfo => "t",
        }
    }

    /// The C spelling used in the exported header.
    pub fn c_type(self) -> &'static str {
        match self {
            Abi::Void => "void",
            Abi::Bool => "bool",
            Abi::Char => "uint16_t",
            Abi::I8 => "int8_t",
            Abi::I16 => "int16_t",
            Abi::I32 => "int32_t",
            Abi::I64 => "int64_t",
            Abi::I128 => "__int128",
            Abi::ISize => "intptr_t",
            Abi::U8 => "uint8_t",
            Abi::U16 => "uint16_t",
            Abi::U32 => "uint32_t",
            Abi::U64 => "uint64_t",
            Abi::U128 => "unsigned __int128",
            Abi::USize => "size_t",
            Abi::F32 => "float",
            Abi::F64 => "double",
            Abi::Ptr => "void *",
            Abi::Str => "System_String",
            Abi::StrVec => "System_String *",
            Abi::TypeInfo => "TypeInfo",
        }
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// A parameter: passed by value, or as a pointer to a managed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Value(Abi),
    Ref(Abi),
}

impl Param {
    pub fn abbrev(self) -> String {
        match self {
            Param::Value(abi) => abi.abbrev().to_string(),
            Param::Ref(abi) => format!("r{}", abi.abbrev()),
        }
    }

    pub fn c_type(self) -> String {
        match self {
            Param::Value(abi) => abi.c_type().to_string(),
            Param::Ref(abi) if abi.c_type().ends_with('*') => format!("{}*", abi.c_type()),
            Param::Ref(abi) => format!("{} *", abi.c_type()),
        }
    }
}

impl From<Abi> for Param {
    fn from(abi: Abi) -> Self {
        Param::Value(abi)
    }
}
