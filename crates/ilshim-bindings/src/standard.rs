//! The standard binding table: every intrinsic the runtime exports.

use crate::abi::{Abi, Param};
use crate::binding::{Group, IntrinsicBinding};

/// All standard bindings, grouped in table order.
pub fn standard_bindings() -> Vec<IntrinsicBinding> {
    let mut bindings = Vec::with_capacity(160);
    wide_arithmetic(&mut bindings);
    wide_conversions(&mut bindings);
    atomics(&mut bindings);
    memory(&mut bindings);
    bits(&mut bindings);
    math(&mut bindings);
    reflection(&mut bindings);
    interop(&mut bindings);
    bindings
}

struct WideType {
    name: &'static str,
    abi: Abi,
    c_type: &'static str,
}

const INT128: WideType = WideType { name: "Int128", abi: Abi::I128, c_type: "__int128" };
const UINT128: WideType = WideType { name: "UInt128", abi: Abi::U128, c_type: "unsigned __int128" };

fn wide(ty: &WideType, member: &'static str) -> IntrinsicBinding {
    IntrinsicBinding::new(Group::Wide, "System", ty.name, member)
}

fn wide_arithmetic(out: &mut Vec<IntrinsicBinding>) {
    for ty in [&INT128, &UINT128] {
        let signed = ty.abi == Abi::I128;
        let binary = |member, ret, template: String| {
            wide(ty, member).params([ty.abi, ty.abi]).returns(ret).inline(template)
        };
        // Signed overflow is undefined in C, so signed arithmetic goes through
        // the unsigned type.
        let wrapping = |op: &str| {
            if signed {
                format!("((__int128)((unsigned __int128)(a) {} (unsigned __int128)(b)))", op)
            } else {
                format!("((a) {} (b))", op)
            }
        };

        out.push(binary("op_Addition", ty.abi, wrapping("+")));
        out.push(binary("op_Subtraction", ty.abi, wrapping("-")));
        out.push(binary("op_Multiply", ty.abi, wrapping("*")));
        out.push(binary("op_Equality", Abi::Bool, "((a) == (b))".to_string()));
        out.push(binary("op_LessThan", Abi::Bool, "((a) < (b))".to_string()));
        out.push(binary("op_ExclusiveOr", ty.abi, "((a) ^ (b))".to_string()));
        out.push(
            wide(ty, "op_RightShift")
                .params([ty.abi, Abi::I32])
                .returns(ty.abi)
                .inline("((a) >> ((b) & 127))"),
        );
        out.push(wide(ty, "op_OnesComplement").params([ty.abi]).returns(ty.abi).inline("(~(a))"));
        let negate = if signed {
            "((__int128)(-(unsigned __int128)(a)))"
        } else {
            "(-(a))"
        };
        out.push(wide(ty, "op_UnaryNegation").params([ty.abi]).returns(ty.abi).inline(negate));

        let halves = "((((unsigned __int128)(a)) << 64) | ((unsigned __int128)(b)))";
        let ctor = if signed {
            format!("((__int128){})", halves)
        } else {
            halves.to_string()
        };
        out.push(wide(ty, ".ctor").constructs(ty.abi).params([Abi::U64, Abi::U64]).inline(ctor));
    }
}

/// Conversion operators. Conversions into a wide type overload on the
/// parameter; conversions out of one differ only by return type and carry it
/// in the symbol.
fn wide_conversions(out: &mut Vec<IntrinsicBinding>) {
    let into = |ty: &WideType, member, from: Abi| {
        wide(ty, member)
            .params([from])
            .returns(ty.abi)
            .inline(format!("(({})(a))", ty.c_type))
    };
    let out_of = |ty: &WideType, to: Abi| {
        wide(ty, "op_Explicit")
            .params([ty.abi])
            .returns(to)
            .named_by_return()
            .inline(format!("(({})(a))", to.c_type()))
    };
    let narrow_targets = |other: Abi| Abi::INTEGERS.into_iter().chain([other, Abi::Char]);

    for from in Abi::INTEGERS.into_iter().chain([Abi::Char]) {
        out.push(into(&INT128, "op_Implicit", from));
    }
    out.push(into(&INT128, "op_Explicit", Abi::U128));
    for to in narrow_targets(Abi::U128) {
        out.push(out_of(&INT128, to));
    }

    for from in [Abi::U8, Abi::U16, Abi::U32, Abi::U64, Abi::USize, Abi::Char] {
        out.push(into(&UINT128, "op_Implicit", from));
    }
    for from in [Abi::I8, Abi::I16, Abi::I32, Abi::I64, Abi::ISize, Abi::I128] {
        out.push(into(&UINT128, "op_Explicit", from));
    }
    for to in narrow_targets(Abi::I128) {
        out.push(out_of(&UINT128, to));
    }
}

fn atomics(out: &mut Vec<IntrinsicBinding>) {
    let interlocked = |member| IntrinsicBinding::new(Group::Atomic, "System.Threading", "Interlocked", member);
    for word in [Abi::I32, Abi::I64, Abi::U32, Abi::U64, Abi::ISize, Abi::USize, Abi::Ptr] {
        out.push(
            interlocked("CompareExchange")
                .params([Param::Ref(word), Param::Value(word), Param::Value(word)])
                .returns(word),
        );
        out.push(
            interlocked("Exchange")
                .params([Param::Ref(word), Param::Value(word)])
                .returns(word),
        );
    }
}

fn memory(out: &mut Vec<IntrinsicBinding>) {
    let native = |member| IntrinsicBinding::new(Group::Memory, "System.Runtime.InteropServices", "NativeMemory", member);
    out.push(native("AlignedAlloc").params([Abi::USize, Abi::USize]).returns(Abi::Ptr));
    out.push(native("AlignedFree").params([Abi::Ptr]));
    out.push(native("AlignedRealloc").params([Abi::Ptr, Abi::USize, Abi::USize]).returns(Abi::Ptr));
}

fn bits(out: &mut Vec<IntrinsicBinding>) {
    let ops = |member| IntrinsicBinding::new(Group::Bits, "System.Numerics", "BitOperations", member);
    out.push(ops("PopCount").params([Abi::U32]).returns(Abi::I32).inline("__builtin_popcount(a)"));
    out.push(ops("PopCount").params([Abi::U64]).returns(Abi::I32).inline("__builtin_popcountll(a)"));
    // No inline form: the builtin is undefined for zero.
    for operand in [Abi::U32, Abi::I32, Abi::U64, Abi::I64] {
        out.push(ops("TrailingZeroCount").params([operand]).returns(Abi::I32));
    }

    let swap = |operand, template| {
        IntrinsicBinding::new(Group::Bits, "System.Buffers.Binary", "BinaryPrimitives", "ReverseEndianness")
            .params([operand])
            .returns(operand)
            .inline(template)
    };
    out.push(swap(Abi::U32, "__builtin_bswap32(a)"));
    out.push(swap(Abi::I32, "((int32_t)__builtin_bswap32((uint32_t)(a)))"));
    out.push(swap(Abi::U16, "__builtin_bswap16(a)"));
    out.push(swap(Abi::I16, "((int16_t)__builtin_bswap16((uint16_t)(a)))"));
    out.push(swap(Abi::U64, "__builtin_bswap64(a)"));
    out.push(swap(Abi::I64, "((int64_t)__builtin_bswap64((uint64_t)(a)))"));
}

fn math(out: &mut Vec<IntrinsicBinding>) {
    let system = |ty, member| IntrinsicBinding::new(Group::Math, "System", ty, member);
    out.push(system("MathF", "Sqrt").params([Abi::F32]).returns(Abi::F32).inline("sqrtf(a)"));
    out.push(system("Math", "Sqrt").params([Abi::F64]).returns(Abi::F64).inline("sqrt(a)"));
    out.push(system("Single", "IsNaN").params([Abi::F32]).returns(Abi::Bool).inline("isnan(a)"));
    out.push(system("Double", "IsNaN").params([Abi::F64]).returns(Abi::Bool).inline("isnan(a)"));
}

fn reflection(out: &mut Vec<IntrinsicBinding>) {
    let assembly = |member| IntrinsicBinding::new(Group::Reflection, "System.Reflection", "Assembly", member);
    out.push(assembly("GetEntryAssembly").returns(Abi::Str));
    out.push(assembly("get_Location").params([Abi::Str]).returns(Abi::Str).inline("(a)"));

    let system = |ty, member| IntrinsicBinding::new(Group::Reflection, "System", ty, member);
    out.push(system("Environment", "GetCommandLineArgs").returns(Abi::StrVec));
    out.push(
        system("Type", "GetTypeFromHandle")
            .params([Abi::TypeInfo])
            .returns(Abi::TypeInfo)
            .inline("(a)"),
    );
    out.push(
        system("Object", "GetHashCode")
            .params([Abi::TypeInfo])
            .returns(Abi::I32)
            .inline("((a).hash)"),
    );
}

fn interop(out: &mut Vec<IntrinsicBinding>) {
    let system = |ty, member| IntrinsicBinding::new(Group::Interop, "System", ty, member);
    out.push(system("String", "get_Length").params([Abi::Str]).returns(Abi::I32));
    out.push(
        IntrinsicBinding::new(Group::Interop, "System.Runtime.InteropServices", "Marshal", "StringToCoTaskMemUTF8")
            .params([Abi::Str])
            .returns(Abi::Str)
            .inline("(a)"),
    );
    out.push(system("Console", "Write").params([Abi::Char]).returns(Abi::I32));
    out.push(system("Console", "WriteLine").params([Abi::U32]));
    out.push(system("UIntPtr", "get_MinValue").returns(Abi::USize).inline("((size_t)0)"));
    out.push(system("UIntPtr", "get_MaxValue").returns(Abi::USize).inline("(~((size_t)0))"));
}
