use ilshim_bindings::{Abi, BindingError, BindingTable, Group, HeaderOptions, HeaderWriter, Lowering, Param};
use ilshim_rt::ffi::exported_symbols;
use std::collections::HashSet;

fn table() -> BindingTable {
    BindingTable::standard().expect("standard table has unique symbols")
}

#[test]
fn naming_convention_examples() {
    let table = table();
    for symbol in [
        "System_Int128_op_Addition_i128i128",
        "System_UInt128__ctor_mu128u64u64",
        "System_Threading_Interlocked_CompareExchange_ri32i32i32",
        "System_Int128_op_Explicit_i128_i64",
        "System_Reflection_Assembly_GetEntryAssembly_",
        "System_Threading_Interlocked_Exchange_rpp",
        "System_UInt128_op_Implicit_c",
    ] {
        assert!(table.get(symbol).is_some(), "missing binding {symbol}");
    }
}

#[test]
fn every_binding_has_a_runtime_export() {
    let exports = exported_symbols();
    table()
        .verify_exports(exports.iter().map(|symbol| symbol.name))
        .expect("all bindings exported");
}

#[test]
fn every_runtime_export_is_bound() {
    let table = table();
    let unbound: Vec<_> = exported_symbols()
        .into_iter()
        .map(|symbol| symbol.name)
        .filter(|name| !name.starts_with("ilshim_"))
        .filter(|name| table.get(name).is_none())
        .collect();
    assert!(unbound.is_empty(), "exports without a binding: {unbound:?}");
}

#[test]
fn symbols_are_unique_and_groups_cover_the_table() {
    let table = table();
    let symbols: HashSet<_> = table.iter().map(|binding| binding.symbol()).collect();
    assert_eq!(symbols.len(), table.len());

    let grouped: usize = Group::ALL.into_iter().map(|group| table.by_group(group).count()).sum();
    assert_eq!(grouped, table.len());
    assert!(Group::ALL.into_iter().all(|group| table.by_group(group).next().is_some()));
}

#[test]
fn find_by_managed_shape() {
    let table = table();
    let cas = table
        .find(
            "System.Threading",
            "Interlocked",
            "CompareExchange",
            &[Param::Ref(Abi::I64), Param::Value(Abi::I64), Param::Value(Abi::I64)],
            Abi::I64,
        )
        .expect("i64 compare exchange");
    assert_eq!(cas.symbol(), "System_Threading_Interlocked_CompareExchange_ri64i64i64");
    assert_eq!(cas.lowering(true), Lowering::Call);

    let narrowing = table
        .find("System", "UInt128", "op_Explicit", &[Param::Value(Abi::U128)], Abi::U16)
        .expect("u128 to u16");
    assert_eq!(narrowing.symbol(), "System_UInt128_op_Explicit_u128_u16");
}

#[test]
fn resolve_unknown_symbol_suggests_overloads() {
    let err = table().resolve("System_Math_Sqrt_f32").unwrap_err();
    match err {
        BindingError::UnknownSymbol { symbol, hint } => {
            assert_eq!(symbol, "System_Math_Sqrt_f32");
            assert!(hint.contains("System_Math_Sqrt_f64"), "hint was {hint}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn trailing_zero_count_is_never_inlined() {
    let table = table();
    for binding in table.iter().filter(|binding| binding.member == "TrailingZeroCount") {
        assert_eq!(binding.lowering(true), Lowering::Call, "{}", binding.symbol());
    }
}

#[test]
fn header_contains_macros_and_prototypes() {
    let table = table();
    let options = HeaderOptions::default();
    let header = HeaderWriter::new(&table, &options).to_string();

    assert!(header.starts_with("#ifndef ILSHIM_H\n#define ILSHIM_H\n"));
    assert!(header.contains("#include <stdint.h>"));
    assert!(header.contains("typedef struct TypeInfo { int32_t hash; } TypeInfo;"));
    assert!(header.contains("int ilshim_bootstrap(int argc, char **argv);"));
    assert!(header.contains("#define System_UInt128_op_RightShift_u128i32(a, b) ((a) >> ((b) & 127))"));
    assert!(header.contains("#define System_UIntPtr_get_MaxValue_() (~((size_t)0))"));
    assert!(header.contains(
        "extern int32_t System_Threading_Interlocked_CompareExchange_ri32i32i32(int32_t *a, int32_t b, int32_t c);"
    ));
    assert!(header.contains("extern void * System_Threading_Interlocked_Exchange_rpp(void **a, void *b);"));
    assert!(header.contains("extern System_String * System_Environment_GetCommandLineArgs_(void);"));
    assert!(header.trim_end().ends_with("#endif /* ILSHIM_H */"));
}

#[test]
fn header_without_inlining_declares_everything() {
    let table = table();
    let options = HeaderOptions {
        prefer_inline: false,
        groups: Some(vec![Group::Math]),
        ..HeaderOptions::default()
    };
    let header = HeaderWriter::new(&table, &options).to_string();

    assert!(!header.contains("#define System_"));
    assert!(header.contains("extern float System_MathF_Sqrt_f32(float a);"));
    assert!(header.contains("extern bool System_Double_IsNaN_f64(double a);"));
    assert!(!header.contains("Interlocked"));
}
