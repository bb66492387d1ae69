//! C-ABI exports, one per intrinsic binding.
//!
//! Symbol names follow the binding naming convention (namespace, type,
//! member, parameter signature) so generated code links against them
//! directly. The Rust semantics live in the sibling modules; everything here
//! only adapts calling conventions.

#![allow(non_snake_case)]
#![allow(improper_ctypes_definitions)]

/// An exported symbol and its address, for JIT or linker registration.
#[derive(Debug, Clone, Copy)]
pub struct ExportedSymbol {
    pub name: &'static str,
    pub address: *const u8,
}

/// Generates a registration function listing exports by name.
macro_rules! symbol_table {
    ($register:ident => [$($name:ident),* $(,)?]) => {
        pub(super) fn $register(out: &mut Vec<$crate::ffi::ExportedSymbol>) {
            $(
                out.push($crate::ffi::ExportedSymbol {
                    name: stringify!($name),
                    address: $name as *const u8,
                });
            )*
        }
    };
}

mod atomic;
mod memory;
mod numerics;
mod runtime;
mod wide;

pub use atomic::*;
pub use memory::*;
pub use numerics::*;
pub use runtime::*;
pub use wide::*;

/// Every symbol exported by the shim, including `ilshim_bootstrap`.
pub fn exported_symbols() -> Vec<ExportedSymbol> {
    let mut symbols = Vec::with_capacity(160);
    wide::register_arithmetic(&mut symbols);
    wide::register_conversions(&mut symbols);
    atomic::register(&mut symbols);
    memory::register(&mut symbols);
    numerics::register(&mut symbols);
    runtime::register(&mut symbols);
    symbols
}
