use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or querying a binding table.
#[derive(Debug, Error, Diagnostic)]
pub enum BindingError {
    #[error("Unknown intrinsic binding `{symbol}`.")]
    #[diagnostic(code("BIND-001"), help("{hint}"))]
    UnknownSymbol { symbol: String, hint: String },

    #[error("Intrinsic binding `{0}` is defined more than once.")]
    #[diagnostic(
        code("BIND-002"),
        help("Each namespace, type, member and signature combination must map to exactly one binding")
    )]
    DuplicateSymbol(String),

    #[error("{} binding(s) have no runtime export: {}", .0.len(), .0.join(", "))]
    #[diagnostic(
        code("BIND-003"),
        help("Add a #[no_mangle] export with this name to ilshim-rt, or drop the binding")
    )]
    MissingExport(Vec<String>),

    #[error("Unknown binding group `{0}`.")]
    #[diagnostic(
        code("BIND-004"),
        help("Valid groups: wide, atomic, memory, bits, math, reflection, interop")
    )]
    UnknownGroup(String),
}

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;
