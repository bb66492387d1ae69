use std::ffi::NulError;
use thiserror::Error;

/// Errors surfaced by the Rust-facing shim API.
///
/// The arithmetic, atomic and bit primitives never fail; only allocation,
/// bootstrap and console output can produce one of these.
#[derive(Error, Debug)]
pub enum ShimError {
    #[error("Operation `{0}` is not supported by the native shim.")]
    Unsupported(&'static str),

    #[error("Invalid allocation layout: size {size}, alignment {align}.")]
    InvalidLayout { size: usize, align: usize },

    #[error("Allocation of {size} bytes aligned to {align} failed.")]
    AllocationFailed { size: usize, align: usize },

    #[error("Process execution context was already initialized.")]
    AlreadyInitialized,

    #[error("Process execution context has not been initialized.")]
    NotInitialized,

    #[error("Bootstrap string contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible shim operations.
pub type ShimResult<T> = Result<T, ShimError>;
