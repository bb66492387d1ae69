//! Native runtime shim for ahead-of-time translated IL programs.
//!
//! Each module holds the Rust semantics of one group of intrinsics; [`ffi`]
//! exports them under the binding symbol names that generated code calls.

pub mod atomic;
pub mod bits;
pub mod bootstrap;
pub mod error;
pub mod ffi;
pub mod interop;
pub mod math;
pub mod memory;
pub mod reflect;
pub mod wide;

pub use bootstrap::ExecutionContext;
pub use error::{ShimError, ShimResult};
pub use memory::AlignedBlock;
pub use reflect::TypeInfo;
