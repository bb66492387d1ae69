pub mod abi;
pub mod binding;
pub mod error;
pub mod header;
pub mod standard;
pub mod table;

pub use abi::{Abi, Param};
pub use binding::{Group, IntrinsicBinding, Lowering, Receiver};
pub use error::{BindingError, BindingResult};
pub use header::{HeaderOptions, HeaderWriter};
pub use table::BindingTable;
