pub mod check;
pub mod header;
pub mod list;
pub mod show;
