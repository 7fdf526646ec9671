//! Response types for status queries

mod memory;
mod os;
mod status;

pub use memory::*;
pub use os::*;
pub use status::*;
