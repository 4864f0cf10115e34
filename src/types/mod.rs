//! The type-system surface of the dispatcher: kinds, descriptors, and the
//! untyped memory location copy functions operate on.

pub mod descriptor;
pub mod kind;
pub mod memory;

pub use descriptor::{Describe, TypeDesc};
pub use kind::Kind;
pub use memory::MemAddr;
