//! Runtime value-copy dispatcher.
//!
//! Given a pair of runtime type descriptors, [`CopyRegistry::get`] produces
//! a function that copies a value from one memory location to another,
//! handling primitive numeric conversions, one level of pointer indirection
//! (`Option<Box<T>>` slots), and strings/byte-sequences. When a pair is not
//! individually registered but the two types are structurally identical
//! (same kind, same type or same container element, same byte size up to
//! 255), lookup falls back to a verbatim byte-range copy.
//!
//! ```
//! use copycast::{CopyRegistry, TypeDesc};
//!
//! let reg = CopyRegistry::new();
//!
//! // Typed one-value copy: i64 narrows into i32 by truncation.
//! let mut dst: i32 = 0;
//! reg.copy(&mut dst, &300i64).unwrap();
//! assert_eq!(dst, 300);
//!
//! // Or resolve the operation once and call it on raw addresses.
//! use copycast::MemAddr;
//! let op = reg.get(&TypeDesc::of::<i32>(), &TypeDesc::of::<i64>()).unwrap();
//! op(MemAddr::of_mut(&mut dst), MemAddr::of(&-7i64));
//! assert_eq!(dst, -7);
//! ```
//!
//! Absence of a usable conversion is an expected outcome: `get` returns
//! `None`, the typed [`CopyRegistry::copy`] wraps it in
//! [`CopyError::UnsupportedPair`]. Nothing here panics on an unsupported
//! pair; undefined behavior arises only when a copy function is invoked on
//! addresses that do not hold the registered types.

mod baseline;
pub mod cast;
pub mod ops;
pub mod registry;
pub mod types;

pub use cast::{CastFrom, ZeroValue};
pub use ops::{CopyFn, ptr_to_ptr, ptr_to_value, value_to_ptr, value_to_value};
pub use registry::{CopyError, CopyRegistry, MAX_SIZE_CLASS};
pub use types::descriptor::{Describe, TypeDesc};
pub use types::kind::Kind;
pub use types::memory::MemAddr;
