//! Runtime type descriptors.
//!
//! A [`TypeDesc`] identifies one concrete Rust type: its nominal identity
//! (`TypeId`), its [`Kind`], its element type for container kinds, and its
//! byte size. Descriptors are the lookup key of the copy registry.
//!
//! # Identity vs. metadata
//!
//! Two descriptors are equal iff they denote the same concrete type, so
//! equality and hashing go through `TypeId` alone. Kind, element, and size
//! are metadata the dispatcher consults for the structural fallback rule;
//! the type name is diagnostic only.
//!
//! # Construction
//!
//! Types with a [`Describe`] impl (all baseline leaf types, plus the generic
//! container shapes) go through [`TypeDesc::of`]. Anything else uses
//! [`TypeDesc::describe_as`], the thin adapter between native type
//! information and a descriptor:
//!
//! ```
//! use copycast::{Kind, TypeDesc};
//!
//! struct Header([u8; 16]);
//!
//! let desc = TypeDesc::describe_as::<Header>(Kind::Array, Some(std::any::TypeId::of::<u8>()));
//! assert_eq!(desc.size(), 16);
//! ```

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use num_complex::{Complex32, Complex64};

use crate::types::kind::Kind;

/// Runtime descriptor for one concrete type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDesc {
    id: TypeId,
    kind: Kind,
    elem: Option<TypeId>,
    size: usize,
    name: &'static str,
}

impl TypeDesc {
    /// Descriptor of a type with a [`Describe`] impl.
    pub fn of<T: Describe>() -> Self {
        T::describe()
    }

    /// Descriptor of an arbitrary type under an explicit kind and element.
    ///
    /// Identity, size, and name are taken from `T`; the caller supplies the
    /// category and, for container kinds, the element type.
    pub fn describe_as<T: 'static>(kind: Kind, elem: Option<TypeId>) -> Self {
        TypeDesc {
            id: TypeId::of::<T>(),
            kind,
            elem,
            size: std::mem::size_of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Element type for container kinds, `None` otherwise.
    pub fn elem(&self) -> Option<TypeId> {
        self.elem
    }

    /// Byte size of the described type.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Diagnostic type name. Not part of identity.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Types that can produce their own [`TypeDesc`].
pub trait Describe: 'static {
    fn describe() -> TypeDesc;
}

macro_rules! impl_describe_leaf {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDesc {
                    TypeDesc::describe_as::<$ty>($kind, None)
                }
            }
        )*
    };
}

impl_describe_leaf! {
    bool => Kind::Bool,
    i8 => Kind::Int8,
    i16 => Kind::Int16,
    i32 => Kind::Int32,
    i64 => Kind::Int64,
    isize => Kind::Isize,
    u8 => Kind::Uint8,
    u16 => Kind::Uint16,
    u32 => Kind::Uint32,
    u64 => Kind::Uint64,
    usize => Kind::Usize,
    f32 => Kind::Float32,
    f64 => Kind::Float64,
    Complex32 => Kind::Complex32,
    Complex64 => Kind::Complex64,
    String => Kind::Str,
    SystemTime => Kind::Time,
    Duration => Kind::Duration,
}

/// One-level nullable pointer. The null-pointer niche guarantees this slot
/// has the layout of a nullable `*mut T`.
impl<T: 'static> Describe for Option<Box<T>> {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<Option<Box<T>>>(Kind::Ptr, Some(TypeId::of::<T>()))
    }
}

impl<T: 'static, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<[T; N]>(Kind::Array, Some(TypeId::of::<T>()))
    }
}

impl<T: 'static> Describe for Vec<T> {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<Vec<T>>(Kind::Slice, Some(TypeId::of::<T>()))
    }
}

/// Maps are keyed containers; the element of the descriptor is the value type.
impl<K: 'static, V: 'static> Describe for HashMap<K, V> {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<HashMap<K, V>>(Kind::Map, Some(TypeId::of::<V>()))
    }
}

impl<T: 'static> Describe for mpsc::Sender<T> {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<mpsc::Sender<T>>(Kind::Chan, Some(TypeId::of::<T>()))
    }
}

impl<T: 'static> Describe for mpsc::Receiver<T> {
    fn describe() -> TypeDesc {
        TypeDesc::describe_as::<mpsc::Receiver<T>>(Kind::Chan, Some(TypeId::of::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_nominal() {
        assert_eq!(TypeDesc::of::<i32>(), TypeDesc::of::<i32>());
        assert_ne!(TypeDesc::of::<i32>(), TypeDesc::of::<u32>());
        // Same layout, different types.
        assert_ne!(TypeDesc::of::<[u8; 4]>(), TypeDesc::of::<u32>());
    }

    #[test]
    fn leaf_metadata() {
        let desc = TypeDesc::of::<i64>();
        assert_eq!(desc.kind(), Kind::Int64);
        assert_eq!(desc.elem(), None);
        assert_eq!(desc.size(), 8);
    }

    #[test]
    fn pointer_descriptor() {
        let desc = TypeDesc::of::<Option<Box<i32>>>();
        assert_eq!(desc.kind(), Kind::Ptr);
        assert_eq!(desc.elem(), Some(TypeId::of::<i32>()));
        assert_eq!(desc.size(), std::mem::size_of::<*mut i32>());
    }

    #[test]
    fn byte_sequence_is_slice_of_u8() {
        let desc = TypeDesc::of::<Vec<u8>>();
        assert_eq!(desc.kind(), Kind::Slice);
        assert_eq!(desc.elem(), Some(TypeId::of::<u8>()));
    }

    #[test]
    fn array_descriptor() {
        let desc = TypeDesc::of::<[u16; 8]>();
        assert_eq!(desc.kind(), Kind::Array);
        assert_eq!(desc.elem(), Some(TypeId::of::<u16>()));
        assert_eq!(desc.size(), 16);
    }

    #[test]
    fn map_element_is_value_type() {
        let desc = TypeDesc::of::<HashMap<String, i64>>();
        assert_eq!(desc.kind(), Kind::Map);
        assert_eq!(desc.elem(), Some(TypeId::of::<i64>()));
    }

    #[test]
    fn adapter_descriptor() {
        struct Header([u8; 16]);
        let desc = TypeDesc::describe_as::<Header>(Kind::Array, Some(TypeId::of::<u8>()));
        assert_eq!(desc.kind(), Kind::Array);
        assert_eq!(desc.size(), 16);
        assert_eq!(desc, desc);
        assert_ne!(desc, TypeDesc::of::<[u8; 16]>());
    }
}
