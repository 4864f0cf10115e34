//! Type kind categories for copy dispatch.
//!
//! A [`Kind`] is the broad category a concrete type falls into. The dispatcher
//! compares kinds when deciding whether two unregistered types may share the
//! raw-copy fallback: different kinds never do, string kinds never do, and
//! container kinds additionally compare their element type.

use std::fmt;

/// The broad category of a concrete type.
///
/// Integer kinds carry their width and signedness in the variant itself, so
/// kind equality already implies layout-compatible integer storage. `Isize`
/// and `Usize` are the machine-word integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Isize,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Usize,
    Float32,
    Float64,
    /// Complex number with `f32` components (64 bits total).
    Complex32,
    /// Complex number with `f64` components (128 bits total).
    Complex64,
    /// Owned string (`String`). Never eligible for the raw-copy fallback.
    Str,
    /// Fixed-size array `[T; N]`.
    Array,
    /// Channel endpoint (`mpsc::Sender`/`mpsc::Receiver`).
    Chan,
    /// Hash map, element is the value type.
    Map,
    /// One-level nullable pointer (`Option<Box<T>>`).
    Ptr,
    /// Growable sequence (`Vec<T>`). Byte-sequences are `Slice` of `u8`.
    Slice,
    /// Calendar time (`std::time::SystemTime`).
    Time,
    /// Span of time (`std::time::Duration`).
    Duration,
    /// Caller type with no finer category. Fallback-eligible only against
    /// the exact same concrete type.
    Opaque,
}

impl Kind {
    /// Container kinds whose structural equivalence may rest on element
    /// identity alone: two distinct container types with the same element
    /// type are still layout-equivalent for the fallback rule.
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Kind::Array | Kind::Chan | Kind::Map | Kind::Ptr | Kind::Slice
        )
    }

    /// Get the name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Isize => "isize",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Usize => "usize",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex32 => "complex32",
            Kind::Complex64 => "complex64",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Chan => "chan",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Slice => "slice",
            Kind::Time => "time",
            Kind::Duration => "duration",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_kinds() {
        assert!(Kind::Array.is_container());
        assert!(Kind::Chan.is_container());
        assert!(Kind::Map.is_container());
        assert!(Kind::Ptr.is_container());
        assert!(Kind::Slice.is_container());
    }

    #[test]
    fn non_container_kinds() {
        assert!(!Kind::Bool.is_container());
        assert!(!Kind::Int32.is_container());
        assert!(!Kind::Str.is_container());
        assert!(!Kind::Time.is_container());
        assert!(!Kind::Opaque.is_container());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Kind::Isize.to_string(), "isize");
        assert_eq!(Kind::Complex64.to_string(), "complex64");
        assert_eq!(Kind::Str.to_string(), "string");
    }
}
