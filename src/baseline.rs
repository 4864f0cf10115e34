//! Baseline registration: the fixed table of supported leaf-kind pairs.
//!
//! Each supported pair is registered in all four indirection variants by
//! monomorphizing the generic operations in [`crate::ops`]; a macro expands
//! the pair lists instead of hand-enumerating hundreds of entries. The
//! covered pairs are the full cross product of the ten integer types, both
//! float widths, both complex widths, bool, string/byte-sequence in both
//! directions, calendar time, and duration.

use std::time::{Duration, SystemTime};

use num_complex::{Complex32, Complex64};
use rustc_hash::FxHashMap;

use crate::ops::{self, CopyFn};
use crate::registry::CopyKey;
use crate::types::descriptor::TypeDesc;

macro_rules! insert_pair {
    ($map:expr, $dst:ty, $src:ty) => {
        $map.insert(
            CopyKey {
                dest: TypeDesc::of::<$dst>(),
                src: TypeDesc::of::<$src>(),
            },
            ops::value_to_value::<$dst, $src> as CopyFn,
        );
        $map.insert(
            CopyKey {
                dest: TypeDesc::of::<$dst>(),
                src: TypeDesc::of::<Option<Box<$src>>>(),
            },
            ops::ptr_to_value::<$dst, $src> as CopyFn,
        );
        $map.insert(
            CopyKey {
                dest: TypeDesc::of::<Option<Box<$dst>>>(),
                src: TypeDesc::of::<$src>(),
            },
            ops::value_to_ptr::<$dst, $src> as CopyFn,
        );
        $map.insert(
            CopyKey {
                dest: TypeDesc::of::<Option<Box<$dst>>>(),
                src: TypeDesc::of::<Option<Box<$src>>>(),
            },
            ops::ptr_to_ptr::<$dst, $src> as CopyFn,
        );
    };
}

macro_rules! insert_group {
    ($map:expr, $src:ty => $($dst:ty),+ $(,)?) => {
        $(insert_pair!($map, $dst, $src);)+
    };
}

/// Build the baseline entry map. 115 pairs, four variants each.
pub(crate) fn baseline_funcs() -> FxHashMap<CopyKey, CopyFn> {
    let mut m = FxHashMap::default();

    // Integers: full cross product of the ten widths.
    insert_group!(m, isize => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, i8 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, i16 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, i32 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, i64 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, usize => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, u8 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, u16 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, u32 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
    insert_group!(m, u64 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);

    // Floats.
    insert_group!(m, f32 => f32, f64);
    insert_group!(m, f64 => f32, f64);

    // Complex, component-wise.
    insert_group!(m, Complex32 => Complex32, Complex64);
    insert_group!(m, Complex64 => Complex32, Complex64);

    // Bool.
    insert_group!(m, bool => bool);

    // Strings and byte-sequences, both directions.
    insert_group!(m, String => String, Vec<u8>);
    insert_group!(m, Vec<u8> => String, Vec<u8>);

    // Time values copy as-is.
    insert_group!(m, SystemTime => SystemTime);
    insert_group!(m, Duration => Duration);

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_entry_count() {
        // 100 integer + 4 float + 4 complex + 1 bool + 4 string/bytes
        // + 1 time + 1 duration pairs, four indirection variants each.
        assert_eq!(baseline_funcs().len(), 460);
    }

    #[test]
    fn all_indirection_variants_present() {
        let m = baseline_funcs();
        let v = TypeDesc::of::<i32>();
        let p = TypeDesc::of::<Option<Box<i32>>>();
        let sv = TypeDesc::of::<u8>();
        let sp = TypeDesc::of::<Option<Box<u8>>>();
        for (dest, src) in [(v, sv), (v, sp), (p, sv), (p, sp)] {
            assert!(m.contains_key(&CopyKey { dest, src }));
        }
    }

    #[test]
    fn no_cross_kind_entries() {
        let m = baseline_funcs();
        let key = CopyKey {
            dest: TypeDesc::of::<i64>(),
            src: TypeDesc::of::<f64>(),
        };
        assert!(!m.contains_key(&key));
        let key = CopyKey {
            dest: TypeDesc::of::<String>(),
            src: TypeDesc::of::<i64>(),
        };
        assert!(!m.contains_key(&key));
    }
}
