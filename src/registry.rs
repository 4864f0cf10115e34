//! The copy-function registry and its dispatch algorithm.
//!
//! [`CopyRegistry`] maps an ordered (destination, source) descriptor pair to
//! a [`CopyFn`]. Lookup is a two-step decision: an exact registered entry
//! always wins; failing that, a structural-equivalence rule may hand out one
//! of the 255 size-class raw copies. Registration is an unconditional
//! overwrite with no validation of the function's behavior.
//!
//! The registry is an explicit shared object: create one with
//! [`CopyRegistry::new`] and hand it to whoever dispatches copies (wrap it
//! in `Arc` across threads). Reads take a shared lock, writes an exclusive
//! one; the size-class table is immutable and unlocked.

use std::sync::RwLock;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::baseline;
use crate::ops::CopyFn;
use crate::types::descriptor::{Describe, TypeDesc};
use crate::types::kind::Kind;
use crate::types::memory::MemAddr;

/// Largest byte size served by the raw-copy fallback.
pub const MAX_SIZE_CLASS: usize = 255;

/// Ordered lookup key: destination type, then source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CopyKey {
    pub(crate) dest: TypeDesc,
    pub(crate) src: TypeDesc,
}

/// Failure of the typed convenience API. Absence of a conversion is an
/// expected outcome, carried as data rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("no copy function for {src} -> {dest}")]
    UnsupportedPair { dest: TypeDesc, src: TypeDesc },
}

/// Concurrency-safe store of copy functions, keyed by type pair.
pub struct CopyRegistry {
    funcs: RwLock<FxHashMap<CopyKey, CopyFn>>,
}

impl CopyRegistry {
    /// A registry pre-populated with the baseline: every supported leaf-kind
    /// pair in all four indirection variants.
    pub fn new() -> Self {
        CopyRegistry {
            funcs: RwLock::new(baseline::baseline_funcs()),
        }
    }

    /// Look up the copy function for a pair of types.
    ///
    /// An exact registered entry always takes priority. Otherwise the
    /// structural fallback applies when both sides have the same kind (never
    /// for strings), are the same type or same-element containers, and share
    /// a byte size in `1..=MAX_SIZE_CLASS`; the returned function is then a
    /// verbatim byte-range copy of that size.
    pub fn get(&self, dest: &TypeDesc, src: &TypeDesc) -> Option<CopyFn> {
        let key = CopyKey {
            dest: *dest,
            src: *src,
        };
        if let Some(f) = self.funcs.read().expect("RwLock poisoned").get(&key) {
            return Some(*f);
        }

        if dest.kind() != src.kind() {
            return None;
        }

        // String pairs are never eligible for the structural fallback.
        if dest.kind() == Kind::Str {
            return None;
        }

        let mut same = dest == src;
        if dest.kind().is_container() {
            same = same || (dest.elem().is_some() && dest.elem() == src.elem());
        }

        if same && dest.size() == src.size() && src.size() > 0 && src.size() <= MAX_SIZE_CLASS {
            return Some(SIZE_CLASSES[src.size() - 1]);
        }

        None
    }

    /// Register or overwrite the copy function for a pair of types.
    ///
    /// No validation is performed; the function must honor the
    /// copy-operation contract for the pair it is registered under.
    pub fn set(&self, dest: TypeDesc, src: TypeDesc, f: CopyFn) {
        self.funcs
            .write()
            .expect("RwLock poisoned")
            .insert(CopyKey { dest, src }, f);
    }

    /// Copy one value through the registry, looked up by the static types.
    ///
    /// Destination types that own heap state (`needs_drop`) are only served
    /// by exact registrations: a raw byte copy would alias their allocation,
    /// so the structural fallback is withheld and the pair reported
    /// unsupported instead.
    pub fn copy<D, S>(&self, dst: &mut D, src: &S) -> Result<(), CopyError>
    where
        D: Describe,
        S: Describe,
    {
        let dest = TypeDesc::of::<D>();
        let from = TypeDesc::of::<S>();
        let f = if std::mem::needs_drop::<D>() {
            self.get_exact(&dest, &from)
        } else {
            self.get(&dest, &from)
        };
        let f = f.ok_or(CopyError::UnsupportedPair { dest, src: from })?;
        f(MemAddr::of_mut(dst), MemAddr::of(src));
        Ok(())
    }

    fn get_exact(&self, dest: &TypeDesc, src: &TypeDesc) -> Option<CopyFn> {
        let key = CopyKey {
            dest: *dest,
            src: *src,
        };
        self.funcs.read().expect("RwLock poisoned").get(&key).copied()
    }
}

impl Default for CopyRegistry {
    fn default() -> Self {
        CopyRegistry::new()
    }
}

/// Fixed-width byte-range copy of `N` bytes, no interpretation of content.
fn raw_copy<const N: usize>(mut dst: MemAddr, src: MemAddr) {
    *dst.as_mut::<[u8; N]>() = *src.as_ref::<[u8; N]>();
}

macro_rules! size_class_table {
    ($($n:literal)+) => {
        [$(raw_copy::<$n> as CopyFn),+]
    };
}

/// One raw-copy function per byte size from 1 to 255. Built once, immutable
/// for the process lifetime, shared by every registry.
static SIZE_CLASSES: [CopyFn; MAX_SIZE_CLASS] = size_class_table!(
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
    65 66 67 68 69 70 71 72 73 74 75 76 77 78 79 80 81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96
    97 98 99 100 101 102 103 104 105 106 107 108 109 110 111 112 113 114 115 116 117 118 119 120 121 122 123 124 125 126 127 128
    129 130 131 132 133 134 135 136 137 138 139 140 141 142 143 144 145 146 147 148 149 150 151 152 153 154 155 156 157 158 159 160
    161 162 163 164 165 166 167 168 169 170 171 172 173 174 175 176 177 178 179 180 181 182 183 184 185 186 187 188 189 190 191 192
    193 194 195 196 197 198 199 200 201 202 203 204 205 206 207 208 209 210 211 212 213 214 215 216 217 218 219 220 221 222 223 224
    225 226 227 228 229 230 231 232 233 234 235 236 237 238 239 240 241 242 243 244 245 246 247 248 249 250 251 252 253 254 255
);
