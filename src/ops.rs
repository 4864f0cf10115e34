//! The four indirection variants of the copy-operation contract.
//!
//! Every registered copy function is one of these generic functions
//! monomorphized for a concrete (destination, source) pair. `dst` and `src`
//! must address initialized values laid out exactly as the registered types
//! require; pointer-side slots hold `Option<Box<T>>`, whose null-pointer
//! niche makes them readable and writable as nullable raw pointers.
//!
//! Semantics:
//!
//! - a null source pointer substitutes the destination's zero value, it
//!   never leaves the destination untouched;
//! - a non-null destination pointer is overwritten in place, so every other
//!   holder of that allocation observes the new value through the same
//!   address; only a null destination pointer allocates;
//! - destination writes are assignments, so the previous destination value
//!   is dropped, never leaked.
//!
//! Copy functions perform no synchronization; exclusive access to both
//! memory ranges for the duration of the call is the caller's duty.

use crate::cast::{CastFrom, ZeroValue};
use crate::types::memory::MemAddr;

/// A copy operation: one full value transfer between two memory locations.
pub type CopyFn = fn(dst: MemAddr, src: MemAddr);

/// Direct value to direct value.
pub fn value_to_value<D, S>(mut dst: MemAddr, src: MemAddr)
where
    D: CastFrom<S>,
    S: Clone,
{
    let v = D::cast_from(src.as_ref::<S>().clone());
    *dst.as_mut::<D>() = v;
}

/// Pointer source to direct value. Null source means zero value.
pub fn ptr_to_value<D, S>(mut dst: MemAddr, src: MemAddr)
where
    D: CastFrom<S> + ZeroValue,
    S: Clone,
{
    let v = resolve_source::<D, S>(src);
    *dst.as_mut::<D>() = v;
}

/// Direct value to pointer destination.
pub fn value_to_ptr<D, S>(mut dst: MemAddr, src: MemAddr)
where
    D: CastFrom<S>,
    S: Clone,
{
    let v = D::cast_from(src.as_ref::<S>().clone());
    store_through(&mut dst, v);
}

/// Pointer source to pointer destination.
pub fn ptr_to_ptr<D, S>(mut dst: MemAddr, src: MemAddr)
where
    D: CastFrom<S> + ZeroValue,
    S: Clone,
{
    let v = resolve_source::<D, S>(src);
    store_through(&mut dst, v);
}

fn resolve_source<D, S>(src: MemAddr) -> D
where
    D: CastFrom<S> + ZeroValue,
    S: Clone,
{
    let p = src.read::<*const S>();
    if p.is_null() {
        D::zero_value()
    } else {
        D::cast_from(unsafe { (*p).clone() })
    }
}

/// Write through a pointer slot: mutate the existing pointee in place when
/// the slot is non-null, otherwise box a fresh allocation into the slot.
fn store_through<D>(dst: &mut MemAddr, v: D) {
    let slot = dst.as_mut::<*mut D>();
    if slot.is_null() {
        *slot = Box::into_raw(Box::new(v));
    } else {
        unsafe { **slot = v };
    }
}
