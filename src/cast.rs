//! Leaf-type conversion semantics.
//!
//! [`CastFrom`] defines how a source value becomes a destination value when a
//! copy crosses types. Narrowing integers truncate (two's complement),
//! widening integers sign- or zero-extend with the source's signedness,
//! float narrowing rounds to nearest per IEEE-754 — exactly the semantics of
//! Rust's `as` casts, which the numeric impls delegate to. Same-type copies
//! are the blanket identity impl. Complex numbers convert component-wise,
//! and strings reinterpret to and from byte-sequences without validation.
//!
//! [`ZeroValue`] is the value substituted when a pointer source is null.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use num_complex::{Complex32, Complex64};

/// Conversion of a source value into the destination type.
pub trait CastFrom<S>: Sized {
    fn cast_from(src: S) -> Self;
}

/// Same-kind copies are the identity.
impl<T> CastFrom<T> for T {
    #[inline]
    fn cast_from(src: T) -> T {
        src
    }
}

macro_rules! impl_as_casts {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(src: $src) -> $dst {
                    src as $dst
                }
            }
        )+
    };
}

impl_as_casts!(isize => i8, i16, i32, i64, usize, u8, u16, u32, u64);
impl_as_casts!(i8 => isize, i16, i32, i64, usize, u8, u16, u32, u64);
impl_as_casts!(i16 => isize, i8, i32, i64, usize, u8, u16, u32, u64);
impl_as_casts!(i32 => isize, i8, i16, i64, usize, u8, u16, u32, u64);
impl_as_casts!(i64 => isize, i8, i16, i32, usize, u8, u16, u32, u64);
impl_as_casts!(usize => isize, i8, i16, i32, i64, u8, u16, u32, u64);
impl_as_casts!(u8 => isize, i8, i16, i32, i64, usize, u16, u32, u64);
impl_as_casts!(u16 => isize, i8, i16, i32, i64, usize, u8, u32, u64);
impl_as_casts!(u32 => isize, i8, i16, i32, i64, usize, u8, u16, u64);
impl_as_casts!(u64 => isize, i8, i16, i32, i64, usize, u8, u16, u32);
impl_as_casts!(f32 => f64);
impl_as_casts!(f64 => f32);

impl CastFrom<Complex32> for Complex64 {
    #[inline]
    fn cast_from(src: Complex32) -> Complex64 {
        Complex64::new(src.re as f64, src.im as f64)
    }
}

impl CastFrom<Complex64> for Complex32 {
    #[inline]
    fn cast_from(src: Complex64) -> Complex32 {
        Complex32::new(src.re as f32, src.im as f32)
    }
}

impl CastFrom<String> for Vec<u8> {
    #[inline]
    fn cast_from(src: String) -> Vec<u8> {
        src.into_bytes()
    }
}

impl CastFrom<Vec<u8>> for String {
    #[inline]
    fn cast_from(src: Vec<u8>) -> String {
        // Encoding validity is the caller's contract; no validation here.
        unsafe { String::from_utf8_unchecked(src) }
    }
}

/// The value written when a pointer source is null.
pub trait ZeroValue {
    fn zero_value() -> Self;
}

macro_rules! impl_zero_value {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroValue for $ty {
                #[inline]
                fn zero_value() -> $ty {
                    $zero
                }
            }
        )*
    };
}

impl_zero_value! {
    bool => false,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
    Complex32 => Complex32::new(0.0, 0.0),
    Complex64 => Complex64::new(0.0, 0.0),
    String => String::new(),
    Duration => Duration::ZERO,
    // SystemTime has no Default; the epoch is its zero.
    SystemTime => UNIX_EPOCH,
}

impl<T> ZeroValue for Vec<T> {
    #[inline]
    fn zero_value() -> Vec<T> {
        Vec::new()
    }
}

impl<T> ZeroValue for Option<Box<T>> {
    #[inline]
    fn zero_value() -> Option<Box<T>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_truncates() {
        assert_eq!(i32::cast_from(2147483648i64), -2147483648i32);
        assert_eq!(i8::cast_from(0x1ffi64), -1i8);
        assert_eq!(u8::cast_from(256u64), 0u8);
    }

    #[test]
    fn widening_extends_by_source_signedness() {
        assert_eq!(i64::cast_from(-1i8), -1i64);
        assert_eq!(i64::cast_from(0xffu8), 255i64);
        assert_eq!(u64::cast_from(-1i8), u64::MAX);
    }

    #[test]
    fn float_narrowing_rounds_to_nearest() {
        // 2^24 + 1 is not representable in f32; nearest is 2^24.
        assert_eq!(f32::cast_from(16_777_217.0f64), 16_777_216.0f32);
        assert_eq!(f64::cast_from(0.5f32), 0.5f64);
    }

    #[test]
    fn complex_converts_component_wise() {
        let narrow = Complex32::cast_from(Complex64::new(1.5, -2.5));
        assert_eq!(narrow, Complex32::new(1.5, -2.5));
        let wide = Complex64::cast_from(Complex32::new(0.25, 4.0));
        assert_eq!(wide, Complex64::new(0.25, 4.0));
    }

    #[test]
    fn string_and_bytes_reinterpret() {
        assert_eq!(Vec::<u8>::cast_from("abc".to_string()), b"abc".to_vec());
        assert_eq!(String::cast_from(b"abc".to_vec()), "abc");
    }

    #[test]
    fn identity_is_a_plain_move() {
        assert_eq!(String::cast_from("x".to_string()), "x");
        assert_eq!(bool::cast_from(true), true);
        assert_eq!(Duration::cast_from(Duration::from_secs(3)), Duration::from_secs(3));
    }

    #[test]
    fn zero_values() {
        assert_eq!(i64::zero_value(), 0);
        assert_eq!(String::zero_value(), "");
        assert_eq!(Vec::<u8>::zero_value(), Vec::<u8>::new());
        assert_eq!(Duration::zero_value(), Duration::ZERO);
        assert_eq!(SystemTime::zero_value(), UNIX_EPOCH);
        assert_eq!(Complex64::zero_value(), Complex64::new(0.0, 0.0));
    }
}
