//! Wire-capability traits: which types may cross the byte stream, and how.
//!
//! This module provides:
//! - [`Swappable`] for fixed-width integers that are byte-swapped into
//!   stream order
//! - [`WireEnum`] and the [`wire_enum!`](crate::wire_enum) macro for
//!   repr-backed enums with validated decoding
//! - [`Trivial`] for types copied byte-for-byte with no conversion
//!
//! Types outside these three capabilities cannot reach any encode or
//! decode entry point; the rejection happens at compile time.

use crate::error::Result;
use crate::order::ORDER_MISMATCH;
use zerocopy::{FromBytes, Immutable, IntoBytes};

/// A fixed-width value that serializes by (possibly) swapping its bytes.
///
/// Implemented for the 1/2/4/8-byte integers. Swapping is an
/// involution: `x.swap_wire_bytes().swap_wire_bytes() == x`.
pub trait Swappable: Copy + Sized {
    /// Serialized width in bytes.
    const WIRE_SIZE: usize;

    /// Reverses the byte order of the value. Identity for 1-byte types.
    #[must_use]
    fn swap_wire_bytes(self) -> Self;

    /// Converts a native value to stream order.
    #[inline(always)]
    #[must_use]
    fn to_stream(self) -> Self {
        if ORDER_MISMATCH {
            self.swap_wire_bytes()
        } else {
            self
        }
    }

    /// Converts a stream-order value to native order.
    #[inline(always)]
    #[must_use]
    fn from_stream(self) -> Self {
        if ORDER_MISMATCH {
            self.swap_wire_bytes()
        } else {
            self
        }
    }

    /// Converts a native value to little-endian order.
    #[inline(always)]
    #[must_use]
    fn to_little(self) -> Self {
        if cfg!(target_endian = "big") {
            self.swap_wire_bytes()
        } else {
            self
        }
    }

    /// Converts a native value to big-endian order.
    #[inline(always)]
    #[must_use]
    fn to_big(self) -> Self {
        if cfg!(target_endian = "little") {
            self.swap_wire_bytes()
        } else {
            self
        }
    }

    /// Writes the value in stream order at the start of `dst`.
    ///
    /// # Arguments
    /// * `dst` - Destination slice, at least [`Self::WIRE_SIZE`] bytes
    fn write_to(self, dst: &mut [u8]);

    /// Reads a stream-order value from the start of `src`.
    ///
    /// # Arguments
    /// * `src` - Source slice, at least [`Self::WIRE_SIZE`] bytes
    #[must_use]
    fn read_from(src: &[u8]) -> Self;

    /// Writes the value in stream order through a raw pointer.
    ///
    /// # Safety
    /// `dst` must be valid for writes of [`Self::WIRE_SIZE`] bytes.
    unsafe fn write_to_raw(self, dst: *mut u8);

    /// Reads a stream-order value through a raw pointer.
    ///
    /// # Safety
    /// `src` must be valid for reads of [`Self::WIRE_SIZE`] bytes.
    unsafe fn read_from_raw(src: *const u8) -> Self;
}

macro_rules! impl_swappable {
    ($($ty:ty),+ $(,)?) => {$(
        impl Swappable for $ty {
            const WIRE_SIZE: usize = size_of::<$ty>();

            #[inline(always)]
            fn swap_wire_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }

            #[inline(always)]
            fn write_to(self, dst: &mut [u8]) {
                dst[..Self::WIRE_SIZE].copy_from_slice(&self.to_le_bytes());
            }

            #[inline(always)]
            fn read_from(src: &[u8]) -> Self {
                let mut bytes = [0u8; size_of::<$ty>()];
                bytes.copy_from_slice(&src[..Self::WIRE_SIZE]);
                <$ty>::from_le_bytes(bytes)
            }

            #[inline(always)]
            unsafe fn write_to_raw(self, dst: *mut u8) {
                let bytes = self.to_le_bytes();
                unsafe {
                    std::ptr::copy_nonoverlapping(bytes.as_ptr(), dst, Self::WIRE_SIZE);
                }
            }

            #[inline(always)]
            unsafe fn read_from_raw(src: *const u8) -> Self {
                let mut bytes = [0u8; size_of::<$ty>()];
                unsafe {
                    std::ptr::copy_nonoverlapping(src, bytes.as_mut_ptr(), Self::WIRE_SIZE);
                }
                <$ty>::from_le_bytes(bytes)
            }
        }
    )+};
}

impl_swappable!(u8, i8, u16, i16, u32, i32, u64, i64);

/// A fieldless enum that travels as its integer repr.
///
/// Encoding converts to the repr and serializes it like any
/// [`Swappable`]; decoding validates the repr so a decoded value can
/// never hold a bit pattern outside the declared variants. Use the
/// [`wire_enum!`](crate::wire_enum) macro to derive an implementation.
pub trait WireEnum: Copy + Sized {
    /// Underlying integer representation.
    type Repr: Swappable;

    /// Type name reported in decode errors.
    const TYPE_NAME: &'static str;

    /// Converts the enum to its wire repr.
    #[must_use]
    fn to_repr(self) -> Self::Repr;

    /// Validates a wire repr and converts it back to the enum.
    ///
    /// # Errors
    /// [`Error::InvalidEnumValue`](crate::error::Error::InvalidEnumValue)
    /// if `raw` matches no declared variant.
    fn from_repr(raw: Self::Repr) -> Result<Self>;
}

/// Declares a fieldless wire enum and implements [`WireEnum`] for it.
///
/// ```
/// use wirebuf_core::wire_enum;
///
/// wire_enum! {
///     /// Order side.
///     pub enum Side: u8 {
///         Buy = 1,
///         Sell = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr($repr)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::wire::WireEnum for $name {
            type Repr = $repr;
            const TYPE_NAME: &'static str = stringify!($name);

            #[inline(always)]
            fn to_repr(self) -> $repr {
                self as $repr
            }

            #[inline]
            fn from_repr(raw: $repr) -> $crate::error::Result<Self> {
                match raw {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::error::Error::InvalidEnumValue {
                        type_name: Self::TYPE_NAME,
                        value: other as u64,
                    }),
                }
            }
        }
    };
}

/// A type copied byte-for-byte with no byte-order conversion.
///
/// Blanket-implemented for every type whose layout zerocopy can prove
/// free of padding, pointers, and invalid bit patterns. This is the
/// escape hatch for data already laid out in wire form; the caller
/// owns the portability of that layout.
pub trait Trivial: IntoBytes + FromBytes + Immutable + Copy {}

impl<T: IntoBytes + FromBytes + Immutable + Copy> Trivial for T {}
