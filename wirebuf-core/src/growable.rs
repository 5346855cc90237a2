//! Growable owning buffer with a logical length over zeroed storage.
//!
//! [`WireVec`] appends like [`WriteCursor`](crate::writer::WriteCursor)
//! but owns its memory and grows on demand. The logical length tracks
//! the serialized content; storage behind it is zero-initialized and
//! kept across [`clear`](WireVec::clear) so hot paths stop allocating
//! once warmed up. Appends beyond [`GROWTH_THRESHOLD`] extra bytes
//! over-reserve by half to amortize reallocation.

use crate::error::{Error, Result};
use crate::reader::ReadCursor;
use crate::wire::{Swappable, Trivial, WireEnum};
use crate::writer::{WriteCursor, serialized_str_len, serialized_wide_len};
use tracing::trace;
use zerocopy::{FromBytes, IntoBytes};

/// Extra-bytes threshold above which growth over-reserves by half.
pub const GROWTH_THRESHOLD: usize = 1024;

/// Owning growable byte buffer in stream order.
pub struct WireVec {
    len: usize,
    data: Vec<u8>,
}

impl WireVec {
    /// Creates an empty buffer with no storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: Vec::new(),
        }
    }

    /// Creates a buffer of logical length `n`, zero-filled.
    ///
    /// # Arguments
    /// * `n` - Initial logical length in bytes
    #[must_use]
    pub fn with_len(n: usize) -> Self {
        Self {
            len: n,
            data: vec![0u8; n],
        }
    }

    /// Returns the logical length in bytes.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the logical length is zero.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the usable (zero-initialized) storage size in bytes.
    /// Always at least [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the logical content as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the logical content as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Resets the logical length to zero, keeping storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Grows storage to at least `n` bytes. Logical length is
    /// unchanged; new storage is zero-filled.
    pub fn reserve(&mut self, n: usize) {
        if self.data.len() < n {
            self.data.resize(n, 0);
        }
    }

    /// Sets the logical length to `n`, growing zero-filled storage if
    /// needed. Shrinking keeps the bytes beyond `n` in storage.
    pub fn resize(&mut self, n: usize) {
        if n > self.data.len() {
            self.data.resize(n, 0);
        }
        self.len = n;
    }

    /// Expands the logical length to cover all storage. Returns the
    /// new length.
    pub fn expand_to_capacity(&mut self) -> usize {
        self.len = self.data.len();
        self.len
    }

    /// Expands the logical length by `n` bytes, growing storage under
    /// the growth policy. The exposed bytes are zero unless previously
    /// written and not cleared.
    pub fn expand_by(&mut self, n: usize) {
        self.reserve_extra(n);
        self.len += n;
    }

    /// Shrinks the logical length by up to `n` bytes, clamped.
    /// Returns the actual reduction.
    pub fn shrink_by(&mut self, n: usize) -> usize {
        let n = n.min(self.len);
        self.len -= n;
        n
    }

    /// Reports whether the buffer is in a degenerate state (logical
    /// length past storage). Safe operations never produce this.
    #[must_use]
    pub fn error(&self) -> bool {
        self.len > self.data.len()
    }

    /// Ensures storage for `extra` more bytes past the logical length.
    /// Small requirements grow exactly; requirements above
    /// [`GROWTH_THRESHOLD`] over-reserve by half.
    fn reserve_extra(&mut self, extra: usize) {
        let required = self.len + extra;
        if self.data.len() < required {
            if extra > GROWTH_THRESHOLD {
                let target = required + required / 2;
                trace!(len = self.len, required, target, "growing buffer storage");
                self.data.reserve(target - self.data.len());
            }
            self.data.resize(required, 0);
        }
    }

    /// Appends one value in stream order, growing as needed.
    #[inline]
    pub fn push<T: Swappable>(&mut self, value: T) {
        self.reserve_extra(T::WIRE_SIZE);
        value.write_to(&mut self.data[self.len..]);
        self.len += T::WIRE_SIZE;
    }

    /// Appends every element of `values` in stream order, growing as
    /// needed.
    pub fn push_slice<T: Swappable>(&mut self, values: &[T]) {
        self.reserve_extra(values.len() * T::WIRE_SIZE);
        for &value in values {
            value.write_to(&mut self.data[self.len..]);
            self.len += T::WIRE_SIZE;
        }
    }

    /// Appends a framed string `[u32 len][content][u32 len]`, growing
    /// as needed.
    pub fn push_str(&mut self, s: &str) {
        let required = serialized_str_len(s);
        self.reserve_extra(required);
        let mut cur = WriteCursor::new(&mut self.data[self.len..self.len + required]);
        // Storage for the whole record was just reserved.
        unsafe {
            cur.push_str_unchecked(s);
        }
        self.len += required;
    }

    /// Appends a framed wide string `[u32 count][u16 units][u32
    /// count]`, growing as needed.
    pub fn push_wide(&mut self, units: &[u16]) {
        let required = serialized_wide_len(units);
        self.reserve_extra(required);
        let mut cur = WriteCursor::new(&mut self.data[self.len..self.len + required]);
        // Storage for the whole record was just reserved.
        unsafe {
            cur.push_wide_unchecked(units);
        }
        self.len += required;
    }

    /// Appends an enum as its wire repr, growing as needed.
    #[inline]
    pub fn push_enum<E: WireEnum>(&mut self, value: E) {
        self.push(value.to_repr());
    }

    /// Appends a [`Trivial`] value byte-for-byte with no byte-order
    /// conversion, growing as needed.
    pub fn push_raw<T: Trivial>(&mut self, value: &T) {
        let bytes = value.as_bytes();
        self.reserve_extra(bytes.len());
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Removes and returns one value from the back.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the content is shorter than the value;
    /// the length does not change.
    pub fn pop_back<T: Swappable>(&mut self) -> Result<T> {
        let mut cur = ReadCursor::new(&self.data[..self.len]);
        let value = cur.pop_back()?;
        self.len = cur.remaining();
        Ok(value)
    }

    /// Fills `out` with values detached from the back, elements in
    /// forward order.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the content is shorter than the span;
    /// the length does not change.
    pub fn pop_back_slice<T: Swappable>(&mut self, out: &mut [T]) -> Result<()> {
        let mut cur = ReadCursor::new(&self.data[..self.len]);
        cur.pop_back_slice(out)?;
        self.len = cur.remaining();
        Ok(())
    }

    /// Removes and decodes a framed string from the back.
    ///
    /// # Errors
    /// As [`ReadCursor::pop_back_string`]; the length does not change
    /// on failure.
    pub fn pop_back_string(&mut self) -> Result<String> {
        let mut cur = ReadCursor::new(&self.data[..self.len]);
        let s = cur.pop_back_string()?;
        self.len = cur.remaining();
        Ok(s)
    }

    /// Removes and decodes a framed wide string from the back.
    ///
    /// # Errors
    /// As [`ReadCursor::pop_back_wide`]; the length does not change on
    /// failure.
    pub fn pop_back_wide(&mut self) -> Result<Vec<u16>> {
        let mut cur = ReadCursor::new(&self.data[..self.len]);
        let units = cur.pop_back_wide()?;
        self.len = cur.remaining();
        Ok(units)
    }

    /// Removes and decodes an enum from the back, validating its repr.
    ///
    /// # Errors
    /// As [`ReadCursor::pop_back_enum`]; the length does not change on
    /// failure.
    pub fn pop_back_enum<E: WireEnum>(&mut self) -> Result<E> {
        let mut cur = ReadCursor::new(&self.data[..self.len]);
        let value = cur.pop_back_enum()?;
        self.len = cur.remaining();
        Ok(value)
    }

    /// Removes and returns a [`Trivial`] value from the back,
    /// byte-for-byte with no byte-order conversion.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the content is shorter than the value;
    /// the length does not change.
    pub fn pop_back_raw<T: Trivial>(&mut self) -> Result<T> {
        let size = size_of::<T>();
        if size > self.len {
            return Err(Error::Underflow {
                required: size,
                available: self.len,
            });
        }
        let start = self.len - size;
        let value = T::read_from_bytes(&self.data[start..self.len]).map_err(|_| {
            Error::Underflow {
                required: size,
                available: self.len,
            }
        })?;
        self.len = start;
        Ok(value)
    }

    /// Detaches up to `n` bytes from the back and returns a read
    /// cursor over exactly the removed region, zero-copy. The cursor
    /// borrows the buffer, so the region stays valid until the next
    /// mutation.
    pub fn pop_back_view(&mut self, n: usize) -> ReadCursor<'_> {
        let n = self.shrink_by(n);
        ReadCursor::new(&self.data[self.len..self.len + n])
    }
}

impl Default for WireVec {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares logical length and content; storage is ignored.
impl PartialEq for WireVec {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.data[..self.len] == other.data[..other.len]
    }
}

impl Eq for WireVec {}

/// Clones only the logical content; spare storage is not carried over.
impl Clone for WireVec {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            data: self.data[..self.len].to_vec(),
        }
    }
}

impl AsRef<[u8]> for WireVec {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for WireVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WireVec")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_len_zero_filled() {
        let v = WireVec::with_len(16);
        assert_eq!(v.len(), 16);
        assert!(v.as_slice().iter().all(|&b| b == 0));
        assert!(!v.error());
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut v = WireVec::new();
        v.push(0x1234u16);
        v.push(0xDEADBEEFu32);
        assert_eq!(v.len(), 6);
        assert_eq!(v.pop_back::<u32>().unwrap(), 0xDEADBEEF);
        assert_eq!(v.pop_back::<u16>().unwrap(), 0x1234);
        assert!(v.is_empty());
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut v = WireVec::new();
        assert!(v.pop_back::<u8>().is_err());
        v.push(1u8);
        assert!(v.pop_back::<u16>().is_err());
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_small_growth_is_exact() {
        let mut v = WireVec::new();
        v.push_slice(&[0u8; 100]);
        assert_eq!(v.capacity(), 100);
        v.push(1u32);
        assert_eq!(v.capacity(), 104);
    }

    #[test]
    fn test_large_growth_over_reserves() {
        let mut v = WireVec::new();
        v.push_slice(&[7u8; 2000]);
        assert_eq!(v.len(), 2000);
        assert_eq!(v.capacity(), 2000);
        // Allocation went to 1.5x the requirement.
        assert!(v.data.capacity() >= 3000);
        assert!(v.as_slice().iter().all(|&b| b == 7));
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut v = WireVec::new();
        v.push(0xAABBu16);
        v.push_slice(&vec![0x55u8; 5000]);
        assert_eq!(&v.as_slice()[..2], &[0xBB, 0xAA]);
        assert!(v.as_slice()[2..].iter().all(|&b| b == 0x55));
    }

    #[test]
    fn test_clear_keeps_storage() {
        let mut v = WireVec::new();
        v.push_slice(&[1u8; 64]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    fn test_shrink_clamps() {
        let mut v = WireVec::with_len(10);
        assert_eq!(v.shrink_by(4), 4);
        assert_eq!(v.shrink_by(100), 6);
        assert_eq!(v.shrink_by(1), 0);
    }

    #[test]
    fn test_expand_and_resize() {
        let mut v = WireVec::new();
        v.reserve(32);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 32);
        assert_eq!(v.expand_to_capacity(), 32);
        v.resize(8);
        assert_eq!(v.len(), 8);
        v.expand_by(4);
        assert_eq!(v.len(), 12);
    }

    #[test]
    fn test_string_round_trip() {
        let mut v = WireVec::new();
        v.push_str("alpha");
        v.push_str("omega");
        assert_eq!(v.len(), 26);
        assert_eq!(v.pop_back_string().unwrap(), "omega");
        assert_eq!(v.pop_back_string().unwrap(), "alpha");
        assert!(v.is_empty());
    }

    #[test]
    fn test_wide_round_trip() {
        let units: Vec<u16> = "grün".encode_utf16().collect();
        let mut v = WireVec::new();
        v.push_wide(&units);
        assert_eq!(v.pop_back_wide().unwrap(), units);
        assert!(v.is_empty());
    }

    #[test]
    fn test_corrupted_string_leaves_length() {
        let mut v = WireVec::new();
        v.push_str("hello");
        v.as_mut_slice()[9] = 0x07;
        assert!(v.pop_back_string().is_err());
        assert_eq!(v.len(), 13);
    }

    #[test]
    fn test_pop_back_slice_forward_order() {
        let mut v = WireVec::new();
        v.push_slice(&[10u32, 20, 30]);
        let mut out = [0u32; 2];
        v.pop_back_slice(&mut out).unwrap();
        assert_eq!(out, [20, 30]);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_raw_round_trip() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[derive(zerocopy::IntoBytes, zerocopy::FromBytes, zerocopy::Immutable)]
        #[repr(C)]
        struct Pair {
            a: u32,
            b: u32,
        }

        let mut v = WireVec::new();
        v.push_raw(&Pair { a: 1, b: 2 });
        assert_eq!(v.len(), 8);
        assert_eq!(v.pop_back_raw::<Pair>().unwrap(), Pair { a: 1, b: 2 });
        assert!(v.is_empty());
    }

    #[test]
    fn test_enum_round_trip() {
        crate::wire_enum! {
            enum Mode: u32 {
                Idle = 0,
                Run = 1,
            }
        }
        let mut v = WireVec::new();
        v.push_enum(Mode::Run);
        assert_eq!(v.pop_back_enum::<Mode>().unwrap(), Mode::Run);
    }

    #[test]
    fn test_pop_back_view_zero_copy() {
        let mut v = WireVec::new();
        v.push(1u32);
        v.push(2u32);
        v.push(3u32);
        let mut view = v.pop_back_view(8);
        assert_eq!(view.pop_front::<u32>().unwrap(), 2);
        assert_eq!(view.pop_front::<u32>().unwrap(), 3);
        assert!(view.is_empty());
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_pop_back_view_clamps() {
        let mut v = WireVec::new();
        v.push(9u16);
        let view = v.pop_back_view(100);
        assert_eq!(view.remaining(), 2);
        assert!(v.is_empty());
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let mut a = WireVec::new();
        a.push_slice(&[1u8, 2, 3]);
        let mut b = WireVec::with_len(64);
        b.clear();
        b.push_slice(&[1u8, 2, 3]);
        assert_eq!(a, b);
        b.push(4u8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_copies_logical_content_only() {
        let mut v = WireVec::new();
        v.push_slice(&[0xAAu8; 8]);
        v.reserve(256);
        let c = v.clone();
        assert_eq!(c, v);
        assert_eq!(c.capacity(), 8);
        assert_eq!(v.capacity(), 256);
    }
}
