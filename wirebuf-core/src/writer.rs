//! Bounds-checked write cursor over caller-owned memory.
//!
//! [`WriteCursor`] borrows a byte slice and appends values in stream
//! order from front to back. Checked operations are all-or-nothing: a
//! failed push writes nothing and leaves the cursor where it was.
//! Unchecked variants skip the bounds test for callers that have
//! already sized the destination.

use crate::error::{Error, Result};
use crate::wire::{Swappable, WireEnum};

/// Serialized size of a framed narrow string: content plus two
/// [`u32`] length fields.
#[must_use]
pub const fn serialized_str_len(s: &str) -> usize {
    s.len() + 8
}

/// Serialized size of a framed wide string: `u16` units plus two
/// [`u32`] length fields.
#[must_use]
pub const fn serialized_wide_len(units: &[u16]) -> usize {
    units.len() * 2 + 8
}

/// Forward write cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes still writable.
    #[inline(always)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true if no writable bytes remain.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the number of bytes written so far.
    #[inline(always)]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the written prefix of the underlying buffer.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Reports whether the cursor is in a degenerate state (position
    /// past the end of the buffer). Checked operations never produce
    /// this; the query exists so callers mixing in unchecked writes
    /// can audit the cursor.
    #[must_use]
    pub fn error(&self) -> bool {
        self.pos > self.buf.len()
    }

    /// Advances the cursor by up to `n` bytes without writing,
    /// clamped to the remaining capacity. Returns the actual advance.
    pub fn skip(&mut self, n: usize) -> usize {
        let n = n.min(self.remaining());
        self.pos += n;
        n
    }

    /// Appends one value in stream order.
    ///
    /// # Errors
    /// [`Error::Overflow`] if fewer than `T::WIRE_SIZE` bytes remain;
    /// nothing is written.
    #[inline]
    pub fn push<T: Swappable>(&mut self, value: T) -> Result<()> {
        let required = T::WIRE_SIZE;
        let available = self.remaining();
        if required > available {
            return Err(Error::Overflow {
                required,
                available,
            });
        }
        value.write_to(&mut self.buf[self.pos..]);
        self.pos += required;
        Ok(())
    }

    /// Appends one value in stream order without a bounds check.
    ///
    /// # Safety
    /// At least `T::WIRE_SIZE` bytes must remain.
    #[inline(always)]
    pub unsafe fn push_unchecked<T: Swappable>(&mut self, value: T) {
        unsafe {
            value.write_to_raw(self.buf.as_mut_ptr().add(self.pos));
        }
        self.pos += T::WIRE_SIZE;
    }

    /// Appends every element of `values` in stream order.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the whole span does not fit; nothing is
    /// written.
    pub fn push_slice<T: Swappable>(&mut self, values: &[T]) -> Result<()> {
        let required = values.len() * T::WIRE_SIZE;
        let available = self.remaining();
        if required > available {
            return Err(Error::Overflow {
                required,
                available,
            });
        }
        for &value in values {
            value.write_to(&mut self.buf[self.pos..]);
            self.pos += T::WIRE_SIZE;
        }
        Ok(())
    }

    /// Appends every element of `values` without a bounds check.
    ///
    /// # Safety
    /// At least `values.len() * T::WIRE_SIZE` bytes must remain.
    pub unsafe fn push_slice_unchecked<T: Swappable>(&mut self, values: &[T]) {
        for &value in values {
            unsafe {
                value.write_to_raw(self.buf.as_mut_ptr().add(self.pos));
            }
            self.pos += T::WIRE_SIZE;
        }
    }

    /// Appends as many leading elements of `values` as fit, in stream
    /// order. Returns the number of elements written.
    pub fn push_some<T: Swappable>(&mut self, values: &[T]) -> usize {
        let fit = (self.remaining() / T::WIRE_SIZE).min(values.len());
        for &value in &values[..fit] {
            value.write_to(&mut self.buf[self.pos..]);
            self.pos += T::WIRE_SIZE;
        }
        fit
    }

    /// Appends raw bytes verbatim.
    ///
    /// # Errors
    /// [`Error::Overflow`] if `bytes` does not fit; nothing is written.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let required = bytes.len();
        let available = self.remaining();
        if required > available {
            return Err(Error::Overflow {
                required,
                available,
            });
        }
        self.buf[self.pos..self.pos + required].copy_from_slice(bytes);
        self.pos += required;
        Ok(())
    }

    /// Appends a framed string: `[u32 len][content][u32 len]`.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the framed record does not fit; nothing
    /// is written.
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        let required = serialized_str_len(s);
        let available = self.remaining();
        if required > available {
            return Err(Error::Overflow {
                required,
                available,
            });
        }
        let len = s.len() as u32;
        len.write_to(&mut self.buf[self.pos..]);
        self.pos += 4;
        self.buf[self.pos..self.pos + s.len()].copy_from_slice(s.as_bytes());
        self.pos += s.len();
        len.write_to(&mut self.buf[self.pos..]);
        self.pos += 4;
        Ok(())
    }

    /// Appends a framed string without a bounds check.
    ///
    /// # Safety
    /// At least [`serialized_str_len`]`(s)` bytes must remain.
    pub unsafe fn push_str_unchecked(&mut self, s: &str) {
        let len = s.len() as u32;
        unsafe {
            self.push_unchecked(len);
            std::ptr::copy_nonoverlapping(
                s.as_ptr(),
                self.buf.as_mut_ptr().add(self.pos),
                s.len(),
            );
            self.pos += s.len();
            self.push_unchecked(len);
        }
    }

    /// Appends a framed wide string: `[u32 unit count][u16 units][u32
    /// unit count]`. The length fields record the unit count, not the
    /// byte count.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the framed record does not fit; nothing
    /// is written.
    pub fn push_wide(&mut self, units: &[u16]) -> Result<()> {
        let required = serialized_wide_len(units);
        let available = self.remaining();
        if required > available {
            return Err(Error::Overflow {
                required,
                available,
            });
        }
        let count = units.len() as u32;
        count.write_to(&mut self.buf[self.pos..]);
        self.pos += 4;
        for &unit in units {
            unit.write_to(&mut self.buf[self.pos..]);
            self.pos += 2;
        }
        count.write_to(&mut self.buf[self.pos..]);
        self.pos += 4;
        Ok(())
    }

    /// Appends a framed wide string without a bounds check.
    ///
    /// # Safety
    /// At least [`serialized_wide_len`]`(units)` bytes must remain.
    pub unsafe fn push_wide_unchecked(&mut self, units: &[u16]) {
        let count = units.len() as u32;
        unsafe {
            self.push_unchecked(count);
            self.push_slice_unchecked(units);
            self.push_unchecked(count);
        }
    }

    /// Appends an enum as its wire repr.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the repr does not fit; nothing is
    /// written.
    #[inline]
    pub fn push_enum<E: WireEnum>(&mut self, value: E) -> Result<()> {
        self.push(value.to_repr())
    }
}
