//! Bounds-checked read cursor over borrowed bytes.
//!
//! [`ReadCursor`] keeps two cursors over one slice: a head that
//! advances on front reads and a tail that retreats on back reads.
//! The unread region is always the interval between them. Checked
//! operations are all-or-nothing: a failed pop moves neither cursor,
//! including the multi-field framed-string decode.

use crate::error::{Error, Result};
use crate::wire::{Swappable, WireEnum};

/// Dual-cursor read view over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    head: usize,
    tail: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor spanning all of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            head: 0,
            tail: buf.len(),
        }
    }

    /// Returns the number of unread bytes.
    #[inline(always)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tail - self.head
    }

    /// Returns true if no unread bytes remain.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the unread region as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.buf[self.head..self.tail]
    }

    /// Reports whether the cursor is in a degenerate state (head past
    /// tail). Checked operations never produce this; the query exists
    /// so callers mixing in unchecked reads can audit the cursor.
    #[must_use]
    pub fn error(&self) -> bool {
        self.head > self.tail
    }

    /// Advances the head by up to `n` bytes, clamped to the unread
    /// region. Returns the actual advance.
    pub fn skip_front(&mut self, n: usize) -> usize {
        let n = n.min(self.remaining());
        self.head += n;
        n
    }

    /// Retreats the tail by up to `n` bytes, clamped to the unread
    /// region. Returns the actual retreat.
    pub fn skip_back(&mut self, n: usize) -> usize {
        let n = n.min(self.remaining());
        self.tail -= n;
        n
    }

    fn underflow(&self, required: usize) -> Error {
        Error::Underflow {
            required,
            available: self.remaining(),
        }
    }

    /// Reads one value from the front.
    ///
    /// # Errors
    /// [`Error::Underflow`] if fewer than `T::WIRE_SIZE` bytes remain;
    /// the cursor does not move.
    #[inline]
    pub fn pop_front<T: Swappable>(&mut self) -> Result<T> {
        if T::WIRE_SIZE > self.remaining() {
            return Err(self.underflow(T::WIRE_SIZE));
        }
        let value = T::read_from(&self.buf[self.head..]);
        self.head += T::WIRE_SIZE;
        Ok(value)
    }

    /// Reads one value from the back.
    ///
    /// # Errors
    /// [`Error::Underflow`] if fewer than `T::WIRE_SIZE` bytes remain;
    /// the cursor does not move.
    #[inline]
    pub fn pop_back<T: Swappable>(&mut self) -> Result<T> {
        if T::WIRE_SIZE > self.remaining() {
            return Err(self.underflow(T::WIRE_SIZE));
        }
        self.tail -= T::WIRE_SIZE;
        Ok(T::read_from(&self.buf[self.tail..]))
    }

    /// Reads one value from the front without a bounds check.
    ///
    /// # Safety
    /// At least `T::WIRE_SIZE` unread bytes must remain.
    #[inline(always)]
    pub unsafe fn pop_front_unchecked<T: Swappable>(&mut self) -> T {
        let value = unsafe { T::read_from_raw(self.buf.as_ptr().add(self.head)) };
        self.head += T::WIRE_SIZE;
        value
    }

    /// Reads one value from the back without a bounds check.
    ///
    /// # Safety
    /// At least `T::WIRE_SIZE` unread bytes must remain.
    #[inline(always)]
    pub unsafe fn pop_back_unchecked<T: Swappable>(&mut self) -> T {
        self.tail -= T::WIRE_SIZE;
        unsafe { T::read_from_raw(self.buf.as_ptr().add(self.tail)) }
    }

    /// Fills `out` with values read from the front.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the whole span does not fit in the
    /// unread region; the cursor does not move.
    pub fn pop_front_slice<T: Swappable>(&mut self, out: &mut [T]) -> Result<()> {
        let required = out.len() * T::WIRE_SIZE;
        if required > self.remaining() {
            return Err(self.underflow(required));
        }
        for slot in out {
            *slot = T::read_from(&self.buf[self.head..]);
            self.head += T::WIRE_SIZE;
        }
        Ok(())
    }

    /// Fills `out` with values taken from the back of the unread
    /// region. The span is detached as a block and its elements are
    /// read in forward order, so writing `[a, b]` and popping a
    /// two-element span from the back yields `[a, b]`.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the whole span does not fit in the
    /// unread region; the cursor does not move.
    pub fn pop_back_slice<T: Swappable>(&mut self, out: &mut [T]) -> Result<()> {
        let required = out.len() * T::WIRE_SIZE;
        if required > self.remaining() {
            return Err(self.underflow(required));
        }
        self.tail -= required;
        let mut at = self.tail;
        for slot in out {
            *slot = T::read_from(&self.buf[at..]);
            at += T::WIRE_SIZE;
        }
        Ok(())
    }

    /// Fills `out` from the front without a bounds check.
    ///
    /// # Safety
    /// At least `out.len() * T::WIRE_SIZE` unread bytes must remain.
    pub unsafe fn pop_front_slice_unchecked<T: Swappable>(&mut self, out: &mut [T]) {
        for slot in out {
            *slot = unsafe { T::read_from_raw(self.buf.as_ptr().add(self.head)) };
            self.head += T::WIRE_SIZE;
        }
    }

    /// Fills `out` from the back without a bounds check. Elements are
    /// read in forward order, as [`pop_back_slice`](Self::pop_back_slice).
    ///
    /// # Safety
    /// At least `out.len() * T::WIRE_SIZE` unread bytes must remain.
    pub unsafe fn pop_back_slice_unchecked<T: Swappable>(&mut self, out: &mut [T]) {
        self.tail -= out.len() * T::WIRE_SIZE;
        let mut at = self.tail;
        for slot in out {
            *slot = unsafe { T::read_from_raw(self.buf.as_ptr().add(at)) };
            at += T::WIRE_SIZE;
        }
    }

    /// Detaches `len` raw bytes from the front, zero-copy.
    ///
    /// # Errors
    /// [`Error::Underflow`] if fewer than `len` bytes remain; the
    /// cursor does not move.
    pub fn pop_front_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(self.underflow(len));
        }
        let bytes = &self.buf[self.head..self.head + len];
        self.head += len;
        Ok(bytes)
    }

    /// Decodes a framed string `[u32 len][content][u32 len]` from the
    /// front. All-or-nothing: on any failure the cursor stays exactly
    /// where it was; on success it advances past the whole record.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the record is not fully present,
    /// [`Error::FramingMismatch`] if the two length fields disagree,
    /// [`Error::InvalidUtf8`] if the content is not valid UTF-8.
    pub fn pop_front_string(&mut self) -> Result<String> {
        let available = self.remaining();
        if available < 4 {
            return Err(self.underflow(4));
        }
        let prefix = u32::read_from(&self.buf[self.head..]);
        let len = prefix as usize;
        // Saturate so a hostile length cannot wrap past the check.
        let total = len.saturating_add(8);
        if available < total {
            return Err(self.underflow(total));
        }
        let suffix = u32::read_from(&self.buf[self.head + 4 + len..]);
        if prefix != suffix {
            return Err(Error::FramingMismatch { prefix, suffix });
        }
        let content = &self.buf[self.head + 4..self.head + 4 + len];
        let s = std::str::from_utf8(content).map_err(|e| Error::InvalidUtf8 {
            offset: self.head + 4 + e.valid_up_to(),
        })?;
        self.head += total;
        Ok(s.to_owned())
    }

    /// Decodes a framed string from the back. Same contract as
    /// [`pop_front_string`](Self::pop_front_string).
    ///
    /// # Errors
    /// As [`pop_front_string`](Self::pop_front_string).
    pub fn pop_back_string(&mut self) -> Result<String> {
        let available = self.remaining();
        if available < 4 {
            return Err(self.underflow(4));
        }
        let suffix = u32::read_from(&self.buf[self.tail - 4..]);
        let len = suffix as usize;
        let total = len.saturating_add(8);
        if available < total {
            return Err(self.underflow(total));
        }
        let start = self.tail - total;
        let prefix = u32::read_from(&self.buf[start..]);
        if prefix != suffix {
            return Err(Error::FramingMismatch { prefix, suffix });
        }
        let content = &self.buf[start + 4..start + 4 + len];
        let s = std::str::from_utf8(content).map_err(|e| Error::InvalidUtf8 {
            offset: start + 4 + e.valid_up_to(),
        })?;
        self.tail = start;
        Ok(s.to_owned())
    }

    /// Decodes a framed wide string `[u32 count][u16 units][u32
    /// count]` from the front. All-or-nothing, as
    /// [`pop_front_string`](Self::pop_front_string).
    ///
    /// # Errors
    /// [`Error::Underflow`] if the record is not fully present,
    /// [`Error::FramingMismatch`] if the two count fields disagree.
    pub fn pop_front_wide(&mut self) -> Result<Vec<u16>> {
        let available = self.remaining();
        if available < 4 {
            return Err(self.underflow(4));
        }
        let prefix = u32::read_from(&self.buf[self.head..]);
        let count = prefix as usize;
        let total = count.saturating_mul(2).saturating_add(8);
        if available < total {
            return Err(self.underflow(total));
        }
        let suffix = u32::read_from(&self.buf[self.head + 4 + count * 2..]);
        if prefix != suffix {
            return Err(Error::FramingMismatch { prefix, suffix });
        }
        let content = &self.buf[self.head + 4..self.head + 4 + count * 2];
        let units = content
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        self.head += total;
        Ok(units)
    }

    /// Decodes a framed wide string from the back. Same contract as
    /// [`pop_front_wide`](Self::pop_front_wide).
    ///
    /// # Errors
    /// As [`pop_front_wide`](Self::pop_front_wide).
    pub fn pop_back_wide(&mut self) -> Result<Vec<u16>> {
        let available = self.remaining();
        if available < 4 {
            return Err(self.underflow(4));
        }
        let suffix = u32::read_from(&self.buf[self.tail - 4..]);
        let count = suffix as usize;
        let total = count.saturating_mul(2).saturating_add(8);
        if available < total {
            return Err(self.underflow(total));
        }
        let start = self.tail - total;
        let prefix = u32::read_from(&self.buf[start..]);
        if prefix != suffix {
            return Err(Error::FramingMismatch { prefix, suffix });
        }
        let content = &self.buf[start + 4..start + 4 + count * 2];
        let units = content
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        self.tail = start;
        Ok(units)
    }

    /// Decodes an enum from the front, validating its repr before the
    /// cursor moves.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the repr is not fully present,
    /// [`Error::InvalidEnumValue`] if the repr matches no variant; in
    /// both cases the cursor does not move.
    pub fn pop_front_enum<E: WireEnum>(&mut self) -> Result<E> {
        let required = <E::Repr as Swappable>::WIRE_SIZE;
        if required > self.remaining() {
            return Err(self.underflow(required));
        }
        let raw = E::Repr::read_from(&self.buf[self.head..]);
        let value = E::from_repr(raw)?;
        self.head += required;
        Ok(value)
    }

    /// Decodes an enum from the back, validating its repr before the
    /// cursor moves.
    ///
    /// # Errors
    /// As [`pop_front_enum`](Self::pop_front_enum).
    pub fn pop_back_enum<E: WireEnum>(&mut self) -> Result<E> {
        let required = <E::Repr as Swappable>::WIRE_SIZE;
        if required > self.remaining() {
            return Err(self.underflow(required));
        }
        let raw = E::Repr::read_from(&self.buf[self.tail - required..]);
        let value = E::from_repr(raw)?;
        self.tail -= required;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::WriteCursor;

    fn encoded(f: impl FnOnce(&mut WriteCursor<'_>)) -> Vec<u8> {
        let mut buf = vec![0u8; 256];
        let mut cur = WriteCursor::new(&mut buf);
        f(&mut cur);
        let len = cur.position();
        buf.truncate(len);
        buf
    }

    #[test]
    fn test_pop_front_round_trip() {
        let bytes = encoded(|cur| {
            cur.push(0x1234u16).unwrap();
            cur.push(-5i32).unwrap();
            cur.push(0xFEu8).unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.pop_front::<u16>().unwrap(), 0x1234);
        assert_eq!(cur.pop_front::<i32>().unwrap(), -5);
        assert_eq!(cur.pop_front::<u8>().unwrap(), 0xFE);
        assert!(cur.is_empty());
    }

    #[test]
    fn test_pop_back_reverses_field_order() {
        let bytes = encoded(|cur| {
            cur.push(1u32).unwrap();
            cur.push(2u32).unwrap();
            cur.push(3u32).unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.pop_back::<u32>().unwrap(), 3);
        assert_eq!(cur.pop_back::<u32>().unwrap(), 2);
        assert_eq!(cur.pop_front::<u32>().unwrap(), 1);
        assert!(cur.is_empty());
    }

    #[test]
    fn test_pop_underflow_boundary() {
        let bytes = [0u8; 3];
        let mut cur = ReadCursor::new(&bytes);
        assert!(cur.pop_front::<u32>().is_err());
        assert!(cur.pop_back::<u32>().is_err());
        assert_eq!(cur.remaining(), 3);
        assert_eq!(cur.pop_front::<u16>().unwrap(), 0);
    }

    #[test]
    fn test_skips_clamp() {
        let bytes = [0u8; 8];
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.skip_front(5), 5);
        assert_eq!(cur.skip_back(100), 3);
        assert!(cur.is_empty());
        assert!(!cur.error());
    }

    #[test]
    fn test_pop_back_slice_forward_order() {
        let bytes = encoded(|cur| {
            cur.push_slice(&[10u16, 20, 30, 40]).unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        let mut out = [0u16; 2];
        cur.pop_back_slice(&mut out).unwrap();
        assert_eq!(out, [30, 40]);
        cur.pop_back_slice(&mut out).unwrap();
        assert_eq!(out, [10, 20]);
        assert!(cur.is_empty());
    }

    #[test]
    fn test_pop_front_bytes_zero_copy() {
        let bytes = b"abcdef".to_vec();
        let view = {
            let mut cur = ReadCursor::new(&bytes);
            cur.skip_front(1);
            cur.pop_front_bytes(3).unwrap()
        };
        // The detached slice outlives the cursor.
        assert_eq!(view, b"bcd");
    }

    #[test]
    fn test_string_round_trip_both_ends() {
        let bytes = encoded(|cur| {
            cur.push_str("alpha").unwrap();
            cur.push_str("omega").unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.pop_back_string().unwrap(), "omega");
        assert_eq!(cur.pop_front_string().unwrap(), "alpha");
        assert!(cur.is_empty());
    }

    #[test]
    fn test_string_corrupted_trailer_fails_atomically() {
        let mut bytes = encoded(|cur| {
            cur.push_str("hello").unwrap();
        });
        assert_eq!(bytes.len(), 13);
        bytes[9] = 0x07;
        let mut cur = ReadCursor::new(&bytes);
        match cur.pop_front_string().unwrap_err() {
            Error::FramingMismatch { prefix, suffix } => {
                assert_eq!(prefix, 5);
                assert_eq!(suffix, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cur.remaining(), 13);
        assert!(cur.pop_back_string().is_err());
        assert_eq!(cur.remaining(), 13);
    }

    #[test]
    fn test_string_truncated_record_fails_atomically() {
        let bytes = encoded(|cur| {
            cur.push_str("hello").unwrap();
        });
        let mut cur = ReadCursor::new(&bytes[..10]);
        assert!(cur.pop_front_string().is_err());
        assert_eq!(cur.remaining(), 10);
    }

    #[test]
    fn test_string_invalid_utf8_fails_atomically() {
        let mut bytes = encoded(|cur| {
            cur.push_str("hello").unwrap();
        });
        bytes[4] = 0xFF;
        let mut cur = ReadCursor::new(&bytes);
        match cur.pop_front_string().unwrap_err() {
            Error::InvalidUtf8 { offset } => assert_eq!(offset, 4),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cur.remaining(), 13);
    }

    #[test]
    fn test_huge_length_prefix_fails_cleanly() {
        // A length field near u32::MAX must report underflow on every
        // target width, not wrap the size computation.
        let front = [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00];
        let mut cur = ReadCursor::new(&front);
        assert!(matches!(
            cur.pop_front_string().unwrap_err(),
            Error::Underflow { .. }
        ));
        assert!(matches!(
            cur.pop_front_wide().unwrap_err(),
            Error::Underflow { .. }
        ));
        assert_eq!(cur.remaining(), 8);

        let back = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cur = ReadCursor::new(&back);
        assert!(matches!(
            cur.pop_back_string().unwrap_err(),
            Error::Underflow { .. }
        ));
        assert!(matches!(
            cur.pop_back_wide().unwrap_err(),
            Error::Underflow { .. }
        ));
        assert_eq!(cur.remaining(), 8);
    }

    #[test]
    fn test_empty_string_round_trip() {
        let bytes = encoded(|cur| {
            cur.push_str("").unwrap();
        });
        assert_eq!(bytes.len(), 8);
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.pop_front_string().unwrap(), "");
        assert!(cur.is_empty());
    }

    #[test]
    fn test_wide_round_trip_both_ends() {
        let first: Vec<u16> = "grün".encode_utf16().collect();
        let second: Vec<u16> = [0xD83D, 0xDE00].to_vec(); // surrogate pair
        let bytes = encoded(|cur| {
            cur.push_wide(&first).unwrap();
            cur.push_wide(&second).unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        assert_eq!(cur.pop_back_wide().unwrap(), second);
        assert_eq!(cur.pop_front_wide().unwrap(), first);
        assert!(cur.is_empty());
    }

    #[test]
    fn test_enum_invalid_value_does_not_advance() {
        crate::wire_enum! {
            enum Side: u8 {
                Buy = 1,
                Sell = 2,
            }
        }
        let bytes = [9u8, 1u8];
        let mut cur = ReadCursor::new(&bytes);
        assert!(cur.pop_front_enum::<Side>().is_err());
        assert_eq!(cur.remaining(), 2);
        assert_eq!(cur.pop_back_enum::<Side>().unwrap(), Side::Buy);
        assert_eq!(cur.remaining(), 1);
    }

    #[test]
    fn test_unchecked_reads_match_checked() {
        let bytes = encoded(|cur| {
            cur.push(0xAABBCCDDu32).unwrap();
            cur.push(0x1122u16).unwrap();
        });
        let mut cur = ReadCursor::new(&bytes);
        unsafe {
            assert_eq!(cur.pop_front_unchecked::<u32>(), 0xAABBCCDD);
            assert_eq!(cur.pop_back_unchecked::<u16>(), 0x1122);
        }
        assert!(cur.is_empty());
    }
}
