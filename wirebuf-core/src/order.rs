//! Byte-order tags and the stream/native order constants.
//!
//! Every multi-byte value on the wire is stored in [`STREAM_ORDER`].
//! Hosts whose native order differs swap on the way in and out; hosts
//! that match copy bytes verbatim. [`ORDER_MISMATCH`] is the const
//! gate for that decision.

/// Byte order of multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian (least significant byte first).
    #[default]
    Little,
    /// Big-endian (most significant byte first).
    Big,
}

impl ByteOrder {
    /// Parses a byte order from its textual name.
    ///
    /// # Arguments
    /// * `s` - `"little"` / `"littleEndian"` or `"big"` / `"bigEndian"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "little" | "littleEndian" => Some(ByteOrder::Little),
            "big" | "bigEndian" => Some(ByteOrder::Big),
            _ => None,
        }
    }
}

/// Byte order of every serialized stream produced by this crate.
pub const STREAM_ORDER: ByteOrder = ByteOrder::Little;

/// Byte order of the host executing this code.
#[cfg(target_endian = "little")]
pub const NATIVE_ORDER: ByteOrder = ByteOrder::Little;

/// Byte order of the host executing this code.
#[cfg(target_endian = "big")]
pub const NATIVE_ORDER: ByteOrder = ByteOrder::Big;

/// True when host and stream order differ and values must be swapped.
pub const ORDER_MISMATCH: bool = cfg!(target_endian = "big");
