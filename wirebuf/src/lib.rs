//! # Wirebuf
//!
//! Endian-safe binary serialization toolkit for Rust.
//!
//! Wirebuf encodes primitives, fixed-size spans, and length-framed
//! strings into contiguous little-endian byte streams that decode
//! bit-exactly on any host, regardless of either side's native byte
//! order.
//!
//! ## Features
//!
//! - **One stream order** - every multi-byte value is little-endian on
//!   the wire; matching hosts copy bytes verbatim
//! - **Compile-time type gating** - only swappable integers, declared
//!   wire enums, and provably trivial types can touch a stream
//! - **All-or-nothing operations** - a failed push or pop leaves the
//!   cursor exactly where it was, including framed-string decodes
//! - **Double-ended reads** - pop from the front or the back of the
//!   same buffer
//! - **Deterministic fixed-size keys** - hash-chained padding turns
//!   short identifiers into full-width map keys
//!
//! ## Quick Start
//!
//! ```
//! use wirebuf::prelude::*;
//!
//! let mut buf = WireVec::new();
//! buf.push(42u32);
//! buf.push_str("hello");
//!
//! let mut cur = ReadCursor::new(buf.as_slice());
//! assert_eq!(cur.pop_front::<u32>().unwrap(), 42);
//! assert_eq!(cur.pop_front_string().unwrap(), "hello");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - cursors, buffers, wire traits, and key derivation

pub mod prelude;

/// Core types and cursors for encoding/decoding.
pub mod core {
    pub use wirebuf_core::*;
}

// Re-export commonly used items at the crate root
pub use wirebuf_core::{
    error::{Error, Result},
    growable::WireVec,
    key::KeyArray,
    reader::ReadCursor,
    wire::{Swappable, Trivial, WireEnum},
    wire_enum,
    writer::WriteCursor,
};
