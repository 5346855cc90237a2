//! # Wirebuf Core
//!
//! Core types and cursors for endian-safe binary serialization.
//!
//! This crate provides:
//! - Byte-order tags and the stream-order constants
//! - Wire-capability traits (`Swappable`, `WireEnum`, `Trivial`)
//! - Bounds-checked write and read cursors over borrowed memory
//! - A growable owning buffer with an amortized growth policy
//! - Fixed-size key derivation from textual identifiers
//! - Error types for encoding/decoding operations

pub mod error;
pub mod growable;
pub mod key;
pub mod order;
pub mod reader;
pub mod wire;
pub mod writer;

pub use error::{Error, Result};
pub use growable::{GROWTH_THRESHOLD, WireVec};
pub use key::KeyArray;
pub use order::{ByteOrder, NATIVE_ORDER, ORDER_MISMATCH, STREAM_ORDER};
pub use reader::ReadCursor;
pub use wire::{Swappable, Trivial, WireEnum};
pub use writer::{WriteCursor, serialized_str_len, serialized_wide_len};
