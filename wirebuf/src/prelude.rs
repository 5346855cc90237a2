//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use wirebuf::prelude::*;
//! ```

// Cursor and buffer types
pub use wirebuf_core::growable::{GROWTH_THRESHOLD, WireVec};
pub use wirebuf_core::reader::ReadCursor;
pub use wirebuf_core::writer::{WriteCursor, serialized_str_len, serialized_wide_len};

// Wire traits and byte-order constants
pub use wirebuf_core::order::{ByteOrder, NATIVE_ORDER, ORDER_MISMATCH, STREAM_ORDER};
pub use wirebuf_core::wire::{Swappable, Trivial, WireEnum};
pub use wirebuf_core::wire_enum;

// Key derivation
pub use wirebuf_core::key::KeyArray;

// Error types
pub use wirebuf_core::error::{Error as CoreError, Result as CoreResult};
