//! Error types for wirebuf core operations.

use thiserror::Error;

/// Core error type for wirebuf operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Write target has fewer bytes left than the operation needs.
    #[error("write overflow: required {required} bytes, available {available} bytes")]
    Overflow {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Read source has fewer bytes left than the operation needs.
    #[error("read underflow: required {required} bytes, available {available} bytes")]
    Underflow {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Leading and trailing length fields of a framed string disagree.
    #[error("string framing mismatch: prefix {prefix}, suffix {suffix}")]
    FramingMismatch {
        /// Length recorded before the content.
        prefix: u32,
        /// Length recorded after the content.
        suffix: u32,
    },

    /// Invalid enum value encountered during decoding.
    #[error("invalid enum value: type {type_name}, value {value}")]
    InvalidEnumValue {
        /// Name of the enum type being decoded.
        type_name: &'static str,
        /// Invalid value encountered.
        value: u64,
    },

    /// Invalid UTF-8 encoding in string content.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },
}

/// Result type alias for wirebuf core operations.
pub type Result<T> = std::result::Result<T, Error>;
