//! # Codec Error Types
//!
//! All errors that can surface while decoding a packed bitstream.
//!
//! Encoding never fails: a value that violates its own schema is a
//! programmer error and panics instead of returning an error.

use thiserror::Error;

/// Errors that can occur while decoding a packed bitstream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A read requested more bits than remain in the buffer.
    ///
    /// This is the truncated-payload / schema-mismatch failure mode and is
    /// always surfaced to the caller, never silently recovered.
    #[error("bitstream underflow: read needs {needed} bits, only {remaining} remain")]
    Underflow {
        /// Bits the failed read required.
        needed: usize,
        /// Bits left in the buffer at the time of the read.
        remaining: usize,
    },

    /// A decoded ordinal has no entry in the enumeration's ordering table.
    ///
    /// Possible whenever a domain size is not a power of two: the raw bits
    /// can hold values the enumeration never assigns.
    #[error("ordinal {ordinal} has no variant in an enumeration of {domain} values")]
    InvalidOrdinal {
        /// The ordinal read from the stream.
        ordinal: u64,
        /// Number of legal values in the enumeration.
        domain: u64,
    },
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
