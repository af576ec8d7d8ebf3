//! # Layout Error Types
//!
//! Validation errors for constructing layout configurations.
//!
//! Wire-level failures live in [`warpseed_bitcodec::DecodeError`]; the
//! errors here reject configurations that could never be produced by the
//! game, before they reach the codec.

use thiserror::Error;

/// Errors that can occur while building a layout configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A pickup quantity above the item's pool maximum.
    #[error("{item} quantity {quantity} exceeds the maximum of {max}")]
    QuantityOutOfRange {
        /// Display name of the offending item.
        item: &'static str,
        /// The rejected quantity.
        quantity: u64,
        /// Highest quantity the pool allows for this item.
        max: u64,
    },

    /// A fixed key-count requirement above the number of keys that exist.
    #[error("fixed key count {count} exceeds the maximum of {max}")]
    KeyCountOutOfRange {
        /// The rejected count.
        count: u8,
        /// Highest key count the game can place.
        max: u8,
    },
}

/// Result type for layout validation.
pub type LayoutResult<T> = Result<T, LayoutError>;
