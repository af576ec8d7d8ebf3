//! # Bit Decoder
//!
//! Forward-only, bit-granular reader over a borrowed byte buffer.
//!
//! ## Design
//!
//! The decoder is a single-use object: created once per decode pass,
//! consumed by one top-level unpack call tree, then discarded. The cursor
//! only ever advances; there is no random access and no rewind. Reads that
//! would run past the end of the buffer fail with
//! [`DecodeError::Underflow`] instead of producing garbage.

use crate::error::{DecodeError, DecodeResult};
use crate::packable::bits_for_domain;

/// Bit-granular decoder over a borrowed byte buffer.
///
/// Bits are consumed MSB-first within each byte, matching the order the
/// pack driver writes them.
pub struct BitPackDecoder<'a> {
    /// The buffer being decoded. Borrowed for the duration of one pass.
    data: &'a [u8],
    /// Current position, in bits from the start of the buffer.
    bit_offset: usize,
}

impl<'a> BitPackDecoder<'a> {
    /// Creates a decoder with the cursor at bit offset 0.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_offset: 0,
        }
    }

    /// Current cursor position in bits from the start of the buffer.
    #[must_use]
    pub const fn bit_offset(&self) -> usize {
        self.bit_offset
    }

    /// Bits left between the cursor and the end of the buffer.
    #[must_use]
    pub const fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.bit_offset
    }

    /// Consumes one outcome out of `domain_size` discrete possibilities.
    ///
    /// Reads `ceil(log2(domain_size))` bits and returns them as an unsigned
    /// integer. A `domain_size` of 1 is the degenerate singleton field: it
    /// consumes no bits and always returns 0.
    ///
    /// The result is the raw bit pattern. With a domain that is not a power
    /// of two it can exceed `domain_size - 1`; that only happens when the
    /// payload was produced with a different schema, which this layer
    /// cannot detect.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Underflow`] if fewer bits remain than the
    /// domain requires.
    ///
    /// # Panics
    ///
    /// Panics if `domain_size` is 0.
    pub fn decode(&mut self, domain_size: u64) -> DecodeResult<u64> {
        self.decode_bits(bits_for_domain(domain_size))
    }

    /// Consumes `width` raw bits and returns them as an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Underflow`] if fewer than `width` bits remain.
    pub fn decode_bits(&mut self, width: u32) -> DecodeResult<u64> {
        debug_assert!(width <= 64);

        let needed = width as usize;
        let remaining = self.remaining_bits();
        if needed > remaining {
            return Err(DecodeError::Underflow { needed, remaining });
        }

        let mut value = 0u64;
        for _ in 0..width {
            let byte = self.data[self.bit_offset / 8];
            let bit = (byte >> (7 - self.bit_offset % 8)) & 1;
            value = (value << 1) | u64::from(bit);
            self.bit_offset += 1;
        }

        Ok(value)
    }
}
