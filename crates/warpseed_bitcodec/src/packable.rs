//! # The Packable Protocol
//!
//! Values that know their own compact binary encoding.
//!
//! ## Design
//!
//! A packable value exposes three capabilities:
//!
//! 1. **Describe** its ordered field schema ([`Packable::bit_pack_format`])
//! 2. **Supply** the concrete integer for every field
//!    ([`Packable::bit_pack_arguments`])
//! 3. **Reconstruct** an instance from a decoder by performing exactly the
//!    reads the schema implies ([`Packable::bit_pack_unpack`])
//!
//! The stream carries no type tags and no lengths; both sides derive the
//! exact bit layout from the value's type alone. Composite values splice
//! their members in place, so the wire never sees a type boundary:
//!
//! ```text
//! ┌───────┬─────────┬────┬─────────────────────┬─────────┐
//! │ 3 bit │  4 bit  │ 1b │  nested value bits  │ padding │
//! ├───────┴─────────┴────┴─────────────────────┴─────────┤
//! │ one contiguous MSB-first bitstream, zero-padded      │
//! └──────────────────────────────────────────────────────┘
//! ```

use crate::decoder::BitPackDecoder;
use crate::error::DecodeResult;

/// Returns the number of bits needed to hold an ordinal in `[0, domain)`.
///
/// This is `ceil(log2(domain))`; a domain of 1 needs no bits at all.
///
/// # Panics
///
/// Panics if `domain` is 0. A field with no legal values cannot exist.
#[must_use]
pub const fn bits_for_domain(domain: u64) -> u32 {
    assert!(domain > 0, "a field domain must have at least one legal value");
    if domain == 1 {
        0
    } else {
        u64::BITS - (domain - 1).leading_zeros()
    }
}

/// Descriptor for a single field in a value's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// A finite domain of `K` legal values, stored as an ordinal in
    /// `[0, K)` using `ceil(log2(K))` bits.
    Domain(u64),
    /// A raw unsigned integer with an explicit width in bits (at most 64).
    Bits(u32),
}

impl FieldFormat {
    /// Number of bits this field occupies on the wire.
    #[must_use]
    pub const fn bit_width(&self) -> u32 {
        match *self {
            Self::Domain(domain) => bits_for_domain(domain),
            Self::Bits(width) => width,
        }
    }
}

/// A value that can describe and reconstruct its own compact encoding.
///
/// ## Contract
///
/// - The field schema is a property of the *type*: two instances of the
///   same type always produce the same sequence of [`FieldFormat`]s, and
///   the sequence never depends on run-time data.
/// - `bit_pack_format` and `bit_pack_arguments` append the same number of
///   entries, in the same order. A mismatch is a programmer error and the
///   pack driver panics on it.
/// - `bit_pack_unpack` performs exactly the reads the schema implies, in
///   schema order, so that for every legal instance `v`:
///   `unpack_value(&pack_value(&v)) == Ok(v)`.
///
/// Composite values implement all three methods by delegating to their
/// members in a fixed order. Delegation into the shared accumulator is what
/// splices a nested value's fields in place.
pub trait Packable {
    /// Appends this value's field descriptors to `fields`, in wire order.
    fn bit_pack_format(&self, fields: &mut Vec<FieldFormat>);

    /// Appends the concrete integer for every field to `values`, in the
    /// identical order as [`Packable::bit_pack_format`].
    fn bit_pack_arguments(&self, values: &mut Vec<u64>);

    /// Reconstructs an instance by consuming this type's schema from
    /// `decoder`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError::Underflow`] if the buffer is too short
    /// for the schema, or [`crate::DecodeError::InvalidOrdinal`] if a read
    /// ordinal has no variant in an enumeration field.
    fn bit_pack_unpack(decoder: &mut BitPackDecoder<'_>) -> DecodeResult<Self>
    where
        Self: Sized;
}
