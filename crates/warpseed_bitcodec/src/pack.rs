//! # Pack Driver
//!
//! Top-level entry points of the codec.
//!
//! ## Design
//!
//! Packing walks a value's flattened schema and argument sequences in
//! lockstep, accumulates every field MSB-first, and zero-pads to the next
//! whole byte. It is a pure function: the same logical value always yields
//! byte-identical output, which the surrounding system relies on for
//! reproducible configuration hashes.
//!
//! Decoding is driven by the value type itself: the caller names the
//! concrete type, and that type's [`Packable::bit_pack_unpack`] performs
//! the schema's reads against a fresh single-use decoder.

use crate::decoder::BitPackDecoder;
use crate::error::DecodeResult;
use crate::packable::{FieldFormat, Packable};
use crate::writer::BitWriter;

/// Packs a value into its compact byte representation.
///
/// The output carries no length prefix, magic, or version tag; callers
/// must know out-of-band which concrete type to decode it into.
///
/// # Panics
///
/// Panics on schema violations, which are programmer errors: the format
/// and argument sequences disagreeing on length, a domain field holding an
/// ordinal outside its domain, or a raw field holding a value wider than
/// its declared width.
#[must_use]
pub fn pack_value<T: Packable + ?Sized>(value: &T) -> Vec<u8> {
    let mut fields = Vec::new();
    let mut values = Vec::new();
    value.bit_pack_format(&mut fields);
    value.bit_pack_arguments(&mut values);

    assert_eq!(
        fields.len(),
        values.len(),
        "bit_pack_format and bit_pack_arguments disagree on field count"
    );

    let mut writer = BitWriter::new();
    for (format, &field_value) in fields.iter().zip(&values) {
        match *format {
            FieldFormat::Domain(domain) => {
                assert!(
                    field_value < domain,
                    "value {field_value} is out of range for a domain of {domain}"
                );
            }
            FieldFormat::Bits(width) => {
                assert!(
                    width >= 64 || field_value >> width == 0,
                    "value {field_value} does not fit in {width} bits"
                );
            }
        }
        writer.write_bits(field_value, format.bit_width());
    }

    tracing::trace!(
        "packed {} fields into {} bits ({} bytes)",
        fields.len(),
        writer.bit_len(),
        writer.byte_len()
    );

    writer.into_bytes()
}

/// Reconstructs a value of type `T` from its packed byte representation.
///
/// Trailing padding bits are not inspected; buffers longer than the schema
/// requires decode successfully.
///
/// # Errors
///
/// Returns [`crate::DecodeError::Underflow`] if `data` holds fewer bits
/// than `T`'s schema requires, or [`crate::DecodeError::InvalidOrdinal`]
/// if an enumerated field holds an unassigned bit pattern.
pub fn unpack_value<T: Packable>(data: &[u8]) -> DecodeResult<T> {
    let mut decoder = BitPackDecoder::new(data);
    let value = T::bit_pack_unpack(&mut decoder)?;

    tracing::trace!(
        "unpacked value after {} of {} bits",
        decoder.bit_offset(),
        data.len() * 8
    );

    Ok(value)
}
