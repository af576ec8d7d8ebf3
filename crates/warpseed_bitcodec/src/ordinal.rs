//! # Enumeration Ordinals
//!
//! Wire encoding for enumerated options.
//!
//! ## Design
//!
//! An enumerated field is stored as the *ordinal position* of its value in
//! a fixed ordering. That ordering is part of the wire format: reordering
//! it silently breaks every previously produced payload. To keep it from
//! drifting with refactors, every enumeration declares its ordering
//! explicitly in one place - the [`PackableEnum::VARIANTS`] table - instead
//! of relying on declaration order.

use crate::decoder::BitPackDecoder;
use crate::error::{DecodeError, DecodeResult};
use crate::packable::{FieldFormat, Packable};

/// An enumeration with an explicit, centrally defined wire ordering.
///
/// Implementors list every legal value, exactly once, in
/// [`PackableEnum::VARIANTS`]. The table is append-only: new values go at
/// the end, existing entries never move.
pub trait PackableEnum: Copy + PartialEq + 'static {
    /// The canonical wire ordering of this enumeration's values.
    const VARIANTS: &'static [Self];

    /// Number of legal values; the domain size of a field of this type.
    #[must_use]
    fn domain_size() -> u64 {
        Self::VARIANTS.len() as u64
    }

    /// Position of this value in the wire ordering.
    ///
    /// # Panics
    ///
    /// Panics if the value is missing from [`PackableEnum::VARIANTS`] -
    /// the ordering table is out of sync with the type, which is a
    /// programmer error.
    #[must_use]
    fn ordinal(&self) -> u64 {
        Self::VARIANTS
            .iter()
            .position(|variant| variant == self)
            .expect("value missing from its VARIANTS wire ordering") as u64
    }

    /// Looks up the value at `ordinal` in the wire ordering.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidOrdinal`] if `ordinal` has no entry in
    /// the table.
    fn from_ordinal(ordinal: u64) -> DecodeResult<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
            .ok_or(DecodeError::InvalidOrdinal {
                ordinal,
                domain: Self::domain_size(),
            })
    }
}

/// Every [`PackableEnum`] is packable as a single enumerated field.
impl<T: PackableEnum> Packable for T {
    fn bit_pack_format(&self, fields: &mut Vec<FieldFormat>) {
        fields.push(FieldFormat::Domain(T::domain_size()));
    }

    fn bit_pack_arguments(&self, values: &mut Vec<u64>) {
        values.push(self.ordinal());
    }

    fn bit_pack_unpack(decoder: &mut BitPackDecoder<'_>) -> DecodeResult<Self> {
        let ordinal = decoder.decode(T::domain_size())?;
        T::from_ordinal(ordinal)
    }
}
