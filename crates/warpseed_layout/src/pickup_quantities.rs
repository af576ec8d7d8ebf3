//! # Pickup Quantities
//!
//! How many of each expansion item the shuffled pool contains.
//!
//! The [`EXPANSION_ITEMS`] table is fixed: its order is the wire order and
//! each entry's maximum bounds the field's domain. Quantities are validated
//! on construction, so every reachable value encodes losslessly.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use warpseed_bitcodec::{BitPackDecoder, DecodeResult, FieldFormat, Packable};

/// One expansion item the randomizer can redistribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionItem {
    /// Display name used by config files and spoiler logs.
    pub name: &'static str,
    /// Highest quantity the pool may contain; domain size is `max + 1`.
    pub max_quantity: u64,
    /// Quantity in the unmodified game.
    pub vanilla_quantity: u64,
}

/// Number of entries in [`EXPANSION_ITEMS`].
pub const EXPANSION_ITEM_COUNT: usize = 3;

/// The expansion items with adjustable pool quantities, in wire order.
pub const EXPANSION_ITEMS: [ExpansionItem; EXPANSION_ITEM_COUNT] = [
    ExpansionItem {
        name: "Missile Expansion",
        max_quantity: 49,
        vanilla_quantity: 49,
    },
    ExpansionItem {
        name: "Energy Cell",
        max_quantity: 12,
        vanilla_quantity: 12,
    },
    ExpansionItem {
        name: "Power Orb",
        max_quantity: 9,
        vanilla_quantity: 9,
    },
];

/// Pool quantity for every entry of [`EXPANSION_ITEMS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickupQuantities {
    quantities: [u64; EXPANSION_ITEM_COUNT],
}

impl PickupQuantities {
    /// Builds a quantity set, rejecting any entry above its item's maximum.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::QuantityOutOfRange`] naming the first
    /// offending item.
    pub fn new(quantities: [u64; EXPANSION_ITEM_COUNT]) -> LayoutResult<Self> {
        for (item, &quantity) in EXPANSION_ITEMS.iter().zip(&quantities) {
            if quantity > item.max_quantity {
                return Err(LayoutError::QuantityOutOfRange {
                    item: item.name,
                    quantity,
                    max: item.max_quantity,
                });
            }
        }
        Ok(Self { quantities })
    }

    /// The unmodified game's quantities.
    #[must_use]
    pub const fn vanilla() -> Self {
        let mut quantities = [0; EXPANSION_ITEM_COUNT];
        let mut index = 0;
        while index < EXPANSION_ITEM_COUNT {
            quantities[index] = EXPANSION_ITEMS[index].vanilla_quantity;
            index += 1;
        }
        Self { quantities }
    }

    /// Quantity for the item at `index` in [`EXPANSION_ITEMS`].
    #[must_use]
    pub const fn quantity(&self, index: usize) -> u64 {
        self.quantities[index]
    }

    /// All quantities, in table order.
    #[must_use]
    pub const fn as_slice(&self) -> &[u64] {
        &self.quantities
    }
}

impl Default for PickupQuantities {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl Packable for PickupQuantities {
    fn bit_pack_format(&self, fields: &mut Vec<FieldFormat>) {
        for item in &EXPANSION_ITEMS {
            fields.push(FieldFormat::Domain(item.max_quantity + 1));
        }
    }

    fn bit_pack_arguments(&self, values: &mut Vec<u64>) {
        values.extend_from_slice(&self.quantities);
    }

    fn bit_pack_unpack(decoder: &mut BitPackDecoder<'_>) -> DecodeResult<Self> {
        let mut quantities = [0; EXPANSION_ITEM_COUNT];
        for (slot, item) in quantities.iter_mut().zip(&EXPANSION_ITEMS) {
            *slot = decoder.decode(item.max_quantity + 1)?;
        }
        Ok(Self { quantities })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpseed_bitcodec::{pack_value, unpack_value};

    #[test]
    fn test_vanilla_quantities_match_the_table() {
        let vanilla = PickupQuantities::vanilla();

        for (index, item) in EXPANSION_ITEMS.iter().enumerate() {
            assert_eq!(vanilla.quantity(index), item.vanilla_quantity);
        }
    }

    #[test]
    fn test_quantities_are_validated() {
        assert!(PickupQuantities::new([49, 12, 9]).is_ok());
        assert_eq!(
            PickupQuantities::new([50, 0, 0]),
            Err(LayoutError::QuantityOutOfRange {
                item: "Missile Expansion",
                quantity: 50,
                max: 49,
            })
        );
    }

    #[test]
    fn test_wire_width_is_fourteen_bits() {
        let mut fields = Vec::new();
        PickupQuantities::vanilla().bit_pack_format(&mut fields);

        let total: u32 = fields.iter().map(FieldFormat::bit_width).sum();
        assert_eq!(total, 14);
    }

    #[test]
    fn test_known_encoding() {
        // 49 -> 110001, 12 -> 1100, 9 -> 1001: 11000111 001001 00 padded.
        let vanilla = PickupQuantities::vanilla();

        assert_eq!(pack_value(&vanilla), vec![0b1100_0111, 0b0010_0100]);
    }

    #[test]
    fn test_round_trip_boundary_quantities() {
        for quantities in [[0, 0, 0], [49, 12, 9], [25, 6, 4], [1, 0, 9]] {
            let value = PickupQuantities::new(quantities).unwrap();
            let packed = pack_value(&value);

            assert_eq!(unpack_value::<PickupQuantities>(&packed), Ok(value));
        }
    }
}
