//! # Layout Configuration
//!
//! The composite of every option that shapes a generated seed.
//!
//! ## Wire Layout
//!
//! Fields are spliced into one contiguous bitstream, in declaration order
//! of the struct, 33 bits plus padding:
//!
//! ```text
//! ┌───────┬──────┬────┬──────────────────┬──────────────┬────┬─────┐
//! │ trick │ keys │ tp │ pickup pool (14) │ start (2+8)  │ il │ pad │
//! │   3   │  4   │ 1  │    6 + 4 + 4     │  mode  area  │ 1  │  7  │
//! └───────┴──────┴────┴──────────────────┴──────────────┴────┴─────┘
//! ```
//!
//! The order is frozen. Appending a field at the end is the only
//! compatible evolution; anything else silently corrupts shared seeds.

use crate::modes::{ItemLossMode, KeyHuntMode, TeleporterMode, TrickLevel};
use crate::pickup_quantities::PickupQuantities;
use crate::starting_location::StartingLocation;
use serde::{Deserialize, Serialize};
use warpseed_bitcodec::{
    pack_value, unpack_value, BitPackDecoder, DecodeResult, FieldFormat, Packable,
};

/// Every randomizable option of one generated seed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct LayoutConfiguration {
    /// How permissive the logic is about tricks.
    pub trick_level: TrickLevel,
    /// What must be collected before the final gate.
    pub key_hunt: KeyHuntMode,
    /// Whether teleporter destinations are shuffled.
    pub teleporters: TeleporterMode,
    /// Pool quantity for every expansion item.
    pub pickup_quantities: PickupQuantities,
    /// Where the player wakes up.
    pub starting_location: StartingLocation,
    /// Whether the opening strips the starting loadout.
    pub item_loss: ItemLossMode,
}

impl LayoutConfiguration {
    /// Packs this configuration into its compact byte representation.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let data = pack_value(self);
        tracing::debug!("encoded layout configuration into {} bytes", data.len());
        data
    }

    /// Reconstructs a configuration from bytes produced by
    /// [`LayoutConfiguration::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`warpseed_bitcodec::DecodeError`] for truncated payloads or
    /// unassigned enumeration bit patterns.
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        tracing::debug!("decoding layout configuration from {} bytes", data.len());
        unpack_value(data)
    }
}

impl Packable for LayoutConfiguration {
    fn bit_pack_format(&self, fields: &mut Vec<FieldFormat>) {
        self.trick_level.bit_pack_format(fields);
        self.key_hunt.bit_pack_format(fields);
        self.teleporters.bit_pack_format(fields);
        self.pickup_quantities.bit_pack_format(fields);
        self.starting_location.bit_pack_format(fields);
        self.item_loss.bit_pack_format(fields);
    }

    fn bit_pack_arguments(&self, values: &mut Vec<u64>) {
        self.trick_level.bit_pack_arguments(values);
        self.key_hunt.bit_pack_arguments(values);
        self.teleporters.bit_pack_arguments(values);
        self.pickup_quantities.bit_pack_arguments(values);
        self.starting_location.bit_pack_arguments(values);
        self.item_loss.bit_pack_arguments(values);
    }

    fn bit_pack_unpack(decoder: &mut BitPackDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            trick_level: TrickLevel::bit_pack_unpack(decoder)?,
            key_hunt: KeyHuntMode::bit_pack_unpack(decoder)?,
            teleporters: TeleporterMode::bit_pack_unpack(decoder)?,
            pickup_quantities: PickupQuantities::bit_pack_unpack(decoder)?,
            starting_location: StartingLocation::bit_pack_unpack(decoder)?,
            item_loss: ItemLossMode::bit_pack_unpack(decoder)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpseed_bitcodec::DecodeError;

    /// Known byte vectors, computed by hand from the wire layout.
    fn known_configurations() -> Vec<(Vec<u8>, LayoutConfiguration)> {
        vec![
            (
                vec![0x00, 0xC7, 0x24, 0x00, 0x00],
                LayoutConfiguration::default(),
            ),
            (
                vec![0xA3, 0x28, 0x0E, 0x4D, 0x80],
                LayoutConfiguration {
                    trick_level: TrickLevel::Hypermode,
                    key_hunt: KeyHuntMode::AllGuardians,
                    teleporters: TeleporterMode::Randomized,
                    pickup_quantities: PickupQuantities::new([10, 0, 3]).unwrap(),
                    starting_location: StartingLocation::custom(77),
                    item_loss: ItemLossMode::Disabled,
                },
            ),
            (
                vec![0x89, 0xC7, 0x25, 0x00, 0x00],
                LayoutConfiguration {
                    trick_level: TrickLevel::Hard,
                    key_hunt: KeyHuntMode::FixedCount(2),
                    teleporters: TeleporterMode::Randomized,
                    pickup_quantities: PickupQuantities::vanilla(),
                    starting_location: StartingLocation::random(),
                    item_loss: ItemLossMode::Enabled,
                },
            ),
            (
                vec![0xD6, 0x01, 0x40, 0x00, 0x80],
                LayoutConfiguration {
                    trick_level: TrickLevel::MinimalRestrictions,
                    key_hunt: KeyHuntMode::FixedCount(9),
                    teleporters: TeleporterMode::Vanilla,
                    pickup_quantities: PickupQuantities::new([0, 5, 0]).unwrap(),
                    starting_location: StartingLocation::vanilla(),
                    item_loss: ItemLossMode::Disabled,
                },
            ),
        ]
    }

    #[test]
    fn test_schema_is_thirty_three_bits() {
        let mut fields = Vec::new();
        LayoutConfiguration::default().bit_pack_format(&mut fields);

        let total: u32 = fields.iter().map(FieldFormat::bit_width).sum();
        assert_eq!(total, 33);
        assert_eq!(LayoutConfiguration::default().encode().len(), 5);
    }

    #[test]
    fn test_encode_known_vectors() {
        for (expected, configuration) in known_configurations() {
            assert_eq!(
                configuration.encode(),
                expected,
                "wrong bytes for {configuration:?}"
            );
        }
    }

    #[test]
    fn test_decode_known_vectors() {
        for (data, expected) in known_configurations() {
            assert_eq!(LayoutConfiguration::decode(&data), Ok(expected));
        }
    }

    #[test]
    fn test_known_vectors_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for (data, _) in known_configurations() {
            assert!(seen.insert(data), "two configurations share an encoding");
        }
    }

    #[test]
    fn test_truncated_configuration_underflows() {
        // 4 bytes cover 32 bits; the item loss flag needs a 33rd.
        assert_eq!(
            LayoutConfiguration::decode(&[0x00, 0xC7, 0x24, 0x00]),
            Err(DecodeError::Underflow {
                needed: 1,
                remaining: 0,
            })
        );
    }

    #[test]
    fn test_unassigned_key_hunt_pattern_is_rejected() {
        // Key hunt field holds 1111 (ordinal 15) in a domain of 12.
        assert_eq!(
            LayoutConfiguration::decode(&[0x1E, 0x00, 0x00, 0x00, 0x00]),
            Err(DecodeError::InvalidOrdinal {
                ordinal: 15,
                domain: 12,
            })
        );
    }
}
