//! # Randomizable Game Options
//!
//! The enumerated options a player picks before generating a seed.
//!
//! Every enumeration carries an explicit `VARIANTS` table - its wire
//! ordering. The tables are append-only: entries are never removed or
//! reordered, because the ordinal positions are what previously shared
//! seeds contain.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use warpseed_bitcodec::PackableEnum;

/// Highest fixed key count the game can place.
pub const MAX_FIXED_KEYS: u8 = 9;

/// How permissive the logic is about movement tricks.
///
/// 7 values: 3 bits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickLevel {
    /// Logic never requires a trick.
    NoTricks,
    /// Tricks any player performs by accident.
    Trivial,
    /// Simple tricks with no timing requirements.
    Easy,
    /// The baseline for experienced players.
    Normal,
    /// Frame-tight or obscure tricks.
    Hard,
    /// Everything the game physically allows.
    Hypermode,
    /// Logic only guarantees the seed is beatable at all.
    MinimalRestrictions,
}

impl PackableEnum for TrickLevel {
    const VARIANTS: &'static [Self] = &[
        Self::NoTricks,
        Self::Trivial,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Hypermode,
        Self::MinimalRestrictions,
    ];
}

impl Default for TrickLevel {
    fn default() -> Self {
        Self::NoTricks
    }
}

/// What the player must collect before the final gate opens.
///
/// 12 values (two named modes plus fixed counts 0 through 9): 4 bits on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyHuntMode {
    /// One key behind every boss.
    AllBosses,
    /// One key behind every guardian.
    AllGuardians,
    /// A fixed number of keys shuffled into the item pool.
    FixedCount(u8),
}

impl KeyHuntMode {
    /// A fixed-count requirement, validated against [`MAX_FIXED_KEYS`].
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::KeyCountOutOfRange`] for counts above
    /// [`MAX_FIXED_KEYS`].
    pub fn fixed(count: u8) -> LayoutResult<Self> {
        if count > MAX_FIXED_KEYS {
            return Err(LayoutError::KeyCountOutOfRange {
                count,
                max: MAX_FIXED_KEYS,
            });
        }
        Ok(Self::FixedCount(count))
    }
}

impl PackableEnum for KeyHuntMode {
    const VARIANTS: &'static [Self] = &[
        Self::AllBosses,
        Self::AllGuardians,
        Self::FixedCount(0),
        Self::FixedCount(1),
        Self::FixedCount(2),
        Self::FixedCount(3),
        Self::FixedCount(4),
        Self::FixedCount(5),
        Self::FixedCount(6),
        Self::FixedCount(7),
        Self::FixedCount(8),
        Self::FixedCount(9),
    ];
}

impl Default for KeyHuntMode {
    fn default() -> Self {
        Self::AllBosses
    }
}

/// Whether teleporter destinations are shuffled.
///
/// 2 values: 1 bit on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeleporterMode {
    /// Teleporters lead where the game shipped them leading.
    Vanilla,
    /// Destinations are shuffled into a new connected graph.
    Randomized,
}

impl PackableEnum for TeleporterMode {
    const VARIANTS: &'static [Self] = &[Self::Vanilla, Self::Randomized];
}

impl Default for TeleporterMode {
    fn default() -> Self {
        Self::Vanilla
    }
}

/// Whether the opening sequence strips the starting loadout.
///
/// 2 values: 1 bit on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemLossMode {
    /// The vanilla opening: the loadout is lost and re-earned.
    Enabled,
    /// The loadout survives the opening.
    Disabled,
}

impl PackableEnum for ItemLossMode {
    const VARIANTS: &'static [Self] = &[Self::Enabled, Self::Disabled];
}

impl Default for ItemLossMode {
    fn default() -> Self {
        Self::Enabled
    }
}
