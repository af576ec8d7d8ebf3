//! # Cosmetic Patches
//!
//! Player-facing toggles that never affect logic or item placement.
//!
//! Cosmetics travel separately from [`crate::LayoutConfiguration`]: two
//! players sharing a seed share the layout, not each other's cosmetic
//! preferences.

use serde::{Deserialize, Serialize};
use warpseed_bitcodec::{BitPackDecoder, DecodeResult, FieldFormat, Packable};

/// Cosmetic flags applied by the patcher.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct CosmeticPatches {
    /// Skip the slow credits crawl.
    pub speed_up_credits: bool,
    /// Suppress the item acquisition popup.
    pub disable_hud_popup: bool,
}

impl Packable for CosmeticPatches {
    fn bit_pack_format(&self, fields: &mut Vec<FieldFormat>) {
        fields.push(FieldFormat::Domain(2));
        fields.push(FieldFormat::Domain(2));
    }

    fn bit_pack_arguments(&self, values: &mut Vec<u64>) {
        values.push(u64::from(self.speed_up_credits));
        values.push(u64::from(self.disable_hud_popup));
    }

    fn bit_pack_unpack(decoder: &mut BitPackDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            speed_up_credits: decoder.decode(2)? != 0,
            disable_hud_popup: decoder.decode(2)? != 0,
        })
    }
}
