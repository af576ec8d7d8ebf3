//! # WARPSEED Layout - The Configuration Model
//!
//! Every option a player picks before generating a seed, and its exact
//! wire representation.
//!
//! ## Design Principles
//!
//! 1. **The wire ordering is law** - every enumeration's `VARIANTS` table
//!    is append-only; a reorder silently corrupts every shared seed
//! 2. **Validate at the edge** - constructors reject impossible
//!    configurations so everything reachable encodes losslessly
//! 3. **serde for files, bitcodec for the wire** - config files are
//!    human-readable, shared seeds are bit-packed
//!
//! ## Example
//!
//! ```rust,ignore
//! use warpseed_layout::LayoutConfiguration;
//!
//! let configuration = LayoutConfiguration::default();
//! let shared = configuration.encode();
//! assert_eq!(LayoutConfiguration::decode(&shared)?, configuration);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod configuration;
pub mod cosmetics;
pub mod error;
pub mod modes;
pub mod pickup_quantities;
pub mod starting_location;

// Re-exports for convenience
pub use configuration::LayoutConfiguration;
pub use cosmetics::CosmeticPatches;
pub use error::{LayoutError, LayoutResult};
pub use modes::{
    ItemLossMode, KeyHuntMode, TeleporterMode, TrickLevel, MAX_FIXED_KEYS,
};
pub use pickup_quantities::{
    ExpansionItem, PickupQuantities, EXPANSION_ITEMS, EXPANSION_ITEM_COUNT,
};
pub use starting_location::{
    StartingLocation, StartingLocationMode, AREA_INDEX_BITS,
};
