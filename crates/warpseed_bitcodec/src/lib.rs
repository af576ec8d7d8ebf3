//! # WARPSEED Bitcodec - Schema-Ordered Bit Packing
//!
//! The wire format for WARPSEED layout configurations.
//!
//! ## Architecture
//!
//! This crate implements a self-describing-free binary format: the stream
//! carries no type tags, lengths, or version markers. Every byte of output
//! is configuration data.
//!
//! - **Decoder**: forward-only bit cursor over a borrowed buffer
//! - **Packable protocol**: values declare their ordered field schema and
//!   reconstruct themselves from a decoder in the same order
//! - **Pack driver**: flattens the schema, accumulates MSB-first, pads to
//!   a whole byte
//! - **Ordinal tables**: explicit wire orderings for enumerated options
//!
//! ## Format Guarantees
//!
//! - Deterministic: the same value always packs to identical bytes
//! - Minimal: a field with `K` legal values costs `ceil(log2(K))` bits
//! - Round-trip: `unpack_value(&pack_value(&v)) == Ok(v)` for every legal
//!   value of every packable type
//!
//! ## The Contract
//!
//! ```text
//! ENCODER                          DECODER
//!   |                                 |
//!   |-- field 1 of the schema ------->|  <- same type,
//!   |-- field 2 of the schema ------->|     same schema,
//!   |-- ...              ------------>|     same order
//!   |                                 |
//! ```
//!
//! Both sides must agree on the concrete type out-of-band. The schema IS
//! the protocol: a reordered field or enumeration silently corrupts every
//! old payload, which is why orderings live in append-only VARIANTS tables.
//!
//! ## Example
//!
//! ```rust,ignore
//! use warpseed_bitcodec::{pack_value, unpack_value};
//!
//! let packed = pack_value(&configuration);
//! let restored = unpack_value::<LayoutConfiguration>(&packed)?;
//! assert_eq!(restored, configuration);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod decoder;
pub mod error;
pub mod ordinal;
pub mod pack;
pub mod packable;
pub mod writer;

// Re-exports for convenience
pub use decoder::BitPackDecoder;
pub use error::{DecodeError, DecodeResult};
pub use ordinal::PackableEnum;
pub use pack::{pack_value, unpack_value};
pub use packable::{bits_for_domain, FieldFormat, Packable};
pub use writer::BitWriter;
