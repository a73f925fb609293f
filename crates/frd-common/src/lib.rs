//! Common utilities for frd.
//!
//! This crate provides the codec building blocks shared by the record crates:
//!
//! - [`bitfield`] - Bit-field extraction/packing and the [`bit_group!`] macro
//! - [`crc`] - CRC-16/CCITT (non-reflected, init 0) as used by Mii checksums
//! - [`Utf16Text`] - Fixed-length UTF-16LE text slots
//! - [`FixedRecord`] - Decode/encode for fixed-size on-disk records

mod error;
mod record;
mod text;

pub mod bitfield;
pub mod crc;

pub use error::{Error, Result};
pub use record::FixedRecord;
pub use text::Utf16Text;

/// Re-export zerocopy so record crates agree on one version
pub use zerocopy;

/// Re-export the zerocopy traits and endian-aware integers used by record layouts
pub use zerocopy::byteorder::{BigEndian, LittleEndian, U16, U32, U64};
pub use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout, Unaligned};
