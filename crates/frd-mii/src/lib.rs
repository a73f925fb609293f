//! Mii record parser for 3DS data files.
//!
//! A Mii is stored as a fixed 0x5C-byte [`MiiData`] record. When embedded in
//! system save data it is wrapped in a [`ChecksummedMiiData`], which adds a
//! reserved word and a big-endian CRC-16 over everything before it.
//!
//! # Layout
//!
//! Most attributes are packed into bit groups (see [`fields`]). Multi-byte
//! integers and bit-group words are big-endian; the two name slots are
//! UTF-16LE. The layout follows libctru's `MiiData`.
//!
//! # Example
//!
//! ```
//! use frd_mii::{ChecksummedMiiData, MiiData};
//! use frd_common::FixedRecord;
//!
//! let mut mii = MiiData::default();
//! mii.mii_name.set("Ada")?;
//! mii.mii_details.set_bday_month(12)?;
//!
//! // Constructing from a MiiData seals the checksum
//! let sealed = ChecksummedMiiData::new(mii);
//! assert!(sealed.is_checksum_valid());
//!
//! // Decoding raw bytes keeps whatever checksum was stored
//! let mut bytes = sealed.encode();
//! bytes[0] ^= 0xFF;
//! let tampered = ChecksummedMiiData::decode(&bytes)?;
//! assert!(!tampered.is_checksum_valid());
//! # Ok::<(), frd_common::Error>(())
//! ```

mod checksummed;
mod data;
pub mod fields;

pub use checksummed::{ChecksummedMiiData, CHECKSUMMED_MII_SIZE, CHECKSUM_OFFSET};
pub use data::{MiiData, MII_DATA_SIZE, MII_NAME_LENGTH};
pub use fields::{
    BeardDetails, ConsoleIdentity, EyeDetails, EyebrowDetails, FaceDetails, FaceStyle,
    GlassesDetails, HairDetails, MiiDetails, MiiOptions, MiiPosition, MoleDetails, MouthDetails,
    MustacheDetails, NoseDetails,
};

pub use frd_common::{Error, Result};
