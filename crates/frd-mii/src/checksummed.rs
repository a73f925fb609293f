//! Mii record with an embedded CRC-16.

use frd_common::{crc, BigEndian, FixedRecord, U16};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::data::MiiData;

/// Size of a [`ChecksummedMiiData`] record in bytes.
pub const CHECKSUMMED_MII_SIZE: usize = 0x60;

/// Offset of the checksum field; the CRC covers every byte before it.
pub const CHECKSUM_OFFSET: usize = 0x5E;

/// A [`MiiData`] followed by a reserved word and a CRC-16 of both.
///
/// The checksum is resealed by every operation that builds or changes the
/// record through this type. Only [`FixedRecord::decode`] can produce a
/// record whose stored checksum is wrong, since it keeps the bytes as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct ChecksummedMiiData {
    mii_data: MiiData,
    unknown: U16<BigEndian>,
    crc16: U16<BigEndian>,
}

const _: () = assert!(std::mem::size_of::<ChecksummedMiiData>() == CHECKSUMMED_MII_SIZE);
const _: () = assert!(std::mem::offset_of!(ChecksummedMiiData, crc16) == CHECKSUM_OFFSET);

impl FixedRecord for ChecksummedMiiData {}

impl ChecksummedMiiData {
    /// Wrap `mii_data` and seal the checksum.
    pub fn new(mii_data: MiiData) -> Self {
        let mut data = Self {
            mii_data,
            unknown: U16::new(0),
            crc16: U16::new(0),
        };
        data.fix_checksum();
        data
    }

    /// Get the wrapped Mii.
    pub fn mii_data(&self) -> &MiiData {
        &self.mii_data
    }

    /// Unwrap into the bare Mii.
    pub fn into_mii_data(self) -> MiiData {
        self.mii_data
    }

    /// Replace the wrapped Mii and reseal.
    pub fn set_mii_data(&mut self, mii_data: MiiData) {
        self.mii_data = mii_data;
        self.fix_checksum();
    }

    /// Modify the wrapped Mii in place, then reseal.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut MiiData) -> R) -> R {
        let result = f(&mut self.mii_data);
        self.fix_checksum();
        result
    }

    /// Reserved word between the Mii and the checksum.
    pub fn unknown(&self) -> u16 {
        self.unknown.get()
    }

    /// Set the reserved word and reseal (it is covered by the checksum).
    pub fn set_unknown(&mut self, value: u16) {
        self.unknown.set(value);
        self.fix_checksum();
    }

    /// Stored checksum.
    pub fn checksum(&self) -> u16 {
        self.crc16.get()
    }

    /// Compute the checksum of bytes `[0, CHECKSUM_OFFSET)`.
    ///
    /// See <https://www.3dbrew.org/wiki/Mii#Checksum>.
    pub fn calc_checksum(&self) -> u16 {
        crc::crc16(&self.as_bytes()[..CHECKSUM_OFFSET])
    }

    /// Check the stored checksum against the computed one.
    pub fn is_checksum_valid(&self) -> bool {
        self.checksum() == self.calc_checksum()
    }

    /// Overwrite the stored checksum with the computed one.
    pub fn fix_checksum(&mut self) {
        self.crc16.set(self.calc_checksum());
    }
}

impl Default for ChecksummedMiiData {
    fn default() -> Self {
        Self::new(MiiData::default())
    }
}

impl From<MiiData> for ChecksummedMiiData {
    fn from(mii_data: MiiData) -> Self {
        Self::new(mii_data)
    }
}
