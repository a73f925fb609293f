//! The friend service `mydata` record.

use std::fs;
use std::path::Path;

use frd_common::{FixedRecord, LittleEndian, Utf16Text, U32, U64};
use frd_mii::ChecksummedMiiData;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::profile::FriendProfile;
use crate::serial;
use crate::{Error, Result};

/// The fixed size of a `mydata` file in bytes.
pub const MYDATA_SIZE: usize = 0x120;

/// Format magic at offset 0 (`"DMPF"` on disk).
pub const MAGIC_MY_DATA: u32 = 0x4650_4D44;

/// Version constant at offset 4.
pub const MAGIC_NUMBER: u32 = 0x2010_1021;

/// UTF-16 units in the profile comment.
pub const FRIEND_COMMENT_SIZE: usize = 0x10;

/// UTF-16 units in the screen name.
pub const FRIEND_SCREEN_NAME_SIZE: usize = 0xB;

/// UTF-16 units in the hex identifier at 0x68.
pub const HEX_IDENTIFIER_SIZE: usize = 0xD;

/// UTF-16 units in the serial number.
pub const SERIAL_NUMBER_SIZE: usize = 0x10;

/// The local user's friend data, as stored by the 3DS friend service.
///
/// Integers are little-endian; the embedded Mii keeps its own big-endian
/// layout.
///
/// # Layout
/// ```text
/// [0x000] magic                   u32 LE   0x46504D44
/// [0x004] magic_number            u32 LE   0x20101021
/// [0x008] padding1                u64 LE
/// [0x010] unk10                   0x20 bytes
/// [0x030] comment                 16 x UTF-16LE
/// [0x050] unk50                   u64 LE (likely padding)
/// [0x058] profile                 FriendProfile (8 bytes)
/// [0x060] local_friend_code_seed  u64 LE
/// [0x068] unk68                   13 x UTF-16LE (hex identifier)
/// [0x082] serial_number           16 x UTF-16LE
/// [0x0A2] display_name            11 x UTF-16LE
/// [0x0B8] padding2                3 bytes
/// [0x0BB] mii_data                ChecksummedMiiData (0x60 bytes)
/// [0x11B] padding3                5 bytes
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct MyData {
    pub magic: U32<LittleEndian>,
    pub magic_number: U32<LittleEndian>,
    pub padding1: U64<LittleEndian>,
    pub unk10: [u8; 0x20],
    pub comment: Utf16Text<FRIEND_COMMENT_SIZE>,
    pub unk50: U64<LittleEndian>,
    pub profile: FriendProfile,
    pub local_friend_code_seed: U64<LittleEndian>,
    pub unk68: Utf16Text<HEX_IDENTIFIER_SIZE>,
    pub serial_number: Utf16Text<SERIAL_NUMBER_SIZE>,
    pub display_name: Utf16Text<FRIEND_SCREEN_NAME_SIZE>,
    pub padding2: [u8; 3],
    pub mii_data: ChecksummedMiiData,
    pub padding3: [u8; 5],
}

const _: () = assert!(std::mem::size_of::<MyData>() == MYDATA_SIZE);
const _: () = assert!(std::mem::offset_of!(MyData, profile) == 0x58);
const _: () = assert!(std::mem::offset_of!(MyData, unk68) == 0x68);
const _: () = assert!(std::mem::offset_of!(MyData, serial_number) == 0x82);
const _: () = assert!(std::mem::offset_of!(MyData, display_name) == 0xA2);
const _: () = assert!(std::mem::offset_of!(MyData, mii_data) == 0xBB);

impl FixedRecord for MyData {}

impl MyData {
    /// Read and decode a `mydata` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("reading {}", path.display());

        let bytes = fs::read(path)?;
        Self::parse(&bytes)
    }

    /// Decode `mydata` bytes.
    ///
    /// Fails only on a size mismatch. A wrong magic or Mii checksum is logged
    /// but does not stop decoding; use [`MyData::check_magic`] and
    /// [`ChecksummedMiiData::is_checksum_valid`] to act on them.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let my_data = Self::decode(data)?;
        tracing::debug!("decoded {} bytes of friend data", data.len());

        if !my_data.magic_matches() {
            tracing::warn!(
                "unexpected magic {:#010x}/{:#010x}",
                my_data.magic.get(),
                my_data.magic_number.get()
            );
        }

        if !my_data.mii_data.is_checksum_valid() {
            tracing::warn!(
                "Mii checksum mismatch: stored {:#06x}, computed {:#06x}",
                my_data.mii_data.checksum(),
                my_data.mii_data.calc_checksum()
            );
        }

        Ok(my_data)
    }

    /// Check if both magic constants match.
    pub fn magic_matches(&self) -> bool {
        self.magic.get() == MAGIC_MY_DATA && self.magic_number.get() == MAGIC_NUMBER
    }

    /// Validate both magic constants.
    ///
    /// Returns [`Error::InvalidMagic`] for the first one that differs.
    pub fn check_magic(&self) -> Result<()> {
        for (expected, actual) in [
            (MAGIC_MY_DATA, self.magic.get()),
            (MAGIC_NUMBER, self.magic_number.get()),
        ] {
            if actual != expected {
                return Err(Error::InvalidMagic { expected, actual });
            }
        }
        Ok(())
    }

    /// Profile comment.
    pub fn comment(&self) -> String {
        self.comment.to_string_lossy()
    }

    /// Screen name.
    pub fn display_name(&self) -> String {
        self.display_name.to_string_lossy()
    }

    /// Serial number as stored, without the check digit.
    pub fn serial_number(&self) -> String {
        self.serial_number.to_string_lossy()
    }

    /// Serial number with its check digit appended.
    pub fn full_serial_number(&self) -> Result<String> {
        serial::full_serial(&self.serial_number())
    }

    /// Text of the hex identifier at 0x68.
    pub fn hex_identifier(&self) -> String {
        self.unk68.to_string_lossy()
    }

    /// The hex identifier parsed as a number, if it is valid hexadecimal.
    pub fn hex_identifier_value(&self) -> Option<u64> {
        u64::from_str_radix(&self.hex_identifier(), 16).ok()
    }

    /// Seed used to derive the local friend code.
    pub fn local_friend_code_seed(&self) -> u64 {
        self.local_friend_code_seed.get()
    }
}

impl Default for MyData {
    /// Magic constants set, everything else zero, Mii checksum sealed.
    fn default() -> Self {
        Self {
            magic: U32::new(MAGIC_MY_DATA),
            magic_number: U32::new(MAGIC_NUMBER),
            padding1: U64::new(0),
            unk10: [0; 0x20],
            comment: Utf16Text::default(),
            unk50: U64::new(0),
            profile: FriendProfile::default(),
            local_friend_code_seed: U64::new(0),
            unk68: Utf16Text::default(),
            serial_number: Utf16Text::default(),
            display_name: Utf16Text::default(),
            padding2: [0; 3],
            mii_data: ChecksummedMiiData::default(),
            padding3: [0; 5],
        }
    }
}
