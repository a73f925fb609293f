//! The bare Mii record.

use frd_common::{BigEndian, FixedRecord, Utf16Text, U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::fields::{
    BeardDetails, ConsoleIdentity, EyeDetails, EyebrowDetails, FaceDetails, FaceStyle,
    GlassesDetails, HairDetails, MiiDetails, MiiOptions, MiiPosition, MoleDetails, MouthDetails,
    MustacheDetails, NoseDetails,
};

/// Size of a [`MiiData`] record in bytes.
pub const MII_DATA_SIZE: usize = 0x5C;

/// Number of UTF-16 code units in the Mii and author name slots.
pub const MII_NAME_LENGTH: usize = 10;

/// A Mii (avatar) record.
///
/// Reference: libctru `include/3ds/mii.h`.
///
/// # Layout
/// ```text
/// [0x00] magic                    u8
/// [0x01] mii_options              bit group (u8)
/// [0x02] mii_pos                  bit group (u8)
/// [0x03] console_identity         bit group (u8)
/// [0x04] system_id                u64 BE
/// [0x0C] mii_id                   u32 BE
/// [0x10] mac                      6 bytes
/// [0x16] pad                      u16 BE
/// [0x18] mii_details              bit group (u16 BE)
/// [0x1A] mii_name                 10 x UTF-16LE
/// [0x2E] height                   u8
/// [0x2F] width                    u8
/// [0x30] face_style               bit group (u8)
/// [0x31] face_details             bit group (u8)
/// [0x32] hair_style               u8
/// [0x33] hair_details             bit group (u8)
/// [0x34] eye_details              bit group (u32 BE)
/// [0x38] eyebrow_details          bit group (u32 BE)
/// [0x3C] nose_details             bit group (u16 BE)
/// [0x3E] mouth_details            bit group (u16 BE)
/// [0x40] mustache_details         bit group (u16 BE)
/// [0x42] beard_details            bit group (u16 BE)
/// [0x44] glasses_details          bit group (u16 BE)
/// [0x46] mole_details             bit group (u16 BE)
/// [0x48] author_name              10 x UTF-16LE
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(C)]
pub struct MiiData {
    /// Record magic, 3 in every observed 3DS Mii.
    pub magic: u8,
    pub mii_options: MiiOptions,
    pub mii_pos: MiiPosition,
    pub console_identity: ConsoleIdentity,
    /// Identifies the creating system (determines pants color).
    pub system_id: U64<BigEndian>,
    pub mii_id: U32<BigEndian>,
    /// Full MAC address of the creating system.
    pub mac: [u8; 6],
    pub pad: U16<BigEndian>,
    pub mii_details: MiiDetails,
    pub mii_name: Utf16Text<MII_NAME_LENGTH>,
    pub height: u8,
    pub width: u8,
    pub face_style: FaceStyle,
    pub face_details: FaceDetails,
    pub hair_style: u8,
    pub hair_details: HairDetails,
    pub eye_details: EyeDetails,
    pub eyebrow_details: EyebrowDetails,
    pub nose_details: NoseDetails,
    pub mouth_details: MouthDetails,
    pub mustache_details: MustacheDetails,
    pub beard_details: BeardDetails,
    pub glasses_details: GlassesDetails,
    pub mole_details: MoleDetails,
    pub author_name: Utf16Text<MII_NAME_LENGTH>,
}

const _: () = assert!(std::mem::size_of::<MiiData>() == MII_DATA_SIZE);
const _: () = assert!(std::mem::offset_of!(MiiData, mii_name) == 0x1A);
const _: () = assert!(std::mem::offset_of!(MiiData, eye_details) == 0x34);
const _: () = assert!(std::mem::offset_of!(MiiData, author_name) == 0x48);

impl FixedRecord for MiiData {}

impl MiiData {
    /// System identifier.
    #[inline]
    pub fn system_id(&self) -> u64 {
        self.system_id.get()
    }

    /// Mii identifier.
    #[inline]
    pub fn mii_id(&self) -> u32 {
        self.mii_id.get()
    }

    /// MAC address formatted as `aa:bb:cc:dd:ee:ff`.
    pub fn mac_string(&self) -> String {
        self.mac
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Mii name, decoded with the lossy low-byte view.
    pub fn name(&self) -> String {
        self.mii_name.to_string_lossy()
    }

    /// Author name, decoded with the lossy low-byte view.
    pub fn author(&self) -> String {
        self.author_name.to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(MiiData::SIZE, 0x5C);
        assert_eq!(MiiData::default().encode().len(), 0x5C);
    }

    #[test]
    fn test_field_offsets() {
        let mut mii = MiiData::default();
        mii.magic = 0x03;
        mii.system_id = U64::new(0x0102_0304_0506_0708);
        mii.mii_id = U32::new(0xA1B2_C3D4);
        mii.mac = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01];
        mii.mii_details = MiiDetails::from_raw(0x1234);
        mii.mii_name.set("A").unwrap();
        mii.height = 0x40;
        mii.width = 0x41;
        mii.hair_style = 0x21;
        mii.eye_details = EyeDetails::from_raw(0x0A0B_0C0D);
        mii.mole_details = MoleDetails::from_raw(0xBEEF);
        mii.author_name.set("Z").unwrap();

        let bytes = mii.encode();
        assert_eq!(bytes[0x00], 0x03);
        assert_eq!(&bytes[0x04..0x0C], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&bytes[0x0C..0x10], &[0xA1, 0xB2, 0xC3, 0xD4]);
        assert_eq!(&bytes[0x10..0x16], &[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
        assert_eq!(&bytes[0x18..0x1A], &[0x12, 0x34]);
        assert_eq!(&bytes[0x1A..0x1C], &[0x41, 0x00]);
        assert_eq!(bytes[0x2E], 0x40);
        assert_eq!(bytes[0x2F], 0x41);
        assert_eq!(bytes[0x32], 0x21);
        assert_eq!(&bytes[0x34..0x38], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(&bytes[0x46..0x48], &[0xBE, 0xEF]);
        assert_eq!(&bytes[0x48..0x4A], &[0x5A, 0x00]);
    }

    #[test]
    fn test_roundtrip_bytes() {
        let bytes: Vec<u8> = (0..MII_DATA_SIZE as u8).map(|i| i.wrapping_mul(37)).collect();
        let mii = MiiData::decode(&bytes).unwrap();
        assert_eq!(mii.encode(), bytes);
        assert_eq!(MiiData::decode(&mii.encode()).unwrap(), mii);
    }

    #[test]
    fn test_decode_bit_groups() {
        let mut bytes = [0u8; MII_DATA_SIZE];
        bytes[0x01] = 0b0010_1101; // allow_copying=1, private=0, region=3, charset=2
        bytes[0x03] = 0x30; // origin_console = 3
        bytes[0x18] = 0x40; // favorite
        bytes[0x19] = 0x0E; // bday_month = 7

        let mii = MiiData::decode(&bytes).unwrap();
        assert_eq!(mii.mii_options.allow_copying(), 1);
        assert_eq!(mii.mii_options.is_private_name(), 0);
        assert_eq!(mii.mii_options.region_lock(), 3);
        assert_eq!(mii.mii_options.char_set(), 2);
        assert_eq!(mii.console_identity.origin_console(), 3);
        assert_eq!(mii.mii_details.favorite(), 1);
        assert_eq!(mii.mii_details.bday_month(), 7);
    }

    #[test]
    fn test_mac_string() {
        let mut mii = MiiData::default();
        mii.mac = [0x00, 0x1f, 0x32, 0xab, 0xcd, 0xef];
        assert_eq!(mii.mac_string(), "00:1f:32:ab:cd:ef");
    }

    #[test]
    fn test_wrong_size() {
        assert!(MiiData::decode(&[0u8; MII_DATA_SIZE - 1]).is_err());
    }
}
