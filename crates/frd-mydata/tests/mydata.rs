//! End-to-end decoding of hand-built `mydata` images.

use frd_common::{crc, FixedRecord};
use frd_mydata::{Dump, Error, MyData, MAGIC_MY_DATA, MYDATA_SIZE};

/// Write `text` as UTF-16LE code units at `offset`.
fn put_utf16(buf: &mut [u8], offset: usize, text: &str) {
    for (i, unit) in text.encode_utf16().enumerate() {
        buf[offset + i * 2..offset + i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
    }
}

/// Build a `mydata` image the way the console lays it out.
fn build_image() -> Vec<u8> {
    let mut buf = vec![0u8; MYDATA_SIZE];
    buf[0x00..0x04].copy_from_slice(b"DMPF");
    buf[0x04..0x08].copy_from_slice(&0x2010_1021u32.to_le_bytes());
    put_utf16(&mut buf, 0x30, "Hello there");
    buf[0x58..0x60].copy_from_slice(&[1, 49, 2, 1, 0, 0, 0, 0]);
    buf[0x60..0x68].copy_from_slice(&0x0000_0123_4567_89ABu64.to_le_bytes());
    put_utf16(&mut buf, 0x68, "00112233AABBC");
    put_utf16(&mut buf, 0x82, "CW40000001");
    put_utf16(&mut buf, 0xA2, "Nintendo");

    // Mii at 0xBB
    let mii = 0xBB;
    buf[mii] = 0x03;
    buf[mii + 0x01] = 0x01; // allow_copying
    buf[mii + 0x03] = 0x30; // origin_console = 3DS
    buf[mii + 0x04..mii + 0x0C].copy_from_slice(&0xCAFE_F00D_1234_5678u64.to_be_bytes());
    buf[mii + 0x0C..mii + 0x10].copy_from_slice(&0x8000_0042u32.to_be_bytes());
    buf[mii + 0x10..mii + 0x16].copy_from_slice(&[0x00, 0x1f, 0x32, 0x01, 0x02, 0x03]);
    // sex=1, bday_month=4, bday_day=15, shirt_color=9, favorite=1
    let details: u16 = 1 | (4 << 1) | (15 << 5) | (9 << 10) | (1 << 14);
    buf[mii + 0x18..mii + 0x1A].copy_from_slice(&details.to_be_bytes());
    put_utf16(&mut buf, mii + 0x1A, "Mii");
    buf[mii + 0x2E] = 64;
    buf[mii + 0x2F] = 32;
    // eye: style=26, rotation=4, yposition=12
    let eye: u32 = 26 | (4 << 16) | (12 << 25);
    buf[mii + 0x34..mii + 0x38].copy_from_slice(&eye.to_be_bytes());
    // mole: enable=1, xpos=2, ypos=20
    let mole: u16 = 1 | (2 << 6) | (20 << 11);
    buf[mii + 0x46..mii + 0x48].copy_from_slice(&mole.to_be_bytes());
    put_utf16(&mut buf, mii + 0x48, "Author");

    let checksum = crc::crc16(&buf[mii..mii + 0x5E]);
    buf[mii + 0x5E..mii + 0x60].copy_from_slice(&checksum.to_be_bytes());
    buf
}

#[test]
fn decodes_every_region() {
    let image = build_image();
    let data = MyData::parse(&image).unwrap();

    assert!(data.magic_matches());
    assert_eq!(data.comment(), "Hello there");
    assert_eq!(data.profile.region, 1);
    assert_eq!(data.profile.country, 49);
    assert_eq!(data.profile.area, 2);
    assert_eq!(data.profile.language, 1);
    assert_eq!(data.local_friend_code_seed(), 0x0000_0123_4567_89AB);
    assert_eq!(data.hex_identifier(), "00112233AABBC");
    assert_eq!(data.hex_identifier_value(), Some(0x0011_2233_AABB_C));
    assert_eq!(data.serial_number(), "CW40000001");
    assert_eq!(data.display_name(), "Nintendo");

    let checksummed = &data.mii_data;
    assert!(checksummed.is_checksum_valid());

    let mii = checksummed.mii_data();
    assert_eq!(mii.magic, 3);
    assert_eq!(mii.mii_options.allow_copying(), 1);
    assert_eq!(mii.console_identity.origin_console(), 3);
    assert_eq!(mii.system_id(), 0xCAFE_F00D_1234_5678);
    assert_eq!(mii.mii_id(), 0x8000_0042);
    assert_eq!(mii.mac_string(), "00:1f:32:01:02:03");
    assert_eq!(mii.mii_details.sex(), 1);
    assert_eq!(mii.mii_details.bday_month(), 4);
    assert_eq!(mii.mii_details.bday_day(), 15);
    assert_eq!(mii.mii_details.shirt_color(), 9);
    assert_eq!(mii.mii_details.favorite(), 1);
    assert_eq!(mii.name(), "Mii");
    assert_eq!(mii.height, 64);
    assert_eq!(mii.width, 32);
    assert_eq!(mii.eye_details.style(), 26);
    assert_eq!(mii.eye_details.rotation(), 4);
    assert_eq!(mii.eye_details.yposition(), 12);
    assert_eq!(mii.mole_details.enable(), 1);
    assert_eq!(mii.mole_details.xpos(), 2);
    assert_eq!(mii.mole_details.ypos(), 20);
    assert_eq!(mii.author(), "Author");
}

#[test]
fn encode_reproduces_input() {
    let image = build_image();
    let data = MyData::decode(&image).unwrap();
    assert_eq!(data.encode(), image);

    // Arbitrary bytes round-trip too, checksum and magic included
    let mut state = 0x2545_F491u32;
    let noise: Vec<u8> = (0..MYDATA_SIZE)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect();
    let decoded = MyData::decode(&noise).unwrap();
    assert_eq!(decoded.encode(), noise);
    assert_eq!(MyData::decode(&decoded.encode()).unwrap(), decoded);
}

#[test]
fn wrong_magic_is_reported_not_rejected() {
    let mut image = build_image();
    image[0..4].copy_from_slice(b"XXXX");

    let data = MyData::parse(&image).unwrap();
    assert!(!data.magic_matches());
    match data.check_magic() {
        Err(Error::InvalidMagic { expected, actual }) => {
            assert_eq!(expected, MAGIC_MY_DATA);
            assert_eq!(actual, u32::from_le_bytes(*b"XXXX"));
        }
        other => panic!("expected InvalidMagic, got {other:?}"),
    }
}

#[test]
fn corrupted_mii_keeps_stored_checksum() {
    let mut image = build_image();
    image[0xBB + 0x2E] ^= 0x80; // height

    let data = MyData::parse(&image).unwrap();
    assert!(!data.mii_data.is_checksum_valid());
    assert_eq!(data.encode(), image);

    let dump = Dump::from_my_data(&data);
    assert_eq!(
        dump.section("mii_data").unwrap().get("checksum_valid"),
        Some("false")
    );
}

#[test]
fn rejects_wrong_length() {
    let image = build_image();
    assert!(MyData::parse(&image[..MYDATA_SIZE - 1]).is_err());

    let mut longer = image.clone();
    longer.push(0);
    assert!(MyData::parse(&longer).is_err());
}
