//! Friend profile block.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Region and language settings of the owning console.
///
/// All fields are single-byte codes as used by the 3DS config save.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(C)]
pub struct FriendProfile {
    pub region: u8,
    pub country: u8,
    pub area: u8,
    pub language: u8,
    pub platform: u8,
    pub padding: [u8; 3],
}

const _: () = assert!(std::mem::size_of::<FriendProfile>() == 8);
