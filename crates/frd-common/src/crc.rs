//! CRC-16/CCITT hashing utilities.
//!
//! Mii records carry a CRC-16 with polynomial `0x1021`, initial value `0`,
//! no input/output reflection and no final XOR (the catalogue name for this
//! parameter set is CRC-16/XMODEM). See <https://www.3dbrew.org/wiki/Mii#Checksum>.

use crc::{Crc, CRC_16_XMODEM};

/// CCITT generator polynomial.
pub const POLY: u16 = CRC_16_XMODEM.poly;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Compute the CRC-16 of a byte slice.
#[inline]
pub fn crc16(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Compute the CRC-16 of a byte slice, continuing from a previous value.
#[inline]
pub fn crc16_append(crc: u16, data: &[u8]) -> u16 {
    let mut digest = CRC16.digest_with_initial(crc);
    digest.update(data);
    digest.finalize()
}
