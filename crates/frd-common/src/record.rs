//! Fixed-size record decoding and encoding.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result};

/// A record with a byte-exact, fixed-size on-disk layout.
///
/// Implementors are `#[repr(C)]` zerocopy structs built from unaligned,
/// endian-aware fields, so decoding is a size check plus a copy and every
/// bit pattern of the right length is a valid record.
pub trait FixedRecord: FromBytes + IntoBytes + Immutable + KnownLayout + Sized {
    /// Size of the record in bytes.
    const SIZE: usize = std::mem::size_of::<Self>();

    /// Decode a record from exactly [`Self::SIZE`] bytes.
    ///
    /// Returns [`Error::Size`] if the buffer has any other length. The bytes
    /// are taken as-is: checksums and magic values are not touched.
    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::Size {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        Self::read_from_bytes(bytes).map_err(|_| Error::Size {
            expected: Self::SIZE,
            actual: bytes.len(),
        })
    }

    /// Encode the record into a new buffer of [`Self::SIZE`] bytes.
    fn encode(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Encode the record into `out`, which must be exactly [`Self::SIZE`] bytes.
    fn encode_into(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != Self::SIZE {
            return Err(Error::Size {
                expected: Self::SIZE,
                actual: out.len(),
            });
        }

        out.copy_from_slice(self.as_bytes());
        Ok(())
    }
}
