//! Fixed-length UTF-16 text slots.
//!
//! Names and comments in friend data are stored as fixed arrays of
//! little-endian UTF-16 code units, NUL-terminated when shorter than the
//! slot. Reading uses the same lossy view as the console's own tools: each
//! code unit becomes one character taken from its low byte, so anything
//! outside ASCII/Latin-1 does not survive decoding.

use std::fmt;

use zerocopy::byteorder::{LittleEndian, U16};
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::{Error, Result};

/// A text slot of exactly `N` UTF-16LE code units.
#[derive(Clone, Copy, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(transparent)]
pub struct Utf16Text<const N: usize>([U16<LittleEndian>; N]);

impl<const N: usize> Utf16Text<N> {
    /// Number of code units in the slot.
    pub const CAPACITY: usize = N;

    /// Encode `text` into a new slot.
    ///
    /// Returns [`Error::Length`] if `text` needs more than `N` code units and
    /// [`Error::Nul`] if it contains U+0000.
    pub fn new(text: &str) -> Result<Self> {
        let mut slot = Self::new_zeroed();
        slot.set(text)?;
        Ok(slot)
    }

    /// Build a slot from raw code units.
    pub fn from_units(units: [u16; N]) -> Self {
        Self(units.map(U16::new))
    }

    /// Raw code units, including anything after the terminator.
    pub fn units(&self) -> [u16; N] {
        self.0.map(U16::get)
    }

    /// Number of code units before the first NUL (or `N` if unterminated).
    pub fn len(&self) -> usize {
        self.0.iter().position(|unit| unit.get() == 0).unwrap_or(N)
    }

    /// Check if the slot holds an empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the slot, one character per code unit from its low byte.
    ///
    /// Decoding stops at the first NUL unit; units after it are ignored.
    pub fn to_string_lossy(&self) -> String {
        self.0[..self.len()]
            .iter()
            .map(|unit| char::from((unit.get() & 0xFF) as u8))
            .collect()
    }

    /// Overwrite the slot with `text`, zero-filling the remainder.
    ///
    /// Returns [`Error::Length`] if `text` needs more than `N` code units and
    /// [`Error::Nul`] if it contains U+0000. The slot is untouched on error.
    pub fn set(&mut self, text: &str) -> Result<()> {
        if let Some(position) = text.encode_utf16().position(|unit| unit == 0) {
            return Err(Error::Nul { position });
        }
        let actual = text.encode_utf16().count();
        if actual > N {
            return Err(Error::Length {
                capacity: N,
                actual,
            });
        }

        let mut units = text.encode_utf16();
        for slot in &mut self.0 {
            *slot = U16::new(units.next().unwrap_or(0));
        }
        Ok(())
    }
}

impl<const N: usize> Default for Utf16Text<N> {
    fn default() -> Self {
        Self::new_zeroed()
    }
}

impl<const N: usize> fmt::Display for Utf16Text<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<const N: usize> fmt::Debug for Utf16Text<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf16Text<{}>({:?})", N, self.to_string_lossy())
    }
}
