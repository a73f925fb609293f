//! Bit-field extraction and packing.
//!
//! Mii records pack several small attributes into one storage integer. Each
//! such storage word is modelled as a *bit group*: a newtype over the stored
//! (endian-aware) integer with one getter/setter pair per named sub-field.
//! Offsets count from bit 0, the least significant bit of the logical value
//! after conversion from storage byte order.
//!
//! Groups are declared with [`bit_group!`](crate::bit_group), which checks at
//! compile time that every declared range is non-empty, fits the storage word
//! and does not overlap its neighbours.

use zerocopy::byteorder::{ByteOrder, U16, U32, U64};

use crate::{Error, Result};

/// A native unsigned integer that can back a bit group.
pub trait BitStorage: Copy + Eq + Into<u64> {
    /// Width of the integer in bits.
    const BITS: u32;

    /// Convert from `u64`, dropping bits above `BITS`.
    fn truncate(value: u64) -> Self;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),+) => {
        $(
            impl BitStorage for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn truncate(value: u64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

impl_bit_storage!(u8, u16, u32, u64);

/// A stored word as it appears in a record, possibly byte-swapped.
///
/// Single bytes are stored as plain `u8`; wider words use zerocopy's
/// endian-aware integers so the byte order is part of the layout.
pub trait StorageWord: Copy {
    /// Native integer type used for bit arithmetic.
    type Native: BitStorage;

    /// Read the logical value.
    fn get(self) -> Self::Native;

    /// Store a logical value.
    fn from_native(value: Self::Native) -> Self;
}

impl StorageWord for u8 {
    type Native = u8;

    #[inline]
    fn get(self) -> u8 {
        self
    }

    #[inline]
    fn from_native(value: u8) -> Self {
        value
    }
}

macro_rules! impl_storage_word {
    ($($wrapper:ident => $native:ty),+) => {
        $(
            impl<O: ByteOrder> StorageWord for $wrapper<O> {
                type Native = $native;

                #[inline]
                fn get(self) -> $native {
                    $wrapper::get(self)
                }

                #[inline]
                fn from_native(value: $native) -> Self {
                    $wrapper::new(value)
                }
            }
        )+
    };
}

impl_storage_word!(U16 => u16, U32 => u32, U64 => u64);

/// Mask with the low `width` bits set.
#[inline]
pub const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Widest sub-field a bit group may declare.
pub const MAX_FIELD_WIDTH: u32 = 8;

/// Extract bits `[offset, offset + width)` of `word`.
///
/// Bits past the end of the word read as zero.
#[inline]
pub fn extract<T: BitStorage>(word: T, offset: u32, width: u32) -> u64 {
    word.into().checked_shr(offset).unwrap_or(0) & mask(width)
}

/// Replace bits `[offset, offset + width)` of `word` with `value`.
///
/// Bits outside the range are left unchanged. Returns [`Error::Span`] if the
/// range is empty or runs past the end of the word, and [`Error::Range`] if
/// `value` needs more than `width` bits.
#[inline]
pub fn pack<T: BitStorage>(word: T, offset: u32, width: u32, value: u64) -> Result<T> {
    if width == 0 || width > T::BITS || offset > T::BITS - width {
        return Err(Error::Span {
            offset,
            width,
            bits: T::BITS,
        });
    }
    if value > mask(width) {
        return Err(Error::Range { value, width });
    }

    let field_mask = mask(width) << offset;
    let raw = (word.into() & !field_mask) | (value << offset);
    Ok(T::truncate(raw))
}

/// One named sub-field of a bit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Sub-field name, as printed by the dump layer.
    pub name: &'static str,
    /// Offset of the lowest bit.
    pub offset: u32,
    /// Number of bits.
    pub width: u32,
}

impl BitField {
    /// Create a new field descriptor.
    pub const fn new(name: &'static str, offset: u32, width: u32) -> Self {
        Self { name, offset, width }
    }

    /// Mask of the bits this field occupies within its storage word.
    pub const fn mask(&self) -> u64 {
        mask(self.width) << self.offset
    }

    /// Extract this field from a storage word.
    #[inline]
    pub fn extract<T: BitStorage>(&self, word: T) -> u64 {
        extract(word, self.offset, self.width)
    }

    /// Pack `value` into this field of a storage word.
    #[inline]
    pub fn pack<T: BitStorage>(&self, word: T, value: u64) -> Result<T> {
        pack(word, self.offset, self.width, value)
    }
}

/// Check a bit group layout: every field is 1 to [`MAX_FIELD_WIDTH`] bits
/// wide, fits in `storage_bits` and shares no bit with another field.
///
/// Used in `const` assertions by [`bit_group!`](crate::bit_group).
pub const fn validate_layout(fields: &[BitField], storage_bits: u32) -> bool {
    let mut used = 0u64;
    let mut i = 0;
    while i < fields.len() {
        let field = &fields[i];
        if field.width == 0 || field.width > MAX_FIELD_WIDTH || field.width > storage_bits {
            return false;
        }
        if field.offset > storage_bits - field.width {
            return false;
        }
        if used & field.mask() != 0 {
            return false;
        }
        used |= field.mask();
        i += 1;
    }
    true
}

/// Declare a bit group: one storage word plus named sub-field accessors.
///
/// Each table row is `getter, setter: offset, width;`. Getters return the
/// sub-field as `u8`, so widths above
/// [`MAX_FIELD_WIDTH`](crate::bitfield::MAX_FIELD_WIDTH) fail the layout
/// check along with empty, out-of-range and overlapping fields. Setters return
/// [`Error::Range`](crate::Error::Range) when the value does not fit.
///
/// The invoking crate must depend on `zerocopy` directly, since the derives
/// resolve through `::zerocopy`.
///
/// ```
/// use frd_common::{bit_group, BigEndian, U16};
///
/// bit_group! {
///     /// Two nibbles in a big-endian word.
///     pub struct Pair(U16<BigEndian>) {
///         low, set_low: 0, 4;
///         high, set_high: 4, 4;
///     }
/// }
///
/// let mut pair = Pair::default();
/// pair.set_high(0xA).unwrap();
/// assert_eq!(pair.raw(), 0x00A0);
/// assert!(pair.set_low(0x10).is_err());
/// ```
#[macro_export]
macro_rules! bit_group {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($storage:ty) {
            $(
                $(#[$field_meta:meta])*
                $field:ident, $setter:ident: $offset:literal, $width:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            Hash,
            zerocopy::FromBytes,
            zerocopy::IntoBytes,
            zerocopy::Immutable,
            zerocopy::KnownLayout,
            zerocopy::Unaligned,
        )]
        #[repr(transparent)]
        $vis struct $name($storage);

        const _: () = assert!(
            $crate::bitfield::validate_layout(
                $name::FIELDS,
                <<$storage as $crate::bitfield::StorageWord>::Native as $crate::bitfield::BitStorage>::BITS,
            ),
            concat!("overlapping, out-of-range or too wide bit field in ", stringify!($name)),
        );

        impl $name {
            /// Sub-field table, in declaration order.
            pub const FIELDS: &'static [$crate::bitfield::BitField] = &[
                $($crate::bitfield::BitField::new(stringify!($field), $offset, $width),)+
            ];

            /// Build the group from its logical storage value.
            #[inline]
            pub fn from_raw(
                raw: <$storage as $crate::bitfield::StorageWord>::Native,
            ) -> Self {
                Self(<$storage as $crate::bitfield::StorageWord>::from_native(raw))
            }

            /// Logical storage value, in native byte order.
            #[inline]
            pub fn raw(&self) -> <$storage as $crate::bitfield::StorageWord>::Native {
                <$storage as $crate::bitfield::StorageWord>::get(self.0)
            }

            /// Iterate over `(name, value)` for every sub-field.
            pub fn fields(&self) -> impl Iterator<Item = (&'static str, u64)> {
                let raw = self.raw();
                Self::FIELDS.iter().map(move |field| (field.name, field.extract(raw)))
            }

            $(
                $(#[$field_meta])*
                #[inline]
                pub fn $field(&self) -> u8 {
                    $crate::bitfield::extract(self.raw(), $offset, $width) as u8
                }

                #[inline]
                pub fn $setter(&mut self, value: u8) -> $crate::Result<()> {
                    let raw = $crate::bitfield::pack(self.raw(), $offset, $width, u64::from(value))?;
                    *self = Self::from_raw(raw);
                    Ok(())
                }
            )+
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field()))+
                    .finish()
            }
        }
    };
}
