//! Bit-range descriptors for the 29-bit extended CAN identifier.
//! Every OpenLCB field is a contiguous run of bits, so a field is fully
//! described by its offset (LSB position) and width. Descriptors are `const`
//! and can be laid out in tables.
use crate::error::BitFieldError;

/// Contiguous bit range inside a `u32` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Human-readable name, used in build errors.
    pub name: &'static str,
    /// Position of the least significant bit.
    pub offset: u8,
    /// Number of bits (1..=32).
    pub width: u8,
}

impl BitField {
    /// Describe a field of `width` bits starting at bit `offset`.
    ///
    /// Panics at compile time when used in a `const` with an empty field or
    /// one that runs past bit 31.
    pub const fn new(name: &'static str, offset: u8, width: u8) -> Self {
        assert!(width >= 1 && (offset as u32 + width as u32) <= 32);
        Self {
            name,
            offset,
            width,
        }
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// Mask selecting the field in place.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.max() << self.offset
    }

    /// Read the field out of `raw`, right-aligned.
    #[inline]
    pub const fn extract(&self, raw: u32) -> u32 {
        (raw & self.mask()) >> self.offset
    }

    /// Read a single-bit field as a flag.
    #[inline]
    pub const fn flag(&self, raw: u32) -> bool {
        self.extract(raw) != 0
    }

    /// Return `raw` with the field replaced by `value`.
    pub fn insert(&self, raw: u32, value: u32) -> Result<u32, BitFieldError> {
        if value > self.max() {
            return Err(BitFieldError::ValueTooWide {
                value,
                width: self.width,
            });
        }
        Ok((raw & !self.mask()) | (value << self.offset))
    }
}
