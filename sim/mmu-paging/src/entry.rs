//! The 1-byte page-table entry.
//!
//! Bit layout, low to high:
//!
//! ```text
//! | 0       | 1        | 7‒2            |
//! | present | reserved | frame number   |   present = 1
//! | 0       | slot (bits 7‒1)           |   present = 0
//! ```
//!
//! The two absent shapes are distinguished by the remaining seven bits:
//! all-zero means the entry was never populated, nonzero carries the
//! swap slot the page was evicted to. The shifts are asymmetric: a
//! frame number is stored as `pfn << 2`, a slot as `slot << 1`, and the
//! byte `0x00` stays reserved for the never-populated shape. Swap slot
//! 0 would encode to `0x00` as well; the allocator never hands it out.

use bitfield_struct::bitfield;
use mmu_addresses::{FrameNumber, SwapSlot};

/// A single page-table entry, used identically at all three levels.
///
/// - [`PageTableEntry::mapped`] builds `(pfn << 2) | 1`.
/// - [`PageTableEntry::swapped`] builds `slot << 1`.
/// - [`PageTableEntry::vacant`] is the all-zero, never-touched entry.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct PageTableEntry {
    /// Present (bit 0): set when the entry carries a frame number.
    pub present: bool,
    /// Frame number or swap slot, depending on `present` (bits 7‒1).
    #[bits(7)]
    field: u8,
}

/// Decoded shape of a [`PageTableEntry`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// All-zero entry: this translation was never populated.
    NeverMapped,
    /// Present entry pointing at a physical frame.
    Mapped(FrameNumber),
    /// Absent entry whose page was evicted to the given swap slot.
    Swapped(SwapSlot),
}

impl PageTableEntry {
    /// The all-zero, never-touched entry.
    #[inline]
    #[must_use]
    pub const fn vacant() -> Self {
        Self::new()
    }

    /// A present entry pointing at `frame`.
    #[inline]
    #[must_use]
    pub const fn mapped(frame: FrameNumber) -> Self {
        Self::new()
            .with_present(true)
            .with_field(frame.as_u8() << 1)
    }

    /// An absent entry recording the eviction target `slot`.
    ///
    /// The present bit stays clear; the slot occupies bits 7‒1.
    #[inline]
    #[must_use]
    pub const fn swapped(slot: SwapSlot) -> Self {
        Self::new().with_field(slot.as_u8())
    }

    /// The frame number of a present entry.
    ///
    /// Meaningful only when [`present`](Self::present) is set; prefer
    /// [`kind`](Self::kind) unless the caller already checked.
    #[inline]
    #[must_use]
    pub const fn frame(self) -> FrameNumber {
        FrameNumber::new(self.field() >> 1)
    }

    /// The swap slot of an absent-but-swapped entry (bits 7‒1).
    #[inline]
    #[must_use]
    pub const fn swap_slot(self) -> SwapSlot {
        SwapSlot::new(self.field())
    }

    /// Classify the entry into one of its three shapes.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> EntryKind {
        if self.present() {
            EntryKind::Mapped(self.frame())
        } else if self.field() != 0 {
            EntryKind::Swapped(self.swap_slot())
        } else {
            EntryKind::NeverMapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_encodes_shift_by_two() {
        let e = PageTableEntry::mapped(FrameNumber::new(4));
        assert_eq!(e.into_bits(), (4 << 2) | 1);
        assert!(e.present());
        assert_eq!(e.frame(), FrameNumber::new(4));
        assert_eq!(e.kind(), EntryKind::Mapped(FrameNumber::new(4)));
    }

    #[test]
    fn swapped_encodes_shift_by_one() {
        let e = PageTableEntry::swapped(SwapSlot::new(3));
        assert_eq!(e.into_bits(), 3 << 1);
        assert!(!e.present());
        assert_eq!(e.swap_slot(), SwapSlot::new(3));
        assert_eq!(e.kind(), EntryKind::Swapped(SwapSlot::new(3)));
    }

    #[test]
    fn vacant_is_the_zero_byte() {
        let e = PageTableEntry::vacant();
        assert_eq!(e.into_bits(), 0);
        assert_eq!(e.kind(), EntryKind::NeverMapped);
    }

    #[test]
    fn slot_extraction_matches_the_wire_mask() {
        // The absent-entry slot field is byte & 0xFE, shifted right once.
        let raw = PageTableEntry::from_bits(0b0101_0110);
        assert_eq!(raw.swap_slot().as_u8(), (0b0101_0110 & 0xFE) >> 1);
    }

    #[test]
    fn extreme_values_round_trip() {
        let hi = PageTableEntry::mapped(FrameNumber::new(63));
        assert_eq!(hi.into_bits(), 0b1111_1101);
        assert_eq!(hi.frame().as_u8(), 63);

        let slot = PageTableEntry::swapped(SwapSlot::new(127));
        assert_eq!(slot.into_bits(), 0b1111_1110);
        assert_eq!(slot.swap_slot().as_u8(), 127);
    }
}
