//! Typed per-level table indices.
//!
//! A virtual address carries one 2-bit index per translation level:
//!
//! - [`DirectoryIndex`]: VA bits `[7:6]`, selects the directory entry.
//! - [`MiddleIndex`]: VA bits `[5:4]`, selects the middle entry.
//! - [`LeafIndex`]: VA bits `[3:2]`, selects the leaf entry.
//!
//! Strongly typed to avoid mixing levels. Range is `0..4` (checked in
//! debug builds).

use mmu_addresses::VirtualAddress;
use mmu_addresses::layout::ENTRIES_PER_TABLE;

/// Positions a typed index inside a [`Page`](crate::Page) used as a table.
pub trait EntryIndex: Copy {
    /// Return the index as `usize` for table access.
    fn as_usize(self) -> usize;
}

macro_rules! level_index {
    ($(#[$doc:meta])* $name:ident, $shift:literal) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name(u8);

        impl $name {
            /// Build an index from a virtual address (extracts the
            /// level's 2-bit field).
            #[inline]
            #[must_use]
            pub const fn from(va: VirtualAddress) -> Self {
                Self::new((va.as_u8() >> $shift) & 0x3)
            }

            /// Construct from a raw `u8`.
            ///
            /// ### Debug assertions
            /// - Asserts `v < 4` in debug builds.
            #[inline]
            #[must_use]
            pub const fn new(v: u8) -> Self {
                debug_assert!((v as usize) < ENTRIES_PER_TABLE);
                Self(v)
            }
        }

        impl EntryIndex for $name {
            #[inline]
            fn as_usize(self) -> usize {
                usize::from(self.0)
            }
        }
    };
}

level_index!(
    /// Index into the root directory (derived from VA bits `[7:6]`).
    DirectoryIndex,
    6
);

level_index!(
    /// Index into a middle directory (derived from VA bits `[5:4]`).
    MiddleIndex,
    4
);

level_index!(
    /// Index into a leaf table (derived from VA bits `[3:2]`).
    LeafIndex,
    2
);

/// Split a virtual address into its three per-level indices.
#[inline]
#[must_use]
pub const fn split_indices(va: VirtualAddress) -> (DirectoryIndex, MiddleIndex, LeafIndex) {
    (
        DirectoryIndex::from(va),
        MiddleIndex::from(va),
        LeafIndex::from(va),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_field() {
        let (d, m, l) = split_indices(VirtualAddress::new(0b1110_0100));
        assert_eq!(d, DirectoryIndex::new(3));
        assert_eq!(m, MiddleIndex::new(2));
        assert_eq!(l, LeafIndex::new(1));
    }

    #[test]
    fn zero_address_hits_first_entries() {
        let (d, m, l) = split_indices(VirtualAddress::new(0));
        assert_eq!(d.as_usize(), 0);
        assert_eq!(m.as_usize(), 0);
        assert_eq!(l.as_usize(), 0);
    }

    #[test]
    fn offset_bits_are_ignored() {
        let (d, m, l) = split_indices(VirtualAddress::new(0b0001_0111));
        assert_eq!(d.as_usize(), 0);
        assert_eq!(m.as_usize(), 1);
        assert_eq!(l.as_usize(), 1);
    }
}
