//! The 4-byte page.
//!
//! Every frame in physical memory and every slot in swap holds one
//! [`Page`]. Depending on who owns the frame, the same four bytes are
//! read as raw user data, as a table of four 1-byte entries, or as a
//! process-control record; the table view lives here, the record view
//! with the process directory.

use crate::entry::PageTableEntry;
use crate::level::EntryIndex;
use mmu_addresses::layout::PAGE_SIZE;

/// A 4-byte page: the unit of physical memory, swap, and page tables.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Page([u8; PAGE_SIZE]);

impl Page {
    /// A fully zeroed page (as a table: all entries never-touched).
    #[inline]
    #[must_use]
    pub const fn zeroed() -> Self {
        Self([0; PAGE_SIZE])
    }

    /// Borrow the raw bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    /// Borrow the raw bytes mutably.
    #[inline]
    pub const fn bytes_mut(&mut self) -> &mut [u8; PAGE_SIZE] {
        &mut self.0
    }

    /// Read the table entry at `i`.
    #[inline]
    #[must_use]
    pub fn entry<I: EntryIndex>(self, i: I) -> PageTableEntry {
        PageTableEntry::from_bits(self.0[i.as_usize()])
    }

    /// Write the table entry at `i`.
    #[inline]
    pub fn set_entry<I: EntryIndex>(&mut self, i: I, e: PageTableEntry) {
        self.0[i.as_usize()] = e.into_bits();
    }
}

impl Default for Page {
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}
