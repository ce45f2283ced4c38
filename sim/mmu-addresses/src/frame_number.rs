use crate::layout::MAX_MEM_BITS;
use core::fmt;

/// A **physical frame number** (pfn): index into the physical memory
/// arena.
///
/// Newtype over `u8`. A page-table entry carries the pfn in a 6-bit
/// field, so valid frame numbers are `0..64`; the constructor asserts
/// this in debug builds.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// Construct from a raw `u8`.
    ///
    /// ### Debug assertions
    /// - Asserts `v < 64` in debug builds.
    #[inline]
    #[must_use]
    pub const fn new(v: u8) -> Self {
        debug_assert!(v < 1 << MAX_MEM_BITS);
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Return the frame number as `usize` for arena access.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PFN({})", self.0)
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
