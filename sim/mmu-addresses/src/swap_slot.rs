use crate::layout::MAX_SWAP_BITS;
use core::fmt;

/// A **swap slot number**: index into the swap memory arena.
///
/// Newtype over `u8`. An absent page-table entry carries the slot in a
/// 7-bit field, so valid slots are `0..128`; the constructor asserts
/// this in debug builds.
///
/// ### Notes
/// - Slot 0 exists in the arena but is never handed out: a swapped
///   entry encodes `slot << 1`, and slot 0 would collide with the
///   all-zero "never touched" entry byte.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SwapSlot(u8);

impl SwapSlot {
    /// Construct from a raw `u8`.
    ///
    /// ### Debug assertions
    /// - Asserts `v < 128` in debug builds.
    #[inline]
    #[must_use]
    pub const fn new(v: u8) -> Self {
        debug_assert!(v < 1 << MAX_SWAP_BITS);
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Return the slot number as `usize` for arena access.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SwapSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLOT({})", self.0)
    }
}

impl fmt::Display for SwapSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
