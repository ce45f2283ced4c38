//! Process identity and the in-memory process directory records.
//!
//! The simulator keeps no kernel-side bookkeeping for processes: a
//! process-control block is an ordinary frame whose first byte carries
//! the sentinel `0xFF`, followed by the pid and the frame number of the
//! process's root directory. Admission writes one; lookup scans
//! physical memory for one.

use core::fmt;
use mmu_addresses::FrameNumber;
use mmu_addresses::layout::MAX_MEM_BITS;
use mmu_paging::Page;

/// Marks a frame as a process-control block (byte 0).
const CONTROL_BLOCK_SENTINEL: u8 = 0xFF;

/// A process identifier, as reported by the driving harness.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ProcessId(u8);

impl ProcessId {
    #[inline]
    #[must_use]
    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PID({})", self.0)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ProcessId {
    #[inline]
    fn from(v: u8) -> Self {
        Self::new(v)
    }
}

/// The control-register-3 analogue: a checked handle on a process's
/// root directory frame.
///
/// Produced by [`Mmu::run_proc`](crate::Mmu::run_proc); resolve it to
/// the root page via [`Mmu::page`](crate::Mmu::page).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cr3 {
    root: FrameNumber,
}

impl Cr3 {
    #[inline]
    pub(crate) const fn new(root: FrameNumber) -> Self {
        Self { root }
    }

    /// The frame holding the process's root directory.
    #[inline]
    #[must_use]
    pub const fn frame(self) -> FrameNumber {
        self.root
    }
}

impl fmt::Display for Cr3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cr3 -> frame {}", self.root)
    }
}

/// Turn `page` into the control block of `pid`, rooted at `root`.
pub(crate) fn write_control_block(page: &mut Page, pid: ProcessId, root: FrameNumber) {
    *page.bytes_mut() = [CONTROL_BLOCK_SENTINEL, pid.as_u8(), root.as_u8(), 0];
}

/// Decode `page` as a control block, returning `(pid, root)` when the
/// sentinel matches.
///
/// The root field must be an encodable frame number; a sentinel-leading
/// page that fails that check is treated as ordinary data.
pub(crate) fn read_control_block(page: Page) -> Option<(ProcessId, FrameNumber)> {
    let bytes = *page.bytes();
    if bytes[0] == CONTROL_BLOCK_SENTINEL && bytes[2] < 1 << MAX_MEM_BITS {
        Some((ProcessId::new(bytes[1]), FrameNumber::new(bytes[2])))
    } else {
        None
    }
}
