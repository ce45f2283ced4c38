//! The memory-management unit.
//!
//! [`Mmu`] owns both page arenas and the three queues, and implements
//! the whole fault-handling pipeline: walking the three table levels,
//! synthesizing missing interior tables, policing the free pool,
//! evicting resident leaves to swap under pressure, and reloading them
//! on the next reference.
//!
//! ## Highlights
//!
//! - [`Mmu::run_proc`] installs (or finds) a process's root directory
//!   and returns a checked [`Cr3`] handle.
//! - [`Mmu::page_fault`] resolves an unmapped access, allocating every
//!   missing level and recording the new leaf for FIFO replacement.
//! - [`Mmu::translate`] is the observational walk: no allocation, no
//!   admission, no mutation.
//!
//! ## Replacement policy
//!
//! Strict FIFO over **leaf** pages only. Interior tables and control
//! blocks are permanent once allocated. When the free pool cannot cover
//! a fault, the handler evicts `shortfall + 2` victims, leaving two
//! spare frames after the fault's own allocations.

use log::{debug, trace, warn};
use mmu_addresses::layout::{MAX_MEM_BITS, MAX_SWAP_BITS};
use mmu_addresses::{FrameNumber, SwapSlot, VirtualAddress};
use mmu_paging::{
    DirectoryIndex, EntryKind, LeafIndex, MiddleIndex, Page, PageTableEntry, split_indices,
};

use crate::memory::{PhysicalMemory, SwapMemory};
use crate::process::{self, Cr3, ProcessId};
use crate::queue::{Fifo, ResidentPage};

/// Extra victims evicted beyond the immediate shortfall. After a
/// successful eviction cycle the free list covers the fault's
/// allocations plus this many spare frames.
const EVICTION_MARGIN: usize = 2;

/// A failure surfaced to the driving harness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MmuError {
    /// `mem_bits` was zero or larger than the entry encoding allows.
    #[error("mem_bits must be between 1 and {MAX_MEM_BITS}, got {0}")]
    InvalidMemBits(u32),
    /// `swap_bits` was larger than the entry encoding allows.
    #[error("swap_bits must be at most {MAX_SWAP_BITS}, got {0}")]
    InvalidSwapBits(u32),
    /// The physical free list cannot cover a required allocation.
    #[error("out of physical frames")]
    OutOfFrames,
    /// Eviction could not place `requested` pages into swap.
    #[error("swap space exhausted while evicting {requested} page(s)")]
    SwapExhausted {
        /// Number of victims the failed eviction asked for.
        requested: usize,
    },
    /// A root directory frame lies outside physical memory.
    #[error("root directory frame {0} lies outside physical memory")]
    RootOutOfRange(FrameNumber),
}

/// Where a table walk terminated.
enum Walk {
    /// The leaf entry is present; `va` already maps this frame.
    Mapped(FrameNumber),
    /// Directory and middle levels are present, the leaf entry is not.
    /// `swapped` carries the eviction slot if the page was swapped out.
    LeafFault {
        middle: FrameNumber,
        table: FrameNumber,
        swapped: Option<SwapSlot>,
    },
    /// The directory entry is present, the middle entry is not.
    MiddleFault { middle: FrameNumber },
    /// The directory entry itself is missing.
    DirectoryFault,
}

/// The demand-paged memory-management unit.
///
/// Single-threaded and non-reentrant: the harness drives it one call
/// at a time, and every call runs to completion.
#[derive(Debug)]
pub struct Mmu {
    phys: PhysicalMemory,
    swap: SwapMemory,
    phys_free: Fifo<FrameNumber>,
    swap_free: Fifo<SwapSlot>,
    resident: Fifo<ResidentPage>,
}

impl Mmu {
    /// Build a simulator with `2^mem_bits` physical frames and
    /// `2^swap_bits` swap slots, all zeroed, all free.
    ///
    /// Swap slot 0 stays out of the free list: it would encode to the
    /// never-touched entry byte (see [`PageTableEntry`]).
    ///
    /// # Errors
    /// - [`MmuError::InvalidMemBits`] if `mem_bits` is zero or above
    ///   [`MAX_MEM_BITS`].
    /// - [`MmuError::InvalidSwapBits`] if `swap_bits` is above
    ///   [`MAX_SWAP_BITS`].
    pub fn new(mem_bits: u32, swap_bits: u32) -> Result<Self, MmuError> {
        if mem_bits == 0 || mem_bits > MAX_MEM_BITS {
            return Err(MmuError::InvalidMemBits(mem_bits));
        }
        if swap_bits > MAX_SWAP_BITS {
            return Err(MmuError::InvalidSwapBits(swap_bits));
        }

        let frame_count: u8 = 1 << mem_bits;
        let slot_count: u8 = 1 << swap_bits;

        let mut phys_free = Fifo::new();
        for f in 0..frame_count {
            phys_free.enqueue(FrameNumber::new(f));
        }
        let mut swap_free = Fifo::new();
        for s in 1..slot_count {
            swap_free.enqueue(SwapSlot::new(s));
        }

        debug!("mmu up: {frame_count} frames, {slot_count} swap slots");
        Ok(Self {
            phys: PhysicalMemory::new(usize::from(frame_count)),
            swap: SwapMemory::new(usize::from(slot_count)),
            phys_free,
            swap_free,
            resident: Fifo::new(),
        })
    }

    /// Prepare `pid` for execution: find its root directory, admitting
    /// the process first if it was never seen, and hand back the
    /// bounds-checked [`Cr3`] handle.
    ///
    /// # Errors
    /// - [`MmuError::OutOfFrames`] if admission needs two frames and
    ///   fewer are free.
    /// - [`MmuError::RootOutOfRange`] if the recorded root frame lies
    ///   outside physical memory.
    pub fn run_proc(&mut self, pid: ProcessId) -> Result<Cr3, MmuError> {
        let root = self.directory_root(pid)?;
        if root.as_usize() >= self.phys.frame_count() {
            warn!("pid {pid}: root frame {root} is out of range");
            return Err(MmuError::RootOutOfRange(root));
        }
        Ok(Cr3::new(root))
    }

    /// Resolve a fault at `va` for `pid`.
    ///
    /// Walks the three levels from the process's root, tops up the free
    /// pool by eviction when it cannot cover the missing levels, then
    /// allocates and links every missing table plus the leaf frame. A
    /// leaf that was swapped out is reloaded from its slot. Faulting on
    /// an address that is already mapped succeeds without touching
    /// anything.
    ///
    /// Frames are drawn only after eviction succeeds, so a failed fault
    /// leaves every table entry unchanged.
    ///
    /// # Errors
    /// - [`MmuError::SwapExhausted`] if eviction cannot place enough
    ///   victims (the harness-visible resource-exhaustion case).
    /// - [`MmuError::OutOfFrames`] if the process could not be admitted.
    pub fn page_fault(&mut self, pid: ProcessId, va: VirtualAddress) -> Result<(), MmuError> {
        let root = self.directory_root(pid)?;
        let (di, mi, li) = split_indices(va);

        match self.walk(root, di, mi, li) {
            Walk::Mapped(frame) => {
                trace!("pid {pid}: {va} already maps frame {frame}, nothing to do");
                Ok(())
            }
            Walk::LeafFault {
                middle,
                table,
                swapped,
            } => {
                self.reserve(1)?;
                let data = match swapped {
                    Some(slot) => self.swap_in(slot)?,
                    None => self.take_frame()?,
                };
                self.link(pid, va, root, middle, table, data);
                Ok(())
            }
            Walk::MiddleFault { middle } => {
                self.reserve(2)?;
                let table = self.take_frame()?;
                let data = self.take_frame()?;
                self.link(pid, va, root, middle, table, data);
                Ok(())
            }
            Walk::DirectoryFault => {
                self.reserve(3)?;
                let middle = self.take_frame()?;
                let table = self.take_frame()?;
                let data = self.take_frame()?;
                self.link(pid, va, root, middle, table, data);
                Ok(())
            }
        }
    }

    /// Translate `va` for `pid` without faulting.
    ///
    /// Returns the mapped frame if the whole chain is present. Unknown
    /// pids are not admitted.
    #[must_use]
    pub fn translate(&self, pid: ProcessId, va: VirtualAddress) -> Option<FrameNumber> {
        let root = self.find_directory_root(pid)?;
        let (di, mi, li) = split_indices(va);
        match self.walk(root, di, mi, li) {
            Walk::Mapped(frame) => Some(frame),
            _ => None,
        }
    }

    /// Borrow a frame's page, e.g. to resolve a [`Cr3`] or inspect a
    /// control block.
    #[must_use]
    pub fn page(&self, frame: FrameNumber) -> &Page {
        self.phys.page(frame)
    }

    /// Borrow a frame's page mutably. The harness writes user data
    /// through this.
    pub fn page_mut(&mut self, frame: FrameNumber) -> &mut Page {
        self.phys.page_mut(frame)
    }

    /// Number of physical frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.phys.frame_count()
    }

    /// Number of swap slots (including the reserved slot 0).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.swap.slot_count()
    }

    /// Frames currently on the free list.
    #[must_use]
    pub fn free_frame_count(&self) -> usize {
        self.phys_free.len()
    }

    /// Swap slots currently on the free list.
    #[must_use]
    pub fn free_slot_count(&self) -> usize {
        self.swap_free.len()
    }

    /// Leaf pages currently resident (eviction candidates).
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Find the root directory of `pid`, admitting the process when it
    /// has no control block yet. Admission consumes two frames: the
    /// root directory and the control block.
    fn directory_root(&mut self, pid: ProcessId) -> Result<FrameNumber, MmuError> {
        if let Some(root) = self.find_directory_root(pid) {
            return Ok(root);
        }
        if self.phys_free.len() < 2 {
            warn!("cannot admit pid {pid}: fewer than two free frames");
            return Err(MmuError::OutOfFrames);
        }

        let root = self.take_frame()?;
        let pcb = self.take_frame()?;
        process::write_control_block(self.phys.page_mut(pcb), pid, root);
        debug!("admitted pid {pid}: directory frame {root}, control block frame {pcb}");
        Ok(root)
    }

    /// Scan physical memory for the control block of `pid`.
    fn find_directory_root(&self, pid: ProcessId) -> Option<FrameNumber> {
        self.phys.pages().find_map(|page| {
            match process::read_control_block(*page) {
                Some((owner, root)) if owner == pid => Some(root),
                _ => None,
            }
        })
    }

    /// Resolve `va`'s chain from `root` as far as it goes.
    fn walk(&self, root: FrameNumber, di: DirectoryIndex, mi: MiddleIndex, li: LeafIndex) -> Walk {
        let EntryKind::Mapped(middle) = self.phys.page(root).entry(di).kind() else {
            return Walk::DirectoryFault;
        };
        let EntryKind::Mapped(table) = self.phys.page(middle).entry(mi).kind() else {
            return Walk::MiddleFault { middle };
        };
        match self.phys.page(table).entry(li).kind() {
            EntryKind::Mapped(frame) => Walk::Mapped(frame),
            EntryKind::Swapped(slot) => Walk::LeafFault {
                middle,
                table,
                swapped: Some(slot),
            },
            EntryKind::NeverMapped => Walk::LeafFault {
                middle,
                table,
                swapped: None,
            },
        }
    }

    /// Ensure the free list can cover `need` allocations while keeping
    /// the [`EVICTION_MARGIN`] spare.
    ///
    /// # Errors
    /// Propagates [`MmuError::SwapExhausted`] from the eviction pass.
    fn reserve(&mut self, need: usize) -> Result<(), MmuError> {
        let free = self.phys_free.len();
        if free <= need {
            self.swap_out(need - free + EVICTION_MARGIN)?;
        }
        Ok(())
    }

    /// Evict the `count` oldest resident leaves to swap.
    ///
    /// Per victim: copy the frame into a free slot, zero the frame,
    /// return it to the free list, and rewrite the owning leaf entry to
    /// remember the slot. All-or-nothing: the queues are checked up
    /// front and no victim is touched on failure.
    fn swap_out(&mut self, count: usize) -> Result<(), MmuError> {
        if self.swap_free.len() < count || self.resident.len() < count {
            warn!(
                "cannot evict {count} page(s): {} resident, {} free slot(s)",
                self.resident.len(),
                self.swap_free.len()
            );
            return Err(MmuError::SwapExhausted { requested: count });
        }

        for _ in 0..count {
            let Some(victim) = self.resident.dequeue() else {
                return Err(MmuError::SwapExhausted { requested: count });
            };
            let Some(slot) = self.swap_free.dequeue() else {
                return Err(MmuError::SwapExhausted { requested: count });
            };

            *self.swap.page_mut(slot) = *self.phys.page(victim.frame);
            *self.phys.page_mut(victim.frame) = Page::zeroed();
            self.phys_free.enqueue(victim.frame);
            self.phys
                .page_mut(victim.table)
                .set_entry(victim.index, PageTableEntry::swapped(slot));
            trace!("swap out: frame {} -> slot {slot}", victim.frame);
        }
        Ok(())
    }

    /// Reload a swapped page into a free frame and release its slot.
    fn swap_in(&mut self, slot: SwapSlot) -> Result<FrameNumber, MmuError> {
        let frame = self.take_frame()?;
        *self.phys.page_mut(frame) = *self.swap.page(slot);
        self.swap_free.enqueue(slot);
        trace!("swap in: slot {slot} -> frame {frame}");
        Ok(frame)
    }

    /// Draw one frame from the free list.
    fn take_frame(&mut self) -> Result<FrameNumber, MmuError> {
        let Some(frame) = self.phys_free.dequeue() else {
            warn!("physical free list ran dry");
            return Err(MmuError::OutOfFrames);
        };
        Ok(frame)
    }

    /// Write the chain `root -> middle -> table -> data` top-down and
    /// record the new resident leaf.
    fn link(
        &mut self,
        pid: ProcessId,
        va: VirtualAddress,
        root: FrameNumber,
        middle: FrameNumber,
        table: FrameNumber,
        data: FrameNumber,
    ) {
        let (di, mi, li) = split_indices(va);
        self.phys
            .page_mut(root)
            .set_entry(di, PageTableEntry::mapped(middle));
        self.phys
            .page_mut(middle)
            .set_entry(mi, PageTableEntry::mapped(table));
        self.phys
            .page_mut(table)
            .set_entry(li, PageTableEntry::mapped(data));
        self.resident.enqueue(ResidentPage {
            pid,
            frame: data,
            table,
            index: li,
        });
        trace!("pid {pid}: mapped {va} -> frame {data} (middle {middle}, table {table})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mmu(mem_bits: u32, swap_bits: u32) -> Mmu {
        Mmu::new(mem_bits, swap_bits).expect("valid configuration")
    }

    fn pid(v: u8) -> ProcessId {
        ProcessId::new(v)
    }

    fn va(v: u8) -> VirtualAddress {
        VirtualAddress::new(v)
    }

    fn pfn(v: u8) -> FrameNumber {
        FrameNumber::new(v)
    }

    /// Raw entry byte at `index` of the table living in `frame`.
    fn entry_byte(m: &Mmu, frame: u8, index: usize) -> u8 {
        m.page(pfn(frame)).bytes()[index]
    }

    #[test]
    fn rejects_unencodable_configurations() {
        assert_eq!(Mmu::new(0, 2).unwrap_err(), MmuError::InvalidMemBits(0));
        assert_eq!(Mmu::new(7, 2).unwrap_err(), MmuError::InvalidMemBits(7));
        assert_eq!(Mmu::new(4, 8).unwrap_err(), MmuError::InvalidSwapBits(8));
    }

    #[test]
    fn swap_slot_zero_stays_reserved() {
        let m = mmu(1, 1);
        assert_eq!(m.slot_count(), 2);
        assert_eq!(m.free_slot_count(), 1);
    }

    #[test]
    fn admission_lays_out_root_and_control_block() {
        let mut m = mmu(2, 2);

        let cr3 = m.run_proc(pid(1)).unwrap();
        assert_eq!(cr3.frame(), pfn(0));
        assert_eq!(m.page(pfn(1)).bytes(), &[0xFF, 0x01, 0x00, 0x00]);
        assert_eq!(m.free_frame_count(), 2);

        // A second schedule finds the existing control block.
        assert_eq!(m.run_proc(pid(1)).unwrap(), cr3);
        assert_eq!(m.free_frame_count(), 2);
    }

    #[test]
    fn distinct_processes_get_distinct_roots() {
        let mut m = mmu(4, 4);
        assert_eq!(m.run_proc(pid(1)).unwrap().frame(), pfn(0));
        assert_eq!(m.run_proc(pid(2)).unwrap().frame(), pfn(2));
        assert_eq!(m.run_proc(pid(1)).unwrap().frame(), pfn(0));
        assert_eq!(m.free_frame_count(), 12);
    }

    #[test]
    fn run_proc_rejects_a_root_outside_memory() {
        let mut m = mmu(4, 4);
        // A forged control block pointing past the last frame.
        *m.page_mut(pfn(5)).bytes_mut() = [0xFF, 9, 63, 0];

        assert_eq!(
            m.run_proc(pid(9)).unwrap_err(),
            MmuError::RootOutOfRange(pfn(63))
        );
    }

    #[test]
    fn first_fault_fails_on_a_tiny_memory() {
        // Four frames: root and control block leave two free, the fault
        // needs three, and the margin asks for three evictions with
        // nothing resident yet.
        let mut m = mmu(2, 2);
        m.run_proc(pid(1)).unwrap();

        assert_eq!(
            m.page_fault(pid(1), va(0x00)).unwrap_err(),
            MmuError::SwapExhausted { requested: 3 }
        );
        assert_eq!(*m.page(pfn(0)), Page::zeroed());
        assert_eq!(m.free_frame_count(), 2);
        assert_eq!(m.translate(pid(1), va(0x00)), None);
    }

    #[test]
    fn fault_builds_all_three_levels() {
        let mut m = mmu(4, 4);
        m.run_proc(pid(1)).unwrap();

        m.page_fault(pid(1), va(0x00)).unwrap();

        assert_eq!(entry_byte(&m, 0, 0), (2 << 2) | 1);
        assert_eq!(entry_byte(&m, 2, 0), (3 << 2) | 1);
        assert_eq!(entry_byte(&m, 3, 0), (4 << 2) | 1);
        assert_eq!(m.translate(pid(1), va(0x00)), Some(pfn(4)));
        assert_eq!(m.resident_count(), 1);
        assert_eq!(m.free_frame_count(), 11);
    }

    #[test]
    fn sibling_leaf_reuses_interior_tables() {
        let mut m = mmu(4, 4);
        m.run_proc(pid(1)).unwrap();
        m.page_fault(pid(1), va(0x00)).unwrap();

        m.page_fault(pid(1), va(0x04)).unwrap();

        assert_eq!(m.page(pfn(3)).bytes(), &[0x11, 0x15, 0x00, 0x00]);
        assert_eq!(m.translate(pid(1), va(0x04)), Some(pfn(5)));
        assert_eq!(m.resident_count(), 2);
        assert_eq!(m.free_frame_count(), 10);
    }

    #[test]
    fn fault_on_a_mapped_address_changes_nothing() {
        let mut m = mmu(4, 4);
        m.run_proc(pid(1)).unwrap();
        m.page_fault(pid(1), va(0x00)).unwrap();

        m.page_fault(pid(1), va(0x00)).unwrap();
        m.page_fault(pid(1), va(0x03)).unwrap();

        assert_eq!(m.resident_count(), 1);
        assert_eq!(m.free_frame_count(), 11);
        assert_eq!(m.translate(pid(1), va(0x00)), Some(pfn(4)));
    }

    /// Drive a 16-frame memory to the brink: nine leaves resident, one
    /// frame left on the free list.
    fn fill_to_pressure(m: &mut Mmu) {
        m.run_proc(pid(1)).unwrap();
        for a in [0x00u8, 0x04, 0x08, 0x0C, 0x10, 0x14, 0x18, 0x1C, 0x20] {
            m.page_fault(pid(1), va(a)).unwrap();
        }
        assert_eq!(m.free_frame_count(), 1);
        assert_eq!(m.resident_count(), 9);
    }

    #[test]
    fn eviction_rewrites_leaf_entries_in_fifo_order() {
        let mut m = mmu(4, 4);
        fill_to_pressure(&mut m);
        *m.page_mut(pfn(4)).bytes_mut() = [0xDE, 0xAD, 0xBE, 0xEF];

        // One frame free, the fault needs one: evict (1 - 1) + 2 = 2.
        m.page_fault(pid(1), va(0x24)).unwrap();

        // The two oldest leaves (frames 4 and 5, both under table 3)
        // left in arrival order, into slots 1 and 2.
        assert_eq!(entry_byte(&m, 3, 0), 1 << 1);
        assert_eq!(entry_byte(&m, 3, 1), 2 << 1);
        assert_eq!(m.translate(pid(1), va(0x00)), None);
        assert_eq!(m.translate(pid(1), va(0x04)), None);

        // Vacated frames are zeroed and back on the free list; the
        // fault consumed one frame, leaving exactly the margin.
        assert_eq!(*m.page(pfn(4)), Page::zeroed());
        assert_eq!(m.free_frame_count(), 2);
        assert_eq!(m.free_slot_count(), 13);
        assert_eq!(m.resident_count(), 8);

        // Accounting: 2 free + 8 resident + 6 permanent (root, control
        // block, one middle, three leaf tables) = 16 frames.
        assert_eq!(m.free_frame_count() + m.resident_count() + 6, m.frame_count());
    }

    #[test]
    fn refault_swaps_the_page_back_in() {
        let mut m = mmu(4, 4);
        fill_to_pressure(&mut m);
        *m.page_mut(pfn(4)).bytes_mut() = [0xDE, 0xAD, 0xBE, 0xEF];
        m.page_fault(pid(1), va(0x24)).unwrap();

        m.page_fault(pid(1), va(0x00)).unwrap();

        // The oldest free frame is the one frame 4 vacated; the page
        // comes back with its bytes intact and the slot is released.
        assert_eq!(m.translate(pid(1), va(0x00)), Some(pfn(4)));
        assert_eq!(m.page(pfn(4)).bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(entry_byte(&m, 3, 0), (4 << 2) | 1);
        assert_eq!(m.free_slot_count(), 14);
        assert_eq!(m.free_frame_count(), 1);
        assert_eq!(m.resident_count(), 9);
    }

    #[test]
    fn root_directories_survive_fault_storms() {
        let mut m = mmu(4, 4);
        let before = m.run_proc(pid(1)).unwrap();
        fill_to_pressure(&mut m);
        m.page_fault(pid(1), va(0x24)).unwrap();
        m.page_fault(pid(1), va(0x00)).unwrap();

        assert_eq!(m.run_proc(pid(1)).unwrap(), before);
    }

    #[test]
    fn eviction_order_is_global_across_processes() {
        let mut m = mmu(4, 4);
        m.run_proc(pid(1)).unwrap(); // root 0, control block 1
        m.run_proc(pid(2)).unwrap(); // root 2, control block 3

        // Interleave leaves until one free frame remains. Chains:
        // pid 1 middle 4, table 5; pid 2 middle 7, table 8.
        m.page_fault(pid(1), va(0x00)).unwrap(); // data 6
        m.page_fault(pid(2), va(0x00)).unwrap(); // data 9
        m.page_fault(pid(1), va(0x04)).unwrap(); // data 10
        m.page_fault(pid(2), va(0x04)).unwrap(); // data 11
        m.page_fault(pid(1), va(0x08)).unwrap(); // data 12
        m.page_fault(pid(2), va(0x08)).unwrap(); // data 13
        m.page_fault(pid(1), va(0x0C)).unwrap(); // data 14
        assert_eq!(m.free_frame_count(), 1);

        // The next fault evicts two victims: the oldest leaf of *each*
        // process, in arrival order.
        m.page_fault(pid(2), va(0x0C)).unwrap();

        assert_eq!(entry_byte(&m, 5, 0), 1 << 1);
        assert_eq!(entry_byte(&m, 8, 0), 2 << 1);
        assert_eq!(m.translate(pid(1), va(0x00)), None);
        assert_eq!(m.translate(pid(2), va(0x00)), None);
        assert_eq!(m.translate(pid(1), va(0x04)), Some(pfn(10)));
        assert_eq!(m.translate(pid(2), va(0x04)), Some(pfn(11)));
        assert_eq!(m.translate(pid(2), va(0x0C)), Some(pfn(15)));
        assert_eq!(m.free_frame_count(), 2);
        assert_eq!(m.resident_count(), 6);
    }

    #[test]
    fn exhausted_swap_fails_the_fault_and_keeps_tables_intact() {
        // swap_bits = 0: the only slot is the reserved slot 0, so no
        // eviction can ever succeed.
        let mut m = mmu(4, 0);
        fill_to_pressure(&mut m);

        assert_eq!(
            m.page_fault(pid(1), va(0x24)).unwrap_err(),
            MmuError::SwapExhausted { requested: 2 }
        );
        assert_eq!(m.free_frame_count(), 1);
        assert_eq!(m.resident_count(), 9);
        assert_eq!(entry_byte(&m, 13, 1), 0);
        assert_eq!(m.translate(pid(1), va(0x20)), Some(pfn(14)));
    }
}
