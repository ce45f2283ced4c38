//! # Virtual Address and Frame Number Types
//!
//! Strongly typed wrappers for the raw numbers the paged-memory simulator
//! shuffles around: 8-bit virtual addresses, physical frame numbers, and
//! swap slot numbers.
//!
//! ## Overview
//!
//! The simulator indexes two flat arenas (physical memory and swap) and
//! decodes narrow virtual addresses through a three-level page table.
//! Mixing up those integer spaces is the classic failure mode, so each
//! one gets a zero-cost `repr(transparent)` newtype:
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`VirtualAddress`] | An 8-bit address as faulted by a process. |
//! | [`FrameNumber`] | Index of a 4-byte frame in physical memory. |
//! | [`SwapSlot`] | Index of a 4-byte slot in swap memory. |
//!
//! The fixed design constants (page size, level widths, addressable
//! bounds) live in [`layout`].
//!
//! ## Design Notes
//!
//! - All accessors are `const fn` and zero-cost in release builds.
//! - The types implement `Copy`, `Eq`, `Ord`, and `Hash`, making them
//!   suitable as map keys.
//! - Constructors debug-assert the encodable ranges (6-bit frame field,
//!   7-bit slot field) so corruption is caught at the boundary.

#![cfg_attr(not(any(test, doctest)), no_std)]

pub mod layout;
mod frame_number;
mod swap_slot;
mod virtual_address;

pub use frame_number::FrameNumber;
pub use swap_slot::SwapSlot;
pub use virtual_address::VirtualAddress;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_address_offset() {
        let va = VirtualAddress::new(0b1110_0111);
        assert_eq!(va.as_u8(), 0xE7);
        assert_eq!(va.offset(), 0b11);
        assert_eq!(VirtualAddress::new(0xE4).offset(), 0);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", VirtualAddress::new(0x2A)), "0x2A");
        assert_eq!(format!("{:?}", VirtualAddress::new(0x2A)), "VA(0x2A)");
        assert_eq!(format!("{}", FrameNumber::new(7)), "7");
        assert_eq!(format!("{:?}", FrameNumber::new(7)), "PFN(7)");
        assert_eq!(format!("{}", SwapSlot::new(12)), "12");
        assert_eq!(format!("{:?}", SwapSlot::new(12)), "SLOT(12)");
    }

    #[test]
    fn round_trips() {
        let f = FrameNumber::new(63);
        assert_eq!(f.as_u8(), 63);
        assert_eq!(f.as_usize(), 63);

        let s = SwapSlot::new(127);
        assert_eq!(s.as_u8(), 127);
        assert_eq!(s.as_usize(), 127);
    }
}
