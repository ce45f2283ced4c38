//! # Demand-Paged Memory Management with Swap
//!
//! A user-space simulation of a three-level demand-paged virtual memory
//! manager. An external harness drives it through three entry points:
//! construction ([`Mmu::new`]), scheduling ([`Mmu::run_proc`]), and
//! fault reporting ([`Mmu::page_fault`]).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Fault Handler (Mmu)                 │
//! │    • three-level table walk                         │
//! │    • missing-level synthesis                        │
//! │    • eviction reserve (FIFO, margin of 2)           │
//! └──────────┬──────────────────────────┬───────────────┘
//!            │                          │
//! ┌──────────▼──────────┐    ┌──────────▼───────────────┐
//! │   Swap Engines      │    │   Process Directory      │
//! │   • swap_out(n)     │    │   • control-block scan   │
//! │   • swap_in(slot)   │    │   • lazy admission       │
//! └──────────┬──────────┘    └──────────┬───────────────┘
//!            │                          │
//! ┌──────────▼──────────────────────────▼───────────────┐
//! │   Arenas and Queues                                 │
//! │   • physical / swap page arrays                     │
//! │   • free lists, resident FIFO                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Model
//!
//! Addresses are 8 bits, pages 4 bytes, table entries 1 byte, three
//! translation levels of 2 bits each. Replacement is strict FIFO over
//! leaf pages; interior tables and control blocks are permanent. See
//! [`mmu_paging`] for the entry encoding and [`mmu_addresses::layout`]
//! for the constants.
//!
//! All state lives in the [`Mmu`] value; there is no persistence and no
//! concurrency.

#![cfg_attr(not(any(test, doctest)), no_std)]

extern crate alloc;

mod memory;
mod mmu;
mod process;
mod queue;

pub use mmu::{Mmu, MmuError};
pub use process::{Cr3, ProcessId};

// The vocabulary types, re-exported for harness convenience.
pub use mmu_addresses::{FrameNumber, SwapSlot, VirtualAddress};
pub use mmu_paging::{EntryKind, Page, PageTableEntry};
