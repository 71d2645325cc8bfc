//! hashpt - A hashed page table for virtual-to-physical address translation.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             hashpt                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          SharedPageTable (table/)  [optional]           │   │
//! │  │         Arc<Mutex<HashPageTable>> for threads            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              HashPageTable (table/)                      │   │
//! │  │   hash(va) = (va / page_size) % table_size              │   │
//! │  │   Vec<Bucket> of (PageNumber, FrameNumber) chains        │   │
//! │  │   StatsSnapshot: lookups / hits / misses / collisions    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Common (common/)                            │   │
//! │  │   PageNumber, FrameNumber, addresses, config, Error      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (identifiers, addresses, config, Error)
//! - [`table`] - The hash page table, its buckets and statistics
//!
//! # Quick Start
//! ```
//! use hashpt::{FrameNumber, HashPageTable, VirtualAddress};
//!
//! let mut table = HashPageTable::new(8, 4096).unwrap();
//! table.add_page_entry(VirtualAddress::new(0), FrameNumber::new(100)).unwrap();
//!
//! match table.lookup_page(VirtualAddress::new(12)) {
//!     Some(t) => assert_eq!(t.physical_address.0, 100 * 4096 + 12),
//!     None => unreachable!("page 0 is mapped"),
//! }
//! ```

pub mod common;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use common::config::{PageTableConfig, DEFAULT_PAGE_SIZE, DEFAULT_TABLE_SIZE};
pub use common::{Error, FrameNumber, PageNumber, PhysicalAddress, Result, VirtualAddress};

pub use table::{
    Bucket, HashPageTable, Occupancy, PageTableEntry, SharedPageTable, StatsSnapshot, Translation,
};
