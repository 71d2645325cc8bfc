//! Hashed page table.
//!
//! Translates virtual addresses to physical addresses through a fixed array
//! of chained buckets indexed by `(va / page_size) % table_size`.
//!
//! # Components
//! - [`HashPageTable`] - The translation table
//! - [`Bucket`] - One chain of entries sharing a hash index
//! - [`PageTableEntry`] / [`Translation`] - Stored mappings and lookup results
//! - [`StatsSnapshot`] / [`Occupancy`] - Usage statistics
//! - [`SharedPageTable`] - Mutex-guarded handle for multi-threaded use

mod bucket;
mod entry;
mod hash_page_table;
mod shared;
mod stats;

pub use bucket::Bucket;
pub use entry::{PageTableEntry, Translation};
pub use hash_page_table::HashPageTable;
pub use shared::SharedPageTable;
pub use stats::{Occupancy, StatsSnapshot};
