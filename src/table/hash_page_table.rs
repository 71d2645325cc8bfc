//! Hash Page Table - the core address translation structure.
//!
//! The [`HashPageTable`] provides:
//! - Page number to frame number mappings, keyed by virtual address
//! - Chained buckets for collision resolution
//! - Lookup statistics (hits, misses, collisions)

use tracing::{debug, trace};

use crate::common::config::PageTableConfig;
use crate::common::{Error, FrameNumber, PageNumber, PhysicalAddress, Result, VirtualAddress};
use crate::table::{Bucket, Occupancy, PageTableEntry, StatsSnapshot, Translation};

/// Translates virtual addresses through a hash table with chained buckets.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                      HashPageTable                        │
/// │                                                           │
/// │  va ─▶ page = va / page_size ─▶ index = page % table_size │
/// │                                          │                │
/// │  ┌────────────────────────────────────── ▼ ────────────┐  │
/// │  │ buckets: Vec<Bucket>                                 │  │
/// │  │  [0] (0,100) → (8,104)                               │  │
/// │  │  [1] (1,101)                                         │  │
/// │  │  [2] ...                                             │  │
/// │  └──────────────────────────────────────────────────────┘  │
/// │  stats: lookups / hits / misses / collisions              │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// # Thread Safety
/// Not synchronized. Use [`SharedPageTable`](crate::SharedPageTable) to share
/// a table between threads.
///
/// # Usage
/// ```
/// use hashpt::{FrameNumber, HashPageTable, VirtualAddress};
///
/// let mut table = HashPageTable::new(8, 4096).unwrap();
/// table.add_page_entry(VirtualAddress::new(4096), FrameNumber::new(101)).unwrap();
///
/// let t = table.lookup_page(VirtualAddress::new(4100)).unwrap();
/// assert_eq!(t.frame_number, FrameNumber::new(101));
/// assert_eq!(t.offset, 4);
/// assert_eq!(t.physical_address.0, 101 * 4096 + 4);
///
/// // Page fault: no mapping for page 4
/// assert!(table.lookup_page(VirtualAddress::new(16384)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct HashPageTable {
    /// Fixed array of chains, one per hash index.
    buckets: Vec<Bucket>,

    /// Bytes per page (immutable after construction).
    page_size: u64,

    /// Optional cap on entries per bucket.
    max_chain_len: Option<usize>,

    /// Running usage counters.
    stats: StatsSnapshot,
}

impl HashPageTable {
    /// Create a table with `table_size` empty buckets and unbounded chains.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if either size is zero.
    pub fn new(table_size: usize, page_size: u64) -> Result<Self> {
        Self::with_config(PageTableConfig::new(table_size, page_size))
    }

    /// Create a table from a full config.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the config does not validate.
    pub fn with_config(config: PageTableConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            table_size = config.table_size,
            page_size = config.page_size,
            max_chain_len = ?config.max_chain_len,
            "creating hash page table"
        );

        Ok(Self {
            buckets: vec![Bucket::new(); config.table_size],
            page_size: config.page_size,
            max_chain_len: config.max_chain_len,
            stats: StatsSnapshot::new(),
        })
    }

    // ========================================================================
    // Address arithmetic
    // ========================================================================

    /// Number of buckets.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Bytes per page.
    #[inline]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// The page containing `va` (`va / page_size`).
    #[inline]
    pub fn page_number(&self, va: VirtualAddress) -> PageNumber {
        PageNumber(va.0 / self.page_size)
    }

    /// Position of `va` within its page (`va % page_size`).
    #[inline]
    pub fn offset(&self, va: VirtualAddress) -> u64 {
        va.0 % self.page_size
    }

    /// Bucket index for `va`: `(va / page_size) % table_size`.
    #[inline]
    pub fn hash(&self, va: VirtualAddress) -> usize {
        self.bucket_index(self.page_number(va))
    }

    #[inline]
    fn bucket_index(&self, page: PageNumber) -> usize {
        // The remainder is below table_size, which is a usize.
        (page.0 % self.buckets.len() as u64) as usize
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Map the page containing `va` to `frame`.
    ///
    /// An existing mapping for the same page is overwritten in place and
    /// never counts as a collision. A new entry appended to a bucket that
    /// was already non-empty counts as one collision.
    ///
    /// # Errors
    /// - `Error::AddressOverflow` if addresses in `frame` do not fit in u64
    /// - `Error::ChainFull` if a chain limit is configured and reached
    ///
    /// The table and its statistics are unchanged on error.
    pub fn add_page_entry(&mut self, va: VirtualAddress, frame: FrameNumber) -> Result<()> {
        self.check_frame(frame)?;

        let page = self.page_number(va);
        let index = self.bucket_index(page);
        let limit = self.max_chain_len;
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.find_mut(page) {
            trace!(%page, old = %entry.frame_number, new = %frame, index, "updating entry");
            entry.frame_number = frame;
            return Ok(());
        }

        if let Some(limit) = limit {
            if bucket.len() >= limit {
                return Err(Error::ChainFull {
                    bucket: index,
                    limit,
                });
            }
        }

        let collided = !bucket.is_empty();
        bucket.push(page, frame);

        if collided {
            self.stats.record_collision();
            trace!(%page, %frame, index, chain = self.buckets[index].len(), "collision");
        } else {
            trace!(%page, %frame, index, "inserted entry");
        }
        Ok(())
    }

    /// Remove the mapping for the page containing `va`.
    ///
    /// Returns the frame it was mapped to. Statistics are not touched.
    pub fn remove_page_entry(&mut self, va: VirtualAddress) -> Option<FrameNumber> {
        let page = self.page_number(va);
        let index = self.bucket_index(page);
        let removed = self.buckets[index].remove(page)?;
        trace!(%page, frame = %removed.frame_number, index, "removed entry");
        Some(removed.frame_number)
    }

    /// Reject frames whose last byte lies beyond the 64-bit address space.
    fn check_frame(&self, frame: FrameNumber) -> Result<()> {
        frame
            .0
            .checked_mul(self.page_size)
            .and_then(|base| base.checked_add(self.page_size - 1))
            .map(|_| ())
            .ok_or(Error::AddressOverflow {
                frame: frame.0,
                page_size: self.page_size,
            })
    }

    // ========================================================================
    // Public API: Translation
    // ========================================================================

    /// Translate `va` into a physical address.
    ///
    /// Returns `None` on a page fault; the caller decides how to handle it.
    /// Every call counts as one lookup and exactly one of hit or miss.
    pub fn lookup_page(&mut self, va: VirtualAddress) -> Option<Translation> {
        self.stats.record_lookup();

        match self.translate(va) {
            Some(translation) => {
                self.stats.record_hit();
                Some(translation)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Check whether the page containing `va` is mapped.
    ///
    /// Unlike [`lookup_page`](Self::lookup_page), this does not update statistics.
    pub fn contains(&self, va: VirtualAddress) -> bool {
        self.translate(va).is_some()
    }

    fn translate(&self, va: VirtualAddress) -> Option<Translation> {
        let page = self.page_number(va);
        let entry = self.buckets[self.bucket_index(page)].find(page)?;
        let offset = self.offset(va);

        // Cannot overflow: add_page_entry rejects frames past the address space.
        let physical = entry.frame_number.0 * self.page_size + offset;

        Some(Translation {
            page_number: page,
            frame_number: entry.frame_number,
            offset,
            physical_address: PhysicalAddress(physical),
        })
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Current usage counters.
    pub fn statistics_snapshot(&self) -> StatsSnapshot {
        self.stats
    }

    /// Non-empty buckets in ascending index order, entries in insertion order.
    pub fn dump_table(&self) -> Vec<(usize, Vec<PageTableEntry>)> {
        self.non_empty_buckets()
            .map(|(index, bucket)| (index, bucket.entries().to_vec()))
            .collect()
    }

    /// Borrowing form of [`dump_table`](Self::dump_table).
    pub fn non_empty_buckets(&self) -> impl Iterator<Item = (usize, &Bucket)> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
    }

    /// The bucket at `index`, or `None` if out of range.
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Total number of mapped pages.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// How the entries are spread over the buckets.
    pub fn occupancy(&self) -> Occupancy {
        let entries = self.len();
        Occupancy {
            entries,
            non_empty_buckets: self.non_empty_buckets().count(),
            longest_chain: self.buckets.iter().map(Bucket::len).max().unwrap_or(0),
            load_factor: entries as f64 / self.table_size() as f64,
        }
    }
}
