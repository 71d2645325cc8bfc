//! Lock-guarded page table handle for multi-threaded callers.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::common::config::PageTableConfig;
use crate::common::{FrameNumber, Result, VirtualAddress};
use crate::table::{HashPageTable, Occupancy, PageTableEntry, StatsSnapshot, Translation};

/// A cloneable, thread-safe handle to a [`HashPageTable`].
///
/// # Thread Safety
/// A single `Mutex` guards both the buckets and the statistics and is held
/// for the whole of each call, so concurrent writers cannot duplicate a
/// page inside a bucket or lose an update, and `hits + misses == lookups`
/// holds at every observation.
///
/// # Example
/// ```
/// use hashpt::{FrameNumber, SharedPageTable, VirtualAddress};
/// use std::thread;
///
/// let table = SharedPageTable::new(8, 4096).unwrap();
/// let writer = table.clone();
/// thread::spawn(move || {
///     writer.add_page_entry(VirtualAddress::new(0), FrameNumber::new(7)).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert!(table.lookup_page(VirtualAddress::new(0)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SharedPageTable {
    inner: Arc<Mutex<HashPageTable>>,
}

impl SharedPageTable {
    /// Create a shared table with unbounded chains.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if either size is zero.
    pub fn new(table_size: usize, page_size: u64) -> Result<Self> {
        HashPageTable::new(table_size, page_size).map(Self::from)
    }

    /// Create a shared table from a full config.
    pub fn with_config(config: PageTableConfig) -> Result<Self> {
        HashPageTable::with_config(config).map(Self::from)
    }

    /// See [`HashPageTable::add_page_entry`].
    pub fn add_page_entry(&self, va: VirtualAddress, frame: FrameNumber) -> Result<()> {
        self.inner.lock().add_page_entry(va, frame)
    }

    /// See [`HashPageTable::remove_page_entry`].
    pub fn remove_page_entry(&self, va: VirtualAddress) -> Option<FrameNumber> {
        self.inner.lock().remove_page_entry(va)
    }

    /// See [`HashPageTable::lookup_page`].
    pub fn lookup_page(&self, va: VirtualAddress) -> Option<Translation> {
        self.inner.lock().lookup_page(va)
    }

    /// See [`HashPageTable::contains`].
    pub fn contains(&self, va: VirtualAddress) -> bool {
        self.inner.lock().contains(va)
    }

    pub fn statistics_snapshot(&self) -> StatsSnapshot {
        self.inner.lock().statistics_snapshot()
    }

    pub fn dump_table(&self) -> Vec<(usize, Vec<PageTableEntry>)> {
        self.inner.lock().dump_table()
    }

    pub fn occupancy(&self) -> Occupancy {
        self.inner.lock().occupancy()
    }

    /// Hold the lock across several operations.
    ///
    /// Other handles block until the guard drops.
    pub fn lock(&self) -> MutexGuard<'_, HashPageTable> {
        self.inner.lock()
    }
}

impl From<HashPageTable> for SharedPageTable {
    fn from(table: HashPageTable) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }
}
