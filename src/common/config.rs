//! Configuration for the hashed page table.

use crate::common::{Error, Result};

/// Default number of buckets.
pub const DEFAULT_TABLE_SIZE: usize = 64;

/// Default size of a page in bytes (4KB).
///
/// Matches the OS page size on most systems.
pub const DEFAULT_PAGE_SIZE: u64 = 4096;

/// Construction parameters for a [`HashPageTable`](crate::HashPageTable).
///
/// `table_size` and `page_size` are fixed for the table's lifetime.
///
/// # Example
/// ```
/// use hashpt::PageTableConfig;
///
/// let config = PageTableConfig::default()
///     .table_size(8)
///     .max_chain_len(Some(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableConfig {
    /// Number of buckets.
    pub table_size: usize,

    /// Bytes per page. Used as both divisor and modulus base.
    pub page_size: u64,

    /// Maximum entries per bucket, or `None` for unbounded chains.
    pub max_chain_len: Option<usize>,
}

impl PageTableConfig {
    /// Create a config with the given geometry and unbounded chains.
    pub fn new(table_size: usize, page_size: u64) -> Self {
        Self {
            table_size,
            page_size,
            max_chain_len: None,
        }
    }

    /// Set the bucket count.
    pub fn table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Set the page size in bytes.
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Cap the number of entries a single bucket may hold.
    pub fn max_chain_len(mut self, max_chain_len: Option<usize>) -> Self {
        self.max_chain_len = max_chain_len;
        self
    }

    /// Check that the table can be built from this config.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if any size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.table_size == 0 {
            return Err(Error::invalid("table_size must be > 0"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid("page_size must be > 0"));
        }
        if self.max_chain_len == Some(0) {
            return Err(Error::invalid("max_chain_len must be > 0 when set"));
        }
        Ok(())
    }
}

impl Default for PageTableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE, DEFAULT_PAGE_SIZE)
    }
}
