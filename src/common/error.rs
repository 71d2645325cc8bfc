//! Error types for hashpt.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the page table.
///
/// A page fault is NOT an error: [`lookup_page`](crate::HashPageTable::lookup_page)
/// reports a missing mapping as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The table cannot be built with the given parameters.
    ///
    /// Raised at construction only; no partial table is produced.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },

    /// The frame's physical addresses do not fit in 64 bits.
    #[error("Frame {frame} overflows the physical address space with page size {page_size}")]
    AddressOverflow { frame: u64, page_size: u64 },

    /// Adding a new page would grow the bucket past its configured limit.
    #[error("Bucket {bucket} is full ({limit} entries)")]
    ChainFull { bucket: usize, limit: usize },
}

impl Error {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Error::InvalidConfiguration { reason }
    }
}
