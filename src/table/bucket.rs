//! Bucket - one chain of the hash page table.

use crate::common::{FrameNumber, PageNumber};
use crate::table::PageTableEntry;

/// An insertion-ordered chain of entries whose pages hash to the same index.
///
/// Collisions are resolved by a linear scan of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    entries: Vec<PageTableEntry>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Find the entry for `page`, scanning in insertion order.
    pub fn find(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.entries.iter().find(|e| e.page_number == page)
    }

    pub(crate) fn find_mut(&mut self, page: PageNumber) -> Option<&mut PageTableEntry> {
        self.entries.iter_mut().find(|e| e.page_number == page)
    }

    /// Append a new entry. The caller guarantees `page` is not present.
    pub(crate) fn push(&mut self, page: PageNumber, frame: FrameNumber) {
        debug_assert!(self.find(page).is_none(), "duplicate page in bucket");
        self.entries.push(PageTableEntry::new(page, frame));
    }

    /// Remove the entry for `page`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, page: PageNumber) -> Option<PageTableEntry> {
        let pos = self.entries.iter().position(|e| e.page_number == page)?;
        Some(self.entries.remove(pos))
    }

    /// Entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageTableEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a PageTableEntry;
    type IntoIter = std::slice::Iter<'a, PageTableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
