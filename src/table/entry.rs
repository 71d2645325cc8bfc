//! Page table entries and translation results.

use crate::common::{FrameNumber, PageNumber, PhysicalAddress};

/// One (page number, frame number) mapping held in a bucket.
///
/// Within a single bucket, page numbers are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    pub page_number: PageNumber,
    pub frame_number: FrameNumber,
}

impl PageTableEntry {
    /// Create a new entry.
    #[inline]
    pub fn new(page_number: PageNumber, frame_number: FrameNumber) -> Self {
        Self {
            page_number,
            frame_number,
        }
    }
}

/// The result of a successful lookup.
///
/// `physical_address == frame_number * page_size + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub page_number: PageNumber,
    pub frame_number: FrameNumber,
    /// Position within the page (`virtual_address % page_size`).
    pub offset: u64,
    pub physical_address: PhysicalAddress,
}
