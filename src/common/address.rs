//! Virtual and physical address types.

use std::fmt;

/// An address as seen by a process.
///
/// Unsigned by construction, so negative addresses cannot reach the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualAddress(pub u64);

impl VirtualAddress {
    /// Create a new VirtualAddress.
    #[inline]
    pub fn new(addr: u64) -> Self {
        VirtualAddress(addr)
    }
}

impl From<u64> for VirtualAddress {
    fn from(addr: u64) -> Self {
        VirtualAddress(addr)
    }
}

impl fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A translated address in physical memory: `frame * page_size + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysicalAddress(pub u64);

impl PhysicalAddress {
    /// Create a new PhysicalAddress.
    #[inline]
    pub fn new(addr: u64) -> Self {
        PhysicalAddress(addr)
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
