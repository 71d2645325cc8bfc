//! Page number type.

use std::fmt;

/// Identifies a fixed-size virtual page.
///
/// A page number is a virtual address divided by the page size.
///
/// # Example
/// ```
/// use hashpt::PageNumber;
///
/// let page = PageNumber::new(8);
/// assert_eq!(page.0, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u64);

impl PageNumber {
    /// Create a new PageNumber.
    #[inline]
    pub fn new(number: u64) -> Self {
        PageNumber(number)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
