//! Frame number type.

use std::fmt;

/// Identifies a physical memory frame a page is mapped to.
///
/// Frames hold no data here; the number only drives address arithmetic.
///
/// # Example
/// ```
/// use hashpt::FrameNumber;
///
/// let frame = FrameNumber::new(100);
/// assert_eq!(frame.0, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameNumber(pub u64);

impl FrameNumber {
    /// Create a new FrameNumber.
    #[inline]
    pub fn new(number: u64) -> Self {
        FrameNumber(number)
    }
}

impl From<u64> for FrameNumber {
    fn from(number: u64) -> Self {
        FrameNumber(number)
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
