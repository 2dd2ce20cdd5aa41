//! Byte spans into a tokenized line.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end` into the input line.
///
/// Layout: 8 bytes total. Lines never approach `u32::MAX` bytes, so offsets
/// are stored as `u32` like the rest of the crate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from a start offset and a byte length.
    #[inline]
    pub const fn at(start: u32, len: u32) -> Self {
        Span {
            start,
            end: start + len,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// The span as a `usize` range, for slicing.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
