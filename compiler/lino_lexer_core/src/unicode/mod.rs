//! Unicode identifier classification.
//!
//! Two static range tables, [`ID_START`] and [`ID_CONTINUE`], decide which
//! non-ASCII codepoints may begin or continue a symbol. ASCII letters,
//! digits, and `_` are handled by the cursor's byte fast paths and are not
//! present in the tables.

mod tables;

/// Sorted set of inclusive `(low, high)` codepoint ranges.
///
/// Membership is a binary search over range lower bounds. The tables shipped
/// with this crate are generated sorted and disjoint; a table built from
/// unsorted ranges must use [`contains_linear`](Self::contains_linear).
#[derive(Clone, Copy, Debug)]
pub struct UnicodeTable {
    ranges: &'static [(u32, u32)],
}

/// Codepoints that may begin a symbol (Unicode `ID_Start`, non-ASCII part).
pub static ID_START: UnicodeTable = UnicodeTable::new(tables::ID_START_RANGES);

/// Codepoints that may continue a symbol (Unicode `ID_Continue`, non-ASCII part).
pub static ID_CONTINUE: UnicodeTable = UnicodeTable::new(tables::ID_CONTINUE_RANGES);

impl UnicodeTable {
    /// Wrap a static range list.
    pub const fn new(ranges: &'static [(u32, u32)]) -> Self {
        UnicodeTable { ranges }
    }

    /// The underlying inclusive ranges.
    pub fn ranges(&self) -> &'static [(u32, u32)] {
        self.ranges
    }

    /// Returns `true` if some range contains `code`.
    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        // Index of the first range whose low bound is above `code`; the only
        // candidate is the one just before it.
        let idx = self.ranges.partition_point(|&(low, _)| low <= code);
        idx > 0 && code <= self.ranges[idx - 1].1
    }

    /// Linear membership test with no ordering requirement on the ranges.
    pub fn contains_linear(&self, code: u32) -> bool {
        self.ranges
            .iter()
            .any(|&(low, high)| low <= code && code <= high)
    }
}
