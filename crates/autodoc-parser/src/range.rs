use std::fmt;

use oxc_span::Span;
use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into the source text an entity was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: u32,
    pub end: u32,
}

impl SourceRange {
    /// Construct a new range from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");

        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true when the range has zero width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether the range contains a byte offset.
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether the range lies entirely within a text of `len` bytes.
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end as usize <= len
    }

    /// Borrow the text covered by this range.
    ///
    /// Returns `None` when the range does not fit `source` or does not fall on
    /// UTF-8 character boundaries, which only happens when `source` is not the
    /// text the range was derived from.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start as usize..self.end as usize)
    }
}

impl From<Span> for SourceRange {
    fn from(span: Span) -> Self {
        Self::new(span.start, span.end)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
