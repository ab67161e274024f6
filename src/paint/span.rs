//! Wrapped spans and the interval set used for containment queries
//!
//! Every span records the byte range of the escaped text it wraps, its
//! category and the pass that produced it. The set keeps two views:
//!
//! - `spans`: every span in insertion order, used for rendering;
//! - `covered`: the merged, sorted union of all spans, used to answer
//!   "does position P already sit inside wrapped markup" by binary search.

use super::category::Category;
use serde::{Serialize, Serializer};
use std::ops::Range;

/// A wrapped `[start, end)` range of the escaped buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    /// Index of the pass that produced this span
    pub pass: usize,
}

impl Span {
    pub fn new(range: Range<usize>, category: Category, pass: usize) -> Self {
        Span {
            start: range.start,
            end: range.end,
            category,
            pass,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when `other` lies entirely within this span
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two spans share no position
    pub fn is_disjoint(&self, other: &Span) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

/// Set of already-wrapped spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSet {
    spans: Vec<Span>,
    covered: Vec<Range<usize>>,
}

impl SpanSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans in insertion order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Whether `pos` falls inside any wrapped span
    pub fn contains(&self, pos: usize) -> bool {
        let idx = self.covered.partition_point(|r| r.start <= pos);
        idx > 0 && self.covered[idx - 1].end > pos
    }

    /// Add a span. Empty spans are ignored.
    pub fn insert(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        self.cover(span.range());
        self.spans.push(span);
    }

    fn cover(&mut self, range: Range<usize>) {
        // First interval that could touch or overlap `range`
        let first = self.covered.partition_point(|r| r.end < range.start);
        // One past the last interval that starts at or before `range.end`
        let last = self.covered.partition_point(|r| r.start <= range.end);

        if first >= last {
            self.covered.insert(first, range);
            return;
        }

        let merged =
            self.covered[first].start.min(range.start)..self.covered[last - 1].end.max(range.end);
        self.covered.splice(first..last, std::iter::once(merged));
    }
}

impl Serialize for SpanSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.spans.serialize(serializer)
    }
}

impl FromIterator<Span> for SpanSet {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        let mut set = SpanSet::new();
        for span in iter {
            set.insert(span);
        }
        set
    }
}
