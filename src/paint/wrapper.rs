//! Overlap-aware wrapper
//!
//! Runs one rule over the buffer. Matches are found with standard global
//! semantics (non-overlapping, left to right, always advancing past empty
//! matches). A match whose start is already covered by an earlier pass's
//! span is kept as plain text; every other match gets its wraps recorded.
//!
//! Containment is only tested at the match start. A match that begins
//! outside every span may still enclose spans further right (a comment
//! over a transient class-name); those end up nested inside the new wrap.

use super::buffer::PaintBuffer;
use super::rule::Rule;
use super::span::Span;

/// Counters for one pass, reported through tracing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub wrapped: usize,
    pub inside: usize,
    pub rejected: usize,
}

/// Apply `rule` as pass number `pass`, returning the new buffer
pub fn wrap_pass(buffer: PaintBuffer, rule: &Rule, pass: usize) -> PaintBuffer {
    let (new_spans, stats) = scan(&buffer, rule, pass);

    tracing::trace!(
        rule = rule.name(),
        pass,
        wrapped = stats.wrapped,
        inside = stats.inside,
        rejected = stats.rejected,
        "pass complete"
    );

    buffer.with_spans(new_spans)
}

/// Collect the spans `rule` would add to `buffer` without building a new one
pub fn scan(buffer: &PaintBuffer, rule: &Rule, pass: usize) -> (Vec<Span>, PassStats) {
    let mut spans = Vec::new();
    let mut stats = PassStats::default();

    for caps in rule.pattern().captures_iter(buffer.text()) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.is_empty() {
            continue;
        }
        if buffer.is_wrapped(whole.start()) {
            stats.inside += 1;
            continue;
        }
        if rule.should_skip(whole.as_str()) {
            stats.rejected += 1;
            continue;
        }

        stats.wrapped += 1;
        spans.extend(rule.wraps().iter().filter_map(|&(group, category)| {
            caps.get(group)
                .filter(|m| !m.is_empty())
                .map(|m| Span::new(m.range(), category, pass))
        }));
    }

    (spans, stats)
}
