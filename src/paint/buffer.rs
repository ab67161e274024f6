//! The working buffer threaded through the passes
//!
//! The escaped text never changes once built. Each pass hands back a new
//! `PaintBuffer` that owns the same text plus a larger span set, so markup
//! only exists at render time and a later pass can never see (or match
//! inside) the wrap markers of an earlier one.

use super::category::Category;
use super::escape::escape;
use super::span::{Span, SpanSet};
use serde::Serialize;

/// Options controlling how wraps are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// First class of every wrap; `token` gives `<span class="token keyword">`
    pub class_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            class_prefix: "token".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        RenderOptions {
            class_prefix: prefix.into(),
        }
    }

    fn open_marker(&self, category: Category) -> String {
        if self.class_prefix.is_empty() {
            format!("<span class=\"{}\">", category)
        } else {
            format!("<span class=\"{} {}\">", self.class_prefix, category)
        }
    }
}

pub(crate) const CLOSE_MARKER: &str = "</span>";

/// Escaped text plus the spans wrapped so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaintBuffer {
    text: String,
    spans: SpanSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MarkerKind {
    Close,
    Open,
}

impl PaintBuffer {
    /// Escape `source` into a fresh buffer with no spans
    pub fn from_source(source: &str) -> Self {
        Self::from_escaped(escape(source))
    }

    /// Wrap text that is already escaped
    pub fn from_escaped(text: impl Into<String>) -> Self {
        PaintBuffer {
            text: text.into(),
            spans: SpanSet::new(),
        }
    }

    /// The escaped text, without any markup
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        self.spans.spans()
    }

    pub fn is_wrapped(&self, pos: usize) -> bool {
        self.spans.contains(pos)
    }

    /// Return a new buffer carrying `new_spans` on top of the existing ones
    pub fn with_spans(self, new_spans: impl IntoIterator<Item = Span>) -> Self {
        let PaintBuffer { text, mut spans } = self;
        for span in new_spans {
            spans.insert(span);
        }
        PaintBuffer { text, spans }
    }

    /// Render with the default `token` class prefix
    pub fn to_html(&self) -> String {
        self.render(&RenderOptions::default())
    }

    /// Render the text with every span wrapped in a `<span>` marker.
    ///
    /// At a shared position closes come before opens. Among opens the span
    /// reaching further opens first; for equal ranges the later pass is outer.
    pub fn render(&self, options: &RenderOptions) -> String {
        let spans = self.spans.spans();
        if spans.is_empty() {
            return self.text.clone();
        }

        let mut markers: Vec<(usize, MarkerKind, usize)> = spans
            .iter()
            .enumerate()
            .flat_map(|(idx, span)| {
                [
                    (span.start, MarkerKind::Open, idx),
                    (span.end, MarkerKind::Close, idx),
                ]
            })
            .collect();

        markers.sort_by(|a, b| {
            let (left, right) = (&spans[a.2], &spans[b.2]);
            a.0.cmp(&b.0).then(a.1.cmp(&b.1)).then_with(|| match a.1 {
                MarkerKind::Open => right.end.cmp(&left.end).then(right.pass.cmp(&left.pass)),
                MarkerKind::Close => right.start.cmp(&left.start).then(left.pass.cmp(&right.pass)),
            })
        });

        let mut out = String::with_capacity(self.text.len() + spans.len() * 40);
        let mut cursor = 0;
        for (pos, kind, idx) in markers {
            out.push_str(&self.text[cursor..pos]);
            cursor = pos;
            match kind {
                MarkerKind::Open => out.push_str(&options.open_marker(spans[idx].category)),
                MarkerKind::Close => out.push_str(CLOSE_MARKER),
            }
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}
