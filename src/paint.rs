//! Token painter
//!
//! Turns source text into HTML where comments, strings, keywords, numbers,
//! annotations, class names, tag names and attribute names are wrapped in
//! `<span class="token CATEGORY">`.
//!
//! The flow for one call:
//!
//! 1. [`escape`] the source (`&`, `<`, `>`, `"`), exactly once;
//! 2. look up the [`LanguageProfile`] for the tag (none means no passes);
//! 3. fold [`wrap_pass`] over the buffer, one pass per rule, in table order;
//! 4. render the spans as markup.
//!
//! Passes never wrap a match that starts inside an earlier pass's span, and
//! never add or remove text: stripping the markers from the output gives back
//! the escaped source. The one known overlap is the Java class-name pass
//! running before the comment passes, which leaves `Foo` in `// Foo` wrapped
//! as a class name inside the comment.

pub mod buffer;
pub mod category;
pub mod driver;
pub mod escape;
pub mod extract;
pub mod languages;
pub mod rule;
pub mod span;
pub mod wrapper;

pub use buffer::{PaintBuffer, RenderOptions};
pub use category::Category;
pub use driver::Painter;
pub use escape::{escape, unescape};
pub use extract::{plain_text, strip_markup};
pub use languages::{LanguageProfile, LanguageRegistry};
pub use rule::Rule;
pub use span::{Span, SpanSet};
pub use wrapper::{scan, wrap_pass, PassStats};

use once_cell::sync::Lazy;

static DEFAULT_PAINTER: Lazy<Painter> = Lazy::new(Painter::new);

/// Paint `source` with the built-in languages and the `token` class prefix
pub fn paint(source: &str, language: &str) -> String {
    DEFAULT_PAINTER.paint(source, language)
}

/// Paint the contents of a code block, if there is one
///
/// A missing block is a no-op.
pub fn paint_block(block: Option<&str>, language: &str) -> Option<String> {
    block.map(|source| paint(source, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_empty() {
        assert_eq!(paint("", "java"), "");
    }

    #[test]
    fn test_paint_block_absent_is_noop() {
        assert_eq!(paint_block(None, "java"), None);
        assert_eq!(
            paint_block(Some("int"), "java").as_deref(),
            Some("<span class=\"token keyword\">int</span>")
        );
    }
}
