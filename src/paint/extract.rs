//! Text extraction from painted markup
//!
//! What a copy button needs: the text of a painted block without its wraps.
//! Escaped text never contains a raw `<`, so every `<span ...>` or
//! `</span>` in painted output is a wrap marker.

use super::escape::unescape;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?span\b[^>]*>").unwrap());

/// Remove every wrap marker, leaving the escaped text
pub fn strip_markup(painted: &str) -> String {
    MARKER.replace_all(painted, "").into_owned()
}

/// Remove every wrap marker and undo the escaping
pub fn plain_text(painted: &str) -> String {
    unescape(&strip_markup(painted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_keeps_escapes() {
        let painted = "&lt;<span class=\"token tag\">a</span>&gt;";
        assert_eq!(strip_markup(painted), "&lt;a&gt;");
    }

    #[test]
    fn test_strip_nested_markup() {
        let painted =
            "<span class=\"token comment\">// <span class=\"token class-name\">Foo</span></span>";
        assert_eq!(strip_markup(painted), "// Foo");
    }

    #[test]
    fn test_plain_text_unescapes() {
        let painted = "<span class=\"token string\">&quot;a &amp; b&quot;</span>";
        assert_eq!(plain_text(painted), "\"a & b\"");
    }

    #[test]
    fn test_plain_text_without_markup() {
        assert_eq!(plain_text("x = 1;"), "x = 1;");
    }
}
