//! Property-based tests for the painter
//!
//! - stripping the wraps gives back the escaped source
//! - the plain text of painted output is the original source
//! - painting is deterministic
//! - spans never overlap, except for comments enclosing spans that an
//!   earlier pass put inside the comment text

use codepaint::paint::{escape, paint, plain_text, strip_markup, Category, Painter};
use proptest::prelude::*;

const LANGUAGES: &[&str] = &["java", "groovy", "xml", "html", "text"];

fn language_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LANGUAGES)
}

/// Java-ish tokens whose quotes and comments are each self-contained
fn java_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z0-9]{0,6}",
        "[A-Z][a-zA-Z0-9]{1,6}",
        "[0-9]{1,4}(\\.[0-9]{1,2})?[Lfd]?",
        "@[A-Z][a-z]{1,5}",
        "\"[a-zA-Z0-9 ]{0,6}\"",
        "'[a-z]'",
        "/\\* [A-Za-z ]{0,10} \\*/",
        "// [A-Za-z ]{0,10}\n",
        prop::sample::select(vec![
            "public", "class", "int", "return", "new", "null", "{", "}", "(", ")", ";", "=", "<",
            ">", "&",
        ])
        .prop_map(str::to_string),
    ]
}

fn java_source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(java_token_strategy(), 0..30).prop_map(|tokens| tokens.join(" "))
}

fn markup_source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "<[a-z]{1,5}>",
            "</[a-z]{1,5}>",
            "<[a-z]{1,5} [a-z]{1,5}=\"[a-z0-9 ]{0,5}\"/>",
            "<!-- [a-z ]{0,10} -->",
            "[a-zA-Z ]{1,8}",
        ],
        0..20,
    )
    .prop_map(|parts| parts.join(""))
}

proptest! {
    #[test]
    fn test_content_is_preserved(source in "\\PC*", language in language_strategy()) {
        let painted = paint(&source, language);
        prop_assert_eq!(strip_markup(&painted), escape(&source));
        prop_assert_eq!(plain_text(&painted), source);
    }

    #[test]
    fn test_painting_is_deterministic(source in "\\PC*", language in language_strategy()) {
        prop_assert_eq!(paint(&source, language), paint(&source, language));
    }

    #[test]
    fn test_java_spans_do_not_overlap(source in java_source_strategy()) {
        let buffer = Painter::new().paint_buffer(&source, "java");
        let spans = buffer.spans();
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                let nested_in_comment = (a.category == Category::Comment && a.encloses(b))
                    || (b.category == Category::Comment && b.encloses(a));
                prop_assert!(
                    a.is_disjoint(b) || nested_in_comment,
                    "{:?} overlaps {:?} in {:?}", a, b, source
                );
            }
        }
    }

    #[test]
    fn test_markup_spans_are_disjoint(source in markup_source_strategy()) {
        let buffer = Painter::new().paint_buffer(&source, "xml");
        let spans = buffer.spans();
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                prop_assert!(a.is_disjoint(b), "{:?} overlaps {:?} in {:?}", a, b, source);
            }
        }
    }

    #[test]
    fn test_spans_lie_within_text(source in "\\PC*", language in language_strategy()) {
        let buffer = Painter::new().paint_buffer(&source, language);
        for span in buffer.spans() {
            prop_assert!(!span.is_empty());
            prop_assert!(span.end <= buffer.text().len());
            prop_assert!(buffer.text().is_char_boundary(span.start));
            prop_assert!(buffer.text().is_char_boundary(span.end));
        }
    }
}

#[test]
fn test_paint_empty_java() {
    assert_eq!(paint("", "java"), "");
}
