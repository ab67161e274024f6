//! Java and Groovy
//!
//! Pass order: strings, keywords, numbers, annotations, class names, then
//! comments. Comments run last so their text is never re-scanned by the
//! earlier passes; a capitalized word inside a comment is still wrapped as
//! a class name first and ends up nested inside the comment wrap.

use crate::paint::category::Category;
use crate::paint::languages::LanguageProfile;
use crate::paint::rule::Rule;
use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved words and literals wrapped as keywords
pub const KEYWORDS: &[&str] = &[
    "public", "private", "protected", "static", "final", "class", "extends", "implements", "new",
    "return", "import", "package", "throws", "void", "long", "int", "double", "boolean", "byte",
    "char", "float", "short", "if", "else", "for", "while", "switch", "case", "break", "default",
    "try", "catch", "finally", "throw", "enum", "interface", "true", "false", "null", "super",
    "this", "var",
];

// Word boundaries are ASCII-only and string bodies stop at `\r` as well
// as `\n`, so a non-ASCII letter next to a keyword does not hide it.

// Escaping turns every `"` into `&quot;`, so string literals are matched on
// the entity. A raw `"` pattern would never fire.
static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&quot;[^\r\n]*?&quot;").unwrap());

static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[^\r\n]*?'").unwrap());

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?-u:\b)({})(?-u:\b)", KEYWORDS.join("|"))).unwrap()
});

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)([0-9]+(\.[0-9]+)?(L|f|d)?)(?-u:\b)").unwrap());

static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[A-Za-z_][A-Za-z0-9_]*").unwrap());

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[A-Z][a-zA-Z0-9_]+(?-u:\b)").unwrap());

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\r\n]*").unwrap());

/// Whether `word` is one of [`KEYWORDS`]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "java",
        &["java", "groovy"],
        vec![
            Rule::whole("strings", DOUBLE_QUOTED.clone(), Category::String),
            Rule::whole("chars", SINGLE_QUOTED.clone(), Category::String),
            Rule::whole("keywords", KEYWORD.clone(), Category::Keyword),
            Rule::whole("numbers", NUMBER.clone(), Category::Number),
            Rule::whole("annotations", ANNOTATION.clone(), Category::Annotation),
            // Keyword matches are already inside a span by now
            Rule::whole("class names", CLASS_NAME.clone(), Category::ClassName)
                .skip_when(is_keyword),
            Rule::whole("block comments", BLOCK_COMMENT.clone(), Category::Comment),
            Rule::whole("line comments", LINE_COMMENT.clone(), Category::Comment),
        ],
    )
}
